use bytes::Bytes;
use cid::Cid;
use lazy_static::lazy_static;

use crate::key::sha256_multihash;

/// Multicodec code of raw binary blocks.
pub const RAW: u64 = 0x55;
/// Multicodec code of DAG-CBOR blocks.
pub const DAG_CBOR: u64 = 0x71;

pub const BLOCK_A_CONTENTS: &[u8] = b"TEST DATA 123";
pub const BLOCK_A_KEY: &str = "zQmcfwohhS5haon4BswNUFgUeBhs387HDv1jWRfR8ZJj7TK";

lazy_static! {
    pub static ref BLOCK_A: Bytes = Bytes::from_static(BLOCK_A_CONTENTS);
    pub static ref BLOCK_A_CID: Cid = Cid::new_v1(RAW, sha256_multihash(&BLOCK_A).unwrap());
    // Same multihash as BLOCK_A_CID, different version and codec.
    pub static ref BLOCK_A_CID_V0: Cid = Cid::new_v0(*BLOCK_A_CID.hash()).unwrap();
    pub static ref BLOCK_A_CID_DAG_CBOR: Cid = Cid::new_v1(DAG_CBOR, *BLOCK_A_CID.hash());

    // 1MB
    pub static ref BLOCK_B: Bytes = (0..255).collect::<Vec<u8>>().repeat(4 * 1024).into();
    pub static ref BLOCK_B_CID: Cid = Cid::new_v1(RAW, sha256_multihash(&BLOCK_B).unwrap());

    // Never stored anywhere.
    pub static ref UNKNOWN_CID: Cid =
        "bafybeiaavppux4mtydrzqvsptp573atks3qj26bnhx7mcne4wbvvze43b4".parse().unwrap();
}
