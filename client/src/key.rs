//! Mapping from content identifiers to storage keys and request URLs.
//!
//! The storage key of a block is the multibase base58btc encoding (Bitcoin
//! alphabet, `z` prefix) of the raw multihash bytes of its CID.
//! Version and codec are not part of the key, so a CIDv0 and any CIDv1
//! sharing the same multihash address the same block. For sha2-256 the key
//! is the CIDv0 string form with a `z` in front (`zQm…`).

use cid::Cid;
use multibase::Base;
use multihash::Multihash;
use sha2::{Digest, Sha256};
use tracing::{instrument, Level};
use url::Url;

/// Multicodec code of sha2-256.
pub const SHA2_256: u64 = 0x12;

/// Returns the storage key for a multihash.
pub fn multihash_key(multihash: &Multihash<64>) -> String {
    multibase::encode(Base::Base58Btc, multihash.to_bytes())
}

/// Returns the storage key for the block addressed by `cid`.
#[instrument(level=Level::TRACE, skip_all, fields(block.cid=%cid), ret(Display))]
pub fn derive_block_key(cid: &Cid) -> String {
    multihash_key(cid.hash())
}

/// Returns the URL `get` and `has` requests for `cid` are sent to,
/// `/{key}` relative to the origin of `endpoint`.
pub fn derive_block_url(endpoint: &Url, cid: &Cid) -> Result<Url, url::ParseError> {
    endpoint.join(&format!("/{}", derive_block_key(cid)))
}

/// Returns the URL blocks are uploaded to, the root of `endpoint`.
pub fn derive_root_url(endpoint: &Url) -> Result<Url, url::ParseError> {
    endpoint.join("/")
}

/// Computes the sha2-256 multihash of `data`, the way the service derives
/// the identifier of an uploaded block.
pub fn sha256_multihash(data: &[u8]) -> Result<Multihash<64>, multihash::Error> {
    Multihash::wrap(SHA2_256, &Sha256::digest(data))
}
