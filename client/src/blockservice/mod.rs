use async_trait::async_trait;
use bytes::Bytes;
use cid::Cid;

use crate::Error;

mod client;
mod from_addr;


pub use self::client::BlockClient;
pub use self::from_addr::from_addr;

/// The three operations a block store offers, keyed by [Cid].
///
/// Each call is independent, implementations hold no state across calls
/// that would require callers to synchronize. Bounding concurrency,
/// retrying or batching is up to the caller.
#[async_trait]
pub trait BlockService: Send + Sync {
    /// Retrieve a block.
    /// Returns `Ok(None)` if the store knows it doesn't have the block, which
    /// is distinct from failing to find out.
    async fn get(&self, cid: &Cid) -> Result<Option<Bytes>, Error>;

    /// Check whether the store has a block.
    async fn has(&self, cid: &Cid) -> Result<bool, Error>;

    /// Store a block. The store derives the identifier from the data itself,
    /// `cid` is not checked against it.
    async fn put(&self, cid: &Cid, data: Bytes) -> Result<(), Error>;
}

#[async_trait]
impl<A> BlockService for A
where
    A: AsRef<dyn BlockService> + Send + Sync,
{
    async fn get(&self, cid: &Cid) -> Result<Option<Bytes>, Error> {
        self.as_ref().get(cid).await
    }

    async fn has(&self, cid: &Cid) -> Result<bool, Error> {
        self.as_ref().has(cid).await
    }

    async fn put(&self, cid: &Cid, data: Bytes) -> Result<(), Error> {
        self.as_ref().put(cid, data).await
    }
}
