mod config;
mod errors;

pub mod blockservice;
pub mod fixtures;
pub mod key;
pub mod transport;

pub use cid::Cid;
pub use config::{BlockClientConfig, DEFAULT_ENDPOINT};
pub use errors::{Error, Operation};

// Used by the rstest_reuse templates in the tests.
#[cfg(test)]
use rstest_reuse;
