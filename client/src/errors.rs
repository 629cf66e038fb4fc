use cid::Cid;
use http::StatusCode;
use thiserror::Error;

use crate::transport::TransportError;

/// The block operation a [Error::Remote] happened in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Get,
    Put,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Operation::Get => "get",
            Operation::Put => "put",
        })
    }
}

/// Errors related to communication with the block storage service.
///
/// A block that does not exist is not an error, [crate::blockservice::BlockService::get]
/// returns `Ok(None)` for it.
#[derive(Debug, Error)]
pub enum Error {
    /// The service answered with a non-success status.
    #[error("failed to {op} {cid}: server responded with status: {}", .status.as_u16())]
    Remote {
        op: Operation,
        cid: Cid,
        status: StatusCode,
        /// Response body text, captured for rejected puts.
        body: Option<String>,
    },

    /// Sending the request or receiving the response failed.
    #[error("transport error: {0}")]
    Transport(#[source] TransportError),

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("invalid url: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl Error {
    /// Returns the status code the service responded with, if any.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Error::Remote { status, .. } => Some(*status),
            _ => None,
        }
    }
}
