use url::Url;

use super::BlockClient;
use crate::{transport::ReqwestTransport, BlockClientConfig, Error};

/// Constructs a new [BlockClient] talking to the endpoint at `uri` over the
/// network, like `https://minibus.web3.storage`.
///
/// Only `http` and `https` are supported. There's no way to pass headers in
/// the url, use [BlockClientConfig] and [BlockClient::from_config] to
/// authorize requests.
pub fn from_addr(uri: &str) -> Result<BlockClient<ReqwestTransport>, Error> {
    let url = Url::parse(uri)?;

    BlockClient::from_config(BlockClientConfig::try_from(url)?)
}
