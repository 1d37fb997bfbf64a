//! The Replicon service client.

use crate::{config::RepliconConfig, error::Result, http::Transport};

/// Client for one Replicon tenant.
///
/// Holds the tenant's credentials and a transport built once at construction.
/// Every operation is a single POST and nothing is cached between calls, so a
/// client can be cloned and shared freely.
#[derive(Clone, Debug)]
pub struct RepliconClient {
    pub(crate) transport: Transport,
}

impl RepliconClient {
    pub fn new(config: &RepliconConfig) -> Result<Self> {
        Ok(Self {
            transport: Transport::new(config)?,
        })
    }

    /// Builds a client from the `REPLICON_*` environment variables.
    pub fn from_env() -> Result<Self> {
        Self::new(&RepliconConfig::from_env()?)
    }

    /// `{host}/{company}/services`, the root every operation path is appended to.
    pub fn base_service_url(&self) -> &str {
        self.transport.base_url()
    }
}
