//! Connection settings for a Replicon tenant.
//!
//! Settings can be built in code or read from the environment:
//! - `REPLICON_COMPANY` (required): tenant / company name
//! - `REPLICON_USERNAME` (required): login name
//! - `REPLICON_PASSWORD` (required)
//! - `REPLICON_HOST`: host root, defaults to `https://na2.replicon.com`
//! - `REPLICON_TIMEOUT_SECS`: whole-request timeout applied by the transport

use std::{env, fmt, time::Duration};

use crate::error::{RepliconError, Result};

pub const DEFAULT_HOST: &str = "https://na2.replicon.com";

#[derive(Clone)]
pub struct RepliconConfig {
    company: String,
    username: String,
    password: String,
    host: String,
    timeout: Option<Duration>,
}

impl RepliconConfig {
    pub fn new(
        company: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            company: company.into(),
            username: username.into(),
            password: password.into(),
            host: DEFAULT_HOST.to_string(),
            timeout: None,
        }
    }

    /// Load settings from `REPLICON_*` environment variables.
    pub fn from_env() -> Result<Self> {
        let mut config = Self::new(
            required_var("REPLICON_COMPANY")?,
            required_var("REPLICON_USERNAME")?,
            required_var("REPLICON_PASSWORD")?,
        );

        if let Ok(host) = env::var("REPLICON_HOST") {
            config = config.with_host(host);
        }

        if let Ok(secs) = env::var("REPLICON_TIMEOUT_SECS") {
            let secs: u64 = secs.trim().parse().map_err(|e| {
                RepliconError::MissingConfig(format!("REPLICON_TIMEOUT_SECS is not a number: {e}"))
            })?;
            config = config.with_timeout(Duration::from_secs(secs));
        }

        Ok(config)
    }

    /// Point the client at another host root, e.g. a regional instance.
    #[must_use]
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into().trim_end_matches('/').to_string();
        self
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn company(&self) -> &str {
        &self.company
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub(crate) fn password(&self) -> &str {
        &self.password
    }

    pub const fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Root of all service endpoints: `{host}/{company, lower-cased}/services`.
    pub fn base_service_url(&self) -> String {
        format!("{}/{}/services", self.host, self.company.to_lowercase())
    }
}

// Keeps the password out of logs.
impl fmt::Debug for RepliconConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RepliconConfig")
            .field("company", &self.company)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("host", &self.host)
            .field("timeout", &self.timeout)
            .finish()
    }
}

fn required_var(name: &str) -> Result<String> {
    env::var(name).map_err(|e| RepliconError::MissingConfig(format!("{name} must be set: {e}")))
}
