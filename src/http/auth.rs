//! Basic authentication for every outgoing Replicon request.
//!
//! Replicon scopes credentials to a tenant by prefixing the login name with
//! the company: the header is `Basic base64("{company}\{username}:{password}")`.
//! The company is used exactly as configured here, while the URL path uses it
//! lower-cased.

use reqwest_middleware::{RequestBuilder, RequestInitialiser};

use crate::config::RepliconConfig;

pub struct TenantBasicAuth {
    login: String,
    password: String,
}

impl TenantBasicAuth {
    pub fn new(config: &RepliconConfig) -> Self {
        Self {
            login: format!("{}\\{}", config.company(), config.username()),
            password: config.password().to_string(),
        }
    }
}

impl RequestInitialiser for TenantBasicAuth {
    fn init(&self, req: RequestBuilder) -> RequestBuilder {
        req.basic_auth(&self.login, Some(&self.password))
    }
}
