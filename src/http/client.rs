//! Transport construction and the shared call path for every Replicon operation.
//!
//! This module provides:
//! - The reqwest client wrapped in reqwest-middleware, built once per `RepliconClient`
//! - Request tracing through reqwest-tracing with a Replicon-specific span
//! - `invoke`, the single POST-and-unwrap routine all operations go through

use http::Extensions;
use reqwest::{Request, Response, header::CONTENT_TYPE};
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware, Result as MiddlewareResult};
use reqwest_tracing::{
    ReqwestOtelSpanBackend, TracingMiddleware, default_on_request_end, reqwest_otel_span,
};
use serde::{Serialize, de::DeserializeOwned};
use tracing::{Span, debug, trace};

use crate::{
    config::RepliconConfig,
    error::{RepliconError, Result},
    http::auth::TenantBasicAuth,
    model::Envelope,
};

// Custom Tracing Backend for Reqwest. Only the body is recorded: the
// Authorization header is added before the request reaches this middleware.
#[allow(dead_code)]
struct RepliconTracing;

impl ReqwestOtelSpanBackend for RepliconTracing {
    fn on_request_start(req: &Request, _extension: &mut Extensions) -> Span {
        reqwest_otel_span!(
            name = "replicon-request",
            req,
            request_body = req.body().and_then(|b| b.as_bytes()).map(String::from_utf8_lossy).as_deref(),
        )
    }

    fn on_request_end(
        span: &Span,
        outcome: &MiddlewareResult<Response>,
        _extension: &mut Extensions,
    ) {
        default_on_request_end(span, outcome);
    }
}

/// HTTP plumbing shared by all operations of one client.
#[derive(Clone)]
pub struct Transport {
    client: ClientWithMiddleware,
    base_url: String,
}

impl std::fmt::Debug for Transport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Transport")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl Transport {
    pub fn new(config: &RepliconConfig) -> Result<Self> {
        let mut client_builder = reqwest::Client::builder();

        if let Some(timeout) = config.timeout() {
            client_builder = client_builder.timeout(timeout);
        }

        let client = ClientBuilder::new(client_builder.build()?)
            .with_init(TenantBasicAuth::new(config))
            .with(TracingMiddleware::<RepliconTracing>::new())
            .build();

        Ok(Self {
            client,
            base_url: config.base_service_url(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// POSTs `request` as JSON to `{base_url}/{path}` and unwraps the `d` envelope.
    ///
    /// # Returns
    /// * `Ok(Some(payload))` - the service answered with a payload
    /// * `Ok(None)` - the service answered successfully without one
    ///
    /// # Errors
    /// * `Http` / `HttpMiddleware` - the exchange itself failed
    /// * `Status` - any non-2xx answer
    /// * `Serialization` - the request could not be encoded or the body is not the expected JSON
    pub async fn invoke<Req, T>(&self, path: &str, request: &Req) -> Result<Option<T>>
    where
        Req: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let body = serde_json::to_string(request)?;
        self.send(path, body).await
    }

    /// Same as [`Transport::invoke`] for operations that take no parameters.
    /// These are sent with an empty body.
    pub async fn invoke_empty<T>(&self, path: &str) -> Result<Option<T>>
    where
        T: DeserializeOwned,
    {
        self.send(path, String::new()).await
    }

    async fn send<T>(&self, path: &str, body: String) -> Result<Option<T>>
    where
        T: DeserializeOwned,
    {
        let url = format!("{}/{path}", self.base_url);
        debug!(%url, "calling Replicon");

        let response = self
            .client
            .post(&url)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;
        trace!(%status, body = %text, "Replicon response");

        if !status.is_success() {
            return Err(RepliconError::Status { status, body: text });
        }

        // A bare `null` body carries no envelope at all; treat it like an empty one.
        let envelope: Option<Envelope<T>> = serde_json::from_str(&text)?;
        Ok(envelope.and_then(Envelope::into_inner))
    }
}
