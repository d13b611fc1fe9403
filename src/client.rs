//! HTTP client shared by the resource façades.
//!
//! The [`SchedulerClient`] type owns the connection pool and base
//! configuration. Use [`SchedulerClientBuilder`] to configure and create
//! clients, then [`SchedulerClient::calls`] and [`SchedulerClient::jobs`] to
//! reach the resource operations.

use crate::{
    calls::Calls, error, jobs::Jobs, metadata::RequestMetadata, Error, Response, Result,
};
use http::{HeaderMap, HeaderName, HeaderValue};
use serde::{de::DeserializeOwned, Serialize};
use std::sync::Arc;
use std::time::{Duration, Instant};
use url::Url;

/// A client for the Cloud Foundry Scheduler API.
///
/// The client is designed to be reused across requests: it maintains a
/// connection pool and configuration that applies to every call. Cloning is
/// cheap and clones share the same pool.
///
/// Each operation is a single best-effort round trip. There are no retries
/// and no local recovery; every failure surfaces to the caller as an
/// [`Error`].
///
/// # Examples
///
/// ```no_run
/// use cf_scheduler::SchedulerClient;
/// use cf_scheduler::calls::CreateCallRequest;
/// use std::time::Duration;
///
/// # async fn example() -> Result<(), cf_scheduler::Error> {
/// let client = SchedulerClient::builder()
///     .base_url("https://scheduler.sys.example.com")?
///     .default_header("Authorization", "bearer TOKEN")?
///     .timeout(Duration::from_secs(30))
///     .build()?;
///
/// let created = client
///     .calls()
///     .create(&CreateCallRequest {
///         application_id: "app-guid".to_string(),
///         authorization_header: "bearer CALL-TOKEN".to_string(),
///         name: "nightly-report".to_string(),
///         url: "https://example.com/report".to_string(),
///     })
///     .await?;
/// println!("Created call {}", created.data.id);
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct SchedulerClient {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    http_client: reqwest::Client,
    base_url: Url,
    default_headers: HeaderMap,
    timeout: Option<Duration>,
}

/// A fully-received HTTP response, body read into memory.
struct RawResponse {
    status: http::StatusCode,
    headers: HeaderMap,
    body: String,
    latency: Duration,
}

impl SchedulerClient {
    /// Creates a new `SchedulerClientBuilder` for configuring a client.
    pub fn builder() -> SchedulerClientBuilder {
        SchedulerClientBuilder::new()
    }

    /// Returns the façade for the `/calls` resource.
    pub fn calls(&self) -> Calls {
        Calls::new(self.clone())
    }

    /// Returns the façade for the `/jobs` resource.
    pub fn jobs(&self) -> Jobs {
        Jobs::new(self.clone())
    }

    /// Issues a request and deserializes the 2xx response body.
    ///
    /// Non-2xx responses are routed through the error payload mapper; a 2xx
    /// body that does not match `Res` becomes
    /// [`Error::DeserializationFailed`].
    pub(crate) async fn call<Req, Res>(
        &self,
        metadata: RequestMetadata,
        body: Option<&Req>,
    ) -> Result<Response<Res>>
    where
        Req: Serialize,
        Res: DeserializeOwned,
    {
        let raw = self.round_trip(&metadata, body).await?;
        let raw = check_status(raw)?;

        match serde_json::from_str::<Res>(&raw.body) {
            Ok(data) => Ok(Response::new(
                data,
                raw.body,
                raw.status,
                raw.headers,
                raw.latency,
            )),
            Err(e) => {
                tracing::error!(
                    error = %e,
                    raw_response = %raw.body,
                    "Failed to deserialize response"
                );

                Err(Error::DeserializationFailed {
                    raw_response: raw.body,
                    serde_error: e.to_string(),
                    status: raw.status,
                })
            }
        }
    }

    /// Issues a request whose success response carries no payload.
    ///
    /// Used for delete operations, where the Scheduler responds with 204 No
    /// Content. Error responses are mapped exactly as in [`Self::call`].
    pub(crate) async fn call_no_content(&self, metadata: RequestMetadata) -> Result<Response<()>> {
        let raw = self.round_trip::<()>(&metadata, None).await?;
        let raw = check_status(raw)?;

        Ok(Response::new(
            (),
            raw.body,
            raw.status,
            raw.headers,
            raw.latency,
        ))
    }

    /// Executes a single round trip and reads the full body into memory.
    async fn round_trip<Req>(
        &self,
        metadata: &RequestMetadata,
        body: Option<&Req>,
    ) -> Result<RawResponse>
    where
        Req: Serialize,
    {
        let mut url = self.inner.base_url.clone();
        url.set_path(&metadata.path);

        for (key, value) in &metadata.query_params {
            url.query_pairs_mut().append_pair(key, value);
        }

        tracing::debug!(
            method = %metadata.method,
            url = %url,
            "Executing HTTP request"
        );

        let mut request = self.inner.http_client.request(metadata.method.clone(), url);

        for (name, value) in &self.inner.default_headers {
            request = request.header(name, value);
        }

        for (name, value) in &metadata.headers {
            request = request.header(name, value);
        }

        if let Some(timeout) = self.inner.timeout {
            request = request.timeout(timeout);
        }

        if let Some(body) = body {
            let json = serde_json::to_value(body)
                .map_err(|e| Error::SerializationFailed(e.to_string()))?;
            request = request.json(&json);
        }

        let start = Instant::now();
        let response = request.send().await?;

        let status = response.status();
        let headers = response.headers().clone();
        // Bodies are small JSON documents; read fully before any mapping.
        let body = response.text().await?;
        let latency = start.elapsed();

        tracing::info!(
            status = status.as_u16(),
            latency_ms = latency.as_millis(),
            "Received HTTP response"
        );

        Ok(RawResponse {
            status,
            headers,
            body,
            latency,
        })
    }
}

/// Passes 2xx responses through unchanged; maps everything else to an error.
fn check_status(raw: RawResponse) -> Result<RawResponse> {
    if raw.status.is_success() {
        return Ok(raw);
    }

    if raw.status.is_client_error() {
        tracing::error!(
            status = raw.status.as_u16(),
            response = %raw.body,
            "Client error (4xx)"
        );
    } else if raw.status.is_server_error() {
        tracing::warn!(
            status = raw.status.as_u16(),
            response = %raw.body,
            "Server error (5xx)"
        );
    }

    Err(error::map_error_payload(raw.status, raw.body))
}

/// Builder for configuring and creating a [`SchedulerClient`].
///
/// # Examples
///
/// ```no_run
/// use cf_scheduler::SchedulerClientBuilder;
/// use std::time::Duration;
///
/// # async fn example() -> Result<(), cf_scheduler::Error> {
/// let client = SchedulerClientBuilder::new()
///     .base_url("https://scheduler.sys.example.com")?
///     .default_header("Authorization", "bearer TOKEN")?
///     .timeout(Duration::from_secs(30))
///     .build()?;
/// # Ok(())
/// # }
/// ```
pub struct SchedulerClientBuilder {
    base_url: Option<Url>,
    default_headers: HeaderMap,
    timeout: Option<Duration>,
}

impl SchedulerClientBuilder {
    /// Creates a new `SchedulerClientBuilder` with default settings.
    pub fn new() -> Self {
        Self {
            base_url: None,
            default_headers: HeaderMap::new(),
            timeout: None,
        }
    }

    /// Sets the base URL for all requests. Typically the Scheduler endpoint
    /// of the foundation, e.g. `https://scheduler.sys.example.com`.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid.
    pub fn base_url(mut self, url: impl AsRef<str>) -> Result<Self> {
        self.base_url = Some(Url::parse(url.as_ref())?);
        Ok(self)
    }

    /// Adds a default header included in every request.
    ///
    /// Token acquisition is out of scope for this client; supply the
    /// `Authorization` header here (or per request) yourself.
    ///
    /// # Errors
    ///
    /// Returns an error if the header name or value is invalid.
    pub fn default_header(mut self, name: impl AsRef<str>, value: impl AsRef<str>) -> Result<Self> {
        let name = HeaderName::try_from(name.as_ref())
            .map_err(|e| Error::ConfigurationError(format!("Invalid header name: {}", e)))?;
        let value = HeaderValue::try_from(value.as_ref())
            .map_err(|e| Error::ConfigurationError(format!("Invalid header value: {}", e)))?;
        self.default_headers.insert(name, value);
        Ok(self)
    }

    /// Sets the per-request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Builds the configured `SchedulerClient`.
    ///
    /// # Errors
    ///
    /// Returns an error if no base URL was provided or if the underlying
    /// HTTP client cannot be constructed.
    pub fn build(self) -> Result<SchedulerClient> {
        let base_url = self
            .base_url
            .ok_or_else(|| Error::ConfigurationError("Base URL is required".to_string()))?;

        let http_client = reqwest::Client::builder().build().map_err(|e| {
            Error::ConfigurationError(format!("Failed to build HTTP client: {}", e))
        })?;

        Ok(SchedulerClient {
            inner: Arc::new(ClientInner {
                http_client,
                base_url,
                default_headers: self.default_headers,
                timeout: self.timeout,
            }),
        })
    }
}

impl Default for SchedulerClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
