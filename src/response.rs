//! Response wrapper that preserves both parsed data and raw response details.
//!
//! The [`Response`] type wraps the deserialized response data along with
//! metadata about the HTTP exchange, making it easy to access timing
//! information, headers, and the raw response body for debugging.

use http::{HeaderMap, StatusCode};
use std::time::Duration;

/// A wrapper around a successful Scheduler API response.
///
/// This type provides both the deserialized response data and metadata about
/// the HTTP round trip, including latency, status code, headers, and the raw
/// response body.
///
/// # Type Parameters
///
/// * `T` - The type of the deserialized response data
///
/// # Examples
///
/// ```no_run
/// use cf_scheduler::SchedulerClient;
/// use cf_scheduler::calls::ListCallsRequest;
///
/// # async fn example() -> Result<(), cf_scheduler::Error> {
/// let client = SchedulerClient::builder()
///     .base_url("https://scheduler.sys.example.com")?
///     .build()?;
///
/// let response = client.calls().list(&ListCallsRequest::default()).await?;
///
/// println!("Fetched {} calls", response.data.resources.len());
/// println!("Request took {:?}", response.latency);
/// println!("Status: {}", response.status);
///
/// // Access raw response for debugging
/// if response.latency > std::time::Duration::from_secs(1) {
///     println!("Slow response body: {}", response.raw_body);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Response<T> {
    /// The deserialized response data.
    ///
    /// For delete operations this is `()`, since the Scheduler responds with
    /// 204 No Content.
    pub data: T,

    /// The raw response body as a string.
    pub raw_body: String,

    /// The HTTP status code of the response.
    pub status: StatusCode,

    /// The response headers.
    pub headers: HeaderMap,

    /// The latency of the request, measured from send until the full body
    /// was received.
    pub latency: Duration,
}

impl<T> Response<T> {
    /// Creates a new `Response`.
    ///
    /// This is typically called internally by the client after successfully
    /// deserializing a response body.
    pub fn new(
        data: T,
        raw_body: String,
        status: StatusCode,
        headers: HeaderMap,
        latency: Duration,
    ) -> Self {
        Self {
            data,
            raw_body,
            status,
            headers,
            latency,
        }
    }

    /// Maps the response data to a different type using the provided
    /// function, preserving the metadata.
    ///
    /// # Examples
    ///
    /// ```
    /// # use cf_scheduler::Response;
    /// # use http::{HeaderMap, StatusCode};
    /// # use std::time::Duration;
    /// let response = Response::new(
    ///     42,
    ///     "42".to_string(),
    ///     StatusCode::OK,
    ///     HeaderMap::new(),
    ///     Duration::from_millis(100),
    /// );
    ///
    /// let string_response = response.map(|n| n.to_string());
    /// assert_eq!(string_response.data, "42");
    /// ```
    pub fn map<U, F>(self, f: F) -> Response<U>
    where
        F: FnOnce(T) -> U,
    {
        Response {
            data: f(self.data),
            raw_body: self.raw_body,
            status: self.status,
            headers: self.headers,
            latency: self.latency,
        }
    }

    /// Returns a header value by name, if present and valid UTF-8.
    ///
    /// # Examples
    ///
    /// ```
    /// # use cf_scheduler::Response;
    /// # use http::{HeaderMap, HeaderValue, StatusCode};
    /// # use std::time::Duration;
    /// let mut headers = HeaderMap::new();
    /// headers.insert("content-type", HeaderValue::from_static("application/json"));
    ///
    /// let response = Response::new(
    ///     (),
    ///     String::new(),
    ///     StatusCode::OK,
    ///     headers,
    ///     Duration::from_millis(100),
    /// );
    ///
    /// assert_eq!(
    ///     response.header("content-type").unwrap(),
    ///     "application/json"
    /// );
    /// ```
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name)?.to_str().ok()
    }
}

impl<T> AsRef<T> for Response<T> {
    fn as_ref(&self) -> &T {
        &self.data
    }
}

impl<T> std::ops::Deref for Response<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.data
    }
}
