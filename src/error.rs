//! Error types for Scheduler API calls.
//!
//! Every failure path preserves the raw response data when one exists. Server
//! errors come in two flavors: [`Error::Api`] when the body matches the
//! Scheduler's structured error payload, and [`Error::Unknown`] when it does
//! not, in which case the body text is carried verbatim.

use http::StatusCode;
use serde::{Deserialize, Serialize};

/// A single resource/message pair from a structured Scheduler error payload.
///
/// The Scheduler reports validation failures as a list of these entries, each
/// naming the offending resource and a human-readable message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchedulerError {
    /// The resource the error applies to (e.g. `"scheduleRequest"`).
    pub resource: String,

    /// The human-readable error message.
    pub message: String,
}

/// The structured error body returned by the Scheduler on 4xx/5xx responses.
///
/// Both fields are required; a body missing either one is not considered
/// structured and routes to [`Error::Unknown`] instead.
#[derive(Debug, Deserialize)]
struct ErrorPayload {
    errors: Vec<SchedulerError>,
    description: String,
}

/// The main error type for Scheduler API calls.
///
/// # Examples
///
/// ```no_run
/// use cf_scheduler::{Error, SchedulerClient};
/// use cf_scheduler::calls::ListCallsRequest;
///
/// # async fn example() -> Result<(), Error> {
/// let client = SchedulerClient::builder()
///     .base_url("https://scheduler.sys.example.com")?
///     .build()?;
///
/// match client.calls().list(&ListCallsRequest::default()).await {
///     Ok(response) => println!("{} calls", response.data.resources.len()),
///     Err(Error::Api { status, description, errors }) => {
///         eprintln!("Scheduler rejected the request ({}): {}", status, description);
///         for error in errors {
///             eprintln!("  {}: {}", error.resource, error.message);
///         }
///     }
///     Err(Error::Unknown { status, payload }) => {
///         eprintln!("Unrecognized error response {}: {}", status, payload);
///     }
///     Err(e) => eprintln!("Other error: {}", e),
/// }
/// # Ok(())
/// # }
/// ```
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// A network-level error occurred (connection failed, DNS lookup failed,
    /// timeout, TLS failure, etc.).
    ///
    /// This wraps the underlying `reqwest::Error` and indicates problems at
    /// the transport layer rather than the HTTP protocol layer. Nothing is
    /// retried or suppressed; the error propagates unchanged.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The Scheduler returned a non-2xx status with a structured error body.
    ///
    /// # Fields
    ///
    /// * `status` - The HTTP status code
    /// * `description` - The top-level description from the payload
    /// * `errors` - The itemized resource/message entries
    #[error("{description}")]
    Api {
        /// The HTTP status code
        status: StatusCode,
        /// The top-level error description
        description: String,
        /// The itemized validation errors
        errors: Vec<SchedulerError>,
    },

    /// The Scheduler returned a non-2xx status with a body that does not
    /// match the structured error payload.
    ///
    /// The body text is preserved verbatim, not re-serialized.
    #[error("Unknown scheduler error (status {status}): {payload}")]
    Unknown {
        /// The HTTP status code
        status: StatusCode,
        /// The raw response body
        payload: String,
    },

    /// Failed to deserialize a successful response body into the expected
    /// type.
    ///
    /// Preserves both the raw response text and the serde error message.
    #[error("Failed to deserialize response (status {status}): {serde_error}")]
    DeserializationFailed {
        /// The raw response body that failed to deserialize
        raw_response: String,
        /// The serde error message
        serde_error: String,
        /// The HTTP status code
        status: StatusCode,
    },

    /// Failed to serialize the request body to JSON.
    #[error("Failed to serialize request: {0}")]
    SerializationFailed(String),

    /// Invalid configuration was provided, such as an invalid header name or
    /// a builder missing its base URL.
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// An invalid URL was provided.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl Error {
    /// Returns the HTTP status code if this error carries one.
    ///
    /// Returns `Some(status)` for `Api`, `Unknown`, and
    /// `DeserializationFailed` errors, `None` for other error types.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Error::Api { status, .. } => Some(*status),
            Error::Unknown { status, .. } => Some(*status),
            Error::DeserializationFailed { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns the raw response body if this error preserves one.
    pub fn payload(&self) -> Option<&str> {
        match self {
            Error::Unknown { payload, .. } => Some(payload),
            Error::DeserializationFailed { raw_response, .. } => Some(raw_response),
            _ => None,
        }
    }

    /// Returns the itemized validation errors for [`Error::Api`], `None`
    /// otherwise.
    pub fn errors(&self) -> Option<&[SchedulerError]> {
        match self {
            Error::Api { errors, .. } => Some(errors),
            _ => None,
        }
    }
}

/// Maps a non-2xx response body to the appropriate error.
///
/// A body that parses as the structured payload (both `errors` and
/// `description` present) becomes [`Error::Api`]; anything else, including
/// malformed JSON, becomes [`Error::Unknown`] carrying the body verbatim.
pub(crate) fn map_error_payload(status: StatusCode, body: String) -> Error {
    match serde_json::from_str::<ErrorPayload>(&body) {
        Ok(payload) => Error::Api {
            status,
            description: payload.description,
            errors: payload.errors,
        },
        Err(_) => Error::Unknown {
            status,
            payload: body,
        },
    }
}

/// A specialized `Result` type for Scheduler API calls.
///
/// This is a convenience alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    const STRUCTURED_BODY: &str = r#"{
        "description": "Validation of resource failed.",
        "errors": [
            {
                "resource": "scheduleRequest",
                "message": "The cron expression 'a b c d e f' is invalid."
            }
        ]
    }"#;

    #[test]
    fn structured_payload_maps_to_api_error() {
        let error = map_error_payload(StatusCode::BAD_REQUEST, STRUCTURED_BODY.to_string());

        match error {
            Error::Api {
                status,
                description,
                errors,
            } => {
                assert_eq!(status, StatusCode::BAD_REQUEST);
                assert_eq!(description, "Validation of resource failed.");
                assert_eq!(
                    errors,
                    vec![SchedulerError {
                        resource: "scheduleRequest".to_string(),
                        message: "The cron expression 'a b c d e f' is invalid.".to_string(),
                    }]
                );
            }
            other => panic!("Expected Api error, got {:?}", other),
        }
    }

    #[test]
    fn structured_payload_keeps_server_error_status() {
        let error =
            map_error_payload(StatusCode::INTERNAL_SERVER_ERROR, STRUCTURED_BODY.to_string());

        assert_eq!(error.status(), Some(StatusCode::INTERNAL_SERVER_ERROR));
        assert_eq!(error.to_string(), "Validation of resource failed.");
        assert_eq!(error.errors().map(|errors| errors.len()), Some(1));
    }

    #[test]
    fn unstructured_payload_maps_to_unknown_error() {
        let error =
            map_error_payload(StatusCode::BAD_REQUEST, "Invalid Error Response".to_string());

        match error {
            Error::Unknown { status, payload } => {
                assert_eq!(status, StatusCode::BAD_REQUEST);
                assert_eq!(payload, "Invalid Error Response");
            }
            other => panic!("Expected Unknown error, got {:?}", other),
        }
    }

    #[test]
    fn payload_missing_required_fields_maps_to_unknown_error() {
        // Valid JSON, but no "errors" list.
        let body = r#"{"description": "Validation of resource failed."}"#;
        let error = map_error_payload(StatusCode::UNPROCESSABLE_ENTITY, body.to_string());

        match error {
            Error::Unknown { status, payload } => {
                assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
                assert_eq!(payload, body);
            }
            other => panic!("Expected Unknown error, got {:?}", other),
        }
    }

    #[test]
    fn empty_body_maps_to_unknown_error() {
        let error = map_error_payload(StatusCode::BAD_GATEWAY, String::new());

        assert_eq!(error.status(), Some(StatusCode::BAD_GATEWAY));
        assert_eq!(error.payload(), Some(""));
    }

    #[test]
    fn status_is_none_for_configuration_errors() {
        let error = Error::ConfigurationError("Base URL is required".to_string());

        assert_eq!(error.status(), None);
        assert_eq!(error.payload(), None);
        assert_eq!(error.errors(), None);
    }
}
