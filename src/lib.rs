//! # cf-scheduler - a typed client for the Cloud Foundry Scheduler API
//!
//! `cf-scheduler` is a thin async binding for the Scheduler API's `calls`
//! and `jobs` resources, built on top of `reqwest`. Each operation maps
//! one-to-one to a REST endpoint: request objects serialize to JSON,
//! responses deserialize into typed result objects, and HTTP error payloads
//! map to domain errors.
//!
//! There is no scheduling logic here and no retry machinery; every operation
//! is a single best-effort round trip, and every failure surfaces to the
//! caller.
//!
//! ## Quick Start
//!
//! ```no_run
//! use cf_scheduler::SchedulerClient;
//! use cf_scheduler::calls::{CreateCallRequest, ListCallsRequest};
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), cf_scheduler::Error> {
//!     let client = SchedulerClient::builder()
//!         .base_url("https://scheduler.sys.example.com")?
//!         .default_header("Authorization", "bearer TOKEN")?
//!         .timeout(Duration::from_secs(30))
//!         .build()?;
//!
//!     // Create a call
//!     let created = client
//!         .calls()
//!         .create(&CreateCallRequest {
//!             application_id: "app-guid".to_string(),
//!             authorization_header: "bearer CALL-TOKEN".to_string(),
//!             name: "nightly-report".to_string(),
//!             url: "https://example.com/report".to_string(),
//!         })
//!         .await?;
//!     println!("Created call {} at {}", created.data.id, created.data.created_at);
//!
//!     // List calls in a space
//!     let page = client
//!         .calls()
//!         .list(&ListCallsRequest {
//!             space_id: Some("space-guid".to_string()),
//!             ..Default::default()
//!         })
//!         .await?;
//!     println!(
//!         "{} of {} calls on this page",
//!         page.data.resources.len(),
//!         page.data.pagination.total_results
//!     );
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Non-2xx responses are inspected before anything is deserialized. A body
//! matching the Scheduler's structured error payload (`errors` entries plus
//! a `description`) becomes [`Error::Api`]; anything else becomes
//! [`Error::Unknown`] carrying the raw body verbatim. Transport failures
//! propagate unchanged as [`Error::Network`].
//!
//! ```no_run
//! use cf_scheduler::{Error, SchedulerClient};
//! use cf_scheduler::calls::CreateCallRequest;
//!
//! # async fn example(client: SchedulerClient, request: CreateCallRequest) {
//! match client.calls().create(&request).await {
//!     Ok(response) => println!("Created call {}", response.data.id),
//!     Err(Error::Api { status, description, errors }) => {
//!         eprintln!("Rejected ({}): {}", status, description);
//!         for error in errors {
//!             eprintln!("  {}: {}", error.resource, error.message);
//!         }
//!     }
//!     Err(Error::Unknown { status, payload }) => {
//!         eprintln!("Unrecognized error ({}): {}", status, payload);
//!     }
//!     Err(e) => eprintln!("Transport error: {}", e),
//! }
//! # }
//! ```
//!
//! ## Scope
//!
//! Authentication token acquisition is out of scope: supply the
//! `Authorization` header through
//! [`SchedulerClientBuilder::default_header`]. Connection pooling, TLS, and
//! cancellation follow `reqwest`'s semantics.

pub mod calls;
mod client;
mod error;
pub mod jobs;
pub mod metadata;
pub mod pagination;
mod response;

pub use client::{SchedulerClient, SchedulerClientBuilder};
pub use error::{Error, Result, SchedulerError};
pub use response::Response;
