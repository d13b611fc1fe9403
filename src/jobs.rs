//! The `/jobs` resource: commands the Scheduler runs inside an application's
//! container.

use crate::{metadata::RequestMetadata, Response, Result, SchedulerClient};
use http::Method;
use serde::{Deserialize, Serialize};

/// Request to create a job for an application.
///
/// As with calls, the owning application id is serialized into the body and
/// mirrored into the `app_guid` query parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateJobRequest {
    /// The id of the application the job belongs to.
    pub application_id: String,

    /// The command the Scheduler runs.
    pub command: String,

    /// The name of the job.
    pub name: String,
}

/// A job resource as returned by the Scheduler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    /// The id of the application the job belongs to.
    pub application_id: String,

    /// The command the Scheduler runs.
    pub command: String,

    /// When the job was created.
    pub created_at: String,

    /// The server-assigned id of the job.
    pub id: String,

    /// The name of the job.
    pub name: String,

    /// The id of the space the owning application lives in.
    pub space_id: String,

    /// When the job was last updated.
    pub updated_at: String,
}

/// Response to a create-job request.
pub type CreateJobResponse = Job;

/// Client façade for the `/jobs` resource.
///
/// Obtained from [`SchedulerClient::jobs`].
#[derive(Clone)]
pub struct Jobs {
    client: SchedulerClient,
}

impl Jobs {
    pub(crate) fn new(client: SchedulerClient) -> Self {
        Self { client }
    }

    /// Creates a job.
    ///
    /// Issues `POST /jobs?app_guid={application_id}` with the request
    /// serialized as the JSON body.
    pub async fn create(&self, request: &CreateJobRequest) -> Result<Response<CreateJobResponse>> {
        let metadata = RequestMetadata::new(Method::POST, "/jobs")
            .with_query_param("app_guid", &request.application_id);
        self.client.call(metadata, Some(request)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_job_request_serializes_with_camel_case_keys() {
        let request = CreateJobRequest {
            application_id: "test-application-id".to_string(),
            command: "rake reports:run".to_string(),
            name: "nightly-report".to_string(),
        };

        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "applicationId": "test-application-id",
                "command": "rake reports:run",
                "name": "nightly-report"
            })
        );
    }
}
