//! The `/calls` resource: HTTP calls the Scheduler executes on a schedule or
//! on demand.

use crate::{metadata::RequestMetadata, Response, Result, SchedulerClient};
use crate::pagination::Pagination;
use http::Method;
use serde::{Deserialize, Serialize};

/// Request to create a call for an application.
///
/// The owning application id is serialized into the body and mirrored into
/// the `app_guid` query parameter, matching the Scheduler's recorded
/// interaction shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCallRequest {
    /// The id of the application the call belongs to.
    pub application_id: String,

    /// The `Authorization` header the Scheduler sends when it executes the
    /// call.
    pub authorization_header: String,

    /// The name of the call.
    pub name: String,

    /// The URL the Scheduler invokes.
    pub url: String,
}

/// A call resource as returned by the Scheduler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Call {
    /// The id of the application the call belongs to.
    pub application_id: String,

    /// The `Authorization` header the Scheduler sends when it executes the
    /// call.
    pub authorization_header: String,

    /// When the call was created.
    pub created_at: String,

    /// The server-assigned id of the call.
    pub id: String,

    /// The name of the call.
    pub name: String,

    /// The id of the space the owning application lives in.
    pub space_id: String,

    /// When the call was last updated.
    pub updated_at: String,

    /// The URL the Scheduler invokes.
    pub url: String,
}

/// Response to a create-call request.
pub type CreateCallResponse = Call;

/// A call entry in a list response.
pub type CallResource = Call;

/// Request to delete a call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteCallRequest {
    /// The id of the call to delete.
    pub call_id: String,
}

/// Request to list calls, optionally filtered by owning application or
/// space.
///
/// The two filters are mutually exclusive on the server side; set at most
/// one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListCallsRequest {
    /// Only list calls belonging to this application (`app_guid`).
    pub application_id: Option<String>,

    /// Only list calls belonging to applications in this space
    /// (`space_guid`).
    pub space_id: Option<String>,
}

/// A single page of calls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListCallsResponse {
    /// Pagination links and counts for this page.
    pub pagination: Pagination,

    /// The calls on this page.
    pub resources: Vec<CallResource>,
}

/// Client façade for the `/calls` resource.
///
/// Obtained from [`SchedulerClient::calls`]. Each operation is one HTTP
/// round trip; errors are mapped per the crate-level error taxonomy.
#[derive(Clone)]
pub struct Calls {
    client: SchedulerClient,
}

impl Calls {
    pub(crate) fn new(client: SchedulerClient) -> Self {
        Self { client }
    }

    /// Creates a call.
    ///
    /// Issues `POST /calls?app_guid={application_id}` with the request
    /// serialized as the JSON body.
    pub async fn create(&self, request: &CreateCallRequest) -> Result<Response<CreateCallResponse>> {
        let metadata = RequestMetadata::new(Method::POST, "/calls")
            .with_query_param("app_guid", &request.application_id);
        self.client.call(metadata, Some(request)).await
    }

    /// Deletes a call.
    ///
    /// Issues `DELETE /calls/{call_id}`; a 204 response completes with no
    /// payload.
    pub async fn delete(&self, request: &DeleteCallRequest) -> Result<Response<()>> {
        let metadata =
            RequestMetadata::new(Method::DELETE, format!("/calls/{}", request.call_id));
        self.client.call_no_content(metadata).await
    }

    /// Lists calls, one page at a time.
    ///
    /// Issues `GET /calls` with any configured filter encoded as a query
    /// parameter.
    pub async fn list(&self, request: &ListCallsRequest) -> Result<Response<ListCallsResponse>> {
        let mut metadata = RequestMetadata::new(Method::GET, "/calls");
        if let Some(application_id) = &request.application_id {
            metadata = metadata.with_query_param("app_guid", application_id);
        }
        if let Some(space_id) = &request.space_id {
            metadata = metadata.with_query_param("space_guid", space_id);
        }
        self.client.call::<(), _>(metadata, None).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_call_request_serializes_with_camel_case_keys() {
        let request = CreateCallRequest {
            application_id: "test-application-id".to_string(),
            authorization_header: "test-authorization-header".to_string(),
            name: "test-name".to_string(),
            url: "test-url".to_string(),
        };

        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "applicationId": "test-application-id",
                "authorizationHeader": "test-authorization-header",
                "name": "test-name",
                "url": "test-url"
            })
        );
    }

    #[test]
    fn call_deserializes_from_camel_case_keys() {
        let json = r#"{
            "applicationId": "test-application-id",
            "authorizationHeader": "test-authorization-header",
            "createdAt": "test-created-at",
            "id": "test-job-id",
            "name": "test-name",
            "spaceId": "test-space-id",
            "updatedAt": "test-updated-at",
            "url": "test-url"
        }"#;

        let call: Call = serde_json::from_str(json).unwrap();

        assert_eq!(call.id, "test-job-id");
        assert_eq!(call.space_id, "test-space-id");
        assert_eq!(call.created_at, "test-created-at");
        assert_eq!(call.updated_at, "test-updated-at");
    }
}
