use rocket::{
    http::{ContentType, Status},
    response::Responder,
    Request, Response,
};
use serde_json::{json, Value};
use shared::CompletionError;
use std::io::Cursor;
use thiserror::Error;
use tracing::{debug, error};

use super::{extract::ExtractionError, request::ValidationError};

#[derive(Error, Debug)]
pub enum RecommendationError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
    #[error("Upstream call failed: {0}")]
    Upstream(#[from] CompletionError),
    #[error("Malformed upstream response: {0}")]
    MalformedResponse(#[from] ExtractionError),
}

impl RecommendationError {
    /// JSON body sent to the caller.
    pub fn body(&self) -> Value {
        match self {
            RecommendationError::Validation(ValidationError::MissingDescription) => {
                json!({ "error": "Description is required" })
            }
            RecommendationError::Validation(ValidationError::InvalidBody(details)) => {
                json!({ "error": "Invalid JSON body", "details": details })
            }
            RecommendationError::Upstream(CompletionError::Api { details, .. }) => {
                json!({ "error": "Upstream API error", "details": details })
            }
            RecommendationError::Upstream(e) => {
                json!({ "error": "Failed to generate recommendations", "details": e.to_string() })
            }
            RecommendationError::MalformedResponse(e) => {
                json!({ "error": "Malformed upstream response", "details": e.to_string() })
            }
        }
    }
}

impl From<RecommendationError> for Status {
    fn from(error: RecommendationError) -> Self {
        match error {
            RecommendationError::Validation(e) => {
                debug!("Rejected recommendation request: {e}");
                Status::BadRequest
            }
            RecommendationError::Upstream(e) => {
                error!("Upstream error: {:?}", e);
                Status::InternalServerError
            }
            RecommendationError::MalformedResponse(e) => {
                error!("Malformed upstream response: {:?}", e);
                Status::InternalServerError
            }
        }
    }
}

impl<'r> Responder<'r, 'static> for RecommendationError {
    fn respond_to(self, _: &'r Request<'_>) -> Result<Response<'static>, Status> {
        let body = self.body().to_string();
        let status = Status::from(self);
        Response::build()
            .status(status)
            .header(ContentType::JSON)
            .sized_body(body.len(), Cursor::new(body))
            .ok()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_validation_maps_to_bad_request() {
        let error = RecommendationError::from(ValidationError::MissingDescription);
        assert_eq!(error.body(), json!({ "error": "Description is required" }));
        assert_eq!(Status::from(error), Status::BadRequest);
    }

    #[test]
    fn test_upstream_api_error_carries_details() {
        let details = json!({ "error": { "code": "invalid_api_key" } });
        let error = RecommendationError::from(CompletionError::Api {
            status: Some(401),
            details: details.clone(),
        });
        assert_eq!(
            error.body(),
            json!({ "error": "Upstream API error", "details": details })
        );
        assert_eq!(Status::from(error), Status::InternalServerError);
    }

    #[test]
    fn test_malformed_response_maps_to_internal_error() {
        let error = RecommendationError::from(ExtractionError::NoJsonObject);
        assert_eq!(
            error.body(),
            json!({
                "error": "Malformed upstream response",
                "details": "Upstream response contains no JSON object"
            })
        );
        assert_eq!(Status::from(error), Status::InternalServerError);
    }
}
