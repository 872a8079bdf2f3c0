use rocket::serde::json::Error as JsonError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ValidationError {
    #[error("Description is required")]
    MissingDescription,
    #[error("Invalid JSON body: {0}")]
    InvalidBody(String),
}

impl From<JsonError<'_>> for ValidationError {
    fn from(error: JsonError<'_>) -> Self {
        ValidationError::InvalidBody(error.to_string())
    }
}

#[derive(Serialize, Deserialize, Debug)]
pub struct RecommendationRequest {
    #[serde(default)]
    pub description: Option<String>,
}

impl RecommendationRequest {
    pub fn new(description: &str) -> Self {
        Self {
            description: Some(description.to_string()),
        }
    }

    /// Returns the description as sent, provided it is not blank.
    pub fn validate(self) -> Result<String, ValidationError> {
        match self.description {
            Some(description) if !description.trim().is_empty() => Ok(description),
            _ => Err(ValidationError::MissingDescription),
        }
    }
}

impl TryFrom<RecommendationRequest> for String {
    type Error = serde_json::Error;
    fn try_from(value: RecommendationRequest) -> Result<Self, Self::Error> {
        serde_json::to_string(&value)
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(r#"{"description": ""}"#)]
    #[case(r#"{"description": "   \n\t "}"#)]
    #[case(r#"{"description": null}"#)]
    #[case(r#"{}"#)]
    #[case(r#"{"prompt": "a cat walking in rain"}"#)]
    fn test_blank_description_is_rejected(#[case] body: &str) {
        let request: RecommendationRequest = serde_json::from_str(body).unwrap();
        assert_eq!(request.validate(), Err(ValidationError::MissingDescription));
    }

    #[test]
    fn test_description_is_kept_untrimmed() {
        let request = RecommendationRequest::new("  a cat walking in rain ");
        assert_eq!(request.validate().unwrap(), "  a cat walking in rain ");
    }

    #[test]
    fn test_missing_description_message() {
        assert_eq!(
            ValidationError::MissingDescription.to_string(),
            "Description is required"
        );
    }
}
