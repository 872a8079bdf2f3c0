use rocket::post;
use rocket::serde::json::{Error as JsonError, Json};
use shared::CompletionConnection;
use tracing::info;

use super::error::RecommendationError;
use super::generate::generate_recommendations;
use super::recommendations::RecommendationResponse;
use super::request::{RecommendationRequest, ValidationError};

#[post("/api/recommendations", data = "<payload>")]
pub async fn recommendations<'r>(
    completion: CompletionConnection,
    payload: Result<Json<RecommendationRequest>, JsonError<'r>>,
) -> Result<Json<RecommendationResponse>, RecommendationError> {
    let request = payload.map_err(ValidationError::from)?.into_inner();
    let description = request.validate()?;

    info!("-> Handling recommendation request for: \"{description}\"");
    let generated = generate_recommendations(&completion, &description).await?;
    info!("<- Generated {} recommendation categories", generated.len());

    Ok(Json(RecommendationResponse::new(generated)))
}

#[cfg(test)]
mod tests {
    use rocket::http::{ContentType, Status};
    use rocket::local::asynchronous::Client;
    use rstest::rstest;
    use serde_json::{json, Map, Value};
    use shared::mock::completion::MockCompletion;
    use shared::mock::rocket::get_test_client;
    use shared::mock::upstream::MockUpstream;
    use shared::tracing::setup::setup_tracing;
    use shared::{CompletionConfig, CompletionConnection};

    use crate::recommendation::prompt::CATEGORIES;
    use crate::recommendation::request::RecommendationRequest;
    use crate::server::{test_server, test_server_with};

    fn nine_key_object() -> Value {
        let map: Map<String, Value> = CATEGORIES
            .iter()
            .map(|category| {
                let suggestions: Vec<String> =
                    (1..=5).map(|i| format!("{category} {i}")).collect();
                (category.to_string(), json!(suggestions))
            })
            .collect();
        Value::Object(map)
    }

    async fn post_recommendation(client: &Client, body: String) -> (Status, Value) {
        let response = client
            .post("/api/recommendations")
            .header(ContentType::JSON)
            .body(body)
            .dispatch()
            .await;
        let status = response.status();
        let body = response.into_json::<Value>().await.unwrap();
        (status, body)
    }

    #[tokio::test]
    async fn test_recommendations_from_prose_wrapped_answer() {
        setup_tracing(false);
        let expected = nine_key_object();
        let answer = format!("Here are your recommendations:\n```json\n{expected:#}\n```\nEnjoy!");
        let mock = MockCompletion::text(&answer);
        let client = get_test_client(test_server(&mock)).await.unwrap();

        let body: String = RecommendationRequest::new("a cat walking in rain")
            .try_into()
            .unwrap();
        let (status, body) = post_recommendation(&client, body).await;

        assert_eq!(status, Status::Ok);
        assert_eq!(body["success"], json!(true));
        assert_eq!(body["recommendations"], expected);
        assert_eq!(
            body["recommendations"]["scene_setting"]
                .as_array()
                .map(Vec::len),
            Some(5)
        );

        let calls = mock.calls();
        assert_eq!(calls.len(), 1);
        assert!(calls[0].user.contains("a cat walking in rain"));
    }

    #[tokio::test]
    async fn test_incomplete_object_is_passed_through() {
        setup_tracing(false);
        let mock = MockCompletion::text("{\"scene_setting\": [\"rooftop\"], \"extra\": 1}");
        let client = get_test_client(test_server(&mock)).await.unwrap();

        let (status, body) =
            post_recommendation(&client, json!({"description": "a cat"}).to_string()).await;

        assert_eq!(status, Status::Ok);
        assert_eq!(
            body["recommendations"],
            json!({"scene_setting": ["rooftop"], "extra": 1})
        );
    }

    #[rstest]
    #[case(json!({"description": ""}).to_string())]
    #[case(json!({"description": "   "}).to_string())]
    #[case(json!({"description": null}).to_string())]
    #[case(json!({}).to_string())]
    #[tokio::test]
    async fn test_blank_description_is_rejected(#[case] body: String) {
        setup_tracing(false);
        let mock = MockCompletion::text("{\"a\": 1}");
        let client = get_test_client(test_server(&mock)).await.unwrap();

        let (status, body) = post_recommendation(&client, body).await;

        assert_eq!(status, Status::BadRequest);
        assert_eq!(body, json!({"error": "Description is required"}));
        assert!(mock.calls().is_empty());
    }

    #[rstest]
    #[case("not json at all".to_string())]
    #[case(String::new())]
    #[case(json!({"description": 42}).to_string())]
    #[tokio::test]
    async fn test_unreadable_body_is_rejected(#[case] body: String) {
        setup_tracing(false);
        let mock = MockCompletion::text("{\"a\": 1}");
        let client = get_test_client(test_server(&mock)).await.unwrap();

        let (status, body) = post_recommendation(&client, body).await;

        assert_eq!(status, Status::BadRequest);
        assert_eq!(body["error"], json!("Invalid JSON body"));
        assert!(mock.calls().is_empty());
    }

    #[tokio::test]
    async fn test_upstream_unauthorized() {
        setup_tracing(false);
        let details = json!({"error": {"message": "Incorrect API key provided", "code": "invalid_api_key"}});
        let mock = MockCompletion::api_error(401, details.clone());
        let client = get_test_client(test_server(&mock)).await.unwrap();

        let (status, body) =
            post_recommendation(&client, json!({"description": "a cat"}).to_string()).await;

        assert_eq!(status, Status::InternalServerError);
        assert_eq!(body["error"], json!("Upstream API error"));
        assert_eq!(body["details"], details);
        assert_eq!(mock.calls().len(), 1);
    }

    #[tokio::test]
    async fn test_upstream_unauthorized_with_default_transport() {
        setup_tracing(false);
        let upstream = MockUpstream::start(401, "text/plain", "Unauthorized: missing bearer")
            .await
            .unwrap();
        let api_base = upstream.api_base();
        let config = CompletionConfig::from_lookup(|key: &str| match key {
            "OPENAI_API_KEY" => Some("sk-test".to_string()),
            "OPENAI_BASE_URL" => Some(api_base.clone()),
            _ => None,
        })
        .unwrap();
        let completion = CompletionConnection::new(&config).unwrap();
        let client = get_test_client(test_server_with(completion)).await.unwrap();

        let (status, body) =
            post_recommendation(&client, json!({"description": "a cat"}).to_string()).await;

        assert_eq!(status, Status::InternalServerError);
        assert_eq!(body["error"], json!("Upstream API error"));
        assert_eq!(body["details"], json!("Unauthorized: missing bearer"));
        assert_eq!(upstream.requests(), 1);
    }

    #[tokio::test]
    async fn test_answer_without_braces() {
        setup_tracing(false);
        let mock = MockCompletion::text("Sorry, I cannot help with that.");
        let client = get_test_client(test_server(&mock)).await.unwrap();

        let (status, body) =
            post_recommendation(&client, json!({"description": "a cat"}).to_string()).await;

        assert_eq!(status, Status::InternalServerError);
        assert_eq!(body["error"], json!("Malformed upstream response"));
        assert!(body["details"].is_string());
    }

    #[tokio::test]
    async fn test_truncated_answer() {
        setup_tracing(false);
        let mock = MockCompletion::text("{\"scene_setting\": [\"a\", \"b\"], \"lighting_type\": [\"c\"}");
        let client = get_test_client(test_server(&mock)).await.unwrap();

        let (status, body) =
            post_recommendation(&client, json!({"description": "a cat"}).to_string()).await;

        assert_eq!(status, Status::InternalServerError);
        assert_eq!(body["error"], json!("Malformed upstream response"));
    }
}
