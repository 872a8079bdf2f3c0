use shared::CompletionConnection;
use tracing::{debug, warn};

use super::error::RecommendationError;
use super::extract::extract_json_object;
use super::prompt::{create_user_prompt, SYSTEM_PROMPT};
use super::recommendations::Recommendations;

/// One upstream call per description, no retry. The extracted object is returned
/// even when its shape differs from the one asked for.
pub async fn generate_recommendations(
    completion: &CompletionConnection,
    description: &str,
) -> Result<Recommendations, RecommendationError> {
    let user_prompt = create_user_prompt(description);
    let answer = completion.complete(SYSTEM_PROMPT, &user_prompt).await?;
    debug!("Upstream answer: {} bytes", answer.len());

    let recommendations = Recommendations::from(extract_json_object(&answer)?);
    for issue in recommendations.shape_issues() {
        warn!("Recommendations deviate from requested shape: {issue}");
    }
    Ok(recommendations)
}
