use serde::Serialize;
use serde_json::{Map, Value};

use super::prompt::{CATEGORIES, SUGGESTIONS_PER_CATEGORY};

/// The object parsed from the model's answer, passed through as is. Nothing
/// enforces the nine categories or five suggestions per category.
#[derive(Serialize, Debug)]
#[serde(transparent)]
pub struct Recommendations(Map<String, Value>);

impl Recommendations {
    pub fn category(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Describes where the object differs from the requested shape.
    pub fn shape_issues(&self) -> Vec<String> {
        let mut issues = Vec::new();
        for category in CATEGORIES {
            match self.0.get(category) {
                None => issues.push(format!("missing category '{category}'")),
                Some(Value::Array(items)) if items.len() != SUGGESTIONS_PER_CATEGORY => {
                    issues.push(format!(
                        "category '{category}' has {} suggestions, expected {SUGGESTIONS_PER_CATEGORY}",
                        items.len()
                    ))
                }
                Some(Value::Array(_)) => {}
                Some(_) => issues.push(format!("category '{category}' is not an array")),
            }
        }
        for key in self.0.keys() {
            if !CATEGORIES.contains(&key.as_str()) {
                issues.push(format!("unexpected category '{key}'"));
            }
        }
        issues
    }
}

impl From<Map<String, Value>> for Recommendations {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

#[derive(Serialize, Debug)]
pub struct RecommendationResponse {
    pub success: bool,
    pub recommendations: Recommendations,
}

impl RecommendationResponse {
    pub fn new(recommendations: Recommendations) -> Self {
        Self {
            success: true,
            recommendations,
        }
    }
}
