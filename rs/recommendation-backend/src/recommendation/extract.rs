use serde_json::{Map, Value};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExtractionError {
    #[error("Upstream response contains no JSON object")]
    NoJsonObject,
    #[error("Upstream response is not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

/// Parses the span from the first `{` to the last `}` of `text`.
///
/// The scan is greedy and does not track nesting: prose containing braces on
/// both sides of the object will end up inside the span and fail to parse.
pub fn extract_json_object(text: &str) -> Result<Map<String, Value>, ExtractionError> {
    let (Some(start_index), Some(end_index)) = (text.find('{'), text.rfind('}')) else {
        return Err(ExtractionError::NoJsonObject);
    };
    if start_index > end_index {
        return Err(ExtractionError::NoJsonObject);
    }
    let json_str = &text[start_index..=end_index];
    Ok(serde_json::from_str(json_str)?)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use serde_json::json;

    use super::*;

    #[test]
    fn test_extract_from_prose() {
        let object = extract_json_object("here is the result: {\"a\":1} thanks").unwrap();
        assert_eq!(Value::Object(object), json!({"a": 1}));
    }

    #[test]
    fn test_extract_from_code_fence() {
        let text = "```json\n{\"scene_setting\": [\"rainy alley\"], \"aesthetic\": {\"mood\": \"noir\"}}\n```";
        let object = extract_json_object(text).unwrap();
        assert_eq!(object["aesthetic"], json!({"mood": "noir"}));
    }

    #[test]
    fn test_extract_keeps_key_order() {
        let object = extract_json_object("{\"z\": 1, \"a\": 2, \"m\": 3}").unwrap();
        let keys: Vec<&str> = object.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["z", "a", "m"]);
    }

    #[test]
    fn test_extract_is_idempotent() {
        let once = extract_json_object("result: {\"a\": [1, 2]} done").unwrap();
        let twice = extract_json_object(&Value::Object(once.clone()).to_string()).unwrap();
        assert_eq!(once, twice);
    }

    #[rstest]
    #[case("plain text without braces")]
    #[case("")]
    #[case("} reversed {")]
    #[case("only an opening { brace")]
    fn test_no_json_object(#[case] text: &str) {
        assert!(matches!(
            extract_json_object(text),
            Err(ExtractionError::NoJsonObject)
        ));
    }

    #[rstest]
    #[case("{\"scene_setting\": [\"a\", \"b\"}")]
    #[case("first {\"a\": 1} then {\"b\": 2}")]
    #[case("{not json}")]
    fn test_invalid_span(#[case] text: &str) {
        assert!(matches!(
            extract_json_object(text),
            Err(ExtractionError::InvalidJson(_))
        ));
    }
}
