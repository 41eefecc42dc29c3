//! Suggestions response decoding.

use serde_json::Value;

use crate::models::Suggestion;

/// Field holding the matches in a suggestions response.
const SUGGESTIONS_FIELD: &str = "suggestions";

/// Extracts the suggestions from a response body.
///
/// Returns `Ok(None)` when the body is not a JSON object or has no (or a null)
/// `suggestions` field. The service answers that way for candidate codes with
/// no postal code behind them, so it is not an error.
///
/// # Errors
///
/// Returns the decoding error when `suggestions` is present but its elements
/// do not carry `text`, `latitude` and `longitude`.
pub fn parse_suggestions(body: &str) -> Result<Option<Vec<Suggestion>>, serde_json::Error> {
    let Ok(Value::Object(mut object)) = serde_json::from_str::<Value>(body) else {
        return Ok(None);
    };

    match object.remove(SUGGESTIONS_FIELD) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => serde_json::from_value(value).map(Some),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_suggestions_array() {
        let body = r#"{"suggestions":[
            {"text":"01001, Vitoria-Gasteiz, Araba/Álava, País Vasco, ESP","latitude":42.8469215,"longitude":-2.671688},
            {"text":"01002, Vitoria-Gasteiz, Araba/Álava, País Vasco, ESP","latitude":42.85,"longitude":-2.67}
        ]}"#;
        let suggestions = parse_suggestions(body).unwrap().unwrap();
        assert_eq!(suggestions.len(), 2);
        assert_eq!(suggestions[0].latitude, 42.8469215);
        assert!(suggestions[1].text.starts_with("01002"));
    }

    #[test]
    fn test_missing_field_is_empty() {
        assert_eq!(parse_suggestions(r#"{"other":1}"#).unwrap(), None);
        assert_eq!(parse_suggestions(r#"{"suggestions":null}"#).unwrap(), None);
    }

    #[test]
    fn test_non_object_body_is_empty() {
        assert_eq!(parse_suggestions("").unwrap(), None);
        assert_eq!(parse_suggestions("<html></html>").unwrap(), None);
        assert_eq!(parse_suggestions("[1,2,3]").unwrap(), None);
    }

    #[test]
    fn test_empty_array_is_some_empty() {
        assert_eq!(parse_suggestions(r#"{"suggestions":[]}"#).unwrap(), Some(vec![]));
    }

    #[test]
    fn test_malformed_element_is_an_error() {
        assert!(parse_suggestions(r#"{"suggestions":[{"text":"01001"}]}"#).is_err());
        assert!(parse_suggestions(r#"{"suggestions":"01001"}"#).is_err());
    }
}
