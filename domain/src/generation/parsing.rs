//! Parsing of model replies into [`GenerationResult`].
//!
//! The model is asked for a bare JSON object with the keys `word`,
//! `definition` and `advice`. Two shapes are accepted:
//! 1. The whole reply is the JSON object
//! 2. The object is wrapped in a ` ```json ` (or bare ` ``` `) fence

use super::GenerationResult;
use serde_json::{Map, Value};
use thiserror::Error;

/// Why a model reply could not be turned into a result
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResponseParseError {
    #[error("No content in model response")]
    Empty,

    #[error("Response is not a JSON object: {0}")]
    NotJson(String),

    #[error("Response is missing required field '{0}'")]
    MissingField(&'static str),
}

/// Parse a model reply.
///
/// Never returns a partially populated result: either all three fields are
/// present and non-blank, or an error is returned.
pub fn parse_generation_response(content: &str) -> Result<GenerationResult, ResponseParseError> {
    let content = content.trim();
    if content.is_empty() {
        return Err(ResponseParseError::Empty);
    }

    let body = strip_code_fence(content);
    let value: Value =
        serde_json::from_str(body).map_err(|e| ResponseParseError::NotJson(e.to_string()))?;
    let Value::Object(object) = value else {
        return Err(ResponseParseError::NotJson(
            "expected an object with word, definition and advice".to_string(),
        ));
    };

    let word = required_text(&object, "word")?;
    let definition = required_text(&object, "definition")?;
    let advice = required_text(&object, "advice")?;

    GenerationResult::new(word, definition, advice).ok_or(ResponseParseError::MissingField("word"))
}

/// Extract a non-blank string field; anything else counts as missing
fn required_text(
    object: &Map<String, Value>,
    field: &'static str,
) -> Result<String, ResponseParseError> {
    match object.get(field) {
        Some(Value::String(s)) if !s.trim().is_empty() => Ok(s.clone()),
        _ => Err(ResponseParseError::MissingField(field)),
    }
}

/// Return the inside of the first fenced block, or the input unchanged.
fn strip_code_fence(content: &str) -> &str {
    let Some(rest) = content.strip_prefix("```") else {
        return content;
    };
    // Skip the info string ("json") up to the end of the fence line
    let rest = match rest.find('\n') {
        Some(pos) => &rest[pos + 1..],
        None => return content,
    };
    match rest.rfind("```") {
        Some(end) => rest[..end].trim(),
        None => rest.trim(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bare_json() {
        let reply = r#"{"word":"vaciesper","definition":"Un estado.","advice":"Reconocer vaciesper..."}"#;
        let result = parse_generation_response(reply).unwrap();
        assert_eq!(result.word(), "vaciesper");
        assert_eq!(result.definition(), "Un estado.");
    }

    #[test]
    fn test_parse_fenced_json() {
        let reply = "```json\n{\"word\":\"nublanza\",\"definition\":\"d\",\"advice\":\"a\"}\n```";
        let result = parse_generation_response(reply).unwrap();
        assert_eq!(result.word(), "nublanza");
    }

    #[test]
    fn test_parse_surrounding_whitespace() {
        let reply = "\n\n  {\"word\":\"w\",\"definition\":\"d\",\"advice\":\"a\"}  \n";
        assert!(parse_generation_response(reply).is_ok());
    }

    #[test]
    fn test_empty_reply() {
        assert_eq!(
            parse_generation_response("   ").unwrap_err(),
            ResponseParseError::Empty
        );
    }

    #[test]
    fn test_prose_reply_is_not_json() {
        let err = parse_generation_response("Claro, aquí tienes tu palabra: nublanza").unwrap_err();
        assert!(matches!(err, ResponseParseError::NotJson(_)));
    }

    #[test]
    fn test_missing_advice() {
        let reply = r#"{"word":"w","definition":"d"}"#;
        assert_eq!(
            parse_generation_response(reply).unwrap_err(),
            ResponseParseError::MissingField("advice")
        );
    }

    #[test]
    fn test_blank_definition_counts_as_missing() {
        let reply = r#"{"word":"w","definition":"  ","advice":"a"}"#;
        assert_eq!(
            parse_generation_response(reply).unwrap_err(),
            ResponseParseError::MissingField("definition")
        );
    }

    #[test]
    fn test_non_string_field_counts_as_missing() {
        let reply = r#"{"word":42,"definition":"d","advice":"a"}"#;
        assert_eq!(
            parse_generation_response(reply).unwrap_err(),
            ResponseParseError::MissingField("word")
        );
    }

    #[test]
    fn test_array_is_rejected() {
        let err = parse_generation_response(r#"["w","d","a"]"#).unwrap_err();
        assert!(matches!(err, ResponseParseError::NotJson(_)));
    }

    #[test]
    fn test_extra_keys_are_ignored() {
        let reply = r#"{"word":"w","definition":"d","advice":"a","mood":"gris"}"#;
        assert!(parse_generation_response(reply).is_ok());
    }
}
