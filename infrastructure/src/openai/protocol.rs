//! Chat Completions wire types.
//!
//! Only the fields this client sends or reads are modelled; unknown response
//! fields are ignored.

use serde::{Deserialize, Serialize};

/// Chat message role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

/// Chat message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    /// Creates a user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

/// `POST /v1/chat/completions` request body
#[derive(Debug, Clone, Serialize)]
pub struct ChatCompletionRequest<'a> {
    pub model: &'a str,
    pub messages: Vec<Message>,
    pub max_tokens: u32,
    pub temperature: f32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatCompletionResponse {
    #[serde(default)]
    pub choices: Vec<Choice>,
}

impl ChatCompletionResponse {
    /// Content of the first choice, if any
    pub fn first_content(self) -> Option<String> {
        self.choices.into_iter().next()?.message.content
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Choice {
    pub message: ChoiceMessage,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChoiceMessage {
    pub content: Option<String>,
}

/// Error body: `{"error": {"message", "type", "code"}}`
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorResponse {
    pub error: ApiErrorBody,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorBody {
    pub message: String,
    #[serde(rename = "type")]
    pub error_type: Option<String>,
    pub code: Option<serde_json::Value>,
}

/// Fold an error body into one message.
///
/// The type and code are kept because they carry the quota signal
/// (`insufficient_quota`) even when the message wording changes.
pub fn fold_error_body(status: u16, body: &str) -> String {
    let Ok(parsed) = serde_json::from_str::<ErrorResponse>(body) else {
        let body = body.trim();
        return if body.is_empty() {
            format!("HTTP {}", status)
        } else {
            body.to_string()
        };
    };

    let error = parsed.error;
    let code = error.code.as_ref().map(|c| match c {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    });
    let mut tags = Vec::new();
    if let Some(t) = error.error_type.filter(|t| !t.is_empty()) {
        tags.push(format!("type: {}", t));
    }
    if let Some(c) = code.filter(|c| !c.is_empty() && c != "null") {
        tags.push(format!("code: {}", c));
    }

    if tags.is_empty() {
        error.message
    } else {
        format!("{} [{}]", error.message, tags.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_shape() {
        let request = ChatCompletionRequest {
            model: "gpt-3.5-turbo",
            messages: vec![Message::user("hola")],
            max_tokens: 500,
            temperature: 0.5,
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["model"], "gpt-3.5-turbo");
        assert_eq!(value["messages"][0]["role"], "user");
        assert_eq!(value["messages"][0]["content"], "hola");
        assert_eq!(value["max_tokens"], 500);
        assert_eq!(value["temperature"], 0.5);
    }

    #[test]
    fn test_first_content() {
        let body = r#"{"id":"x","choices":[{"index":0,"message":{"role":"assistant","content":"{\"word\":\"a\"}"}}]}"#;
        let response: ChatCompletionResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.first_content().as_deref(), Some(r#"{"word":"a"}"#));
    }

    #[test]
    fn test_no_choices() {
        let response: ChatCompletionResponse = serde_json::from_str(r#"{"choices":[]}"#).unwrap();
        assert!(response.first_content().is_none());
        let response: ChatCompletionResponse = serde_json::from_str("{}").unwrap();
        assert!(response.first_content().is_none());
    }

    #[test]
    fn test_fold_quota_error() {
        let body = r#"{"error":{"message":"You exceeded your current quota.","type":"insufficient_quota","param":null,"code":"insufficient_quota"}}"#;
        assert_eq!(
            fold_error_body(429, body),
            "You exceeded your current quota. [type: insufficient_quota, code: insufficient_quota]"
        );
    }

    #[test]
    fn test_fold_without_code() {
        let body = r#"{"error":{"message":"Rate limit reached","type":"requests","code":null}}"#;
        assert_eq!(fold_error_body(429, body), "Rate limit reached [type: requests]");
    }

    #[test]
    fn test_fold_non_json_body() {
        assert_eq!(fold_error_body(502, "<html>Bad Gateway</html>"), "<html>Bad Gateway</html>");
        assert_eq!(fold_error_body(503, "  "), "HTTP 503");
    }
}
