//! Domain models and wire types for the chat relay.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Speaker of a conversation turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// One message in a conversation. Ordering within a history is chronological.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationTurn {
    pub role: Role,
    pub content: String,
}

impl ConversationTurn {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

/// Parsed request body. The caller supplies the full history on each request
/// and is responsible for persisting the extended history we return.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    pub message: String,
    #[serde(default)]
    pub conversation_history: Vec<ConversationTurn>,
}

/// Inbound invocation envelope, as delivered by the API gateway proxy
/// integration. Only the fields the handler reads are modeled.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvocationEvent {
    /// JSON-encoded request body.
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub request_context: Option<RequestContext>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestContext {
    #[serde(default)]
    pub authorizer: Option<Authorizer>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Authorizer {
    #[serde(default)]
    pub claims: Option<HashMap<String, serde_json::Value>>,
}

impl InvocationEvent {
    /// Display identity of the already-authenticated caller, for logging
    /// only. Prefers a non-empty `email` claim, then `cognito:username`.
    pub fn caller_identity(&self) -> Option<&str> {
        let claims = self.request_context.as_ref()?.authorizer.as_ref()?.claims.as_ref()?;
        let claim = |key: &str| {
            claims
                .get(key)
                .and_then(|v| v.as_str())
                .filter(|s| !s.is_empty())
        };
        claim("email").or_else(|| claim("cognito:username"))
    }
}

/// Proxy-integration response envelope.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiGatewayResponse {
    pub status_code: u16,
    pub headers: HashMap<&'static str, &'static str>,
    pub body: String,
}

/// Body of a successful invocation.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatSuccess<'a> {
    pub success: bool,
    pub response: &'a str,
    pub conversation_history: &'a [ConversationTurn],
}

/// Body of a failed invocation. Carries no partial history.
#[derive(Debug, Serialize)]
pub struct ChatFailure {
    pub success: bool,
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn roles_serialize_lowercase() {
        assert_eq!(serde_json::to_value(Role::User).unwrap(), json!("user"));
        assert_eq!(
            serde_json::to_value(Role::Assistant).unwrap(),
            json!("assistant")
        );
    }

    #[test]
    fn chat_request_defaults_history_to_empty() {
        let request: ChatRequest = serde_json::from_str(r#"{"message": "hi"}"#).unwrap();
        assert_eq!(request.message, "hi");
        assert!(request.conversation_history.is_empty());
    }

    #[test]
    fn chat_request_requires_message() {
        let result = serde_json::from_str::<ChatRequest>(r#"{"conversationHistory": []}"#);
        assert!(result.is_err());
    }

    #[test]
    fn caller_identity_prefers_email() {
        let event: InvocationEvent = serde_json::from_value(json!({
            "body": null,
            "requestContext": {
                "authorizer": {
                    "claims": {
                        "email": "user@example.com",
                        "cognito:username": "user-123"
                    }
                }
            }
        }))
        .unwrap();
        assert_eq!(event.caller_identity(), Some("user@example.com"));
    }

    #[test]
    fn caller_identity_falls_back_to_username_when_email_empty() {
        let event: InvocationEvent = serde_json::from_value(json!({
            "requestContext": {
                "authorizer": {
                    "claims": {
                        "email": "",
                        "cognito:username": "user-123"
                    }
                }
            }
        }))
        .unwrap();
        assert_eq!(event.caller_identity(), Some("user-123"));
    }

    #[test]
    fn caller_identity_absent_without_claims() {
        let event = InvocationEvent::default();
        assert_eq!(event.caller_identity(), None);
    }
}
