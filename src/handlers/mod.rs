//! Request handler: one request/response cycle per invocation.

use crate::error::AppError;
use crate::models::{
    ApiGatewayResponse, ChatFailure, ChatRequest, ChatSuccess, ConversationTurn, InvocationEvent,
};
use crate::services::providers::{GenerationParams, TextGenerator};
use lambda_runtime::LambdaEvent;
use std::collections::HashMap;

/// Fixed headers attached to every response, success or failure.
const RESPONSE_HEADERS: [(&str, &str); 4] = [
    ("Content-Type", "application/json"),
    ("Access-Control-Allow-Origin", "*"),
    (
        "Access-Control-Allow-Headers",
        "Content-Type,X-Amz-Date,Authorization,X-Api-Key,X-Amz-Security-Token",
    ),
    ("Access-Control-Allow-Methods", "OPTIONS,POST"),
];

pub fn response_headers() -> HashMap<&'static str, &'static str> {
    RESPONSE_HEADERS.into_iter().collect()
}

/// Handle one invocation.
///
/// Never returns an error: every failure in parsing or generation is
/// rendered as a structured 500 response, so no invocation surfaces as a
/// platform fault.
pub async fn handle(
    event: LambdaEvent<InvocationEvent>,
    generator: &dyn TextGenerator,
) -> ApiGatewayResponse {
    let (event, context) = event.into_parts();
    tracing::info!(request_id = %context.request_id, event = ?event, "Received invocation");

    // Authorization was enforced upstream; claims are logged only.
    if let Some(identity) = event.caller_identity() {
        tracing::info!(user = %identity, "Authenticated caller");
    }

    match process(&event, generator).await {
        Ok((response, history)) => success_response(&ChatSuccess {
            success: true,
            response: &response,
            conversation_history: &history,
        }),
        Err(err) => {
            tracing::error!(error = %err, "Invocation failed");
            failure_response(&err.to_string())
        }
    }
}

/// Run the fallible part of the cycle: parse, generate, extend the history.
async fn process(
    event: &InvocationEvent,
    generator: &dyn TextGenerator,
) -> Result<(String, Vec<ConversationTurn>), AppError> {
    let request = parse_request(event)?;
    tracing::info!(message_len = request.message.len(), "Processing message");

    let mut history = request.conversation_history;
    history.push(ConversationTurn::user(&request.message));

    // Only the latest message is forwarded as the prompt; prior turns stay
    // client-side bookkeeping.
    let result = generator
        .generate(&request.message, &GenerationParams::default())
        .await?;

    tracing::debug!(
        elapsed_secs = result.total_request_time,
        "Generation round trip finished"
    );

    let assistant_text = result.assistant_text().to_string();
    history.push(ConversationTurn::assistant(&assistant_text));

    Ok((assistant_text, history))
}

fn parse_request(event: &InvocationEvent) -> Result<ChatRequest, AppError> {
    let body = event
        .body
        .as_deref()
        .ok_or_else(|| AppError::MalformedRequest("request body is missing".to_string()))?;

    serde_json::from_str(body)
        .map_err(|e| AppError::MalformedRequest(format!("invalid request body: {}", e)))
}

fn success_response(body: &ChatSuccess<'_>) -> ApiGatewayResponse {
    match serde_json::to_string(body) {
        Ok(body) => ApiGatewayResponse {
            status_code: 200,
            headers: response_headers(),
            body,
        },
        Err(e) => failure_response(&format!("failed to encode response: {}", e)),
    }
}

fn failure_response(message: &str) -> ApiGatewayResponse {
    let body = serde_json::to_string(&ChatFailure {
        success: false,
        error: message.to_string(),
    })
    .unwrap_or_else(|_| r#"{"success":false,"error":"internal error"}"#.to_string());

    ApiGatewayResponse {
        status_code: 500,
        headers: response_headers(),
        body,
    }
}
