//! Blocking client for an OpenAI-compatible chat-completions endpoint.
//!
//! The default endpoint is GitHub Models, but anything speaking the same
//! wire format works. Requests carry a bearer token and a fixed per-request
//! timeout; there is no retry or backoff.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::{CompletionClient, CompletionRequest};
use crate::error::{BisociateError, Result};

const USER_AGENT: &str = concat!("bisociate/", env!("CARGO_PKG_VERSION"));
const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

/// Chat-completions client over HTTP
pub struct ModelsClient {
    agent: ureq::Agent,
    endpoint: String,
    token: String,
}

impl ModelsClient {
    pub fn new(endpoint: impl Into<String>, token: impl Into<String>) -> Self {
        let agent = ureq::AgentBuilder::new().timeout(REQUEST_TIMEOUT).build();
        Self {
            agent,
            endpoint: endpoint.into(),
            token: token.into(),
        }
    }
}

/// Chat-completions request body
#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f64,
    top_p: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_format: Option<ResponseFormat>,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    kind: &'static str,
}

/// Chat-completions response body (only the fields we read)
#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

impl CompletionClient for ModelsClient {
    fn complete(&self, request: &CompletionRequest) -> Result<String> {
        let url = format!("{}/chat/completions", self.endpoint.trim_end_matches('/'));
        let body = ChatRequest {
            model: &request.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: &request.system,
                },
                ChatMessage {
                    role: "user",
                    content: &request.user,
                },
            ],
            temperature: request.temperature,
            top_p: request.top_p,
            response_format: request
                .json_object
                .then_some(ResponseFormat { kind: "json_object" }),
        };

        tracing::debug!(model = %request.model, temperature = request.temperature, %url, "sending completion request");

        let response = self
            .agent
            .post(&url)
            .set("Authorization", &format!("Bearer {}", self.token))
            .set("User-Agent", USER_AGENT)
            .send_json(&body)
            .map_err(|err| match err {
                ureq::Error::Status(code, response) => {
                    let detail = response
                        .into_string()
                        .unwrap_or_else(|_| "<unreadable response body>".to_string());
                    BisociateError::Inference(format!("HTTP {} from {}: {}", code, url, detail))
                }
                other => BisociateError::Inference(other.to_string()),
            })?;

        let parsed: ChatResponse = response
            .into_json()
            .map_err(|err| BisociateError::Inference(format!("malformed response body: {}", err)))?;

        parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|content| !content.trim().is_empty())
            .ok_or_else(|| {
                BisociateError::Inference("response contained no completion text".to_string())
            })
    }
}
