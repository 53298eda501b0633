//! OpenRouterClient - direct REST implementation for the OpenRouter API.
//!
//! Two endpoints are used: `GET /models` for the catalog and
//! `POST /chat/completions` for turns. The listing call carries a bounded
//! timeout; the completion call deliberately does not, so the session
//! blocks until the remote answers or the transport gives up, and the
//! caller performs no retry.

use crate::api::{ChatBackend, ChatMessage, ModelsBackend};
use async_trait::async_trait;
use kirax_core::{KiraxError, Result};
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::time::Duration;

const BASE_URL: &str = "https://openrouter.ai/api/v1";
const MODELS_TIMEOUT: Duration = Duration::from_secs(15);

// Static identification headers required by OpenRouter
const REFERER: &str = "https://kirax.ia";
const APP_TITLE: &str = "Kirax IA";

/// Client for the OpenRouter HTTP API.
#[derive(Clone)]
pub struct OpenRouterClient {
    client: Client,
    api_key: String,
}

impl OpenRouterClient {
    /// Creates a new client with the provided API key.
    ///
    /// An empty key is accepted: requests will go out unauthenticated and
    /// fail at the remote with an auth status, which surfaces through the
    /// normal error path.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
        }
    }

    /// Returns the resolved API key (possibly empty).
    pub fn api_key(&self) -> &str {
        &self.api_key
    }
}

#[async_trait]
impl ModelsBackend for OpenRouterClient {
    async fn list_models(&self, api_key: &str) -> Result<Vec<String>> {
        let response = self
            .client
            .get(format!("{BASE_URL}/models"))
            .header("Authorization", format!("Bearer {api_key}"))
            .header("Content-Type", "application/json")
            .timeout(MODELS_TIMEOUT)
            .send()
            .await
            .map_err(|err| {
                KiraxError::transport(format!("OpenRouter model listing failed: {err}"))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read OpenRouter error body".to_string());
            return Err(map_http_error(status, body));
        }

        let parsed: ModelListResponse = response.json().await.map_err(|err| {
            KiraxError::transport(format!("Failed to parse OpenRouter model list: {err}"))
        })?;

        Ok(parsed
            .data
            .into_iter()
            .filter_map(|entry| entry.id.filter(|id| !id.is_empty()))
            .collect())
    }
}

#[async_trait]
impl ChatBackend for OpenRouterClient {
    async fn complete(&self, model: &str, messages: &[ChatMessage]) -> Result<String> {
        let request = ChatCompletionRequest {
            model: model.to_string(),
            messages: messages.to_vec(),
        };

        let response = self
            .client
            .post(format!("{BASE_URL}/chat/completions"))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .header("HTTP-Referer", REFERER)
            .header("X-Title", APP_TITLE)
            .json(&request)
            .send()
            .await
            .map_err(|err| {
                KiraxError::transport(format!("OpenRouter completion request failed: {err}"))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read OpenRouter error body".to_string());
            tracing::warn!(status = status.as_u16(), "chat completion rejected");
            return Err(map_http_error(status, body));
        }

        let parsed: ChatCompletionResponse = response.json().await.map_err(|err| {
            KiraxError::transport(format!("Failed to parse OpenRouter response: {err}"))
        })?;

        extract_reply(parsed)
    }
}

#[derive(Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<ChatMessage>,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

#[derive(Deserialize)]
struct ModelListResponse {
    #[serde(default)]
    data: Vec<ModelEntry>,
}

#[derive(Deserialize)]
struct ModelEntry {
    #[serde(default)]
    id: Option<String>,
}

#[derive(Deserialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

fn extract_reply(response: ChatCompletionResponse) -> Result<String> {
    response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .ok_or_else(|| KiraxError::transport("OpenRouter returned no content in the response"))
}

fn map_http_error(status: StatusCode, body: String) -> KiraxError {
    let message = serde_json::from_str::<ErrorResponse>(&body)
        .map(|wrapper| wrapper.error.message)
        .unwrap_or(body);

    KiraxError::remote_call(status.as_u16(), message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_reply_takes_first_choice() {
        let response: ChatCompletionResponse = serde_json::from_str(
            r#"{"choices": [
                {"message": {"role": "assistant", "content": "Oi! Como posso ajudar?"}},
                {"message": {"role": "assistant", "content": "segunda escolha"}}
            ]}"#,
        )
        .unwrap();
        assert_eq!(extract_reply(response).unwrap(), "Oi! Como posso ajudar?");
    }

    #[test]
    fn test_extract_reply_without_content_is_transport_failure() {
        let response: ChatCompletionResponse =
            serde_json::from_str(r#"{"choices": []}"#).unwrap();
        assert!(extract_reply(response).unwrap_err().is_transport());
    }

    #[test]
    fn test_model_list_parsing_skips_empty_ids() {
        let parsed: ModelListResponse = serde_json::from_str(
            r#"{"data": [
                {"id": "openai/gpt-4o-mini"},
                {"id": ""},
                {"name": "no id field"},
                {"id": "deepseek/deepseek-chat"}
            ]}"#,
        )
        .unwrap();
        let ids: Vec<String> = parsed
            .data
            .into_iter()
            .filter_map(|entry| entry.id.filter(|id| !id.is_empty()))
            .collect();
        assert_eq!(ids, vec!["openai/gpt-4o-mini", "deepseek/deepseek-chat"]);
    }

    #[test]
    fn test_http_error_prefers_structured_message() {
        let err = map_http_error(
            StatusCode::PAYMENT_REQUIRED,
            r#"{"error": {"message": "Insufficient credits"}}"#.to_string(),
        );
        assert_eq!(err.status_code(), Some(402));
        assert!(err.to_string().contains("Insufficient credits"));
    }

    #[test]
    fn test_http_error_falls_back_to_raw_body() {
        let err = map_http_error(StatusCode::BAD_GATEWAY, "upstream down".to_string());
        assert_eq!(err.status_code(), Some(502));
        assert!(err.to_string().contains("upstream down"));
    }

    #[test]
    fn test_completion_request_wire_shape() {
        let request = ChatCompletionRequest {
            model: "openai/gpt-4o-mini".to_string(),
            messages: vec![
                ChatMessage::new("system", "prompt"),
                ChatMessage::new("user", "Olá"),
            ],
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["model"], "openai/gpt-4o-mini");
        assert_eq!(json["messages"][0]["role"], "system");
        assert_eq!(json["messages"][1]["content"], "Olá");
    }
}
