// External dependencies
use anyhow::Result;
use log::{debug, info};
use serde::{Deserialize, Serialize};

// Internal dependencies
use crate::ai::message::{build_messages, Message};
use crate::ai::transport::{fetch, HttpRequest, HttpTransport};
use crate::ai::Assistant;
use crate::config::Config;

// ============================================================================
// Ollama API Structures
// ============================================================================

#[derive(Debug, Serialize)]
struct OllamaOptions {
    temperature: f64,
}

#[derive(Debug, Serialize)]
struct OllamaChatRequest<'a> {
    model: &'a str,
    options: OllamaOptions,
    stream: bool,
    messages: &'a [Message],
}

#[derive(Debug, Deserialize)]
struct OllamaChatResponse {
    message: OllamaMessage,
}

#[derive(Debug, Deserialize)]
struct OllamaMessage {
    content: String,
}

/// Client for the Ollama `/api/chat` endpoint. No credential needed.
pub struct OllamaClient<T> {
    config: Config,
    transport: T,
}

// ============================================================================
// Client Implementation
// ============================================================================

impl<T: HttpTransport> OllamaClient<T> {
    pub fn new(config: Config, transport: T) -> Self {
        Self { config, transport }
    }

    pub fn build_request(&self, messages: &[Message]) -> Result<HttpRequest> {
        let body = OllamaChatRequest {
            model: &self.config.model,
            options: OllamaOptions {
                temperature: self.config.temperature,
            },
            stream: false,
            messages,
        };

        let body = serde_json::to_vec(&body)?;
        Ok(HttpRequest::json(self.config.url.clone(), body))
    }

    fn parse_answer(body: &[u8]) -> Result<String> {
        let response: OllamaChatResponse = serde_json::from_slice(body)?;
        Ok(response.message.content.trim().to_string())
    }
}

impl<T: HttpTransport> Assistant for OllamaClient<T> {
    async fn ask(&self, history: &[String]) -> Result<String> {
        let messages = build_messages(&self.config.prompt, history);
        debug!(
            "Asking Ollama model {} ({} messages)",
            self.config.model,
            messages.len()
        );

        let request = self.build_request(&messages)?;
        let body = fetch(&self.transport, request).await?;
        let answer = Self::parse_answer(&body)?;

        info!("Received answer, {} bytes", answer.len());
        Ok(answer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::transport::stub::StubTransport;
    use crate::config::Vendor;
    use reqwest::StatusCode;
    use std::time::Duration;
    use url::Url;

    fn config() -> Config {
        Config {
            vendor: Vendor::Ollama,
            url: Url::parse("http://localhost:11434/api/chat").unwrap(),
            token: String::new(),
            model: "qwen2.5-coder:1.5b".to_string(),
            prompt: "You are a test assistant.".to_string(),
            temperature: 0.7,
            timeout: Duration::from_secs(30),
        }
    }

    fn history() -> Vec<String> {
        vec!["Hello".to_string(), "Hi there!".to_string()]
    }

    #[tokio::test]
    async fn returns_trimmed_message() {
        let transport = StubTransport::ok(r#"{"message": {"content": "  I'm doing great!\n"}}"#);
        let client = OllamaClient::new(config(), transport);

        let answer = client.ask(&history()).await.unwrap();
        assert_eq!(answer, "I'm doing great!");
    }

    #[tokio::test]
    async fn works_without_token() {
        let transport = StubTransport::ok(r#"{"message": {"content": "ls"}}"#);
        let client = OllamaClient::new(config(), transport);

        client.ask(&history()).await.unwrap();
        let request = client.transport.last_request.borrow().clone().unwrap();
        assert_eq!(request.header_value("Authorization"), None);
    }

    #[tokio::test]
    async fn http_error_carries_status() {
        let transport = StubTransport::new(StatusCode::NOT_FOUND, "model not found");
        let client = OllamaClient::new(config(), transport);

        let err = client.ask(&history()).await.unwrap_err();
        assert_eq!(err.to_string(), "http status: 404 Not Found");
    }

    #[tokio::test]
    async fn missing_message_is_a_decode_error() {
        let client = OllamaClient::new(config(), StubTransport::ok(r#"{"done": true}"#));

        let err = client.ask(&history()).await.unwrap_err();
        assert!(err.downcast_ref::<serde_json::Error>().is_some());
    }

    #[test]
    fn build_request_disables_streaming() {
        let client = OllamaClient::new(config(), StubTransport::ok("{}"));
        let messages = build_messages("sys", &["hello".to_string()]);

        let request = client.build_request(&messages).unwrap();
        assert_eq!(request.header_value("Content-Type"), Some("application/json"));

        let body: serde_json::Value = serde_json::from_slice(&request.body).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "model": "qwen2.5-coder:1.5b",
                "options": {"temperature": 0.7},
                "stream": false,
                "messages": [
                    {"role": "system", "content": "sys"},
                    {"role": "user", "content": "hello"}
                ]
            })
        );
    }
}
