// External dependencies
use anyhow::Result;
use log::{debug, info};
use serde::{Deserialize, Serialize};

// Internal dependencies
use crate::ai::message::{build_messages, Message};
use crate::ai::transport::{fetch, HttpRequest, HttpTransport};
use crate::ai::Assistant;
use crate::config::Config;
use crate::error::HowtoError;

// ============================================================================
// OpenAI API Structures
// ============================================================================

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: &'a [Message],
    temperature: f64,
}

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
    content: String,
}

/// Client for OpenAI-compatible chat completion endpoints.
pub struct OpenAiClient<T> {
    config: Config,
    transport: T,
}

// ============================================================================
// Client Implementation
// ============================================================================

impl<T: HttpTransport> OpenAiClient<T> {
    pub fn new(config: Config, transport: T) -> Self {
        Self { config, transport }
    }

    pub fn build_request(&self, messages: &[Message]) -> Result<HttpRequest> {
        let body = ChatRequest {
            model: &self.config.model,
            messages,
            temperature: self.config.temperature,
        };

        let body = serde_json::to_vec(&body)?;
        Ok(HttpRequest::json(self.config.url.clone(), body)
            .header("Authorization", format!("Bearer {}", self.config.token)))
    }

    /// Decoding errors are returned as-is so callers can inspect them.
    fn parse_answer(body: &[u8]) -> Result<String> {
        let response: ChatResponse = serde_json::from_slice(body)?;

        match response.choices.into_iter().next() {
            Some(choice) => Ok(choice.message.content),
            None => Err(HowtoError::NoAnswer.into()),
        }
    }
}

impl<T: HttpTransport> Assistant for OpenAiClient<T> {
    async fn ask(&self, history: &[String]) -> Result<String> {
        if self.config.token.is_empty() {
            return Err(HowtoError::MissingToken.into());
        }

        let messages = build_messages(&self.config.prompt, history);
        debug!(
            "Asking {} ({} messages)",
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
