pub mod message;
pub mod ollama_client;
pub mod openai_client;
pub mod response;
pub mod transport;

use anyhow::Result;

use crate::config::{Config, Vendor};

pub use message::{build_messages, Message, Role};
pub use ollama_client::OllamaClient;
pub use openai_client::OpenAiClient;
pub use response::{remove_fences, split_answer};
pub use transport::{HttpRequest, HttpResponse, HttpTransport, ReqwestTransport};

/// Anything that can answer a conversation. The last history entry is the
/// question being asked.
#[allow(async_fn_in_trait)]
pub trait Assistant {
    async fn ask(&self, history: &[String]) -> Result<String>;
}

/// The backend chosen by configuration at startup.
pub enum VendorClient<T> {
    OpenAi(OpenAiClient<T>),
    Ollama(OllamaClient<T>),
}

impl<T: HttpTransport> VendorClient<T> {
    pub fn from_config(config: &Config, transport: T) -> Self {
        match config.vendor {
            Vendor::OpenAi => Self::OpenAi(OpenAiClient::new(config.clone(), transport)),
            Vendor::Ollama => Self::Ollama(OllamaClient::new(config.clone(), transport)),
        }
    }
}

impl<T: HttpTransport> Assistant for VendorClient<T> {
    async fn ask(&self, history: &[String]) -> Result<String> {
        match self {
            Self::OpenAi(client) => client.ask(history).await,
            Self::Ollama(client) => client.ask(history).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::transport::stub::StubTransport;

    fn config(vendor: &str) -> Config {
        Config::from_lookup(|key| match key {
            "HOWTO_AI_VENDOR" => Some(vendor.to_string()),
            "HOWTO_AI_TOKEN" => Some("token".to_string()),
            _ => None,
        })
        .unwrap()
    }

    #[test]
    fn selects_client_by_vendor() {
        let openai = VendorClient::from_config(&config("openai"), StubTransport::ok("{}"));
        assert!(matches!(openai, VendorClient::OpenAi(_)));

        let ollama = VendorClient::from_config(&config("ollama"), StubTransport::ok("{}"));
        assert!(matches!(ollama, VendorClient::Ollama(_)));
    }

    #[test]
    fn dispatches_to_selected_client() {
        let client = VendorClient::from_config(
            &config("ollama"),
            StubTransport::ok(r#"{"message": {"content": " pwd "}}"#),
        );

        let answer = tokio_test::block_on(client.ask(&["where am I".to_string()])).unwrap();
        assert_eq!(answer, "pwd");
    }
}
