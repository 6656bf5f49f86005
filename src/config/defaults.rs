use std::time::Duration;

pub const DEFAULT_VENDOR: &str = "openai";
pub const OPENAI_URL: &str = "https://api.openai.com/v1/chat/completions";
pub const OLLAMA_URL: &str = "http://localhost:11434/api/chat";
pub const DEFAULT_MODEL: &str = "gpt-4o";
pub const DEFAULT_TEMPERATURE: f64 = 0.0;
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

pub const ENV_VENDOR: &str = "HOWTO_AI_VENDOR";
pub const ENV_URL: &str = "HOWTO_AI_URL";
pub const ENV_TOKEN: &str = "HOWTO_AI_TOKEN";
pub const ENV_MODEL: &str = "HOWTO_AI_MODEL";
pub const ENV_PROMPT: &str = "HOWTO_AI_PROMPT";
pub const ENV_TEMPERATURE: &str = "HOWTO_AI_TEMPERATURE";
pub const ENV_TIMEOUT: &str = "HOWTO_AI_TIMEOUT";

pub struct DefaultConfig;

impl DefaultConfig {
    /// The answer layout requested here (command, blank line, explanation)
    /// is what the answer formatter and `-run` rely on.
    pub fn prompt(os: &str) -> String {
        format!(
            r#"You are a command-line assistant. You help the user solve tasks using command-line tools for the given platform ({os}).

In your answer, the first line MUST be the suggested command. Do NOT use Markdown or any other formatting. Print the command in plain text WITHOUT any surrounding text.

The second line must be blank. The third line must contain a brief explanation of the command.

If you suggest multiple commands connected with pipes, you MUST provide separate explanations for each command. Print each explanation on a separate line."#
        )
    }

    pub fn host_prompt() -> String {
        Self::prompt(std::env::consts::OS)
    }
}
