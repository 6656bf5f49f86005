use std::process::ExitStatus;

use reqwest::StatusCode;
use thiserror::Error;

/// Domain failures. They travel inside `anyhow::Error` and can be
/// recovered with `downcast_ref::<HowtoError>()`.
#[derive(Error, Debug)]
pub enum HowtoError {
    #[error("unknown AI vendor: {0}")]
    UnknownVendor(String),

    #[error("invalid AI URL {url}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("set HOWTO_AI_TOKEN to your AI vendor API key")]
    MissingToken,

    #[error("http status: {0}")]
    HttpStatus(StatusCode),

    #[error("no answer")]
    NoAnswer,

    #[error("no command to run")]
    NoCommand,

    /// The command failed and wrote something to stderr.
    #[error("{0}")]
    CommandFailed(String),

    #[error("command failed: {0}")]
    CommandStatus(ExitStatus),
}
