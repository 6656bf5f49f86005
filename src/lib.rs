pub mod ai;
pub mod cli;
pub mod config;
pub mod error;
pub mod history;
pub mod utils;

pub use ai::{Assistant, VendorClient};
pub use cli::{Cli, CommandHandler, Input, OutputFormatter, Version};
pub use config::Config;
pub use error::HowtoError;
pub use history::History;
