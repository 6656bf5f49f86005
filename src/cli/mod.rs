pub mod args;
pub mod commands;
pub mod output;
pub mod version;

pub use args::{Cli, Input};
pub use commands::CommandHandler;
pub use output::{OutputFormatter, Spinner};
pub use version::Version;
