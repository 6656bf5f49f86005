pub mod defaults;
pub mod settings;

pub use defaults::DefaultConfig;
pub use settings::{Config, Vendor};
