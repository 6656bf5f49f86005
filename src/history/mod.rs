pub mod path;
pub mod store;

pub use path::history_path;
pub use store::{History, Storage};
