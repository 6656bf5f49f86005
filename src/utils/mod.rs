pub mod shell;

pub use shell::{ShellRunner, SystemShell};
