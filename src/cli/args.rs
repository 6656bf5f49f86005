use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "howto")]
#[command(about = "A humble command-line assistant")]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct Cli {
    /// Describe the task to get a command suggestion, or one of
    /// -h/--help, -v/--version, -run
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<String>,
}

/// What the user asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Help,
    Version,
    RunLast,
    Question(String),
}

impl Input {
    /// Flags only match when they are the whole input; anything else is
    /// a question. Returns `None` when there is no input at all.
    pub fn from_args(args: &[String]) -> Option<Self> {
        if args.is_empty() {
            return None;
        }

        let input = args.join(" ");
        Some(match input.as_str() {
            "-h" | "--help" => Input::Help,
            "-v" | "--version" => Input::Version,
            "-run" => Input::RunLast,
            _ => Input::Question(input),
        })
    }
}

impl Cli {
    pub fn input(&self) -> Option<Input> {
        Input::from_args(&self.args)
    }
}
