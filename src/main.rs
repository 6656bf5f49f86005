use anyhow::Result;
use clap::Parser;
use console::Term;
use log::error;

use howto::ai::ReqwestTransport;
use howto::utils::SystemShell;
use howto::{Cli, CommandHandler, Config, History, OutputFormatter, VendorClient, Version};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Initialize logging - only show errors
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Error)
        .parse_default_env()
        .init();

    let cli = Cli::parse();
    let formatter = OutputFormatter::new(console::colors_enabled_stderr());

    if let Err(e) = run(cli).await {
        error!("howto failed: {e:#}");
        eprintln!("{}", formatter.format_error(&e.to_string()));
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = Config::load()?;
    let mut history = History::load_default()?;
    let formatter = OutputFormatter::new(console::colors_enabled());

    let Some(input) = cli.input() else {
        formatter.write_usage(&mut std::io::stdout())?;
        std::process::exit(1);
    };

    let transport = ReqwestTransport::new(config.timeout)?;
    let assistant = VendorClient::from_config(&config, transport);
    let handler = CommandHandler::new(
        config,
        Version::current(),
        assistant,
        SystemShell::new(),
        formatter,
    )
    .with_spinner(Term::stderr().is_term());

    let mut stdout = std::io::stdout();
    handler.handle(&mut stdout, &input, &mut history).await
}
