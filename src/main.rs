//! # countryline Main Entry Point
//!
//! Terminal host for the country lookup widget.

use anyhow::{Context, Result};
use countryline::cmd_args::CommandLineArgs;
use countryline::config::{self, WidgetProfile};
use countryline::io::{RawModeGuard, TerminalEventStream, TerminalPage};
use countryline::{AppController, CountryService, NoticeBoard};
use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::{fmt::time::ChronoLocal, EnvFilter};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cmd_args = CommandLineArgs::parse();

    if cmd_args.verbose() {
        init_tracing()?;
    }

    let profile_path = config::get_profile_path();
    let profile = config::load_profile(&profile_path, cmd_args.profile())?;
    tracing::info!("Starting with profile '{}': {:?}", cmd_args.profile(), profile);

    if !atty::is(atty::Stream::Stdout) || !atty::is(atty::Stream::Stdin) {
        anyhow::bail!("countryline needs an interactive terminal");
    }

    run(&profile).await?;

    println!("👋 Bye!");
    Ok(())
}

async fn run(profile: &WidgetProfile) -> Result<()> {
    let source = CountryService::new(&profile.base_url, profile.timeout)?;
    let notices = NoticeBoard::new();
    let page = TerminalPage::new(notices.clone());

    let mut app = AppController::with_io(
        profile,
        TerminalEventStream::new(),
        page,
        notices,
        source,
    );

    // Restores the terminal when dropped, on errors too
    let _guard = RawModeGuard::enable()?;
    app.run().await
}

/// Log to the log file; the terminal is taken by the widget
fn init_tracing() -> Result<()> {
    let log_path = config::expand_path(config::DEFAULT_LOG_PATH)?;
    if let Some(dir) = Path::new(&log_path).parent() {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Cannot create log directory {}", dir.display()))?;
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .with_context(|| format!("Cannot open log file {log_path}"))?;

    let filter = EnvFilter::try_from_env(config::LOG_FILTER_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(config::DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_timer(ChronoLocal::rfc_3339())
        .init();

    tracing::info!("Tracing initialized, logging to {log_path}");
    Ok(())
}
