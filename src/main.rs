//! AVELLON - strategic intelligence console for the terminal
//!
//! This is the binary entry point. All logic lives in the workspace crates.

use std::path::PathBuf;

use avellon::HeadlessOptions;
use avellon_app::config;
use avellon_core::logging;
use avellon_core::prelude::*;
use clap::Parser;

/// AVELLON - strategic intelligence console
#[derive(Parser, Debug)]
#[command(name = "avellon")]
#[command(about = "AVELLON strategic intelligence console", long_about = None)]
struct Args {
    /// Directory holding `.avellon/config.toml` (defaults to the current directory)
    #[arg(value_name = "PATH")]
    path: Option<PathBuf>,

    /// Page to open on startup, e.g. "Insights" or "War Room"
    #[arg(long)]
    page: Option<String>,

    /// Seed for the risk trend generator
    #[arg(long)]
    seed: Option<u64>,

    /// Run in headless mode (JSON output, no TUI)
    #[arg(long)]
    headless: bool,

    /// Identity for a headless login
    #[arg(long, requires_all = ["keycode", "headless"])]
    identity: Option<String>,

    /// Keycode for a headless login
    #[arg(long, requires = "identity")]
    keycode: Option<String>,

    /// Write a default `.avellon/config.toml` and exit
    #[arg(long)]
    init_config: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    color_eyre::install().map_err(|e| Error::terminal(e.to_string()))?;
    logging::init()?;

    let base_path = args
        .path
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")));

    if args.init_config {
        config::init_config_dir(&base_path)?;
        eprintln!(
            "Wrote {}",
            base_path
                .join(config::AVELLON_DIR)
                .join(config::CONFIG_FILENAME)
                .display()
        );
        return Ok(());
    }

    let mut settings = config::load_settings(&base_path);
    if let Some(seed) = args.seed {
        settings.fixtures.seed = Some(seed);
    }

    let result = if args.headless {
        let options = HeadlessOptions {
            credentials: args.identity.zip(args.keycode),
            page: args.page,
        };
        avellon::run_headless(settings, options)
    } else {
        if let Some(page) = args.page {
            settings.session.start_page = Some(page);
        }
        avellon::run(settings).await
    };

    match &result {
        Err(e) if e.is_fatal() => error!("Fatal error, exiting: {:?}", e),
        Err(e) => error!("Application error: {:?}", e),
        Ok(()) => {}
    }
    result
}
