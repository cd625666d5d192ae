//! Docdesk: document manager and speech capture client
//!
//! Usage:
//!   docdesk                 - Open the desktop window
//!   docdesk list            - List uploaded files
//!   docdesk upload <path>   - Upload a document
//!   docdesk search <query>  - Search documents
//!   docdesk delete <name>   - Delete one file
//!   docdesk delete-all      - Delete every file
//!   docdesk transcribe      - Record and transcribe speech
//!   docdesk config          - Show effective configuration

use std::process::ExitCode;

use clap::Parser;
use docdesk::app::Docdesk;
use docdesk::cli::Cli;
use docdesk::commands;
use docdesk::config::Config;
use iced::{window, Size};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> ExitCode {
    init_logging();

    let cli = Cli::parse();

    let mut config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };
    if let Some(url) = &cli.api_url {
        config.api_url = url.trim_end_matches('/').to_string();
    }

    match cli.command {
        None => match start_gui(config) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                tracing::error!("Window error: {}", e);
                ExitCode::FAILURE
            }
        },
        Some(command) => match commands::run(&command, &config) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("Error: {}", e);
                ExitCode::FAILURE
            }
        },
    }
}

fn init_logging() {
    // Logs go to stderr so CLI output stays pipeable
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("docdesk=info"));
    let _ = tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();
}

fn start_gui(config: Config) -> iced::Result {
    tracing::info!("Starting Docdesk window...");

    iced::application(Docdesk::title, Docdesk::update, Docdesk::view)
        .theme(Docdesk::theme)
        .window(window::Settings {
            size: Size::new(820.0, 760.0),
            position: window::Position::Centered,
            resizable: true,
            ..Default::default()
        })
        .antialiasing(true)
        .run_with(move || Docdesk::new(config))
}
