mod cli;
mod context;
mod handlers;
mod output;

use checklist_core::AppConfig;
use checklist_persistence::JsonFileStore;
use checklist_tui::App;
use clap::{CommandFactory, Parser};
use cli::{Cli, Commands};
use context::CliContext;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Ok(log_path) = std::env::var("CHECKLIST_DEBUG_LOG") {
        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        tracing_subscriber::fmt()
            .with_writer(log_file)
            .with_max_level(tracing::Level::DEBUG)
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
            .with_ansi(false)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_max_level(tracing::Level::WARN)
            .init();
    }

    let cli = Cli::parse();
    let file_path = cli
        .file
        .unwrap_or_else(|| AppConfig::load().effective_data_file());

    match cli.command {
        None => {
            tracing::info!("Opening {}", file_path.display());
            let mut app = App::load(Arc::new(JsonFileStore::new(&file_path))).await?;
            app.run().await?;
        }
        Some(Commands::Completions { shell }) => {
            clap_complete::generate(shell, &mut Cli::command(), "checklist", &mut std::io::stdout());
        }
        Some(cmd) => {
            let mut ctx = CliContext::load(&file_path).await?;
            handlers::handle(&mut ctx, cmd).await?;
        }
    }

    Ok(())
}
