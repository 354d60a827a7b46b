use std::{fs, io, path::PathBuf, sync::Arc};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use shared::content::SiteContent;
use tracing::info;
use view_state::{HostCapabilities, PageSession, SimulatedViewport};

mod config;
mod replay;
mod script;

use config::{load_settings, Settings};

#[derive(Parser, Debug)]
#[command(name = "portfolio", about = "Headless host for the portfolio page view state")]
struct Cli {
    /// Content catalogue (TOML); overrides the configured path.
    #[arg(long)]
    content: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Replay a JSON-lines event script and print a view snapshot after every step.
    Replay { script: PathBuf },
    /// Print the resolved content catalogue as JSON.
    Content,
}

fn load_content(settings: &Settings) -> Result<SiteContent> {
    match &settings.content_path {
        Some(path) => SiteContent::load(path)
            .with_context(|| format!("failed to load content from {}", path.display())),
        None => Ok(SiteContent::default()),
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut settings = load_settings();
    if let Some(path) = cli.content {
        settings.content_path = Some(path);
    }

    tracing_subscriber::fmt()
        .with_env_filter(settings.log_filter.as_str())
        .with_writer(io::stderr)
        .init();

    let content = load_content(&settings)?;

    match cli.command {
        Command::Content => {
            println!("{}", serde_json::to_string_pretty(&content)?);
        }
        Command::Replay { script } => {
            let raw = fs::read_to_string(&script)
                .with_context(|| format!("failed to read replay script {}", script.display()))?;
            let steps = script::parse_script(&raw)?;

            let viewport = Arc::new(SimulatedViewport::new());
            let mut session = PageSession::mount_on_tokio(
                settings.controller_config(),
                Arc::new(content),
                HostCapabilities::from_viewport(viewport.clone()),
            )?;
            info!(steps = steps.len(), script = %script.display(), "replaying page events");

            let stdout = io::stdout();
            let mut out = stdout.lock();
            replay::run_replay(&mut session, &viewport, &steps, &mut out).await?;
            session.teardown();
        }
    }

    Ok(())
}
