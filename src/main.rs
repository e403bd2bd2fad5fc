//! jsonp CLI - Professional JSON prompt generator

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use jsonp::{
    config::{Config, ConfigKey, ConfigStore, FileConfigStore},
    storage::{DirOutputStore, OutputStore},
    tui::{
        renderer::{SystemInfo, TerminalRenderer},
        theme::{find_theme, theme_names, ThemeSelection, DEFAULT_THEME},
        InteractiveShell,
    },
    OllamaClient,
};
use std::sync::Arc;
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(name = "jsonp")]
#[command(about = "JSONP-CLI - Professional JSON Prompt Generator")]
#[command(version)]
struct Cli {
    /// Start the interactive session when omitted
    #[command(subcommand)]
    command: Option<Commands>,

    /// Verbosity level
    #[arg(short, long, global = true, default_value = "warn")]
    log_level: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Show or set a configuration value
    Config {
        /// Configuration key (prompt_model, theme, output_dir); omit to show the file
        key: Option<String>,

        /// Value to set
        value: Option<String>,
    },

    /// View prompt history
    History,

    /// Show system information
    Info,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let log_level = match cli.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::WARN,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let (store, load_error) = match FileConfigStore::open() {
        Ok(store) => (store, None),
        Err(e) => {
            warn!("Ignoring unreadable config, using defaults: {}", e);
            (FileConfigStore::with_defaults(Config::default_path()), Some(e))
        }
    };
    let renderer = TerminalRenderer::new(
        ThemeSelection::from_name(&store.get_or(ConfigKey::Theme, DEFAULT_THEME)).current(),
    );

    match cli.command {
        None => run_interactive(store).await?,
        Some(Commands::Config { key: None, .. }) => {
            let location = format!("Config file: {}", store.location());
            println!("\n{}\n", renderer.info_line(&location));
            println!("{}", Config::example());
        }
        Some(Commands::Config {
            key: Some(key),
            value,
        }) => {
            // Writing now would replace the unreadable file with defaults
            if let (Some(e), Some(_)) = (&load_error, &value) {
                bail!("Refusing to update {}: {}", store.location(), e);
            }
            run_config(store, &renderer, &key, value)?
        }
        Some(Commands::History) => {
            let output = DirOutputStore::new(store.config().output_dir());
            let entries = output.recent(10)?;
            println!("{}", renderer.history(&entries, output.dir()));
        }
        Some(Commands::Info) => {
            let info = SystemInfo {
                endpoint: store.config().ollama.url.clone(),
                output_dir: store.config().output_dir().display().to_string(),
                config_location: store.location(),
                uptime_secs: 0,
            };
            println!("{}", renderer.info(&info));
        }
    }

    Ok(())
}

async fn run_interactive(store: FileConfigStore) -> Result<()> {
    let config = store.config().clone();
    info!("Using Ollama at {}", config.ollama.url);

    let generator = Arc::new(OllamaClient::new(&config.ollama)?);
    let output = DirOutputStore::new(config.output_dir());

    let mut shell = InteractiveShell::new(generator, Box::new(store), Box::new(output));
    shell.run().await
}

fn run_config(
    mut store: FileConfigStore,
    renderer: &TerminalRenderer,
    key: &str,
    value: Option<String>,
) -> Result<()> {
    let key: ConfigKey = key.parse()?;

    match value {
        Some(value) => {
            if key == ConfigKey::Theme && find_theme(&value).is_none() {
                bail!(
                    "Unknown theme: {} (available: {})",
                    value,
                    theme_names().join(", ")
                );
            }
            store.set(key, &value)?;
            info!("Configuration updated: {} = {}", key, value);
            println!("\n{}\n", renderer.success(&format!("{} = {}", key, value)));
        }
        None => {
            let current = store.get_or(key, "not set");
            println!("\n{}\n", renderer.info_line(&format!("{} = {}", key, current)));
        }
    }
    Ok(())
}
