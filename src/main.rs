//! notepad-collector: Command-line host for the Maimemo notepad collector

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use notepad_collector::config::{is_valid_token, path_resolver, CollectorConfig, WordCheck};
use notepad_collector::{CollectOutcome, Collector, TracingLogger};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// ============================================================================
// Config Loading
// ============================================================================

/// Load config with priority: CLI > env > file > defaults
fn load_config(config_path: Option<&str>) -> Result<CollectorConfig> {
    let path = path_resolver::config_file_path(config_path)?;

    let file_config = if path.exists() {
        tracing::debug!("Loading config from {}", path.display());
        CollectorConfig::from_file(&path)?
    } else if config_path.is_some() {
        return Err(anyhow!("Config file not found: {}", path.display()));
    } else {
        CollectorConfig::default()
    };

    Ok(file_config.merge_with(&CollectorConfig::from_env()))
}

// ============================================================================
// CLI Implementation
// ============================================================================

/// notepad-collector: add looked-up words to a Maimemo cloud notepad
#[derive(Parser)]
#[command(name = "notepad-collector")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to the config file (default: $XDG_CONFIG_HOME/notepad-collector/config.toml)
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a default configuration file
    Init {
        /// Force overwrite existing configuration
        #[arg(short, long)]
        force: bool,
    },
    /// Add a word or phrase to the notepad
    Add {
        /// Word or phrase to collect
        word: String,

        /// Target language hint (accepted for plugin compatibility, unused)
        #[arg(long, default_value = "en")]
        target_language: String,

        /// Notepad title (overrides config)
        #[arg(short, long)]
        title: Option<String>,

        /// API token (overrides config)
        #[arg(long)]
        token: Option<String>,

        /// Skip the dictionary check
        #[arg(long)]
        no_word_check: bool,
    },
    /// Check whether a word is in the Maimemo dictionary
    Check {
        /// Word to look up
        word: String,

        /// API token (overrides config)
        #[arg(long)]
        token: Option<String>,
    },
}

fn apply_overrides(
    mut config: CollectorConfig,
    token: Option<&str>,
    title: Option<&str>,
    no_word_check: bool,
) -> CollectorConfig {
    if let Some(token) = token {
        config = config.with_api_token(token);
    }
    if let Some(title) = title {
        config = config.with_word_list_title(title);
    }
    if no_word_check {
        config = config.with_word_check(WordCheck::Disable);
    }
    config
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging (to stderr so stdout only carries results)
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    match cli.command {
        Commands::Init { force } => {
            let config_path = path_resolver::config_file_path(cli.config.as_deref())?;
            let config_dir = config_path
                .parent()
                .map(PathBuf::from)
                .unwrap_or_else(path_resolver::config_dir);

            eprintln!("Initializing notepad-collector configuration...");
            eprintln!("Config directory: {}", config_dir.display());

            if !config_dir.exists() {
                std::fs::create_dir_all(&config_dir)?;
                eprintln!("Created config directory");
            }

            if config_path.exists() && !force {
                eprintln!("Configuration file already exists: {}", config_path.display());
                eprintln!("Use --force to overwrite");
                return Ok(());
            }

            let toml_content = CollectorConfig::default().to_toml()?;
            std::fs::write(&config_path, &toml_content)?;

            eprintln!("Created configuration file: {}", config_path.display());
            eprintln!("Set api_token and word_list_title in it before collecting words.");
            Ok(())
        }
        Commands::Add {
            word,
            target_language,
            title,
            token,
            no_word_check,
        } => {
            let config = apply_overrides(
                load_config(cli.config.as_deref())?,
                token.as_deref(),
                title.as_deref(),
                no_word_check,
            );

            let collector = Collector::from_config(config, TracingLogger);
            match collector.collect(&word, &target_language).await {
                Ok(CollectOutcome::Created { notepad_id, title }) => {
                    println!("Created notepad \"{}\" ({})", title, notepad_id);
                    Ok(())
                }
                Ok(CollectOutcome::Appended { notepad_id, title }) => {
                    println!("Added to notepad \"{}\" ({})", title, notepad_id);
                    Ok(())
                }
                Err(e) => {
                    tracing::debug!("Collection failed ({:?})", e.kind());
                    Err(anyhow!(e))
                }
            }
        }
        Commands::Check { word, token } => {
            let config = apply_overrides(
                load_config(cli.config.as_deref())?,
                token.as_deref(),
                None,
                false,
            );
            if !is_valid_token(config.api_token()) {
                return Err(anyhow!(notepad_collector::CollectError::InvalidToken));
            }

            let word = word.trim().to_string();
            let collector = Collector::from_config(config, TracingLogger);
            collector.check_vocabulary(&word).await?;
            println!("\"{}\" is in the dictionary", word);
            Ok(())
        }
    }
}
