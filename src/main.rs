use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

use modrinth_badge::{
    badge::BadgeRequest,
    config::{Config, defaults::DEFAULT_CONFIG_FILE},
    observability::init_tracing,
    services::BadgeService,
};

#[derive(Parser)]
#[command(name = "modrinth-badge")]
#[command(version)]
#[command(about = "Render Modrinth-styled SVG badges")]
#[command(long_about = None)]
struct Cli {
    /// Draw the Modrinth logo on the label side (true/false)
    #[arg(value_parser = parse_logo, required_unless_present = "print_config")]
    logo: Option<bool>,

    /// Left-hand text
    #[arg(required_unless_present = "print_config")]
    label: Option<String>,

    /// Right-hand text
    #[arg(required_unless_present = "print_config")]
    content: Option<String>,

    /// Configuration file path
    #[arg(short, long, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// Write the badge to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Log level (overrides config file)
    #[arg(short = 'v', long, value_name = "LEVEL")]
    log_level: Option<String>,

    /// Render without the badge cache
    #[arg(long)]
    no_cache: bool,

    /// Print the effective configuration as TOML and exit
    #[arg(long)]
    print_config: bool,
}

fn parse_logo(value: &str) -> Result<bool, String> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        other => Err(format!("expected true or false, got '{other}'")),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let (mut config, source) = Config::load_from_file(&cli.config)
        .with_context(|| format!("failed to load configuration from {}", cli.config.display()))?;

    // Override config with CLI arguments
    if let Some(level) = cli.log_level {
        config.logging.level = level;
    }
    if cli.no_cache {
        config.cache.enabled = false;
    }

    if cli.print_config {
        print!("{}", config.to_toml_string()?);
        return Ok(());
    }

    init_tracing(&config.logging.level, config.logging.format);
    info!("{}", source);

    let request = BadgeRequest::new(
        cli.logo.unwrap_or_default(),
        cli.label.unwrap_or_default(),
        cli.content.unwrap_or_default(),
    );

    let service = BadgeService::from_config(&config.cache)?;
    let sweeper = service.cache().map(|cache| cache.start());

    let document = service.badge(&request).await;

    if let Some(sweeper) = sweeper {
        sweeper.stop().await?;
    }

    match cli.output {
        Some(path) => {
            tokio::fs::write(&path, document.as_bytes())
                .await
                .with_context(|| format!("failed to write badge to {}", path.display()))?;
            info!("Badge written to {}", path.display());
        }
        None => println!("{document}"),
    }

    Ok(())
}
