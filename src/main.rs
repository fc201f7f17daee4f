use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use ascii_patterns::Gallery;

#[derive(Debug, Parser)]
#[command(name = "patterns", version)]
#[command(about = "Render named ASCII-art patterns")]
struct Cli {
    /// Gallery file (TOML or JSON); defaults to the user gallery or the showcase
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Only render entries whose title contains this text
    #[arg(long)]
    only: Option<String>,

    /// Print entry titles instead of rendering
    #[arg(long)]
    list: bool,

    /// Log progress
    #[arg(short, long)]
    verbose: bool,

    /// Log everything
    #[arg(long)]
    debug: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.debug {
        tracing::Level::DEBUG
    } else if cli.verbose {
        tracing::Level::INFO
    } else {
        tracing::Level::WARN
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(log_level.into()),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    tracing::info!("patterns version {}", env!("CARGO_PKG_VERSION"));

    let mut gallery = Gallery::load_or_default(cli.config.as_deref())
        .context("Failed to load gallery")?;
    if let Some(needle) = &cli.only {
        gallery = gallery.filter(needle);
    }

    if cli.list {
        for title in gallery.titles() {
            println!("{title}");
        }
        return Ok(());
    }

    let rendered = gallery.render();
    let failures = rendered.iter().filter(|item| item.result.is_err()).count();
    for item in &rendered {
        if let Some(block) = item.to_markdown() {
            print!("{block}");
        }
        if let Some(message) = item.error_message() {
            eprintln!("{message}");
        }
    }

    tracing::info!(
        rendered = rendered.len() - failures,
        failed = failures,
        "gallery done"
    );
    Ok(())
}
