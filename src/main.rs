use std::fs::File;
use std::io::{self, BufReader, IsTerminal};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use ascii_draw::config::load_config;
use ascii_draw::interactive::{run_script, Interactive};
use ascii_draw::Session;

/// Draw lines, rectangles and bucket fills on an ASCII canvas
#[derive(Debug, Parser)]
#[command(name = "ascii-draw", version, about)]
struct Cli {
    /// Config file (defaults to the platform config directory)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Read commands from a file instead of the terminal
    #[arg(long, value_name = "FILE")]
    script: Option<PathBuf>,

    /// Log at info level
    #[arg(short, long)]
    verbose: bool,

    /// Log at debug level
    #[arg(long)]
    debug: bool,

    /// Do not print the start-up banner
    #[arg(long)]
    no_banner: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set log level based on flags
    let log_level = if cli.debug {
        tracing::Level::DEBUG
    } else if cli.verbose {
        tracing::Level::INFO
    } else {
        tracing::Level::WARN
    };

    // Logs go to stderr so stdout only carries canvases
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(log_level.into()),
        )
        .with_writer(io::stderr)
        .with_ansi(false)
        .init();

    tracing::info!("Starting ascii-draw version {}", env!("CARGO_PKG_VERSION"));

    let config = load_config(cli.config.as_deref()).context("loading configuration")?;
    tracing::debug!("Using config: {:?}", config);

    if let Some(path) = &cli.script {
        let file = File::open(path)
            .with_context(|| format!("opening script {}", path.display()))?;
        let mut session = Session::new(&config);
        run_script(&mut session, BufReader::new(file), &mut io::stdout().lock())?;
        return Ok(());
    }

    if !io::stdin().is_terminal() {
        let mut session = Session::new(&config);
        run_script(&mut session, io::stdin().lock(), &mut io::stdout().lock())?;
        return Ok(());
    }

    let mut repl = Interactive::new(&config, !cli.no_banner)?;
    repl.run()?;
    Ok(())
}
