//! gitcomposer - CLI entry point.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use gitcomposer::config::{Config, parse_repo_path};
use gitcomposer::workflow::Composer;

/// Generate and execute a commit for a Git repository using the Gemini CLI.
#[derive(Parser, Debug)]
#[command(name = "gitcomposer")]
#[command(about = "Generate and execute a commit for a Git repository using the Gemini CLI")]
#[command(version)]
struct Cli {
    /// The path to the local git repository. Defaults to the current directory.
    #[arg(default_value = ".", value_parser = parse_repo_path)]
    path: PathBuf,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Config { path: cli.path };

    // Every handled failure is reported and the process still exits 0.
    match Composer::system().run(&config).await {
        Ok(outcome) => println!("{}", outcome),
        Err(e) => eprintln!("{}", e),
    }

    Ok(())
}
