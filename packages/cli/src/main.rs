mod commands;
mod config;

use clap::{Parser, Subcommand};
use colored::Colorize;
use commands::{
    apply, init, logo, render, search, validate, ApplyArgs, InitArgs, LogoArgs, RenderArgs,
    SearchArgs, ValidateArgs,
};
use config::Config;
use tracing_subscriber::EnvFilter;

/// formdeck - build multi-slide forms from the command line
#[derive(Parser, Debug)]
#[command(name = "formdeck")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Create a starter form and config
    Init(InitArgs),

    /// Render slides to standalone HTML
    Render(RenderArgs),

    /// Apply a JSON mutation script as one undo step
    Apply(ApplyArgs),

    /// Audit the form and check sample answers
    Validate(ValidateArgs),

    /// Search Unsplash for images
    Search(SearchArgs),

    /// Set the brand logo from a PNG file
    Logo(LogoArgs),
}

/// RUST_LOG wins; otherwise the config's log level
fn init_tracing(cwd: &str) {
    let level = Config::load(cwd)
        .map(|config| config.log_level)
        .unwrap_or_else(|_| "info".to_string());

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let cwd = match std::env::current_dir() {
        Ok(dir) => dir.display().to_string(),
        Err(err) => {
            eprintln!("{} Cannot get current directory: {}", "Error:".red().bold(), err);
            std::process::exit(1);
        }
    };
    init_tracing(&cwd);

    let result = match cli.command {
        Command::Init(args) => init(args, &cwd),
        Command::Render(args) => render(args, &cwd),
        Command::Apply(args) => apply(args, &cwd),
        Command::Validate(args) => validate(args, &cwd),
        Command::Search(args) => search(args, &cwd).await,
        Command::Logo(args) => logo(args, &cwd).await,
    };

    if let Err(err) = result {
        eprintln!();
        eprintln!("{} {:#}", "Error:".red().bold(), err);
        eprintln!();
        std::process::exit(1);
    }
}
