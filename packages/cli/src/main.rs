mod commands;
mod config;

use clap::{Parser, Subcommand};
use colored::Colorize;
use commands::{
    compile, init, package, validate, CompileArgs, InitArgs, PackageArgs, ValidateArgs,
};
use tracing_subscriber::EnvFilter;

/// Mailblock CLI - build and compile block-based HTML emails
#[derive(Parser, Debug)]
#[command(name = "mailblock")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Initialize a new Mailblock project
    Init(InitArgs),

    /// Compile .email.json documents to HTML
    Compile(CompileArgs),

    /// Check that a document file loads
    Validate(ValidateArgs),

    /// Compile a document into a delivery package
    Package(PackageArgs),
}

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let result = std::env::current_dir()
        .map_err(anyhow::Error::from)
        .and_then(|cwd| {
            let cwd = cwd.display().to_string();
            match cli.command {
                Command::Init(args) => init(args, &cwd),
                Command::Compile(args) => compile(args, &cwd),
                Command::Validate(args) => validate(args, &cwd),
                Command::Package(args) => package(args, &cwd),
            }
        });

    if let Err(err) = result {
        eprintln!();
        eprintln!("{} {:#}", "Error:".red().bold(), err);
        eprintln!();
        std::process::exit(1);
    }
}
