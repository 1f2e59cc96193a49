use std::io;
use std::path::PathBuf;
use std::process;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod check;
mod details;
mod entry;
mod prompt;
mod report;
mod status_log;
mod table;

#[derive(Parser)]
#[command(about = "Check a password against composition rules and your personal details")]
struct Cli {
    /// Log more; repeat for more detail. `RUST_LOG` takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand)]
enum Command {
    /// Collect your personal details, read a password, and report which rules it breaks.
    Check(check::CheckArgs),
    /// Generate passwords that pass every composition rule.
    Generate {
        /// How many passwords to generate.
        #[arg(long, short = 'n', default_value_t = 1)]
        count: usize,
        /// Print the passwords as a JSON array.
        #[arg(long)]
        json: bool,
    },
    /// List the rules passwords are checked against.
    Rules,
}

fn run(command: Command) -> Result<(), ProgError> {
    match command {
        Command::Check(args) => check::check(args)?,
        Command::Generate { count, json } => report::print_generated(count, json)?,
        Command::Rules => table::print_rules()?,
    }

    Ok(())
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli.command) {
        Ok(()) => (),
        Err(ProgError::NotStrong(_)) => process::exit(2),
        Err(ProgError::Other(err)) => {
            eprintln!("Error: {err:?}");
            process::exit(1);
        }
        Err(err) => {
            eprintln!("{err}");
            process::exit(1);
        }
    }
}

fn load_details(path: PathBuf) -> Result<passcheck::PersonalDetails, ProgError> {
    let file = std::fs::File::open(&path)
        .with_context(|| format!("failed to open personal details file {}", path.display()))?;
    passcheck::PersonalDetails::from_yaml_reader(io::BufReader::new(file))
        .map_err(|source| ProgError::BadDetailsFile { path, source })
}

#[derive(Debug, thiserror::Error)]
enum ProgError {
    #[error("Input ended while waiting for: {0}")]
    InputEnded(String),
    #[error("Password entry cancelled; exiting.")]
    EntryCancelled,
    #[error("Failed to load personal details from {}: {source}", .path.display())]
    BadDetailsFile {
        path: PathBuf,
        #[source]
        source: passcheck::PersonalDetailsError,
    },
    #[error("The password is {0}, not STRONG.")]
    NotStrong(passcheck::Strength),
    #[error(transparent)]
    Other(anyhow::Error),
}

impl From<anyhow::Error> for ProgError {
    fn from(err: anyhow::Error) -> ProgError {
        ProgError::Other(err)
    }
}
