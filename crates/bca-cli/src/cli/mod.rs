mod commands;
mod helpers;

use bca_core::domain::BcaError;
use clap::Parser;
use tracing_subscriber::EnvFilter;

pub fn run_from_env() -> i32 {
    match run(std::env::args().skip(1)) {
        Ok(code) => code,
        Err(error) => {
            let error = error.as_bca_error();
            eprintln!("{}", error.diagnostic_line());
            eprintln!("{}", error.fatal_exit_line());
            error.exit_code()
        }
    }
}

pub fn run<I, S>(args: I) -> Result<i32, CliError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let full_args = std::iter::once("bca-config".to_string())
        .chain(args.into_iter().map(Into::into))
        .collect::<Vec<_>>();
    parse_and_dispatch(full_args)
}

fn parse_and_dispatch(args: Vec<String>) -> Result<i32, CliError> {
    match Cli::try_parse_from(&args) {
        Ok(cli) => {
            init_logging(cli.verbose);
            dispatch_parsed(cli.command)
        }
        Err(err) => match err.kind() {
            clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion => {
                print!("{}", err);
                Ok(0)
            }
            _ => Err(CliError::Usage(err.to_string())),
        },
    }
}

/// Logs go to stderr; `RUST_LOG` takes precedence over `-v`.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

#[derive(Parser)]
#[command(
    name = "bca-config",
    about = "Convert ion simulation configurations between save files and engine inputs"
)]
struct Cli {
    /// Raise log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: CliCommand,
}

#[derive(clap::Subcommand)]
enum CliCommand {
    /// List supported engines and versions
    Engines,
    /// Write engine input files from a save file
    Encode(commands::EncodeArgs),
    /// Read engine input files into a save file
    Decode(commands::DecodeArgs),
    /// Summarize a save file
    Inspect(commands::InspectArgs),
}

fn dispatch_parsed(command: CliCommand) -> Result<i32, CliError> {
    match command {
        CliCommand::Engines => commands::run_engines_command(),
        CliCommand::Encode(args) => commands::run_encode_command(args),
        CliCommand::Decode(args) => commands::run_decode_command(args),
        CliCommand::Inspect(args) => commands::run_inspect_command(args),
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("{0}")]
    Usage(String),
    #[error("{0}")]
    Core(BcaError),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl CliError {
    fn as_bca_error(&self) -> BcaError {
        match self {
            Self::Usage(message) => BcaError::input_validation("INPUT.CLI_USAGE", message.clone()),
            Self::Core(error) => error.clone(),
            Self::Internal(error) => BcaError::io_system("IO.CLI", format!("{error:#}")),
        }
    }
}

impl From<BcaError> for CliError {
    fn from(error: BcaError) -> Self {
        Self::Core(error)
    }
}
