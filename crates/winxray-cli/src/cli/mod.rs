mod commands;

use clap::Parser;
use winxray_core::domain::{ErrorCategory, ExportError};
use winxray_core::program::{RunError, SettingsError};

const PROGRAM_NAME: &str = "winxray-rs";

pub fn run_from_env() -> i32 {
    let args: Vec<String> = std::env::args().skip(1).collect();

    match run(args) {
        Ok(code) => code,
        Err(error) => {
            eprintln!("{}", error.diagnostic_line());
            if let Some(line) = error.category().fatal_exit_line() {
                eprintln!("{line}");
            }
            error.exit_code()
        }
    }
}

pub fn run<I, S>(args: I) -> Result<i32, CliError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let full_args = std::iter::once(PROGRAM_NAME.to_string())
        .chain(args.into_iter().map(Into::into))
        .collect::<Vec<_>>();
    parse_and_dispatch(full_args)
}

fn parse_and_dispatch(args: Vec<String>) -> Result<i32, CliError> {
    match Cli::try_parse_from(&args) {
        Ok(cli) => dispatch_parsed(cli.command),
        Err(err) => match err.kind() {
            clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion => {
                print!("{}", err);
                Ok(0)
            }
            _ => Err(CliError::Usage(err.to_string())),
        },
    }
}

#[derive(Parser)]
#[command(
    name = "winxray-rs",
    version,
    about = "Export Monte Carlo microanalysis options to WinXRay"
)]
struct Cli {
    #[command(subcommand)]
    command: CliCommand,
}

#[derive(clap::Subcommand)]
enum CliCommand {
    /// Convert an options file and write one .wxc file per record
    Export(commands::ExportArgs),
    /// Export, launch WinXRay on every record and zip its work directory
    Run(commands::RunArgs),
    /// Check that the settings point to a runnable WinXRay executable
    Validate(commands::ValidateArgs),
}

fn dispatch_parsed(command: CliCommand) -> Result<i32, CliError> {
    match command {
        CliCommand::Export(args) => commands::run_export_command(args),
        CliCommand::Run(args) => commands::run_run_command(args),
        CliCommand::Validate(args) => commands::run_validate_command(args),
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("{0}")]
    Usage(String),
    #[error(transparent)]
    Export(#[from] ExportError),
    #[error(transparent)]
    Settings(#[from] SettingsError),
    #[error(transparent)]
    Run(#[from] RunError),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl CliError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Usage(_) => ErrorCategory::InputValidationError,
            Self::Export(error) => error.category(),
            Self::Settings(error) => error.category(),
            Self::Run(error) => error.category(),
            Self::Internal(_) => ErrorCategory::InternalError,
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            Self::Usage(_) => "INPUT.CLI_USAGE",
            Self::Export(error) => error.placeholder(),
            Self::Settings(error) => error.placeholder(),
            Self::Run(error) => error.placeholder(),
            Self::Internal(_) => "INTERNAL.CLI",
        }
    }

    pub fn exit_code(&self) -> i32 {
        self.category().exit_code()
    }

    pub fn diagnostic_line(&self) -> String {
        match self {
            Self::Usage(_) => format!("ERROR: [{}] {self}", self.placeholder()),
            Self::Export(error) => error.diagnostic_line(),
            Self::Settings(error) => error.diagnostic_line(),
            Self::Run(error) => error.diagnostic_line(),
            Self::Internal(error) => format!("ERROR: [{}] {error:#}", self.placeholder()),
        }
    }
}
