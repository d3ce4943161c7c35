use super::CliError;
use anyhow::Context;
use serde::Serialize;
use std::path::PathBuf;
use winxray_core::domain::Diagnostic;
use winxray_core::options::load_options;
use winxray_core::program::{WinXRayProgram, WrittenRecord, load_settings};

#[derive(clap::Args)]
pub(super) struct ExportArgs {
    /// Options JSON file
    #[arg(long)]
    options: PathBuf,

    /// Directory receiving the .wxc files
    #[arg(long, default_value = ".")]
    output_dir: PathBuf,

    /// Print a JSON summary instead of one path per line
    #[arg(long)]
    json: bool,
}

#[derive(clap::Args)]
pub(super) struct RunArgs {
    /// Options JSON file
    #[arg(long)]
    options: PathBuf,

    /// Settings JSON file naming the WinXRay executable
    #[arg(long)]
    settings: PathBuf,

    /// Directory receiving one results archive per record
    #[arg(long, default_value = ".")]
    output_dir: PathBuf,

    /// Directory where WinXRay runs; defaults to the output directory
    #[arg(long)]
    work_dir: Option<PathBuf>,
}

#[derive(clap::Args)]
pub(super) struct ValidateArgs {
    /// Settings JSON file
    #[arg(long)]
    settings: PathBuf,
}

#[derive(Debug, Serialize)]
struct ExportSummary {
    options: PathBuf,
    output_dir: PathBuf,
    records: Vec<RecordSummary>,
}

#[derive(Debug, Serialize)]
struct RecordSummary {
    name: String,
    path: PathBuf,
    warnings: Vec<WarningSummary>,
}

#[derive(Debug, Serialize)]
struct WarningSummary {
    placeholder: &'static str,
    message: String,
}

impl From<&Diagnostic> for WarningSummary {
    fn from(diagnostic: &Diagnostic) -> Self {
        Self {
            placeholder: diagnostic.placeholder(),
            message: diagnostic.message().to_string(),
        }
    }
}

impl From<WrittenRecord> for RecordSummary {
    fn from(record: WrittenRecord) -> Self {
        Self {
            warnings: record.warnings.iter().map(WarningSummary::from).collect(),
            name: record.name,
            path: record.path,
        }
    }
}

pub(super) fn run_export_command(args: ExportArgs) -> Result<i32, CliError> {
    let options = load_options(&args.options)?;
    let written = WinXRayProgram::new().export_to_dir(&options, &args.output_dir)?;

    if written.is_empty() {
        tracing::warn!(
            options = %args.options.display(),
            "options were rejected for WinXRay; no file written"
        );
    }

    if args.json {
        let summary = ExportSummary {
            options: args.options,
            output_dir: args.output_dir,
            records: written.into_iter().map(RecordSummary::from).collect(),
        };
        let rendered =
            serde_json::to_string_pretty(&summary).context("failed to render export summary")?;
        println!("{rendered}");
    } else {
        for record in &written {
            println!("{}", record.path.display());
        }
    }
    Ok(0)
}

pub(super) fn run_run_command(args: RunArgs) -> Result<i32, CliError> {
    let settings = load_settings(&args.settings)?;
    let options = load_options(&args.options)?;
    let work_dir = args.work_dir.as_deref().unwrap_or(&args.output_dir);

    let outcomes = WinXRayProgram::new().run(&options, &settings, &args.output_dir, work_dir)?;
    if outcomes.is_empty() {
        tracing::warn!(
            options = %args.options.display(),
            "options were rejected for WinXRay; nothing run"
        );
    }

    for outcome in &outcomes {
        println!("{}", outcome.archive.display());
    }
    Ok(0)
}

pub(super) fn run_validate_command(args: ValidateArgs) -> Result<i32, CliError> {
    let settings = load_settings(&args.settings)?;
    let exe = WinXRayProgram::new().validate(&settings)?;
    println!("{}", exe.display());
    Ok(0)
}
