pub mod converter;
pub mod expander;
pub mod exporter;
pub mod models;
pub mod runner;
pub mod settings;

mod traits;

pub use converter::{SUPPORTED_DETECTORS, WinXRayConverter};
pub use expander::expand_single_detector_same_opening;
pub use exporter::WinXRayExporter;
pub use runner::{RunError, RunOutcome, WinXRayRunner, archive_dir, latest_results_dir};
pub use settings::{Settings, SettingsError, WinXRaySettings, load_settings};
pub use traits::{Conversion, Converter, Exported, Exporter, FileExporter};

use crate::domain::{Diagnostic, ExportError, ExportResult};
use crate::options::Options;
use crate::wxc::WxcOptions;
use std::fs;
use std::path::{Path, PathBuf};

/// Options file written for one converted options.
#[derive(Debug, Clone, PartialEq)]
pub struct WrittenRecord {
    pub name: String,
    pub path: PathBuf,
    pub warnings: Vec<Diagnostic>,
}

/// Records exported from one options, with the conversion warnings kept
/// apart from each record's own.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProgramExport {
    pub records: Vec<Exported<WxcOptions>>,
    pub warnings: Vec<Diagnostic>,
}

/// WinXRay as a Monte Carlo program: converter, exporter and settings check.
#[derive(Debug, Clone, Copy, Default)]
pub struct WinXRayProgram {
    converter: WinXRayConverter,
    exporter: WinXRayExporter,
}

impl WinXRayProgram {
    pub fn new() -> Self {
        Self::default()
    }

    /// Converts then exports; options rejected by the converter yield no
    /// records.
    pub fn export(&self, options: &Options) -> ExportResult<ProgramExport> {
        let conversion = self.converter.convert(options);
        let records = conversion
            .options
            .iter()
            .map(|converted| self.exporter.export_record(converted))
            .collect::<ExportResult<Vec<_>>>()?;

        tracing::debug!(
            name = %options.name,
            records = records.len(),
            "exported options for WinXRay"
        );
        Ok(ProgramExport {
            records,
            warnings: conversion.warnings,
        })
    }

    pub fn export_to_dir(&self, options: &Options, dir: &Path) -> ExportResult<Vec<WrittenRecord>> {
        let export = self.export(options)?;
        if export.records.is_empty() {
            return Ok(Vec::new());
        }

        fs::create_dir_all(dir).map_err(|source| ExportError::Io {
            path: dir.to_path_buf(),
            source,
        })?;

        let mut written = Vec::with_capacity(export.records.len());
        for mut record in export.records {
            self.exporter.write_record(&mut record, dir)?;

            let mut warnings = export.warnings.clone();
            warnings.extend(record.warnings);
            written.push(WrittenRecord {
                path: dir.join(format!(
                    "{}.{}",
                    record.name,
                    self.exporter.file_extension()
                )),
                name: record.name,
                warnings,
            });
        }
        Ok(written)
    }

    pub fn validate<'a>(&self, settings: &'a Settings) -> Result<&'a Path, SettingsError> {
        settings.winxray_executable()
    }

    /// Exports `options`, then for every record writes its options file into
    /// `work_dir/<name>`, launches WinXRay on it and zips that directory to
    /// `output_dir/<name>.zip`.
    pub fn run(
        &self,
        options: &Options,
        settings: &Settings,
        output_dir: &Path,
        work_dir: &Path,
    ) -> Result<Vec<RunOutcome>, RunError> {
        let winxray = WinXRayRunner::new(settings)?;
        let export = self.export(options)?;
        if export.records.is_empty() {
            return Ok(Vec::new());
        }
        create_dir(output_dir)?;

        let mut outcomes = Vec::with_capacity(export.records.len());
        for mut record in export.records {
            if !exporter::is_file_stem(&record.name) {
                return Err(ExportError::InvalidName(record.name).into());
            }
            let record_dir = work_dir.join(&record.name);
            create_dir(&record_dir)?;
            let record_dir = fs::canonicalize(&record_dir).map_err(|source| RunError::Io {
                path: record_dir.clone(),
                source,
            })?;

            self.exporter.write_record(&mut record, &record_dir)?;
            let wxc_path = record_dir.join(format!(
                "{}.{}",
                record.name,
                self.exporter.file_extension()
            ));
            winxray.launch(&wxc_path)?;

            let result_dir = latest_results_dir(&record_dir)?;
            let archive =
                output_dir.join(format!("{}.{}", record.name, runner::ARCHIVE_EXTENSION));
            archive_dir(&record_dir, &archive)?;
            tracing::debug!(
                name = %record.name,
                results = %result_dir.display(),
                archive = %archive.display(),
                "WinXRay run archived"
            );

            let mut warnings = export.warnings.clone();
            warnings.extend(record.warnings);
            outcomes.push(RunOutcome {
                name: record.name,
                wxc_path,
                result_dir,
                archive,
                warnings,
            });
        }
        Ok(outcomes)
    }
}

fn create_dir(dir: &Path) -> Result<(), RunError> {
    fs::create_dir_all(dir).map_err(|source| RunError::Io {
        path: dir.to_path_buf(),
        source,
    })
}
