//! Launches WinXRay on a written options file and archives what it leaves
//! in the work directory.

use super::settings::{Settings, SettingsError};
use crate::domain::{Diagnostic, ErrorCategory, ExportError};
use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus, Stdio};
use zip::write::FileOptions;
use zip::{CompressionMethod, ZipWriter};

pub const ARCHIVE_EXTENSION: &str = "zip";

/// One simulation run: the options file handed to WinXRay, the results
/// directory it produced and the archive of the whole work directory.
#[derive(Debug, Clone, PartialEq)]
pub struct RunOutcome {
    pub name: String,
    pub wxc_path: PathBuf,
    pub result_dir: PathBuf,
    pub archive: PathBuf,
    pub warnings: Vec<Diagnostic>,
}

#[derive(Debug, thiserror::Error)]
pub enum RunError {
    #[error(transparent)]
    Settings(#[from] SettingsError),
    #[error(transparent)]
    Export(#[from] ExportError),
    #[error("failed to launch WinXRay '{}': {source}", exe.display())]
    Launch { exe: PathBuf, source: io::Error },
    #[error("WinXRay '{}' ended with {status}", exe.display())]
    Failed { exe: PathBuf, status: ExitStatus },
    #[error("cannot find results directories in '{}'", .0.display())]
    MissingResults(PathBuf),
    #[error("failed to archive results into '{}': {source}", path.display())]
    Archive {
        path: PathBuf,
        source: zip::result::ZipError,
    },
    #[error("failed to access '{}': {source}", path.display())]
    Io { path: PathBuf, source: io::Error },
}

impl RunError {
    pub const fn category(&self) -> ErrorCategory {
        match self {
            Self::Settings(error) => error.category(),
            Self::Export(error) => error.category(),
            Self::Launch { .. }
            | Self::Failed { .. }
            | Self::MissingResults(_)
            | Self::Archive { .. }
            | Self::Io { .. } => ErrorCategory::IoSystemError,
        }
    }

    pub const fn placeholder(&self) -> &'static str {
        match self {
            Self::Settings(error) => error.placeholder(),
            Self::Export(error) => error.placeholder(),
            Self::Launch { .. } => "IO.WINXRAY_LAUNCH",
            Self::Failed { .. } => "IO.WINXRAY_FAILED",
            Self::MissingResults(_) => "IO.WINXRAY_RESULTS",
            Self::Archive { .. } => "IO.RESULTS_ARCHIVE",
            Self::Io { .. } => "IO.RUN_FILES",
        }
    }

    pub const fn exit_code(&self) -> i32 {
        self.category().exit_code()
    }

    pub fn diagnostic_line(&self) -> String {
        format!("ERROR: [{}] {}", self.placeholder(), self)
    }
}

fn io_error(path: &Path) -> impl FnOnce(io::Error) -> RunError + '_ {
    move |source| RunError::Io {
        path: path.to_path_buf(),
        source,
    }
}

/// Validated WinXRay executable, launched from its own directory.
#[derive(Debug, Clone)]
pub struct WinXRayRunner {
    exe: PathBuf,
    exe_dir: Option<PathBuf>,
}

impl WinXRayRunner {
    pub fn new(settings: &Settings) -> Result<Self, RunError> {
        let exe = settings.winxray_executable()?;
        let exe = fs::canonicalize(exe).map_err(io_error(exe))?;
        let exe_dir = exe.parent().map(Path::to_path_buf);
        tracing::debug!(exe = %exe.display(), "WinXRay executable");
        Ok(Self { exe, exe_dir })
    }

    /// Runs WinXRay on `wxc_path` and waits for it to end.
    pub fn launch(&self, wxc_path: &Path) -> Result<(), RunError> {
        let mut command = Command::new(&self.exe);
        command.arg(wxc_path).stdout(Stdio::null());
        if let Some(dir) = &self.exe_dir {
            command.current_dir(dir);
        }

        tracing::debug!(
            exe = %self.exe.display(),
            wxc = %wxc_path.display(),
            "launching WinXRay"
        );
        let status = command.status().map_err(|source| RunError::Launch {
            exe: self.exe.clone(),
            source,
        })?;
        tracing::debug!(%status, "WinXRay ended");

        if !status.success() {
            return Err(RunError::Failed {
                exe: self.exe.clone(),
                status,
            });
        }
        Ok(())
    }
}

/// Last results directory, in name order, that WinXRay created in `work_dir`.
pub fn latest_results_dir(work_dir: &Path) -> Result<PathBuf, RunError> {
    let mut dirs = Vec::new();
    for entry in fs::read_dir(work_dir).map_err(io_error(work_dir))? {
        let path = entry.map_err(io_error(work_dir))?.path();
        if path.is_dir() {
            dirs.push(path);
        }
    }
    dirs.sort();
    dirs.pop()
        .ok_or_else(|| RunError::MissingResults(work_dir.to_path_buf()))
}

/// Deflates every file under `dir` into `archive`, with entry names relative
/// to `dir`.
pub fn archive_dir(dir: &Path, archive: &Path) -> Result<(), RunError> {
    let file = File::create(archive).map_err(io_error(archive))?;
    let mut zip = ZipWriter::new(file);
    let options = FileOptions::default().compression_method(CompressionMethod::Deflated);

    add_entries(&mut zip, dir, "", options, archive)?;
    zip.finish().map_err(|source| RunError::Archive {
        path: archive.to_path_buf(),
        source,
    })?;
    Ok(())
}

fn add_entries(
    zip: &mut ZipWriter<File>,
    dir: &Path,
    prefix: &str,
    options: FileOptions,
    archive: &Path,
) -> Result<(), RunError> {
    let archive_error = |source| RunError::Archive {
        path: archive.to_path_buf(),
        source,
    };

    let mut entries = fs::read_dir(dir)
        .and_then(|entries| entries.collect::<io::Result<Vec<_>>>())
        .map_err(io_error(dir))?;
    entries.sort_by_key(|entry| entry.file_name());

    for entry in entries {
        let name = format!("{prefix}{}", entry.file_name().to_string_lossy());
        let path = entry.path();
        if path.is_dir() {
            let name = format!("{name}/");
            zip.add_directory(name.as_str(), options)
                .map_err(archive_error)?;
            add_entries(zip, &path, &name, options, archive)?;
        } else {
            zip.start_file(name, options).map_err(archive_error)?;
            let mut source = File::open(&path).map_err(io_error(&path))?;
            io::copy(&mut source, zip).map_err(io_error(archive))?;
        }
    }
    Ok(())
}
