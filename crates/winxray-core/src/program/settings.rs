//! Location of the WinXRay executable.

use crate::domain::ErrorCategory;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub winxray: Option<WinXRaySettings>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WinXRaySettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exe: Option<PathBuf>,
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("failed to read settings '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse settings '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("missing winxray section in settings")]
    MissingSection,
    #[error("missing winxray.exe option in settings")]
    MissingExecutable,
    #[error("specified WinXRay executable '{}' does not exist", .0.display())]
    ExecutableNotFound(PathBuf),
    #[error("specified WinXRay executable '{}' is not executable", .0.display())]
    NotExecutable(PathBuf),
}

impl SettingsError {
    pub const fn category(&self) -> ErrorCategory {
        match self {
            Self::Read { .. } => ErrorCategory::IoSystemError,
            Self::Parse { .. }
            | Self::MissingSection
            | Self::MissingExecutable
            | Self::ExecutableNotFound(_)
            | Self::NotExecutable(_) => ErrorCategory::InputValidationError,
        }
    }

    pub const fn placeholder(&self) -> &'static str {
        match self {
            Self::Read { .. } => "IO.SETTINGS_READ",
            Self::Parse { .. } => "INPUT.SETTINGS_PARSE",
            Self::MissingSection => "INPUT.SETTINGS_SECTION",
            Self::MissingExecutable => "INPUT.SETTINGS_EXE",
            Self::ExecutableNotFound(_) => "INPUT.EXE_NOT_FOUND",
            Self::NotExecutable(_) => "INPUT.EXE_NOT_EXECUTABLE",
        }
    }

    pub const fn exit_code(&self) -> i32 {
        self.category().exit_code()
    }

    pub fn diagnostic_line(&self) -> String {
        format!("ERROR: [{}] {}", self.placeholder(), self)
    }
}

impl Settings {
    pub fn with_executable(exe: impl Into<PathBuf>) -> Self {
        Self {
            winxray: Some(WinXRaySettings {
                exe: Some(exe.into()),
            }),
        }
    }

    /// Path of an existing, runnable WinXRay executable.
    pub fn winxray_executable(&self) -> Result<&Path, SettingsError> {
        let section = self.winxray.as_ref().ok_or(SettingsError::MissingSection)?;
        let exe = section
            .exe
            .as_deref()
            .ok_or(SettingsError::MissingExecutable)?;

        let metadata = fs::metadata(exe)
            .ok()
            .filter(|metadata| metadata.is_file())
            .ok_or_else(|| SettingsError::ExecutableNotFound(exe.to_path_buf()))?;
        if !is_executable(&metadata) {
            return Err(SettingsError::NotExecutable(exe.to_path_buf()));
        }
        Ok(exe)
    }
}

#[cfg(unix)]
fn is_executable(metadata: &fs::Metadata) -> bool {
    use std::os::unix::fs::PermissionsExt;
    metadata.permissions().mode() & 0o111 != 0
}

#[cfg(not(unix))]
fn is_executable(_metadata: &fs::Metadata) -> bool {
    true
}

pub fn load_settings(path: impl AsRef<Path>) -> Result<Settings, SettingsError> {
    let path = path.as_ref();
    let source = fs::read_to_string(path).map_err(|source| SettingsError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&source).map_err(|source| SettingsError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::{Settings, SettingsError, WinXRaySettings, load_settings};
    use crate::domain::ErrorCategory;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn missing_section_and_executable_are_reported() {
        let error = Settings::default()
            .winxray_executable()
            .expect_err("section should be required");
        assert!(matches!(error, SettingsError::MissingSection));

        let settings = Settings {
            winxray: Some(WinXRaySettings::default()),
        };
        let error = settings
            .winxray_executable()
            .expect_err("exe should be required");
        assert!(matches!(error, SettingsError::MissingExecutable));
        assert_eq!(error.exit_code(), 2);
    }

    #[test]
    fn nonexistent_or_directory_executable_is_rejected() {
        let temp = TempDir::new().expect("tempdir should be created");

        let missing = Settings::with_executable(temp.path().join("WinXRay.exe"));
        assert!(matches!(
            missing.winxray_executable(),
            Err(SettingsError::ExecutableNotFound(_))
        ));

        let directory = Settings::with_executable(temp.path());
        assert!(matches!(
            directory.winxray_executable(),
            Err(SettingsError::ExecutableNotFound(_))
        ));
    }

    #[cfg(unix)]
    #[test]
    fn permission_bits_decide_executability() {
        use std::os::unix::fs::PermissionsExt;

        let temp = TempDir::new().expect("tempdir should be created");
        let exe = temp.path().join("WinXRay.exe");
        fs::write(&exe, "").expect("exe should be written");
        fs::set_permissions(&exe, fs::Permissions::from_mode(0o644))
            .expect("permissions should be set");

        let settings = Settings::with_executable(&exe);
        assert!(matches!(
            settings.winxray_executable(),
            Err(SettingsError::NotExecutable(_))
        ));

        fs::set_permissions(&exe, fs::Permissions::from_mode(0o755))
            .expect("permissions should be set");
        assert_eq!(
            settings
                .winxray_executable()
                .expect("exe should be accepted"),
            exe.as_path()
        );
    }

    #[test]
    fn load_settings_reads_json() {
        let temp = TempDir::new().expect("tempdir should be created");
        let path = temp.path().join("settings.json");
        fs::write(&path, r#"{ "winxray": { "exe": "/opt/winxray/WinXRay.exe" } }"#)
            .expect("settings should be written");

        let settings = load_settings(&path).expect("settings should load");
        assert_eq!(
            settings,
            Settings::with_executable("/opt/winxray/WinXRay.exe")
        );

        fs::write(&path, "[").expect("settings should be written");
        let error = load_settings(&path).expect_err("settings should not parse");
        assert_eq!(error.category(), ErrorCategory::InputValidationError);
        assert_eq!(error.placeholder(), "INPUT.SETTINGS_PARSE");

        let error = load_settings(temp.path().join("missing.json")).expect_err("should fail");
        assert_eq!(error.exit_code(), 3);
    }
}
