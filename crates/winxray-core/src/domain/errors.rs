use crate::options::ModelCategory;
use std::path::PathBuf;

pub type ExportResult<T> = Result<T, ExportError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    Success,
    InputValidationError,
    IoSystemError,
    ExportError,
    InternalError,
}

impl ErrorCategory {
    pub const fn exit_code(self) -> i32 {
        match self {
            Self::Success => 0,
            Self::InputValidationError => 2,
            Self::IoSystemError => 3,
            Self::ExportError => 4,
            Self::InternalError => 5,
        }
    }

    pub const fn is_fatal(self) -> bool {
        !matches!(self, Self::Success)
    }

    pub fn fatal_exit_line(self) -> Option<String> {
        self.is_fatal()
            .then(|| format!("FATAL EXIT CODE: {}", self.exit_code()))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("delimited detectors '{first}' and '{second}' do not have the same opening")]
    ConfigurationConflict { first: String, second: String },
    #[error("no WinXRay constant for {category} model '{model}'")]
    UnsupportedModel {
        category: ModelCategory,
        model: String,
    },
    #[error("WinXRay does not support {0} beams")]
    UnsupportedBeam(&'static str),
    #[error("WinXRay does not support {0} geometries")]
    UnsupportedGeometry(&'static str),
    #[error("no elemental density available for atomic number {atomic_number}")]
    UnknownElement { atomic_number: u32 },
    #[error("invalid composition: {0}")]
    InvalidComposition(&'static str),
    #[error("options name '{0}' cannot be used as a file name")]
    InvalidName(String),
    #[error("failed to read options '{}': {source}", path.display())]
    OptionsRead {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse options '{}': {source}", path.display())]
    OptionsParse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("failed to write '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl ExportError {
    pub const fn category(&self) -> ErrorCategory {
        match self {
            Self::ConfigurationConflict { .. }
            | Self::UnsupportedModel { .. }
            | Self::UnsupportedBeam(_)
            | Self::UnsupportedGeometry(_) => ErrorCategory::ExportError,
            Self::UnknownElement { .. }
            | Self::InvalidComposition(_)
            | Self::InvalidName(_)
            | Self::OptionsParse { .. } => ErrorCategory::InputValidationError,
            Self::OptionsRead { .. } | Self::Io { .. } => ErrorCategory::IoSystemError,
        }
    }

    pub const fn placeholder(&self) -> &'static str {
        match self {
            Self::ConfigurationConflict { .. } => "EXPORT.CONFIGURATION_CONFLICT",
            Self::UnsupportedModel { .. } => "EXPORT.UNSUPPORTED_MODEL",
            Self::UnsupportedBeam(_) => "EXPORT.UNSUPPORTED_BEAM",
            Self::UnsupportedGeometry(_) => "EXPORT.UNSUPPORTED_GEOMETRY",
            Self::UnknownElement { .. } => "INPUT.UNKNOWN_ELEMENT",
            Self::InvalidComposition(_) => "INPUT.COMPOSITION",
            Self::InvalidName(_) => "INPUT.OPTIONS_NAME",
            Self::OptionsRead { .. } => "IO.OPTIONS_READ",
            Self::OptionsParse { .. } => "INPUT.OPTIONS_PARSE",
            Self::Io { .. } => "IO.WXC_WRITE",
        }
    }

    pub const fn exit_code(&self) -> i32 {
        self.category().exit_code()
    }

    pub fn diagnostic_line(&self) -> String {
        format!("ERROR: [{}] {}", self.placeholder(), self)
    }
}
