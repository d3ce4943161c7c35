pub mod errors;

pub use errors::{ErrorCategory, ExportError, ExportResult};

use std::fmt::{Display, Formatter};

/// Non-fatal condition raised while converting or exporting options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    placeholder: &'static str,
    message: String,
}

impl Diagnostic {
    pub fn warning(placeholder: &'static str, message: impl Into<String>) -> Self {
        let diagnostic = Self {
            placeholder,
            message: message.into(),
        };
        tracing::warn!(placeholder, "{}", diagnostic.message);
        diagnostic
    }

    pub const fn placeholder(&self) -> &'static str {
        self.placeholder
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Display for Diagnostic {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.placeholder, self.message)
    }
}
