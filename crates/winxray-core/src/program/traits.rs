use crate::domain::{Diagnostic, ExportResult};
use crate::options::Options;
use std::path::Path;

/// Options a program can run, plus the warnings raised while adapting them.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Conversion {
    pub options: Vec<Options>,
    pub warnings: Vec<Diagnostic>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Exported<R> {
    pub name: String,
    pub record: R,
    pub warnings: Vec<Diagnostic>,
}

pub trait Converter {
    fn convert(&self, options: &Options) -> Conversion;
}

pub trait Exporter {
    type Record;

    fn export_record(&self, options: &Options) -> ExportResult<Exported<Self::Record>>;
}

pub trait FileExporter: Exporter {
    fn file_extension(&self) -> &'static str;

    fn write_record(&self, exported: &mut Exported<Self::Record>, dir: &Path) -> ExportResult<()>;
}
