//! Program-agnostic description of a microanalysis simulation.

pub mod beam;
pub mod detector;
pub mod geometry;
pub mod limit;
pub mod model;

pub use beam::{Beam, GaussianBeam, Particle, PencilBeam};
pub use detector::{Detector, DetectorKind, Opening};
pub use geometry::{Body, Geometry, GeometryKind, Layer, Material};
pub use limit::Limit;
pub use model::{Model, ModelCategory, Models};

use crate::domain::{ExportError, ExportResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Options {
    pub name: String,
    #[serde(default)]
    pub beam: Beam,
    #[serde(default)]
    pub geometry: Geometry,
    #[serde(default)]
    pub detectors: BTreeMap<String, Detector>,
    #[serde(default)]
    pub limits: Vec<Limit>,
    #[serde(default)]
    pub models: Models,
}

impl Options {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            beam: Beam::default(),
            geometry: Geometry::default(),
            detectors: BTreeMap::new(),
            limits: Vec::new(),
            models: Models::default(),
        }
    }

    pub fn showers(&self) -> Option<u64> {
        self.limits.iter().find_map(|limit| match limit {
            Limit::Showers { showers } => Some(*showers),
            _ => None,
        })
    }

    /// Delimited detectors in key order.
    pub fn delimited_detectors(&self) -> impl Iterator<Item = (&str, &Detector, &Opening)> {
        self.detectors.iter().filter_map(|(key, detector)| {
            detector
                .opening()
                .map(|opening| (key.as_str(), detector, opening))
        })
    }

    pub fn from_json_str(source: &str, path: &Path) -> ExportResult<Self> {
        serde_json::from_str(source).map_err(|source| ExportError::OptionsParse {
            path: path.to_path_buf(),
            source,
        })
    }
}

impl Default for Options {
    fn default() -> Self {
        Self::new("Untitled")
    }
}

pub fn load_options(path: impl AsRef<Path>) -> ExportResult<Options> {
    let path = path.as_ref();
    let source = fs::read_to_string(path).map_err(|source| ExportError::OptionsRead {
        path: path.to_path_buf(),
        source,
    })?;
    Options::from_json_str(&source, path)
}
