use crate::common::element_symbol;
use serde::{Deserialize, Deserializer, Serialize, de};
use std::collections::BTreeMap;

pub const DEFAULT_ABSORPTION_ENERGY_EV: f64 = 50.0;

fn default_absorption_energy_ev() -> f64 {
    DEFAULT_ABSORPTION_ENERGY_EV
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Material {
    pub name: String,
    /// Atomic number to weight fraction.
    #[serde(deserialize_with = "deserialize_composition")]
    pub composition: BTreeMap<u32, f64>,
    /// User density; `None` lets the composition decide.
    #[serde(default)]
    pub density_kg_m3: Option<f64>,
    #[serde(
        rename = "absorption_energy_electron_eV",
        default = "default_absorption_energy_ev"
    )]
    pub absorption_energy_electron_ev: f64,
}

impl Material {
    pub fn new(name: impl Into<String>, composition: BTreeMap<u32, f64>) -> Self {
        Self {
            name: name.into(),
            composition,
            density_kg_m3: None,
            absorption_energy_electron_ev: DEFAULT_ABSORPTION_ENERGY_EV,
        }
    }

    pub fn pure(atomic_number: u32) -> Self {
        let name = element_symbol(atomic_number)
            .map(str::to_string)
            .unwrap_or_else(|| format!("Z{atomic_number}"));
        Self::new(name, BTreeMap::from([(atomic_number, 1.0)]))
    }
}

// Tagged geometry variants are buffered before decoding, which loses the
// string-to-integer key coercion, so keys are parsed here.
fn deserialize_composition<'de, D>(deserializer: D) -> Result<BTreeMap<u32, f64>, D::Error>
where
    D: Deserializer<'de>,
{
    BTreeMap::<String, f64>::deserialize(deserializer)?
        .into_iter()
        .map(|(key, weight_fraction)| {
            key.trim()
                .parse::<u32>()
                .map(|atomic_number| (atomic_number, weight_fraction))
                .map_err(|_| de::Error::custom(format!("invalid atomic number '{key}'")))
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Body {
    pub material: Material,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layer {
    pub material: Material,
    pub thickness_m: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GeometryKind {
    Substrate { body: Body },
    HorizontalLayers { substrate: Option<Body>, layers: Vec<Layer> },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Geometry {
    #[serde(flatten)]
    pub kind: GeometryKind,
    #[serde(default)]
    pub tilt_rad: f64,
    #[serde(default)]
    pub rotation_rad: f64,
}

impl Geometry {
    pub fn substrate(material: Material) -> Self {
        Self {
            kind: GeometryKind::Substrate {
                body: Body { material },
            },
            tilt_rad: 0.0,
            rotation_rad: 0.0,
        }
    }

    pub const fn kind_name(&self) -> &'static str {
        match self.kind {
            GeometryKind::Substrate { .. } => "substrate",
            GeometryKind::HorizontalLayers { .. } => "horizontal layers",
        }
    }

    pub fn materials(&self) -> Vec<&Material> {
        match &self.kind {
            GeometryKind::Substrate { body } => vec![&body.material],
            GeometryKind::HorizontalLayers { substrate, layers } => substrate
                .iter()
                .map(|body| &body.material)
                .chain(layers.iter().map(|layer| &layer.material))
                .collect(),
        }
    }
}

impl Default for Geometry {
    fn default() -> Self {
        Self::substrate(Material::pure(29))
    }
}

#[cfg(test)]
mod tests {
    use super::{Geometry, GeometryKind, Material};

    #[test]
    fn pure_material_takes_element_symbol() {
        let material = Material::pure(79);
        assert_eq!(material.name, "Au");
        assert_eq!(material.composition.get(&79), Some(&1.0));
        assert_eq!(material.density_kg_m3, None);
        assert_eq!(material.absorption_energy_electron_ev, 50.0);
    }

    #[test]
    fn substrate_json_parses_numeric_composition_keys() {
        let geometry: Geometry = serde_json::from_str(
            r#"{
                "type": "substrate",
                "body": {
                    "material": {
                        "name": "Mat1",
                        "composition": { "79": 0.5, "47": 0.5 },
                        "absorption_energy_electron_eV": 123.0
                    }
                },
                "tilt_rad": 0.1
            }"#,
        )
        .expect("geometry should parse");

        assert_eq!(geometry.kind_name(), "substrate");
        assert_eq!(geometry.tilt_rad, 0.1);
        assert_eq!(geometry.rotation_rad, 0.0);
        let materials = geometry.materials();
        assert_eq!(materials.len(), 1);
        assert_eq!(materials[0].composition.len(), 2);
        assert_eq!(materials[0].absorption_energy_electron_ev, 123.0);
    }

    #[test]
    fn non_numeric_composition_key_is_rejected() {
        let error = serde_json::from_str::<Material>(
            r#"{ "name": "X", "composition": { "Au": 1.0 } }"#,
        )
        .expect_err("symbol keys should be rejected");
        assert!(error.to_string().contains("invalid atomic number 'Au'"));
    }

    #[test]
    fn layered_geometry_lists_every_material() {
        let geometry = Geometry {
            kind: GeometryKind::HorizontalLayers {
                substrate: Some(super::Body {
                    material: Material::pure(14),
                }),
                layers: vec![super::Layer {
                    material: Material::pure(6),
                    thickness_m: 10e-9,
                }],
            },
            tilt_rad: 0.0,
            rotation_rad: 0.0,
        };

        let names: Vec<&str> = geometry
            .materials()
            .into_iter()
            .map(|material| material.name.as_str())
            .collect();
        assert_eq!(names, vec!["Si", "C"]);
    }
}
