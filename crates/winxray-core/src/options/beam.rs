use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Particle {
    #[default]
    Electron,
    Photon,
    Positron,
}

impl Particle {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Electron => "electron",
            Self::Photon => "photon",
            Self::Positron => "positron",
        }
    }
}

impl Display for Particle {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).as_str())
    }
}

const DEFAULT_DIRECTION: [f64; 3] = [0.0, 0.0, -1.0];

fn default_direction() -> [f64; 3] {
    DEFAULT_DIRECTION
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GaussianBeam {
    #[serde(rename = "energy_eV")]
    pub energy_ev: f64,
    #[serde(default)]
    pub diameter_m: f64,
    #[serde(default)]
    pub particle: Particle,
    #[serde(default)]
    pub origin_m: [f64; 3],
    #[serde(default = "default_direction")]
    pub direction: [f64; 3],
    #[serde(default)]
    pub aperture_rad: f64,
}

impl GaussianBeam {
    pub fn new(energy_ev: f64, diameter_m: f64) -> Self {
        Self {
            energy_ev,
            diameter_m,
            particle: Particle::Electron,
            origin_m: [0.0; 3],
            direction: DEFAULT_DIRECTION,
            aperture_rad: 0.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PencilBeam {
    #[serde(rename = "energy_eV")]
    pub energy_ev: f64,
    #[serde(default)]
    pub particle: Particle,
    #[serde(default)]
    pub origin_m: [f64; 3],
    #[serde(default = "default_direction")]
    pub direction: [f64; 3],
    #[serde(default)]
    pub aperture_rad: f64,
}

impl PencilBeam {
    pub fn new(energy_ev: f64) -> Self {
        Self {
            energy_ev,
            particle: Particle::Electron,
            origin_m: [0.0; 3],
            direction: DEFAULT_DIRECTION,
            aperture_rad: 0.0,
        }
    }

    /// A pencil beam is a Gaussian beam of zero diameter.
    pub fn into_gaussian(self) -> GaussianBeam {
        GaussianBeam {
            energy_ev: self.energy_ev,
            diameter_m: 0.0,
            particle: self.particle,
            origin_m: self.origin_m,
            direction: self.direction,
            aperture_rad: self.aperture_rad,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Beam {
    Gaussian(GaussianBeam),
    Pencil(PencilBeam),
}

impl Beam {
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::Gaussian(_) => "gaussian",
            Self::Pencil(_) => "pencil",
        }
    }

    pub fn energy_ev(&self) -> f64 {
        match self {
            Self::Gaussian(beam) => beam.energy_ev,
            Self::Pencil(beam) => beam.energy_ev,
        }
    }

    pub fn particle(&self) -> Particle {
        match self {
            Self::Gaussian(beam) => beam.particle,
            Self::Pencil(beam) => beam.particle,
        }
    }
}

impl Default for Beam {
    fn default() -> Self {
        Self::Gaussian(GaussianBeam::new(1e3, 0.0))
    }
}

#[cfg(test)]
mod tests {
    use super::{Beam, GaussianBeam, Particle, PencilBeam};

    #[test]
    fn pencil_beam_converts_to_zero_diameter_gaussian() {
        let mut pencil = PencilBeam::new(1234.0);
        pencil.origin_m = [1e-9, 0.0, 0.0];
        let gaussian = pencil.into_gaussian();

        assert_eq!(gaussian.energy_ev, 1234.0);
        assert_eq!(gaussian.diameter_m, 0.0);
        assert_eq!(gaussian.origin_m, [1e-9, 0.0, 0.0]);
        assert_eq!(gaussian.particle, Particle::Electron);
    }

    #[test]
    fn beam_json_uses_type_tag_and_defaults() {
        let beam: Beam = serde_json::from_str(
            r#"{ "type": "gaussian", "energy_eV": 15000.0, "diameter_m": 1e-8 }"#,
        )
        .expect("beam should parse");

        assert_eq!(beam, Beam::Gaussian(GaussianBeam::new(15000.0, 1e-8)));
        assert_eq!(beam.kind_name(), "gaussian");

        let pencil: Beam =
            serde_json::from_str(r#"{ "type": "pencil", "energy_eV": 5000.0, "particle": "photon" }"#)
                .expect("pencil beam should parse");
        assert_eq!(pencil.particle(), Particle::Photon);
        assert_eq!(pencil.energy_ev(), 5000.0);
    }
}
