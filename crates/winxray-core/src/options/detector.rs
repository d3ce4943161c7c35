use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Angular acceptance window of a delimited detector.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Opening {
    pub elevation_rad: (f64, f64),
    pub azimuth_rad: (f64, f64),
}

impl Opening {
    pub const fn new(elevation_rad: (f64, f64), azimuth_rad: (f64, f64)) -> Self {
        Self {
            elevation_rad,
            azimuth_rad,
        }
    }

    pub fn takeoff_angle_rad(&self) -> f64 {
        (self.elevation_rad.0 + self.elevation_rad.1) / 2.0
    }

    pub fn mean_azimuth_rad(&self) -> f64 {
        (self.azimuth_rad.0 + self.azimuth_rad.1) / 2.0
    }

    pub fn solid_angle_sr(&self) -> f64 {
        let azimuth_span = self.azimuth_rad.1 - self.azimuth_rad.0;
        (azimuth_span * (self.elevation_rad.1.sin() - self.elevation_rad.0.sin())).abs()
    }

    /// Openings match only when all four bounds are identical, which keeps
    /// the relation transitive.
    pub fn is_equivalent(&self, other: &Opening) -> bool {
        self.elevation_rad == other.elevation_rad && self.azimuth_rad == other.azimuth_rad
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DetectorKind {
    BackscatteredElectronEnergy,
    BackscatteredElectronPolarAngular,
    TransmittedElectronEnergy,
    PhotonDepth,
    PhotonIntensity,
    PhotonSpectrum,
    ElectronFraction,
    Time,
    ShowersStatistics,
}

impl DetectorKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::BackscatteredElectronEnergy => "backscattered_electron_energy",
            Self::BackscatteredElectronPolarAngular => "backscattered_electron_polar_angular",
            Self::TransmittedElectronEnergy => "transmitted_electron_energy",
            Self::PhotonDepth => "photon_depth",
            Self::PhotonIntensity => "photon_intensity",
            Self::PhotonSpectrum => "photon_spectrum",
            Self::ElectronFraction => "electron_fraction",
            Self::Time => "time",
            Self::ShowersStatistics => "showers_statistics",
        }
    }
}

impl Display for DetectorKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Detector {
    BackscatteredElectronEnergy {
        channels: usize,
        #[serde(rename = "limits_eV")]
        limits_ev: (f64, f64),
    },
    BackscatteredElectronPolarAngular {
        channels: usize,
        #[serde(default = "default_polar_limits_rad")]
        limits_rad: (f64, f64),
    },
    TransmittedElectronEnergy {
        channels: usize,
        #[serde(rename = "limits_eV")]
        limits_ev: (f64, f64),
    },
    PhotonDepth {
        opening: Opening,
        channels: usize,
    },
    PhotonIntensity {
        opening: Opening,
    },
    PhotonSpectrum {
        opening: Opening,
        channels: usize,
        #[serde(rename = "limits_eV")]
        limits_ev: (f64, f64),
    },
    ElectronFraction,
    Time,
    ShowersStatistics,
}

fn default_polar_limits_rad() -> (f64, f64) {
    (-std::f64::consts::FRAC_PI_2, std::f64::consts::FRAC_PI_2)
}

impl Detector {
    pub const fn kind(&self) -> DetectorKind {
        match self {
            Self::BackscatteredElectronEnergy { .. } => DetectorKind::BackscatteredElectronEnergy,
            Self::BackscatteredElectronPolarAngular { .. } => {
                DetectorKind::BackscatteredElectronPolarAngular
            }
            Self::TransmittedElectronEnergy { .. } => DetectorKind::TransmittedElectronEnergy,
            Self::PhotonDepth { .. } => DetectorKind::PhotonDepth,
            Self::PhotonIntensity { .. } => DetectorKind::PhotonIntensity,
            Self::PhotonSpectrum { .. } => DetectorKind::PhotonSpectrum,
            Self::ElectronFraction => DetectorKind::ElectronFraction,
            Self::Time => DetectorKind::Time,
            Self::ShowersStatistics => DetectorKind::ShowersStatistics,
        }
    }

    /// Opening of a delimited detector, `None` for every other kind.
    pub const fn opening(&self) -> Option<&Opening> {
        match self {
            Self::PhotonDepth { opening, .. }
            | Self::PhotonIntensity { opening }
            | Self::PhotonSpectrum { opening, .. } => Some(opening),
            _ => None,
        }
    }

    pub const fn is_delimited(&self) -> bool {
        self.opening().is_some()
    }
}
