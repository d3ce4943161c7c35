//! In-memory WinXRay options file (`.wxc`).

pub mod constants;
mod reader;
mod writer;

pub use constants::{
    DirectionCosineType, ElasticCrossSectionType, EnergyLossType, EvPerChannel,
    IonizationCrossSectionType, IonizationPotentialType, MassAbsorptionCoefficientType,
    RandomNumberGeneratorType,
};
pub use reader::{WxcParseError, parse_wxc, read_wxc};
pub use writer::{render_wxc, write_wxc};

use crate::common::mass_density_g_cm3;
use crate::domain::{ExportError, ExportResult};
use std::path::PathBuf;

pub const WXC_EXTENSION: &str = "wxc";

#[derive(Debug, Clone, PartialEq)]
pub struct SimulationSection {
    pub results_path: Option<PathBuf>,
    pub save_file: bool,
    pub nb_electron: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BeamSection {
    pub multi_energy: bool,
    pub incident_energy_kev: f64,
    pub start_energy_kev: f64,
    pub end_energy_kev: f64,
    pub step_energy_kev: f64,
    pub nb_step_energy: u32,
    pub beam_diameter_nm: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SampleSection {
    /// Atomic number and weight fraction pairs.
    pub elements: Vec<(u32, f64)>,
    pub mean_density_g_cm3: f64,
    pub minimum_electron_energy_ev: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DetectorSection {
    pub toa_deg: f64,
    pub angle_theta_detector_deg: f64,
    pub angle_phi_detector_deg: f64,
    pub user_define_solid_angle: bool,
    pub solid_angle_sr: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct XraySection {
    pub compute: bool,
    pub compute_background: bool,
    pub compute_characteristic: bool,
    pub number_film: usize,
    pub type_ev_channel: EvPerChannel,
    pub number_channel: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BseSection {
    pub compute_distribution: bool,
    pub compute_depth: bool,
    pub compute_radial: bool,
    pub compute_spatial: bool,
    pub compute_lateral: bool,
    pub compute_energy: bool,
    pub compute_angular: bool,
    pub nb_energy: usize,
    pub nb_angular: usize,
}

/// Depth, lateral, spatial and radial maps of one distribution.
#[derive(Debug, Clone, PartialEq)]
pub struct DistributionSection {
    pub compute_distribution: bool,
    pub compute_depth: bool,
    pub compute_lateral: bool,
    pub compute_spatial: bool,
    pub compute_radial: bool,
}

impl DistributionSection {
    const fn all(enabled: bool) -> Self {
        Self {
            compute_distribution: enabled,
            compute_depth: enabled,
            compute_lateral: enabled,
            compute_spatial: enabled,
            compute_radial: enabled,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ModelsSection {
    pub partial_cross_section: ElasticCrossSectionType,
    pub total_cross_section: ElasticCrossSectionType,
    pub xray_cross_section_bremsstrahlung: IonizationCrossSectionType,
    pub xray_cross_section_characteristic: IonizationCrossSectionType,
    pub ionisation_potential: IonizationPotentialType,
    pub random_generator: RandomNumberGeneratorType,
    pub direction_cosines: DirectionCosineType,
    pub energy_loss: EnergyLossType,
    pub mac: MassAbsorptionCoefficientType,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WxcOptions {
    pub simulation: SimulationSection,
    pub beam: BeamSection,
    pub sample: SampleSection,
    pub detector: DetectorSection,
    pub xray: XraySection,
    pub bse: BseSection,
    pub compute_se_distribution: bool,
    pub energy_loss: DistributionSection,
    pub electron: DistributionSection,
    pub models: ModelsSection,
}

impl Default for WxcOptions {
    fn default() -> Self {
        Self {
            simulation: SimulationSection {
                results_path: None,
                save_file: false,
                nb_electron: 1000,
            },
            beam: BeamSection {
                multi_energy: false,
                incident_energy_kev: 15.0,
                start_energy_kev: 15.0,
                end_energy_kev: 15.0,
                step_energy_kev: 1.0,
                nb_step_energy: 1,
                beam_diameter_nm: 10.0,
            },
            sample: SampleSection {
                elements: vec![(29, 1.0)],
                mean_density_g_cm3: 8.96,
                minimum_electron_energy_ev: 50.0,
            },
            detector: DetectorSection {
                toa_deg: 40.0,
                angle_theta_detector_deg: 50.0,
                angle_phi_detector_deg: 0.0,
                user_define_solid_angle: false,
                solid_angle_sr: 0.0,
            },
            xray: XraySection {
                compute: true,
                compute_background: true,
                compute_characteristic: true,
                number_film: 100,
                type_ev_channel: EvPerChannel::Type10,
                number_channel: 1500,
            },
            bse: BseSection {
                compute_distribution: true,
                compute_depth: true,
                compute_radial: true,
                compute_spatial: true,
                compute_lateral: true,
                compute_energy: true,
                compute_angular: true,
                nb_energy: 100,
                nb_angular: 90,
            },
            compute_se_distribution: true,
            energy_loss: DistributionSection::all(true),
            electron: DistributionSection::all(true),
            models: ModelsSection {
                partial_cross_section: ElasticCrossSectionType::MottTabulated,
                total_cross_section: ElasticCrossSectionType::MottTabulated,
                xray_cross_section_bremsstrahlung: IonizationCrossSectionType::Casnati,
                xray_cross_section_characteristic: IonizationCrossSectionType::Casnati,
                ionisation_potential: IonizationPotentialType::JoyLuo,
                random_generator: RandomNumberGeneratorType::Ran3,
                direction_cosines: DirectionCosineType::Demers,
                energy_loss: EnergyLossType::JoyLuo,
                mac: MassAbsorptionCoefficientType::Henke,
            },
        }
    }
}

impl WxcOptions {
    /// Single incident energy; WinXRay still expects the energy sweep fields.
    pub fn set_incident_energy_kev(&mut self, energy_kev: f64) {
        self.beam.multi_energy = false;
        self.beam.incident_energy_kev = energy_kev;
        self.beam.start_energy_kev = energy_kev;
        self.beam.end_energy_kev = energy_kev;
        self.beam.step_energy_kev = 1.0;
        self.beam.nb_step_energy = 1;
    }

    /// Sets the composition and the mean density WinXRay derives from it.
    pub fn set_elements(&mut self, elements: Vec<(u32, f64)>) -> ExportResult<()> {
        self.sample.mean_density_g_cm3 = mean_density_g_cm3(&elements)?;
        self.sample.elements = elements;
        Ok(())
    }

    pub fn set_elastic_cross_section(&mut self, cross_section: ElasticCrossSectionType) {
        self.models.partial_cross_section = cross_section;
        self.models.total_cross_section = cross_section;
    }

    pub fn set_ionization_cross_section(&mut self, cross_section: IonizationCrossSectionType) {
        self.models.xray_cross_section_bremsstrahlung = cross_section;
        self.models.xray_cross_section_characteristic = cross_section;
    }

    pub fn disable_all_detectors(&mut self) {
        self.xray.compute = false;
        self.xray.compute_background = false;
        self.xray.compute_characteristic = false;

        self.bse.compute_distribution = false;
        self.bse.compute_depth = false;
        self.bse.compute_radial = false;
        self.bse.compute_spatial = false;
        self.bse.compute_lateral = false;
        self.bse.compute_energy = false;
        self.bse.compute_angular = false;

        self.compute_se_distribution = false;
        self.energy_loss = DistributionSection::all(false);
        self.electron = DistributionSection::all(false);
    }
}

fn mean_density_g_cm3(elements: &[(u32, f64)]) -> ExportResult<f64> {
    if elements.is_empty() {
        return Err(ExportError::InvalidComposition("no elements"));
    }
    let total_weight: f64 = elements.iter().map(|(_, weight_fraction)| weight_fraction).sum();
    if !(total_weight.is_finite() && total_weight > 0.0) {
        return Err(ExportError::InvalidComposition(
            "weight fractions must sum to a positive value",
        ));
    }

    let mut inverse_density = 0.0;
    for &(atomic_number, weight_fraction) in elements {
        let density = mass_density_g_cm3(atomic_number)
            .ok_or(ExportError::UnknownElement { atomic_number })?;
        inverse_density += weight_fraction / density;
    }
    Ok(1.0 / inverse_density)
}

#[cfg(test)]
mod tests {
    use super::{ElasticCrossSectionType, WxcOptions};
    use crate::domain::ExportError;

    #[test]
    fn mean_density_is_weight_averaged_in_inverse() {
        let mut options = WxcOptions::default();
        options
            .set_elements(vec![(79, 0.5), (47, 0.5)])
            .expect("elements should be accepted");

        assert!((options.sample.mean_density_g_cm3 - 13.6007).abs() < 1e-4);
        assert_eq!(options.sample.elements, vec![(79, 0.5), (47, 0.5)]);
    }

    #[test]
    fn unknown_element_is_rejected_without_touching_sample() {
        let mut options = WxcOptions::default();
        let error = options
            .set_elements(vec![(120, 1.0)])
            .expect_err("element should be rejected");

        assert!(matches!(error, ExportError::UnknownElement { atomic_number: 120 }));
        assert_eq!(options.sample.elements, vec![(29, 1.0)]);
    }

    #[test]
    fn empty_or_weightless_composition_is_rejected() {
        let mut options = WxcOptions::default();

        for elements in [vec![], vec![(29, 0.0), (79, 0.0)]] {
            let error = options
                .set_elements(elements)
                .expect_err("composition should be rejected");
            assert!(matches!(error, ExportError::InvalidComposition(_)));
            assert_eq!(error.exit_code(), 2);
        }
        assert_eq!(options.sample.elements, vec![(29, 1.0)]);
        assert!(options.sample.mean_density_g_cm3.is_finite());
    }

    #[test]
    fn incident_energy_collapses_energy_sweep() {
        let mut options = WxcOptions::default();
        options.set_incident_energy_kev(1.234);

        assert!(!options.beam.multi_energy);
        assert_eq!(options.beam.start_energy_kev, 1.234);
        assert_eq!(options.beam.end_energy_kev, 1.234);
        assert_eq!(options.beam.nb_step_energy, 1);
    }

    #[test]
    fn elastic_cross_section_sets_partial_and_total() {
        let mut options = WxcOptions::default();
        options.set_elastic_cross_section(ElasticCrossSectionType::Rutherford);
        assert_eq!(options.models.partial_cross_section, ElasticCrossSectionType::Rutherford);
        assert_eq!(options.models.total_cross_section, ElasticCrossSectionType::Rutherford);
    }

    #[test]
    fn disabling_detectors_clears_every_compute_flag() {
        let mut options = WxcOptions::default();
        options.disable_all_detectors();

        assert!(!options.xray.compute);
        assert!(!options.bse.compute_distribution);
        assert!(!options.bse.compute_angular);
        assert!(!options.compute_se_distribution);
        assert!(!options.energy_loss.compute_radial);
        assert!(!options.electron.compute_depth);
    }
}
