use super::{DistributionSection, WxcOptions};
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

pub fn write_wxc(path: &Path, options: &WxcOptions) -> std::io::Result<()> {
    fs::write(path, render_wxc(options))
}

pub fn render_wxc(options: &WxcOptions) -> String {
    let mut out = WxcText::default();

    out.section("Simulation");
    let results_path = options
        .simulation
        .results_path
        .as_ref()
        .map(|path| path.display().to_string())
        .unwrap_or_default();
    out.entry("ResultsPath", results_path);
    out.flag("SaveFile", options.simulation.save_file);
    out.entry("NbElectron", options.simulation.nb_electron);

    out.section("Beam");
    out.flag("MultiEnergy", options.beam.multi_energy);
    out.entry("IncidentEnergy_keV", options.beam.incident_energy_kev);
    out.entry("StartEnergy_keV", options.beam.start_energy_kev);
    out.entry("EndEnergy_keV", options.beam.end_energy_kev);
    out.entry("StepEnergy_keV", options.beam.step_energy_kev);
    out.entry("NbStepEnergy", options.beam.nb_step_energy);
    out.entry("BeamDiameter_nm", options.beam.beam_diameter_nm);

    out.section("Sample");
    let elements = options
        .sample
        .elements
        .iter()
        .map(|(atomic_number, weight_fraction)| format!("{atomic_number}:{weight_fraction}"))
        .collect::<Vec<_>>()
        .join(";");
    out.entry("Elements", elements);
    out.entry("MeanDensity_g_cm3", options.sample.mean_density_g_cm3);
    out.entry(
        "MinimumElectronEnergy_eV",
        options.sample.minimum_electron_energy_ev,
    );

    out.section("Detector");
    out.entry("TOA_deg", options.detector.toa_deg);
    out.entry("AngleThetaDetector_deg", options.detector.angle_theta_detector_deg);
    out.entry("AnglePhiDetector_deg", options.detector.angle_phi_detector_deg);
    out.flag("UserDefineSolidAngle", options.detector.user_define_solid_angle);
    out.entry("SolidAngle_sr", options.detector.solid_angle_sr);

    out.section("Xray");
    out.flag("Compute", options.xray.compute);
    out.flag("ComputeBackground", options.xray.compute_background);
    out.flag("ComputeCharacteristic", options.xray.compute_characteristic);
    out.entry("NumberFilm", options.xray.number_film);
    out.entry("TypeEVChannel", options.xray.type_ev_channel.code());
    out.entry("NumberChannel", options.xray.number_channel);

    out.section("BSE");
    out.flag("ComputeDistribution", options.bse.compute_distribution);
    out.flag("ComputeDepth", options.bse.compute_depth);
    out.flag("ComputeRadial", options.bse.compute_radial);
    out.flag("ComputeSpatial", options.bse.compute_spatial);
    out.flag("ComputeLateral", options.bse.compute_lateral);
    out.flag("ComputeEnergy", options.bse.compute_energy);
    out.flag("ComputeAngular", options.bse.compute_angular);
    out.entry("NbEnergy", options.bse.nb_energy);
    out.entry("NbAngular", options.bse.nb_angular);

    out.section("SE");
    out.flag("ComputeDistribution", options.compute_se_distribution);

    out.section("EnergyLoss");
    out.distribution(&options.energy_loss);

    out.section("Electron");
    out.distribution(&options.electron);

    out.section("Models");
    let models = &options.models;
    out.entry("TypePartialCrossSection", models.partial_cross_section.code());
    out.entry("TypeTotalCrossSection", models.total_cross_section.code());
    out.entry(
        "TypeXrayCrossSectionBremsstrahlung",
        models.xray_cross_section_bremsstrahlung.code(),
    );
    out.entry(
        "TypeXrayCrossSectionCharacteristic",
        models.xray_cross_section_characteristic.code(),
    );
    out.entry("TypeIonisationPotential", models.ionisation_potential.code());
    out.entry("TypeRandomGenerator", models.random_generator.code());
    out.entry("TypeDirectionCosines", models.direction_cosines.code());
    out.entry("TypeEnergyLoss", models.energy_loss.code());
    out.entry("TypeMac", models.mac.code());

    out.text
}

#[derive(Default)]
struct WxcText {
    text: String,
}

impl WxcText {
    fn section(&mut self, name: &str) {
        if !self.text.is_empty() {
            self.text.push('\n');
        }
        let _ = writeln!(self.text, "[{name}]");
    }

    fn entry(&mut self, key: &str, value: impl std::fmt::Display) {
        let _ = writeln!(self.text, "{key}={value}");
    }

    fn flag(&mut self, key: &str, value: bool) {
        self.entry(key, u8::from(value));
    }

    fn distribution(&mut self, section: &DistributionSection) {
        self.flag("ComputeDistribution", section.compute_distribution);
        self.flag("ComputeDepth", section.compute_depth);
        self.flag("ComputeLateral", section.compute_lateral);
        self.flag("ComputeSpatial", section.compute_spatial);
        self.flag("ComputeRadial", section.compute_radial);
    }
}
