use super::models;
use super::traits::{Exported, Exporter, FileExporter};
use crate::common::{energy_ev_to_kev, length_m_to_nm, radians_to_degrees};
use crate::domain::{Diagnostic, ExportError, ExportResult};
use crate::options::{Beam, Detector, GeometryKind, Model, ModelCategory, Options};
use crate::wxc::{EvPerChannel, WXC_EXTENSION, WxcOptions, write_wxc};
use std::path::Path;

/// Maps one converted options to a WinXRay options file.
#[derive(Debug, Clone, Copy, Default)]
pub struct WinXRayExporter;

impl Exporter for WinXRayExporter {
    type Record = WxcOptions;

    fn export_record(&self, options: &Options) -> ExportResult<Exported<WxcOptions>> {
        let mut record = WxcOptions::default();
        let mut warnings = Vec::new();

        record.simulation.save_file = true;

        export_beam(options, &mut record, &mut warnings)?;
        export_geometry(options, &mut record, &mut warnings)?;
        export_detectors(options, &mut record)?;
        export_limits(options, &mut record);
        export_models(options, &mut record)?;

        Ok(Exported {
            name: options.name.clone(),
            record,
            warnings,
        })
    }
}

impl FileExporter for WinXRayExporter {
    fn file_extension(&self) -> &'static str {
        WXC_EXTENSION
    }

    fn write_record(&self, exported: &mut Exported<WxcOptions>, dir: &Path) -> ExportResult<()> {
        if !is_file_stem(&exported.name) {
            return Err(ExportError::InvalidName(exported.name.clone()));
        }
        exported.record.simulation.results_path = Some(dir.to_path_buf());
        let path = dir.join(format!("{}.{}", exported.name, self.file_extension()));
        tracing::debug!(path = %path.display(), "writing WinXRay options");
        write_wxc(&path, &exported.record).map_err(|source| ExportError::Io { path, source })
    }
}

/// A name that stays inside the output directory once the extension is
/// appended.
pub(super) fn is_file_stem(name: &str) -> bool {
    !name.is_empty()
        && name != "."
        && name != ".."
        && !name.contains(['/', '\\'])
        && !name.contains('\0')
}

fn export_beam(
    options: &Options,
    record: &mut WxcOptions,
    warnings: &mut Vec<Diagnostic>,
) -> ExportResult<()> {
    let beam = match &options.beam {
        Beam::Gaussian(beam) => beam,
        other => return Err(ExportError::UnsupportedBeam(other.kind_name())),
    };

    record.set_incident_energy_kev(energy_ev_to_kev(beam.energy_ev));
    record.beam.beam_diameter_nm = length_m_to_nm(beam.diameter_m);

    if beam.origin_m != [0.0; 3] {
        warnings.push(Diagnostic::warning(
            "EXPORT.BEAM_ORIGIN",
            "No beam position in WinXRay",
        ));
    }
    Ok(())
}

fn export_geometry(
    options: &Options,
    record: &mut WxcOptions,
    warnings: &mut Vec<Diagnostic>,
) -> ExportResult<()> {
    let geometry = &options.geometry;
    let material = match &geometry.kind {
        GeometryKind::Substrate { body } => &body.material,
        GeometryKind::HorizontalLayers { .. } => {
            return Err(ExportError::UnsupportedGeometry(geometry.kind_name()));
        }
    };

    record.set_elements(
        material
            .composition
            .iter()
            .map(|(atomic_number, weight_fraction)| (*atomic_number, *weight_fraction))
            .collect(),
    )?;

    if material.density_kg_m3.is_some() {
        warnings.push(Diagnostic::warning(
            "EXPORT.DENSITY",
            "WinXRay does not support user defined density",
        ));
    }
    if geometry.tilt_rad != 0.0 {
        warnings.push(Diagnostic::warning(
            "EXPORT.SAMPLE_TILT",
            "WinXRay does not support sample tilt. Use beam tilt instead.",
        ));
    }
    if geometry.rotation_rad != 0.0 {
        warnings.push(Diagnostic::warning(
            "EXPORT.SAMPLE_ROTATION",
            "WinXRay does not support sample rotation.",
        ));
    }

    if let Some(minimum) = geometry
        .materials()
        .iter()
        .map(|material| material.absorption_energy_electron_ev)
        .reduce(f64::min)
    {
        record.sample.minimum_electron_energy_ev = minimum;
    }
    Ok(())
}

fn export_detectors(options: &Options, record: &mut WxcOptions) -> ExportResult<()> {
    record.disable_all_detectors();

    for detector in options.detectors.values() {
        export_detector(options, detector, record);
    }

    let delimited: Vec<_> = options.delimited_detectors().collect();
    for pair in delimited.windows(2) {
        let (first_key, _, first) = pair[0];
        let (second_key, _, second) = pair[1];
        if !first.is_equivalent(second) {
            return Err(ExportError::ConfigurationConflict {
                first: first_key.to_string(),
                second: second_key.to_string(),
            });
        }
    }

    if let Some((_, _, opening)) = delimited.first() {
        let toa_deg = radians_to_degrees(opening.takeoff_angle_rad());
        record.detector.toa_deg = toa_deg;
        record.detector.angle_theta_detector_deg = 90.0 - toa_deg;
        record.detector.angle_phi_detector_deg = radians_to_degrees(opening.mean_azimuth_rad());
        record.detector.user_define_solid_angle = true;
        record.detector.solid_angle_sr = opening.solid_angle_sr();
    }
    Ok(())
}

fn export_detector(options: &Options, detector: &Detector, record: &mut WxcOptions) {
    match detector {
        Detector::BackscatteredElectronEnergy { channels, .. } => {
            record.bse.compute_distribution = true;
            record.bse.compute_energy = true;
            record.bse.nb_energy = *channels;
        }
        Detector::BackscatteredElectronPolarAngular { channels, .. } => {
            record.bse.compute_distribution = true;
            record.bse.compute_angular = true;
            record.bse.nb_angular = *channels;
        }
        Detector::PhotonDepth { channels, .. } => {
            record.xray.compute = true;
            record.xray.compute_characteristic = true;
            record.xray.number_film = *channels;
        }
        Detector::PhotonIntensity { .. } => {
            record.xray.compute = true;
            record.xray.compute_characteristic = true;
        }
        Detector::PhotonSpectrum { channels, .. } => {
            record.xray.compute = true;
            record.xray.compute_background = true;
            record.xray.compute_characteristic = true;

            let energy_ev = options.beam.energy_ev();
            let width = EvPerChannel::for_ev_per_channel(energy_ev / *channels as f64);
            record.xray.type_ev_channel = width;
            record.xray.number_channel = (energy_ev / f64::from(width.width_ev())).floor() as u64;
        }
        Detector::ElectronFraction => {
            // The fraction is read from the BSE energy distribution.
            record.bse.compute_distribution = true;
            record.bse.compute_energy = true;
        }
        Detector::TransmittedElectronEnergy { .. } | Detector::Time | Detector::ShowersStatistics => {}
    }
}

fn export_limits(options: &Options, record: &mut WxcOptions) {
    if let Some(showers) = options.showers() {
        record.simulation.nb_electron = showers;
    }
}

fn export_models(options: &Options, record: &mut WxcOptions) -> ExportResult<()> {
    for model in options.models.iter() {
        export_model(model, record)?;
    }
    Ok(())
}

fn export_model(model: &Model, record: &mut WxcOptions) -> ExportResult<()> {
    let name = model.name.as_str();
    let unsupported = || ExportError::UnsupportedModel {
        category: model.category.clone(),
        model: model.name.clone(),
    };

    match &model.category {
        ModelCategory::ElasticCrossSection => {
            record.set_elastic_cross_section(
                models::elastic_cross_section(name).ok_or_else(unsupported)?,
            );
        }
        ModelCategory::IonizationCrossSection => {
            record.set_ionization_cross_section(
                models::ionization_cross_section(name).ok_or_else(unsupported)?,
            );
        }
        ModelCategory::IonizationPotential => {
            record.models.ionisation_potential =
                models::ionization_potential(name).ok_or_else(unsupported)?;
        }
        ModelCategory::RandomNumberGenerator => {
            record.models.random_generator =
                models::random_number_generator(name).ok_or_else(unsupported)?;
        }
        ModelCategory::DirectionCosine => {
            record.models.direction_cosines =
                models::direction_cosine(name).ok_or_else(unsupported)?;
        }
        ModelCategory::EnergyLoss => {
            record.models.energy_loss = models::energy_loss(name).ok_or_else(unsupported)?;
        }
        ModelCategory::MassAbsorptionCoefficient => {
            record.models.mac = models::mass_absorption_coefficient(name).ok_or_else(unsupported)?;
        }
        ModelCategory::Other(category) => {
            tracing::debug!(category = %category, "no WinXRay setting for model category");
        }
    }
    Ok(())
}
