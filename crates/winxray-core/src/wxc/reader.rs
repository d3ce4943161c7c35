use super::{
    DirectionCosineType, DistributionSection, ElasticCrossSectionType, EnergyLossType,
    EvPerChannel, IonizationCrossSectionType, IonizationPotentialType,
    MassAbsorptionCoefficientType, RandomNumberGeneratorType, WxcOptions,
};
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

#[derive(Debug, thiserror::Error)]
pub enum WxcParseError {
    #[error("failed to read WinXRay options '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("line {line}: expected '[Section]' or 'Key=Value', found '{content}'")]
    Syntax { line: usize, content: String },
    #[error("line {line}: invalid value '{value}' for {section}.{key}")]
    Value {
        line: usize,
        section: String,
        key: String,
        value: String,
    },
}

pub fn read_wxc(path: &Path) -> Result<WxcOptions, WxcParseError> {
    let source = fs::read_to_string(path).map_err(|source| WxcParseError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_wxc(&source)
}

/// Parses an options file; keys WinXRay writes but this crate does not model are skipped.
pub fn parse_wxc(source: &str) -> Result<WxcOptions, WxcParseError> {
    let mut options = WxcOptions::default();
    let mut section = String::new();

    for (index, raw_line) in source.lines().enumerate() {
        let line = raw_line.trim();
        if line.is_empty() || line.starts_with(';') {
            continue;
        }

        if let Some(name) = line.strip_prefix('[').and_then(|rest| rest.strip_suffix(']')) {
            section = name.trim().to_string();
            continue;
        }

        let Some((key, value)) = line.split_once('=') else {
            return Err(WxcParseError::Syntax {
                line: index + 1,
                content: line.to_string(),
            });
        };

        let entry = Entry {
            line: index + 1,
            section: &section,
            key: key.trim(),
            value: value.trim(),
        };
        apply_entry(&mut options, &entry)?;
    }

    Ok(options)
}

struct Entry<'a> {
    line: usize,
    section: &'a str,
    key: &'a str,
    value: &'a str,
}

impl Entry<'_> {
    fn invalid(&self) -> WxcParseError {
        WxcParseError::Value {
            line: self.line,
            section: self.section.to_string(),
            key: self.key.to_string(),
            value: self.value.to_string(),
        }
    }

    fn parse<T: FromStr>(&self) -> Result<T, WxcParseError> {
        self.value.parse().map_err(|_| self.invalid())
    }

    fn flag(&self) -> Result<bool, WxcParseError> {
        match self.value {
            "1" => Ok(true),
            "0" => Ok(false),
            _ => Err(self.invalid()),
        }
    }

    fn constant<T>(&self, from_code: fn(i32) -> Option<T>) -> Result<T, WxcParseError> {
        from_code(self.parse()?).ok_or_else(|| self.invalid())
    }

    fn elements(&self) -> Result<Vec<(u32, f64)>, WxcParseError> {
        self.value
            .split(';')
            .filter(|pair| !pair.trim().is_empty())
            .map(|pair| {
                let (atomic_number, weight_fraction) =
                    pair.split_once(':').ok_or_else(|| self.invalid())?;
                let atomic_number = atomic_number.trim().parse().map_err(|_| self.invalid())?;
                let weight_fraction = weight_fraction.trim().parse().map_err(|_| self.invalid())?;
                Ok((atomic_number, weight_fraction))
            })
            .collect()
    }
}

fn apply_entry(options: &mut WxcOptions, entry: &Entry<'_>) -> Result<(), WxcParseError> {
    match (entry.section, entry.key) {
        ("Simulation", "ResultsPath") => {
            options.simulation.results_path =
                (!entry.value.is_empty()).then(|| PathBuf::from(entry.value));
        }
        ("Simulation", "SaveFile") => options.simulation.save_file = entry.flag()?,
        ("Simulation", "NbElectron") => options.simulation.nb_electron = entry.parse()?,

        ("Beam", "MultiEnergy") => options.beam.multi_energy = entry.flag()?,
        ("Beam", "IncidentEnergy_keV") => options.beam.incident_energy_kev = entry.parse()?,
        ("Beam", "StartEnergy_keV") => options.beam.start_energy_kev = entry.parse()?,
        ("Beam", "EndEnergy_keV") => options.beam.end_energy_kev = entry.parse()?,
        ("Beam", "StepEnergy_keV") => options.beam.step_energy_kev = entry.parse()?,
        ("Beam", "NbStepEnergy") => options.beam.nb_step_energy = entry.parse()?,
        ("Beam", "BeamDiameter_nm") => options.beam.beam_diameter_nm = entry.parse()?,

        ("Sample", "Elements") => options.sample.elements = entry.elements()?,
        ("Sample", "MeanDensity_g_cm3") => options.sample.mean_density_g_cm3 = entry.parse()?,
        ("Sample", "MinimumElectronEnergy_eV") => {
            options.sample.minimum_electron_energy_ev = entry.parse()?
        }

        ("Detector", "TOA_deg") => options.detector.toa_deg = entry.parse()?,
        ("Detector", "AngleThetaDetector_deg") => {
            options.detector.angle_theta_detector_deg = entry.parse()?
        }
        ("Detector", "AnglePhiDetector_deg") => {
            options.detector.angle_phi_detector_deg = entry.parse()?
        }
        ("Detector", "UserDefineSolidAngle") => {
            options.detector.user_define_solid_angle = entry.flag()?
        }
        ("Detector", "SolidAngle_sr") => options.detector.solid_angle_sr = entry.parse()?,

        ("Xray", "Compute") => options.xray.compute = entry.flag()?,
        ("Xray", "ComputeBackground") => options.xray.compute_background = entry.flag()?,
        ("Xray", "ComputeCharacteristic") => options.xray.compute_characteristic = entry.flag()?,
        ("Xray", "NumberFilm") => options.xray.number_film = entry.parse()?,
        ("Xray", "TypeEVChannel") => {
            options.xray.type_ev_channel = entry.constant(EvPerChannel::from_code)?
        }
        ("Xray", "NumberChannel") => options.xray.number_channel = entry.parse()?,

        ("BSE", "ComputeDistribution") => options.bse.compute_distribution = entry.flag()?,
        ("BSE", "ComputeDepth") => options.bse.compute_depth = entry.flag()?,
        ("BSE", "ComputeRadial") => options.bse.compute_radial = entry.flag()?,
        ("BSE", "ComputeSpatial") => options.bse.compute_spatial = entry.flag()?,
        ("BSE", "ComputeLateral") => options.bse.compute_lateral = entry.flag()?,
        ("BSE", "ComputeEnergy") => options.bse.compute_energy = entry.flag()?,
        ("BSE", "ComputeAngular") => options.bse.compute_angular = entry.flag()?,
        ("BSE", "NbEnergy") => options.bse.nb_energy = entry.parse()?,
        ("BSE", "NbAngular") => options.bse.nb_angular = entry.parse()?,

        ("SE", "ComputeDistribution") => options.compute_se_distribution = entry.flag()?,

        ("EnergyLoss", key) => apply_distribution(&mut options.energy_loss, key, entry)?,
        ("Electron", key) => apply_distribution(&mut options.electron, key, entry)?,

        ("Models", "TypePartialCrossSection") => {
            options.models.partial_cross_section =
                entry.constant(ElasticCrossSectionType::from_code)?
        }
        ("Models", "TypeTotalCrossSection") => {
            options.models.total_cross_section =
                entry.constant(ElasticCrossSectionType::from_code)?
        }
        ("Models", "TypeXrayCrossSectionBremsstrahlung") => {
            options.models.xray_cross_section_bremsstrahlung =
                entry.constant(IonizationCrossSectionType::from_code)?
        }
        ("Models", "TypeXrayCrossSectionCharacteristic") => {
            options.models.xray_cross_section_characteristic =
                entry.constant(IonizationCrossSectionType::from_code)?
        }
        ("Models", "TypeIonisationPotential") => {
            options.models.ionisation_potential =
                entry.constant(IonizationPotentialType::from_code)?
        }
        ("Models", "TypeRandomGenerator") => {
            options.models.random_generator =
                entry.constant(RandomNumberGeneratorType::from_code)?
        }
        ("Models", "TypeDirectionCosines") => {
            options.models.direction_cosines = entry.constant(DirectionCosineType::from_code)?
        }
        ("Models", "TypeEnergyLoss") => {
            options.models.energy_loss = entry.constant(EnergyLossType::from_code)?
        }
        ("Models", "TypeMac") => {
            options.models.mac = entry.constant(MassAbsorptionCoefficientType::from_code)?
        }

        _ => {}
    }
    Ok(())
}

fn apply_distribution(
    section: &mut DistributionSection,
    key: &str,
    entry: &Entry<'_>,
) -> Result<(), WxcParseError> {
    match key {
        "ComputeDistribution" => section.compute_distribution = entry.flag()?,
        "ComputeDepth" => section.compute_depth = entry.flag()?,
        "ComputeLateral" => section.compute_lateral = entry.flag()?,
        "ComputeSpatial" => section.compute_spatial = entry.flag()?,
        "ComputeRadial" => section.compute_radial = entry.flag()?,
        _ => {}
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{WxcParseError, parse_wxc};
    use crate::wxc::{EvPerChannel, MassAbsorptionCoefficientType, WxcOptions, render_wxc};

    #[test]
    fn rendered_options_parse_back_unchanged() {
        let mut options = WxcOptions::default();
        options.simulation.nb_electron = 5678;
        options.set_incident_energy_kev(1.234);
        options
            .set_elements(vec![(79, 0.5), (47, 0.5)])
            .expect("elements should be accepted");
        options.xray.type_ev_channel = EvPerChannel::Type5;
        options.models.mac = MassAbsorptionCoefficientType::ThinhLeroux;
        options.disable_all_detectors();

        let parsed = parse_wxc(&render_wxc(&options)).expect("rendered file should parse");
        assert_eq!(parsed, options);
    }

    #[test]
    fn unknown_keys_and_comments_are_ignored() {
        let parsed = parse_wxc("; header\n[Beam]\nBeamTheta_deg=0\nBeamDiameter_nm=25\n")
            .expect("file should parse");
        assert_eq!(parsed.beam.beam_diameter_nm, 25.0);
    }

    #[test]
    fn malformed_lines_report_line_numbers() {
        let error = parse_wxc("[Beam]\nBeamDiameter_nm\n").expect_err("should fail");
        assert!(matches!(error, WxcParseError::Syntax { line: 2, .. }));

        let error = parse_wxc("[Xray]\nCompute=yes\n").expect_err("should fail");
        assert_eq!(
            error.to_string(),
            "line 2: invalid value 'yes' for Xray.Compute"
        );

        let error = parse_wxc("[Models]\nTypeMac=9\n").expect_err("should fail");
        assert!(matches!(error, WxcParseError::Value { line: 2, .. }));
    }
}
