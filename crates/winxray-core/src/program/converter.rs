use super::expander::expand_single_detector_same_opening;
use super::models::{default_model, is_supported};
use super::traits::{Conversion, Converter};
use crate::domain::Diagnostic;
use crate::options::{Beam, DetectorKind, GeometryKind, Limit, ModelCategory, Options, Particle};

pub const SUPPORTED_DETECTORS: [DetectorKind; 8] = [
    DetectorKind::BackscatteredElectronEnergy,
    DetectorKind::BackscatteredElectronPolarAngular,
    DetectorKind::PhotonDepth,
    DetectorKind::PhotonIntensity,
    DetectorKind::PhotonSpectrum,
    DetectorKind::ElectronFraction,
    DetectorKind::Time,
    DetectorKind::ShowersStatistics,
];

/// Adapts generic options to what WinXRay can simulate.
#[derive(Debug, Clone, Copy, Default)]
pub struct WinXRayConverter;

impl Converter for WinXRayConverter {
    fn convert(&self, options: &Options) -> Conversion {
        let mut warnings = Vec::new();
        let mut converted = options.clone();

        let accepted = convert_beam(&mut converted, &mut warnings)
            && convert_geometry(&converted, &mut warnings)
            && convert_limits(&mut converted, &mut warnings)
            && convert_models(&mut converted, &mut warnings);
        if !accepted {
            return Conversion {
                options: Vec::new(),
                warnings,
            };
        }
        convert_detectors(&mut converted, &mut warnings);

        let options = expand_single_detector_same_opening(&converted);
        tracing::debug!(
            name = %converted.name,
            count = options.len(),
            "expanded options for WinXRay"
        );
        Conversion { options, warnings }
    }
}

fn removed(warnings: &mut Vec<Diagnostic>, placeholder: &'static str, reason: String) -> bool {
    warnings.push(Diagnostic::warning(
        placeholder,
        format!("{reason}; this options definition was removed"),
    ));
    false
}

fn convert_beam(options: &mut Options, warnings: &mut Vec<Diagnostic>) -> bool {
    if let Beam::Pencil(pencil) = &options.beam {
        options.beam = Beam::Gaussian(pencil.clone().into_gaussian());
        warnings.push(Diagnostic::warning(
            "CONVERT.PENCIL_BEAM",
            "Pencil beam converted to Gaussian beam with 0 m diameter",
        ));
    }

    let particle = options.beam.particle();
    if particle != Particle::Electron {
        return removed(
            warnings,
            "CONVERT.BEAM_PARTICLE",
            format!("Beam particle must be electron, not {particle}"),
        );
    }
    true
}

fn convert_geometry(options: &Options, warnings: &mut Vec<Diagnostic>) -> bool {
    match options.geometry.kind {
        GeometryKind::Substrate { .. } => true,
        GeometryKind::HorizontalLayers { .. } => removed(
            warnings,
            "CONVERT.GEOMETRY",
            format!(
                "Geometry '{}' is not supported by WinXRay",
                options.geometry.kind_name()
            ),
        ),
    }
}

fn convert_detectors(options: &mut Options, warnings: &mut Vec<Diagnostic>) {
    options.detectors.retain(|key, detector| {
        let kind = detector.kind();
        let supported = SUPPORTED_DETECTORS.contains(&kind);
        if !supported {
            warnings.push(Diagnostic::warning(
                "CONVERT.DETECTOR",
                format!("Detector '{key}' of type {kind} is not supported and was removed"),
            ));
        }
        supported
    });
}

fn convert_limits(options: &mut Options, warnings: &mut Vec<Diagnostic>) -> bool {
    options.limits.retain(|limit| match limit {
        Limit::Showers { .. } => true,
        other => {
            warnings.push(Diagnostic::warning(
                "CONVERT.LIMIT",
                format!("Limit of type {} is not supported and was removed", other.kind_name()),
            ));
            false
        }
    });

    if options.showers().is_none() {
        return removed(
            warnings,
            "CONVERT.SHOWERS_LIMIT",
            "A showers limit must be defined".to_string(),
        );
    }
    true
}

fn convert_models(options: &mut Options, warnings: &mut Vec<Diagnostic>) -> bool {
    let selections: Vec<_> = options.models.iter().cloned().collect();
    for model in selections {
        match is_supported(&model) {
            Some(true) => {}
            Some(false) => {
                return removed(
                    warnings,
                    "CONVERT.MODEL",
                    format!(
                        "Model '{}' of {} is not supported by WinXRay",
                        model.name, model.category
                    ),
                );
            }
            None => {
                options.models.remove(&model.category);
                warnings.push(Diagnostic::warning(
                    "CONVERT.MODEL_CATEGORY",
                    format!(
                        "Model category '{}' is not used by WinXRay and was removed",
                        model.category
                    ),
                ));
            }
        }
    }

    for category in ModelCategory::WINXRAY {
        if options.models.get(&category).is_some() {
            continue;
        }
        if let Some(model) = default_model(&category) {
            options.models.add(model);
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::WinXRayConverter;
    use crate::options::{
        Beam, Detector, Geometry, GeometryKind, Limit, Material, Model, ModelCategory, Opening,
        Options, Particle, PencilBeam,
    };
    use crate::program::Converter;

    fn base_options() -> Options {
        let mut options = Options::new("Test");
        options.beam = Beam::Gaussian(crate::options::GaussianBeam::new(1234.0, 0.0));
        options.limits.push(Limit::Showers { showers: 5678 });
        options
    }

    fn bse() -> Detector {
        Detector::BackscatteredElectronEnergy {
            channels: 1000,
            limits_ev: (0.0, 1234.0),
        }
    }

    #[test]
    fn explicit_model_survives_and_defaults_fill_the_rest() {
        let mut options = base_options();
        options.detectors.insert("bse".to_string(), bse());
        options.models.add(Model::new(
            ModelCategory::RandomNumberGenerator,
            "press1966_rand1",
        ));

        let conversion = WinXRayConverter.convert(&options);
        assert_eq!(conversion.options.len(), 1);

        let converted = &conversion.options[0];
        assert_eq!(converted.beam.energy_ev(), 1234.0);
        assert_eq!(converted.detectors.len(), 1);
        assert_eq!(converted.limits, vec![Limit::Showers { showers: 5678 }]);
        assert_eq!(converted.models.len(), 7);
        assert_eq!(
            converted
                .models
                .get(&ModelCategory::RandomNumberGenerator)
                .map(|model| model.name.as_str()),
            Some("press1966_rand1")
        );
    }

    #[test]
    fn pencil_beam_and_unsupported_items_are_adapted() {
        let mut options = base_options();
        options.beam = Beam::Pencil(PencilBeam::new(1234.0));
        options.detectors.insert("bse".to_string(), bse());
        options.detectors.insert(
            "photon".to_string(),
            Detector::TransmittedElectronEnergy {
                channels: 1000,
                limits_ev: (0.0, 1234.0),
            },
        );
        options.limits.push(Limit::Time { time_s: 60.0 });

        let conversion = WinXRayConverter.convert(&options);
        assert_eq!(conversion.options.len(), 1);

        let converted = &conversion.options[0];
        assert!(matches!(&converted.beam, Beam::Gaussian(beam) if beam.diameter_m == 0.0));
        assert_eq!(converted.detectors.keys().collect::<Vec<_>>(), vec!["bse"]);
        assert_eq!(converted.limits.len(), 1);
        assert_eq!(converted.models.len(), 7);

        let placeholders: Vec<&str> = conversion
            .warnings
            .iter()
            .map(|warning| warning.placeholder())
            .collect();
        assert!(placeholders.contains(&"CONVERT.PENCIL_BEAM"));
        assert!(placeholders.contains(&"CONVERT.DETECTOR"));
        assert!(placeholders.contains(&"CONVERT.LIMIT"));
    }

    #[test]
    fn two_detectors_of_same_kind_yield_two_options() {
        let mut options = base_options();
        options.beam = Beam::Gaussian(crate::options::GaussianBeam::new(100e3, 0.0));
        options.detectors.insert("bse".to_string(), bse());
        options.detectors.insert("bse2".to_string(), bse());

        assert_eq!(WinXRayConverter.convert(&options).options.len(), 2);
    }

    #[test]
    fn opening_differences_yield_separate_options() {
        let mut options = base_options();
        options.detectors.insert(
            "prz".to_string(),
            Detector::PhotonDepth {
                opening: Opening::new((0.0, 1.0), (2.0, 3.0)),
                channels: 1000,
            },
        );
        options.detectors.insert(
            "xray".to_string(),
            Detector::PhotonIntensity {
                opening: Opening::new((0.0, 1.0), (2.0, 3.0)),
            },
        );

        let conversion = WinXRayConverter.convert(&options);
        assert_eq!(conversion.options.len(), 1);
        assert_eq!(conversion.options[0].detectors.len(), 2);
        assert_eq!(conversion.options[0].models.len(), 7);

        let variants = [
            Detector::PhotonIntensity {
                opening: Opening::new((0.5, 1.0), (2.0, 3.0)),
            },
            Detector::PhotonIntensity {
                opening: Opening::new((0.0, 1.0), (2.5, 3.0)),
            },
            Detector::PhotonSpectrum {
                opening: Opening::new((0.5, 1.0), (2.0, 3.0)),
                channels: 1000,
                limits_ev: (0.0, 1234.0),
            },
        ];
        for variant in variants {
            options.detectors.insert("xray".to_string(), variant);
            assert_eq!(WinXRayConverter.convert(&options).options.len(), 2);
        }
    }

    #[test]
    fn unknown_model_category_is_dropped_without_rejecting() {
        let mut options = base_options();
        options.detectors.insert(
            "prz".to_string(),
            Detector::PhotonDepth {
                opening: Opening::new((0.0, 1.0), (2.0, 3.0)),
                channels: 1000,
            },
        );
        options
            .models
            .add(Model::new(ModelCategory::Other("new".to_string()), "test"));

        let conversion = WinXRayConverter.convert(&options);
        assert_eq!(conversion.options.len(), 1);
        assert_eq!(conversion.options[0].models.len(), 7);
        assert!(
            conversion.options[0]
                .models
                .get(&ModelCategory::Other("new".to_string()))
                .is_none()
        );
    }

    #[test]
    fn missing_showers_limit_yields_no_options() {
        let mut options = base_options();
        options.limits.clear();
        options.detectors.insert(
            "prz".to_string(),
            Detector::PhotonDepth {
                opening: Opening::new((0.0, 1.0), (2.0, 3.0)),
                channels: 1000,
            },
        );

        let conversion = WinXRayConverter.convert(&options);
        assert!(conversion.options.is_empty());
        assert_eq!(conversion.warnings.len(), 1);
        assert_eq!(conversion.warnings[0].placeholder(), "CONVERT.SHOWERS_LIMIT");
    }

    #[test]
    fn unsupported_selections_reject_options() {
        let mut options = base_options();
        options
            .models
            .add(Model::new(ModelCategory::ElasticCrossSection, "elsepa2005"));
        assert!(WinXRayConverter.convert(&options).options.is_empty());

        let mut options = base_options();
        if let Beam::Gaussian(beam) = &mut options.beam {
            beam.particle = Particle::Photon;
        }
        assert!(WinXRayConverter.convert(&options).options.is_empty());

        let mut options = base_options();
        options.geometry = Geometry {
            kind: GeometryKind::HorizontalLayers {
                substrate: None,
                layers: vec![crate::options::Layer {
                    material: Material::pure(6),
                    thickness_m: 1e-8,
                }],
            },
            tilt_rad: 0.0,
            rotation_rad: 0.0,
        };
        assert!(WinXRayConverter.convert(&options).options.is_empty());
    }
}
