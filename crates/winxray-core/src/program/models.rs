//! Lookup tables from generic model selections to WinXRay constants.

use crate::options::{Model, ModelCategory};
use crate::wxc::{
    DirectionCosineType, ElasticCrossSectionType, EnergyLossType, IonizationCrossSectionType,
    IonizationPotentialType, MassAbsorptionCoefficientType, RandomNumberGeneratorType,
};

pub fn elastic_cross_section(name: &str) -> Option<ElasticCrossSectionType> {
    match name {
        "mott_czyzewski1990" => Some(ElasticCrossSectionType::MottTabulated),
        "mott_czyzewski1990_linear" => Some(ElasticCrossSectionType::MottTabulatedLinear),
        "mott_czyzewski1990_powerlaw" => Some(ElasticCrossSectionType::MottTabulatedPowerLaw),
        "mott_czyzewski1990_cubicspline" => {
            Some(ElasticCrossSectionType::MottTabulatedCubicSpline)
        }
        "mott_demers" => Some(ElasticCrossSectionType::MottParametrizedHd),
        "rutherford" => Some(ElasticCrossSectionType::Rutherford),
        "rutherford_relativistic" => Some(ElasticCrossSectionType::RutherfordRelativistic),
        _ => None,
    }
}

pub fn ionization_cross_section(name: &str) -> Option<IonizationCrossSectionType> {
    match name {
        "casnati1982" => Some(IonizationCrossSectionType::Casnati),
        _ => None,
    }
}

pub fn ionization_potential(name: &str) -> Option<IonizationPotentialType> {
    match name {
        "joy_luo1989" => Some(IonizationPotentialType::JoyLuo),
        _ => None,
    }
}

pub fn random_number_generator(name: &str) -> Option<RandomNumberGeneratorType> {
    match name {
        "press1966_rand1" => Some(RandomNumberGeneratorType::Ran1),
        "press1966_rand2" => Some(RandomNumberGeneratorType::Ran2),
        "press1966_rand3" => Some(RandomNumberGeneratorType::Ran3),
        "press1966_rand4" => Some(RandomNumberGeneratorType::Ran4),
        _ => None,
    }
}

pub fn direction_cosine(name: &str) -> Option<DirectionCosineType> {
    match name {
        "demers2000" => Some(DirectionCosineType::Demers),
        _ => None,
    }
}

pub fn energy_loss(name: &str) -> Option<EnergyLossType> {
    match name {
        "joy_luo1989" => Some(EnergyLossType::JoyLuo),
        _ => None,
    }
}

pub fn mass_absorption_coefficient(name: &str) -> Option<MassAbsorptionCoefficientType> {
    match name {
        "heinrich_ixcom11" => Some(MassAbsorptionCoefficientType::Heinrich),
        "henke1993" => Some(MassAbsorptionCoefficientType::Henke),
        "thinh_leroux1979" => Some(MassAbsorptionCoefficientType::ThinhLeroux),
        _ => None,
    }
}

/// `None` for categories WinXRay has no setting for.
pub fn is_supported(model: &Model) -> Option<bool> {
    let name = model.name.as_str();
    let supported = match model.category {
        ModelCategory::ElasticCrossSection => elastic_cross_section(name).is_some(),
        ModelCategory::IonizationCrossSection => ionization_cross_section(name).is_some(),
        ModelCategory::IonizationPotential => ionization_potential(name).is_some(),
        ModelCategory::RandomNumberGenerator => random_number_generator(name).is_some(),
        ModelCategory::DirectionCosine => direction_cosine(name).is_some(),
        ModelCategory::EnergyLoss => energy_loss(name).is_some(),
        ModelCategory::MassAbsorptionCoefficient => mass_absorption_coefficient(name).is_some(),
        ModelCategory::Other(_) => return None,
    };
    Some(supported)
}

pub fn default_model(category: &ModelCategory) -> Option<Model> {
    let name = match category {
        ModelCategory::ElasticCrossSection => "mott_czyzewski1990",
        ModelCategory::IonizationCrossSection => "casnati1982",
        ModelCategory::IonizationPotential => "joy_luo1989",
        ModelCategory::RandomNumberGenerator => "press1966_rand3",
        ModelCategory::DirectionCosine => "demers2000",
        ModelCategory::EnergyLoss => "joy_luo1989",
        ModelCategory::MassAbsorptionCoefficient => "henke1993",
        ModelCategory::Other(_) => return None,
    };
    Some(Model::new(category.clone(), name))
}

#[cfg(test)]
mod tests {
    use super::{default_model, elastic_cross_section, is_supported, random_number_generator};
    use crate::options::{Model, ModelCategory};
    use crate::wxc::{ElasticCrossSectionType, RandomNumberGeneratorType};

    #[test]
    fn tables_map_known_selections() {
        assert_eq!(
            elastic_cross_section("mott_demers"),
            Some(ElasticCrossSectionType::MottParametrizedHd)
        );
        assert_eq!(
            random_number_generator("press1966_rand2"),
            Some(RandomNumberGeneratorType::Ran2)
        );
        assert_eq!(elastic_cross_section("elsepa2005"), None);
    }

    #[test]
    fn every_default_is_supported() {
        for category in ModelCategory::WINXRAY {
            let model = default_model(&category).expect("category should have a default");
            assert_eq!(is_supported(&model), Some(true), "{category} default");
        }
    }

    #[test]
    fn other_categories_have_no_table() {
        let model = Model::new(ModelCategory::Other("new".to_string()), "test");
        assert_eq!(is_supported(&model), None);
        assert_eq!(default_model(&model.category), None);
    }
}
