use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ModelCategory {
    ElasticCrossSection,
    IonizationCrossSection,
    IonizationPotential,
    RandomNumberGenerator,
    DirectionCosine,
    EnergyLoss,
    MassAbsorptionCoefficient,
    Other(String),
}

impl ModelCategory {
    pub const WINXRAY: [ModelCategory; 7] = [
        ModelCategory::ElasticCrossSection,
        ModelCategory::IonizationCrossSection,
        ModelCategory::IonizationPotential,
        ModelCategory::RandomNumberGenerator,
        ModelCategory::DirectionCosine,
        ModelCategory::EnergyLoss,
        ModelCategory::MassAbsorptionCoefficient,
    ];

    pub fn key(&self) -> &str {
        match self {
            Self::ElasticCrossSection => "elastic_cross_section",
            Self::IonizationCrossSection => "ionization_cross_section",
            Self::IonizationPotential => "ionization_potential",
            Self::RandomNumberGenerator => "random_number_generator",
            Self::DirectionCosine => "direction_cosine",
            Self::EnergyLoss => "energy_loss",
            Self::MassAbsorptionCoefficient => "mass_absorption_coefficient",
            Self::Other(key) => key,
        }
    }

    pub fn from_key(key: &str) -> Self {
        Self::WINXRAY
            .into_iter()
            .find(|category| category.key() == key)
            .unwrap_or_else(|| Self::Other(key.to_string()))
    }
}

impl From<String> for ModelCategory {
    fn from(key: String) -> Self {
        Self::from_key(&key)
    }
}

impl From<ModelCategory> for String {
    fn from(category: ModelCategory) -> Self {
        category.key().to_string()
    }
}

impl Display for ModelCategory {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.key().replace('_', " "))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Model {
    pub category: ModelCategory,
    pub name: String,
}

impl Model {
    pub fn new(category: ModelCategory, name: impl Into<String>) -> Self {
        Self {
            category,
            name: name.into(),
        }
    }
}

/// Model selections, at most one per category.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "Vec<Model>", into = "Vec<Model>")]
pub struct Models {
    selections: Vec<Model>,
}

impl Models {
    /// Selects `model`, replacing any earlier selection of the same category.
    pub fn add(&mut self, model: Model) {
        match self
            .selections
            .iter_mut()
            .find(|selection| selection.category == model.category)
        {
            Some(selection) => *selection = model,
            None => self.selections.push(model),
        }
    }

    pub fn get(&self, category: &ModelCategory) -> Option<&Model> {
        self.selections
            .iter()
            .find(|selection| &selection.category == category)
    }

    pub fn remove(&mut self, category: &ModelCategory) -> Option<Model> {
        let index = self
            .selections
            .iter()
            .position(|selection| &selection.category == category)?;
        Some(self.selections.remove(index))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Model> {
        self.selections.iter()
    }

    pub fn len(&self) -> usize {
        self.selections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selections.is_empty()
    }
}

impl FromIterator<Model> for Models {
    fn from_iter<I: IntoIterator<Item = Model>>(iter: I) -> Self {
        let mut models = Self::default();
        for model in iter {
            models.add(model);
        }
        models
    }
}

impl From<Vec<Model>> for Models {
    fn from(selections: Vec<Model>) -> Self {
        selections.into_iter().collect()
    }
}

impl From<Models> for Vec<Model> {
    fn from(models: Models) -> Self {
        models.selections
    }
}

#[cfg(test)]
mod tests {
    use super::{Model, ModelCategory, Models};

    #[test]
    fn category_keys_round_trip() {
        for category in ModelCategory::WINXRAY {
            assert_eq!(ModelCategory::from_key(category.key()), category);
        }
        assert_eq!(
            ModelCategory::from_key("new"),
            ModelCategory::Other("new".to_string())
        );
        assert_eq!(
            ModelCategory::MassAbsorptionCoefficient.to_string(),
            "mass absorption coefficient"
        );
    }

    #[test]
    fn adding_same_category_replaces_selection() {
        let mut models = Models::default();
        models.add(Model::new(ModelCategory::RandomNumberGenerator, "press1966_rand1"));
        models.add(Model::new(ModelCategory::EnergyLoss, "joy_luo1989"));
        models.add(Model::new(ModelCategory::RandomNumberGenerator, "press1966_rand4"));

        assert_eq!(models.len(), 2);
        assert_eq!(
            models
                .get(&ModelCategory::RandomNumberGenerator)
                .map(|model| model.name.as_str()),
            Some("press1966_rand4")
        );

        let removed = models.remove(&ModelCategory::EnergyLoss);
        assert!(removed.is_some());
        assert_eq!(models.len(), 1);
    }

    #[test]
    fn models_parse_from_json_list() {
        let models: Models = serde_json::from_str(
            r#"[
                { "category": "elastic_cross_section", "name": "rutherford" },
                { "category": "new", "name": "test" }
            ]"#,
        )
        .expect("models should parse");

        assert_eq!(models.len(), 2);
        assert!(models.get(&ModelCategory::ElasticCrossSection).is_some());
        assert!(models.get(&ModelCategory::Other("new".to_string())).is_some());
    }

    #[test]
    fn duplicate_categories_in_json_keep_the_last_selection() {
        let models: Models = serde_json::from_str(
            r#"[
                { "category": "random_number_generator", "name": "press1966_rand1" },
                { "category": "energy_loss", "name": "joy_luo1989" },
                { "category": "random_number_generator", "name": "press1966_rand4" }
            ]"#,
        )
        .expect("models should parse");

        assert_eq!(models.len(), 2);
        assert_eq!(
            models
                .get(&ModelCategory::RandomNumberGenerator)
                .map(|model| model.name.as_str()),
            Some("press1966_rand4")
        );

        let rendered = serde_json::to_value(&models).expect("models should serialize");
        assert_eq!(rendered.as_array().map(Vec::len), Some(2));
    }
}
