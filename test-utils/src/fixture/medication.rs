//! Medication fixtures for creating in-memory test data.

use entity::medication;

/// Default test medication name.
pub const DEFAULT_NAME: &str = "Paracetamol";

/// Default test medication code.
pub const DEFAULT_CODE: &str = "PARA_500";

/// Default medication weight in grams.
pub const DEFAULT_WEIGHT: i32 = 50;

/// Creates a medication entity model with id `1` and no image.
pub fn entity() -> medication::Model {
    entity_builder().build()
}

/// Creates a medication entity builder for customization.
pub fn entity_builder() -> MedicationEntityBuilder {
    MedicationEntityBuilder {
        id: 1,
        name: DEFAULT_NAME.to_string(),
        weight: DEFAULT_WEIGHT,
        code: DEFAULT_CODE.to_string(),
        image: None,
    }
}

/// Creates in-memory medications with ids `1..` and the given weights.
///
/// # Example
///
/// ```rust,ignore
/// let meds = fixture::medication::with_weights(&[30, 40, 10]);
/// assert_eq!(meds[1].id, 2);
/// ```
pub fn with_weights(weights: &[i32]) -> Vec<medication::Model> {
    weights
        .iter()
        .enumerate()
        .map(|(index, weight)| {
            entity_builder()
                .id(index as i32 + 1)
                .code(format!("MED_{}", index + 1))
                .weight(*weight)
                .build()
        })
        .collect()
}

/// Builder for medication entity models.
pub struct MedicationEntityBuilder {
    id: i32,
    name: String,
    weight: i32,
    code: String,
    image: Option<String>,
}

impl MedicationEntityBuilder {
    pub fn id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn weight(mut self, weight: i32) -> Self {
        self.weight = weight;
        self
    }

    pub fn code(mut self, code: impl Into<String>) -> Self {
        self.code = code.into();
        self
    }

    pub fn image(mut self, image: Option<String>) -> Self {
        self.image = image;
        self
    }

    pub fn build(self) -> medication::Model {
        medication::Model {
            id: self.id,
            name: self.name,
            weight: self.weight,
            code: self.code,
            image: self.image,
        }
    }
}
