//! Medication domain model and registration parameters.

use std::path::Path;

use crate::{
    model::medication::MedicationDto,
    server::{error::AppError, util::validate},
};

/// A registered medication.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Medication {
    pub id: i32,
    pub name: String,
    /// Grams.
    pub weight: i32,
    pub code: String,
    /// File name inside the image directory, never a full path.
    pub image: Option<String>,
}

impl Medication {
    /// Converts an entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::medication::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            weight: entity.weight,
            code: entity.code,
            image: entity.image,
        }
    }

    /// Converts domain model to DTO for API responses.
    ///
    /// The stored image file name is resolved against `image_dir` so clients
    /// receive the absolute location; the stored value is left untouched.
    pub fn into_dto(self, image_dir: &Path) -> MedicationDto {
        MedicationDto {
            id: self.id,
            name: self.name,
            weight: self.weight,
            code: self.code,
            image: self
                .image
                .map(|file_name| image_dir.join(file_name).to_string_lossy().into_owned()),
        }
    }
}

/// Validated input for registering a medication.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateMedicationParams {
    pub name: String,
    pub weight: i32,
    pub code: String,
}

impl CreateMedicationParams {
    /// Trims name and code, then checks them against the allowed alphabets.
    ///
    /// # Returns
    /// - `Ok(CreateMedicationParams)` - Name, weight and code are acceptable
    /// - `Err(AppError::Validation)` - A field violates its constraint
    pub fn new(name: &str, weight: i32, code: &str) -> Result<Self, AppError> {
        let name = name.trim();
        let code = code.trim();

        if !validate::is_medication_name(name) {
            return Err(AppError::Validation(
                "name may only contain letters, digits, '-' and '_'".to_string(),
            ));
        }
        if weight <= 0 {
            return Err(AppError::Validation(
                "weight must be greater than 0".to_string(),
            ));
        }
        if !validate::is_medication_code(code) {
            return Err(AppError::Validation(
                "code may only contain upper case letters, digits and '_'".to_string(),
            ));
        }

        Ok(Self {
            name: name.to_string(),
            weight,
            code: code.to_string(),
        })
    }
}

/// Image file received alongside a medication registration.
#[derive(Debug, Clone)]
pub struct ImageUpload {
    /// Client supplied file name, used only for its extension.
    pub file_name: Option<String>,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

impl ImageUpload {
    /// Whether the declared content type is PNG or JPEG.
    pub fn is_supported(&self) -> bool {
        matches!(
            self.content_type.as_deref(),
            Some("image/png") | Some("image/jpeg")
        )
    }

    /// Extension of the client file name including the leading dot, if any.
    pub fn extension(&self) -> Option<String> {
        self.file_name
            .as_deref()
            .and_then(|name| Path::new(name).extension())
            .and_then(|ext| ext.to_str())
            .filter(|ext| validate::is_file_extension(ext))
            .map(|ext| format!(".{}", ext))
    }
}
