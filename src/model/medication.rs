use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct MedicationDto {
    pub id: i32,
    pub name: String,
    pub weight: i32,
    pub code: String,
    /// Absolute path of the stored image, if one was uploaded.
    pub image: Option<String>,
}

/// Multipart form accepted by `POST /medications/`.
///
/// Only used to describe the request body in the OpenAPI document; the handler
/// reads the parts directly.
#[allow(dead_code)]
#[derive(ToSchema)]
pub struct CreateMedicationForm {
    /// Letters, digits, `-` and `_`.
    pub name: String,
    /// Grams, greater than zero.
    pub weight: i32,
    /// Upper case letters, digits and `_`.
    pub code: String,
    /// PNG or JPEG file.
    #[schema(value_type = Option<String>, format = Binary)]
    pub image: Option<Vec<u8>>,
}
