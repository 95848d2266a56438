use axum::{
    extract::{Multipart, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        medication::{CreateMedicationForm, MedicationDto},
    },
    server::{
        error::{upload::UploadError, AppError},
        model::medication::{CreateMedicationParams, ImageUpload},
        service::medication::MedicationService,
        state::AppState,
    },
};

/// Tag for grouping medication endpoints in OpenAPI documentation
pub static MEDICATION_TAG: &str = "medication";

/// List every registered medication.
#[utoipa::path(
    get,
    path = "/medications/",
    tag = MEDICATION_TAG,
    responses(
        (status = 200, description = "All registered medications", body = Vec<MedicationDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_medications(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let medications = MedicationService::new(&state.db, &state.images)
        .get_all()
        .await?;

    let image_dir = state.images.dir();
    let dtos: Vec<MedicationDto> = medications
        .into_iter()
        .map(|m| m.into_dto(image_dir))
        .collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Get a medication by id.
///
/// # Returns
/// - `200 OK` - The medication, with the absolute image path if it has one
/// - `404 Not Found` - No medication with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/medications/{medication_id}",
    tag = MEDICATION_TAG,
    params(
        ("medication_id" = i32, Path, description = "Medication ID")
    ),
    responses(
        (status = 200, description = "The medication", body = MedicationDto),
        (status = 404, description = "Medication not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_medication(
    State(state): State<AppState>,
    Path(medication_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let medication = MedicationService::new(&state.db, &state.images)
        .get_by_id(medication_id)
        .await?;

    Ok((StatusCode::OK, Json(medication.into_dto(state.images.dir()))))
}

/// Register a new medication from a multipart form.
///
/// Accepts `name`, `weight`, `code` and an optional `image` part. Images must be
/// PNG or JPEG and are stored under a generated file name.
///
/// # Returns
/// - `200 OK` - The registered medication
/// - `400 Bad Request` - Code already registered
/// - `406 Not Acceptable` - Image is not PNG or JPEG
/// - `422 Unprocessable Entity` - Missing or invalid form field
/// - `500 Internal Server Error` - Database or filesystem error
#[utoipa::path(
    post,
    path = "/medications/",
    tag = MEDICATION_TAG,
    request_body(content = CreateMedicationForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Medication registered", body = MedicationDto),
        (status = 400, description = "Code already registered", body = ErrorDto),
        (status = 406, description = "Only .jpeg or .png files allowed", body = ErrorDto),
        (status = 422, description = "Invalid medication data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_medication(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let (params, image) = read_medication_form(multipart).await?;

    let medication = MedicationService::new(&state.db, &state.images)
        .create(params, image)
        .await?;

    Ok((StatusCode::OK, Json(medication.into_dto(state.images.dir()))))
}

/// Reads and validates the parts of a medication form.
///
/// An `image` part without a file name and without content counts as absent, which
/// is what browsers send for an untouched file input.
async fn read_medication_form(
    mut multipart: Multipart,
) -> Result<(CreateMedicationParams, Option<ImageUpload>), AppError> {
    let mut name = None;
    let mut weight = None;
    let mut code = None;
    let mut image = None;

    while let Some(field) = multipart.next_field().await? {
        let field_name = field.name().map(str::to_string);

        match field_name.as_deref() {
            Some("name") => name = Some(field.text().await?),
            Some("weight") => weight = Some(field.text().await?),
            Some("code") => code = Some(field.text().await?),
            Some("image") => {
                let file_name = field.file_name().map(str::to_string);
                let content_type = field.content_type().map(str::to_string);
                let bytes = field.bytes().await?;

                let is_empty =
                    bytes.is_empty() && file_name.as_deref().is_none_or(str::is_empty);
                if !is_empty {
                    image = Some(ImageUpload {
                        file_name,
                        content_type,
                        bytes: bytes.to_vec(),
                    });
                }
            }
            _ => {}
        }
    }

    let name = name.ok_or(UploadError::MissingField("name"))?;
    let code = code.ok_or(UploadError::MissingField("code"))?;
    let weight = weight
        .ok_or(UploadError::MissingField("weight"))?
        .trim()
        .parse::<i32>()
        .map_err(|e| UploadError::InvalidField {
            field: "weight",
            reason: e.to_string(),
        })?;

    let params = CreateMedicationParams::new(&name, weight, &code)?;

    Ok((params, image))
}
