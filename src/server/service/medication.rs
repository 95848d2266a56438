use sea_orm::{DatabaseConnection, SqlErr};

use crate::server::{
    data::medication::MedicationRepository,
    error::{upload::UploadError, AppError},
    model::medication::{CreateMedicationParams, ImageUpload, Medication},
    service::image::ImageStore,
};

pub struct MedicationService<'a> {
    db: &'a DatabaseConnection,
    images: &'a ImageStore,
}

impl<'a> MedicationService<'a> {
    pub fn new(db: &'a DatabaseConnection, images: &'a ImageStore) -> Self {
        Self { db, images }
    }

    /// Registers a medication and stores its optional image.
    ///
    /// The code and image type are checked before anything is written. When the
    /// database insert fails after the image was saved, the file is removed again.
    ///
    /// # Returns
    /// - `Ok(Medication)` - The registered medication
    /// - `Err(AppError::DuplicateKey)` - Code already in use
    /// - `Err(AppError::UploadErr(InvalidImageType))` - Image is not PNG or JPEG
    /// - `Err(AppError::IoErr)` - Image could not be written
    pub async fn create(
        &self,
        params: CreateMedicationParams,
        image: Option<ImageUpload>,
    ) -> Result<Medication, AppError> {
        let repo = MedicationRepository::new(self.db);

        if repo.get_by_code(&params.code).await?.is_some() {
            return Err(duplicate_code());
        }

        if let Some(upload) = &image {
            if !upload.is_supported() {
                return Err(UploadError::InvalidImageType(upload.content_type.clone()).into());
            }
        }

        let file_name = match &image {
            Some(upload) => Some(self.images.save(upload).await?),
            None => None,
        };

        match repo.create(params, file_name.clone()).await {
            Ok(medication) => Ok(medication),
            Err(err) => {
                if let Some(file_name) = &file_name {
                    if let Err(e) = self.images.remove(file_name).await {
                        tracing::warn!("Failed to remove orphaned image {}: {}", file_name, e);
                    }
                }

                Err(match err.sql_err() {
                    Some(SqlErr::UniqueConstraintViolation(_)) => duplicate_code(),
                    _ => AppError::DbErr(err),
                })
            }
        }
    }

    pub async fn get_all(&self) -> Result<Vec<Medication>, AppError> {
        Ok(MedicationRepository::new(self.db).get_all().await?)
    }

    /// Gets a medication by id.
    ///
    /// # Returns
    /// - `Ok(Medication)` - Medication found
    /// - `Err(AppError::NotFound)` - No medication with that id
    pub async fn get_by_id(&self, id: i32) -> Result<Medication, AppError> {
        MedicationRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Medication with id {} not found", id)))
    }
}

fn duplicate_code() -> AppError {
    AppError::DuplicateKey("Code already registered".to_string())
}
