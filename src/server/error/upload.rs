use axum::{
    extract::multipart::MultipartError,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::error_response;

#[derive(Error, Debug)]
pub enum UploadError {
    /// Uploaded image is neither PNG nor JPEG.
    ///
    /// Detected before anything is written to disk or the database.
    #[error("Only .jpeg or .png files allowed")]
    InvalidImageType(Option<String>),

    /// Required form field was not sent.
    #[error("Missing form field '{0}'")]
    MissingField(&'static str),

    /// Form field could not be parsed.
    #[error("Invalid form field '{field}': {reason}")]
    InvalidField {
        /// Name of the form field
        field: &'static str,
        /// Why it was rejected
        reason: String,
    },

    /// Request body is not a readable multipart form.
    #[error(transparent)]
    Multipart(MultipartError),
}

/// Converts upload errors into HTTP responses.
///
/// - `InvalidImageType` → 406 Not Acceptable
/// - `MissingField` / `InvalidField` → 422 Unprocessable Entity
/// - `Multipart` → status reported by axum's multipart rejection
impl IntoResponse for UploadError {
    fn into_response(self) -> Response {
        match self {
            Self::InvalidImageType(ref content_type) => {
                tracing::debug!("Rejected image with content type {:?}", content_type);
                error_response(StatusCode::NOT_ACCEPTABLE, self.to_string())
            }
            Self::MissingField(_) | Self::InvalidField { .. } => {
                error_response(StatusCode::UNPROCESSABLE_ENTITY, self.to_string())
            }
            Self::Multipart(err) => error_response(err.status(), err.body_text()),
        }
    }
}
