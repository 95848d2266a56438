//! Application state shared across all request handlers.
//!
//! The state is built once during startup and cloned into every handler through
//! Axum's state extraction. Both fields are cheap to clone: the database
//! connection is a pool handle and the image store only holds its directory.

use sea_orm::DatabaseConnection;

use crate::server::service::image::ImageStore;

#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Store for uploaded medication images.
    pub images: ImageStore,
}

impl AppState {
    pub fn new(db: DatabaseConnection, images: ImageStore) -> Self {
        Self { db, images }
    }
}
