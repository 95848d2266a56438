//! Filesystem store for medication images.

use std::path::{Path, PathBuf};

use rand::Rng;

use crate::server::model::medication::ImageUpload;

/// Directory below the static root that holds uploaded images.
pub const IMAGE_SUBDIR: &str = "images";

/// Stores uploaded images under a random name and resolves stored names back to paths.
#[derive(Debug, Clone)]
pub struct ImageStore {
    dir: PathBuf,
}

impl ImageStore {
    /// Creates a store rooted at `dir` without touching the filesystem.
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// Creates `<static_dir>/images` if needed and returns a store using its
    /// absolute path.
    pub async fn init(static_dir: &Path) -> Result<Self, std::io::Error> {
        let dir = std::path::absolute(static_dir.join(IMAGE_SUBDIR))?;
        tokio::fs::create_dir_all(&dir).await?;

        tracing::debug!("Image store ready at {}", dir.display());

        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Writes the upload under a fresh random name that keeps the client's extension.
    ///
    /// # Returns
    /// - `Ok(String)` - File name relative to the store directory
    /// - `Err(std::io::Error)` - Write failed
    pub async fn save(&self, upload: &ImageUpload) -> Result<String, std::io::Error> {
        let file_name = format!(
            "{}{}",
            Self::generate_file_stem(),
            upload.extension().unwrap_or_default()
        );

        tokio::fs::write(self.dir.join(&file_name), &upload.bytes).await?;

        Ok(file_name)
    }

    /// Deletes a previously saved image.
    pub async fn remove(&self, file_name: &str) -> Result<(), std::io::Error> {
        tokio::fs::remove_file(self.dir.join(file_name)).await
    }

    /// 32 lowercase hex characters.
    fn generate_file_stem() -> String {
        const CHARSET: &[u8] = b"0123456789abcdef";
        const STEM_LENGTH: usize = 32;

        let mut rng = rand::rng();

        (0..STEM_LENGTH)
            .map(|_| {
                let idx = rng.random_range(0..CHARSET.len());
                CHARSET[idx] as char
            })
            .collect()
    }
}
