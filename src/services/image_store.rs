use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};

use crate::{config::UploadConfig, error::Result};

pub const ACCEPTED_IMAGE_TYPES: [&str; 3] = ["image/jpeg", "image/png", "image/webp"];

/// Prefix of every stored path, and the mount point of the static files.
pub const PUBLIC_PREFIX: &str = "uploads";

const FALLBACK_NAME: &str = "upload";

#[derive(Debug, Clone)]
pub struct ImageStore {
    dir: PathBuf,
    max_file_size: usize,
}

impl ImageStore {
    pub fn new(config: &UploadConfig) -> Self {
        Self {
            dir: config.dir.clone(),
            max_file_size: config.max_file_size,
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn max_file_size(&self) -> usize {
        self.max_file_size
    }

    pub fn accepts(content_type: &str) -> bool {
        let essence = content_type.split(';').next().unwrap_or_default().trim();
        ACCEPTED_IMAGE_TYPES
            .iter()
            .any(|accepted| accepted.eq_ignore_ascii_case(essence))
    }

    pub async fn ensure_dir(&self) -> Result<()> {
        tokio::fs::create_dir_all(&self.dir).await?;
        Ok(())
    }

    /// Writes an accepted image and returns its public relative path.
    ///
    /// Disallowed content types yield `Ok(None)` with nothing written; the
    /// caller sees the image as absent. Size is enforced while reading the
    /// upload, before this is called.
    pub async fn store(
        &self,
        bytes: &[u8],
        original_name: &str,
        content_type: &str,
    ) -> Result<Option<String>> {
        if !Self::accepts(content_type) {
            tracing::warn!(
                "Dropped upload {:?} with disallowed type {:?}",
                original_name,
                content_type
            );
            return Ok(None);
        }

        let file_name = stored_file_name(Utc::now(), original_name);
        tokio::fs::write(self.dir.join(&file_name), bytes).await?;

        tracing::info!("Stored upload {} ({} bytes)", file_name, bytes.len());

        Ok(Some(format!("{}/{}", PUBLIC_PREFIX, file_name)))
    }
}

/// `<ISO-8601 timestamp with ':' as '-'><original file name>`.
pub fn stored_file_name(uploaded_at: DateTime<Utc>, original_name: &str) -> String {
    let timestamp = uploaded_at.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string();
    format!("{}{}", timestamp.replace(':', "-"), base_name(original_name))
}

// Client file names may carry directories from either platform.
fn base_name(original_name: &str) -> &str {
    original_name
        .rsplit(['/', '\\'])
        .next()
        .filter(|name| !name.is_empty() && *name != "." && *name != "..")
        .unwrap_or(FALLBACK_NAME)
}
