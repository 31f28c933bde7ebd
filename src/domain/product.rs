//! Vendor catalog entries and local image previews.

use std::fs;
use std::path::{Path, PathBuf};

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use thiserror::Error;

/// Used when a product is added without an image.
pub const DEFAULT_PRODUCT_IMAGE: &str =
    "https://images.unsplash.com/photo-1546069901-ba9599a7e63c?w=400";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    pub id: String,
    pub name: String,
    /// Naira.
    pub price: u64,
    /// Remote URL or `data:` URL.
    pub image: String,
    pub vendor_id: String,
}

impl Product {
    pub fn has_inline_image(&self) -> bool {
        self.image.starts_with("data:")
    }
}

#[derive(Debug, Error)]
pub enum ImageError {
    #[error("Failed to read image '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("'{path}' is not a recognised image")]
    UnsupportedFormat { path: PathBuf },
}

/// Read a local image into a base64 `data:` URL for preview.
///
/// The file never leaves the machine.
pub fn image_data_url(path: &Path) -> Result<String, ImageError> {
    let bytes = fs::read(path).map_err(|source| ImageError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let format = image::guess_format(&bytes).map_err(|_| ImageError::UnsupportedFormat {
        path: path.to_path_buf(),
    })?;
    Ok(format!(
        "data:{};base64,{}",
        format.to_mime_type(),
        STANDARD.encode(&bytes)
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    // 8-byte PNG signature is enough for format sniffing.
    const PNG_MAGIC: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 0, 0];

    #[test]
    fn png_becomes_data_url() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("jollof.png");
        fs::write(&path, PNG_MAGIC).unwrap();

        let url = image_data_url(&path).unwrap();
        assert!(url.starts_with("data:image/png;base64,"));
        let encoded = url.trim_start_matches("data:image/png;base64,");
        assert_eq!(STANDARD.decode(encoded).unwrap(), PNG_MAGIC);
    }

    #[test]
    fn missing_file_is_read_error() {
        let dir = TempDir::new().unwrap();
        let err = image_data_url(&dir.path().join("nope.png")).unwrap_err();
        assert!(matches!(err, ImageError::Read { .. }));
    }

    #[test]
    fn text_file_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("notes.txt");
        fs::write(&path, b"just some notes").unwrap();
        let err = image_data_url(&path).unwrap_err();
        assert!(matches!(err, ImageError::UnsupportedFormat { .. }));
    }
}
