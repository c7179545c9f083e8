//! Shared data structures for staged uploads.
//!
//! These structs represent the data model that flows between
//! the ingestion layer and the UI layer.

use std::fmt;
use std::path::Path;
use std::sync::Arc;

/// Mime type assigned to files we cannot classify by extension.
/// The selection store filters these out.
pub const OCTET_STREAM: &str = "application/octet-stream";

/// Extensions the product recognizes as images. FITS is advertised in the
/// product copy, so it is staged even though the preview decoder cannot
/// render it.
const IMAGE_EXTENSIONS: &[(&str, &str)] = &[
    ("jpg", "image/jpeg"),
    ("jpeg", "image/jpeg"),
    ("png", "image/png"),
    ("gif", "image/gif"),
    ("bmp", "image/bmp"),
    ("tif", "image/tiff"),
    ("tiff", "image/tiff"),
    ("webp", "image/webp"),
    ("fits", "image/fits"),
    ("fit", "image/fits"),
];

/// A user-selected image awaiting submission for analysis.
///
/// The payload is shared, not copied: thumbnail decoding and the selection
/// store both hold the same bytes.
#[derive(Clone, PartialEq)]
pub struct StagedFile {
    /// Display name (file name only, no directory)
    pub name: String,
    /// Mime type derived from the extension, e.g. "image/png"
    pub mime_type: String,
    bytes: Arc<Vec<u8>>,
}

impl StagedFile {
    pub fn new(name: impl Into<String>, mime_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
            bytes: Arc::new(bytes),
        }
    }

    /// Only `image/*` entries are ever staged by the selection store.
    pub fn is_image(&self) -> bool {
        self.mime_type.starts_with("image/")
    }

    /// Cheap handle to the payload for read-only collaborators.
    pub fn bytes(&self) -> Arc<Vec<u8>> {
        Arc::clone(&self.bytes)
    }

    pub fn size(&self) -> usize {
        self.bytes.len()
    }
}

// Manual Debug so log lines don't dump the payload
impl fmt::Debug for StagedFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StagedFile")
            .field("name", &self.name)
            .field("mime_type", &self.mime_type)
            .field("size", &self.bytes.len())
            .finish()
    }
}

/// Look up the mime type for a path by its extension (case-insensitive).
/// Returns `None` for extensions we don't recognize as images.
pub fn mime_for_path(path: &Path) -> Option<&'static str> {
    let extension = path.extension()?.to_string_lossy().to_lowercase();
    IMAGE_EXTENSIONS
        .iter()
        .find(|(ext, _)| *ext == extension)
        .map(|(_, mime)| *mime)
}

/// Human-readable file size for the staged-file cards.
pub fn size_label(bytes: usize) -> String {
    const KIB: f64 = 1024.0;
    const MIB: f64 = 1024.0 * 1024.0;

    let size = bytes as f64;
    if size >= MIB {
        format!("{:.1} MB", size / MIB)
    } else if size >= KIB {
        format!("{:.1} KB", size / KIB)
    } else {
        format!("{bytes} B")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_mime_for_known_extensions() {
        assert_eq!(
            mime_for_path(&PathBuf::from("m31.jpg")),
            Some("image/jpeg")
        );
        assert_eq!(
            mime_for_path(&PathBuf::from("orion.PNG")),
            Some("image/png")
        );
        assert_eq!(
            mime_for_path(&PathBuf::from("crab_nebula.fits")),
            Some("image/fits")
        );
    }

    #[test]
    fn test_mime_for_unknown_extension() {
        assert_eq!(mime_for_path(&PathBuf::from("notes.txt")), None);
        assert_eq!(mime_for_path(&PathBuf::from("no_extension")), None);
    }

    #[test]
    fn test_is_image() {
        let image = StagedFile::new("a.png", "image/png", vec![0; 4]);
        let other = StagedFile::new("a.txt", "text/plain", vec![0; 4]);

        assert!(image.is_image());
        assert!(!other.is_image());
    }

    #[test]
    fn test_size_label() {
        assert_eq!(size_label(512), "512 B");
        assert_eq!(size_label(2048), "2.0 KB");
        assert_eq!(size_label(3 * 1024 * 1024), "3.0 MB");
    }
}
