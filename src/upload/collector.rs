/// In-memory collection of images picked for the current report
///
/// Files arrive either from the native picker dialog or from window
/// file-drop events. Anything that is not an image, or is over the size
/// ceiling, is silently excluded; everything else becomes an entry with a
/// fresh id and a preview handle for the grid. Removing an entry drops its
/// preview handle immediately and keeps the rest in their original order.

use iced::widget::image::Handle;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Per-file size ceiling: 10 MiB, matching the generation service limit
pub const MAX_FILE_BYTES: u64 = 10 * 1024 * 1024;

/// Accepted image file extensions (case-insensitive)
const IMAGE_EXTENSIONS: [&str; 5] = ["jpeg", "jpg", "png", "gif", "webp"];

/// One image accepted into the collection
#[derive(Debug, Clone)]
pub struct ImageEntry {
    /// Opaque random token identifying this entry
    pub id: Uuid,
    /// Filename only (e.g., "site_photo_01.jpg")
    pub filename: String,
    /// Full path to the file on disk
    pub path: PathBuf,
    /// File size in bytes
    pub size_bytes: u64,
    /// Preview handle for the thumbnail grid, released when the entry is removed
    pub preview: Handle,
}

/// Ordered set of accepted images
#[derive(Debug, Clone, Default)]
pub struct ImageCollection {
    entries: Vec<ImageEntry>,
}

impl ImageCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Try to accept a file into the collection.
    ///
    /// Returns `true` if the file became an entry. Wrong type or oversize
    /// files return `false` without surfacing anything, per the acceptance
    /// rules: the user simply does not see them appear.
    pub fn accept(&mut self, path: &Path) -> bool {
        let size = match std::fs::metadata(path) {
            Ok(meta) if meta.is_file() => meta.len(),
            _ => return false,
        };

        if !acceptable(path, size) {
            return false;
        }

        let filename = path
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_default();

        self.entries.push(ImageEntry {
            id: Uuid::new_v4(),
            filename,
            path: path.to_path_buf(),
            size_bytes: size,
            preview: Handle::from_path(path),
        });

        true
    }

    /// Remove the entry with the given id, preserving the order of the rest.
    /// Returns `true` if an entry was removed.
    pub fn remove(&mut self, id: Uuid) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.id != id);
        self.entries.len() < before
    }

    pub fn entries(&self) -> &[ImageEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Discard all entries (and their preview handles)
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Snapshot of (filename, path) pairs for the encode batch, in order
    pub fn handoff(&self) -> Vec<(String, PathBuf)> {
        self.entries
            .iter()
            .map(|entry| (entry.filename.clone(), entry.path.clone()))
            .collect()
    }
}

/// Acceptance rule: image extension and at most `MAX_FILE_BYTES` bytes.
/// A file at exactly the ceiling is accepted.
pub fn acceptable(path: &Path, size: u64) -> bool {
    is_image_file(path) && size <= MAX_FILE_BYTES
}

/// Check whether a path looks like an image by extension
pub fn is_image_file(path: &Path) -> bool {
    match path.extension() {
        Some(extension) => {
            let ext = extension.to_string_lossy().to_lowercase();
            IMAGE_EXTENSIONS.contains(&ext.as_str())
        }
        None => false,
    }
}

/// Human-readable file size (e.g., "2.5 MB") for the entry list
pub fn format_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 B".to_string();
    }
    let units = ["B", "KB", "MB", "GB"];
    let exponent = (bytes as f64).log(1024.0).floor() as usize;
    let exponent = exponent.min(units.len() - 1);
    let value = bytes as f64 / 1024f64.powi(exponent as i32);
    if exponent == 0 {
        format!("{} {}", bytes, units[exponent])
    } else {
        format!("{:.2} {}", value, units[exponent])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    /// Create a small throwaway file with the given extension
    fn temp_image(extension: &str, content: &[u8]) -> PathBuf {
        let path = std::env::temp_dir().join(format!("update-studio-{}.{}", Uuid::new_v4(), extension));
        fs::write(&path, content).expect("failed to write temp file");
        path
    }

    #[test]
    fn test_accepts_images_and_excludes_other_types() {
        let mut collection = ImageCollection::new();
        let jpg = temp_image("jpg", b"fake jpeg bytes");
        let txt = temp_image("txt", b"not an image");

        assert!(collection.accept(&jpg));
        assert!(!collection.accept(&txt));
        assert_eq!(collection.len(), 1);
        assert_eq!(collection.entries()[0].filename, jpg.file_name().unwrap().to_string_lossy());

        let _ = fs::remove_file(jpg);
        let _ = fs::remove_file(txt);
    }

    #[test]
    fn test_size_ceiling_is_inclusive() {
        let path = Path::new("photo.jpg");
        assert!(acceptable(path, MAX_FILE_BYTES));
        assert!(!acceptable(path, MAX_FILE_BYTES + 1));
        assert!(acceptable(path, 0));
    }

    #[test]
    fn test_extension_check_is_case_insensitive() {
        assert!(is_image_file(Path::new("photo.JPG")));
        assert!(is_image_file(Path::new("photo.WebP")));
        assert!(!is_image_file(Path::new("notes.pdf")));
        assert!(!is_image_file(Path::new("no_extension")));
    }

    #[test]
    fn test_remove_keeps_remaining_order() {
        let mut collection = ImageCollection::new();
        let first = temp_image("jpg", b"one");
        let second = temp_image("png", b"two");
        let third = temp_image("webp", b"three");

        collection.accept(&first);
        collection.accept(&second);
        collection.accept(&third);
        assert_eq!(collection.len(), 3);

        let middle_id = collection.entries()[1].id;
        assert!(collection.remove(middle_id));
        assert_eq!(collection.len(), 2);
        assert_eq!(collection.entries()[0].path, first);
        assert_eq!(collection.entries()[1].path, third);

        // Removing an unknown id is a no-op
        assert!(!collection.remove(Uuid::new_v4()));
        assert_eq!(collection.len(), 2);

        let _ = fs::remove_file(first);
        let _ = fs::remove_file(second);
        let _ = fs::remove_file(third);
    }

    #[test]
    fn test_handoff_preserves_input_order() {
        let mut collection = ImageCollection::new();
        let first = temp_image("jpg", b"one");
        let second = temp_image("png", b"two");

        collection.accept(&first);
        collection.accept(&second);

        let batch = collection.handoff();
        assert_eq!(batch.len(), 2);
        assert_eq!(batch[0].1, first);
        assert_eq!(batch[1].1, second);

        let _ = fs::remove_file(first);
        let _ = fs::remove_file(second);
    }

    #[test]
    fn test_missing_file_is_excluded() {
        let mut collection = ImageCollection::new();
        assert!(!collection.accept(Path::new("/nonexistent/photo.jpg")));
        assert!(collection.is_empty());
    }

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(0), "0 B");
        assert_eq!(format_size(512), "512 B");
        assert_eq!(format_size(2048), "2.00 KB");
        assert_eq!(format_size(2 * 1024 * 1024), "2.00 MB");
    }
}
