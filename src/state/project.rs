/// Shared data structures for one report-generation session
///
/// These structs represent the data model that flows between
/// the wizard steps and the generation service.

use serde::{Deserialize, Serialize};

/// Textual metadata collected by the project detail form
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct ProjectDetails {
    /// Project name (e.g., "Oakwood Mall Renovation")
    pub project_name: String,
    /// Client name (e.g., "Prime Properties Inc.")
    pub client_name: String,
    /// Week or date range covered by the report (e.g., "Week of August 18, 2025")
    pub date_range: String,
    /// Key highlights for the week, may be empty
    pub highlights: String,
}

/// One uploaded image, base64-encoded and ready for transmission
///
/// The `data` field holds the raw file bytes encoded with the standard
/// base64 alphabet. There is never a data-URI prefix.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct EncodedImage {
    /// Original filename (e.g., "site_photo_01.jpg")
    pub filename: String,
    /// Base64-encoded file content
    pub data: String,
}

/// Response of the presentation generation service
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ProcessingResult {
    pub success: bool,
    /// Server-assigned project identifier
    pub project_id: String,
    /// Suggested filename for the generated deck (e.g., "Oakwood_Mall_2025-08-18.pptx")
    pub presentation_filename: String,
    /// Either a fully-qualified URL or an opaque storage-location message
    pub download_url: String,
    /// Human-readable status message
    pub message: String,
}

/// Everything accumulated for one wizard session
///
/// The record is created when the detail form is submitted. Later steps
/// append `images` and `result`; nothing is ever mutated in place after
/// being attached. Exactly one record exists per active session and it is
/// owned by the wizard root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectRecord {
    pub details: ProjectDetails,
    /// Encoded upload payload, attached when the image step completes
    pub images: Option<Vec<EncodedImage>>,
    /// Service response, attached when processing completes
    pub result: Option<ProcessingResult>,
}

impl ProjectRecord {
    /// Create a fresh record from submitted form details
    pub fn new(details: ProjectDetails) -> Self {
        Self {
            details,
            images: None,
            result: None,
        }
    }

    /// Number of images attached so far (0 before the upload step completes)
    pub fn image_count(&self) -> usize {
        self.images.as_ref().map(Vec::len).unwrap_or(0)
    }
}
