/// Batch encoding of collected images into the upload payload
///
/// Each file is read in full and base64-encoded with the standard alphabet.
/// The bytes are encoded directly, so the output never carries a data-URI
/// prefix. The batch is all-or-nothing: the first read failure aborts the
/// whole hand-off and nothing partial reaches the wizard.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use std::path::PathBuf;
use thiserror::Error;

use crate::state::project::EncodedImage;

/// Failure while preparing the upload payload
#[derive(Debug, Error)]
pub enum EncodeError {
    #[error("Failed to read {filename}: {source}")]
    Read {
        filename: String,
        #[source]
        source: std::io::Error,
    },
}

/// Encode a batch of (filename, path) pairs, preserving input order.
///
/// Files are read one at a time; no two reads are ever in flight at once.
/// Any failure returns an error for the whole batch.
pub async fn encode_batch(batch: Vec<(String, PathBuf)>) -> Result<Vec<EncodedImage>, EncodeError> {
    let mut encoded = Vec::with_capacity(batch.len());

    for (filename, path) in batch {
        let bytes = tokio::fs::read(&path)
            .await
            .map_err(|source| EncodeError::Read {
                filename: filename.clone(),
                source,
            })?;

        encoded.push(EncodedImage {
            filename,
            data: STANDARD.encode(&bytes),
        });
    }

    println!("📦 Encoded {} images for upload", encoded.len());

    Ok(encoded)
}
