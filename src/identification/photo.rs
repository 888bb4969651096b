//! Photo loading and transport encoding.
//!
//! The Plant.id API takes images as base64 strings inside a JSON body. This
//! module turns a local photo reference into that encoded form while keeping
//! the original reference around for the gallery fallback.

use std::path::Path;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;

use super::domain::IdentificationError;

/// A captured photo, encoded for transport
#[derive(Debug, Clone)]
pub struct EncodedPhoto {
    /// The original local reference, as supplied by the caller
    pub reference: String,
    /// Image bytes, base64-encoded (no data-URI prefix)
    pub base64: String,
}

impl EncodedPhoto {
    /// The same payload with a data-URI prefix.
    ///
    /// Used for the single documented retry: the endpoint sometimes rejects
    /// raw base64 with a 400 but accepts the prefixed form.
    pub fn as_data_uri(&self) -> String {
        format!("data:image/jpeg;base64,{}", self.base64)
    }
}

/// Read a photo reference and encode it for transport.
///
/// A reference that does not resolve to readable bytes is an input error,
/// reported immediately and never retried.
pub fn encode(path: &Path) -> Result<EncodedPhoto, IdentificationError> {
    let bytes = std::fs::read(path)
        .map_err(|e| IdentificationError::Photo(format!("{}: {}", path.display(), e)))?;

    Ok(EncodedPhoto {
        reference: path.to_string_lossy().into_owned(),
        base64: BASE64.encode(&bytes),
    })
}
