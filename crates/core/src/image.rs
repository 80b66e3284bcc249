//! Inline image payloads and their data-URI wire format.
//!
//! Images travel as `data:<content-type>;base64,<payload>` tokens in both
//! directions and are stored as opaque bytes plus a declared content type.
//! Nothing here inspects or re-encodes the image itself.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::error::CoreError;

/// Marker separating the content type from the encoded payload.
const BASE64_MARKER: &str = ";base64,";

/// An opaque image payload with its declared content type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImagePayload {
    pub content_type: String,
    pub data: Vec<u8>,
}

impl ImagePayload {
    /// Parse a `data:<content-type>;base64,<payload>` token.
    pub fn from_data_uri(token: &str) -> Result<Self, CoreError> {
        let rest = token.strip_prefix("data:").ok_or_else(|| {
            CoreError::Validation(
                "Image must be a data URI (data:<content-type>;base64,<payload>)".to_string(),
            )
        })?;
        let (content_type, payload) = rest.split_once(BASE64_MARKER).ok_or_else(|| {
            CoreError::Validation("Image data URI must carry a base64 payload".to_string())
        })?;
        if content_type.is_empty() {
            return Err(CoreError::Validation(
                "Image data URI is missing a content type".to_string(),
            ));
        }
        let data = STANDARD
            .decode(payload)
            .map_err(|e| CoreError::Validation(format!("Image payload is not valid base64: {e}")))?;
        Ok(Self {
            content_type: content_type.to_string(),
            data,
        })
    }

    /// Encode back into the data-URI wire format.
    pub fn to_data_uri(&self) -> String {
        format!(
            "data:{}{}{}",
            self.content_type,
            BASE64_MARKER,
            STANDARD.encode(&self.data)
        )
    }
}
