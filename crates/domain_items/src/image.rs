//! Image attachments
//!
//! Reports may carry an optional photo of the item. The image travels and
//! is stored as a base64-encoded blob alongside the record; it is only
//! decoded when a view needs the raw bytes. A blob that fails to decode is
//! a display problem, never a reason to reject or drop the record itself.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use serde::{Deserialize, Serialize};
use thiserror::Error;

const PNG_MAGIC: &[u8] = &[0x89, b'P', b'N', b'G'];
const JPEG_MAGIC: &[u8] = &[0xFF, 0xD8, 0xFF];

/// Errors raised when decoding a stored image blob
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ImageError {
    #[error("image data is not valid base64")]
    InvalidEncoding,

    #[error("image data is not a recognized JPEG or PNG")]
    UnsupportedFormat,
}

/// Supported image formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImageFormat {
    Jpeg,
    Png,
}

impl ImageFormat {
    /// MIME type for HTTP responses
    pub fn content_type(&self) -> &'static str {
        match self {
            ImageFormat::Jpeg => "image/jpeg",
            ImageFormat::Png => "image/png",
        }
    }

    /// Sniffs the format from the leading magic bytes
    fn sniff(bytes: &[u8]) -> Option<ImageFormat> {
        if bytes.starts_with(PNG_MAGIC) {
            Some(ImageFormat::Png)
        } else if bytes.starts_with(JPEG_MAGIC) {
            Some(ImageFormat::Jpeg)
        } else {
            None
        }
    }
}

/// A base64-encoded image blob stored on an item record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageAttachment {
    encoded: String,
}

impl ImageAttachment {
    /// Encodes raw image bytes for storage
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self {
            encoded: STANDARD.encode(bytes),
        }
    }

    /// Wraps an already-encoded blob, e.g. from an upload form
    ///
    /// The blob is stored as-is; malformed data surfaces later as a
    /// recoverable decode error.
    pub fn from_encoded(encoded: impl Into<String>) -> Self {
        Self {
            encoded: encoded.into(),
        }
    }

    /// The stored base64 payload
    pub fn as_encoded(&self) -> &str {
        &self.encoded
    }

    /// Decodes the blob back to displayable bytes
    ///
    /// # Errors
    ///
    /// `ImageError::InvalidEncoding` when the payload is not base64,
    /// `ImageError::UnsupportedFormat` when the bytes carry neither a JPEG
    /// nor a PNG signature.
    pub fn decode(&self) -> Result<DecodedImage, ImageError> {
        let bytes = STANDARD
            .decode(&self.encoded)
            .map_err(|_| ImageError::InvalidEncoding)?;
        let format = ImageFormat::sniff(&bytes).ok_or(ImageError::UnsupportedFormat)?;
        Ok(DecodedImage { format, bytes })
    }
}

/// A decoded image ready for display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedImage {
    pub format: ImageFormat,
    pub bytes: Vec<u8>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_png_round_trip() {
        let bytes = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 1, 2, 3];
        let attachment = ImageAttachment::from_bytes(&bytes);
        let decoded = attachment.decode().unwrap();

        assert_eq!(decoded.format, ImageFormat::Png);
        assert_eq!(decoded.bytes, bytes);
    }

    #[test]
    fn test_jpeg_detected() {
        let attachment = ImageAttachment::from_bytes(&[0xFF, 0xD8, 0xFF, 0xE0, 0x00]);
        let decoded = attachment.decode().unwrap();

        assert_eq!(decoded.format, ImageFormat::Jpeg);
        assert_eq!(decoded.format.content_type(), "image/jpeg");
    }

    #[test]
    fn test_invalid_base64_is_recoverable() {
        let attachment = ImageAttachment::from_encoded("not base64!!!");

        assert_eq!(attachment.decode(), Err(ImageError::InvalidEncoding));
        // The stored blob is untouched by the failed decode.
        assert_eq!(attachment.as_encoded(), "not base64!!!");
    }

    #[test]
    fn test_unrecognized_bytes_rejected() {
        let attachment = ImageAttachment::from_bytes(b"plain text, not an image");

        assert_eq!(attachment.decode(), Err(ImageError::UnsupportedFormat));
    }
}
