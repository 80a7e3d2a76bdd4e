//! Error types for the docshift library.
//!
//! One enum, one variant per pipeline stage that can fail. Every error is
//! **terminal** for the conversion in progress: nothing is retried, and no
//! partial output is ever returned alongside an `Err`. Callers own any
//! previously returned [`crate::output::ConversionResult`], so a failed
//! conversion cannot clobber an earlier successful one.
//!
//! All messages are written to be shown to an end user verbatim (toast /
//! status line), so they name the offending file where one exists.

use thiserror::Error;

/// All errors returned by the docshift library.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// The platform image decoder could not parse the input bytes
    /// (corrupt file, unsupported encoding, zero-byte input).
    #[error("Could not decode image '{name}': {detail}")]
    Decode { name: String, detail: String },

    /// PDF parsing or page rendering failed. Partial page sequences are
    /// discarded before this is returned.
    #[error("PDF rasterisation failed: {detail}")]
    Rasterize { detail: String },

    /// The encoder produced empty output or refused the surface.
    #[error("Image encoding to {target} failed: {detail}")]
    Encode { target: &'static str, detail: String },

    /// PDF construction failed, or an input image could not be decoded
    /// while assembling. The whole document is abandoned.
    #[error("PDF assembly failed: {detail}")]
    Assembly { detail: String },

    /// Archive construction failed. No partially written archive is kept.
    #[error("Could not create ZIP archive: {detail}")]
    Packaging { detail: String },

    /// Builder validation failed.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Unexpected internal error (e.g. a blocking task panicked).
    #[error("Internal error: {0}")]
    Internal(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_error_names_the_file() {
        let e = ConvertError::Decode {
            name: "holiday.heic".into(),
            detail: "unsupported encoding".into(),
        };
        let msg = e.to_string();
        assert!(msg.contains("holiday.heic"), "got: {msg}");
        assert!(msg.contains("unsupported encoding"));
    }

    #[test]
    fn encode_error_names_the_target() {
        let e = ConvertError::Encode {
            target: "image/jpeg",
            detail: "encoder returned no bytes".into(),
        };
        assert!(e.to_string().contains("image/jpeg"));
    }

    #[test]
    fn packaging_error_display() {
        let e = ConvertError::Packaging {
            detail: "disk full".into(),
        };
        assert!(e.to_string().contains("ZIP"));
        assert!(e.to_string().contains("disk full"));
    }
}
