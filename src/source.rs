//! Source-file input type.
//!
//! A [`SourceFile`] is the library's only input shape: the raw bytes of one
//! file plus the metadata the host already knows about it. MIME/extension
//! pre-validation is the caller's job — the pipeline only reports decode
//! failures. The struct is never mutated; operations clone the bytes they
//! need onto a blocking task and drop them when the stage completes.

use crate::naming;

/// An immutable input file: binary content, declared media type, display name.
#[derive(Debug, Clone)]
pub struct SourceFile {
    /// Display name as the host saw it (e.g. `"report final.pdf"`).
    pub name: String,
    /// Declared media type (e.g. `"application/pdf"`, `"image/jpeg"`).
    pub media_type: String,
    /// Raw file content.
    pub bytes: Vec<u8>,
}

impl SourceFile {
    pub fn new(
        name: impl Into<String>,
        media_type: impl Into<String>,
        bytes: Vec<u8>,
    ) -> Self {
        Self {
            name: name.into(),
            media_type: media_type.into(),
            bytes,
        }
    }

    /// Byte size of the content.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Filesystem-safe base name: the portion of `name` before its first
    /// `.`, with unsafe characters replaced.
    pub fn base_name(&self) -> String {
        naming::base_name(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_name_strips_extension_and_sanitises() {
        let f = SourceFile::new("tax:2024.final.pdf", "application/pdf", vec![1, 2, 3]);
        assert_eq!(f.base_name(), "tax_2024");
        assert_eq!(f.len(), 3);
        assert!(!f.is_empty());
    }
}
