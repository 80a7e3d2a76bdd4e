//! Output types: one rasterised page, the result of a conversion, and the
//! packaged download.
//!
//! A [`ConversionResult`] is exactly one of two shapes: a single encoded
//! blob with its filename, or an ordered sequence of [`PageImage`]s. The
//! caller threads the value to whatever consumes it (display, download);
//! there is no process-wide "last result" slot.

use serde::{Deserialize, Serialize};

/// One rasterised PDF page: 1-based index, encoded image bytes, and the
/// suggested filename (`page_<index>.png`).
///
/// Sequences of `PageImage` are always in source page order; the order is
/// significant for display and for archive member ordering.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageImage {
    /// 1-based page index in the source document.
    pub index: usize,
    /// Encoded image content.
    pub bytes: Vec<u8>,
    /// Suggested filename for this page.
    pub filename: String,
}

/// The output of one conversion operation.
#[derive(Debug, Clone)]
pub enum ConversionResult {
    /// A single encoded blob plus its suggested filename.
    Single {
        bytes: Vec<u8>,
        filename: String,
        media_type: &'static str,
    },
    /// An ordered sequence of rasterised pages, plus the sanitised base
    /// name the packager derives archive names from.
    Pages {
        base_name: String,
        pages: Vec<PageImage>,
    },
}

impl ConversionResult {
    /// Number of files this result represents before packaging.
    pub fn file_count(&self) -> usize {
        match self {
            ConversionResult::Single { .. } => 1,
            ConversionResult::Pages { pages, .. } => pages.len(),
        }
    }
}

/// A packaged, download-ready output: either the single blob unchanged or a
/// ZIP archive bundling a multi-page result.
#[derive(Debug, Clone)]
pub struct PackagedFile {
    pub bytes: Vec<u8>,
    pub filename: String,
    pub media_type: &'static str,
}
