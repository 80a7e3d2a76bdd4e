//! Result packaging: decide between a single blob and a ZIP archive.
//!
//! Decision tree:
//! * single-blob result              → passed through unchanged
//! * multi-page result with 1 page   → unwrapped to a single blob
//!   (no archive overhead for one file)
//! * multi-page result with k pages  → one ZIP with exactly k members,
//!   in page order, each named by its page filename
//!
//! The archive is built fully in memory; on any failure the caller gets an
//! error and no bytes — a partially written archive is never surfaced.

use crate::error::ConvertError;
use crate::naming;
use crate::output::{ConversionResult, PackagedFile};
use std::io::{Cursor, Write};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};
use tracing::{debug, info};

/// Package a conversion result into one download-ready file.
pub fn package(result: ConversionResult) -> Result<PackagedFile, ConvertError> {
    match result {
        ConversionResult::Single {
            bytes,
            filename,
            media_type,
        } => {
            if bytes.is_empty() {
                return Err(ConvertError::Packaging {
                    detail: format!("'{filename}' has no content"),
                });
            }
            debug!(%filename, len = bytes.len(), "packaging single blob");
            Ok(PackagedFile {
                bytes,
                filename,
                media_type,
            })
        }

        ConversionResult::Pages { base_name, mut pages } => match pages.len() {
            0 => Err(ConvertError::Packaging {
                detail: "result contains no pages".into(),
            }),
            1 => {
                let page = pages.remove(0);
                debug!(filename = %page.filename, "unwrapping single-page result");
                Ok(PackagedFile {
                    bytes: page.bytes,
                    filename: page.filename,
                    media_type: "image/png",
                })
            }
            n => {
                let filename = naming::archive_filename(&base_name);
                let bytes = build_archive(&pages)?;
                info!(%filename, members = n, len = bytes.len(), "ZIP archive built");
                Ok(PackagedFile {
                    bytes,
                    filename,
                    media_type: "application/zip",
                })
            }
        },
    }
}

/// Deflate all pages into one in-memory ZIP, in page order.
fn build_archive(pages: &[crate::output::PageImage]) -> Result<Vec<u8>, ConvertError> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    for page in pages {
        writer
            .start_file(page.filename.as_str(), options)
            .map_err(|e| ConvertError::Packaging {
                detail: format!("could not add '{}': {e}", page.filename),
            })?;
        writer
            .write_all(&page.bytes)
            .map_err(|e| ConvertError::Packaging {
                detail: format!("could not write '{}': {e}", page.filename),
            })?;
    }

    let cursor = writer.finish().map_err(|e| ConvertError::Packaging {
        detail: format!("could not finalise archive: {e}"),
    })?;

    Ok(cursor.into_inner())
}
