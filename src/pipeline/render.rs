//! PDF rasterisation: render every page to a PNG via pdfium.
//!
//! ## Why spawn_blocking?
//!
//! The `pdfium-render` crate wraps the pdfium C++ library, which uses
//! thread-local state internally and is not safe to call from async
//! contexts. `tokio::task::spawn_blocking` moves the work onto a thread
//! designed for blocking operations, so the async caller suspends cleanly
//! while pages render.
//!
//! ## Why one page at a time?
//!
//! A rendered page at 2× is an uncompressed RGBA surface — tens of
//! megabytes each. Rendering pages concurrently would multiply that peak by
//! the concurrency degree for no fidelity gain, so pages are processed
//! strictly sequentially: a deliberate memory/throughput trade-off, not an
//! accidental limitation.

use crate::config::{ConversionConfig, ImageTarget};
use crate::error::ConvertError;
use crate::naming;
use crate::output::PageImage;
use crate::pipeline::encode;
use crate::progress::Progress;
use crate::source::SourceFile;
use image::DynamicImage;
use pdfium_render::prelude::*;
use tracing::{debug, info};

/// Rasterise every page of a PDF, in page order, at
/// [`ConversionConfig::render_scale`] times the page's native size.
///
/// All-or-nothing: if any page fails, the partial sequence is discarded and
/// an error is returned.
pub async fn rasterize(
    file: &SourceFile,
    config: &ConversionConfig,
) -> Result<Vec<PageImage>, ConvertError> {
    let bytes = file.bytes.clone();
    let scale = config.render_scale;
    let progress = config.progress.clone();

    tokio::task::spawn_blocking(move || rasterize_blocking(&bytes, scale, progress))
        .await
        .map_err(|e| ConvertError::Internal(format!("render task panicked: {e}")))?
}

/// Probe whether a pdfium library can be bound in this environment.
///
/// Lets hosts (and tests) detect up front that PDF rasterisation would fail,
/// instead of discovering it on the first conversion.
pub fn pdfium_available() -> bool {
    bind_pdfium().is_ok()
}

/// Bind to pdfium once per operation: a library next to the executable wins,
/// then the system library. The capability either resolves here or the whole
/// operation fails with a clear message.
fn bind_pdfium() -> Result<Pdfium, ConvertError> {
    Pdfium::bind_to_library(Pdfium::pdfium_platform_library_name_at_path("./"))
        .or_else(|_| Pdfium::bind_to_system_library())
        .map(Pdfium::new)
        .map_err(|e| ConvertError::Rasterize {
            detail: format!(
                "pdfium library unavailable: {e:?}. \
                 Install pdfium or place the platform library next to the executable."
            ),
        })
}

/// Blocking implementation of page rendering.
fn rasterize_blocking(
    bytes: &[u8],
    scale: f32,
    progress: Option<Progress>,
) -> Result<Vec<PageImage>, ConvertError> {
    let pdfium = bind_pdfium()?;

    let document = pdfium
        .load_pdf_from_byte_slice(bytes, None)
        .map_err(|e| ConvertError::Rasterize {
            detail: format!("could not open document: {e:?}"),
        })?;

    let pages = document.pages();
    let total = pages.len() as usize;
    info!(total, scale, "PDF loaded for rasterisation");

    if let Some(ref cb) = progress {
        cb.on_start(total);
    }

    let mut results = Vec::with_capacity(total);

    for (idx, page) in pages.iter().enumerate() {
        // Viewport at `scale` times the page's native point size.
        let target_w = (page.width().value * scale).round().max(1.0) as i32;
        let target_h = (page.height().value * scale).round().max(1.0) as i32;
        let render_config = PdfRenderConfig::new()
            .set_target_width(target_w)
            .set_maximum_height(target_h);

        let bitmap =
            page.render_with_config(&render_config)
                .map_err(|e| ConvertError::Rasterize {
                    detail: format!("page {} failed to render: {e:?}", idx + 1),
                })?;

        // PDFs may have transparent or undefined backgrounds; flatten onto
        // opaque white before encoding.
        let rgba = bitmap.as_image().to_rgba8();
        let flat = DynamicImage::ImageRgb8(encode::composite_onto_white(&rgba)).to_rgba8();

        let png = encode::encode(&flat, ImageTarget::Png, 100).map_err(|e| {
            ConvertError::Rasterize {
                detail: format!("page {} failed to encode: {e}", idx + 1),
            }
        })?;

        debug!(
            page = idx + 1,
            width = flat.width(),
            height = flat.height(),
            "page rendered"
        );

        results.push(PageImage {
            index: idx + 1,
            bytes: png,
            filename: naming::page_filename(idx + 1),
        });

        // Monotone percentage of pages completed; 100 only after the last
        // page has been encoded.
        if let Some(ref cb) = progress {
            cb.on_progress(((idx + 1) * 100 / total) as u8);
        }
    }

    if let Some(ref cb) = progress {
        cb.on_complete(total);
    }

    info!(pages = results.len(), "rasterisation complete");
    Ok(results)
}
