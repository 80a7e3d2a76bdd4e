//! PDF assembly: compose an ordered list of images into one multi-page PDF.
//!
//! Built on `printpdf` 0.8, whose data-oriented API constructs `PdfPage`
//! structs of `Vec<Op>` operation lists and serialises them with
//! `PdfDocument::save()`.
//!
//! Geometry policy: each page is sized to its own source image, one PDF
//! point per pixel, and the image is placed at the origin at full page
//! size. No scaling, cropping, padding, or letterboxing — a 1200×800 photo
//! becomes a 1200×800 pt landscape page, and the next image on the list
//! gets its own independently sized page.

use crate::error::ConvertError;
use crate::pipeline::{decode, encode};
use crate::source::SourceFile;
use printpdf::{
    Mm, Op, PdfDocument, PdfPage, PdfSaveOptions, PdfWarnMsg, Pt, RawImage, RawImageData,
    RawImageFormat, XObjectTransform,
};
use tracing::{debug, info};

const MM_PER_PT: f32 = 25.4 / 72.0;

/// Build a single PDF containing one page per input image, in input order.
///
/// The whole operation fails if any image cannot be decoded; no partial
/// document is returned.
pub async fn assemble(files: &[SourceFile], title: &str) -> Result<Vec<u8>, ConvertError> {
    let files = files.to_vec();
    let title = title.to_string();

    tokio::task::spawn_blocking(move || assemble_blocking(&files, &title))
        .await
        .map_err(|e| ConvertError::Internal(format!("assembly task panicked: {e}")))?
}

/// Blocking implementation of document assembly.
fn assemble_blocking(files: &[SourceFile], title: &str) -> Result<Vec<u8>, ConvertError> {
    if files.is_empty() {
        return Err(ConvertError::Assembly {
            detail: "no input images".into(),
        });
    }

    info!(images = files.len(), title, "assembling PDF");

    let mut doc = PdfDocument::new(title);
    let mut pages: Vec<PdfPage> = Vec::with_capacity(files.len());

    for file in files {
        let surface = decode::decode(file).map_err(|e| ConvertError::Assembly {
            detail: e.to_string(),
        })?;
        let (w_px, h_px) = (surface.width(), surface.height());

        let orientation = if w_px > h_px { "landscape" } else { "portrait" };
        debug!(name = %file.name, w_px, h_px, orientation, "placing page");

        // Alpha does not survive into the PDF; flatten onto white so
        // transparent regions come out paper-coloured rather than black.
        let rgb = encode::composite_onto_white(&surface);
        let raw = RawImage {
            pixels: RawImageData::U8(rgb.into_raw()),
            width: w_px as usize,
            height: h_px as usize,
            data_format: RawImageFormat::RGB8,
            tag: Vec::new(),
        };
        let xobject_id = doc.add_image(&raw);

        // One PDF point per source pixel: the stored page dimensions equal
        // the decoded pixel dimensions. At dpi 72 the image's native size
        // is exactly the page size, so scale 1.0 at the origin fills it.
        let ops = vec![Op::UseXobject {
            id: xobject_id,
            transform: XObjectTransform {
                translate_x: Some(Pt(0.0)),
                translate_y: Some(Pt(0.0)),
                scale_x: Some(1.0),
                scale_y: Some(1.0),
                dpi: Some(72.0),
                rotate: None,
            },
        }];

        pages.push(PdfPage::new(
            Mm(w_px as f32 * MM_PER_PT),
            Mm(h_px as f32 * MM_PER_PT),
            ops,
        ));
    }

    doc.with_pages(pages);

    let mut warnings: Vec<PdfWarnMsg> = Vec::new();
    let output = doc.save(&PdfSaveOptions::default(), &mut warnings);

    if output.is_empty() {
        return Err(ConvertError::Assembly {
            detail: "PDF serialisation produced no bytes".into(),
        });
    }

    info!(bytes = output.len(), "PDF assembled");
    Ok(output)
}
