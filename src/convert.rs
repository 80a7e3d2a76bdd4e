//! Conversion entry points, one per operation.
//!
//! Every operation is an async unit of work: the caller suspends while the
//! CPU-bound core runs on a blocking worker thread, then resumes with a
//! [`ConversionResult`] or an error. Operations never share state — each
//! returns its result by value and the caller threads it to whatever
//! consumes it next (display, [`crate::package::package`], download).
//!
//! Within one operation everything runs strictly sequentially; nothing is
//! cancellable mid-flight and no internal timeout is imposed.

use crate::config::{ConversionConfig, ImageTarget};
use crate::error::ConvertError;
use crate::naming;
use crate::output::ConversionResult;
use crate::pipeline::{assemble, decode, encode, enhance, render};
use crate::source::SourceFile;
use std::time::Instant;
use tracing::info;

/// Rasterise a PDF into one PNG per page.
///
/// Pages render sequentially at [`ConversionConfig::render_scale`]; progress
/// is reported to the configured observer as a 0–100 percentage. On any page
/// failure the whole conversion fails and no partial sequence is returned.
pub async fn pdf_to_images(
    file: &SourceFile,
    config: &ConversionConfig,
) -> Result<ConversionResult, ConvertError> {
    let start = Instant::now();
    info!(name = %file.name, size = file.len(), "PDF → images");

    let pages = render::rasterize(file, config).await?;

    info!(
        pages = pages.len(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "PDF → images complete"
    );
    Ok(ConversionResult::Pages {
        base_name: file.base_name(),
        pages,
    })
}

/// Compose an ordered list of images into a single multi-page PDF.
///
/// Each page is sized and oriented to its own source image. The document
/// name comes from the first image when there is exactly one input,
/// otherwise the generic base `images`.
pub async fn images_to_pdf(
    files: &[SourceFile],
    _config: &ConversionConfig,
) -> Result<ConversionResult, ConvertError> {
    let base = match files {
        [only] => only.base_name(),
        _ => "images".to_string(),
    };
    info!(images = files.len(), base = %base, "images → PDF");

    let bytes = assemble::assemble(files, &base).await?;

    Ok(ConversionResult::Single {
        bytes,
        filename: naming::pdf_filename(&base),
        media_type: "application/pdf",
    })
}

/// Re-encode a single image into the given target container, preserving
/// its pixel dimensions exactly.
pub async fn convert_image(
    file: &SourceFile,
    target: ImageTarget,
    config: &ConversionConfig,
) -> Result<ConversionResult, ConvertError> {
    info!(name = %file.name, target = target.mime_type(), "image format conversion");

    let input = file.clone();
    let quality = config.jpeg_quality;
    let bytes = tokio::task::spawn_blocking(move || {
        let surface = decode::decode(&input)?;
        encode::encode(&surface, target, quality)
    })
    .await
    .map_err(|e| ConvertError::Internal(format!("conversion task panicked: {e}")))??;

    Ok(ConversionResult::Single {
        bytes,
        filename: format!("{}.{}", file.base_name(), target.extension()),
        media_type: target.mime_type(),
    })
}

/// JPEG → PNG convenience wrapper around [`convert_image`].
pub async fn jpeg_to_png(
    file: &SourceFile,
    config: &ConversionConfig,
) -> Result<ConversionResult, ConvertError> {
    convert_image(file, ImageTarget::Png, config).await
}

/// PNG → JPEG convenience wrapper around [`convert_image`].
pub async fn png_to_jpeg(
    file: &SourceFile,
    config: &ConversionConfig,
) -> Result<ConversionResult, ConvertError> {
    convert_image(file, ImageTarget::Jpeg, config).await
}

/// Apply the fixed enhancement filter and return the result as PNG.
pub async fn enhance_image(
    file: &SourceFile,
    config: &ConversionConfig,
) -> Result<ConversionResult, ConvertError> {
    info!(name = %file.name, "image enhancement");

    let input = file.clone();
    let quality = config.jpeg_quality;
    let bytes = tokio::task::spawn_blocking(move || {
        let surface = decode::decode(&input)?;
        let enhanced = enhance::enhance(&surface);
        encode::encode(&enhanced, ImageTarget::Png, quality)
    })
    .await
    .map_err(|e| ConvertError::Internal(format!("enhancement task panicked: {e}")))??;

    Ok(ConversionResult::Single {
        bytes,
        filename: naming::enhanced_filename(&file.base_name()),
        media_type: "image/png",
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};

    fn png_file(name: &str, w: u32, h: u32) -> SourceFile {
        let img = RgbaImage::from_pixel(w, h, Rgba([180, 40, 70, 255]));
        let mut buf = Vec::new();
        img.write_to(&mut std::io::Cursor::new(&mut buf), image::ImageFormat::Png)
            .unwrap();
        SourceFile::new(name, "image/png", buf)
    }

    fn jpeg_file(name: &str, w: u32, h: u32) -> SourceFile {
        let img = RgbaImage::from_pixel(w, h, Rgba([80, 140, 70, 255]));
        let rgb = image::DynamicImage::ImageRgba8(img).to_rgb8();
        let mut buf = Vec::new();
        rgb.write_to(&mut std::io::Cursor::new(&mut buf), image::ImageFormat::Jpeg)
            .unwrap();
        SourceFile::new(name, "image/jpeg", buf)
    }

    #[tokio::test]
    async fn jpeg_to_png_preserves_dimensions_and_type() {
        let config = ConversionConfig::default();
        let result = jpeg_to_png(&jpeg_file("shot.jpg", 40, 25), &config)
            .await
            .unwrap();

        let ConversionResult::Single {
            bytes,
            filename,
            media_type,
        } = result
        else {
            panic!("expected single-blob result");
        };
        assert_eq!(filename, "shot.png");
        assert_eq!(media_type, "image/png");
        let back = image::load_from_memory(&bytes).unwrap();
        assert_eq!((back.width(), back.height()), (40, 25));
        assert_eq!(image::guess_format(&bytes).unwrap(), image::ImageFormat::Png);
    }

    #[tokio::test]
    async fn png_to_jpeg_names_output_with_jpg_extension() {
        let config = ConversionConfig::default();
        let result = png_to_jpeg(&png_file("logo.v1.png", 20, 20), &config)
            .await
            .unwrap();

        let ConversionResult::Single { filename, media_type, .. } = result else {
            panic!("expected single-blob result");
        };
        assert_eq!(filename, "logo.jpg");
        assert_eq!(media_type, "image/jpeg");
    }

    #[tokio::test]
    async fn enhance_outputs_png_with_enhanced_suffix() {
        let config = ConversionConfig::default();
        let result = enhance_image(&png_file("photo.png", 10, 10), &config)
            .await
            .unwrap();

        let ConversionResult::Single { bytes, filename, media_type } = result else {
            panic!("expected single-blob result");
        };
        assert_eq!(filename, "photo_enhanced.png");
        assert_eq!(media_type, "image/png");
        let back = image::load_from_memory(&bytes).unwrap();
        assert_eq!((back.width(), back.height()), (10, 10));
    }

    #[tokio::test]
    async fn enhance_is_deterministic_across_runs() {
        let config = ConversionConfig::default();
        let file = png_file("photo.png", 12, 12);
        let a = enhance_image(&file, &config).await.unwrap();
        let b = enhance_image(&file, &config).await.unwrap();
        let (ConversionResult::Single { bytes: ba, .. }, ConversionResult::Single { bytes: bb, .. }) =
            (a, b)
        else {
            panic!("expected single-blob results");
        };
        assert_eq!(ba, bb);
    }

    #[tokio::test]
    async fn conversion_of_garbage_fails_with_decode_error() {
        let config = ConversionConfig::default();
        let file = SourceFile::new("junk.jpg", "image/jpeg", vec![0, 1, 2]);
        let err = jpeg_to_png(&file, &config).await.unwrap_err();
        assert!(matches!(err, ConvertError::Decode { .. }));
    }

    #[tokio::test]
    async fn single_input_pdf_takes_its_base_name() {
        let config = ConversionConfig::default();
        let result = images_to_pdf(&[png_file("scan one.png", 8, 8)], &config)
            .await
            .unwrap();
        let ConversionResult::Single { filename, media_type, bytes } = result else {
            panic!("expected single-blob result");
        };
        assert_eq!(filename, "scan one.pdf");
        assert_eq!(media_type, "application/pdf");
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[tokio::test]
    async fn multi_input_pdf_is_named_images() {
        let config = ConversionConfig::default();
        let files = [png_file("a.png", 8, 8), png_file("b.png", 8, 8)];
        let result = images_to_pdf(&files, &config).await.unwrap();
        let ConversionResult::Single { filename, .. } = result else {
            panic!("expected single-blob result");
        };
        assert_eq!(filename, "images.pdf");
    }
}
