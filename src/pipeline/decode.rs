//! Image decoding: raw file bytes → RGBA raster surface.
//!
//! Decodability is delegated to the `image` crate (PNG, JPEG, GIF, BMP,
//! WEBP are enabled). The surface is always RGBA8, so downstream stages can
//! rely on `buffer.len() == width * height * 4` without re-checking the
//! source colour model.

use crate::error::ConvertError;
use crate::source::SourceFile;
use image::RgbaImage;
use tracing::debug;

/// Decode a source file into an RGBA surface at its intrinsic dimensions.
pub fn decode(file: &SourceFile) -> Result<RgbaImage, ConvertError> {
    let img = image::load_from_memory(&file.bytes).map_err(|err| ConvertError::Decode {
        name: file.name.clone(),
        detail: err.to_string(),
    })?;

    let surface = img.to_rgba8();
    debug!(
        name = %file.name,
        width = surface.width(),
        height = surface.height(),
        "image decoded"
    );
    Ok(surface)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn png_bytes(w: u32, h: u32) -> Vec<u8> {
        let img = RgbaImage::from_pixel(w, h, image::Rgba([10, 20, 30, 255]));
        let mut buf = Vec::new();
        img.write_to(&mut std::io::Cursor::new(&mut buf), image::ImageFormat::Png)
            .unwrap();
        buf
    }

    #[test]
    fn decode_preserves_intrinsic_dimensions() {
        let file = SourceFile::new("t.png", "image/png", png_bytes(17, 9));
        let surface = decode(&file).unwrap();
        assert_eq!(surface.width(), 17);
        assert_eq!(surface.height(), 9);
        // RGBA invariant: buffer length = w * h * 4
        assert_eq!(surface.as_raw().len(), 17 * 9 * 4);
    }

    #[test]
    fn decode_rejects_garbage() {
        let file = SourceFile::new("broken.png", "image/png", vec![0xde, 0xad, 0xbe, 0xef]);
        let err = decode(&file).unwrap_err();
        assert!(matches!(err, ConvertError::Decode { .. }));
        assert!(err.to_string().contains("broken.png"));
    }

    #[test]
    fn decode_rejects_empty_input() {
        let file = SourceFile::new("empty.png", "image/png", Vec::new());
        assert!(matches!(
            decode(&file),
            Err(ConvertError::Decode { .. })
        ));
    }
}
