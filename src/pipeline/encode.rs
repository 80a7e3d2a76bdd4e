//! Raster encoding: RGBA surface → PNG or JPEG bytes.
//!
//! ## Why composite onto white for JPEG?
//!
//! JPEG has no alpha channel. Dropping the channel outright would leave
//! whatever RGB values sat under transparent pixels — often black, always
//! undefined from the user's point of view. Compositing over opaque white
//! first gives the behaviour people expect from a paper-like document:
//! transparent regions come out white.

use crate::config::ImageTarget;
use crate::error::ConvertError;
use image::codecs::jpeg::JpegEncoder;
use image::{Rgb, RgbImage, RgbaImage};
use std::io::Cursor;
use tracing::debug;

/// Encode a surface into the target container, preserving its pixel
/// dimensions exactly. `quality` applies to lossy targets only.
pub fn encode(
    surface: &RgbaImage,
    target: ImageTarget,
    quality: u8,
) -> Result<Vec<u8>, ConvertError> {
    let bytes = match target {
        ImageTarget::Png => {
            let mut buf = Vec::new();
            surface
                .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
                .map_err(|err| ConvertError::Encode {
                    target: target.mime_type(),
                    detail: err.to_string(),
                })?;
            buf
        }
        ImageTarget::Jpeg => {
            let flattened = composite_onto_white(surface);
            let mut buf = Vec::new();
            let encoder = JpegEncoder::new_with_quality(&mut buf, quality);
            flattened
                .write_with_encoder(encoder)
                .map_err(|err| ConvertError::Encode {
                    target: target.mime_type(),
                    detail: err.to_string(),
                })?;
            buf
        }
    };

    if bytes.is_empty() {
        return Err(ConvertError::Encode {
            target: target.mime_type(),
            detail: "encoder returned no bytes".into(),
        });
    }

    debug!(target = target.mime_type(), len = bytes.len(), "surface encoded");
    Ok(bytes)
}

/// Alpha-blend the surface over an opaque white background.
pub fn composite_onto_white(surface: &RgbaImage) -> RgbImage {
    RgbImage::from_fn(surface.width(), surface.height(), |x, y| {
        let image::Rgba([r, g, b, a]) = *surface.get_pixel(x, y);
        let blend = |channel: u8| -> u8 {
            let c = channel as u16;
            let a = a as u16;
            ((c * a + 255 * (255 - a)) / 255) as u8
        };
        Rgb([blend(r), blend(g), blend(b)])
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn png_round_trip_preserves_geometry() {
        let surface = RgbaImage::from_pixel(31, 7, Rgba([200, 100, 50, 255]));
        let bytes = encode(&surface, ImageTarget::Png, 95).unwrap();
        let back = image::load_from_memory(&bytes).unwrap();
        assert_eq!(back.width(), 31);
        assert_eq!(back.height(), 7);
    }

    #[test]
    fn jpeg_preserves_geometry() {
        let surface = RgbaImage::from_pixel(64, 48, Rgba([5, 5, 5, 255]));
        let bytes = encode(&surface, ImageTarget::Jpeg, 95).unwrap();
        let back = image::load_from_memory(&bytes).unwrap();
        assert_eq!(back.width(), 64);
        assert_eq!(back.height(), 48);
    }

    #[test]
    fn transparent_pixels_become_white_not_black() {
        // Fully transparent black: a naive alpha drop would yield black.
        let surface = RgbaImage::from_pixel(8, 8, Rgba([0, 0, 0, 0]));
        let flat = composite_onto_white(&surface);
        assert_eq!(*flat.get_pixel(0, 0), Rgb([255, 255, 255]));

        // And through the full JPEG encode path: decoded pixels stay near
        // white (JPEG is lossy, allow a small tolerance).
        let bytes = encode(&surface, ImageTarget::Jpeg, 95).unwrap();
        let back = image::load_from_memory(&bytes).unwrap().to_rgb8();
        let Rgb([r, g, b]) = *back.get_pixel(4, 4);
        assert!(r > 250 && g > 250 && b > 250, "got {r},{g},{b}");
    }

    #[test]
    fn half_transparent_red_blends_toward_white() {
        let surface = RgbaImage::from_pixel(2, 2, Rgba([255, 0, 0, 128]));
        let flat = composite_onto_white(&surface);
        let Rgb([r, g, b]) = *flat.get_pixel(0, 0);
        assert_eq!(r, 255);
        // 0 * 128/255 + 255 * 127/255 = 127
        assert_eq!(g, 127);
        assert_eq!(b, 127);
    }

    #[test]
    fn opaque_pixels_are_untouched_by_compositing() {
        let surface = RgbaImage::from_pixel(3, 3, Rgba([12, 34, 56, 255]));
        let flat = composite_onto_white(&surface);
        assert_eq!(*flat.get_pixel(1, 1), Rgb([12, 34, 56]));
    }
}
