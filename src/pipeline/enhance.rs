//! Fixed image enhancement: brightness, then contrast, then saturation,
//! each ×1.1, applied per pixel.
//!
//! The adjustment is an explicit per-channel transform with a documented
//! operation order, so the numeric behaviour is reproducible anywhere — not
//! tied to any platform compositing filter. Same input, same output, every
//! run.

use image::{Rgba, RgbaImage};
use tracing::debug;

/// Multiplier shared by all three stages.
const FACTOR: f32 = 1.1;

/// Mid-point pivot for the contrast stage, on the 0–255 scale.
const CONTRAST_PIVOT: f32 = 127.5;

// Rec. 709 luma weights, used to compute the grey axis for saturation.
const LUMA_R: f32 = 0.2126;
const LUMA_G: f32 = 0.7152;
const LUMA_B: f32 = 0.0722;

/// Apply the fixed enhancement to a surface, preserving its dimensions.
/// Alpha is never modified.
pub fn enhance(surface: &RgbaImage) -> RgbaImage {
    debug!(
        width = surface.width(),
        height = surface.height(),
        "enhancing surface"
    );

    RgbaImage::from_fn(surface.width(), surface.height(), |x, y| {
        let Rgba([r, g, b, a]) = *surface.get_pixel(x, y);
        let (r, g, b) = enhance_pixel(r as f32, g as f32, b as f32);
        Rgba([r, g, b, a])
    })
}

/// The three stages in order, clamping to [0, 255] between each.
fn enhance_pixel(r: f32, g: f32, b: f32) -> (u8, u8, u8) {
    // 1. Brightness: multiply each channel.
    let (r, g, b) = (
        clamp(r * FACTOR),
        clamp(g * FACTOR),
        clamp(b * FACTOR),
    );

    // 2. Contrast: spread around the mid-point.
    let contrast = |c: f32| clamp((c - CONTRAST_PIVOT) * FACTOR + CONTRAST_PIVOT);
    let (r, g, b) = (contrast(r), contrast(g), contrast(b));

    // 3. Saturation: push each channel away from the pixel's luma.
    let luma = LUMA_R * r + LUMA_G * g + LUMA_B * b;
    let saturate = |c: f32| clamp(luma + (c - luma) * FACTOR);
    let (r, g, b) = (saturate(r), saturate(g), saturate(b));

    (r as u8, g as u8, b as u8)
}

fn clamp(c: f32) -> f32 {
    c.clamp(0.0, 255.0)
}
