//! Configuration types for conversions.
//!
//! All tunable behaviour lives in [`ConversionConfig`], built via its
//! [`ConversionConfigBuilder`]. Keeping every knob in one struct makes it
//! trivial to share one config across all five operations and to see at a
//! glance why two runs produced different bytes.

use crate::error::ConvertError;
use crate::progress::Progress;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Configuration shared by all conversion operations.
///
/// # Example
/// ```rust
/// use docshift::ConversionConfig;
///
/// let config = ConversionConfig::builder()
///     .render_scale(2.0)
///     .jpeg_quality(95)
///     .build()
///     .unwrap();
/// ```
#[derive(Clone)]
pub struct ConversionConfig {
    /// Upscaling factor applied to each PDF page's native point size when
    /// rasterising. Range: 1.0–4.0. Default: 2.0.
    ///
    /// 2× trades memory for fidelity: text stays crisp when the resulting
    /// PNG is viewed at 1:1, while a typical A4 page stays under ~35 MB of
    /// transient RGBA. Values above 4.0 make multi-page documents exhaust
    /// memory long before they improve legibility.
    pub render_scale: f32,

    /// JPEG quality factor (1–100) applied on every lossy encode path.
    /// Default: 95.
    ///
    /// One baseline for the whole library keeps outputs comparable across
    /// operations. Lossless targets ignore it.
    pub jpeg_quality: u8,

    /// Observer for rasterisation progress (0–100). Default: none.
    pub progress: Option<Progress>,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            render_scale: 2.0,
            jpeg_quality: 95,
            progress: None,
        }
    }
}

impl fmt::Debug for ConversionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConversionConfig")
            .field("render_scale", &self.render_scale)
            .field("jpeg_quality", &self.jpeg_quality)
            .field("progress", &self.progress.as_ref().map(|_| "<dyn ProgressObserver>"))
            .finish()
    }
}

impl ConversionConfig {
    /// Create a new builder for `ConversionConfig`.
    pub fn builder() -> ConversionConfigBuilder {
        ConversionConfigBuilder {
            config: Self::default(),
        }
    }
}

/// Builder for [`ConversionConfig`].
#[derive(Debug)]
pub struct ConversionConfigBuilder {
    config: ConversionConfig,
}

impl ConversionConfigBuilder {
    pub fn render_scale(mut self, scale: f32) -> Self {
        self.config.render_scale = scale.clamp(1.0, 4.0);
        self
    }

    pub fn jpeg_quality(mut self, quality: u8) -> Self {
        self.config.jpeg_quality = quality.clamp(1, 100);
        self
    }

    pub fn progress(mut self, observer: Progress) -> Self {
        self.config.progress = Some(observer);
        self
    }

    /// Build the configuration, validating constraints.
    pub fn build(self) -> Result<ConversionConfig, ConvertError> {
        let c = &self.config;
        if !(1.0..=4.0).contains(&c.render_scale) || !c.render_scale.is_finite() {
            return Err(ConvertError::InvalidConfig(format!(
                "render scale must be 1.0–4.0, got {}",
                c.render_scale
            )));
        }
        if c.jpeg_quality == 0 || c.jpeg_quality > 100 {
            return Err(ConvertError::InvalidConfig(format!(
                "JPEG quality must be 1–100, got {}",
                c.jpeg_quality
            )));
        }
        Ok(self.config)
    }
}

// ── Encoding target ──────────────────────────────────────────────────────

/// Output image container for the raster encoder.
///
/// Carries the format-specific policy: MIME-equivalent type, filename
/// extension, and whether the container supports an alpha channel. Formats
/// without alpha are composited onto opaque white before encoding —
/// transparent pixels become white, never black or undefined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImageTarget {
    /// Lossless; preserves alpha. The quality factor is ignored.
    Png,
    /// Lossy; no alpha. Encoded at [`ConversionConfig::jpeg_quality`].
    Jpeg,
}

impl ImageTarget {
    pub fn mime_type(self) -> &'static str {
        match self {
            ImageTarget::Png => "image/png",
            ImageTarget::Jpeg => "image/jpeg",
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            ImageTarget::Png => "png",
            ImageTarget::Jpeg => "jpg",
        }
    }

    pub fn supports_alpha(self) -> bool {
        matches!(self, ImageTarget::Png)
    }
}
