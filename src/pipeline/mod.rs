//! Pipeline stages for document/image conversion.
//!
//! Each submodule implements exactly one transformation step. Keeping
//! stages separate makes each independently testable and lets us swap an
//! implementation (e.g. the rendering backend) without touching the others.
//!
//! ## Data Flow
//!
//! ```text
//! SourceFile ──▶ decode ──▶ (render | assemble | enhance) ──▶ encode
//!  (bytes)      (RGBA)       (pdfium)  (printpdf)  (pixels)   (PNG/JPEG)
//! ```
//!
//! 1. [`decode`]   — raw bytes → RGBA raster surface
//! 2. [`render`]   — PDF → one PNG per page; runs in `spawn_blocking`
//!    because pdfium is not async-safe
//! 3. [`assemble`] — ordered images → one multi-page PDF, each page sized
//!    to its source image
//! 4. [`enhance`]  — fixed per-pixel brightness/contrast/saturation pass
//! 5. [`encode`]   — RGBA surface → PNG or white-composited JPEG

pub mod assemble;
pub mod decode;
pub mod encode;
pub mod enhance;
pub mod render;
