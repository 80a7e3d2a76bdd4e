//! # docshift
//!
//! In-memory document and image conversion: PDF ↔ images, JPEG ↔ PNG, and a
//! fixed photo enhancement filter.
//!
//! ## Why this crate?
//!
//! Hosts that accept user uploads — desktop shells, web backends, batch
//! tools — keep needing the same small set of conversions, and keep needing
//! them without touching the filesystem or the network. This crate takes
//! raw bytes in and hands download-ready bytes back: every operation is a
//! pure transformation on in-memory buffers, with deterministic output
//! naming the host can present as-is.
//!
//! ## Pipeline Overview
//!
//! ```text
//! SourceFile (name + MIME + bytes)
//!  │
//!  ├─ PDF → images   rasterise pages via pdfium (CPU-bound, spawn_blocking)
//!  ├─ images → PDF   one page per image, sized to the image, via printpdf
//!  ├─ JPEG ↔ PNG     decode → (flatten onto white for JPEG) → re-encode
//!  ├─ enhance        brightness ×1.1 → contrast ×1.1 → saturation ×1.1
//!  └─ package        single blob, or ZIP when a conversion yields many files
//! ```
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use docshift::{package, pdf_to_images, ConversionConfig, SourceFile};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let bytes = std::fs::read("report.pdf")?;
//!     let file = SourceFile::new("report.pdf", "application/pdf", bytes);
//!
//!     let config = ConversionConfig::default();
//!     let result = pdf_to_images(&file, &config).await?;
//!
//!     // One page → page_1.png; many pages → report_images.zip.
//!     let download = package(result)?;
//!     std::fs::write(&download.filename, &download.bytes)?;
//!     println!("{} ({})", download.filename, download.media_type);
//!     Ok(())
//! }
//! ```
//!
//! PDF rasterisation needs a pdfium library at runtime (next to the
//! executable or installed system-wide); probe with
//! [`pdfium_available`] before offering the operation. Everything else is
//! pure Rust.

// ── Modules ──────────────────────────────────────────────────────────────

pub mod config;
pub mod convert;
pub mod error;
pub mod naming;
pub mod output;
pub mod package;
pub mod pipeline;
pub mod progress;
pub mod source;

// ── Re-exports ───────────────────────────────────────────────────────────

pub use config::{ConversionConfig, ConversionConfigBuilder, ImageTarget};
pub use convert::{
    convert_image, enhance_image, images_to_pdf, jpeg_to_png, pdf_to_images, png_to_jpeg,
};
pub use error::ConvertError;
pub use output::{ConversionResult, PackagedFile, PageImage};
pub use package::package;
pub use pipeline::render::pdfium_available;
pub use progress::{NoopProgress, Progress, ProgressObserver};
pub use source::SourceFile;
