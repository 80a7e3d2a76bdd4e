//! Progress-observer trait for long-running conversions.
//!
//! Inject an `Arc<dyn ProgressObserver>` via
//! [`crate::config::ConversionConfigBuilder::progress`] to receive a
//! percentage as PDF pages are rasterised. The callback approach is the
//! least-invasive integration point: hosts can forward the value to a
//! progress bar, a channel, or a log line without the library knowing how
//! the host communicates.
//!
//! The percentage is monotone non-decreasing within one conversion and
//! reaches 100 only after the final page has been encoded. Short operations
//! (format conversion, enhancement) report nothing.

use std::sync::Arc;

/// Receives progress events from the conversion pipeline.
///
/// Implementations must be `Send + Sync`: the pipeline invokes them from a
/// blocking worker thread. All methods default to no-ops so callers only
/// override what they care about.
pub trait ProgressObserver: Send + Sync {
    /// Called once before any page is rendered.
    fn on_start(&self, total_pages: usize) {
        let _ = total_pages;
    }

    /// Called after each page is encoded, with the overall percentage
    /// (0–100) of pages completed.
    fn on_progress(&self, percent: u8) {
        let _ = percent;
    }

    /// Called once after the last page has been encoded.
    fn on_complete(&self, total_pages: usize) {
        let _ = total_pages;
    }
}

/// A no-op implementation for callers that don't need progress events.
pub struct NoopProgress;

impl ProgressObserver for NoopProgress {}

/// Convenience alias matching the type stored in
/// [`crate::config::ConversionConfig`].
pub type Progress = Arc<dyn ProgressObserver>;
