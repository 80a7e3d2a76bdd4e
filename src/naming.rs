//! Output-filename conventions and sanitisation.
//!
//! Every name the library produces is derived from the primary source
//! filename with filesystem-unsafe characters replaced, so a host can hand
//! the result straight to a download/save dialog on any platform. The rules
//! are deterministic: same input name, same output name.
//!
//! Conventions:
//! * rasterised PDF pages      → `page_<1-based-index>.png`
//! * images→PDF                → `<base>.pdf` (multi-input base: `images`)
//! * format conversions        → `<base>.png` / `<base>.jpg`
//! * enhancement               → `<base>_enhanced.png`
//! * multi-file archive        → `<base>_images.zip`

use once_cell::sync::Lazy;
use regex::Regex;

/// Characters that are unsafe in filenames on at least one mainstream
/// filesystem, plus ASCII control bytes.
static UNSAFE_CHARS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"[<>:"/\\|?*\x00-\x1f]"#).expect("valid regex"));

/// Fallback base when a name reduces to nothing (e.g. `".profile"`).
const DEFAULT_BASE: &str = "converted";

/// Replace each filesystem-unsafe character with `_`, one-for-one.
pub fn sanitize(name: &str) -> String {
    UNSAFE_CHARS.replace_all(name, "_").into_owned()
}

/// Sanitised portion of `name` before its first `.`.
pub fn base_name(name: &str) -> String {
    let stem = name.split('.').next().unwrap_or("");
    if stem.is_empty() {
        DEFAULT_BASE.to_string()
    } else {
        sanitize(stem)
    }
}

/// Name for one rasterised PDF page. `index` is 1-based.
pub fn page_filename(index: usize) -> String {
    format!("page_{index}.png")
}

pub fn pdf_filename(base: &str) -> String {
    format!("{base}.pdf")
}

pub fn enhanced_filename(base: &str) -> String {
    format!("{base}_enhanced.png")
}

pub fn archive_filename(base: &str) -> String {
    format!("{base}_images.zip")
}
