//! String parsing for CLI values.

use negprint_core::{Error, PaperSize, Result};

/// Parse the `--resize` value.
///
/// Supported values:
/// - "a3" | "a4" | "a5" | "a6": ISO paper size
/// - "no": keep the pixel dimensions (paper-fit disabled)
pub fn parse_paper_size(value: &str) -> Result<Option<PaperSize>> {
    match value.to_lowercase().as_str() {
        "no" | "none" => Ok(None),
        "a3" => Ok(Some(PaperSize::A3)),
        "a4" => Ok(Some(PaperSize::A4)),
        "a5" => Ok(Some(PaperSize::A5)),
        "a6" => Ok(Some(PaperSize::A6)),
        other => Err(Error::InvalidParameter {
            field: "resize",
            reason: format!(
                "unknown paper size '{}'. Valid options: a3, a4, a5, a6, no",
                other
            ),
        }),
    }
}
