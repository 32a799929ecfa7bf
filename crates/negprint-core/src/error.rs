//! Error taxonomy for the pipeline.
//!
//! Three failure classes:
//! - `InvalidParameter`: rejected configuration, raised before any pixel work
//! - `Io` / `Image`: load/save failures, surfaced unchanged from the adapters
//! - `InternalInvariant`: a stage produced a malformed raster, fatal defect

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// A configuration value is out of range or unknown. Carries the name of
    /// the offending field so the caller can point at it.
    #[error("invalid parameter `{field}`: {reason}")]
    InvalidParameter { field: &'static str, reason: String },

    /// File could not be read or written.
    #[error("i/o failure: {0}")]
    Io(#[from] std::io::Error),

    /// Image could not be decoded or encoded.
    #[error("image codec failure: {0}")]
    Image(#[from] image::ImageError),

    /// A stage broke the raster buffer invariant. Never corrected silently.
    #[error("internal invariant violated: {0}")]
    InternalInvariant(String),
}

impl Error {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Error::InvalidParameter {
            field,
            reason: reason.into(),
        }
    }
}
