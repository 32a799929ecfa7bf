//! Negprint Core Library
//!
//! Tonal pipeline for preparing a photographic negative for analog contact
//! printing: tone reshaping, self-blending, black/white remapping, border
//! and paper-size geometry, and the mirror+invert step that produces the
//! printable negative.

pub mod decoders;
pub mod error;
pub mod exporters;
pub mod filters;
pub mod models;
pub mod pipeline;
pub mod presets;
pub mod raster;

// Re-export commonly used types
pub use error::{Error, Result};
pub use filters::{Filters, GaussianFilters};
pub use models::{
    BlendMode, BlendStage, BorderStage, EqualizeStage, Orientation, PaperFitStage, PaperSize,
    PipelineConfig, RemapStage, SharpenStage, ToneCurveStage,
};
pub use raster::Raster;
