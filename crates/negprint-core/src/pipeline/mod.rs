//! Tonal pipeline for negative preparation.
//!
//! This module is organized into one submodule per stage:
//! - `equalize`: histogram equalization
//! - `blend`: auto-blend of the image with a blurred copy of itself
//! - `tone_curve`: gamma correction through a precomputed lookup table
//! - `remap`: black/white point compression
//! - `border`: paper-white frame around the image
//! - `paper_fit`: padding onto an ISO paper size at print resolution
//! - `negative`: the unconditional mirror + invert step
//! - `helpers`: LUT application, histogram, and paste utilities
//!
//! `run` executes the stages in a fixed order. A disabled stage collapses to
//! the identity (still a transition, never an error), and the raster buffer
//! invariant is re-checked after every stage.

mod blend;
mod border;
mod equalize;
mod helpers;
mod negative;
mod paper_fit;
mod remap;
mod tone_curve;


// Re-export public items from submodules
pub use blend::{apply_blend, blend_sample};
pub use border::add_border;
pub use equalize::equalize_histogram;
pub use negative::to_negative;
pub use paper_fit::fit_to_paper;
pub use remap::remap_levels;
pub use tone_curve::{apply_tone_curve, build_lut as build_gamma_lut};

use crate::error::{Error, Result};
use crate::filters::Filters;
use crate::models::{PipelineConfig, SharpenStage};
use crate::raster::Raster;

/// Execute the full pipeline on one raster.
///
/// Stage order: equalize → blend → tone curve → remap → border → paper fit →
/// negative → sharpen. The whole configuration is validated first, so a bad
/// parameter never produces partial output.
pub fn run(raster: Raster, config: &PipelineConfig, filters: &dyn Filters) -> Result<Raster> {
    config.validate()?;

    let mut current = raster;
    current = checked("equalize", equalize_histogram(current, &config.equalize))?;
    current = checked("blend", apply_blend(current, &config.blend, filters)?)?;
    current = checked("tone-curve", apply_tone_curve(current, &config.tone_curve))?;
    current = checked("remap", remap_levels(current, &config.remap))?;
    current = checked("border", add_border(current, &config.border))?;
    current = checked("paper-fit", fit_to_paper(current, &config.paper_fit)?)?;
    current = checked("negative", to_negative(current))?;

    current = match config.sharpen {
        SharpenStage::Disabled => current,
        SharpenStage::Enabled {
            radius,
            amount,
            threshold,
        } => {
            let sharpened = filters.sharpen(&current, radius, amount, threshold);
            if sharpened.width() != current.width() || sharpened.height() != current.height() {
                return Err(Error::InternalInvariant(format!(
                    "sharpen collaborator changed dimensions: {}x{} -> {}x{}",
                    current.width(),
                    current.height(),
                    sharpened.width(),
                    sharpened.height()
                )));
            }
            checked("sharpen", sharpened)?
        }
    };

    Ok(current)
}

/// Verify the raster invariant after a stage and log the transition.
fn checked(stage: &'static str, raster: Raster) -> Result<Raster> {
    if !raster.holds_invariant() {
        return Err(Error::InternalInvariant(format!(
            "stage `{}` produced a raster whose buffer does not match {}x{}",
            stage,
            raster.width(),
            raster.height()
        )));
    }
    tracing::debug!(
        stage,
        width = raster.width(),
        height = raster.height(),
        "stage complete"
    );
    Ok(raster)
}
