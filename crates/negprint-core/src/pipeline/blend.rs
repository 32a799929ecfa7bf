//! Blend / auto-blend stage.
//!
//! Composites the raster with a copy of itself, optionally Gaussian-blurred
//! first. The blur comes from the filter collaborator; the compositing
//! operators live here and work in the integer domain so repeated runs are
//! bit-identical.

use rayon::prelude::*;

use super::helpers::{CHUNK_SIZE, PARALLEL_THRESHOLD};
use crate::error::{Error, Result};
use crate::filters::Filters;
use crate::models::{BlendMode, BlendStage};
use crate::raster::Raster;

/// Run the blend stage. Mode `None` and a disabled stage are both the
/// identity; the secondary raster is only produced when a real operator is
/// selected.
pub fn apply_blend(raster: Raster, stage: &BlendStage, filters: &dyn Filters) -> Result<Raster> {
    match *stage {
        BlendStage::Disabled => Ok(raster),
        BlendStage::Enabled {
            mode: BlendMode::None,
            ..
        } => Ok(raster),
        BlendStage::Enabled { mode, blur_radius } => {
            let secondary = if blur_radius > 0.0 {
                filters.blur(&raster, blur_radius)
            } else {
                raster.clone()
            };
            if secondary.width() != raster.width() || secondary.height() != raster.height() {
                return Err(Error::InternalInvariant(format!(
                    "blur collaborator changed dimensions: {}x{} -> {}x{}",
                    raster.width(),
                    raster.height(),
                    secondary.width(),
                    secondary.height()
                )));
            }

            let mut primary = raster;
            combine(primary.data_mut(), secondary.data(), mode);
            Ok(primary)
        }
    }
}

/// Combine `a` (in place) with `b` under the operator.
///
/// Uses parallel processing for large images.
fn combine(a: &mut [u8], b: &[u8], mode: BlendMode) {
    if a.len() >= PARALLEL_THRESHOLD {
        a.par_chunks_mut(CHUNK_SIZE)
            .zip(b.par_chunks(CHUNK_SIZE))
            .for_each(|(chunk_a, chunk_b)| {
                for (sample, &other) in chunk_a.iter_mut().zip(chunk_b) {
                    *sample = blend_sample(mode, *sample, other);
                }
            });
    } else {
        for (sample, &other) in a.iter_mut().zip(b) {
            *sample = blend_sample(mode, *sample, other);
        }
    }
}

/// Pixel-wise binary operator for one sample pair.
pub fn blend_sample(mode: BlendMode, a: u8, b: u8) -> u8 {
    match mode {
        BlendMode::None => a,
        BlendMode::Overlay => overlay(a as i32, b as i32),
        BlendMode::Screen => screen(a as i32, b as i32),
        BlendMode::Multiply => multiply(a as i32, b as i32),
        BlendMode::SoftLight => soft_light(a as i32, b as i32),
        // Hard-light is overlay with the operands swapped
        BlendMode::HardLight => overlay(b as i32, a as i32),
    }
}

fn overlay(a: i32, b: i32) -> u8 {
    let value = if a < 128 {
        2 * a * b / 255
    } else {
        255 - 2 * (255 - a) * (255 - b) / 255
    };
    value.clamp(0, 255) as u8
}

fn screen(a: i32, b: i32) -> u8 {
    (255 - (255 - a) * (255 - b) / 255).clamp(0, 255) as u8
}

fn multiply(a: i32, b: i32) -> u8 {
    (a * b / 255).clamp(0, 255) as u8
}

/// Pegtop soft-light: `(1 - 2b)a^2 + 2ab` in unit terms, evaluated as
/// `((255 - 2b)a^2/255 + 2ab)/255` so the endpoints stay exact.
fn soft_light(a: i32, b: i32) -> u8 {
    let value = ((255 - 2 * b) * a * a / 255 + 2 * a * b) / 255;
    value.clamp(0, 255) as u8
}
