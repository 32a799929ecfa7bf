//! Border stage.
//!
//! Frames the image with a paper-white margin. Offset policy is per-axis:
//! `x_off = trunc(fraction * width)`, `y_off = trunc(fraction * height)`,
//! so the margin keeps the image's own proportions. (A single max-axis
//! offset also exists in the lineage; this implementation commits to the
//! per-axis rule.)

use super::helpers::paste;
use crate::models::BorderStage;
use crate::raster::Raster;

/// Background tone for the margin; inverts to solid black on the negative.
pub(crate) const BACKGROUND: u8 = 255;

/// Add the border. Fraction 0 and a disabled stage are both the identity.
/// The fraction range is guaranteed by `PipelineConfig::validate`.
pub fn add_border(raster: Raster, stage: &BorderStage) -> Raster {
    match *stage {
        BorderStage::Disabled => raster,
        BorderStage::Enabled { fraction } => {
            if fraction == 0.0 {
                return raster;
            }
            let x_off = (fraction * raster.width() as f64) as u32;
            let y_off = (fraction * raster.height() as f64) as u32;
            if x_off == 0 && y_off == 0 {
                return raster;
            }

            let outer_width = raster.width() + 2 * x_off;
            let outer_height = raster.height() + 2 * y_off;
            let mut outer = Raster::filled(outer_width, outer_height, BACKGROUND);
            paste(&raster, &mut outer, x_off, y_off);
            outer
        }
    }
}
