//! Gamma tone curve stage.
//!
//! Reshapes the tonal response with `round(((s/255)^(1/gamma)) * 255)`,
//! precomputed as a 256-entry lookup table so the transform stays O(pixels)
//! with O(1) per-pixel cost.

use super::helpers::apply_lut;
use crate::models::ToneCurveStage;
use crate::raster::Raster;

/// Apply the gamma curve. `gamma == 1.0` is the identity and skips the pass
/// entirely. Gamma validity is checked by `PipelineConfig::validate`.
pub fn apply_tone_curve(raster: Raster, stage: &ToneCurveStage) -> Raster {
    match *stage {
        ToneCurveStage::Disabled => raster,
        ToneCurveStage::Enabled { gamma } => {
            if gamma == 1.0 {
                return raster;
            }
            let lut = build_lut(gamma);
            let mut raster = raster;
            apply_lut(&mut raster, &lut);
            raster
        }
    }
}

/// Build the 256-entry gamma lookup table.
pub fn build_lut(gamma: f64) -> [u8; 256] {
    let inv_gamma = 1.0 / gamma;
    let mut lut = [0u8; 256];
    for (i, entry) in lut.iter_mut().enumerate() {
        let normalized = i as f64 / 255.0;
        let corrected = (normalized.powf(inv_gamma) * 255.0).round();
        *entry = corrected.clamp(0.0, 255.0) as u8;
    }
    lut
}
