//! Black/white remap stage.
//!
//! Linearly compresses the full tonal range into [black, white] before
//! inversion, so the printed negative never asks the paper for tones it
//! cannot hold.

use super::helpers::apply_lut;
use crate::models::RemapStage;
use crate::raster::Raster;

/// Remap every sample with `s -> black + (s/255)(white - black)`.
/// `black < white` is guaranteed by `PipelineConfig::validate`.
pub fn remap_levels(raster: Raster, stage: &RemapStage) -> Raster {
    match *stage {
        RemapStage::Disabled => raster,
        RemapStage::Enabled { black, white } => {
            if black == 0 && white == 255 {
                return raster;
            }
            let lut = build_lut(black, white);
            let mut raster = raster;
            apply_lut(&mut raster, &lut);
            raster
        }
    }
}

fn build_lut(black: u8, white: u8) -> [u8; 256] {
    let span = white as f64 - black as f64;
    let mut lut = [0u8; 256];
    for (i, entry) in lut.iter_mut().enumerate() {
        let mapped = black as f64 + (i as f64 / 255.0) * span;
        *entry = mapped.round().clamp(0.0, 255.0) as u8;
    }
    lut
}
