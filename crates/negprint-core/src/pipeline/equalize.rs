//! Histogram equalization stage.
//!
//! Flattens the tonal distribution by remapping every sample through the
//! cumulative distribution of the 256-bin histogram.

use super::helpers::{apply_lut, histogram};
use crate::models::EqualizeStage;
use crate::raster::Raster;

/// Equalize the raster's histogram. No-op when disabled, and when the image
/// is a single flat tone (the CDF has no spread to normalize against).
pub fn equalize_histogram(raster: Raster, stage: &EqualizeStage) -> Raster {
    match stage {
        EqualizeStage::Disabled => raster,
        EqualizeStage::Enabled => {
            let bins = histogram(&raster);
            match build_lut(&bins) {
                Some(lut) => {
                    let mut raster = raster;
                    apply_lut(&mut raster, &lut);
                    raster
                }
                None => raster,
            }
        }
    }
}

/// CDF remap table: `lut[v] = round((cdf[v] - cdf_min) / (total - cdf_min) * 255)`.
///
/// Returns `None` for a flat image, where `total == cdf_min` and there is
/// nothing to stretch.
fn build_lut(bins: &[u64; 256]) -> Option<[u8; 256]> {
    let total: u64 = bins.iter().sum();

    let mut cdf = [0u64; 256];
    let mut running = 0u64;
    for (value, &count) in bins.iter().enumerate() {
        running += count;
        cdf[value] = running;
    }

    // First non-empty bin's cumulative count
    let cdf_min = cdf
        .iter()
        .zip(bins.iter())
        .find(|(_, &count)| count > 0)
        .map(|(&c, _)| c)?;

    if total == cdf_min {
        return None;
    }

    let scale = 255.0 / (total - cdf_min) as f64;
    let mut lut = [0u8; 256];
    for (value, entry) in lut.iter_mut().enumerate() {
        let stretched = (cdf[value].saturating_sub(cdf_min)) as f64 * scale;
        *entry = stretched.round().clamp(0.0, 255.0) as u8;
    }
    Some(lut)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_is_identity() {
        let raster = Raster::from_raw(2, 2, vec![10, 20, 30, 40]).unwrap();
        let original = raster.clone();
        assert_eq!(equalize_histogram(raster, &EqualizeStage::Disabled), original);
    }

    #[test]
    fn test_bimodal_extreme_histogram_is_fixed_point() {
        // 50/50 split between 0 and 255 must stay exactly {0, 255}
        let mut data = vec![0u8; 50];
        data.extend(vec![255u8; 50]);
        let raster = Raster::from_raw(10, 10, data).unwrap();
        let result = equalize_histogram(raster, &EqualizeStage::Enabled);
        assert!(result.data().iter().all(|&s| s == 0 || s == 255));
        assert_eq!(result.data().iter().filter(|&&s| s == 0).count(), 50);
        assert_eq!(result.data().iter().filter(|&&s| s == 255).count(), 50);
    }

    #[test]
    fn test_flat_image_unchanged() {
        let raster = Raster::filled(8, 8, 128);
        let original = raster.clone();
        assert_eq!(equalize_histogram(raster, &EqualizeStage::Enabled), original);
    }

    #[test]
    fn test_stretches_narrow_range_to_full_range() {
        // Two tones crowded in the midrange spread to the extremes
        let mut data = vec![100u8; 32];
        data.extend(vec![150u8; 32]);
        let raster = Raster::from_raw(8, 8, data).unwrap();
        let result = equalize_histogram(raster, &EqualizeStage::Enabled);
        assert!(result.data().contains(&0));
        assert!(result.data().contains(&255));
    }

    #[test]
    fn test_uniform_histogram_is_near_identity() {
        // A full 0..=255 gradient is already equalized up to quantization
        let data: Vec<u8> = (0..=255).collect();
        let raster = Raster::from_raw(16, 16, data.clone()).unwrap();
        let result = equalize_histogram(raster, &EqualizeStage::Enabled);
        for (&out, &inp) in result.data().iter().zip(data.iter()) {
            assert!(
                (out as i32 - inp as i32).abs() <= 1,
                "expected near-identity: {} -> {}",
                inp,
                out
            );
        }
    }

    #[test]
    fn test_preserves_sample_ordering() {
        let data: Vec<u8> = vec![5, 80, 80, 200, 5, 200, 80, 5, 200];
        let raster = Raster::from_raw(3, 3, data).unwrap();
        let result = equalize_histogram(raster, &EqualizeStage::Enabled);
        // Distinct input tones keep their relative order
        let low = result.data()[0];
        let mid = result.data()[1];
        let high = result.data()[3];
        assert!(low < mid && mid < high);
    }
}
