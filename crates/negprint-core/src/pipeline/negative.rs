//! Mirror + invert stage: the negative conversion itself.
//!
//! Contact printing presses the emulsion side of the negative against the
//! paper, so the image is flipped left-right and every tone inverted. This
//! stage always runs; a pipeline that skips it would not print a negative.

use crate::raster::Raster;

/// Flip horizontally, then invert every sample.
pub fn to_negative(raster: Raster) -> Raster {
    let width = raster.width();
    let height = raster.height();
    let mut data = raster.into_data();

    for row in data.chunks_exact_mut(width as usize) {
        row.reverse();
        for sample in row.iter_mut() {
            *sample = 255 - *sample;
        }
    }

    // Length untouched, so this cannot fail
    Raster::from_raw(width, height, data).expect("mirror/invert preserves buffer length")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inversion_is_involution() {
        // invert(invert(s)) == s for all s; the double mirror also restores
        // pixel order, so applying the stage twice is the identity
        let data: Vec<u8> = (0..=255).collect();
        let raster = Raster::from_raw(16, 16, data).unwrap();
        let original = raster.clone();
        let twice = to_negative(to_negative(raster));
        assert_eq!(twice, original);
    }

    #[test]
    fn test_mirrors_rows() {
        let raster = Raster::from_raw(3, 2, vec![10, 20, 30, 40, 50, 60]).unwrap();
        let result = to_negative(raster);
        assert_eq!(result.row(0), &[255 - 30, 255 - 20, 255 - 10]);
        assert_eq!(result.row(1), &[255 - 60, 255 - 50, 255 - 40]);
    }

    #[test]
    fn test_uniform_raster_only_inverts() {
        // mirroring a flat tone is invisible; only the inversion shows
        let raster = Raster::filled(10, 10, 128);
        let result = to_negative(raster);
        assert!(result.data().iter().all(|&s| s == 127));
    }

    #[test]
    fn test_extremes_swap() {
        let raster = Raster::from_raw(2, 1, vec![0, 255]).unwrap();
        let result = to_negative(raster);
        assert_eq!(result.data(), &[0, 255]);
    }
}
