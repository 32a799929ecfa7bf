//! Image decoding into the pipeline's raster form.
//!
//! The pipeline is agnostic to file formats and color: whatever the source
//! holds, it enters the pipeline as single-channel 8-bit tone. Color images
//! are reduced to luma here, at the boundary.

use std::path::Path;

use crate::error::Result;
use crate::raster::Raster;

/// Decode an image file into a raster. Format is detected by the `image`
/// crate; color sources are converted to 8-bit luma.
pub fn load_raster<P: AsRef<Path>>(path: P) -> Result<Raster> {
    let gray = image::open(path.as_ref())?.into_luma8();
    let (width, height) = gray.dimensions();
    Raster::from_raw(width, height, gray.into_raw())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exporters::save_raster;

    #[test]
    fn test_load_missing_file_is_io_failure() {
        let err = load_raster("/nonexistent/input.png").unwrap_err();
        assert!(matches!(
            err,
            crate::error::Error::Image(_) | crate::error::Error::Io(_)
        ));
    }

    #[test]
    fn test_png_round_trip_preserves_samples() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("round_trip.png");

        let data: Vec<u8> = (0..=255).collect();
        let raster = Raster::from_raw(16, 16, data).unwrap();
        save_raster(&raster, &path).unwrap();

        let loaded = load_raster(&path).unwrap();
        assert_eq!(loaded, raster);
    }
}
