//! Image export from the pipeline's raster form.

use std::path::Path;

use crate::error::Result;
use crate::filters::to_gray;
use crate::raster::Raster;

/// Encode the raster to a file. The format follows the path's extension,
/// as supported by the `image` crate (png, jpeg, tiff).
pub fn save_raster<P: AsRef<Path>>(raster: &Raster, path: P) -> Result<()> {
    to_gray(raster).save(path.as_ref())?;
    Ok(())
}
