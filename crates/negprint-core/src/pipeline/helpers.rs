//! Shared helpers for the per-pixel stages.

use rayon::prelude::*;

use crate::raster::Raster;

/// Pixel count above which the per-pixel loops switch to rayon.
pub(crate) const PARALLEL_THRESHOLD: usize = 100_000;

/// Chunk size for parallel sample loops, sized for cache locality.
pub(crate) const CHUNK_SIZE: usize = 4096;

/// Apply a 256-entry lookup table to every sample in place.
///
/// Uses parallel processing for large images.
pub(crate) fn apply_lut(raster: &mut Raster, lut: &[u8; 256]) {
    let data = raster.data_mut();
    if data.len() >= PARALLEL_THRESHOLD {
        data.par_chunks_mut(CHUNK_SIZE).for_each(|chunk| {
            for sample in chunk.iter_mut() {
                *sample = lut[*sample as usize];
            }
        });
    } else {
        for sample in data.iter_mut() {
            *sample = lut[*sample as usize];
        }
    }
}

/// 256-bin histogram of the raster.
pub(crate) fn histogram(raster: &Raster) -> [u64; 256] {
    let mut bins = [0u64; 256];
    for &sample in raster.data() {
        bins[sample as usize] += 1;
    }
    bins
}

/// Copy `src` into `dest` with its top-left corner at (x_off, y_off).
/// Caller guarantees the source fits inside the destination.
pub(crate) fn paste(src: &Raster, dest: &mut Raster, x_off: u32, y_off: u32) {
    debug_assert!(x_off + src.width() <= dest.width());
    debug_assert!(y_off + src.height() <= dest.height());

    let dest_width = dest.width() as usize;
    let src_width = src.width() as usize;
    let dest_data = dest.data_mut();
    for (y, src_row) in src.rows().enumerate() {
        let start = (y + y_off as usize) * dest_width + x_off as usize;
        dest_data[start..start + src_width].copy_from_slice(src_row);
    }
}
