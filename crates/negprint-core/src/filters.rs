//! Blur and sharpen collaborators.
//!
//! The pipeline never convolves pixels itself. It asks this narrow
//! raster-in/raster-out interface instead, so the stages can be tested with
//! mock implementations and the graphics primitive library stays swappable.

use image::GrayImage;

use crate::raster::Raster;

/// Image primitives the pipeline delegates to.
pub trait Filters {
    /// Gaussian blur with the given radius. Radius 0 returns the input
    /// unchanged. Must preserve dimensions.
    fn blur(&self, raster: &Raster, radius: f64) -> Raster;

    /// Unsharp mask: add back `amount` times the difference between the
    /// raster and its blurred copy, ignoring differences at or below
    /// `threshold`. Must preserve dimensions.
    fn sharpen(&self, raster: &Raster, radius: f64, amount: f64, threshold: u8) -> Raster;
}

/// Production implementation backed by the `image` crate's Gaussian blur.
#[derive(Debug, Clone, Copy, Default)]
pub struct GaussianFilters;

impl Filters for GaussianFilters {
    fn blur(&self, raster: &Raster, radius: f64) -> Raster {
        if radius <= 0.0 {
            return raster.clone();
        }
        let blurred = image::imageops::blur(&to_gray(raster), radius as f32);
        from_gray(blurred)
    }

    fn sharpen(&self, raster: &Raster, radius: f64, amount: f64, threshold: u8) -> Raster {
        let blurred = self.blur(raster, radius);
        let mut sharpened = raster.clone();
        for (sample, &soft) in sharpened.data_mut().iter_mut().zip(blurred.data()) {
            let diff = *sample as i32 - soft as i32;
            if diff.abs() > threshold as i32 {
                let boosted = *sample as f64 + amount * diff as f64;
                *sample = boosted.round().clamp(0.0, 255.0) as u8;
            }
        }
        sharpened
    }
}

/// View a raster as a `GrayImage` for the primitive library.
pub(crate) fn to_gray(raster: &Raster) -> GrayImage {
    GrayImage::from_raw(raster.width(), raster.height(), raster.data().to_vec())
        .expect("raster buffer length matches its dimensions")
}

/// Wrap a `GrayImage` back into a raster.
pub(crate) fn from_gray(image: GrayImage) -> Raster {
    let (width, height) = image.dimensions();
    Raster::from_raw(width, height, image.into_raw())
        .expect("GrayImage buffer length matches its dimensions")
}
