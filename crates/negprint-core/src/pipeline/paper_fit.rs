//! Paper-fit stage.
//!
//! Pads the raster onto a canvas whose pixel size corresponds to a physical
//! ISO paper size at the configured print resolution. The content is never
//! scaled: the print keeps its pixel-exact tones and the canvas supplies
//! paper-white margins. Orientation is derived from the raster as it arrives
//! here, i.e. after the border stage has already changed the dimensions.

use super::helpers::paste;
use crate::error::{Error, Result};
use crate::models::{Orientation, PaperFitStage};
use crate::raster::Raster;

use super::border::BACKGROUND;

/// Pad onto the paper canvas. Disabled means "no resize" and is the identity
/// regardless of DPI. Content larger than the canvas is rejected; padding
/// cannot shrink, and scaling is out of contract.
pub fn fit_to_paper(raster: Raster, stage: &PaperFitStage) -> Result<Raster> {
    match *stage {
        PaperFitStage::Disabled => Ok(raster),
        PaperFitStage::Enabled { size, dpi } => {
            let orientation = if raster.width() > raster.height() {
                Orientation::Landscape
            } else {
                Orientation::Portrait
            };
            let (target_width, target_height) = size.dimensions_px(orientation, dpi);

            if raster.width() > target_width || raster.height() > target_height {
                return Err(Error::invalid(
                    "resize",
                    format!(
                        "{}x{} px does not fit {} {:?} at {} dpi ({}x{} px)",
                        raster.width(),
                        raster.height(),
                        size,
                        orientation,
                        dpi,
                        target_width,
                        target_height
                    ),
                ));
            }

            let x_off = (target_width - raster.width()) / 2;
            let y_off = (target_height - raster.height()) / 2;
            let mut canvas = Raster::filled(target_width, target_height, BACKGROUND);
            paste(&raster, &mut canvas, x_off, y_off);
            Ok(canvas)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PaperSize;

    #[test]
    fn test_disabled_is_identity_regardless_of_dpi() {
        let raster = Raster::filled(10, 20, 128);
        let original = raster.clone();
        let result = fit_to_paper(raster, &PaperFitStage::Disabled).unwrap();
        assert_eq!(result, original);
    }

    #[test]
    fn test_portrait_input_uses_portrait_canvas() {
        // 100x200 is portrait; a6 portrait at 300 dpi:
        // 105mm -> round(105 * 0.0393701 * 300) = 1240
        // 148mm -> round(148 * 0.0393701 * 300) = 1748
        let raster = Raster::filled(100, 200, 50);
        let stage = PaperFitStage::Enabled {
            size: PaperSize::A6,
            dpi: 300,
        };
        let result = fit_to_paper(raster, &stage).unwrap();
        assert_eq!(result.width(), 1240);
        assert_eq!(result.height(), 1748);
    }

    #[test]
    fn test_landscape_input_uses_landscape_canvas() {
        let raster = Raster::filled(200, 100, 50);
        let stage = PaperFitStage::Enabled {
            size: PaperSize::A6,
            dpi: 300,
        };
        let result = fit_to_paper(raster, &stage).unwrap();
        assert_eq!(result.width(), 1748);
        assert_eq!(result.height(), 1240);
    }

    #[test]
    fn test_content_is_centered_on_background() {
        let raster = Raster::filled(100, 200, 50);
        let stage = PaperFitStage::Enabled {
            size: PaperSize::A6,
            dpi: 300,
        };
        let result = fit_to_paper(raster, &stage).unwrap();

        let x_off = (1240 - 100) / 2;
        let y_off = (1748 - 200) / 2;
        assert_eq!(result.get(0, 0), BACKGROUND);
        assert_eq!(result.get(x_off - 1, y_off), BACKGROUND);
        assert_eq!(result.get(x_off, y_off), 50);
        assert_eq!(result.get(x_off + 99, y_off + 199), 50);
        assert_eq!(result.get(x_off + 100, y_off), BACKGROUND);
    }

    #[test]
    fn test_square_input_counts_as_portrait() {
        // width > height is the only landscape case; a square takes the
        // portrait table
        let raster = Raster::filled(100, 100, 50);
        let stage = PaperFitStage::Enabled {
            size: PaperSize::A6,
            dpi: 300,
        };
        let result = fit_to_paper(raster, &stage).unwrap();
        assert!(result.width() < result.height());
    }

    #[test]
    fn test_oversized_content_is_rejected() {
        // a6 portrait at 72 dpi is 298x420 px; 500 px tall does not fit
        let raster = Raster::filled(100, 500, 50);
        let stage = PaperFitStage::Enabled {
            size: PaperSize::A6,
            dpi: 72,
        };
        let err = fit_to_paper(raster, &stage).unwrap_err();
        assert!(matches!(err, Error::InvalidParameter { field: "resize", .. }));
    }
}
