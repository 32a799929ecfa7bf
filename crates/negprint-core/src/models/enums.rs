//! Enums for pipeline configuration.

use serde::{Deserialize, Serialize};

/// Pixel-wise compositing operator between the raster and its blurred copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum BlendMode {
    /// Identity, no compositing
    #[default]
    None,

    /// Multiply in shadows, screen in highlights
    Overlay,

    /// Brightening blend: `255 - (255-a)(255-b)/255`
    Screen,

    /// Darkening blend: `ab/255`
    Multiply,

    /// Smoothed multiply/screen blend (Pegtop variant)
    SoftLight,

    /// Overlay with the operands swapped
    HardLight,
}

/// Page orientation, derived from the raster's aspect at paper-fit time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Orientation {
    Landscape,
    Portrait,
}

/// ISO 216 paper size for the paper-fit stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PaperSize {
    A3,
    A4,
    A5,
    A6,
}

/// Conversion factor used for the millimeter → pixel mapping.
pub(crate) const INCH_PER_MM: f64 = 0.0393701;

impl PaperSize {
    /// Physical size in millimeters for the given orientation.
    ///
    /// The portrait branch reads the portrait table. (The lineage read the
    /// landscape table on both branches; that is a bug, not a behavior.)
    pub fn dimensions_mm(&self, orientation: Orientation) -> (f64, f64) {
        let landscape = match self {
            PaperSize::A3 => (420.0, 297.0),
            PaperSize::A4 => (297.0, 210.0),
            PaperSize::A5 => (210.0, 148.0),
            PaperSize::A6 => (148.0, 105.0),
        };
        match orientation {
            Orientation::Landscape => landscape,
            Orientation::Portrait => (landscape.1, landscape.0),
        }
    }

    /// Target canvas in pixels at the given print resolution:
    /// `px = round(mm * 0.0393701 * dpi)` per axis.
    pub fn dimensions_px(&self, orientation: Orientation, dpi: u32) -> (u32, u32) {
        let (mm_w, mm_h) = self.dimensions_mm(orientation);
        let px = |mm: f64| (mm * INCH_PER_MM * dpi as f64).round() as u32;
        (px(mm_w), px(mm_h))
    }
}

impl std::fmt::Display for PaperSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            PaperSize::A3 => "a3",
            PaperSize::A4 => "a4",
            PaperSize::A5 => "a5",
            PaperSize::A6 => "a6",
        };
        write!(f, "{}", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_portrait_swaps_landscape_dimensions() {
        let (lw, lh) = PaperSize::A4.dimensions_mm(Orientation::Landscape);
        let (pw, ph) = PaperSize::A4.dimensions_mm(Orientation::Portrait);
        assert_eq!((lw, lh), (297.0, 210.0));
        assert_eq!((pw, ph), (210.0, 297.0));
    }

    #[test]
    fn test_a4_landscape_at_300_dpi() {
        // 297mm * 0.0393701 * 300 = 3507.8 -> 3508
        // 210mm * 0.0393701 * 300 = 2480.3 -> 2480
        let (w, h) = PaperSize::A4.dimensions_px(Orientation::Landscape, 300);
        assert_eq!((w, h), (3508, 2480));
    }

    #[test]
    fn test_paper_px_scales_with_dpi() {
        let (w150, _) = PaperSize::A5.dimensions_px(Orientation::Portrait, 150);
        let (w300, _) = PaperSize::A5.dimensions_px(Orientation::Portrait, 300);
        assert!((w300 as i64 - 2 * w150 as i64).abs() <= 1);
    }
}
