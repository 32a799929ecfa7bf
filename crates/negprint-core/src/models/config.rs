//! Pipeline configuration.
//!
//! Every optional stage is a tagged variant (`Enabled { params } | Disabled`)
//! so the orchestrator matches exhaustively instead of probing nullable
//! fields. The config is built once per run and validated as a whole before
//! the first stage touches a pixel.

use serde::{Deserialize, Serialize};

use super::enums::{BlendMode, PaperSize};
use crate::error::{Error, Result};

/// Histogram equalization toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum EqualizeStage {
    Enabled,
    #[default]
    Disabled,
}

/// Auto-blend of the raster with a blurred copy of itself.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum BlendStage {
    Enabled {
        mode: BlendMode,
        /// Gaussian radius for the secondary copy; 0 means blend against the
        /// unblurred image.
        blur_radius: f64,
    },
    #[default]
    Disabled,
}

/// Gamma tone curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ToneCurveStage {
    Enabled { gamma: f64 },
    #[default]
    Disabled,
}

/// Black/white point compression before inversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum RemapStage {
    Enabled { black: u8, white: u8 },
    #[default]
    Disabled,
}

/// Background-filled frame around the image.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum BorderStage {
    Enabled {
        /// Border width as a fraction of each axis, in [0, 0.25].
        fraction: f64,
    },
    #[default]
    Disabled,
}

/// Padding onto a physical paper size at a print resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum PaperFitStage {
    Enabled { size: PaperSize, dpi: u32 },
    #[default]
    Disabled,
}

/// Final unsharp mask.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SharpenStage {
    Enabled {
        radius: f64,
        /// Mask gain; 1.0 adds the full difference back.
        amount: f64,
        /// Minimum contrast with the blurred copy before a pixel is touched.
        threshold: u8,
    },
    #[default]
    Disabled,
}

impl SharpenStage {
    /// Defaults matching a stock darkroom unsharp mask.
    pub fn enabled_with_defaults() -> Self {
        SharpenStage::Enabled {
            radius: 2.0,
            amount: 1.5,
            threshold: 3,
        }
    }
}

/// All stage parameters for one pipeline run. Immutable after construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(default, rename_all = "kebab-case")]
pub struct PipelineConfig {
    pub equalize: EqualizeStage,
    pub blend: BlendStage,
    pub tone_curve: ToneCurveStage,
    pub remap: RemapStage,
    pub border: BorderStage,
    pub paper_fit: PaperFitStage,
    pub sharpen: SharpenStage,
}

impl PipelineConfig {
    /// Validate every stage parameter. Runs before the first stage so a bad
    /// config never produces partial output.
    pub fn validate(&self) -> Result<()> {
        if let ToneCurveStage::Enabled { gamma } = self.tone_curve {
            if !gamma.is_finite() || gamma <= 0.0 {
                return Err(Error::invalid(
                    "gamma",
                    format!("must be a positive finite number, got {}", gamma),
                ));
            }
        }

        if let BlendStage::Enabled { blur_radius, .. } = self.blend {
            if !blur_radius.is_finite() || blur_radius < 0.0 {
                return Err(Error::invalid(
                    "blur-radius",
                    format!("must be non-negative, got {}", blur_radius),
                ));
            }
        }

        if let RemapStage::Enabled { black, white } = self.remap {
            if black >= white {
                return Err(Error::invalid(
                    "black/white",
                    format!(
                        "black level {} must be below white level {}",
                        black, white
                    ),
                ));
            }
        }

        if let BorderStage::Enabled { fraction } = self.border {
            if !fraction.is_finite() || !(0.0..=0.25).contains(&fraction) {
                return Err(Error::invalid(
                    "border",
                    format!("fraction must be within [0, 0.25], got {}", fraction),
                ));
            }
        }

        if let PaperFitStage::Enabled { dpi, .. } = self.paper_fit {
            if dpi == 0 {
                return Err(Error::invalid("dpi", "must be at least 1"));
            }
        }

        if let SharpenStage::Enabled { radius, amount, .. } = self.sharpen {
            if !radius.is_finite() || radius <= 0.0 {
                return Err(Error::invalid(
                    "sharpen",
                    format!("radius must be positive, got {}", radius),
                ));
            }
            if !amount.is_finite() || amount < 0.0 {
                return Err(Error::invalid(
                    "sharpen",
                    format!("amount must be non-negative, got {}", amount),
                ));
            }
        }

        Ok(())
    }
}
