//! Build a `PipelineConfig` from parsed arguments.

use negprint_core::{
    BlendMode, BlendStage, BorderStage, EqualizeStage, PaperFitStage, PipelineConfig, RemapStage,
    Result, SharpenStage, ToneCurveStage,
};

use crate::args::Cli;
use crate::parsers::parse_paper_size;

/// Translate the flag set into the immutable pipeline configuration.
/// A preset file, when given, replaces the flags wholesale.
pub fn build_config(cli: &Cli) -> Result<PipelineConfig> {
    if let Some(preset_path) = &cli.preset {
        return negprint_core::presets::load_preset(preset_path);
    }

    let blend_mode = select_blend_mode(cli);
    let config = PipelineConfig {
        equalize: if cli.equalize {
            EqualizeStage::Enabled
        } else {
            EqualizeStage::Disabled
        },
        blend: match blend_mode {
            BlendMode::None => BlendStage::Disabled,
            mode => BlendStage::Enabled {
                mode,
                blur_radius: cli.blur_radius,
            },
        },
        tone_curve: ToneCurveStage::Enabled { gamma: cli.gamma },
        remap: RemapStage::Enabled {
            black: cli.black,
            white: cli.white,
        },
        border: if cli.border > 0.0 {
            BorderStage::Enabled {
                fraction: cli.border,
            }
        } else {
            BorderStage::Disabled
        },
        paper_fit: match parse_paper_size(&cli.resize)? {
            Some(size) => PaperFitStage::Enabled { size, dpi: cli.dpi },
            None => PaperFitStage::Disabled,
        },
        sharpen: if cli.sharpen {
            SharpenStage::enabled_with_defaults()
        } else {
            SharpenStage::Disabled
        },
    };

    config.validate()?;
    Ok(config)
}

/// The blend flags are mutually exclusive at the clap level, so at most one
/// is set here.
fn select_blend_mode(cli: &Cli) -> BlendMode {
    if cli.overlay {
        BlendMode::Overlay
    } else if cli.screen {
        BlendMode::Screen
    } else if cli.multiply {
        BlendMode::Multiply
    } else if cli.softlight {
        BlendMode::SoftLight
    } else if cli.hardlight {
        BlendMode::HardLight
    } else {
        BlendMode::None
    }
}
