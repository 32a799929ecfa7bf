//! Command-line argument definitions.

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "negprint")]
#[command(
    version,
    about = "Prepare a photographic negative for analog contact printing",
    long_about = None
)]
pub struct Cli {
    /// Gamma correction exponent (1.0 = unchanged)
    #[arg(long, value_name = "FLOAT", default_value = "1.0")]
    pub gamma: f64,

    /// Equalize the tonal histogram before the other corrections
    #[arg(long)]
    pub equalize: bool,

    /// Border width as a fraction of each axis (0..0.25)
    #[arg(long, value_name = "FLOAT", default_value = "0.05")]
    pub border: f64,

    /// Fit onto an ISO paper size (a3, a4, a5, a6) or "no" to keep dimensions
    #[arg(long, value_name = "SIZE", default_value = "no")]
    pub resize: String,

    /// Print resolution in dots per inch
    #[arg(long, value_name = "INT", default_value = "300")]
    pub dpi: u32,

    /// Blend the image with a blurred copy of itself in overlay mode
    #[arg(long, group = "blend")]
    pub overlay: bool,

    /// Blend the image with a blurred copy of itself in screen mode
    #[arg(long, group = "blend")]
    pub screen: bool,

    /// Blend the image with a blurred copy of itself in multiply mode
    #[arg(long, group = "blend")]
    pub multiply: bool,

    /// Blend the image with a blurred copy of itself in soft-light mode
    #[arg(long, group = "blend")]
    pub softlight: bool,

    /// Blend the image with a blurred copy of itself in hard-light mode
    #[arg(long, group = "blend")]
    pub hardlight: bool,

    /// Gaussian radius for the blend's blurred copy (0 = no blur)
    #[arg(long, value_name = "FLOAT", default_value = "0")]
    pub blur_radius: f64,

    /// Black output level for tonal compression (0..255)
    #[arg(long, value_name = "INT", default_value = "0")]
    pub black: u8,

    /// White output level for tonal compression (0..255)
    #[arg(long, value_name = "INT", default_value = "255")]
    pub white: u8,

    /// Apply a final unsharp mask
    #[arg(long)]
    pub sharpen: bool,

    /// Load the whole pipeline configuration from a YAML preset instead of
    /// the flags above
    #[arg(
        long,
        value_name = "FILE",
        conflicts_with_all = [
            "gamma", "equalize", "border", "resize", "dpi", "overlay",
            "screen", "multiply", "softlight", "hardlight", "blur_radius",
            "black", "white", "sharpen",
        ]
    )]
    pub preset: Option<PathBuf>,

    /// Input image
    pub input: PathBuf,

    /// Output image
    pub output: PathBuf,
}
