use clap::Parser;
use negprint_cli::{build_config, Cli};
use negprint_core::{decoders, exporters, pipeline, GaussianFilters};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> negprint_core::Result<()> {
    let config = build_config(&cli)?;

    println!("Preparing negative from {}...", cli.input.display());
    let raster = decoders::load_raster(&cli.input)?;
    println!("  Image: {}x{}", raster.width(), raster.height());

    let result = pipeline::run(raster, &config, &GaussianFilters)?;
    println!("  Negative: {}x{}", result.width(), result.height());

    exporters::save_raster(&result, &cli.output)?;
    println!("Done! Negative saved to: {}", cli.output.display());

    Ok(())
}
