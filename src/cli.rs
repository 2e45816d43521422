// cli.rs - Command-line interface configuration
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(name = "soft-raster")]
#[command(about = "Software 2D sprite rasterizer", long_about = None)]
pub struct Cli {
    /// JSON scene description; renders a built-in demo scene when omitted
    #[arg(long)]
    pub scene: Option<PathBuf>,

    /// Output image path (binary PPM)
    #[arg(short, long, default_value = "out.ppm")]
    pub output: PathBuf,
}
