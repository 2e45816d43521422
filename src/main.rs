use anyhow::{Context, Result};
use clap::Parser;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use soft_raster::cli::Cli;
use soft_raster::image::Image;
use soft_raster::scene;

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let config = match &cli.scene {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read scene file {}", path.display()))?;
            serde_json::from_str(&text)
                .with_context(|| format!("failed to parse scene file {}", path.display()))?
        }
        None => scene::default_scene(),
    };

    let image = scene::render(&config)?;
    write_ppm(&cli.output, &image)
        .with_context(|| format!("failed to write {}", cli.output.display()))?;

    log::info!(
        "wrote {}x{} image to {}",
        image.width(),
        image.height(),
        cli.output.display()
    );
    Ok(())
}

/// Binary PPM (P6) output. Alpha is dropped; the format has no room for it.
fn write_ppm(path: &Path, image: &Image) -> std::io::Result<()> {
    let mut out = BufWriter::new(File::create(path)?);
    write!(out, "P6\n{} {}\n255\n", image.width(), image.height())?;
    for color in image.data() {
        out.write_all(&[color.r, color.g, color.b])?;
    }
    out.flush()
}
