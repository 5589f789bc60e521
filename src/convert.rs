use std::path::Path;

use log::info;

use crate::{
    codec::RasterCodec,
    config::TargetConfig,
    error::Result,
    header::write_header,
    rgb565::rgb888_to_rgb565_u16,
};

/// Decodes `input`, fits it to the target size and writes the RGB565 header to `output`.
///
/// Returns the dimensions that were written. Nothing is created at `output`
/// when the input cannot be decoded.
pub fn convert_image<C: RasterCodec>(
    codec: &C,
    input: &Path,
    output: &Path,
    config: &TargetConfig,
) -> Result<(u32, u32)> {
    let image = codec.open(input)?;
    info!("{}: {}x{}", input.display(), image.width(), image.height());

    let rgb = codec.to_rgb(image);
    let resized = codec.resize(&rgb, config.width, config.height, config.filter);

    let (width, height) = resized.dimensions();
    println!("Processing image: {width}x{height}");

    let pixels = rgb888_to_rgb565_u16(&resized);
    write_header(output, config, width, height, &pixels)?;
    info!("{} pixels -> {}", pixels.len(), output.display());
    Ok((width, height))
}
