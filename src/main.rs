use std::path::Path;

use anyhow::Result;
use log::info;

use crate::{codec::FileCodec, config::TargetConfig, convert::convert_image};

mod codec;
mod config;
mod convert;
mod error;
mod header;
mod rgb565;

fn main() -> Result<()> {
    let _ = env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .try_init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.len() < 2 {
        println!("Usage: convert_image <input_image> <output_header>");
        std::process::exit(1);
    }

    let (input, output) = (Path::new(&args[0]), Path::new(&args[1]));
    info!("{} -> {}", input.display(), output.display());
    convert_image(&FileCodec, input, output, &TargetConfig::default())?;
    Ok(())
}
