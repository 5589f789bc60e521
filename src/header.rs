use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::Path,
};

use crate::{
    config::TargetConfig,
    error::{ConvertError, Result},
};

pub const VALUES_PER_LINE: usize = 16;

/// Writes the header text for `pixels` to `out`.
pub fn render_header<W: Write>(
    out: &mut W,
    config: &TargetConfig,
    width: u32,
    height: u32,
    pixels: &[u16],
) -> io::Result<()> {
    let prefix = &config.macro_prefix;
    writeln!(out, "#pragma once")?;
    writeln!(out)?;
    writeln!(out, "#include <{}>", config.platform_header)?;
    writeln!(out)?;
    writeln!(out, "#define {prefix}_WIDTH {width}")?;
    writeln!(out, "#define {prefix}_HEIGHT {height}")?;
    writeln!(out)?;
    writeln!(
        out,
        "const uint16_t {}[{}] PROGMEM = {{",
        config.array_name,
        width as usize * height as usize
    )?;

    for line in pixels.chunks(VALUES_PER_LINE) {
        let tokens: Vec<String> = line.iter().map(|v| format!("0x{v:04X}")).collect();
        writeln!(out, "  {},", tokens.join(", "))?;
    }

    writeln!(out, "}};")
}

/// Creates `path` and writes the header into it.
///
/// The writer is flushed before returning so a failed write surfaces as
/// [`ConvertError::Io`] instead of being lost on drop.
pub fn write_header(
    path: &Path,
    config: &TargetConfig,
    width: u32,
    height: u32,
    pixels: &[u16],
) -> Result<()> {
    let io_err = |source| ConvertError::Io {
        path: path.to_path_buf(),
        source,
    };
    let file = File::create(path).map_err(io_err)?;
    let mut out = BufWriter::new(file);
    render_header(&mut out, config, width, height, pixels).map_err(io_err)?;
    out.flush().map_err(io_err)
}
