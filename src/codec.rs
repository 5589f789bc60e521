use std::path::Path;

use image::{imageops::FilterType, DynamicImage, ImageError, ImageReader, RgbImage};
use log::debug;

use crate::error::{ConvertError, Result};

/// The image operations the converter needs from a codec.
pub trait RasterCodec {
    fn open(&self, path: &Path) -> Result<DynamicImage>;

    /// Drops alpha and normalizes any color mode to 8 bit RGB.
    fn to_rgb(&self, image: DynamicImage) -> RgbImage {
        debug!("color type {:?} -> Rgb8", image.color());
        image.into_rgb8()
    }

    /// Resizes to exactly `width` x `height`, ignoring the source aspect ratio.
    fn resize(&self, image: &RgbImage, width: u32, height: u32, filter: FilterType) -> RgbImage {
        image::imageops::resize(image, width, height, filter)
    }
}

/// Decodes from the filesystem with the `image` crate.
///
/// The format is sniffed from the file contents, so the extension may be
/// missing or wrong.
#[derive(Clone, Copy, Debug, Default)]
pub struct FileCodec;

impl RasterCodec for FileCodec {
    fn open(&self, path: &Path) -> Result<DynamicImage> {
        let decode = || -> std::result::Result<DynamicImage, ImageError> {
            ImageReader::open(path)?.with_guessed_format()?.decode()
        };
        decode().map_err(|source| ConvertError::Decode {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Hands out a fixed raster for every path.
#[cfg(test)]
pub struct SyntheticCodec(pub DynamicImage);

#[cfg(test)]
impl RasterCodec for SyntheticCodec {
    fn open(&self, _path: &Path) -> Result<DynamicImage> {
        Ok(self.0.clone())
    }
}
