use image::RgbImage;

/// A 16bit pixel that has 5 red bits, 6 green bits and 5 blue bits
#[repr(transparent)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub struct Rgb565Pixel(pub u16);

impl Rgb565Pixel {
    /// Packs an 8 bit per channel color by dropping the low bits of each channel.
    pub fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self(((r as u16 >> 3) << 11) | ((g as u16 >> 2) << 5) | (b as u16 >> 3))
    }
}

#[cfg(test)]
impl Rgb565Pixel {
    fn red(self) -> u8 {
        ((self.0 >> 11) << 3) as u8
    }

    fn green(self) -> u8 {
        (((self.0 >> 5) & 0x3F) << 2) as u8
    }

    fn blue(self) -> u8 {
        ((self.0 & 0x1F) << 3) as u8
    }
}

/// Packs every pixel of `img` in scan order (left to right, top to bottom).
pub fn rgb888_to_rgb565_u16(img: &RgbImage) -> Vec<u16> {
    img.pixels()
        .map(|p| Rgb565Pixel::from_rgb(p[0], p[1], p[2]).0)
        .collect()
}
