use std::path::Path;

use bytemuck::{Pod, Zeroable};

use crate::error::{Error, Result};
use crate::scene::Color;
use crate::util::math;

/// Row-major grid of tone-mapped colors, row 0 first.
#[derive(Debug, Clone, PartialEq)]
pub struct Image {
    width: u32,
    height: u32,
    pixels: Vec<Color>,
}

/// One interleaved 8-bit RGB pixel, laid out exactly as the texture upload
/// expects.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Pod, Zeroable)]
pub struct Rgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb8 {
    pub fn from_color(color: Color) -> Self {
        Self {
            r: channel_to_byte(color.x),
            g: channel_to_byte(color.y),
            b: channel_to_byte(color.z),
        }
    }
}

#[inline]
fn channel_to_byte(c: f32) -> u8 {
    (math::clamp(c, 0.0, 1.0) * 255.0).round() as u8
}

impl Image {
    pub fn new(width: u32, height: u32, fill: Color) -> Self {
        Self {
            width,
            height,
            pixels: vec![fill; width as usize * height as usize],
        }
    }

    pub(crate) fn from_pixels(width: u32, height: u32, pixels: Vec<Color>) -> Self {
        debug_assert_eq!(pixels.len(), width as usize * height as usize);
        Self {
            width,
            height,
            pixels,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    /// Panics when `(row, col)` lies outside the image.
    pub fn get(&self, row: u32, col: u32) -> Color {
        assert!(row < self.height && col < self.width, "pixel out of bounds");
        self.pixels[self.index(row, col)]
    }

    pub fn row(&self, row: u32) -> &[Color] {
        let start = self.index(row, 0);
        &self.pixels[start..start + self.width as usize]
    }

    /// True when any pixel holds NaN or an infinite channel. Only non-finite
    /// scene values (light colors, positions) can cause this.
    pub fn has_non_finite(&self) -> bool {
        self.pixels.iter().any(|p| !p.is_finite())
    }

    #[inline]
    fn index(&self, row: u32, col: u32) -> usize {
        row as usize * self.width as usize + col as usize
    }

    pub fn to_rgb8_pixels(&self) -> Vec<Rgb8> {
        self.pixels.iter().copied().map(Rgb8::from_color).collect()
    }

    /// Interleaved `RGBRGB...` bytes, row 0 first, left to right.
    pub fn to_rgb8(&self) -> Vec<u8> {
        bytemuck::cast_slice::<Rgb8, u8>(&self.to_rgb8_pixels()).to_vec()
    }

    pub fn to_rgb_image(&self) -> Result<image::RgbImage> {
        let bytes = self.to_rgb8();
        let len = bytes.len();
        image::RgbImage::from_raw(self.width, self.height, bytes).ok_or(Error::BufferSize {
            width: self.width,
            height: self.height,
            len,
        })
    }

    /// Write the image to `path`; the format follows the file extension.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        self.to_rgb_image()?.save(path)?;
        Ok(())
    }
}
