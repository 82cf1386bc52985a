//! Pixel types for the logical raster

use bytemuck::{Pod, Zeroable};
use glam::UVec2;

/// 8-bit RGBA pixel
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    /// Opaque color from 0xRRGGBB
    pub const fn hex(rgb: u32) -> Self {
        Self {
            r: (rgb >> 16) as u8,
            g: (rgb >> 8) as u8,
            b: rgb as u8,
            a: 0xff,
        }
    }
}

/// Colors for the road scene
pub mod palette {
    use super::Rgba;

    pub const BACKGROUND: Rgba = Rgba::hex(0xa0a0a4);
    pub const SKY_HIGH: Rgba = Rgba::hex(0x0000ff);
    pub const SKY_LOW: Rgba = Rgba::hex(0x000080);
    pub const HILLS: Rgba = Rgba::hex(0x808000);
    pub const GRASS_LIGHT: Rgba = Rgba::hex(0x00ff00);
    pub const GRASS_DARK: Rgba = Rgba::hex(0x008000);
    pub const CLIP_RED: Rgba = Rgba::hex(0xff0000);
    pub const CLIP_WHITE: Rgba = Rgba::hex(0xffffff);
    pub const ROAD: Rgba = Rgba::hex(0xa0a0a4);
    /// Road color on the start/finish stretch
    pub const ROAD_START: Rgba = Rgba::hex(0xffffff);
}

/// Row-major pixel grid at logical resolution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    pixels: Vec<Rgba>,
}

impl PixelBuffer {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![palette::BACKGROUND; width as usize * height as usize],
        }
    }

    pub fn with_size(size: UVec2) -> Self {
        Self::new(size.x, size.y)
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn size(&self) -> UVec2 {
        UVec2::new(self.width, self.height)
    }

    /// Pixel at (x, y), `None` outside the buffer
    pub fn get(&self, x: u32, y: u32) -> Option<Rgba> {
        if x < self.width && y < self.height {
            Some(self.pixels[(y * self.width + x) as usize])
        } else {
            None
        }
    }

    pub fn fill(&mut self, color: Rgba) {
        self.pixels.fill(color);
    }

    pub fn pixels(&self) -> &[Rgba] {
        &self.pixels
    }

    /// Mutable rows, top to bottom
    pub fn rows_mut(&mut self) -> std::slice::ChunksExactMut<'_, Rgba> {
        self.pixels.chunks_exact_mut(self.width.max(1) as usize)
    }

    /// Raw RGBA bytes for upload or encoding
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }
}
