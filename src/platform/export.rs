//! Scene export collaborator
//!
//! Writes the logical raster of a frame to `screen<N>.png` in a target
//! directory. The exporter owns the file counter.

use std::path::PathBuf;

use image::{ImageBuffer, ImageFormat};
use thiserror::Error;

use crate::renderer::PixelBuffer;
use crate::ui::{Frame, SceneExporter};

type Snapshot = ImageBuffer<image::Rgba<u8>, Vec<u8>>;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("raster {width}x{height} does not match its {len} bytes")]
    BufferSize { width: u32, height: u32, len: usize },

    #[error("failed to encode snapshot: {0}")]
    Image(#[from] image::ImageError),
}

/// Sequentially numbered PNG snapshots
#[derive(Debug, Clone)]
pub struct PngExporter {
    dir: PathBuf,
    next_index: u32,
}

impl PngExporter {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            next_index: 0,
        }
    }

    /// Index the next snapshot will get
    pub fn next_index(&self) -> u32 {
        self.next_index
    }

    fn path_for(&self, index: u32) -> PathBuf {
        self.dir.join(format!("screen{}.png", index))
    }
}

impl SceneExporter for PngExporter {
    fn export(&mut self, frame: &Frame<'_>) -> Result<PathBuf, ExportError> {
        let path = self.path_for(self.next_index);
        to_image(frame.pixels)?.save_with_format(&path, ImageFormat::Png)?;

        self.next_index += 1;
        log::info!("Saved {}", path.display());
        Ok(path)
    }
}

fn to_image(pixels: &PixelBuffer) -> Result<Snapshot, ExportError> {
    let bytes = pixels.as_bytes();
    ImageBuffer::from_raw(pixels.width(), pixels.height(), bytes.to_vec()).ok_or(
        ExportError::BufferSize {
            width: pixels.width(),
            height: pixels.height(),
            len: bytes.len(),
        },
    )
}
