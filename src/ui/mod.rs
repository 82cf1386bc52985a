//! Presentation seam
//!
//! The core never draws to a screen. After each host frame it assembles a
//! [`Frame`] (raster + car placement + overlay text) and hands it to whatever
//! implements [`Presenter`]. Snapshot requests go to a [`SceneExporter`].

pub mod hud;
pub mod sprite;

use std::path::PathBuf;

use glam::UVec2;

pub use hud::{HudLabel, format_lap_time, hud_labels};
pub use sprite::{ATLAS_CELL, AtlasRect, CarPlacement};

use crate::platform::export::ExportError;
use crate::renderer::PixelBuffer;

/// Everything the host needs to show one frame
#[derive(Debug, Clone)]
pub struct Frame<'a> {
    /// Logical-resolution scene, read-only
    pub pixels: &'a PixelBuffer,
    /// Physical screen size the host scales to
    pub physical_size: UVec2,
    /// Physical pixels per logical cell
    pub cell_size: UVec2,
    pub car: CarPlacement,
    /// Overlay text (empty when the HUD is off)
    pub labels: Vec<HudLabel>,
}

/// Host-side drawing
pub trait Presenter {
    fn present(&mut self, frame: &Frame<'_>);
}

/// Host-side scene snapshots. Owns its own file numbering.
pub trait SceneExporter {
    /// Write the frame, returning where it went
    fn export(&mut self, frame: &Frame<'_>) -> Result<PathBuf, ExportError>;
}
