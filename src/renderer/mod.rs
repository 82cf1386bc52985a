//! Software rendering module
//!
//! Produces the logical-resolution road scene as a plain RGBA buffer. Scaling,
//! sprites and text are composited by the host.

pub mod pixel;
pub mod raster;

pub use pixel::{PixelBuffer, Rgba, palette};
pub use raster::{RowBands, rasterize};
