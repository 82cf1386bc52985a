//! Platform collaborators
//!
//! Reference implementations of the host-side pieces the core talks to:
//! - Input recording and per-tick snapshots
//! - Scene export to numbered image files

pub mod export;
pub mod input;

pub use export::{ExportError, PngExporter};
pub use input::InputState;
