//! Deterministic simulation module
//!
//! All driving logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - No randomness
//! - No rendering or platform dependencies

pub mod input;
pub mod lap;
pub mod state;
pub mod tick;
pub mod track;

pub use input::{InputSnapshot, Key, KeySet, MouseSnapshot};
pub use lap::LapTimer;
pub use state::{CarDirection, GameState, SimulationState};
pub use tick::{TickEvents, tick};
pub use track::{Track, TrackError, TrackSegment};
