//! Simulation state
//!
//! Everything the tick mutates lives here. All scalars; the raster is derived
//! from this state alone.

use serde::{Deserialize, Serialize};

use super::lap::LapTimer;

/// Which way the car is being steered this tick (selects the sprite)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CarDirection {
    Left,
    #[default]
    Straight,
    Right,
}

impl CarDirection {
    /// -1, 0 or +1
    pub fn as_sign(self) -> i8 {
        match self {
            CarDirection::Left => -1,
            CarDirection::Straight => 0,
            CarDirection::Right => 1,
        }
    }
}

/// Scalar car/track state
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SimulationState {
    /// Distance travelled in the current lap
    pub distance: f32,
    /// Road curvature, eased toward the current segment's curvature
    pub curvature: f32,
    /// Accumulated road curvature (drives the horizon)
    pub track_curvature: f32,
    /// Accumulated steering input
    pub player_curvature: f32,
    /// Normalized speed, always in [0, 1] after a tick
    pub speed: f32,
    pub car_direction: CarDirection,
    /// Segment under the car after the latest lookup
    pub segment_index: usize,
    /// Lateral car offset: player curvature minus track curvature
    pub car_pos: f32,
}

impl SimulationState {
    /// Car is on the start/finish stretch
    #[inline]
    pub fn on_start_straight(&self) -> bool {
        self.segment_index == 0
    }
}

/// Complete race state advanced by [`super::tick`]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub sim: SimulationState,
    pub laps: LapTimer,
    /// Simulation tick counter
    pub time_ticks: u64,
}

impl GameState {
    pub fn new() -> Self {
        Self::default()
    }
}
