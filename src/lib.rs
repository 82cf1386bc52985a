//! Retro Racer - a pseudo-3D racing core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (track, input snapshot, lap timing, tick)
//! - `renderer`: Per-row perspective rasterizer into a logical pixel buffer
//! - `scheduler`: Fixed-rate catch-up loop decoupled from wall-clock frames
//! - `race`: Owns one running race (track + state + raster)
//! - `ui`: Presentation data handed to the host (HUD text, car sprite placement)
//! - `platform`: Reference input and export collaborators
//! - `settings`: Runtime configuration

pub mod platform;
pub mod race;
pub mod renderer;
pub mod scheduler;
pub mod settings;
pub mod sim;
pub mod ui;

pub use race::Race;
pub use scheduler::{FixedStep, FrameReport, FrameScheduler, SchedulerError};
pub use settings::{Settings, SettingsError};

/// Game configuration constants
pub mod consts {
    /// Default logical tick rate (Hz)
    pub const TICK_RATE_HZ: u32 = 60;

    /// Logical raster resolution
    pub const LOGICAL_WIDTH: u32 = 160;
    pub const LOGICAL_HEIGHT: u32 = 100;

    /// Physical pixels per logical cell
    pub const CELL_WIDTH: u32 = 6;
    pub const CELL_HEIGHT: u32 = 6;

    /// Throttle response (speed units per second)
    pub const ACCELERATION: f32 = 2.0;
    pub const COAST_DECELERATION: f32 = 1.0;
    /// Extra braking while off the road
    pub const OFF_TRACK_DECELERATION: f32 = 5.0;
    /// Curvature gap between car and road that counts as off the road
    pub const OFF_TRACK_THRESHOLD: f32 = 0.8;

    /// Steering rate at standstill (halves at full speed)
    pub const STEER_RATE: f32 = 0.7;

    /// Distance covered per second at full speed
    pub const TOP_SPEED: f32 = 70.0;

    /// Number of lap times kept in the rolling history
    pub const LAP_HISTORY_LEN: usize = 5;

    /// Scenery hill amplitude in logical rows
    pub const HILL_HEIGHT: f32 = 16.0;
    /// Horizontal frequency of the hill silhouette
    pub const HILL_FREQUENCY: f32 = 0.01;

    /// Road width at the horizon and extra width at the bottom row (fractions of W)
    pub const ROAD_MIN_WIDTH: f32 = 0.1;
    pub const ROAD_WIDTH_RANGE: f32 = 0.8;
    /// Rumble strip width relative to the full road width
    pub const CLIP_RATIO: f32 = 0.15;

    /// Car sprite size and screen row, in cells
    pub const CAR_WIDTH_CELLS: u32 = 14;
    pub const CAR_HEIGHT_CELLS: u32 = 6;
    pub const CAR_ROW_CELLS: u32 = 80;

    /// HUD text rows are this many cells apart
    pub const HUD_ROW_CELLS: u32 = 3;
}
