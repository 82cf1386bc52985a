//! One running race
//!
//! Owns the track, the simulation state and the raster. Each fixed step runs
//! the simulation tick and then redraws the scene.

use glam::UVec2;

use crate::renderer::{PixelBuffer, rasterize};
use crate::scheduler::FixedStep;
use crate::settings::Settings;
use crate::sim::{GameState, InputSnapshot, TickEvents, Track, tick};
use crate::ui::{CarPlacement, Frame, hud_labels};

pub struct Race {
    track: Track,
    state: GameState,
    pixels: PixelBuffer,
    dt: f32,
    physical_size: UVec2,
    cell_size: UVec2,
    show_hud: bool,
}

impl Race {
    pub fn new(track: Track, settings: &Settings) -> Self {
        let mut race = Self {
            track,
            state: GameState::new(),
            pixels: PixelBuffer::with_size(settings.logical_size()),
            dt: settings.tick_period(),
            physical_size: settings.physical_size(),
            cell_size: settings.cell_size(),
            show_hud: settings.show_hud,
        };
        // First frame is valid before any tick runs
        rasterize(&mut race.pixels, &race.state.sim);
        race
    }

    pub fn track(&self) -> &Track {
        &self.track
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn pixels(&self) -> &PixelBuffer {
        &self.pixels
    }

    /// Seconds of simulated time per step
    pub fn dt(&self) -> f32 {
        self.dt
    }

    /// Assemble what the presenter needs for the latest tick
    pub fn frame(&self) -> Frame<'_> {
        let sim = &self.state.sim;
        Frame {
            pixels: &self.pixels,
            physical_size: self.physical_size,
            cell_size: self.cell_size,
            car: CarPlacement::new(
                sim.car_direction,
                sim.car_pos,
                self.physical_size,
                self.cell_size,
            ),
            labels: if self.show_hud {
                hud_labels(&self.state)
            } else {
                Vec::new()
            },
        }
    }
}

impl FixedStep for Race {
    fn fixed_step(&mut self, input: &InputSnapshot) -> TickEvents {
        let events = tick(&mut self.state, input, &self.track, self.dt);
        rasterize(&mut self.pixels, &self.state.sim);
        events
    }
}
