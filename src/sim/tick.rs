//! Fixed timestep simulation tick
//!
//! Advances the race deterministically by one step of `dt` seconds.

use super::input::InputSnapshot;
use super::state::{CarDirection, GameState};
use super::track::Track;
use crate::consts::*;

/// What happened during a tick that the host may want to react to
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TickEvents {
    /// Lap time of a lap closed this tick
    pub lap_completed: Option<f32>,
    /// Export key was released this tick
    pub export_requested: bool,
}

/// Advance the race by one fixed timestep
pub fn tick(state: &mut GameState, input: &InputSnapshot, track: &Track, dt: f32) -> TickEvents {
    let mut events = TickEvents::default();
    let sim = &mut state.sim;

    sim.car_direction = CarDirection::Straight;

    // Throttle
    if input.accelerate() {
        sim.speed += ACCELERATION * dt;
    } else {
        sim.speed -= COAST_DECELERATION * dt;
    }

    // Steering is harder at speed. Right is applied last and wins the sprite.
    let steer = STEER_RATE * dt * (1.0 - sim.speed / 2.0);
    if input.steer_left() {
        sim.player_curvature -= steer;
        sim.car_direction = CarDirection::Left;
    }
    if input.steer_right() {
        sim.player_curvature += steer;
        sim.car_direction = CarDirection::Right;
    }

    if input.export_requested() {
        events.export_requested = true;
        log::info!("Scene export requested at tick {}", state.time_ticks);
    }

    // Car pointing too far from the road means it has left it
    if (sim.player_curvature - sim.track_curvature).abs() >= OFF_TRACK_THRESHOLD {
        sim.speed -= OFF_TRACK_DECELERATION * dt;
    }

    sim.speed = sim.speed.clamp(0.0, 1.0);
    debug_assert!((0.0..=1.0).contains(&sim.speed));

    sim.distance += TOP_SPEED * sim.speed * dt;

    // Lap timing
    state.laps.update(dt);
    if sim.distance >= track.total_length() {
        sim.distance -= track.total_length();
        let lap = state.laps.complete_lap();
        events.lap_completed = Some(lap);
        log::info!(
            "Lap {} completed in {:.3}s",
            state.laps.laps_completed(),
            lap
        );
    }

    let (segment_index, target_curvature) = track.locate(sim.distance);
    sim.segment_index = segment_index;

    // Ease road curvature toward the segment, then accumulate it
    sim.curvature += (target_curvature - sim.curvature) * dt * sim.speed;
    sim.track_curvature += sim.curvature * dt * sim.speed;

    sim.car_pos = sim.player_curvature - sim.track_curvature;

    state.time_ticks += 1;
    events
}
