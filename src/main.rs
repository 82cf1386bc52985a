//! Retro Racer headless driver
//!
//! Runs the race against a simulated wall clock with a scripted driver, the
//! way a windowed host would: feed frame deltas to the scheduler, forward key
//! events, present each frame, and export a snapshot when one is requested.
//!
//! Environment:
//! - `RETRO_RACER_SETTINGS`: optional path to a JSON settings file
//! - `RETRO_RACER_SECONDS`: simulated wall time to run (default 90)

use std::path::PathBuf;

use retro_racer::platform::{InputState, PngExporter};
use retro_racer::sim::{Key, SimulationState, Track};
use retro_racer::ui::{Frame, Presenter, SceneExporter};
use retro_racer::{FrameScheduler, Race, Settings};

/// Uneven host frame pacing: mostly ~60 Hz with jitter and an occasional stall
const FRAME_PATTERN: [f64; 8] = [0.016, 0.017, 0.012, 0.021, 0.016, 0.017, 0.016, 0.1];

/// Steering dead zone around the road's heading
const STEER_DEAD_ZONE: f32 = 0.05;

/// Logs the HUD instead of drawing it
struct LogPresenter {
    frames: u64,
    every: u64,
}

impl Presenter for LogPresenter {
    fn present(&mut self, frame: &Frame<'_>) {
        self.frames += 1;
        if self.frames % self.every != 0 {
            return;
        }
        for label in &frame.labels {
            log::debug!("{}", label.text);
        }
        log::debug!(
            "car {:?} at {:?} (raster {}x{})",
            frame.car.direction,
            frame.car.pos,
            frame.pixels.width(),
            frame.pixels.height()
        );
    }
}

/// Holds the throttle and steers back toward the road
fn drive(sim: &SimulationState, input: &mut InputState) {
    if !input.is_held(Key::Up) {
        input.key_pressed(Key::Up);
    }

    let drift = sim.player_curvature - sim.track_curvature;
    let steer = if drift > STEER_DEAD_ZONE {
        Some(Key::Left)
    } else if drift < -STEER_DEAD_ZONE {
        Some(Key::Right)
    } else {
        None
    };

    for key in [Key::Left, Key::Right] {
        let want = steer == Some(key);
        if want && !input.is_held(key) {
            input.key_pressed(key);
        } else if !want && input.is_held(key) {
            input.key_released(key);
        }
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let settings_path = std::env::var_os("RETRO_RACER_SETTINGS").map(PathBuf::from);
    let settings = Settings::load_or_default(settings_path.as_deref());
    settings.validate()?;

    let seconds: f64 = match std::env::var("RETRO_RACER_SECONDS") {
        Ok(s) => s.parse()?,
        Err(_) => 90.0,
    };

    let track = Track::circuit();
    log::info!(
        "Track: {} segments, {:.0} per lap",
        track.segment_count(),
        track.total_length()
    );

    let mut race = Race::new(track, &settings);
    let mut scheduler = FrameScheduler::from_settings(&settings)?;
    let mut input = InputState::new();
    let mut presenter = LogPresenter {
        frames: 0,
        every: 60,
    };
    let mut exporter = PngExporter::new(&settings.export_dir);

    let mut wall = 0.0;
    let mut frame_index = 0;
    let mut snapshot_taken = false;
    while wall < seconds {
        let dt = FRAME_PATTERN[frame_index % FRAME_PATTERN.len()];
        frame_index += 1;
        wall += dt;

        drive(&race.state().sim, &mut input);
        let report = scheduler.advance(dt, &mut race, &mut input);

        for lap in &report.laps_completed {
            log::info!("Lap time {}", retro_racer::ui::format_lap_time(*lap));
            // Tap the snapshot key once the first lap is in
            if !snapshot_taken {
                input.key_pressed(Key::Z);
                input.key_released(Key::Z);
                snapshot_taken = true;
            }
        }

        let frame = race.frame();
        presenter.present(&frame);

        if report.wants_export() {
            if report.export_requests > 1 {
                log::debug!("{} snapshot requests in one frame", report.export_requests);
            }
            if let Err(e) = exporter.export(&frame) {
                log::error!("Snapshot failed: {}", e);
            }
        }
    }

    let laps = &race.state().laps;
    log::info!(
        "Finished: {} ticks, {} laps, best {}",
        scheduler.total_ticks(),
        laps.laps_completed(),
        laps.best_lap()
            .map(retro_racer::ui::format_lap_time)
            .unwrap_or_else(|| "-".to_string())
    );
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    #[cfg(not(target_arch = "wasm32"))]
    env_logger::init();

    log::info!("Retro Racer (headless) starting...");
    run()
}
