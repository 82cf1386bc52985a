//! Fixed-rate frame scheduler
//!
//! The host calls [`FrameScheduler::advance`] once per wall-clock frame with
//! the elapsed time. Time piles up in an accumulator and is spent in whole
//! fixed ticks, so the simulation runs at the same logical rate no matter how
//! often (or how late) the host calls in.
//!
//! Wall time is kept in `f64`. The number of ticks a frame pays for is worked
//! out once per frame, so a huge delta still yields the exact tick count.

use thiserror::Error;

use crate::platform::InputState;
use crate::sim::{InputSnapshot, TickEvents};

/// Something that advances by one fixed tick
pub trait FixedStep {
    fn fixed_step(&mut self, input: &InputSnapshot) -> TickEvents;
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SchedulerError {
    #[error("tick period must be finite and positive, got {0}")]
    InvalidPeriod(f64),
}

/// Scheduler state between host callbacks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SchedulerPhase {
    /// Waiting for the next wall-clock delta
    #[default]
    Idle,
    /// Running fixed ticks to spend the accumulator
    CatchingUp,
}

/// Summary of one host frame
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameReport {
    /// Fixed ticks run during this frame
    pub ticks: u64,
    /// Lap times closed during this frame, oldest first
    pub laps_completed: Vec<f32>,
    /// Number of ticks that asked for a scene export
    pub export_requests: u32,
    /// Backlog dropped because the catch-up cap was hit
    pub dropped_time: f64,
}

impl FrameReport {
    /// One snapshot covers every export request raised during the frame
    pub fn wants_export(&self) -> bool {
        self.export_requests > 0
    }
}

#[derive(Debug, Clone)]
pub struct FrameScheduler {
    tick_period: f64,
    accumulator: f64,
    max_catch_up: Option<u32>,
    phase: SchedulerPhase,
    total_ticks: u64,
}

impl FrameScheduler {
    pub fn new(tick_period: f64) -> Result<Self, SchedulerError> {
        if !tick_period.is_finite() || tick_period <= 0.0 {
            return Err(SchedulerError::InvalidPeriod(tick_period));
        }
        Ok(Self {
            tick_period,
            accumulator: 0.0,
            max_catch_up: None,
            phase: SchedulerPhase::Idle,
            total_ticks: 0,
        })
    }

    /// Cap the ticks run per host frame
    pub fn with_max_catch_up(mut self, max_ticks: Option<u32>) -> Self {
        self.max_catch_up = max_ticks;
        self
    }

    pub fn from_settings(settings: &crate::Settings) -> Result<Self, SchedulerError> {
        let period = 1.0 / f64::from(settings.tick_rate_hz);
        Ok(Self::new(period)?.with_max_catch_up(settings.max_catch_up_ticks))
    }

    pub fn tick_period(&self) -> f64 {
        self.tick_period
    }

    /// Unspent wall time
    pub fn accumulator(&self) -> f64 {
        self.accumulator
    }

    pub fn phase(&self) -> SchedulerPhase {
        self.phase
    }

    pub fn total_ticks(&self) -> u64 {
        self.total_ticks
    }

    /// Ticks the accumulator pays for: spend while strictly more than one
    /// period is banked.
    fn due_ticks(&self) -> u64 {
        if self.accumulator <= self.tick_period {
            return 0;
        }
        let due = (self.accumulator / self.tick_period).ceil() - 1.0;
        due.max(1.0) as u64
    }

    /// Feed one host frame's elapsed wall time and run the ticks it pays for
    pub fn advance<S: FixedStep>(
        &mut self,
        wall_dt: f64,
        stepper: &mut S,
        input: &mut InputState,
    ) -> FrameReport {
        let mut report = FrameReport::default();
        if wall_dt.is_finite() {
            self.accumulator += wall_dt.max(0.0);
        }

        let due = self.due_ticks();
        let run = match self.max_catch_up {
            Some(max) => due.min(u64::from(max)),
            None => due,
        };

        self.phase = SchedulerPhase::CatchingUp;
        for _ in 0..run {
            let snapshot = input.snapshot();
            let events = stepper.fixed_step(&snapshot);
            input.clear_transient();

            if let Some(lap) = events.lap_completed {
                report.laps_completed.push(lap);
            }
            if events.export_requested {
                report.export_requests += 1;
            }
        }
        self.phase = SchedulerPhase::Idle;

        report.ticks = run;
        self.total_ticks += run;
        self.accumulator = (self.accumulator - run as f64 * self.tick_period).max(0.0);

        if run < due {
            // Keep one period so the next frame isn't a burst
            report.dropped_time = self.accumulator - self.tick_period;
            self.accumulator = self.tick_period;
            log::warn!(
                "Catch-up cap of {} ticks hit, dropping {:.3}s of backlog",
                run,
                report.dropped_time
            );
        }

        if run > 1 {
            log::debug!("Caught up {} ticks in one frame", run);
        }
        report
    }
}
