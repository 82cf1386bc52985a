//! Lap timing
//!
//! Tracks the running lap and a rolling history of the last few laps,
//! newest first.

use serde::{Deserialize, Serialize};

use crate::consts::LAP_HISTORY_LEN;

/// Current lap clock plus fixed-size lap history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LapTimer {
    /// Seconds since the current lap started
    current: f32,
    /// Completed lap times, newest first (zero-seeded)
    history: [f32; LAP_HISTORY_LEN],
    /// Laps completed since the race started
    laps_completed: u32,
}

impl Default for LapTimer {
    fn default() -> Self {
        Self::new()
    }
}

impl LapTimer {
    pub fn new() -> Self {
        Self {
            current: 0.0,
            history: [0.0; LAP_HISTORY_LEN],
            laps_completed: 0,
        }
    }

    /// Advance the running lap clock
    #[inline]
    pub fn update(&mut self, dt: f32) {
        self.current += dt;
    }

    /// Close the running lap: push it to the front of the history, drop the
    /// oldest entry and restart the clock. Returns the completed lap time.
    pub fn complete_lap(&mut self) -> f32 {
        let lap = self.current;
        self.history.rotate_right(1);
        self.history[0] = lap;
        self.current = 0.0;
        self.laps_completed += 1;
        lap
    }

    pub fn current_lap_time(&self) -> f32 {
        self.current
    }

    /// Last laps, newest first. Always `LAP_HISTORY_LEN` entries.
    pub fn history(&self) -> &[f32; LAP_HISTORY_LEN] {
        &self.history
    }

    pub fn laps_completed(&self) -> u32 {
        self.laps_completed
    }

    /// Fastest lap still in the history (zero seeds don't count)
    pub fn best_lap(&self) -> Option<f32> {
        self.history
            .iter()
            .copied()
            .filter(|&t| t > 0.0)
            .min_by(|a, b| a.total_cmp(b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_history_starts_zeroed() {
        let timer = LapTimer::new();
        assert_eq!(timer.history(), &[0.0; LAP_HISTORY_LEN]);
        assert_eq!(timer.current_lap_time(), 0.0);
        assert_eq!(timer.best_lap(), None);
    }

    #[test]
    fn test_complete_lap_pushes_front() {
        let mut timer = LapTimer::new();
        timer.update(1.5);
        timer.update(0.5);
        assert_eq!(timer.complete_lap(), 2.0);
        assert_eq!(timer.current_lap_time(), 0.0);
        assert_eq!(timer.history(), &[2.0, 0.0, 0.0, 0.0, 0.0]);

        timer.update(3.0);
        timer.complete_lap();
        assert_eq!(timer.history(), &[3.0, 2.0, 0.0, 0.0, 0.0]);
        assert_eq!(timer.laps_completed(), 2);
    }

    #[test]
    fn test_oldest_lap_drops_off() {
        let mut timer = LapTimer::new();
        for lap in 1..=7 {
            timer.update(lap as f32);
            timer.complete_lap();
        }
        // Newest first, laps 1 and 2 gone
        assert_eq!(timer.history(), &[7.0, 6.0, 5.0, 4.0, 3.0]);
        assert_eq!(timer.history().len(), LAP_HISTORY_LEN);
        assert_eq!(timer.best_lap(), Some(3.0));
    }
}
