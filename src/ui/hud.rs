//! HUD overlay text
//!
//! Labels live on a character grid; the host turns grid cells into pixels and
//! draws the text.

use glam::{IVec2, UVec2};

use crate::consts::HUD_ROW_CELLS;
use crate::sim::GameState;

/// One line of overlay text at a grid position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HudLabel {
    pub column: u32,
    pub row: u32,
    pub text: String,
}

impl HudLabel {
    pub fn new(column: u32, row: u32, text: impl Into<String>) -> Self {
        Self {
            column,
            row,
            text: text.into(),
        }
    }

    /// Top-left pixel of the label on the physical screen
    pub fn pixel_pos(&self, cell: UVec2) -> IVec2 {
        IVec2::new(
            (self.column * cell.x) as i32,
            (HUD_ROW_CELLS * self.row * cell.y) as i32,
        )
    }
}

/// Format seconds as `M.SS:mmm`
pub fn format_lap_time(seconds: f32) -> String {
    // Negative and non-finite times display as zero
    let t = if seconds.is_finite() { seconds.max(0.0) } else { 0.0 };

    let minutes = (t / 60.0) as u32;
    let secs = (t - minutes as f32 * 60.0) as u32;
    let frac = t - minutes as f32 * 60.0 - secs as f32;
    let millis = ((frac * 1000.0) as u32).min(999);

    format!("{}.{:02}:{:03}", minutes, secs.min(59), millis)
}

/// Build the full overlay for the current state
pub fn hud_labels(state: &GameState) -> Vec<HudLabel> {
    let sim = &state.sim;
    let mut labels = vec![
        HudLabel::new(0, 0, format!("Distance:         {:.2} m", sim.distance)),
        HudLabel::new(0, 1, format!("Target Curvature: {:.2}", sim.curvature)),
        HudLabel::new(0, 2, format!("Player Curvature: {:.2}", sim.player_curvature)),
        HudLabel::new(0, 3, format!("Player Speed:     {:.2} km/h", sim.speed)),
        HudLabel::new(0, 4, format!("Track Curvature:  {:.2}", sim.track_curvature)),
        HudLabel::new(
            0,
            5,
            format!("LapTime: {}", format_lap_time(state.laps.current_lap_time())),
        ),
        HudLabel::new(0, 6, "Last 5 lap: "),
    ];

    labels.extend(
        state
            .laps
            .history()
            .iter()
            .enumerate()
            .map(|(i, &t)| HudLabel::new(0, 7 + i as u32, format_lap_time(t))),
    );

    labels
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_lap_time() {
        assert_eq!(format_lap_time(0.0), "0.00:000");
        assert_eq!(format_lap_time(1.5), "0.01:500");
        assert_eq!(format_lap_time(65.25), "1.05:250");
        assert_eq!(format_lap_time(600.0), "10.00:000");
    }

    #[test]
    fn test_format_lap_time_degenerate_inputs() {
        assert_eq!(format_lap_time(-3.0), "0.00:000");
        assert_eq!(format_lap_time(f32::NAN), "0.00:000");
        assert_eq!(format_lap_time(f32::INFINITY), "0.00:000");
        // Millis never overflow three digits
        assert_eq!(format_lap_time(59.9999), "0.59:999");
    }

    #[test]
    fn test_hud_layout() {
        let mut state = GameState::new();
        state.sim.distance = 123.456;
        state.laps.update(2.5);
        state.laps.complete_lap();

        let labels = hud_labels(&state);
        assert_eq!(labels.len(), 12);
        assert_eq!(labels[0].text, "Distance:         123.46 m");
        assert_eq!(labels[5].text, "LapTime: 0.00:000");
        assert_eq!(labels[6].text, "Last 5 lap: ");
        assert_eq!(labels[7].text, "0.02:500");
        assert_eq!(labels[11].row, 11);

        // Rows are three cells apart
        let cell = UVec2::new(6, 6);
        assert_eq!(labels[0].pixel_pos(cell), IVec2::new(0, 0));
        assert_eq!(labels[2].pixel_pos(cell), IVec2::new(0, 36));
    }
}
