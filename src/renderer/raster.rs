//! Pseudo-3D road rasterizer
//!
//! Every frame is rebuilt from scratch, row by row, out of a handful of
//! scalars: the eased road curvature bends the road, the accumulated track
//! curvature scrolls the hills, and the lap distance scrolls the stripes.
//! No geometry is stored.

use super::pixel::{PixelBuffer, Rgba, palette};
use crate::consts::*;
use crate::sim::SimulationState;

/// Horizontal extent of one road row, in pixel columns.
///
/// Bands left to right: grass `[0, left_grass)`, clip `[left_grass, left_clip)`,
/// road `[left_clip, right_clip)`, clip `[right_clip, right_grass)`,
/// grass `[right_grass, W)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowBands {
    pub left_grass: i32,
    pub left_clip: i32,
    pub right_clip: i32,
    pub right_grass: i32,
}

impl RowBands {
    /// Band boundaries for a row at `perspective` (0 at horizon, 1 at bottom)
    pub fn compute(perspective: f32, curvature: f32, width: u32) -> Self {
        let full = ROAD_MIN_WIDTH + perspective * ROAD_WIDTH_RANGE;
        let clip = full * CLIP_RATIO;
        let half = full * 0.5;
        let middle = 0.5 + curvature * (1.0 - perspective).powi(3);

        let w = width as f32;
        Self {
            left_grass: ((middle - half - clip) * w) as i32,
            left_clip: ((middle - half) * w) as i32,
            right_clip: ((middle + half) * w) as i32,
            right_grass: ((middle + half + clip) * w) as i32,
        }
    }
}

/// Rebuild the whole scene into `buffer`
pub fn rasterize(buffer: &mut PixelBuffer, sim: &SimulationState) {
    buffer.fill(palette::BACKGROUND);

    let width = buffer.width();
    let half = buffer.height() / 2;
    let quarter = buffer.height() / 4;

    for (y, row) in buffer.rows_mut().enumerate().take(half as usize) {
        row.fill(if (y as u32) < quarter {
            palette::SKY_HIGH
        } else {
            palette::SKY_LOW
        });
    }

    draw_hills(buffer, sim.track_curvature, half);
    draw_road(buffer, sim, width, half);
}

/// Rectified sine silhouette sitting on the horizon, phase-shifted by the
/// accumulated track curvature
fn draw_hills(buffer: &mut PixelBuffer, track_curvature: f32, horizon: u32) {
    let width = buffer.width() as usize;
    let heights: Vec<u32> = (0..width)
        .map(|x| ((x as f32 * HILL_FREQUENCY + track_curvature).sin() * HILL_HEIGHT).abs() as u32)
        .collect();

    for (y, row) in buffer.rows_mut().enumerate().take(horizon as usize) {
        let rows_above_horizon = horizon - y as u32;
        for (pixel, &hill) in row.iter_mut().zip(&heights) {
            if hill >= rows_above_horizon {
                *pixel = palette::HILLS;
            }
        }
    }
}

fn draw_road(buffer: &mut PixelBuffer, sim: &SimulationState, width: u32, horizon: u32) {
    let road = if sim.on_start_straight() {
        palette::ROAD_START
    } else {
        palette::ROAD
    };
    let depth = buffer.height() as f32 / 2.0;
    let w = width as i32;

    for (y, row) in buffer
        .rows_mut()
        .skip(horizon as usize)
        .take(horizon as usize)
        .enumerate()
    {
        let perspective = y as f32 / depth;
        let bands = RowBands::compute(perspective, sim.curvature, width);

        // Stripe phase moves with lap distance so the verge scrolls past
        let far = 1.0 - perspective;
        let grass = if (20.0 * far.powi(3) + sim.distance * 0.1).sin() > 0.0 {
            palette::GRASS_LIGHT
        } else {
            palette::GRASS_DARK
        };
        let clip = if (80.0 * far.powi(2) + sim.distance).sin() > 0.0 {
            palette::CLIP_RED
        } else {
            palette::CLIP_WHITE
        };

        let edges = [
            0,
            bands.left_grass.clamp(0, w),
            bands.left_clip.clamp(0, w),
            bands.right_clip.clamp(0, w),
            bands.right_grass.clamp(0, w),
            w,
        ];
        let colors: [Rgba; 5] = [grass, clip, road, clip, grass];
        for (span, color) in edges.windows(2).zip(colors) {
            let (start, end) = (span[0] as usize, span[1] as usize);
            if start < end {
                row[start..end].fill(color);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(
        curvature: f32,
        track_curvature: f32,
        distance: f32,
        segment_index: usize,
    ) -> SimulationState {
        SimulationState {
            curvature,
            track_curvature,
            distance,
            segment_index,
            ..Default::default()
        }
    }

    fn render(sim: &SimulationState, w: u32, h: u32) -> PixelBuffer {
        let mut buf = PixelBuffer::new(w, h);
        rasterize(&mut buf, sim);
        buf
    }

    #[test]
    fn test_render_is_deterministic() {
        let sim = state(0.37, -2.5, 812.25, 4);
        let a = render(&sim, 160, 100);
        let b = render(&sim, 160, 100);
        assert_eq!(a.as_bytes(), b.as_bytes());

        // Reusing a dirty buffer gives the same bytes
        let mut c = render(&state(-1.0, 9.0, 3.0, 0), 160, 100);
        rasterize(&mut c, &sim);
        assert_eq!(a.as_bytes(), c.as_bytes());
    }

    #[test]
    fn test_sky_bands() {
        // Hills stay under 16 rows, so the top rows are pure sky
        let buf = render(&state(0.0, 0.0, 0.0, 1), 160, 100);
        assert_eq!(buf.get(10, 0), Some(palette::SKY_HIGH));
        assert_eq!(buf.get(10, 24), Some(palette::SKY_HIGH));
        assert_eq!(buf.get(10, 25), Some(palette::SKY_LOW));
        assert_eq!(buf.get(10, 33), Some(palette::SKY_LOW));
    }

    #[test]
    fn test_hills_follow_track_curvature() {
        // sin(0) = 0: no hill at column 0
        let flat = render(&state(0.0, 0.0, 0.0, 1), 160, 100);
        assert_eq!(flat.get(0, 49), Some(palette::SKY_LOW));

        // sin(pi/2) = 1: full 16-row hill at column 0
        let peak = render(&state(0.0, std::f32::consts::FRAC_PI_2, 0.0, 1), 160, 100);
        assert_eq!(peak.get(0, 49), Some(palette::HILLS));
        assert_eq!(peak.get(0, 35), Some(palette::HILLS));
        assert_eq!(peak.get(0, 33), Some(palette::SKY_LOW));
    }

    #[test]
    fn test_road_color_marks_start_straight() {
        let start = render(&state(0.0, 0.0, 0.0, 0), 160, 100);
        let later = render(&state(0.0, 0.0, 0.0, 3), 160, 100);
        assert_eq!(start.get(80, 99), Some(palette::ROAD_START));
        assert_eq!(later.get(80, 99), Some(palette::ROAD));
    }

    #[test]
    fn test_row_band_layout() {
        let buf = render(&state(0.0, 0.0, 0.0, 2), 160, 100);
        // Screen row 75 is road row 25, halfway down the road
        let bands = RowBands::compute(25.0 / 50.0, 0.0, 160);
        assert!(0 < bands.left_grass && bands.right_grass < 160);

        let grass = buf.get(0, 75).unwrap();
        assert!(grass == palette::GRASS_LIGHT || grass == palette::GRASS_DARK);
        let clip = buf.get(bands.left_grass as u32, 75).unwrap();
        assert!(clip == palette::CLIP_RED || clip == palette::CLIP_WHITE);
        assert_eq!(buf.get(bands.right_clip as u32, 75), Some(clip));
        assert_eq!(buf.get(bands.left_clip as u32, 75), Some(palette::ROAD));
        assert_eq!(buf.get(bands.right_clip as u32 - 1, 75), Some(palette::ROAD));
        assert_eq!(buf.get(bands.right_grass as u32, 75), Some(grass));
        assert_eq!(buf.get(159, 75), Some(grass));
    }

    #[test]
    fn test_stripe_colors_follow_phase() {
        // Row 75 has 1 - p = 0.5: grass phase 2.5 + 0.1d, clip phase 20 + d
        let bands = RowBands::compute(0.5, 0.0, 160);
        let clip_x = bands.left_grass as u32;

        // d = 0: sin(2.5) > 0 and sin(20) > 0
        let buf = render(&state(0.0, 0.0, 0.0, 2), 160, 100);
        assert_eq!(buf.get(0, 75), Some(palette::GRASS_LIGHT));
        assert_eq!(buf.get(clip_x, 75), Some(palette::CLIP_RED));

        // d = 10: sin(3.5) < 0 and sin(30) < 0
        let buf = render(&state(0.0, 0.0, 10.0, 2), 160, 100);
        assert_eq!(buf.get(0, 75), Some(palette::GRASS_DARK));
        assert_eq!(buf.get(clip_x, 75), Some(palette::CLIP_WHITE));
        assert_eq!(buf.get(bands.right_clip as u32, 75), Some(palette::CLIP_WHITE));
        assert_eq!(buf.get(159, 75), Some(palette::GRASS_DARK));
    }

    #[test]
    fn test_bottom_row_grass_runs_off_screen() {
        // Near rows are wider than the screen minus the verge
        let bands = RowBands::compute(49.0 / 50.0, 0.0, 160);
        assert!(bands.left_grass < 0);
        let buf = render(&state(0.0, 0.0, 0.0, 2), 160, 100);
        let edge = buf.get(0, 99).unwrap();
        assert!(edge == palette::CLIP_RED || edge == palette::CLIP_WHITE);
    }

    #[test]
    fn test_curvature_shifts_far_rows_only() {
        let straight = RowBands::compute(0.0, 0.0, 160);
        let bent = RowBands::compute(0.0, 0.5, 160);
        assert!(bent.left_clip > straight.left_clip);

        let near_straight = RowBands::compute(1.0, 0.0, 160);
        let near_bent = RowBands::compute(1.0, 0.5, 160);
        assert_eq!(near_straight, near_bent);
    }

    #[test]
    fn test_road_off_screen_is_clipped() {
        // Strong bend pushes the far road off the right edge without panicking
        let buf = render(&state(3.0, 0.0, 0.0, 1), 160, 100);
        let g = buf.get(159, 50).unwrap();
        assert!(g == palette::GRASS_LIGHT || g == palette::GRASS_DARK);
    }

    #[test]
    fn test_odd_height_leaves_background_row() {
        let buf = render(&state(0.0, 0.0, 0.0, 1), 40, 21);
        assert_eq!(buf.get(20, 20), Some(palette::BACKGROUND));
    }

    #[test]
    fn test_stripes_scroll_with_distance() {
        let a = render(&state(0.0, 0.0, 0.0, 1), 160, 100);
        let b = render(&state(0.0, 0.0, 1.5, 1), 160, 100);
        assert_ne!(a.as_bytes(), b.as_bytes());
    }
}
