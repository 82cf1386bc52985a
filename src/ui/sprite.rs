//! Car sprite atlas and on-screen placement

use glam::{IVec2, UVec2};

use crate::consts::*;
use crate::sim::CarDirection;

/// Size of one car cell in the sprite sheet
pub const ATLAS_CELL: UVec2 = UVec2::new(84, 36);

/// Source rectangle of a car pose in the atlas.
/// Cells left to right: straight, right, left.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AtlasRect {
    pub origin: UVec2,
    pub size: UVec2,
}

impl AtlasRect {
    pub fn for_direction(direction: CarDirection) -> Self {
        let column = match direction {
            CarDirection::Straight => 0,
            CarDirection::Right => 1,
            CarDirection::Left => 2,
        };
        Self {
            origin: UVec2::new(column * ATLAS_CELL.x, 0),
            size: ATLAS_CELL,
        }
    }
}

/// Where and how to draw the car this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarPlacement {
    pub direction: CarDirection,
    pub source: AtlasRect,
    /// Top-left corner on the physical screen
    pub pos: IVec2,
    /// Drawn size on the physical screen
    pub size: UVec2,
}

impl CarPlacement {
    /// Place the car for lateral offset `car_pos` on a screen of `physical`
    /// pixels. Zero offset centres the car; one unit of offset moves it half a
    /// screen width.
    pub fn new(direction: CarDirection, car_pos: f32, physical: UVec2, cell: UVec2) -> Self {
        let width = physical.x as f32;
        let shift = (width * car_pos) as i32 as f32 / 2.0;
        let x = (physical.x / 2) as f32 + shift - (CAR_WIDTH_CELLS / 2 * cell.x) as f32;

        Self {
            direction,
            source: AtlasRect::for_direction(direction),
            pos: IVec2::new(x as i32, (CAR_ROW_CELLS * cell.y) as i32),
            size: UVec2::new(CAR_WIDTH_CELLS * cell.x, CAR_HEIGHT_CELLS * cell.y),
        }
    }
}
