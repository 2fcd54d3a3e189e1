use serde::{Deserialize, Serialize};
use strata_calendar::GridCell;
use strata_geom::{Polygon, Vec2};

use crate::face::PrismFaces;

pub const DEFAULT_HALF_WIDTH: f32 = 12.0;
pub const DEFAULT_HALF_HEIGHT: f32 = 7.0;

/// Fixed isometric transform. Columns (weeks) run diagonally down-right and
/// rows (weekdays) diagonally down-left:
///
/// `x = (column - row) * half_width`, `y = (column + row) * half_height`.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IsoProjector {
    pub half_width: f32,
    pub half_height: f32,
}

impl Default for IsoProjector {
    fn default() -> Self {
        Self {
            half_width: DEFAULT_HALF_WIDTH,
            half_height: DEFAULT_HALF_HEIGHT,
        }
    }
}

impl IsoProjector {
    pub const fn new(half_width: f32, half_height: f32) -> Self {
        Self {
            half_width,
            half_height,
        }
    }

    #[inline]
    pub fn project(&self, column: u32, row: u8) -> Vec2 {
        let c = column as f32;
        let r = row as f32;
        Vec2::new((c - r) * self.half_width, (c + r) * self.half_height)
    }

    #[inline]
    pub fn project_cell(&self, cell: GridCell) -> Vec2 {
        self.project(cell.column, cell.row)
    }

    /// Faces of a prism whose ground diamond has its back corner at `origin`.
    #[inline]
    pub fn faces(&self, origin: Vec2, height: f32) -> PrismFaces {
        prism_faces(origin.x, origin.y, height, self.half_width, self.half_height)
    }
}

/// Faces of a prism extruded `height` pixels up from the diamond whose back
/// corner is `(x, y)`.
///
/// The top diamond sits at elevation `-height`; each side face joins one of the
/// top's two front edges down to the ground plane. A zero height yields only
/// the flat ground diamond.
pub fn prism_faces(x: f32, y: f32, height: f32, half_width: f32, half_height: f32) -> PrismFaces {
    let (w, h, z) = (half_width, half_height, height);
    let top = Polygon::new(vec![
        Vec2::new(x, y - z),
        Vec2::new(x + w, y + h - z),
        Vec2::new(x, y + 2.0 * h - z),
        Vec2::new(x - w, y + h - z),
    ]);
    if z <= 0.0 {
        return PrismFaces {
            top,
            left: None,
            right: None,
        };
    }
    let right = Polygon::new(vec![
        Vec2::new(x + w, y + h - z),
        Vec2::new(x + w, y + h),
        Vec2::new(x, y + 2.0 * h),
        Vec2::new(x, y + 2.0 * h - z),
    ]);
    let left = Polygon::new(vec![
        Vec2::new(x - w, y + h - z),
        Vec2::new(x - w, y + h),
        Vec2::new(x, y + 2.0 * h),
        Vec2::new(x, y + 2.0 * h - z),
    ]);
    PrismFaces {
        top,
        left: Some(left),
        right: Some(right),
    }
}
