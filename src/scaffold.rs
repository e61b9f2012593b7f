//! Diagonal scaffolding, the second layer.
//!
//! Groups of parallel slanted lines sit in horizontal bands, each band
//! shifted down from the previous one. They show through a window whose right
//! edge sweeps across the surface; anything right of the edge is clipped.

use crate::ease::{ease_in_out_cubic, lerp};
use crate::geometry::{Point, Rect, Segment, SurfaceGeometry};
use crate::style::{Stroke, LINE};

/// Slant of every scaffold line, measured from the horizontal.
pub const SLANT_DEGREES: f64 = 60.0;

/// Horizontal distance between neighbouring lines in a group.
pub const LINE_SPACING: f64 = 18.0;

/// Number of staggered groups.
pub const GROUP_COUNT: usize = 3;

/// Band height as a fraction of surface height.
const BAND_HEIGHT: f64 = 0.16;
/// Top of the first band, fraction of surface height.
const FIRST_BAND_TOP: f64 = 0.2;
/// Vertical step between band tops, fraction of surface height.
const BAND_STEP: f64 = 0.24;
/// Horizontal phase shift between groups so lines do not align vertically.
const GROUP_PHASE: f64 = LINE_SPACING / 3.0;

const LOW_ALPHA: f64 = 0.05;
const HIGH_ALPHA: f64 = 0.24;
const LINE_WIDTH: f64 = 1.0;

/// One band of parallel lines.
#[derive(Debug, Clone, PartialEq)]
pub struct ScaffoldGroup {
    pub top: f64,
    pub bottom: f64,
    pub lines: Vec<Segment>,
}

/// The scaffold layer for one frame.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ScaffoldLayer {
    /// Lines are only painted inside this rectangle.
    pub window: Rect,
    pub groups: Vec<ScaffoldGroup>,
    pub stroke: Option<Stroke>,
}

impl ScaffoldLayer {
    /// Derive the layer from geometry and raw (uneased) scaffold progress.
    #[must_use]
    pub fn compose(geometry: &SurfaceGeometry, progress: f64) -> Self {
        let eased = ease_in_out_cubic(progress);
        let run = slant_run(geometry.height * BAND_HEIGHT);
        let window = reveal_window(geometry, eased, run);
        if window.width <= 0.0 {
            return Self { window, ..Self::default() };
        }

        let groups = (0..GROUP_COUNT)
            .map(|index| group(geometry, index, run, window.right()))
            .collect();
        Self {
            window,
            groups,
            stroke: Some(Stroke::solid(LINE, lerp(LOW_ALPHA, HIGH_ALPHA, eased), LINE_WIDTH)),
        }
    }

    /// Count of lines across all groups.
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.groups.iter().map(|g| g.lines.len()).sum()
    }
}

/// Horizontal run of a slanted line spanning `rise` vertically.
fn slant_run(rise: f64) -> f64 {
    rise / SLANT_DEGREES.to_radians().tan()
}

/// Window from the far left (including the overhang of slanted lines) to the
/// sweeping edge. The edge starts one run left of the surface and ends one
/// run past the right edge.
#[must_use]
pub fn reveal_window(geometry: &SurfaceGeometry, eased: f64, run: f64) -> Rect {
    let left = -run;
    let edge = lerp(-run, geometry.width + run, eased);
    Rect::new(left, 0.0, (edge - left).max(0.0), geometry.height)
}

#[allow(clippy::cast_precision_loss)]
fn group(geometry: &SurfaceGeometry, index: usize, run: f64, edge: f64) -> ScaffoldGroup {
    let top = geometry.height * (FIRST_BAND_TOP + BAND_STEP * index as f64);
    let bottom = top + geometry.height * BAND_HEIGHT;

    let mut lines = Vec::new();
    let mut x = -run + GROUP_PHASE * index as f64;
    while x <= geometry.width {
        // Hard clip: a line whose leftmost point is past the edge is skipped.
        if x >= edge {
            break;
        }
        lines.push(Segment::new(Point::new(x, bottom), Point::new(x + run, top)));
        x += LINE_SPACING;
    }
    ScaffoldGroup { top, bottom, lines }
}
