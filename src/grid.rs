//! Grid reveal and radial rings, the first layer.
//!
//! A reveal radius grows from the surface center. Grid lines closer to the
//! center than the radius are visible; lines near the reveal edge are drawn
//! at the "active" opacity and settle towards a faint one as the edge moves
//! past them. Four concentric arcs sweep clockwise from 12 o'clock.

use std::f64::consts::{FRAC_PI_2, TAU};

use crate::ease::{clamp01, ease_out_cubic, lerp};
use crate::geometry::{Point, Segment, SurfaceGeometry};
use crate::style::{Stroke, LINE};

/// Spacing between grid lines, logical pixels.
pub const GRID_SPACING: f64 = 48.0;

/// Width of the band behind the reveal edge over which lines settle.
const ACTIVE_BAND: f64 = GRID_SPACING * 3.0;

const GRID_SETTLED_ALPHA: f64 = 0.06;
const GRID_ACTIVE_ALPHA: f64 = 0.32;
const GRID_LINE_WIDTH: f64 = 1.0;

/// Ring radii as fractions of the minimum viewport dimension, inner first.
pub const RING_RADII: [f64; 4] = [0.14, 0.22, 0.30, 0.38];

const RING_BASE_ALPHA: f64 = 0.08;
const RING_ACTIVE_ALPHA: f64 = 0.42;
const RING_LINE_WIDTH: f64 = 1.0;
const RING_DASH: f64 = 4.0;
const RING_GAP: f64 = 7.0;

/// Angle of 12 o'clock in canvas coordinates (y grows downward).
pub const RING_START_ANGLE: f64 = -FRAC_PI_2;

/// A visible grid line.
#[derive(Debug, Clone, PartialEq)]
pub struct GridLine {
    pub segment: Segment,
    pub stroke: Stroke,
}

/// A partially swept ring.
#[derive(Debug, Clone, PartialEq)]
pub struct RingArc {
    pub center: Point,
    pub radius: f64,
    pub start_angle: f64,
    pub end_angle: f64,
    pub stroke: Stroke,
}

/// The grid layer for one frame.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GridLayer {
    pub reveal_radius: f64,
    pub lines: Vec<GridLine>,
    pub rings: Vec<RingArc>,
}

impl GridLayer {
    /// Derive the layer from geometry and raw (uneased) grid progress.
    #[must_use]
    pub fn compose(geometry: &SurfaceGeometry, progress: f64) -> Self {
        let eased = ease_out_cubic(progress);
        let reveal_radius = eased * geometry.half_diagonal();
        Self {
            reveal_radius,
            lines: grid_lines(geometry, reveal_radius),
            rings: ring_arcs(geometry, eased),
        }
    }
}

/// Opacity of a line at `distance` from the center for a given reveal
/// radius, or `None` if the line is not yet revealed.
#[must_use]
pub fn line_alpha(distance: f64, reveal_radius: f64) -> Option<f64> {
    if distance >= reveal_radius {
        return None;
    }
    let behind_edge = reveal_radius - distance;
    let activity = 1.0 - clamp01(behind_edge / ACTIVE_BAND);
    Some(lerp(GRID_SETTLED_ALPHA, GRID_ACTIVE_ALPHA, activity))
}

fn grid_lines(geometry: &SurfaceGeometry, reveal_radius: f64) -> Vec<GridLine> {
    let mut lines = Vec::new();
    if reveal_radius <= 0.0 || geometry.width <= 0.0 || geometry.height <= 0.0 {
        return lines;
    }
    let center = geometry.center();

    // Lines are laid out symmetrically from the center so the reveal reads
    // as a circle regardless of aspect ratio.
    for offset in symmetric_offsets(geometry.width / 2.0) {
        if let Some(alpha) = line_alpha(offset.abs(), reveal_radius) {
            let x = center.x + offset;
            lines.push(GridLine {
                segment: Segment::new(Point::new(x, 0.0), Point::new(x, geometry.height)),
                stroke: Stroke::solid(LINE, alpha, GRID_LINE_WIDTH),
            });
        }
    }
    for offset in symmetric_offsets(geometry.height / 2.0) {
        if let Some(alpha) = line_alpha(offset.abs(), reveal_radius) {
            let y = center.y + offset;
            lines.push(GridLine {
                segment: Segment::new(Point::new(0.0, y), Point::new(geometry.width, y)),
                stroke: Stroke::solid(LINE, alpha, GRID_LINE_WIDTH),
            });
        }
    }
    lines
}

/// `0, +s, -s, +2s, -2s, …` up to `half_extent`.
fn symmetric_offsets(half_extent: f64) -> impl Iterator<Item = f64> {
    let steps = (half_extent / GRID_SPACING).floor();
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let steps = if steps.is_finite() && steps > 0.0 { steps as u32 } else { 0 };
    std::iter::once(0.0).chain((1..=steps).flat_map(|k| {
        let d = f64::from(k) * GRID_SPACING;
        [d, -d]
    }))
}

fn ring_arcs(geometry: &SurfaceGeometry, eased: f64) -> Vec<RingArc> {
    if eased <= 0.0 {
        return Vec::new();
    }
    let center = geometry.center();
    let min_dim = geometry.min_dim();
    let sweep = eased * TAU;
    let alpha = lerp(RING_BASE_ALPHA, RING_ACTIVE_ALPHA, eased);
    let outermost = RING_RADII.len() - 1;

    RING_RADII
        .iter()
        .enumerate()
        .map(|(i, ratio)| {
            let stroke = Stroke::solid(LINE, alpha, RING_LINE_WIDTH);
            RingArc {
                center,
                radius: ratio * min_dim,
                start_angle: RING_START_ANGLE,
                end_angle: RING_START_ANGLE + sweep,
                stroke: if i == outermost { stroke.dashed(RING_DASH, RING_GAP) } else { stroke },
            }
        })
        .collect()
}
