//! The "A" letterform, the third layer, stroke-drawn by path length.
//!
//! All proportions are ratios of the minimum viewport dimension so the glyph
//! scales without distortion. The three segments are revealed in order
//! (left stroke, right stroke, crossbar); a segment only starts once the
//! previous one is fully drawn.

use crate::ease::{clamp01, ease_in_out_cubic};
use crate::geometry::{Point, Segment, SurfaceGeometry};
use crate::style::{Stroke, GLYPH};

/// Glyph height as a fraction of the minimum viewport dimension.
const GLYPH_HEIGHT: f64 = 0.34;
/// Half the base width, as a fraction of glyph height.
const HALF_BASE: f64 = 0.42;
/// Crossbar position along each leg, measured from the apex.
const CROSSBAR_AT: f64 = 0.62;
/// Inset of the inner copy, as a fraction of glyph height.
const INSET: f64 = 0.05;

/// Wide, faint pass under each segment.
const GLOW: Stroke = Stroke::solid(GLYPH, 0.18, 6.0);
/// Thin, bright pass over each segment.
const CORE: Stroke = Stroke::solid(GLYPH, 0.92, 1.5);
/// Opacity multiplier for the trailing inner copy.
const INNER_ALPHA: f64 = 0.6;

/// Vertices of one copy of the glyph.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Glyph {
    pub top: Point,
    pub left: Point,
    pub right: Point,
    pub bar_left: Point,
    pub bar_right: Point,
}

impl Glyph {
    /// Segments in drawing order: left stroke, right stroke, crossbar.
    #[must_use]
    pub fn segments(&self) -> [Segment; 3] {
        [
            Segment::new(self.top, self.left),
            Segment::new(self.top, self.right),
            Segment::new(self.bar_left, self.bar_right),
        ]
    }

    #[must_use]
    pub fn path_length(&self) -> f64 {
        self.segments().iter().map(Segment::length).sum()
    }
}

/// Outer glyph and its inset counterpart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LetterformGeometry {
    pub outer: Glyph,
    pub inner: Glyph,
}

impl LetterformGeometry {
    #[must_use]
    pub fn from_surface(geometry: &SurfaceGeometry) -> Self {
        let center = geometry.center();
        let size = geometry.min_dim() * GLYPH_HEIGHT;
        let half_base = size * HALF_BASE;
        let inset = size * INSET;

        let top = Point::new(center.x, center.y - size / 2.0);
        let left = Point::new(center.x - half_base, center.y + size / 2.0);
        let right = Point::new(center.x + half_base, center.y + size / 2.0);
        let outer = Glyph {
            top,
            left,
            right,
            bar_left: top.lerp(left, CROSSBAR_AT),
            bar_right: top.lerp(right, CROSSBAR_AT),
        };

        let top = Point::new(top.x, top.y + inset * 2.0);
        let left = Point::new(left.x + inset, left.y);
        let right = Point::new(right.x - inset, right.y);
        let inner = Glyph {
            top,
            left,
            right,
            bar_left: Point::new(outer.bar_left.x + inset, outer.bar_left.y + inset),
            bar_right: Point::new(outer.bar_right.x - inset, outer.bar_right.y + inset),
        };

        Self { outer, inner }
    }
}

/// Visible length of a path for a given (already eased) progress.
#[must_use]
pub fn visible_length(total: f64, progress: f64) -> f64 {
    total.max(0.0) * clamp01(progress)
}

/// Split `visible` length across segments in order. Each segment takes at
/// most its own length; untouched segments are omitted.
#[must_use]
pub fn reveal(segments: &[Segment], visible: f64) -> Vec<Segment> {
    let mut remaining = visible.max(0.0);
    let mut shown = Vec::with_capacity(segments.len());
    for segment in segments {
        if remaining <= 0.0 {
            break;
        }
        let len = segment.length();
        let take = len.min(remaining);
        shown.push(segment.truncated(take));
        remaining -= take;
    }
    shown
}

/// A segment stroked once.
#[derive(Debug, Clone, PartialEq)]
pub struct StrokePass {
    pub segment: Segment,
    pub stroke: Stroke,
}

/// The letterform layer for one frame.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LetterformLayer {
    pub passes: Vec<StrokePass>,
    /// Drawn length of the outer copy.
    pub outer_visible: f64,
    /// Drawn length of the inner copy.
    pub inner_visible: f64,
}

impl LetterformLayer {
    /// Derive the layer from geometry and raw (uneased) letterform progress.
    /// The inner copy runs at `trail_factor` of the outer copy's progress.
    #[must_use]
    pub fn compose(geometry: &SurfaceGeometry, progress: f64, trail_factor: f64) -> Self {
        let eased = ease_in_out_cubic(progress);
        let glyphs = LetterformGeometry::from_surface(geometry);

        let outer_visible = visible_length(glyphs.outer.path_length(), eased);
        let inner_visible = visible_length(glyphs.inner.path_length(), eased * trail_factor);

        let mut passes = Vec::new();
        push_passes(&mut passes, &reveal(&glyphs.outer.segments(), outer_visible), 1.0);
        push_passes(&mut passes, &reveal(&glyphs.inner.segments(), inner_visible), INNER_ALPHA);
        Self { passes, outer_visible, inner_visible }
    }
}

fn push_passes(out: &mut Vec<StrokePass>, segments: &[Segment], alpha_scale: f64) {
    for segment in segments {
        for base in [GLOW, CORE] {
            out.push(StrokePass {
                segment: *segment,
                stroke: Stroke { alpha: base.alpha * alpha_scale, ..base },
            });
        }
    }
}
