//! Plane primitives and the surface geometry derived from the viewport.

/// A point in logical (CSS pixel) coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn distance(self, other: Self) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    /// Point a fraction `t` of the way to `other` (unclamped).
    #[must_use]
    pub fn lerp(self, other: Self, t: f64) -> Self {
        Self::new(self.x + (other.x - self.x) * t, self.y + (other.y - self.y) * t)
    }
}

/// Axis-aligned rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    #[must_use]
    pub fn right(&self) -> f64 {
        self.x + self.width
    }
}

/// A straight line segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub from: Point,
    pub to: Point,
}

impl Segment {
    #[must_use]
    pub const fn new(from: Point, to: Point) -> Self {
        Self { from, to }
    }

    #[must_use]
    pub fn length(&self) -> f64 {
        self.from.distance(self.to)
    }

    /// The first `len` units of the segment, starting at `from`.
    /// `len` is clamped to `[0, length]`.
    #[must_use]
    pub fn truncated(&self, len: f64) -> Self {
        let total = self.length();
        if total <= 0.0 || len >= total {
            return *self;
        }
        let t = (len / total).clamp(0.0, 1.0);
        Self::new(self.from, self.from.lerp(self.to, t))
    }
}

/// Raw viewport reading: CSS size and the device's pixel ratio.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    pub device_pixel_ratio: f64,
}

impl Viewport {
    #[must_use]
    pub const fn new(width: f64, height: f64, device_pixel_ratio: f64) -> Self {
        Self { width, height, device_pixel_ratio }
    }
}

/// Display size in logical pixels plus the scaled backing-buffer size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceGeometry {
    pub width: f64,
    pub height: f64,
    pub dpr: f64,
    pub buffer_width: u32,
    pub buffer_height: u32,
}

impl SurfaceGeometry {
    /// Derive geometry from a viewport reading. The pixel ratio is capped at
    /// `max_dpr`; a missing or nonsensical ratio falls back to 1.
    #[must_use]
    pub fn from_viewport(viewport: Viewport, max_dpr: f64) -> Self {
        let width = finite_non_negative(viewport.width);
        let height = finite_non_negative(viewport.height);
        let raw = viewport.device_pixel_ratio;
        let dpr = if raw.is_finite() && raw > 0.0 { raw.min(max_dpr.max(1.0)) } else { 1.0 };
        Self {
            width,
            height,
            dpr,
            buffer_width: to_buffer(width * dpr),
            buffer_height: to_buffer(height * dpr),
        }
    }

    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }

    #[must_use]
    pub fn min_dim(&self) -> f64 {
        self.width.min(self.height)
    }

    /// Distance from the center to a corner.
    #[must_use]
    pub fn half_diagonal(&self) -> f64 {
        (self.width / 2.0).hypot(self.height / 2.0)
    }

    #[must_use]
    pub fn bounds(&self) -> Rect {
        Rect::new(0.0, 0.0, self.width, self.height)
    }
}

fn finite_non_negative(v: f64) -> f64 {
    if v.is_finite() { v.max(0.0) } else { 0.0 }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_buffer(v: f64) -> u32 {
    v.round().clamp(0.0, f64::from(u32::MAX)) as u32
}
