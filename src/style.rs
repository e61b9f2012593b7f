//! Colours and stroke parameters.

/// An opaque sRGB colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// CSS colour string with the given alpha, e.g. `rgba(10, 10, 12, 0.5)`.
    #[must_use]
    pub fn css(self, alpha: f64) -> String {
        let Self(r, g, b) = self;
        format!("rgba({r}, {g}, {b}, {:.3})", crate::ease::clamp01(alpha))
    }
}

/// Page background behind every layer.
pub const BACKGROUND: Rgb = Rgb(8, 9, 12);

/// Ink for grid, rings and scaffolding.
pub const LINE: Rgb = Rgb(214, 220, 230);

/// Ink for the letterform strokes.
pub const GLYPH: Rgb = Rgb(246, 248, 252);

/// How a path is stroked.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub color: Rgb,
    pub alpha: f64,
    pub width: f64,
    /// `[dash, gap]` in logical pixels; `None` is a solid line.
    pub dash: Option<[f64; 2]>,
}

impl Stroke {
    #[must_use]
    pub const fn solid(color: Rgb, alpha: f64, width: f64) -> Self {
        Self { color, alpha, width, dash: None }
    }

    #[must_use]
    pub const fn dashed(self, dash: f64, gap: f64) -> Self {
        Self { dash: Some([dash, gap]), ..self }
    }
}
