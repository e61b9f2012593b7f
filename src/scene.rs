//! One frame's worth of drawing, composed from the three layers.

use crate::geometry::SurfaceGeometry;
use crate::grid::GridLayer;
use crate::letterform::LetterformLayer;
use crate::scaffold::ScaffoldLayer;
use crate::style::{Rgb, BACKGROUND};
use crate::timeline::PhaseProgress;

/// Everything needed to paint a frame. Layers are painted in field order.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub background: Rgb,
    pub grid: GridLayer,
    pub scaffold: ScaffoldLayer,
    pub letterform: LetterformLayer,
}

impl Scene {
    #[must_use]
    pub fn compose(geometry: &SurfaceGeometry, progress: PhaseProgress, trail_factor: f64) -> Self {
        Self {
            background: BACKGROUND,
            grid: GridLayer::compose(geometry, progress.grid),
            scaffold: ScaffoldLayer::compose(geometry, progress.scaffold),
            letterform: LetterformLayer::compose(geometry, progress.letterform, trail_factor),
        }
    }

    /// True when nothing but the background would be painted.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.grid.lines.is_empty()
            && self.grid.rings.is_empty()
            && self.scaffold.line_count() == 0
            && self.letterform.passes.is_empty()
    }
}
