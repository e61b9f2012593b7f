//! Replaying a [`Scene`] onto a drawing surface.
//!
//! [`Surface`] is the only seam between the loader and a real raster target.
//! The browser implements it over `CanvasRenderingContext2d`; [`Recorder`]
//! captures the calls so painting can be checked without one.

use std::convert::Infallible;

use crate::geometry::{Point, Rect, SurfaceGeometry};
use crate::scene::Scene;
use crate::style::{Rgb, Stroke};

/// A sink for draw commands, in logical pixel coordinates.
pub trait Surface {
    type Error;

    /// Adopt new display and buffer dimensions.
    fn resize(&mut self, geometry: &SurfaceGeometry) -> Result<(), Self::Error>;

    /// Fill the whole surface with a solid colour.
    fn clear(&mut self, color: Rgb) -> Result<(), Self::Error>;

    fn line(&mut self, from: Point, to: Point, stroke: &Stroke) -> Result<(), Self::Error>;

    /// Clockwise arc; angles in radians, 0 pointing right.
    fn arc(
        &mut self,
        center: Point,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
        stroke: &Stroke,
    ) -> Result<(), Self::Error>;

    /// Restrict subsequent drawing to `rect` until [`Surface::pop_clip`].
    fn push_clip(&mut self, rect: Rect) -> Result<(), Self::Error>;

    fn pop_clip(&mut self) -> Result<(), Self::Error>;
}

/// Paint a full frame: background, then grid, scaffold and letterform.
///
/// # Errors
///
/// Returns the first error reported by the surface.
pub fn paint<S: Surface>(surface: &mut S, scene: &Scene) -> Result<(), S::Error> {
    surface.clear(scene.background)?;

    for line in &scene.grid.lines {
        surface.line(line.segment.from, line.segment.to, &line.stroke)?;
    }
    for ring in &scene.grid.rings {
        surface.arc(ring.center, ring.radius, ring.start_angle, ring.end_angle, &ring.stroke)?;
    }

    if let Some(stroke) = &scene.scaffold.stroke {
        surface.push_clip(scene.scaffold.window)?;
        for group in &scene.scaffold.groups {
            for segment in &group.lines {
                surface.line(segment.from, segment.to, stroke)?;
            }
        }
        surface.pop_clip()?;
    }

    for pass in &scene.letterform.passes {
        surface.line(pass.segment.from, pass.segment.to, &pass.stroke)?;
    }
    Ok(())
}

/// A recorded draw command.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Resize(SurfaceGeometry),
    Clear(Rgb),
    Line { from: Point, to: Point, stroke: Stroke },
    Arc { center: Point, radius: f64, start_angle: f64, end_angle: f64, stroke: Stroke },
    PushClip(Rect),
    PopClip,
}

/// Surface that records every command it receives.
#[derive(Debug, Clone, Default)]
pub struct Recorder {
    pub commands: Vec<Command>,
}

impl Recorder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of `Clear` commands, i.e. frames painted.
    #[must_use]
    pub fn frames(&self) -> usize {
        self.commands.iter().filter(|c| matches!(c, Command::Clear(_))).count()
    }

    /// Commands of the most recent frame, starting at its `Clear`.
    #[must_use]
    pub fn last_frame(&self) -> &[Command] {
        let start = self
            .commands
            .iter()
            .rposition(|c| matches!(c, Command::Clear(_)))
            .unwrap_or(self.commands.len());
        &self.commands[start..]
    }
}

impl Surface for Recorder {
    type Error = Infallible;

    fn resize(&mut self, geometry: &SurfaceGeometry) -> Result<(), Self::Error> {
        self.commands.push(Command::Resize(*geometry));
        Ok(())
    }

    fn clear(&mut self, color: Rgb) -> Result<(), Self::Error> {
        self.commands.push(Command::Clear(color));
        Ok(())
    }

    fn line(&mut self, from: Point, to: Point, stroke: &Stroke) -> Result<(), Self::Error> {
        self.commands.push(Command::Line { from, to, stroke: *stroke });
        Ok(())
    }

    fn arc(
        &mut self,
        center: Point,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
        stroke: &Stroke,
    ) -> Result<(), Self::Error> {
        self.commands.push(Command::Arc { center, radius, start_angle, end_angle, stroke: *stroke });
        Ok(())
    }

    fn push_clip(&mut self, rect: Rect) -> Result<(), Self::Error> {
        self.commands.push(Command::PushClip(rect));
        Ok(())
    }

    fn pop_clip(&mut self) -> Result<(), Self::Error> {
        self.commands.push(Command::PopClip);
        Ok(())
    }
}
