//! [`Surface`] over a 2D canvas context.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::geometry::{Point, Rect, SurfaceGeometry};
use crate::paint::Surface;
use crate::style::{Rgb, Stroke};

pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    geometry: Option<SurfaceGeometry>,
}

impl CanvasSurface {
    /// Wrap `canvas`, or `None` if it has no 2D context.
    pub fn from_canvas(canvas: HtmlCanvasElement) -> Option<Self> {
        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()?
            .dyn_into::<CanvasRenderingContext2d>()
            .ok()?;
        Some(Self { canvas, ctx, geometry: None })
    }

    fn apply_stroke(&self, stroke: &Stroke) -> Result<(), JsValue> {
        self.ctx.set_stroke_style_str(&stroke.color.css(stroke.alpha));
        self.ctx.set_line_width(stroke.width);
        self.ctx.set_line_cap("round");
        let dash = js_sys::Array::new();
        if let Some([on, off]) = stroke.dash {
            dash.push(&on.into());
            dash.push(&off.into());
        }
        self.ctx.set_line_dash(&dash)
    }
}

impl Surface for CanvasSurface {
    type Error = JsValue;

    fn resize(&mut self, geometry: &SurfaceGeometry) -> Result<(), JsValue> {
        self.canvas.set_width(geometry.buffer_width);
        self.canvas.set_height(geometry.buffer_height);
        let style = self.canvas.style();
        style.set_property("width", &format!("{}px", geometry.width))?;
        style.set_property("height", &format!("{}px", geometry.height))?;
        self.geometry = Some(*geometry);
        Ok(())
    }

    fn clear(&mut self, color: Rgb) -> Result<(), JsValue> {
        let Some(geometry) = self.geometry else {
            return Ok(());
        };
        // Draw in logical pixels; the transform maps them onto the buffer.
        self.ctx.set_transform(geometry.dpr, 0.0, 0.0, geometry.dpr, 0.0, 0.0)?;
        self.ctx.set_fill_style_str(&color.css(1.0));
        self.ctx.fill_rect(0.0, 0.0, geometry.width, geometry.height);
        Ok(())
    }

    fn line(&mut self, from: Point, to: Point, stroke: &Stroke) -> Result<(), JsValue> {
        self.apply_stroke(stroke)?;
        self.ctx.begin_path();
        self.ctx.move_to(from.x, from.y);
        self.ctx.line_to(to.x, to.y);
        self.ctx.stroke();
        Ok(())
    }

    fn arc(
        &mut self,
        center: Point,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
        stroke: &Stroke,
    ) -> Result<(), JsValue> {
        self.apply_stroke(stroke)?;
        self.ctx.begin_path();
        self.ctx.arc(center.x, center.y, radius, start_angle, end_angle)?;
        self.ctx.stroke();
        Ok(())
    }

    fn push_clip(&mut self, rect: Rect) -> Result<(), JsValue> {
        self.ctx.save();
        self.ctx.begin_path();
        self.ctx.rect(rect.x, rect.y, rect.width, rect.height);
        self.ctx.clip();
        Ok(())
    }

    fn pop_clip(&mut self) -> Result<(), JsValue> {
        self.ctx.restore();
        Ok(())
    }
}
