//! Recording painter
//!
//! Paint calls do not rasterize; they record strongly-typed primitives
//! the host (or the SVG serializer) turns into pixels. The painter
//! carries the small amount of state the paint pipeline needs: current
//! font, pen and brush, with a save/restore stack.

use crate::geometry::{Font, Point, Rect, Size};
use crate::palette::Color;
use serde::{Deserialize, Serialize};

/// Horizontal text alignment inside a text rect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HAlign {
    Left,
    Center,
    Right,
}

/// Vertical text alignment inside a text rect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VAlign {
    Top,
    Center,
    Bottom,
}

/// One drawable element recorded by the painter.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum RenderPrimitive {
    /// Axis-aligned rectangle
    Rect {
        rect: Rect,
        fill: Option<Color>,
        stroke: Color,
        stroke_width: f64,
    },
    /// Straight line segment
    Line {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        stroke: Color,
        stroke_width: f64,
    },
    /// Ellipse given by center and radii
    Ellipse {
        cx: f64,
        cy: f64,
        rx: f64,
        ry: f64,
        fill: Option<Color>,
        stroke: Color,
        stroke_width: f64,
    },
    /// Filled circular sector. Angles in degrees, 0 at 12 o'clock,
    /// positive sweep clockwise.
    PieSlice {
        cx: f64,
        cy: f64,
        radius: f64,
        start_angle: f64,
        sweep_angle: f64,
        fill: Color,
        stroke: Color,
    },
    /// Text laid out inside a rect. `angle` rotates the text around the
    /// rect's top-left corner (degrees, counterclockwise negative).
    Text {
        rect: Rect,
        text: String,
        pixel_size: f64,
        color: Color,
        halign: HAlign,
        valign: VAlign,
        angle: f64,
    },
}

/// Finished recording: canvas size plus the primitive list in paint
/// order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderedChart {
    /// Canvas width
    pub width: f64,
    /// Canvas height
    pub height: f64,
    /// Primitives in paint order
    pub primitives: Vec<RenderPrimitive>,
}

#[derive(Debug, Clone, Copy)]
struct PainterState {
    font: Font,
    pen_color: Color,
    pen_width: f64,
    brush: Option<Color>,
}

/// Primitive-recording painter with save/restore state.
#[derive(Debug)]
pub struct Painter {
    size: Size,
    state: PainterState,
    stack: Vec<PainterState>,
    primitives: Vec<RenderPrimitive>,
}

impl Painter {
    /// Create a painter for a canvas of the given size.
    pub fn new(size: Size, font: Font) -> Self {
        Self {
            size,
            state: PainterState {
                font,
                pen_color: Color::BLACK,
                pen_width: 1.0,
                brush: None,
            },
            stack: Vec::new(),
            primitives: Vec::new(),
        }
    }

    /// Push the current font/pen/brush state.
    pub fn save(&mut self) {
        self.stack.push(self.state);
    }

    /// Pop the last saved state. Unbalanced restores are ignored.
    pub fn restore(&mut self) {
        if let Some(state) = self.stack.pop() {
            self.state = state;
        }
    }

    /// Whole canvas as a rect at the origin
    pub fn canvas(&self) -> Rect {
        Rect::from_size(self.size)
    }

    /// Current font
    pub fn font(&self) -> Font {
        self.state.font
    }

    /// Replace the current font
    pub fn set_font(&mut self, font: Font) {
        self.state.font = font;
    }

    /// Set stroke color and width
    pub fn set_pen(&mut self, color: Color, width: f64) {
        self.state.pen_color = color;
        self.state.pen_width = width;
    }

    /// Set the fill brush (`None` = no fill)
    pub fn set_brush(&mut self, brush: Option<Color>) {
        self.state.brush = brush;
    }

    /// Record a rectangle with the current pen and brush.
    pub fn draw_rect(&mut self, rect: Rect) {
        self.primitives.push(RenderPrimitive::Rect {
            rect,
            fill: self.state.brush,
            stroke: self.state.pen_color,
            stroke_width: self.state.pen_width,
        });
    }

    /// Record a line with the current pen.
    pub fn draw_line(&mut self, from: Point, to: Point) {
        self.primitives.push(RenderPrimitive::Line {
            x1: from.x,
            y1: from.y,
            x2: to.x,
            y2: to.y,
            stroke: self.state.pen_color,
            stroke_width: self.state.pen_width,
        });
    }

    /// Record an ellipse centered at `center`.
    pub fn draw_ellipse(&mut self, center: Point, rx: f64, ry: f64) {
        self.primitives.push(RenderPrimitive::Ellipse {
            cx: center.x,
            cy: center.y,
            rx,
            ry,
            fill: self.state.brush,
            stroke: self.state.pen_color,
            stroke_width: self.state.pen_width,
        });
    }

    /// Record a pie slice filled with the current brush (falling back
    /// to the pen color when no brush is set).
    pub fn draw_pie(&mut self, center: Point, radius: f64, start_angle: f64, sweep_angle: f64) {
        self.primitives.push(RenderPrimitive::PieSlice {
            cx: center.x,
            cy: center.y,
            radius,
            start_angle,
            sweep_angle,
            fill: self.state.brush.unwrap_or(self.state.pen_color),
            stroke: self.state.pen_color,
        });
    }

    /// Record text laid out in `rect` with the current font and pen
    /// color.
    pub fn draw_text(&mut self, rect: Rect, halign: HAlign, valign: VAlign, text: &str) {
        self.draw_text_rotated(rect, halign, valign, 0.0, text);
    }

    /// Record rotated text. `angle` is in degrees around the rect's
    /// top-left corner.
    pub fn draw_text_rotated(
        &mut self,
        rect: Rect,
        halign: HAlign,
        valign: VAlign,
        angle: f64,
        text: &str,
    ) {
        if text.is_empty() {
            return;
        }
        self.primitives.push(RenderPrimitive::Text {
            rect,
            text: text.to_string(),
            pixel_size: self.state.font.pixel_size,
            color: self.state.pen_color,
            halign,
            valign,
            angle,
        });
    }

    /// Primitives recorded so far, in paint order.
    pub fn primitives(&self) -> &[RenderPrimitive] {
        &self.primitives
    }

    /// Finish recording.
    pub fn finish(self) -> RenderedChart {
        RenderedChart {
            width: self.size.width,
            height: self.size.height,
            primitives: self.primitives,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn painter() -> Painter {
        Painter::new(Size::new(400.0, 300.0), Font::default())
    }

    #[test]
    fn test_save_restore() {
        let mut p = painter();
        p.set_pen(Color::rgb(10, 20, 30), 3.0);
        p.save();
        p.set_pen(Color::WHITE, 1.0);
        p.set_font(Font::with_pixel_size(7.0));
        p.restore();
        p.draw_line(Point::new(0.0, 0.0), Point::new(1.0, 1.0));
        match &p.primitives()[0] {
            RenderPrimitive::Line { stroke, stroke_width, .. } => {
                assert_eq!(*stroke, Color::rgb(10, 20, 30));
                assert_eq!(*stroke_width, 3.0);
            }
            other => panic!("expected line, got {:?}", other),
        }
        assert_eq!(p.font(), Font::default());
    }

    #[test]
    fn test_unbalanced_restore_is_ignored() {
        let mut p = painter();
        p.restore();
        assert_eq!(p.font(), Font::default());
    }

    #[test]
    fn test_empty_text_not_recorded() {
        let mut p = painter();
        p.draw_text(Rect::new(0.0, 0.0, 10.0, 10.0), HAlign::Left, VAlign::Top, "");
        assert!(p.primitives().is_empty());
    }

    #[test]
    fn test_finish_keeps_size() {
        let mut p = painter();
        p.draw_rect(Rect::new(0.0, 0.0, 5.0, 5.0));
        let rendered = p.finish();
        assert_eq!(rendered.width, 400.0);
        assert_eq!(rendered.height, 300.0);
        assert_eq!(rendered.primitives.len(), 1);
    }

    #[test]
    fn test_primitives_serialize_tagged() {
        let mut p = painter();
        p.draw_rect(Rect::new(0.0, 0.0, 5.0, 5.0));
        let json = serde_json::to_string(&p.finish()).unwrap();
        assert!(json.contains(r#""type":"Rect""#));
    }

    #[test]
    fn test_pie_fill_falls_back_to_pen() {
        let mut p = painter();
        p.set_pen(Color::rgb(5, 5, 5), 1.0);
        p.set_brush(None);
        p.draw_pie(Point::new(10.0, 10.0), 5.0, 0.0, 90.0);
        match &p.primitives()[0] {
            RenderPrimitive::PieSlice { fill, .. } => assert_eq!(*fill, Color::rgb(5, 5, 5)),
            other => panic!("expected pie slice, got {:?}", other),
        }
    }
}
