//! SVG serialization of a rendered chart
//!
//! Mostly a debugging and demo surface: turns the recorded primitive
//! list into a standalone SVG document. Hosts with a native canvas
//! rasterize [`RenderPrimitive`] directly instead.

use crate::painter::{HAlign, RenderPrimitive, RenderedChart, VAlign};

/// Serialize a rendered chart to an SVG document.
pub fn to_svg(rendered: &RenderedChart) -> String {
    let mut svg = format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}">"#,
        rendered.width, rendered.height, rendered.width, rendered.height
    );
    svg.push('\n');
    for primitive in &rendered.primitives {
        svg.push_str(&primitive_to_svg(primitive));
        svg.push('\n');
    }
    svg.push_str("</svg>");
    svg
}

fn primitive_to_svg(primitive: &RenderPrimitive) -> String {
    match primitive {
        RenderPrimitive::Rect {
            rect,
            fill,
            stroke,
            stroke_width,
        } => {
            let fill_attr = fill.map_or("none".to_string(), |c| c.to_css());
            format!(
                r#"<rect x="{}" y="{}" width="{}" height="{}" fill="{}" stroke="{}" stroke-width="{}"/>"#,
                rect.x,
                rect.y,
                rect.width,
                rect.height,
                fill_attr,
                stroke.to_css(),
                stroke_width
            )
        }
        RenderPrimitive::Line {
            x1,
            y1,
            x2,
            y2,
            stroke,
            stroke_width,
        } => format!(
            r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-width="{}"/>"#,
            x1,
            y1,
            x2,
            y2,
            stroke.to_css(),
            stroke_width
        ),
        RenderPrimitive::Ellipse {
            cx,
            cy,
            rx,
            ry,
            fill,
            stroke,
            stroke_width,
        } => {
            let fill_attr = fill.map_or("none".to_string(), |c| c.to_css());
            format!(
                r#"<ellipse cx="{}" cy="{}" rx="{}" ry="{}" fill="{}" stroke="{}" stroke-width="{}"/>"#,
                cx,
                cy,
                rx,
                ry,
                fill_attr,
                stroke.to_css(),
                stroke_width
            )
        }
        RenderPrimitive::PieSlice {
            cx,
            cy,
            radius,
            start_angle,
            sweep_angle,
            fill,
            stroke,
        } => format!(
            r#"<path d="{}" fill="{}" stroke="{}" stroke-width="1"/>"#,
            slice_path(*cx, *cy, *radius, *start_angle, *sweep_angle),
            fill.to_css(),
            stroke.to_css()
        ),
        RenderPrimitive::Text {
            rect,
            text,
            pixel_size,
            color,
            halign,
            valign,
            angle,
        } => {
            let (x, anchor) = match halign {
                HAlign::Left => (rect.left(), "start"),
                HAlign::Center => (rect.center_x(), "middle"),
                HAlign::Right => (rect.right(), "end"),
            };
            let (y, baseline) = match valign {
                VAlign::Top => (rect.top(), "hanging"),
                VAlign::Center => (rect.center_y(), "middle"),
                VAlign::Bottom => (rect.bottom(), "text-bottom"),
            };
            let transform = if *angle == 0.0 {
                String::new()
            } else {
                format!(r#" transform="rotate({} {} {})""#, angle, rect.left(), rect.top())
            };
            format!(
                r#"<text x="{}" y="{}" font-size="{}" fill="{}" text-anchor="{}" dominant-baseline="{}"{}>{}</text>"#,
                x,
                y,
                pixel_size,
                color.to_css(),
                anchor,
                baseline,
                transform,
                escape_xml(text)
            )
        }
    }
}

/// Path for a circular sector. Angles in degrees, 0 at 12 o'clock,
/// positive sweep clockwise (screen coordinates, y down).
fn slice_path(cx: f64, cy: f64, radius: f64, start_angle: f64, sweep_angle: f64) -> String {
    let point_at = |deg: f64| {
        let rad = deg.to_radians();
        (cx + radius * rad.sin(), cy - radius * rad.cos())
    };
    let (sx, sy) = point_at(start_angle);
    let (ex, ey) = point_at(start_angle + sweep_angle);
    let large_arc = i32::from(sweep_angle.abs() > 180.0);
    format!(
        "M {} {} L {} {} A {} {} 0 {} 1 {} {} Z",
        cx, cy, sx, sy, radius, radius, large_arc, ex, ey
    )
}

fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
