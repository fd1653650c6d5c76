//! Shared engine for series-based charts
//!
//! Bar, line and grid charts all lay out the same way: axes derived
//! from the series data, value labels along the axes, gridlines, and a
//! legend of series names. This module holds that common machinery as
//! free functions over the owning item; the chart variants compose
//! them with their own geometry.

use crate::axis::{format_number, AxisData};
use crate::chart::ChartType;
use crate::geometry::{Font, Point, Rect, Size};
use crate::item::{ChartItem, ItemMode};
use crate::painter::{HAlign, Painter, VAlign};
use crate::palette::{Color, SERIES_PALETTE};

/// Placeholder values painted while the item is designed without data.
/// Read as three series of three points each.
pub(crate) const DESIGN_VALUES: [f64; 9] = [10.0, 35.0, 15.0, 5.0, 20.0, 10.0, 40.0, 20.0, 5.0];

/// Placeholder legend entries for the same design preview.
pub(crate) const DESIGN_LABELS: [&str; 3] = ["First", "Second", "Third"];

/// Both axes of a series chart, derived from the current data. Rebuilt
/// from scratch on every paint.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct AxisPair {
    pub y: AxisData,
    pub x: AxisData,
}

impl AxisPair {
    /// Scan the item's series and derive both axis ranges.
    ///
    /// The y range is floored at zero so bars always grow from a zero
    /// baseline. The x range comes from explicit x values when a series
    /// has them, otherwise from the point count (grid plots start at
    /// x = 0, so their span is one less). In design mode both axes span
    /// the fixed preview range. The x axis always reads reversed.
    pub fn update(item: &ChartItem) -> Self {
        let mut min_y = 0.0f64;
        let mut max_y = 0.0f64;
        let mut min_x = 0.0f64;
        let mut max_x = 0.0f64;

        if item.mode() == ItemMode::Design {
            max_y = 40.0;
            max_x = 40.0;
        } else {
            for series in item.series() {
                for value in &series.data.values {
                    min_y = min_y.min(*value);
                    max_y = max_y.max(*value);
                }
                if series.data.x_axis_values.is_empty() {
                    let starting_from_zero = item.chart_type() == ChartType::GridLines;
                    let count = values_count(item) as f64 - if starting_from_zero { 1.0 } else { 0.0 };
                    min_x = min_x.min(0.0);
                    max_x = max_x.max(count);
                } else {
                    for value in &series.data.x_axis_values {
                        min_x = min_x.min(*value);
                        max_x = max_x.max(*value);
                    }
                }
            }
        }

        AxisPair {
            y: AxisData::new(min_y, max_y),
            x: AxisData::new(min_x, max_x).reversed(),
        }
    }
}

/// Points per series. In design mode the preview always shows three.
pub(crate) fn values_count(item: &ChartItem) -> usize {
    if item.mode() == ItemMode::Design {
        return 3;
    }
    item.series().first().map_or(0, |s| s.data.values.len())
}

/// Number of series. In design mode the preview always shows three.
pub(crate) fn series_count(item: &ChartItem) -> usize {
    if item.mode() == ItemMode::Design {
        return 3;
    }
    item.series().len()
}

/// Values of preview series `index` in design mode.
pub(crate) fn design_values(index: usize) -> &'static [f64] {
    let start = (index * 3) % DESIGN_VALUES.len();
    &DESIGN_VALUES[start..start + 3]
}

/// Per-series colors and values as the bar and line charts consume
/// them. In design mode without data this is the three preview series
/// colored from the palette head.
pub(crate) fn series_values(item: &ChartItem) -> Vec<(Color, Vec<f64>)> {
    if item.mode() == ItemMode::Design && item.series().iter().all(|s| s.is_empty()) {
        return (0..3)
            .map(|i| (SERIES_PALETTE[i], design_values(i).to_vec()))
            .collect();
    }
    item.series()
        .iter()
        .map(|s| (s.color, s.data.values.clone()))
        .collect()
}

/// Horizontal padding: 2% of the reference rect width.
pub(crate) fn h_padding(rect: Rect) -> f64 {
    rect.width * 0.02
}

/// Vertical padding: 2% of the reference rect height.
pub(crate) fn v_padding(rect: Rect) -> f64 {
    rect.height * 0.02
}

/// Natural legend size: one text row per series plus one spare row,
/// wide enough for the longest name, a swatch column and side margins.
/// Without series the design placeholder labels are measured instead.
pub(crate) fn legend_size(item: &ChartItem, font: Font) -> Size {
    let fm = font.metrics();
    let mut cw = 0.0;
    let mut max_width = 0.0f64;

    if !item.series().is_empty() {
        for series in item.series() {
            cw += fm.height();
            let w = fm.width(&series.name);
            if max_width < w {
                max_width = w + 10.0;
            }
        }
    } else {
        for label in DESIGN_LABELS {
            cw += fm.height();
            let w = fm.width(label);
            if max_width < w {
                max_width = w + 10.0;
            }
        }
    }
    cw += fm.height();
    Size::new(max_width + fm.height() * 2.0, cw)
}

/// True when any category label is wider than its horizontal slot, so
/// the labels have to be painted rotated.
pub(crate) fn vertical_labels(item: &ChartItem, font: Font, labels_rect: Rect) -> bool {
    if values_count(item) == 0 {
        return false;
    }
    let h_step = labels_rect.width / values_count(item) as f64;
    let fm = font.metrics();
    item.labels().iter().any(|label| fm.width(label) > h_step)
}

/// Paint category labels along a horizontal band, one slot per point.
/// Labels wider than their slot are rotated upright instead.
pub(crate) fn paint_horizontal_labels(item: &ChartItem, painter: &mut Painter, labels_rect: Rect) {
    if values_count(item) == 0 || item.labels().is_empty() {
        return;
    }

    painter.save();
    let h_step = labels_rect.width / values_count(item) as f64;
    if vertical_labels(item, painter.font(), labels_rect) {
        for (i, label) in item.labels().iter().enumerate() {
            let slot = Rect::new(
                labels_rect.left() + h_step * i as f64,
                labels_rect.bottom(),
                labels_rect.height - 4.0,
                h_step,
            );
            painter.draw_text_rotated(slot, HAlign::Right, VAlign::Center, -270.0, label);
        }
    } else {
        for (i, label) in item.labels().iter().enumerate() {
            let slot = Rect::new(
                labels_rect.left() + h_step * i as f64,
                labels_rect.top() + 4.0,
                h_step,
                labels_rect.height - 4.0,
            );
            painter.draw_text(slot, HAlign::Center, VAlign::Top, label);
        }
    }
    painter.restore();
}

/// Paint category labels stacked in a vertical band, one slot per
/// point, right-aligned against the chart area.
pub(crate) fn paint_vertical_labels(item: &ChartItem, painter: &mut Painter, labels_rect: Rect) {
    if values_count(item) == 0 || item.labels().is_empty() {
        return;
    }

    painter.save();
    let padding = h_padding(painter.canvas());
    let font = adapt_labels_font(
        item,
        labels_rect.adjusted(0.0, 0.0, -padding, 0.0),
        painter.font(),
    );
    painter.set_font(font);
    let v_step = labels_rect.height / values_count(item) as f64;
    for (i, label) in item.labels().iter().enumerate() {
        let slot = Rect::new(
            labels_rect.left(),
            labels_rect.top() + v_step * i as f64,
            labels_rect.width - padding,
            v_step,
        );
        painter.draw_text(slot, HAlign::Right, VAlign::Center, label);
    }
    painter.restore();
}

/// Horizontal gridlines with y tick labels in a left gutter. Used by
/// vertical bar and line charts.
pub(crate) fn paint_vertical_grid(painter: &mut Painter, grid_rect: Rect, y_axis: &AxisData) {
    let segment_count = y_axis.segment_count();
    let v_step = grid_rect.height / segment_count as f64;

    let margin = values_h_margin(painter, y_axis);
    let fm = painter.font().metrics();
    let font_height = fm.height();
    let text_offset = margin * 0.2;

    for i in 0..=segment_count {
        let y = v_step * i as f64;
        painter.draw_text(
            Rect::new(
                grid_rect.left() - text_offset,
                grid_rect.bottom() - y - font_height / 2.0,
                margin,
                font_height,
            ),
            HAlign::Right,
            VAlign::Top,
            &y_axis.tick_label(i),
        );
        painter.draw_line(
            Point::new(grid_rect.left() + margin, grid_rect.bottom() - y),
            Point::new(grid_rect.right(), grid_rect.bottom() - y),
        );
    }
}

/// Vertical gridlines with value labels along the bottom. Used by the
/// horizontal bar chart, whose values run along x.
pub(crate) fn paint_horizontal_grid(painter: &mut Painter, grid_rect: Rect, y_axis: &AxisData) {
    painter.save();

    let segment_count = y_axis.segment_count();
    let delta = y_axis.delta();
    let fm = painter.font().metrics();
    let h_step = (grid_rect.width - fm.width(&format_number(y_axis.max_value()))) / segment_count as f64;

    let font = adapt_values_font(y_axis.max_value(), h_step - 4.0, painter.font());
    painter.set_font(font);
    let font_height = painter.font().metrics().height();

    for i in 0..=segment_count {
        let x = grid_rect.left() + h_step * i as f64;
        painter.draw_text(
            Rect::new(x + 4.0, grid_rect.bottom() - font_height, h_step, font_height),
            HAlign::Left,
            VAlign::Top,
            &format_number(y_axis.min_value() + i as f64 * delta / segment_count as f64),
        );
        painter.draw_line(
            Point::new(x, grid_rect.bottom()),
            Point::new(x, grid_rect.top()),
        );
    }
    painter.restore();
}

/// Full coordinate grid for the grid-lines chart: both axes with tick
/// labels, the first and last vertical gridlines spanning the whole
/// plot, the rest drawn as short ticks.
pub(crate) fn paint_grid(
    item: &ChartItem,
    painter: &mut Painter,
    grid_rect: Rect,
    y_axis: &AxisData,
    x_axis: &AxisData,
) {
    painter.save();

    let x_segments = x_axis.segment_count();
    let y_segments = y_axis.segment_count();

    let grid_offset = h_padding(grid_rect);
    let fm = painter.font().metrics();
    let font_height = fm.height();
    let half_font_height = font_height / 2.0;
    let margin = values_h_margin(painter, y_axis);
    let v_step = grid_rect.height / y_segments as f64;
    let h_step = (grid_rect.width - margin - grid_offset) / x_segments as f64;

    for i in 0..=y_segments {
        let y = v_step * i as f64;
        painter.draw_text(
            Rect::new(
                grid_rect.left() - half_font_height,
                grid_rect.bottom() - y - half_font_height,
                margin,
                font_height,
            ),
            HAlign::Right,
            VAlign::Top,
            &y_axis.tick_label(i),
        );
        painter.draw_line(
            Point::new(grid_rect.left() + margin, grid_rect.bottom() - y),
            Point::new(grid_rect.right(), grid_rect.bottom() - y),
        );
    }

    for i in 0..=x_segments {
        let x = grid_rect.left() + h_step * i as f64 + margin + grid_offset;
        let full_line = i == 0 || i == x_segments;
        // The x axis labels run in data order even though the axis is
        // marked reversed; only bar charts consult the reverse flag.
        let text = format_number(x_axis.range_min() + i as f64 * x_axis.step());

        if item.horizontal_axis_on_top() {
            painter.draw_line(
                Point::new(x, grid_rect.top() - grid_offset),
                Point::new(x, if full_line { grid_rect.bottom() } else { grid_rect.top() }),
            );
            painter.draw_text(
                Rect::new(
                    x - fm.width(&text) / 2.0,
                    grid_rect.top() - (font_height + grid_offset),
                    h_step,
                    font_height,
                ),
                HAlign::Left,
                VAlign::Top,
                &text,
            );
        } else {
            painter.draw_line(
                Point::new(x, grid_rect.bottom() + grid_offset),
                Point::new(x, if full_line { grid_rect.top() } else { grid_rect.bottom() }),
            );
            painter.draw_text(
                Rect::new(
                    x - fm.width(&text) / 2.0,
                    grid_rect.bottom() + half_font_height + grid_offset,
                    h_step,
                    font_height,
                ),
                HAlign::Left,
                VAlign::Top,
                &text,
            );
        }
    }

    painter.restore();
}

/// Draw one line-chart segment in the series color, optionally capping
/// both endpoints with a filled circle.
pub(crate) fn draw_segment(
    item: &ChartItem,
    painter: &mut Painter,
    from: Point,
    to: Point,
    color: Color,
) {
    let radius = item.series_line_width();
    painter.set_pen(color, radius);
    painter.draw_line(from, to);
    if !item.draw_points() {
        return;
    }
    painter.set_brush(Some(color));
    painter.draw_ellipse(from, radius, radius);
    painter.draw_ellipse(to, radius, radius);
}

/// Width of the y tick-label gutter: the widest tick label plus a small
/// offset.
pub(crate) fn values_h_margin(painter: &Painter, y_axis: &AxisData) -> f64 {
    let fm = painter.font().metrics();
    let offset = 4.0;
    (0..=y_axis.segment_count())
        .map(|i| fm.width(&y_axis.tick_label(i)) + offset)
        .fold(0.0, f64::max)
}

/// Height of the value-label band under a plot.
pub(crate) fn values_v_margin(painter: &Painter) -> f64 {
    painter.font().metrics().height()
}

/// Shrink the font until the widest single word of any category label
/// fits `rect`. Words are split on non-alphanumeric runs, so wrapped
/// multi-word labels only need their longest word to fit.
pub(crate) fn adapt_labels_font(item: &ChartItem, rect: Rect, font: Font) -> Font {
    let mut max_word = "";
    let mut fm = font.metrics();

    for label in item.labels() {
        for word in label.split(|c: char| !c.is_alphanumeric() && c != '_') {
            if fm.width(max_word) < fm.width(word) {
                max_word = word;
            }
        }
    }

    let mut current = font;
    let mut width = fm.width(max_word);
    while width > rect.width && current.pixel_size > 1.0 {
        current = Font::with_pixel_size(current.pixel_size - 1.0);
        fm = current.metrics();
        width = fm.width(max_word);
    }
    current
}

/// Shrink the font until the formatted maximum value fits `width`.
pub(crate) fn adapt_values_font(max_value: f64, width: f64, font: Font) -> Font {
    let text = format_number(max_value);
    let mut current = font;
    let mut current_width = current.metrics().width(&text);
    while current_width > width && current.pixel_size > 1.0 {
        current = Font::with_pixel_size(current.pixel_size - 1.0);
        current_width = current.metrics().width(&text);
    }
    current
}

/// Legend shared by the bar and line charts: one row per series with
/// the name and a filled color swatch, inside an optional border. In
/// design mode without series three placeholder rows are painted with
/// the palette head colors.
pub(crate) fn paint_series_legend(item: &ChartItem, painter: &mut Painter, legend_rect: Rect) {
    let fm = painter.font().metrics();
    let indicator = fm.height() / 2.0;
    painter.set_pen(Color::BLACK, 1.0);
    if item.legend_border() {
        painter.set_brush(None);
        painter.draw_rect(legend_rect);
    }
    let indicators_rect = legend_rect.adjusted(indicator, indicator, 0.0, 0.0);

    let mut draw_row = |painter: &mut Painter, cw: f64, label: &str, color: Color| {
        painter.set_pen(Color::BLACK, 1.0);
        painter.draw_text(
            indicators_rect.adjusted(indicator + indicator / 2.0, cw, 0.0, 0.0),
            HAlign::Left,
            VAlign::Top,
            label,
        );
        painter.set_brush(Some(color));
        painter.draw_ellipse(
            Point::new(
                indicators_rect.left() + indicator / 2.0,
                indicators_rect.top() + cw + indicator,
            ),
            indicator / 2.0,
            indicator / 2.0,
        );
    };

    if !item.series().is_empty() {
        let mut cw = 0.0;
        for series in item.series() {
            draw_row(painter, cw, &series.name, series.color);
            cw += fm.height();
        }
    } else if item.mode() == ItemMode::Design {
        let mut cw = 0.0;
        for (i, label) in DESIGN_LABELS.iter().enumerate() {
            draw_row(painter, cw, label, SERIES_PALETTE[i]);
            cw += fm.height();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::{ChartItem, ItemMode};
    use crate::painter::RenderPrimitive;
    use crate::series::SeriesItem;

    fn render_item_with_values(values: &[f64]) -> ChartItem {
        let mut item = ChartItem::new();
        item.set_mode(ItemMode::Render);
        let mut series = SeriesItem::new("sales");
        series.data.values = values.to_vec();
        item.push_series(series);
        item
    }

    #[test]
    fn test_axis_pair_from_values() {
        let item = render_item_with_values(&[10.0, 20.0, 5.0]);
        let axes = AxisPair::update(&item);
        assert_eq!(axes.y.min_value(), 0.0);
        assert_eq!(axes.y.max_value(), 20.0);
        assert_eq!(axes.y.step(), 4.0);
        assert_eq!(axes.x.min_value(), 0.0);
        assert_eq!(axes.x.max_value(), 3.0);
        assert!(axes.x.reverse_direction());
    }

    #[test]
    fn test_axis_pair_negative_values_lower_the_floor() {
        let item = render_item_with_values(&[-5.0, 20.0]);
        let axes = AxisPair::update(&item);
        assert_eq!(axes.y.min_value(), -5.0);
        assert_eq!(axes.y.max_value(), 20.0);
    }

    #[test]
    fn test_axis_pair_grid_lines_span_one_less() {
        let mut item = render_item_with_values(&[1.0, 2.0, 3.0, 4.0]);
        item.set_chart_type(ChartType::GridLines);
        let axes = AxisPair::update(&item);
        assert_eq!(axes.x.max_value(), 3.0);
    }

    #[test]
    fn test_axis_pair_design_mode() {
        let item = ChartItem::new();
        let axes = AxisPair::update(&item);
        assert_eq!(axes.y.max_value(), 40.0);
        assert_eq!(axes.x.max_value(), 40.0);
    }

    #[test]
    fn test_counts_in_design_mode() {
        let item = ChartItem::new();
        assert_eq!(values_count(&item), 3);
        assert_eq!(series_count(&item), 3);
    }

    #[test]
    fn test_counts_in_render_mode() {
        let item = render_item_with_values(&[1.0, 2.0]);
        assert_eq!(values_count(&item), 2);
        assert_eq!(series_count(&item), 1);
    }

    #[test]
    fn test_legend_size_counts_rows() {
        let mut item = render_item_with_values(&[1.0]);
        let mut second = SeriesItem::new("expenses");
        second.data.values = vec![2.0];
        item.push_series(second);
        let fm = Font::default().metrics();
        let size = legend_size(&item, Font::default());
        // Two series rows plus the spare row
        assert_eq!(size.height, fm.height() * 3.0);
        assert_eq!(size.width, fm.width("expenses") + 10.0 + fm.height() * 2.0);
    }

    #[test]
    fn test_legend_size_uses_design_labels_without_series() {
        let item = ChartItem::new();
        let fm = Font::default().metrics();
        let size = legend_size(&item, Font::default());
        assert_eq!(size.height, fm.height() * 4.0);
        // "First" claims the width slot first; the wider-by-chars
        // "Second" does not beat its padded width
        assert_eq!(size.width, fm.width("First") + 10.0 + fm.height() * 2.0);
    }

    #[test]
    fn test_vertical_labels_triggered_by_wide_label() {
        let mut item = render_item_with_values(&[1.0, 2.0, 3.0]);
        item.set_labels(vec!["a".into(), "a rather long label".into(), "c".into()]);
        let narrow = Rect::new(0.0, 0.0, 60.0, 20.0);
        let wide = Rect::new(0.0, 0.0, 600.0, 20.0);
        assert!(vertical_labels(&item, Font::default(), narrow));
        assert!(!vertical_labels(&item, Font::default(), wide));
    }

    #[test]
    fn test_horizontal_labels_rotate_when_cramped() {
        let mut item = render_item_with_values(&[1.0, 2.0, 3.0]);
        item.set_labels(vec!["January".into(), "February".into(), "March".into()]);
        let mut painter = Painter::new(Size::new(400.0, 300.0), Font::default());
        paint_horizontal_labels(&item, &mut painter, Rect::new(0.0, 0.0, 60.0, 30.0));
        let angles: Vec<f64> = painter
            .primitives()
            .iter()
            .filter_map(|p| match p {
                RenderPrimitive::Text { angle, .. } => Some(*angle),
                _ => None,
            })
            .collect();
        assert_eq!(angles, vec![-270.0, -270.0, -270.0]);
    }

    #[test]
    fn test_grid_line_count() {
        let item = render_item_with_values(&[10.0, 20.0, 5.0]);
        let axes = AxisPair::update(&item);
        let mut painter = Painter::new(Size::new(400.0, 300.0), Font::default());
        paint_vertical_grid(&mut painter, Rect::new(0.0, 0.0, 400.0, 300.0), &axes.y);
        let lines = painter
            .primitives()
            .iter()
            .filter(|p| matches!(p, RenderPrimitive::Line { .. }))
            .count();
        assert_eq!(lines, 6);
    }

    #[test]
    fn test_paint_grid_full_line_rule() {
        let item = render_item_with_values(&[10.0, 20.0, 5.0]);
        let axes = AxisPair::update(&item);
        let mut painter = Painter::new(Size::new(400.0, 300.0), Font::default());
        let rect = Rect::new(0.0, 0.0, 400.0, 300.0);
        paint_grid(&item, &mut painter, rect, &axes.y, &axes.x);
        let full_vertical = painter
            .primitives()
            .iter()
            .filter(|p| match p {
                RenderPrimitive::Line { x1, x2, y1, y2, .. } => {
                    x1 == x2 && (y1 - y2).abs() >= rect.height
                }
                _ => false,
            })
            .count();
        assert_eq!(full_vertical, 2);
    }

    #[test]
    fn test_draw_segment_points() {
        let item = render_item_with_values(&[1.0]);
        let mut painter = Painter::new(Size::new(400.0, 300.0), Font::default());
        draw_segment(
            &item,
            &mut painter,
            Point::new(0.0, 0.0),
            Point::new(10.0, 10.0),
            Color::rgb(1, 2, 3),
        );
        assert_eq!(painter.primitives().len(), 3);
        match &painter.primitives()[0] {
            RenderPrimitive::Line { stroke_width, .. } => {
                assert_eq!(*stroke_width, item.series_line_width());
            }
            other => panic!("expected line, got {:?}", other),
        }
    }

    #[test]
    fn test_draw_segment_without_points() {
        let mut item = render_item_with_values(&[1.0]);
        item.set_draw_points(false);
        let mut painter = Painter::new(Size::new(400.0, 300.0), Font::default());
        draw_segment(
            &item,
            &mut painter,
            Point::new(0.0, 0.0),
            Point::new(10.0, 10.0),
            Color::rgb(1, 2, 3),
        );
        assert_eq!(painter.primitives().len(), 1);
    }

    #[test]
    fn test_adapt_labels_font_shrinks_to_longest_word() {
        let mut item = render_item_with_values(&[1.0]);
        item.set_labels(vec!["short but unconscionably-wide".into()]);
        let font = adapt_labels_font(&item, Rect::new(0.0, 0.0, 30.0, 20.0), Font::default());
        assert!(font.pixel_size < 12.0);
        assert!(font.pixel_size >= 1.0);
    }

    #[test]
    fn test_adapt_values_font_keeps_fitting_font() {
        let font = adapt_values_font(20.0, 200.0, Font::default());
        assert_eq!(font.pixel_size, 12.0);
    }

    #[test]
    fn test_series_legend_design_placeholder_rows() {
        let item = ChartItem::new();
        let mut painter = Painter::new(Size::new(400.0, 300.0), Font::default());
        paint_series_legend(&item, &mut painter, Rect::new(0.0, 0.0, 120.0, 100.0));
        let texts: Vec<&str> = painter
            .primitives()
            .iter()
            .filter_map(|p| match p {
                RenderPrimitive::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(texts, vec!["First", "Second", "Third"]);
        let swatches = painter
            .primitives()
            .iter()
            .filter(|p| matches!(p, RenderPrimitive::Ellipse { .. }))
            .count();
        assert_eq!(swatches, 3);
    }

    #[test]
    fn test_design_values_chunks() {
        assert_eq!(design_values(0), &[10.0, 35.0, 15.0]);
        assert_eq!(design_values(1), &[5.0, 20.0, 10.0]);
        assert_eq!(design_values(2), &[40.0, 20.0, 5.0]);
    }

    proptest::proptest! {
        #[test]
        fn prop_adapt_values_font_fits_or_floors(
            max_value in 0.0f64..1e9,
            width in 1.0f64..500.0,
        ) {
            let font = adapt_values_font(max_value, width, Font::default());
            let text = format_number(max_value);
            proptest::prop_assert!(font.pixel_size >= 1.0);
            proptest::prop_assert!(
                font.metrics().width(&text) <= width || font.pixel_size == 1.0
            );
        }
    }
}
