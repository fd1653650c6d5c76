//! Pie chart
//!
//! Renders the first series as a disc of proportional slices. The
//! legend lists the category labels with the per-point colors, since a
//! pie's colors belong to points rather than series.

use crate::chart::Chart;
use crate::geometry::{Font, Point, Rect, Size};
use crate::item::{ChartItem, ItemMode};
use crate::painter::{HAlign, Painter, VAlign};
use crate::palette::{Color, SERIES_PALETTE};
use crate::series_chart::{self, DESIGN_LABELS};

pub struct PieChart;

impl PieChart {
    /// Labels shown in the legend: the item's labels, or the design
    /// placeholders when there are none.
    fn legend_labels(item: &ChartItem) -> Vec<String> {
        if !item.labels().is_empty() {
            item.labels().to_vec()
        } else {
            DESIGN_LABELS.iter().map(|s| s.to_string()).collect()
        }
    }

    /// Values and point colors of the slice source: the first series,
    /// or the design placeholder values.
    fn slices(item: &ChartItem) -> (Vec<f64>, Vec<Color>) {
        if item.mode() == ItemMode::Design && item.series().iter().all(|s| s.is_empty()) {
            let values = series_chart::design_values(0).to_vec();
            let colors = SERIES_PALETTE[..values.len()].to_vec();
            return (values, colors);
        }
        match item.series().first() {
            Some(series) => (series.data.values.clone(), series.data.colors.clone()),
            None => (Vec::new(), Vec::new()),
        }
    }
}

impl Chart for PieChart {
    fn legend_size(&self, item: &ChartItem, font: Font) -> Size {
        let fm = font.metrics();
        let mut cw = 0.0;
        let mut max_width = 0.0f64;
        for label in Self::legend_labels(item) {
            cw += fm.height();
            let w = fm.width(&label);
            if max_width < w {
                max_width = w + 10.0;
            }
        }
        cw += fm.height();
        Size::new(max_width + fm.height() * 2.0, cw)
    }

    fn paint_chart(&self, item: &ChartItem, painter: &mut Painter, rect: Rect) {
        let (values, colors) = Self::slices(item);
        let total: f64 = values.iter().sum();
        if rect.is_empty() || total == 0.0 {
            return;
        }

        let padding = series_chart::v_padding(rect);
        let plot = rect.adjusted(padding, padding, -padding, -padding);
        let radius = plot.width.min(plot.height) / 2.0;
        let center = Point::new(plot.center_x(), plot.center_y());

        painter.save();
        let mut start_angle = 0.0;
        for (i, value) in values.iter().enumerate() {
            let sweep = value / total * 360.0;
            let color = colors.get(i).copied().unwrap_or(Color::BLACK);
            painter.set_pen(color, 1.0);
            painter.set_brush(Some(color));
            painter.draw_pie(center, radius, start_angle, sweep);
            start_angle += sweep;
        }
        painter.restore();
    }

    fn paint_legend(&self, item: &ChartItem, painter: &mut Painter, rect: Rect) {
        let rect = self.prepare_legend(item, painter, rect);
        let fm = painter.font().metrics();
        let indicator = fm.height() / 2.0;

        painter.set_pen(Color::BLACK, 1.0);
        if item.legend_border() {
            painter.set_brush(None);
            painter.draw_rect(rect);
        }
        let indicators_rect = rect.adjusted(indicator, indicator, 0.0, 0.0);

        let (_, colors) = Self::slices(item);
        let mut cw = 0.0;
        for (i, label) in Self::legend_labels(item).iter().enumerate() {
            painter.set_pen(Color::BLACK, 1.0);
            painter.draw_text(
                indicators_rect.adjusted(indicator + indicator / 2.0, cw, 0.0, 0.0),
                HAlign::Left,
                VAlign::Top,
                label,
            );
            let color = colors.get(i).copied().unwrap_or(Color::BLACK);
            painter.set_brush(Some(color));
            painter.draw_ellipse(
                Point::new(
                    indicators_rect.left() + indicator / 2.0,
                    indicators_rect.top() + cw + indicator,
                ),
                indicator / 2.0,
                indicator / 2.0,
            );
            cw += fm.height();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::ChartItem;
    use crate::painter::RenderPrimitive;
    use crate::series::SeriesItem;

    fn pie_slices(painter: &Painter) -> Vec<(f64, f64)> {
        painter
            .primitives()
            .iter()
            .filter_map(|p| match p {
                RenderPrimitive::PieSlice {
                    start_angle,
                    sweep_angle,
                    ..
                } => Some((*start_angle, *sweep_angle)),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_slices_proportional_and_contiguous() {
        let mut item = ChartItem::new();
        item.set_mode(ItemMode::Render);
        let mut series = SeriesItem::new("sales");
        series.data.values = vec![10.0, 20.0, 10.0];
        series.data.colors = vec![Color::rgb(1, 1, 1), Color::rgb(2, 2, 2), Color::rgb(3, 3, 3)];
        item.push_series(series);

        let mut painter = Painter::new(Size::new(400.0, 300.0), Font::default());
        PieChart.paint_chart(&item, &mut painter, Rect::new(0.0, 0.0, 400.0, 300.0));

        let slices = pie_slices(&painter);
        assert_eq!(slices.len(), 3);
        assert_eq!(slices[0], (0.0, 90.0));
        assert_eq!(slices[1], (90.0, 180.0));
        assert_eq!(slices[2], (270.0, 90.0));
    }

    #[test]
    fn test_design_mode_uses_placeholder_slices() {
        let item = ChartItem::new();
        let mut painter = Painter::new(Size::new(400.0, 300.0), Font::default());
        PieChart.paint_chart(&item, &mut painter, Rect::new(0.0, 0.0, 400.0, 300.0));
        let slices = pie_slices(&painter);
        // Three placeholder values 10, 35, 15
        assert_eq!(slices.len(), 3);
        assert_eq!(slices[0].1, 10.0 / 60.0 * 360.0);
    }

    #[test]
    fn test_zero_total_paints_nothing() {
        let mut item = ChartItem::new();
        item.set_mode(ItemMode::Render);
        let mut series = SeriesItem::new("flat");
        series.data.values = vec![0.0, 0.0];
        item.push_series(series);
        let mut painter = Painter::new(Size::new(400.0, 300.0), Font::default());
        PieChart.paint_chart(&item, &mut painter, Rect::new(0.0, 0.0, 400.0, 300.0));
        assert!(painter.primitives().is_empty());
    }

    #[test]
    fn test_legend_lists_labels() {
        let mut item = ChartItem::new();
        item.set_labels(vec!["North".into(), "South".into()]);
        let mut painter = Painter::new(Size::new(400.0, 300.0), Font::default());
        PieChart.paint_legend(&item, &mut painter, Rect::new(0.0, 0.0, 200.0, 200.0));
        let texts: Vec<&str> = painter
            .primitives()
            .iter()
            .filter_map(|p| match p {
                RenderPrimitive::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(texts, vec!["North", "South"]);
    }
}
