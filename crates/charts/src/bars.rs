//! Bar chart variants
//!
//! Vertical bars grow up from the zero baseline over a horizontal
//! category band; horizontal bars grow rightward next to a vertical
//! label band. Both reuse the shared grid, label and legend painters.

use crate::chart::Chart;
use crate::geometry::{Font, Rect, Size};
use crate::item::ChartItem;
use crate::painter::Painter;
use crate::palette::Color;
use crate::series_chart::{self, AxisPair};

pub struct VerticalBarChart;

pub struct HorizontalBarChart;

/// Height of the bottom category-label band, zero when there are no
/// labels. Rotated labels get up to half the chart height.
fn horizontal_labels_band(item: &ChartItem, painter: &Painter, rect: Rect) -> f64 {
    if item.labels().is_empty() {
        return 0.0;
    }
    let fm = painter.font().metrics();
    let strip = Rect::new(rect.left(), rect.bottom() - fm.height(), rect.width, fm.height());
    if series_chart::vertical_labels(item, painter.font(), strip) {
        let max_width = item
            .labels()
            .iter()
            .map(|l| fm.width(l))
            .fold(0.0, f64::max);
        (max_width + series_chart::v_padding(rect)).min(rect.height / 2.0)
    } else {
        fm.height() + 4.0
    }
}

/// Width of the left category-label band, zero when there are no
/// labels. Capped at half the chart width.
fn vertical_labels_band(item: &ChartItem, painter: &Painter, rect: Rect) -> f64 {
    if item.labels().is_empty() {
        return 0.0;
    }
    let fm = painter.font().metrics();
    let max_width = item
        .labels()
        .iter()
        .map(|l| fm.width(l))
        .fold(0.0, f64::max);
    (max_width + series_chart::h_padding(rect) * 2.0).min(rect.width / 2.0)
}

impl Chart for VerticalBarChart {
    fn legend_size(&self, item: &ChartItem, font: Font) -> Size {
        series_chart::legend_size(item, font)
    }

    fn paint_chart(&self, item: &ChartItem, painter: &mut Painter, rect: Rect) {
        if rect.is_empty() || series_chart::values_count(item) == 0 {
            return;
        }
        let axes = AxisPair::update(item);

        painter.save();
        let h_pad = series_chart::h_padding(rect);
        let v_pad = series_chart::v_padding(rect);
        let margin = series_chart::values_h_margin(painter, &axes.y);
        let v_margin = series_chart::values_v_margin(painter);
        let labels_band = horizontal_labels_band(item, painter, rect);

        let grid_rect = rect.adjusted(
            h_pad,
            v_pad + v_margin / 2.0,
            -h_pad,
            -(v_pad + labels_band),
        );
        series_chart::paint_vertical_grid(painter, grid_rect, &axes.y);

        let plot = grid_rect.adjusted(margin, 0.0, 0.0, 0.0);
        let series = series_chart::series_values(item);
        let values_count = series_chart::values_count(item);
        let series_count = series_chart::series_count(item).max(1);
        let h_step = plot.width / values_count as f64;
        let bar_width = h_step / (series_count + 1) as f64;
        let baseline = plot.bottom() + axes.y.min_value() / axes.y.delta() * plot.height;

        for (s, (color, values)) in series.iter().enumerate() {
            painter.set_pen(Color::BLACK, 1.0);
            painter.set_brush(Some(*color));
            for (i, value) in values.iter().enumerate() {
                let top = plot.bottom()
                    - (value - axes.y.min_value()) / axes.y.delta() * plot.height;
                let x = plot.left() + h_step * i as f64 + bar_width * (s as f64 + 0.5);
                let bar = Rect::new(x, top.min(baseline), bar_width, (top - baseline).abs());
                if !bar.is_empty() {
                    painter.draw_rect(bar);
                }
            }
        }

        let labels_rect = Rect::new(plot.left(), grid_rect.bottom(), plot.width, labels_band);
        series_chart::paint_horizontal_labels(item, painter, labels_rect);
        painter.restore();
    }

    fn paint_legend(&self, item: &ChartItem, painter: &mut Painter, rect: Rect) {
        let rect = self.prepare_legend(item, painter, rect);
        series_chart::paint_series_legend(item, painter, rect);
    }
}

impl Chart for HorizontalBarChart {
    fn legend_size(&self, item: &ChartItem, font: Font) -> Size {
        series_chart::legend_size(item, font)
    }

    fn paint_chart(&self, item: &ChartItem, painter: &mut Painter, rect: Rect) {
        if rect.is_empty() || series_chart::values_count(item) == 0 {
            return;
        }
        let axes = AxisPair::update(item);

        painter.save();
        let h_pad = series_chart::h_padding(rect);
        let v_pad = series_chart::v_padding(rect);
        let v_margin = series_chart::values_v_margin(painter);
        let labels_band = vertical_labels_band(item, painter, rect);

        let grid_rect = rect.adjusted(
            h_pad + labels_band,
            v_pad,
            -h_pad,
            -(v_pad + v_margin),
        );
        series_chart::paint_horizontal_grid(painter, grid_rect, &axes.y);

        let plot = grid_rect.adjusted(0.0, 0.0, 0.0, 0.0);
        let series = series_chart::series_values(item);
        let values_count = series_chart::values_count(item);
        let series_count = series_chart::series_count(item).max(1);
        let v_step = plot.height / values_count as f64;
        let bar_height = v_step / (series_count + 1) as f64;
        let baseline = plot.left() - axes.y.min_value() / axes.y.delta() * plot.width;

        for (s, (color, values)) in series.iter().enumerate() {
            painter.set_pen(Color::BLACK, 1.0);
            painter.set_brush(Some(*color));
            for (i, value) in values.iter().enumerate() {
                let end = plot.left()
                    + (value - axes.y.min_value()) / axes.y.delta() * plot.width;
                let y = plot.top() + v_step * i as f64 + bar_height * (s as f64 + 0.5);
                let bar = Rect::new(baseline.min(end), y, (end - baseline).abs(), bar_height);
                if !bar.is_empty() {
                    painter.draw_rect(bar);
                }
            }
        }

        let labels_rect = Rect::new(rect.left() + h_pad, plot.top(), labels_band, plot.height);
        series_chart::paint_vertical_labels(item, painter, labels_rect);
        painter.restore();
    }

    fn paint_legend(&self, item: &ChartItem, painter: &mut Painter, rect: Rect) {
        let rect = self.prepare_legend(item, painter, rect);
        series_chart::paint_series_legend(item, painter, rect);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::{ChartItem, ItemMode};
    use crate::painter::RenderPrimitive;
    use crate::series::SeriesItem;

    fn item_with_values(values: &[f64]) -> ChartItem {
        let mut item = ChartItem::new();
        item.set_mode(ItemMode::Render);
        let mut series = SeriesItem::new("sales");
        series.data.values = values.to_vec();
        item.push_series(series);
        item
    }

    fn bars(painter: &Painter) -> Vec<Rect> {
        painter
            .primitives()
            .iter()
            .filter_map(|p| match p {
                RenderPrimitive::Rect { rect, fill: Some(_), .. } => Some(*rect),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_vertical_bars_share_baseline() {
        let item = item_with_values(&[10.0, 20.0, 5.0]);
        let mut painter = Painter::new(Size::new(400.0, 300.0), Font::default());
        VerticalBarChart.paint_chart(&item, &mut painter, Rect::new(0.0, 0.0, 400.0, 300.0));

        let bars = bars(&painter);
        assert_eq!(bars.len(), 3);
        let bottom = bars[0].bottom();
        assert!(bars.iter().all(|b| (b.bottom() - bottom).abs() < 1e-9));
        // Heights are proportional to the values
        assert!((bars[1].height / bars[0].height - 2.0).abs() < 1e-9);
        assert!((bars[0].height / bars[2].height - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_vertical_bars_empty_item_paints_nothing() {
        let mut item = ChartItem::new();
        item.set_mode(ItemMode::Render);
        let mut painter = Painter::new(Size::new(400.0, 300.0), Font::default());
        VerticalBarChart.paint_chart(&item, &mut painter, Rect::new(0.0, 0.0, 400.0, 300.0));
        assert!(painter.primitives().is_empty());
    }

    #[test]
    fn test_vertical_bars_grouped_by_series() {
        let mut item = item_with_values(&[10.0, 20.0]);
        let mut second = SeriesItem::new("expenses");
        second.data.values = vec![5.0, 15.0];
        item.push_series(second);
        let mut painter = Painter::new(Size::new(400.0, 300.0), Font::default());
        VerticalBarChart.paint_chart(&item, &mut painter, Rect::new(0.0, 0.0, 400.0, 300.0));
        assert_eq!(bars(&painter).len(), 4);
    }

    #[test]
    fn test_horizontal_bars_share_left_baseline() {
        let item = item_with_values(&[10.0, 20.0, 5.0]);
        let mut painter = Painter::new(Size::new(400.0, 300.0), Font::default());
        HorizontalBarChart.paint_chart(&item, &mut painter, Rect::new(0.0, 0.0, 400.0, 300.0));

        let bars = bars(&painter);
        assert_eq!(bars.len(), 3);
        let left = bars[0].left();
        assert!(bars.iter().all(|b| (b.left() - left).abs() < 1e-9));
        assert!((bars[1].width / bars[0].width - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_horizontal_bars_reserve_label_band() {
        let mut item = item_with_values(&[10.0, 20.0]);
        item.set_labels(vec!["Alpha".into(), "Beta".into()]);
        let rect = Rect::new(0.0, 0.0, 400.0, 300.0);
        let mut painter = Painter::new(Size::new(400.0, 300.0), Font::default());
        let band = vertical_labels_band(&item, &painter, rect);
        assert!(band > 0.0);
        HorizontalBarChart.paint_chart(&item, &mut painter, rect);
        for bar in bars(&painter) {
            assert!(bar.left() >= band);
        }
    }

    #[test]
    fn test_design_mode_paints_three_series() {
        let item = ChartItem::new();
        let mut painter = Painter::new(Size::new(400.0, 300.0), Font::default());
        VerticalBarChart.paint_chart(&item, &mut painter, Rect::new(0.0, 0.0, 400.0, 300.0));
        // Three preview series of three points each
        assert_eq!(bars(&painter).len(), 9);
    }

    #[test]
    fn test_negative_values_grow_below_baseline() {
        let item = item_with_values(&[-10.0, 20.0]);
        let mut painter = Painter::new(Size::new(400.0, 300.0), Font::default());
        VerticalBarChart.paint_chart(&item, &mut painter, Rect::new(0.0, 0.0, 400.0, 300.0));
        let bars = bars(&painter);
        assert_eq!(bars.len(), 2);
        // The negative bar hangs under the positive bar's bottom edge
        assert!(bars[0].top() >= bars[1].bottom() - 1e-9);
    }
}
