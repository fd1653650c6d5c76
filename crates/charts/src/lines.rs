//! Line chart variants
//!
//! The plain line chart joins slot-centered points over the same layout
//! the vertical bar chart uses. The grid-lines chart plots against
//! explicit x positions on a full coordinate grid instead.

use crate::chart::Chart;
use crate::geometry::{Font, Point, Rect, Size};
use crate::item::{ChartItem, ItemMode};
use crate::painter::Painter;
use crate::series_chart::{self, AxisPair};

pub struct LinesChart;

pub struct GridLinesChart;

impl Chart for LinesChart {
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
        let labels_band = if item.labels().is_empty() {
            0.0
        } else {
            painter.font().metrics().height() + 4.0
        };

        let grid_rect = rect.adjusted(
            h_pad,
            v_pad + v_margin / 2.0,
            -h_pad,
            -(v_pad + labels_band),
        );
        series_chart::paint_vertical_grid(painter, grid_rect, &axes.y);

        let plot = grid_rect.adjusted(margin, 0.0, 0.0, 0.0);
        let h_step = plot.width / series_chart::values_count(item) as f64;
        let map_y = |value: f64| {
            plot.bottom() - (value - axes.y.min_value()) / axes.y.delta() * plot.height
        };

        for (color, values) in series_chart::series_values(item) {
            for pair in values.windows(2).enumerate() {
                let (i, window) = pair;
                let from = Point::new(
                    plot.left() + h_step * i as f64 + h_step / 2.0,
                    map_y(window[0]),
                );
                let to = Point::new(
                    plot.left() + h_step * (i + 1) as f64 + h_step / 2.0,
                    map_y(window[1]),
                );
                series_chart::draw_segment(item, painter, from, to, color);
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

impl GridLinesChart {
    /// Point positions of one series: explicit x values when bound,
    /// otherwise the point index. Design previews spread the three
    /// placeholder points over the axis span.
    fn series_points(item: &ChartItem) -> Vec<(crate::palette::Color, Vec<(f64, f64)>)> {
        if item.mode() == ItemMode::Design && item.series().iter().all(|s| s.is_empty()) {
            return series_chart::series_values(item)
                .into_iter()
                .map(|(color, values)| {
                    let points = values
                        .iter()
                        .enumerate()
                        .map(|(i, v)| (i as f64 * 20.0, *v))
                        .collect();
                    (color, points)
                })
                .collect();
        }
        item.series()
            .iter()
            .map(|series| {
                let points = series
                    .data
                    .values
                    .iter()
                    .enumerate()
                    .map(|(i, v)| {
                        let x = series
                            .data
                            .x_axis_values
                            .get(i)
                            .copied()
                            .unwrap_or(i as f64);
                        (x, *v)
                    })
                    .collect();
                (series.color, points)
            })
            .collect()
    }
}

impl Chart for GridLinesChart {
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

        let grid_rect = rect.adjusted(
            h_pad,
            v_pad + v_margin / 2.0,
            -h_pad,
            -(v_pad + v_margin + series_chart::h_padding(rect)),
        );
        series_chart::paint_grid(item, painter, grid_rect, &axes.y, &axes.x);

        // Data area inside the grid, matching where paint_grid put the
        // gridlines.
        let margin = series_chart::values_h_margin(painter, &axes.y);
        let grid_offset = series_chart::h_padding(grid_rect);
        let plot = grid_rect.adjusted(margin + grid_offset, 0.0, 0.0, 0.0);

        let map = |x: f64, y: f64| {
            Point::new(
                plot.left() + (x - axes.x.min_value()) / axes.x.delta() * plot.width,
                plot.bottom() - (y - axes.y.min_value()) / axes.y.delta() * plot.height,
            )
        };

        for (color, points) in Self::series_points(item) {
            for window in points.windows(2) {
                let from = map(window[0].0, window[0].1);
                let to = map(window[1].0, window[1].1);
                series_chart::draw_segment(item, painter, from, to, color);
            }
        }
        painter.restore();
    }

    fn paint_legend(&self, item: &ChartItem, painter: &mut Painter, rect: Rect) {
        let rect = self.prepare_legend(item, painter, rect);
        series_chart::paint_series_legend(item, painter, rect);
    }
}
