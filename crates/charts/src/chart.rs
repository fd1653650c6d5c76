//! Chart strategy seam
//!
//! The closed set of chart kinds, the factory that builds the active
//! strategy, and the legend-rect geometry every kind shares.

use crate::bars::{HorizontalBarChart, VerticalBarChart};
use crate::geometry::{Font, Rect, Size};
use crate::item::{ChartItem, LegendAlign};
use crate::lines::{GridLinesChart, LinesChart};
use crate::painter::Painter;
use crate::pie::PieChart;
use serde::{Deserialize, Serialize};

/// Kind of chart rendered by a chart item.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChartType {
    /// Pie of the first series' values
    #[default]
    Pie,
    /// Bars growing up from the baseline
    VerticalBar,
    /// Bars growing rightward
    HorizontalBar,
    /// Points joined by line segments
    Lines,
    /// Line series over a full coordinate grid
    GridLines,
}

impl ChartType {
    /// Stable name used in change notifications
    pub fn as_str(&self) -> &'static str {
        match self {
            ChartType::Pie => "pie",
            ChartType::VerticalBar => "vertical_bar",
            ChartType::HorizontalBar => "horizontal_bar",
            ChartType::Lines => "lines",
            ChartType::GridLines => "grid_lines",
        }
    }

    /// Build the rendering strategy for this kind.
    pub(crate) fn create(self) -> Box<dyn Chart> {
        match self {
            ChartType::Pie => Box::new(PieChart),
            ChartType::VerticalBar => Box::new(VerticalBarChart),
            ChartType::HorizontalBar => Box::new(HorizontalBarChart),
            ChartType::Lines => Box::new(LinesChart),
            ChartType::GridLines => Box::new(GridLinesChart),
        }
    }
}

/// One chart-rendering strategy. Strategies are stateless: everything
/// is recomputed from the owning item on each paint.
pub trait Chart {
    /// Natural size of the legend at the given font.
    fn legend_size(&self, item: &ChartItem, font: Font) -> Size;

    /// Render the data visualization into `rect`.
    fn paint_chart(&self, item: &ChartItem, painter: &mut Painter, rect: Rect);

    /// Render the legend into `rect`.
    fn paint_legend(&self, item: &ChartItem, painter: &mut Painter, rect: Rect);

    /// Place the legend inside `parent`.
    ///
    /// Vertically the configured alignment decides the slot; the legend
    /// is flush right, reserving half the parent width when its natural
    /// width would take more than that. `take_all_rect` hands the whole
    /// parent over (used while shrinking an oversized legend). A legend
    /// taller than the available height is anchored at the title offset
    /// with no bottom margin, overriding the alignment.
    fn legend_rect(
        &self,
        item: &ChartItem,
        font: Font,
        parent: Rect,
        take_all_rect: bool,
        border_margin: f64,
        title_offset: f64,
    ) -> Rect {
        let legend_size = self.legend_size(item, font);

        let (legend_top_margin, legend_bottom_margin) = match item.legend_align() {
            LegendAlign::Top => (
                title_offset + border_margin,
                parent.height - (legend_size.height + title_offset),
            ),
            LegendAlign::Center => (
                title_offset + (parent.height - title_offset - legend_size.height) / 2.0,
                (parent.height - title_offset - legend_size.height) / 2.0,
            ),
            LegendAlign::Bottom => (
                parent.height - (legend_size.height + title_offset),
                border_margin,
            ),
        };

        let right_offset = if take_all_rect {
            0.0
        } else if legend_size.width > parent.width / 2.0 - border_margin {
            parent.width / 2.0
        } else {
            parent.width - legend_size.width
        };

        let overflow = legend_size.height > parent.height - title_offset;
        parent.adjusted(
            right_offset,
            if overflow { title_offset } else { legend_top_margin },
            -border_margin,
            if overflow { 0.0 } else { -legend_bottom_margin },
        )
    }

    /// Shrink the painter font until the legend's natural size fits
    /// `legend_rect`, then recompute the rect at that font over the
    /// whole slot. Returns the rect to paint into.
    fn prepare_legend(&self, item: &ChartItem, painter: &mut Painter, legend_rect: Rect) -> Rect {
        let mut font = painter.font();
        let mut size = self.legend_size(item, font);

        if size.height > legend_rect.height || size.width > legend_rect.width {
            while (size.height > legend_rect.height || size.width > legend_rect.width)
                && font.pixel_size > 1.0
            {
                font = Font::with_pixel_size(font.pixel_size - 1.0);
                size = self.legend_size(item, font);
            }
            painter.set_font(font);
            return self.legend_rect(item, font, legend_rect, true, 0.0, 0.0);
        }
        legend_rect
    }
}
