//! Chart item orchestration
//!
//! [`ChartItem`] owns the series collection, the active chart strategy
//! and every presentation property. It splits its rect into title,
//! legend and diagram areas on paint, and fills its series from a data
//! source during the first render pass.

use crate::chart::{Chart, ChartType};
use crate::error::{ChartError, ChartResult};
use crate::geometry::{Font, Rect, Size};
use crate::painter::{HAlign, Painter, RenderedChart, VAlign};
use crate::series::SeriesItem;
use datasource::{DataCursor, DataSourceProvider};
use rand::Rng;

/// Whether the item previews placeholder data or renders real data.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ItemMode {
    /// Designer preview with built-in placeholder data
    #[default]
    Design,
    /// Rendering real data
    Render,
}

/// Report render pass. Data is only filled on the first pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderPass {
    First,
    Second,
}

/// Horizontal alignment of the chart title
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TitleAlign {
    Left,
    #[default]
    Center,
    Right,
}

/// Vertical alignment of the legend block
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LegendAlign {
    Top,
    #[default]
    Center,
    Bottom,
}

/// Old/new value carried by a property change notification.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValue {
    Bool(bool),
    Int(i64),
    Real(f64),
    Text(String),
}

/// Receiver of property change notifications, the hook the designer
/// uses for undo tracking and live preview refresh.
pub trait PropertyObserver {
    fn property_changed(&mut self, name: &str, old: PropertyValue, new: PropertyValue);
}

/// A chart report item.
pub struct ChartItem {
    series: Vec<SeriesItem>,
    chart: Box<dyn Chart>,
    chart_type: ChartType,
    title: String,
    title_align: TitleAlign,
    legend_align: LegendAlign,
    show_legend: bool,
    legend_border: bool,
    datasource: String,
    labels_field: String,
    x_axis_field: String,
    labels: Vec<String>,
    series_line_width: f64,
    draw_points: bool,
    horizontal_axis_on_top: bool,
    mode: ItemMode,
    is_empty: bool,
    observer: Option<Box<dyn PropertyObserver>>,
}

impl ChartItem {
    pub fn new() -> Self {
        Self {
            series: Vec::new(),
            chart: ChartType::Pie.create(),
            chart_type: ChartType::Pie,
            title: String::new(),
            title_align: TitleAlign::Center,
            legend_align: LegendAlign::Center,
            show_legend: true,
            legend_border: true,
            datasource: String::new(),
            labels_field: String::new(),
            x_axis_field: String::new(),
            labels: vec!["First".to_string(), "Second".to_string(), "Third".to_string()],
            series_line_width: 4.0,
            draw_points: true,
            horizontal_axis_on_top: false,
            mode: ItemMode::Design,
            is_empty: true,
            observer: None,
        }
    }

    fn notify(&mut self, name: &str, old: PropertyValue, new: PropertyValue) {
        if let Some(observer) = self.observer.as_mut() {
            observer.property_changed(name, old, new);
        }
    }

    /// Install the change observer, replacing any previous one.
    pub fn set_observer(&mut self, observer: Box<dyn PropertyObserver>) {
        self.observer = Some(observer);
    }

    pub fn mode(&self) -> ItemMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: ItemMode) {
        self.mode = mode;
    }

    pub fn series(&self) -> &[SeriesItem] {
        &self.series
    }

    /// Append a configured series.
    pub fn push_series(&mut self, series: SeriesItem) {
        self.series.push(series);
    }

    /// True when a series with this display name already exists.
    pub fn is_series_exists(&self, name: &str) -> bool {
        self.series.iter().any(|s| s.name == name)
    }

    pub fn chart_type(&self) -> ChartType {
        self.chart_type
    }

    /// Switch the chart kind. The old strategy is dropped and a fresh
    /// one built; series data stays on the item untouched.
    pub fn set_chart_type(&mut self, chart_type: ChartType) {
        if self.chart_type != chart_type {
            let old = self.chart_type;
            self.chart_type = chart_type;
            self.chart = chart_type.create();
            tracing::debug!(from = old.as_str(), to = chart_type.as_str(), "chart type changed");
            self.notify(
                "chart_type",
                PropertyValue::Text(old.as_str().to_string()),
                PropertyValue::Text(chart_type.as_str().to_string()),
            );
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        let title = title.into();
        if self.title != title {
            let old = std::mem::replace(&mut self.title, title.clone());
            self.notify("chart_title", PropertyValue::Text(old), PropertyValue::Text(title));
        }
    }

    pub fn title_align(&self) -> TitleAlign {
        self.title_align
    }

    pub fn set_title_align(&mut self, align: TitleAlign) {
        if self.title_align != align {
            let old = self.title_align;
            self.title_align = align;
            self.notify(
                "title_align",
                PropertyValue::Int(old as i64),
                PropertyValue::Int(align as i64),
            );
        }
    }

    pub fn legend_align(&self) -> LegendAlign {
        self.legend_align
    }

    pub fn set_legend_align(&mut self, align: LegendAlign) {
        if self.legend_align != align {
            let old = self.legend_align;
            self.legend_align = align;
            self.notify(
                "legend_align",
                PropertyValue::Int(old as i64),
                PropertyValue::Int(align as i64),
            );
        }
    }

    pub fn show_legend(&self) -> bool {
        self.show_legend
    }

    pub fn set_show_legend(&mut self, show_legend: bool) {
        if self.show_legend != show_legend {
            self.show_legend = show_legend;
            self.notify(
                "show_legend",
                PropertyValue::Bool(!show_legend),
                PropertyValue::Bool(show_legend),
            );
        }
    }

    pub fn legend_border(&self) -> bool {
        self.legend_border
    }

    pub fn set_legend_border(&mut self, legend_border: bool) {
        if self.legend_border != legend_border {
            self.legend_border = legend_border;
            self.notify(
                "legend_border",
                PropertyValue::Bool(!legend_border),
                PropertyValue::Bool(legend_border),
            );
        }
    }

    pub fn datasource(&self) -> &str {
        &self.datasource
    }

    pub fn set_datasource(&mut self, datasource: impl Into<String>) {
        self.datasource = datasource.into();
    }

    pub fn labels_field(&self) -> &str {
        &self.labels_field
    }

    pub fn set_labels_field(&mut self, labels_field: impl Into<String>) {
        self.labels_field = labels_field.into();
    }

    pub fn x_axis_field(&self) -> &str {
        &self.x_axis_field
    }

    pub fn set_x_axis_field(&mut self, x_axis_field: impl Into<String>) {
        self.x_axis_field = x_axis_field.into();
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn set_labels(&mut self, labels: Vec<String>) {
        self.labels = labels;
    }

    pub fn series_line_width(&self) -> f64 {
        self.series_line_width
    }

    pub fn set_series_line_width(&mut self, width: f64) {
        if self.series_line_width != width {
            let old = self.series_line_width;
            self.series_line_width = width;
            self.notify(
                "series_line_width",
                PropertyValue::Real(old),
                PropertyValue::Real(width),
            );
        }
    }

    pub fn draw_points(&self) -> bool {
        self.draw_points
    }

    pub fn set_draw_points(&mut self, draw_points: bool) {
        if self.draw_points != draw_points {
            self.draw_points = draw_points;
            self.notify(
                "draw_points",
                PropertyValue::Bool(!draw_points),
                PropertyValue::Bool(draw_points),
            );
        }
    }

    pub fn horizontal_axis_on_top(&self) -> bool {
        self.horizontal_axis_on_top
    }

    pub fn set_horizontal_axis_on_top(&mut self, on_top: bool) {
        if self.horizontal_axis_on_top != on_top {
            self.horizontal_axis_on_top = on_top;
            self.notify(
                "horizontal_axis_on_top",
                PropertyValue::Bool(!on_top),
                PropertyValue::Bool(on_top),
            );
        }
    }

    /// Append a fresh element to a named collection and return it for
    /// configuration. The only collection a chart item has is "series".
    pub fn create_element(&mut self, collection: &str) -> ChartResult<&mut SeriesItem> {
        if collection != "series" {
            return Err(ChartError::UnknownCollection(collection.to_string()));
        }
        self.series.push(SeriesItem::default());
        let index = self.series.len() - 1;
        Ok(&mut self.series[index])
    }

    /// Number of elements in a named collection.
    pub fn elements_count(&self, collection: &str) -> ChartResult<usize> {
        if collection != "series" {
            return Err(ChartError::UnknownCollection(collection.to_string()));
        }
        Ok(self.series.len())
    }

    /// Element of a named collection by index.
    pub fn element_at(&self, collection: &str, index: usize) -> ChartResult<&SeriesItem> {
        if collection != "series" {
            return Err(ChartError::UnknownCollection(collection.to_string()));
        }
        self.series.get(index).ok_or(ChartError::ElementOutOfRange {
            collection: collection.to_string(),
            index,
        })
    }

    /// True when this render pass should fill the item's data.
    pub fn needs_size_update(&self, pass: RenderPass) -> bool {
        pass == RenderPass::First && self.is_empty
    }

    /// Fill every still-empty series and the category labels from the
    /// bound data source. Missing data source means nothing is filled,
    /// the item just stops asking for updates.
    pub fn update_item_size<R: Rng>(
        &mut self,
        data_manager: &mut dyn DataSourceProvider,
        pass: RenderPass,
        rng: &mut R,
    ) {
        let _ = pass;
        self.is_empty = false;
        if self.datasource.is_empty() {
            return;
        }
        let Some(cursor) = data_manager.cursor(&self.datasource) else {
            tracing::warn!(datasource = %self.datasource, "chart data source not found");
            return;
        };
        for series in &mut self.series {
            if series.is_empty() {
                series.labels_column = self.labels_field.clone();
                series.x_axis_column = self.x_axis_field.clone();
                series.fill_series_data(cursor, rng);
            }
        }
        self.fill_labels(cursor);
    }

    /// Rebuild the category labels from the labels field, one entry per
    /// record.
    pub fn fill_labels(&mut self, cursor: &mut dyn DataCursor) {
        self.labels.clear();
        if self.labels_field.is_empty() {
            return;
        }
        cursor.first();
        while !cursor.eof() {
            self.labels.push(cursor.data(&self.labels_field).to_string());
            cursor.next();
        }
    }

    /// Paint the whole item: title strip on top, legend to the right,
    /// diagram in the remaining area.
    pub fn paint(&self, painter: &mut Painter, rect: Rect) {
        painter.save();
        let border_margin = (rect.height * 0.01).min(10.0);
        let max_title_height = rect.height * 0.2;
        let fm = painter.font().metrics();

        let title_offset = if self.title.is_empty() {
            0.0
        } else {
            (fm.height() + border_margin * 2.0).min(max_title_height)
        };

        let title_rect = Rect::new(
            rect.left() + border_margin,
            rect.top() + border_margin,
            rect.width - border_margin * 2.0,
            title_offset,
        );
        let legend_rect = if self.show_legend {
            self.chart
                .legend_rect(self, painter.font(), rect, false, border_margin, title_offset)
        } else {
            Rect::default()
        };
        let diagram_rect = rect.adjusted(
            border_margin,
            title_offset + border_margin,
            -(legend_rect.width + border_margin * 2.0),
            -border_margin,
        );

        self.paint_title(painter, title_rect);
        if self.show_legend {
            self.chart.paint_legend(self, painter, legend_rect);
        }
        self.chart.paint_chart(self, painter, diagram_rect);
        painter.restore();
    }

    /// Render the item standalone at the given size.
    pub fn render(&self, size: Size) -> RenderedChart {
        let mut painter = Painter::new(size, Font::default());
        self.paint(&mut painter, Rect::from_size(size));
        painter.finish()
    }

    fn paint_title(&self, painter: &mut Painter, title_rect: Rect) {
        if self.title.is_empty() {
            return;
        }
        painter.save();
        let mut font = painter.font();
        let mut fm = font.metrics();
        while (fm.height() > title_rect.height || fm.width(&self.title) > title_rect.width)
            && font.pixel_size > 1.0
        {
            font = Font::with_pixel_size(font.pixel_size - 1.0);
            fm = font.metrics();
        }
        painter.set_font(font);
        let halign = match self.title_align {
            TitleAlign::Left => HAlign::Left,
            TitleAlign::Center => HAlign::Center,
            TitleAlign::Right => HAlign::Right,
        };
        painter.draw_text(title_rect, halign, VAlign::Center, &self.title);
        painter.restore();
    }

    /// Copy of this item with the same configuration and series
    /// settings but no materialized data or observer.
    pub fn duplicate(&self) -> ChartItem {
        ChartItem {
            series: self.series.iter().map(|s| s.clone_settings()).collect(),
            chart: self.chart_type.create(),
            chart_type: self.chart_type,
            title: self.title.clone(),
            title_align: self.title_align,
            legend_align: self.legend_align,
            show_legend: self.show_legend,
            legend_border: self.legend_border,
            datasource: self.datasource.clone(),
            labels_field: self.labels_field.clone(),
            x_axis_field: self.x_axis_field.clone(),
            labels: self.labels.clone(),
            series_line_width: self.series_line_width,
            draw_points: self.draw_points,
            horizontal_axis_on_top: self.horizontal_axis_on_top,
            mode: self.mode,
            is_empty: true,
            observer: None,
        }
    }
}

impl Default for ChartItem {
    fn default() -> Self {
        Self::new()
    }
}
