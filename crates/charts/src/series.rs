//! Data series owned by a chart item

use crate::palette::{point_color, Color};
use datasource::DataCursor;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Which chart family a series prefers when the item mixes types.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SeriesPreferredType {
    /// Render as bars
    #[default]
    Bar,
    /// Render as a line
    Line,
}

/// Materialized point data of one series, rebuilt on every fill.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SeriesData {
    /// Numeric values, one per record
    pub values: Vec<f64>,
    /// Point labels, present only when a labels column is configured
    pub labels: Vec<String>,
    /// Explicit x positions, present only when an x column is configured
    pub x_axis_values: Vec<f64>,
    /// Per-point colors assigned at fill time
    pub colors: Vec<Color>,
}

/// One named data series: column bindings plus the data materialized
/// from them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SeriesItem {
    /// Display name, shown in the legend
    pub name: String,
    /// Column providing the numeric values (required)
    pub values_column: String,
    /// Column providing point labels (optional, empty = none)
    pub labels_column: String,
    /// Column providing x positions (optional, empty = none)
    pub x_axis_column: String,
    /// Series color used by legend swatches and line strokes
    pub color: Color,
    /// Preferred rendering family
    pub preferred_type: SeriesPreferredType,
    /// Materialized data, never persisted
    #[serde(skip)]
    pub data: SeriesData,
}

impl SeriesItem {
    /// Create a named series with no column bindings yet.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// True until the series has been filled from a data source.
    pub fn is_empty(&self) -> bool {
        self.data.values.is_empty()
    }

    /// Copy of this series with every configuration field but no
    /// materialized data.
    pub fn clone_settings(&self) -> SeriesItem {
        SeriesItem {
            name: self.name.clone(),
            values_column: self.values_column.clone(),
            labels_column: self.labels_column.clone(),
            x_axis_column: self.x_axis_column.clone(),
            color: self.color,
            preferred_type: self.preferred_type,
            data: SeriesData::default(),
        }
    }

    /// Rebuild the materialized data from a cursor scan.
    ///
    /// Appends one value (and, when the columns are bound, one label
    /// and one x position) per record, and assigns the point color for
    /// the record index. The RNG is only consulted past the palette
    /// head, so seeded fills are reproducible.
    pub fn fill_series_data<R: Rng>(&mut self, cursor: &mut dyn DataCursor, rng: &mut R) {
        self.data = SeriesData::default();

        cursor.first();
        let mut index = 0;
        while !cursor.eof() {
            if !self.labels_column.is_empty() {
                self.data.labels.push(cursor.data(&self.labels_column).to_string());
            }
            if !self.x_axis_column.is_empty() {
                self.data
                    .x_axis_values
                    .push(cursor.data(&self.x_axis_column).as_number());
            }
            self.data.values.push(cursor.data(&self.values_column).as_number());
            self.data.colors.push(point_color(index, rng));
            cursor.next();
            index += 1;
        }
        tracing::trace!(series = %self.name, points = self.data.values.len(), "series filled from cursor");
    }
}
