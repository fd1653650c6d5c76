//! Charts - chart geometry and rendering engine for report items
//!
//! This crate provides support for:
//! - Representing chart series bound to data source columns
//! - Deriving axis ranges, ticks and labels from series data
//! - Laying out title, legend and diagram areas inside an item rect
//! - Label collision avoidance by rotation and font shrinking
//! - Rendering pie, bar and line charts to render primitives or SVG
//! - Design-mode placeholder previews when no data is bound

mod axis;
mod bars;
mod chart;
mod error;
mod geometry;
mod item;
mod lines;
mod painter;
mod palette;
mod pie;
mod series;
mod series_chart;
mod svg;

pub use axis::*;
pub use bars::*;
pub use chart::*;
pub use error::*;
pub use geometry::*;
pub use item::*;
pub use lines::*;
pub use painter::*;
pub use palette::*;
pub use pie::*;
pub use series::*;
pub use svg::*;
