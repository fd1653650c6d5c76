//! Data source contract for report items
//!
//! Report items consume tabular data through a minimal forward cursor:
//! `first()`, `next()`, `eof()` and `data(column)`. This crate defines
//! that contract, the scalar [`Value`] it yields, and an in-memory
//! [`RecordSet`] implementation used by hosts without a live backend
//! and by the chart engine's tests.

mod cursor;
mod value;

pub use cursor::*;
pub use value::*;
