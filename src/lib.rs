//! Student performance dashboard core.
//!
//! Takes an uploaded table of academic records of unknown schema and turns it
//! into headline metrics, per-subject scores, an averaged GPA prediction
//! from two pre-trained models, and the optional assignment, calendar and
//! message tables. All outputs are plain serializable data.

pub mod data;
pub mod models;
pub mod pipeline;

pub use data::loader::{load_csv_reader, load_file};
pub use data::model::{CellValue, Dataset};
pub use pipeline::{DashboardReport, Pipeline};
