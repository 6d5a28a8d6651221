/// Data layer: core types and loading.
///
/// Architecture:
/// ```text
///  .csv / .json / .parquet
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → Dataset (parse failure halts here)
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  Dataset  │  ordered columns, rows of CellValue
///   └──────────┘
///        │
///        ▼
///     pipeline      schema → metrics / subjects / prediction / projections
/// ```

pub mod loader;
pub mod model;
