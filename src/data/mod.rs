/// Data layer: core types, loading, schema validation and aggregation.
///
/// Architecture:
/// ```text
///  .csv / .json / .parquet
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → Dataset
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  source   │  read once per session, fall back to empty on failure,
///   └──────────┘  detect Capabilities (schema)
///        │
///        ▼
///   ┌───────────┐
///   │ aggregate  │  pure counting views → AnalyticsReport (report)
///   └───────────┘
/// ```

pub mod aggregate;
pub mod error;
pub mod loader;
pub mod model;
pub mod report;
pub mod schema;
pub mod source;
