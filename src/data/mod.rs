/// Data layer: loading, cleaning, cohort selection and export.
///
/// Architecture:
/// ```text
///  workbook (.xlsx)
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  first sheet → RawTable
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  schema   │  header check → ColumnMap
///   │  clean    │  coerce, strip names, Born / GP filters → PlayerTable
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  cohort   │  birth-year buckets, top-k by metric → RankedSelection
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  export   │  CSV files
///   └──────────┘
/// ```

pub mod clean;
pub mod cohort;
pub mod export;
pub mod loader;
pub mod model;
pub mod schema;
