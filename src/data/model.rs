use std::fmt::{self, Write};

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// CellValue – a single spreadsheet cell
// ---------------------------------------------------------------------------

/// A dynamically-typed cell as read from the workbook, before any coercion.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Text(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
    /// Empty cell, or a cell holding a spreadsheet error such as `#N/A`.
    Null,
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Text(s) => write!(f, "{s}"),
            CellValue::Integer(i) => write!(f, "{i}"),
            CellValue::Float(v) => write!(f, "{v}"),
            CellValue::Bool(b) => write!(f, "{b}"),
            CellValue::Null => write!(f, "<null>"),
        }
    }
}

impl CellValue {
    pub fn is_null(&self) -> bool {
        matches!(self, CellValue::Null)
    }
}

// ---------------------------------------------------------------------------
// RawTable – the loaded sheet
// ---------------------------------------------------------------------------

/// Header row plus data rows, exactly as loaded. Every row is padded (or
/// truncated) to the header width so column indices are always valid.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<CellValue>>,
}

impl RawTable {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<CellValue>>) -> Self {
        let width = headers.len();
        let rows = rows
            .into_iter()
            .map(|mut row| {
                row.resize(width, CellValue::Null);
                row
            })
            .collect();
        RawTable { headers, rows }
    }

    /// Number of data rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn width(&self) -> usize {
        self.headers.len()
    }

    /// First `n` rows rendered as tab-separated text, for console diagnostics.
    pub fn preview(&self, n: usize) -> String {
        let mut out = self.headers.join("\t");
        for row in self.rows.iter().take(n) {
            out.push('\n');
            let cells: Vec<String> = row.iter().map(|c| c.to_string()).collect();
            out.push_str(&cells.join("\t"));
        }
        out
    }
}

// ---------------------------------------------------------------------------
// PlayerRecord – one cleaned row
// ---------------------------------------------------------------------------

/// A cleaned player row. Numeric fields are `None` where the source cell
/// could not be coerced to an integer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerRecord {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Born")]
    pub born: Option<i64>,
    #[serde(rename = "GP")]
    pub games: Option<i64>,
    #[serde(rename = "G")]
    pub goals: Option<i64>,
    #[serde(rename = "A")]
    pub assists: Option<i64>,
    #[serde(rename = "P")]
    pub points: Option<i64>,
}

// ---------------------------------------------------------------------------
// PlayerTable – the cleaned dataset
// ---------------------------------------------------------------------------

/// The clean table. Index is the position in `records`, dense and zero-based.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayerTable {
    pub records: Vec<PlayerRecord>,
}

impl PlayerTable {
    pub fn new(records: Vec<PlayerRecord>) -> Self {
        PlayerTable { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// `(rows, columns)`, the way the diagnostics print table shapes.
    pub fn shape(&self) -> (usize, usize) {
        (self.records.len(), super::schema::CLEAN_COLUMNS.len())
    }

    /// First `n` rows as an aligned text table.
    pub fn preview(&self, n: usize) -> String {
        let mut out = String::new();
        let _ = write!(
            out,
            "{:<28} {:>6} {:>6} {:>6} {:>6} {:>6}",
            "Name", "Born", "GP", "G", "A", "P"
        );
        for r in self.records.iter().take(n) {
            let _ = write!(
                out,
                "\n{:<28} {:>6} {:>6} {:>6} {:>6} {:>6}",
                r.name,
                fmt_opt(r.born),
                fmt_opt(r.games),
                fmt_opt(r.goals),
                fmt_opt(r.assists),
                fmt_opt(r.points),
            );
        }
        out
    }
}

pub(crate) fn fmt_opt(v: Option<i64>) -> String {
    v.map(|v| v.to_string()).unwrap_or_else(|| "NaN".to_string())
}
