use lazy_static::lazy_static;
use regex::Regex;

use super::model::{CellValue, PlayerRecord, PlayerTable, RawTable};
use super::schema::Schema;
use crate::error::ConfigError;

/// Minimum career games played for a player to be ranked.
pub const MIN_GAMES_PLAYED: i64 = 200;

lazy_static! {
    static ref YEAR_ANNOTATION: Regex = Regex::new(r"\(\d{4}\)").unwrap();
}

// ---------------------------------------------------------------------------
// Cleaning result
// ---------------------------------------------------------------------------

/// Row counts at each filtering stage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CleanStats {
    pub rows_in: usize,
    pub after_born_filter: usize,
    pub after_games_filter: usize,
    /// Numeric cells (Born, GP, G, A, P) that failed coercion.
    pub null_cells: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cleaned {
    pub table: PlayerTable,
    pub stats: CleanStats,
}

// ---------------------------------------------------------------------------
// Coercion
// ---------------------------------------------------------------------------

/// Coerce a cell to an integer, `None` when it does not hold one.
///
/// Floats count only when integral (workbooks store every number as a float);
/// text is trimmed and parsed the same way.
pub fn to_integer(cell: &CellValue) -> Option<i64> {
    match cell {
        CellValue::Integer(i) => Some(*i),
        CellValue::Float(f) => integral(*f),
        CellValue::Text(s) => {
            let s = s.trim();
            s.parse::<i64>()
                .ok()
                .or_else(|| s.parse::<f64>().ok().and_then(integral))
        }
        CellValue::Bool(_) | CellValue::Null => None,
    }
}

fn integral(f: f64) -> Option<i64> {
    let in_range = f.abs() < i64::MAX as f64;
    (f.is_finite() && f.fract() == 0.0 && in_range).then_some(f as i64)
}

/// Remove `(YYYY)` birth-year annotations from a player name and trim it.
pub fn strip_year_annotation(name: &str) -> String {
    YEAR_ANNOTATION.replace_all(name, "").trim().to_string()
}

fn cell_to_name(cell: &CellValue) -> String {
    match cell {
        CellValue::Null => String::new(),
        other => strip_year_annotation(&other.to_string()),
    }
}

// ---------------------------------------------------------------------------
// Cleaner
// ---------------------------------------------------------------------------

/// Turn a loaded sheet into the clean player table.
///
/// Only column plumbing can fail. Malformed cells become `None` and the row
/// is then dropped by the Born / GP predicates.
pub fn clean(
    raw: &RawTable,
    schema: &Schema,
    start_year: i64,
    end_year: i64,
) -> Result<Cleaned, ConfigError> {
    if start_year > end_year {
        return Err(ConfigError::InvalidYearRange {
            start: start_year,
            end: end_year,
        });
    }
    let cols = schema.resolve(&raw.headers)?;

    let mut null_cells = 0;
    let mut coerce = |cell: &CellValue| {
        let value = to_integer(cell);
        if value.is_none() {
            null_cells += 1;
        }
        value
    };

    let records: Vec<PlayerRecord> = raw
        .rows
        .iter()
        .map(|row| PlayerRecord {
            name: cell_to_name(&row[cols.name]),
            born: coerce(&row[cols.born]),
            games: coerce(&row[cols.games]),
            goals: coerce(&row[cols.goals]),
            assists: coerce(&row[cols.assists]),
            points: coerce(&row[cols.points]),
        })
        .collect();

    let rows_in = records.len();
    let (table, after_born_filter) = filter_records(records, start_year, end_year);

    Ok(Cleaned {
        stats: CleanStats {
            rows_in,
            after_born_filter,
            after_games_filter: table.len(),
            null_cells,
        },
        table,
    })
}

/// Apply the Born-range and games-played filters to typed records.
pub fn clean_records(records: Vec<PlayerRecord>, start_year: i64, end_year: i64) -> PlayerTable {
    filter_records(records, start_year, end_year).0
}

fn filter_records(
    mut records: Vec<PlayerRecord>,
    start_year: i64,
    end_year: i64,
) -> (PlayerTable, usize) {
    records.retain(|r| matches!(r.born, Some(b) if (start_year..=end_year).contains(&b)));
    let after_born = records.len();
    records.retain(|r| matches!(r.games, Some(gp) if gp >= MIN_GAMES_PLAYED));
    (PlayerTable::new(records), after_born)
}
