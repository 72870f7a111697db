use crate::error::ConfigError;

// ---------------------------------------------------------------------------
// Column layout of the player-statistics sheet
// ---------------------------------------------------------------------------

/// Canonical header of the source sheet, in order.
pub const CANONICAL_COLUMNS: [&str; 21] = [
    "Rk", "Name", "Born", "GP", "G", "A", "P", "ESG", "PPG", "GWG", "ESA", "PPA", "ESP", "PPP",
    "G/GP", "A/GP", "P/GP", "SHOTS", "SH%", "HITS", "BS",
];

/// Columns of a cleaned table, in export order.
pub const CLEAN_COLUMNS: [&str; 6] = ["Name", "Born", "GP", "G", "A", "P"];

/// Export spellings seen in the wild → canonical name.
const ALIASES: [(&str, &str); 4] = [
    ("player", "name"),
    ("pts", "p"),
    ("s", "shots"),
    ("rank", "rk"),
];

/// Lower-case, whitespace-free form used for header comparison.
fn normalize(header: &str) -> String {
    let squashed: String = header
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_ascii_lowercase();
    ALIASES
        .iter()
        .find(|(alias, _)| *alias == squashed)
        .map(|(_, canonical)| canonical.to_string())
        .unwrap_or(squashed)
}

fn same_column(found: &str, expected: &str) -> bool {
    normalize(found) == normalize(expected)
}

// ---------------------------------------------------------------------------
// ColumnMap – where each kept field lives in the loaded sheet
// ---------------------------------------------------------------------------

/// Source column index of each field the cleaner keeps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnMap {
    pub name: usize,
    pub born: usize,
    pub games: usize,
    pub goals: usize,
    pub assists: usize,
    pub points: usize,
}

impl ColumnMap {
    fn from_lookup(lookup: impl Fn(&str) -> Option<usize>) -> Result<Self, ConfigError> {
        let find = |name: &str| lookup(name).ok_or_else(|| ConfigError::MissingColumn(name.into()));
        Ok(ColumnMap {
            name: find("Name")?,
            born: find("Born")?,
            games: find("GP")?,
            goals: find("G")?,
            assists: find("A")?,
            points: find("P")?,
        })
    }
}

// ---------------------------------------------------------------------------
// Schema
// ---------------------------------------------------------------------------

/// Expected header of the input sheet.
///
/// Loaded headers are checked against it position by position instead of
/// being blindly renamed, so a sheet with an extra or missing column fails
/// up front rather than shifting every field by one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    columns: Vec<String>,
}

impl Default for Schema {
    fn default() -> Self {
        Schema::new(CANONICAL_COLUMNS.iter().map(|c| c.to_string()).collect())
    }
}

impl Schema {
    pub fn new(columns: Vec<String>) -> Self {
        Schema { columns }
    }

    /// Check `headers` against the schema and locate the kept fields.
    ///
    /// Two layouts are accepted:
    /// * the full schema, matched position by position;
    /// * the six clean columns in any order (a previously cleaned export).
    pub fn resolve(&self, headers: &[String]) -> Result<ColumnMap, ConfigError> {
        if headers.len() == self.columns.len() {
            for (position, (found, expected)) in headers.iter().zip(&self.columns).enumerate() {
                if !same_column(found, expected) {
                    return Err(ConfigError::HeaderMismatch {
                        position,
                        expected: expected.clone(),
                        found: found.clone(),
                    });
                }
            }
            return ColumnMap::from_lookup(|name| {
                self.columns.iter().position(|c| same_column(c, name))
            });
        }

        if headers.len() == CLEAN_COLUMNS.len() {
            for (position, found) in headers.iter().enumerate() {
                if !CLEAN_COLUMNS.iter().any(|c| same_column(found, c)) {
                    return Err(ConfigError::HeaderMismatch {
                        position,
                        expected: CLEAN_COLUMNS.join(" | "),
                        found: found.clone(),
                    });
                }
            }
            return ColumnMap::from_lookup(|name| {
                headers.iter().position(|h| same_column(h, name))
            });
        }

        Err(ConfigError::ColumnCount {
            expected: self.columns.len(),
            found: headers.len(),
        })
    }
}
