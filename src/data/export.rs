use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use super::cohort::RankedSelection;
use super::model::PlayerTable;

/// File receiving the per-cohort top players.
pub const TOP_PLAYERS_CSV: &str = "nhl_analysis_top.csv";
/// File receiving the full clean table.
pub const CLEAN_TABLE_CSV: &str = "nhl_analysis_clean.csv";

/// CSV row of the top-player export: the clean columns plus the cohort label.
#[derive(Serialize)]
struct TopRow<'a> {
    #[serde(rename = "Name")]
    name: &'a str,
    #[serde(rename = "Born")]
    born: Option<i64>,
    #[serde(rename = "GP")]
    games: Option<i64>,
    #[serde(rename = "G")]
    goals: Option<i64>,
    #[serde(rename = "A")]
    assists: Option<i64>,
    #[serde(rename = "P")]
    points: Option<i64>,
    #[serde(rename = "Cohort")]
    cohort: &'a str,
}

/// Write the ranked selection, overwriting `path`. Missing numbers are
/// written as empty cells.
pub fn write_selection(path: &Path, selection: &RankedSelection) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("creating {}", path.display()))?;
    if selection.is_empty() {
        // serde only emits the header alongside the first record.
        writer.write_record(["Name", "Born", "GP", "G", "A", "P", "Cohort"])?;
    }
    for row in &selection.rows {
        let r = &row.record;
        writer
            .serialize(TopRow {
                name: &r.name,
                born: r.born,
                games: r.games,
                goals: r.goals,
                assists: r.assists,
                points: r.points,
                cohort: &row.cohort,
            })
            .context("writing top-player row")?;
    }
    writer.flush().context("flushing top-player CSV")?;
    Ok(())
}

/// Write the clean table, overwriting `path`.
pub fn write_table(path: &Path, table: &PlayerTable) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("creating {}", path.display()))?;
    if table.is_empty() {
        writer.write_record(super::schema::CLEAN_COLUMNS)?;
    }
    for record in &table.records {
        writer.serialize(record).context("writing clean row")?;
    }
    writer.flush().context("flushing clean CSV")?;
    Ok(())
}

/// Read an exported file back and render its header and first `n` rows.
pub fn preview_csv(path: &Path, n: usize) -> Result<String> {
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("reading back {}", path.display()))?;
    let headers = reader.headers().context("reading CSV headers")?.clone();

    let mut lines = vec![headers.iter().collect::<Vec<_>>().join("\t")];
    for (row_no, result) in reader.records().take(n).enumerate() {
        let record = result.with_context(|| format!("CSV row {row_no}"))?;
        lines.push(record.iter().collect::<Vec<_>>().join("\t"));
    }
    Ok(lines.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::cohort::{select_top, Cohorts, Metric};
    use crate::data::model::PlayerRecord;

    fn player(name: &str, born: i64, points: Option<i64>) -> PlayerRecord {
        PlayerRecord {
            name: name.into(),
            born: Some(born),
            games: Some(300),
            goals: Some(10),
            assists: Some(10),
            points,
        }
    }

    #[test]
    fn selection_file_has_cohort_column_and_blank_nulls() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(TOP_PLAYERS_CSV);
        let table = PlayerTable::new(vec![player("Ovechkin", 1985, Some(1500)), player("Blank", 1986, None)]);
        let cohorts = Cohorts::new(vec![1984, 1990], vec!["1985-1990".into()]).unwrap();
        let selection = select_top(&table, &cohorts, Metric::Points, 5);

        write_selection(&path, &selection).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Name,Born,GP,G,A,P,Cohort");
        assert_eq!(lines[1], "Ovechkin,1985,300,10,10,1500,1985-1990");
        assert_eq!(lines[2], "Blank,1986,300,10,10,,1985-1990");
    }

    #[test]
    fn clean_table_round_trips_through_csv() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CLEAN_TABLE_CSV);
        let table = PlayerTable::new(vec![player("Kane", 1988, Some(1200)), player("Nulls", 1990, None)]);

        write_table(&path, &table).unwrap();

        let mut reader = csv::Reader::from_path(&path).unwrap();
        let back: Vec<PlayerRecord> = reader.deserialize().map(|r| r.unwrap()).collect();
        assert_eq!(back, table.records);
    }

    #[test]
    fn export_overwrites_and_empty_exports_keep_a_header() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(TOP_PLAYERS_CSV);
        std::fs::write(&path, "stale contents\nmore\nlines\n").unwrap();

        write_selection(&path, &RankedSelection::default()).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text.trim_end(), "Name,Born,GP,G,A,P,Cohort");
    }

    #[test]
    fn preview_reads_back_the_first_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CLEAN_TABLE_CSV);
        let table = PlayerTable::new(
            (0..8).map(|i| player(&format!("P{i}"), 1990, Some(i))).collect(),
        );
        write_table(&path, &table).unwrap();

        let preview = preview_csv(&path, 5).unwrap();
        assert_eq!(preview.lines().count(), 6);
        assert!(preview.starts_with("Name\tBorn"));
        assert!(preview.contains("P4"));
        assert!(!preview.contains("P5"));
    }
}
