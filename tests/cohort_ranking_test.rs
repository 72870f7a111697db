//! End-to-end check of the cleaning and ranking stages on a small sheet.
//!
//! The sheet goes through the same workbook writer/reader, schema check,
//! cleaner and selector the binary uses.

use nhl_cohorts::data::clean::clean;
use nhl_cohorts::data::cohort::{select_top, Cohorts, Metric};
use nhl_cohorts::data::loader::{load_file, save_workbook};
use nhl_cohorts::data::model::{CellValue, RawTable};
use nhl_cohorts::data::schema::{Schema, CANONICAL_COLUMNS};

fn row(name: &str, born: CellValue, gp: i64, g: i64, a: i64, p: i64) -> Vec<CellValue> {
    let mut cells = vec![
        CellValue::Integer(0),
        CellValue::Text(name.to_string()),
        born,
        CellValue::Integer(gp),
        CellValue::Integer(g),
        CellValue::Integer(a),
        CellValue::Integer(p),
    ];
    cells.resize(CANONICAL_COLUMNS.len(), CellValue::Float(0.25));
    cells
}

fn load_sheet(rows: Vec<Vec<CellValue>>) -> RawTable {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sheet.xlsx");
    let headers = CANONICAL_COLUMNS.iter().map(|c| c.to_string()).collect();
    save_workbook(&path, &RawTable::new(headers, rows)).unwrap();
    load_file(&path).unwrap()
}

#[test]
fn best_player_per_cohort_from_a_workbook() {
    let raw = load_sheet(vec![
        row("A", CellValue::Integer(1988), 250, 30, 40, 70),
        row("B (1988)", CellValue::Integer(1988), 210, 50, 50, 100),
        row("C", CellValue::Integer(1999), 300, 10, 10, 20),
        row("D", CellValue::Text("N/A".into()), 900, 400, 400, 800),
    ]);
    let cleaned = clean(&raw, &Schema::default(), 1985, 2000).unwrap();
    assert_eq!(cleaned.table.len(), 3);

    let cohorts = Cohorts::new(
        vec![1984, 1990, 2001],
        vec!["1985-1990".into(), "1991-2000".into()],
    )
    .unwrap();
    let selection = select_top(&cleaned.table, &cohorts, Metric::Points, 1);

    let picked: Vec<(&str, &str)> = selection
        .rows
        .iter()
        .map(|r| (r.cohort.as_str(), r.record.name.as_str()))
        .collect();
    assert_eq!(picked, vec![("1985-1990", "B"), ("1991-2000", "C")]);
}

#[test]
fn top_five_by_goals_respects_cohort_limit() {
    let rows = (0..30)
        .map(|i| {
            row(
                &format!("Skater {i}"),
                CellValue::Integer(1985 + (i % 16)),
                200 + i * 10,
                i * 3,
                i,
                i * 4,
            )
        })
        .collect();
    let cleaned = clean(&load_sheet(rows), &Schema::default(), 1985, 2000).unwrap();
    let cohorts = Cohorts::new(
        vec![1984, 1990, 1995, 2001],
        vec!["1985-1990".into(), "1991-1995".into(), "1996-2000".into()],
    )
    .unwrap();

    let selection = select_top(&cleaned.table, &cohorts, Metric::Goals, 5);

    for label in cohorts.labels() {
        let goals: Vec<i64> = selection
            .cohort_rows(label)
            .map(|r| r.record.goals.unwrap())
            .collect();
        assert!(goals.len() <= 5);
        assert!(goals.windows(2).all(|w| w[0] >= w[1]));
    }
    // 1985-1990 holds 12 players (six birth years, two each), so it is capped.
    assert_eq!(selection.cohort_rows("1985-1990").count(), 5);
}
