//! The analysis run: load → clean → select → export → chart.
//!
//! Stage shapes and table heads are printed to stdout as the run goes; the
//! CSV files are the actual output.

use anyhow::{Context, Result};

use crate::app;
use crate::config::AnalysisConfig;
use crate::data::clean::{self, Cleaned};
use crate::data::cohort::{self, Metric, RankedSelection};
use crate::data::{export, loader};

/// Rows shown when printing a table head.
const HEAD_ROWS: usize = 5;

/// What a finished run produced.
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub cleaned: Cleaned,
    pub selection: RankedSelection,
    pub chart_shown: bool,
}

/// Run the whole analysis described by `config`, charting in a window.
pub fn run(config: &AnalysisConfig) -> Result<RunSummary> {
    run_with_chart(config, app::show_chart)
}

/// Run the analysis with `chart` as the visualizer.
///
/// The CSV files are written before `chart` is called. A chart failure is
/// logged and reported as `chart_shown: false`; it never fails the run.
pub fn run_with_chart(
    config: &AnalysisConfig,
    chart: impl FnOnce(&RankedSelection, Metric) -> Result<bool>,
) -> Result<RunSummary> {
    // Parameter errors surface before the workbook is touched.
    let metric = config.metric()?;
    let cohorts = config.cohorts()?;

    println!("Loading data from {}...", config.input.display());
    let raw = loader::load_file(&config.input)?;
    println!("\nColumns in the workbook:\n{:?}", raw.headers);
    println!("\nFirst few rows of the raw data:\n{}", raw.preview(HEAD_ROWS));
    log::info!(
        "loaded {} rows x {} columns from {}",
        raw.len(),
        raw.width(),
        config.input.display()
    );

    let cleaned = clean::clean(&raw, &config.schema, config.start_year, config.end_year)
        .context("cleaning player data")?;
    report_cleaning(&cleaned);

    let selection = cohort::select_top(&cleaned.table, &cohorts, metric, config.top_k);
    println!("\nPlayers per cohort:");
    for (label, count) in &selection.cohort_counts {
        println!("  {label}: {count}");
    }
    println!("\nTop players by {metric}:");
    for row in &selection.rows {
        let value = metric
            .value(&row.record)
            .map(|v| v.to_string())
            .unwrap_or_else(|| "NaN".to_string());
        println!("  [{}] {} ({})", row.cohort, row.record.name, value);
    }
    println!(
        "Shape of clean table: {:?}, shape of top players: ({}, 7)",
        cleaned.table.shape(),
        selection.len()
    );
    log::info!(
        "selected {} players across {} cohorts by {}",
        selection.len(),
        cohorts.len(),
        metric
    );

    export::write_table(&config.clean_output, &cleaned.table)?;
    export::write_selection(&config.top_output, &selection)?;
    println!(
        "CSV files exported successfully: {} and {}",
        config.top_output.display(),
        config.clean_output.display()
    );
    if let Ok(cwd) = std::env::current_dir() {
        println!("Current working directory: {}", cwd.display());
    }
    println!("\n{}", export::preview_csv(&config.top_output, HEAD_ROWS)?);
    log::info!(
        "exported {} and {}",
        config.top_output.display(),
        config.clean_output.display()
    );

    let chart_shown = config.show_chart
        && match chart(&selection, metric) {
            Ok(shown) => shown,
            Err(e) => {
                log::error!("chart could not be shown: {e:#}");
                eprintln!("Chart could not be shown: {e:#}");
                false
            }
        };

    Ok(RunSummary {
        cleaned,
        selection,
        chart_shown,
    })
}

fn report_cleaning(cleaned: &Cleaned) {
    let stats = &cleaned.stats;
    println!("\nShape before filtering born: ({}, 6)", stats.rows_in);
    println!("Shape after filtering born: ({}, 6)", stats.after_born_filter);
    println!("Shape after filtering GP: ({}, 6)", stats.after_games_filter);
    println!("\nCleaned data:\n{}", cleaned.table.preview(HEAD_ROWS));

    if stats.null_cells > 0 {
        log::warn!("{} numeric cells could not be read and were set to null", stats.null_cells);
    }
    log::info!(
        "cleaned {} rows down to {} (born filter kept {})",
        stats.rows_in,
        stats.after_games_filter,
        stats.after_born_filter
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::loader::save_workbook;
    use crate::data::model::{CellValue, PlayerRecord, RawTable};
    use crate::data::schema::CANONICAL_COLUMNS;
    use crate::error::ConfigError;

    fn sheet_row(name: &str, born: CellValue, gp: i64, g: i64, a: i64) -> Vec<CellValue> {
        let mut cells = vec![
            CellValue::Integer(1),
            CellValue::Text(name.to_string()),
            born,
            CellValue::Integer(gp),
            CellValue::Integer(g),
            CellValue::Integer(a),
            CellValue::Integer(g + a),
        ];
        cells.resize(CANONICAL_COLUMNS.len(), CellValue::Integer(0));
        cells
    }

    fn write_sheet(dir: &std::path::Path) -> std::path::PathBuf {
        let path = dir.join("players.xlsx");
        let rows = vec![
            sheet_row("Crosby (1987)", CellValue::Integer(1987), 1300, 600, 1000),
            sheet_row("Malkin (1986)", CellValue::Integer(1986), 1100, 500, 800),
            sheet_row("McDavid (1997)", CellValue::Integer(1997), 700, 330, 650),
            sheet_row("Rookie", CellValue::Integer(2002), 300, 50, 50),
            sheet_row("Veteran", CellValue::Integer(1975), 1500, 500, 700),
            sheet_row("Nobody", CellValue::Text("N/A".into()), 900, 300, 300),
            sheet_row("Cup Of Coffee", CellValue::Integer(1992), 12, 1, 1),
        ];
        let table = RawTable::new(CANONICAL_COLUMNS.iter().map(|c| c.to_string()).collect(), rows);
        save_workbook(&path, &table).unwrap();
        path
    }

    fn config_in(dir: &std::path::Path) -> AnalysisConfig {
        AnalysisConfig {
            top_output: dir.join(export::TOP_PLAYERS_CSV),
            clean_output: dir.join(export::CLEAN_TABLE_CSV),
            show_chart: false,
            ..AnalysisConfig::with_input(write_sheet(dir))
        }
    }

    #[test]
    fn full_run_writes_both_exports() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path());

        let summary = run(&config).unwrap();

        let names: Vec<&str> = summary
            .selection
            .rows
            .iter()
            .map(|r| r.record.name.as_str())
            .collect();
        assert_eq!(names, vec!["Crosby", "Malkin", "McDavid"]);
        assert_eq!(summary.cleaned.table.len(), 3);
        assert!(!summary.chart_shown);

        let mut reader = csv::Reader::from_path(&config.clean_output).unwrap();
        let clean_back: Vec<PlayerRecord> = reader.deserialize().map(|r| r.unwrap()).collect();
        assert_eq!(clean_back, summary.cleaned.table.records);

        let top = std::fs::read_to_string(&config.top_output).unwrap();
        assert_eq!(top.lines().count(), 4);
        assert!(top.lines().nth(1).unwrap().ends_with(",1985-1990"));
    }

    #[test]
    fn exports_are_written_before_the_chart_and_survive_its_failure() {
        let dir = tempfile::tempdir().unwrap();
        let config = AnalysisConfig {
            show_chart: true,
            ..config_in(dir.path())
        };

        let mut chart_called = false;
        let summary = run_with_chart(&config, |selection, metric| {
            chart_called = true;
            assert_eq!(metric, Metric::Points);
            assert_eq!(selection.len(), 3);
            assert!(config.top_output.exists());
            assert!(config.clean_output.exists());
            Err(anyhow::anyhow!("no display"))
        })
        .unwrap();

        assert!(chart_called);
        assert!(!summary.chart_shown);
        let top = std::fs::read_to_string(&config.top_output).unwrap();
        assert_eq!(top.lines().count(), 4);
    }

    #[test]
    fn chart_is_not_called_when_disabled() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path());
        let summary = run_with_chart(&config, |_, _| panic!("chart must not run")).unwrap();
        assert!(!summary.chart_shown);
    }

    #[test]
    fn missing_input_fails_with_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let config = AnalysisConfig {
            show_chart: false,
            ..AnalysisConfig::with_input(dir.path().join("nope.xlsx"))
        };
        let err = run(&config).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ConfigError>(),
            Some(ConfigError::InputNotFound(_))
        ));
    }

    #[test]
    fn unknown_metric_fails_before_loading() {
        let config = AnalysisConfig {
            metric: "SH%".into(),
            show_chart: false,
            ..AnalysisConfig::with_input("never-read.xlsx")
        };
        let err = run(&config).unwrap_err();
        assert_eq!(
            err.downcast_ref::<ConfigError>(),
            Some(&ConfigError::UnknownMetric("SH%".into()))
        );
    }

    #[test]
    fn nothing_in_range_exports_empty_files() {
        let dir = tempfile::tempdir().unwrap();
        let config = AnalysisConfig {
            start_year: 2010,
            end_year: 2020,
            show_chart: true,
            ..config_in(dir.path())
        };

        let summary = run(&config).unwrap();

        assert!(summary.selection.is_empty());
        assert!(!summary.chart_shown);
        let top = std::fs::read_to_string(&config.top_output).unwrap();
        assert_eq!(top.trim_end(), "Name,Born,GP,G,A,P,Cohort");
    }
}
