use std::path::PathBuf;

use clap::Parser;

use crate::data::cohort::{Cohorts, Metric};
use crate::data::export::{CLEAN_TABLE_CSV, TOP_PLAYERS_CSV};
use crate::data::schema::Schema;
use crate::error::ConfigError;

/// Workbook read when no path is given on the command line.
pub const DEFAULT_INPUT: &str = "Best Player born every 5 years.xlsx";

/// Log file, appended to on every run.
pub const LOG_FILE: &str = "nhl_analysis.log";

/// Fixed parameters of one analysis run.
#[derive(Debug, Clone)]
pub struct AnalysisConfig {
    pub input: PathBuf,
    pub schema: Schema,
    pub start_year: i64,
    pub end_year: i64,
    pub bins: Vec<i64>,
    pub labels: Vec<String>,
    pub metric: String,
    /// Players kept per cohort.
    pub top_k: usize,
    pub top_output: PathBuf,
    pub clean_output: PathBuf,
    pub show_chart: bool,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            schema: Schema::default(),
            start_year: 1985,
            end_year: 2000,
            bins: vec![1984, 1990, 1995, 2001],
            labels: vec![
                "1985-1990".to_string(),
                "1991-1995".to_string(),
                "1996-2000".to_string(),
            ],
            metric: "P".to_string(),
            top_k: 5,
            top_output: PathBuf::from(TOP_PLAYERS_CSV),
            clean_output: PathBuf::from(CLEAN_TABLE_CSV),
            show_chart: true,
        }
    }
}

impl AnalysisConfig {
    /// Default configuration, reading `input` instead of the default workbook.
    pub fn with_input(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            ..Self::default()
        }
    }

    pub fn cohorts(&self) -> Result<Cohorts, ConfigError> {
        Cohorts::new(self.bins.clone(), self.labels.clone())
    }

    pub fn metric(&self) -> Result<Metric, ConfigError> {
        self.metric.parse()
    }
}

#[derive(Parser, Debug)]
#[command(name = "nhl-cohorts")]
#[command(about = "Rank the best NHL players of each birth-year cohort and chart them")]
pub struct Cli {
    /// Player-statistics workbook (.xlsx)
    #[arg(default_value = DEFAULT_INPUT)]
    pub input: PathBuf,
}

impl Cli {
    pub fn into_config(self) -> AnalysisConfig {
        AnalysisConfig::with_input(self.input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_consistent() {
        let config = AnalysisConfig::default();
        let cohorts = config.cohorts().unwrap();
        assert_eq!(cohorts.len(), 3);
        assert_eq!(cohorts.cohort_of(config.start_year), Some(0));
        assert_eq!(cohorts.cohort_of(config.end_year), Some(2));
        assert_eq!(config.metric().unwrap(), Metric::Points);
        assert_ne!(config.top_output, config.clean_output);
    }

    #[test]
    fn with_input_keeps_the_rest() {
        let config = AnalysisConfig::with_input("other.xlsx");
        assert_eq!(config.input, PathBuf::from("other.xlsx"));
        assert_eq!(config.top_k, 5);
    }

    #[test]
    fn cli_without_arguments_reads_the_default_workbook() {
        let config = Cli::try_parse_from(["nhl-cohorts"]).unwrap().into_config();
        assert_eq!(config.input, PathBuf::from(DEFAULT_INPUT));
        assert_eq!(config.metric, "P");
    }

    #[test]
    fn cli_positional_overrides_the_input() {
        let config = Cli::try_parse_from(["nhl-cohorts", "data/players 2024.xlsx"])
            .unwrap()
            .into_config();
        assert_eq!(config.input, PathBuf::from("data/players 2024.xlsx"));
        assert_eq!(config.top_k, 5);
    }

    #[test]
    fn cli_rejects_extra_arguments() {
        assert!(Cli::try_parse_from(["nhl-cohorts", "a.xlsx", "b.xlsx"]).is_err());
        assert!(Cli::try_parse_from(["nhl-cohorts", "--metric", "G"]).is_err());
    }
}
