use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use super::model::{PlayerRecord, PlayerTable};
use crate::error::ConfigError;

// ---------------------------------------------------------------------------
// Metric – the ranking key
// ---------------------------------------------------------------------------

/// Numeric column of the clean table used to rank players.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    GamesPlayed,
    Goals,
    Assists,
    Points,
}

impl Metric {
    /// Column name as it appears in the clean table.
    pub fn column(self) -> &'static str {
        match self {
            Metric::GamesPlayed => "GP",
            Metric::Goals => "G",
            Metric::Assists => "A",
            Metric::Points => "P",
        }
    }

    pub fn value(self, record: &PlayerRecord) -> Option<i64> {
        match self {
            Metric::GamesPlayed => record.games,
            Metric::Goals => record.goals,
            Metric::Assists => record.assists,
            Metric::Points => record.points,
        }
    }
}

impl FromStr for Metric {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "GP" => Ok(Metric::GamesPlayed),
            "G" => Ok(Metric::Goals),
            "A" => Ok(Metric::Assists),
            "P" => Ok(Metric::Points),
            other => Err(ConfigError::UnknownMetric(other.to_string())),
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column())
    }
}

// ---------------------------------------------------------------------------
// Cohorts – birth-year buckets
// ---------------------------------------------------------------------------

/// Birth-year buckets. Cohort `i` covers `(bins[i], bins[i + 1]]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cohorts {
    bins: Vec<i64>,
    labels: Vec<String>,
}

impl Cohorts {
    pub fn new(bins: Vec<i64>, labels: Vec<String>) -> Result<Self, ConfigError> {
        if bins.len() < 2 {
            return Err(ConfigError::InvalidBins(format!(
                "need at least 2 edges, got {}",
                bins.len()
            )));
        }
        if let Some(pair) = bins.windows(2).find(|w| w[0] >= w[1]) {
            return Err(ConfigError::InvalidBins(format!(
                "edges must be strictly increasing ({} then {})",
                pair[0], pair[1]
            )));
        }
        if labels.len() != bins.len() - 1 {
            return Err(ConfigError::LabelCount {
                bins: bins.len(),
                expected: bins.len() - 1,
                found: labels.len(),
            });
        }
        Ok(Cohorts { bins, labels })
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Index of the cohort containing `year`, if any.
    pub fn cohort_of(&self, year: i64) -> Option<usize> {
        self.bins
            .windows(2)
            .position(|w| w[0] < year && year <= w[1])
    }
}

// ---------------------------------------------------------------------------
// RankedSelection
// ---------------------------------------------------------------------------

/// One selected player together with the label of its cohort.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedRow {
    pub record: PlayerRecord,
    pub cohort: String,
}

/// Top rows per cohort, concatenated in cohort order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RankedSelection {
    pub rows: Vec<RankedRow>,
    /// `(label, clean rows in that cohort)` for every cohort, in order.
    pub cohort_counts: Vec<(String, usize)>,
}

impl RankedSelection {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Selected rows belonging to the cohort labelled `label`.
    pub fn cohort_rows<'a>(&'a self, label: &'a str) -> impl Iterator<Item = &'a RankedRow> + 'a {
        self.rows.iter().filter(move |r| r.cohort == label)
    }
}

// ---------------------------------------------------------------------------
// Top-K selection
// ---------------------------------------------------------------------------

/// Descending by metric, missing values last.
fn by_metric_desc(metric: Metric) -> impl Fn(&&PlayerRecord, &&PlayerRecord) -> Ordering {
    move |a, b| match (metric.value(a), metric.value(b)) {
        (Some(x), Some(y)) => y.cmp(&x),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Keep the `k` highest-`metric` players of each cohort.
///
/// Ties keep clean-table order (the sort is stable). Players born outside
/// every cohort, or with no birth year, are never selected.
pub fn select_top(table: &PlayerTable, cohorts: &Cohorts, metric: Metric, k: usize) -> RankedSelection {
    let mut buckets: Vec<Vec<&PlayerRecord>> = vec![Vec::new(); cohorts.len()];
    for record in &table.records {
        if let Some(idx) = record.born.and_then(|b| cohorts.cohort_of(b)) {
            buckets[idx].push(record);
        }
    }

    let cohort_counts = cohorts
        .labels()
        .iter()
        .zip(&buckets)
        .map(|(label, bucket)| (label.clone(), bucket.len()))
        .collect();

    // Each bucket preserves table order, so sorting per bucket gives the
    // same rows as one global stable sort followed by a group-wise head(k).
    let mut rows = Vec::new();
    for (label, mut bucket) in cohorts.labels().iter().zip(buckets) {
        bucket.sort_by(by_metric_desc(metric));
        rows.extend(bucket.into_iter().take(k).map(|record| RankedRow {
            record: record.clone(),
            cohort: label.clone(),
        }));
    }

    RankedSelection {
        rows,
        cohort_counts,
    }
}
