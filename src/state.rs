use eframe::egui::Color32;

use crate::color::ColorMap;
use crate::data::cohort::{Metric, RankedSelection};

// ---------------------------------------------------------------------------
// Chart state
// ---------------------------------------------------------------------------

/// One bar of the chart.
#[derive(Debug, Clone, PartialEq)]
pub struct BarSpec {
    /// Position along the category axis (0, 1, 2, …).
    pub position: f64,
    pub value: f64,
    pub player: String,
    pub cohort: String,
    pub color: Color32,
}

/// Everything the chart window shows, independent of rendering.
pub struct ChartState {
    pub metric: Metric,
    pub bars: Vec<BarSpec>,
    pub color_map: ColorMap,
    /// `(label, players in cohort)`, shown in the side panel.
    pub cohort_counts: Vec<(String, usize)>,
    /// Draw bars horizontally (long names are easier to read).
    pub horizontal: bool,
}

impl ChartState {
    /// Lay out one bar per selected player, in selection order.
    ///
    /// Players whose metric is missing get no bar.
    pub fn from_selection(selection: &RankedSelection, metric: Metric) -> Self {
        let labels: Vec<String> = selection
            .cohort_counts
            .iter()
            .map(|(label, _)| label.clone())
            .collect();
        let color_map = ColorMap::new(&labels);

        let bars = selection
            .rows
            .iter()
            .filter_map(|row| metric.value(&row.record).map(|v| (row, v)))
            .enumerate()
            .map(|(i, (row, value))| BarSpec {
                position: i as f64,
                value: value as f64,
                player: row.record.name.clone(),
                cohort: row.cohort.clone(),
                color: color_map.color_for(&row.cohort),
            })
            .collect();

        ChartState {
            metric,
            bars,
            color_map,
            cohort_counts: selection.cohort_counts.clone(),
            horizontal: false,
        }
    }

    pub fn player_names(&self) -> Vec<String> {
        self.bars.iter().map(|bar| bar.player.clone()).collect()
    }

    /// Bars belonging to one cohort, for a per-cohort legend entry.
    pub fn cohort_bars<'a>(&'a self, label: &'a str) -> impl Iterator<Item = &'a BarSpec> + 'a {
        self.bars.iter().filter(move |bar| bar.cohort == label)
    }
}

/// Player name for a category-axis grid mark. Only whole, non-negative
/// positions that fall on a bar get a label.
pub fn category_label(names: &[String], position: f64) -> Option<&str> {
    let rounded = position.round();
    if (position - rounded).abs() > 1e-6 || rounded < 0.0 {
        return None;
    }
    names.get(rounded as usize).map(String::as_str)
}
