use std::ops::RangeInclusive;

use eframe::egui::Ui;
use egui_plot::{Bar, BarChart, GridMark, Legend, Plot};

use crate::state::{category_label, ChartState};

// ---------------------------------------------------------------------------
// Top-player bar chart (central panel)
// ---------------------------------------------------------------------------

/// Render one bar per selected player, one legend entry per cohort.
pub fn cohort_bar_chart(ui: &mut Ui, state: &ChartState) {
    if state.bars.is_empty() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("No data to visualize.");
        });
        return;
    }

    let names = state.player_names();
    let category_axis = move |mark: GridMark, _range: &RangeInclusive<f64>| -> String {
        category_label(&names, mark.value)
            .unwrap_or_default()
            .to_string()
    };
    let metric = state.metric.column();

    let plot = Plot::new("cohort_bar_chart")
        .legend(Legend::default())
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true);

    let plot = if state.horizontal {
        plot.x_axis_label(metric)
            .y_axis_label("Name")
            .y_axis_formatter(category_axis)
    } else {
        plot.x_axis_label("Name")
            .y_axis_label(metric)
            .x_axis_formatter(category_axis)
    };

    plot.show(ui, |plot_ui| {
        for (label, color) in state.color_map.legend_entries() {
            let bars: Vec<Bar> = state
                .cohort_bars(&label)
                .map(|b| {
                    Bar::new(b.position, b.value)
                        .name(&b.player)
                        .fill(b.color)
                        .width(0.7)
                })
                .collect();
            if bars.is_empty() {
                continue;
            }

            let mut chart = BarChart::new(bars).name(&label).color(color);
            if state.horizontal {
                chart = chart.horizontal();
            }
            plot_ui.bar_chart(chart);
        }
    });
}
