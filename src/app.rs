use std::ffi::OsString;

use anyhow::{anyhow, bail, Result};
use eframe::egui;

use crate::data::cohort::{Metric, RankedSelection};
use crate::state::ChartState;
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct ChartApp {
    pub state: ChartState,
}

impl ChartApp {
    pub fn new(state: ChartState) -> Self {
        Self { state }
    }
}

impl eframe::App for ChartApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: title and orientation toggle ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: cohorts ----
        egui::SidePanel::left("cohort_panel")
            .default_width(240.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &self.state);
            });

        // ---- Central panel: bar chart ----
        egui::CentralPanel::default().show(ctx, |ui| {
            plot::cohort_bar_chart(ui, &self.state);
        });
    }
}

// ---------------------------------------------------------------------------
// Visualizer entry-point
// ---------------------------------------------------------------------------

/// Whether a window can be opened. On X11/Wayland desktops this needs
/// `DISPLAY` or `WAYLAND_DISPLAY`; winit panics without them.
fn display_available(var: impl Fn(&str) -> Option<OsString>) -> bool {
    if cfg!(any(target_os = "windows", target_os = "macos")) {
        return true;
    }
    ["DISPLAY", "WAYLAND_DISPLAY"]
        .iter()
        .any(|&name| var(name).is_some_and(|v| !v.is_empty()))
}

/// Show the bar chart and block until its window is closed.
///
/// Returns `Ok(false)` without opening a window when there is nothing to plot.
pub fn show_chart(selection: &RankedSelection, metric: Metric) -> Result<bool> {
    if selection.is_empty() {
        println!("No data to visualize.");
        return Ok(false);
    }
    if !display_available(|name| std::env::var_os(name)) {
        bail!("no display available (DISPLAY and WAYLAND_DISPLAY are unset)");
    }

    let state = ChartState::from_selection(selection, metric);
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 600.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Top NHL Players",
        options,
        Box::new(move |_cc| Ok(Box::new(ChartApp::new(state)))),
    )
    .map_err(|e| anyhow!("chart window failed: {e}"))?;
    Ok(true)
}
