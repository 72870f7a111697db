use eframe::egui::{self, RichText, ScrollArea, Ui};

use crate::state::ChartState;

// ---------------------------------------------------------------------------
// Left side panel – cohort summary
// ---------------------------------------------------------------------------

/// Cohorts with their colour, clean-row count and charted players.
pub fn side_panel(ui: &mut Ui, state: &ChartState) {
    ui.heading("Cohorts");
    ui.separator();

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            for (label, count) in &state.cohort_counts {
                let color = state.color_map.color_for(label);
                let header = RichText::new(format!("{label}  ({count} players)"))
                    .strong()
                    .color(color);

                egui::CollapsingHeader::new(header)
                    .id_salt(label)
                    .default_open(true)
                    .show(ui, |ui: &mut Ui| {
                        let mut any = false;
                        for bar in state.cohort_bars(label) {
                            any = true;
                            ui.label(format!("{}  {}", bar.player, bar.value));
                        }
                        if !any {
                            ui.label("No players.");
                        }
                    });
            }
        });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

pub fn top_bar(ui: &mut Ui, state: &mut ChartState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.strong("Top NHL Players");
        ui.separator();
        ui.label(format!(
            "{} players ranked by {}",
            state.bars.len(),
            state.metric
        ));
        ui.separator();

        if ui
            .selectable_label(state.horizontal, "Horizontal bars")
            .clicked()
        {
            state.horizontal = !state.horizontal;
        }
    });
}
