use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::state::PlotState;

// ---------------------------------------------------------------------------
// Left side panel – series visibility
// ---------------------------------------------------------------------------

/// Render the left panel with one checkbox per data file.
pub fn side_panel(ui: &mut Ui, state: &mut PlotState) {
    ui.heading("Series");
    ui.separator();

    if state.series.is_empty() {
        ui.label("No data files loaded.");
        return;
    }

    ui.horizontal(|ui: &mut Ui| {
        if ui.small_button("All").clicked() {
            state.set_all_visible(true);
        }
        if ui.small_button("None").clicked() {
            state.set_all_visible(false);
        }
    });

    let mut toggled = None;
    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            for (idx, series) in state.series.iter().enumerate() {
                let label = format!("{}  ({})", series.name, series.len());
                let text = RichText::new(label).color(state.colors[idx].to_egui());

                let mut checked = state.visible[idx];
                if ui
                    .checkbox(&mut checked, text)
                    .on_hover_text(series.path.display().to_string())
                    .changed()
                {
                    toggled = Some(idx);
                }
            }
        });

    if let Some(idx) = toggled {
        state.toggle_series(idx);
    }
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut PlotState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Save as…").clicked() {
                save_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        ui.label(format!(
            "{} series, {} samples, {} visible",
            state.series.len(),
            state.total_samples(),
            state.visible_indices.len()
        ));

        ui.separator();

        if ui.selectable_label(state.options.log_x, "Log X").clicked() {
            state.options.log_x = !state.options.log_x;
        }
        if ui.selectable_label(state.options.log_y, "Log Y").clicked() {
            state.options.log_y = !state.options.log_y;
        }

        if let Some(msg) = &state.status_message {
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn save_file_dialog(state: &mut PlotState) {
    let file = rfd::FileDialog::new()
        .set_title("Save plot")
        .set_file_name("plot.png")
        .add_filter("PNG", &["png"])
        .add_filter("SVG", &["svg"])
        .add_filter("JPEG", &["jpg", "jpeg"])
        .save_file();

    if let Some(path) = file {
        state.save_to(&path);
    }
}
