// src/ui/history.rs
use eframe::egui;

use crate::api::HistoryEntry;

/// User intent raised from the recent-uploads list, applied by the app
/// after the frame's immediate-mode pass.
#[derive(Debug, Clone, PartialEq)]
pub enum HistoryAction {
    None,
    Select(i64),
    Download { id: i64, name: String },
}

/// Recent-uploads list: the whole view before the first upload, a side
/// panel afterwards. Entries come straight from the server, newest
/// first; selecting one makes its report downloadable.
pub fn show_history_list(
    ui: &mut egui::Ui,
    entries: &[HistoryEntry],
    selected: Option<i64>,
) -> HistoryAction {
    let mut action = HistoryAction::None;

    ui.heading("Recent Uploads");
    ui.add_space(4.0);
    ui.separator();
    ui.add_space(4.0);

    if entries.is_empty() {
        ui.label("No uploads yet");
        return action;
    }

    egui::ScrollArea::vertical()
        .id_source("history_list_scroll")
        .auto_shrink([false; 2])
        .show(ui, |ui| {
            for entry in entries {
                let is_selected = selected == Some(entry.id);

                ui.group(|ui| {
                    ui.set_width(ui.available_width());
                    ui.horizontal(|ui| {
                        let label = format!(
                            "📄 {}\n{} items • {}",
                            entry.name,
                            entry.total,
                            entry.uploaded_at.format("%Y-%m-%d")
                        );
                        if ui.selectable_label(is_selected, label).clicked() {
                            action = HistoryAction::Select(entry.id);
                        }

                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            if ui
                                .button("⬇")
                                .on_hover_text("Download PDF report")
                                .clicked()
                            {
                                action = HistoryAction::Download {
                                    id: entry.id,
                                    name: entry.name.clone(),
                                };
                            }
                        });
                    });
                });
                ui.add_space(4.0);
            }
        });

    action
}
