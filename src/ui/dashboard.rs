// src/ui/dashboard.rs
use eframe::egui;

use crate::api::AnalysisResult;
use crate::chart::ChartSeries;
use crate::classify::classify;

const BAR_COLORS: [egui::Color32; 4] = [
    egui::Color32::from_rgb(14, 165, 233),
    egui::Color32::from_rgb(99, 102, 241),
    egui::Color32::from_rgb(34, 197, 94),
    egui::Color32::from_rgb(244, 63, 94),
];

/// Loaded view: stat cards, the type-distribution chart and the
/// detailed equipment table for the current analysis.
pub fn show_dashboard(ui: &mut egui::Ui, analysis: &AnalysisResult) {
    show_stat_cards(ui, analysis);
    ui.add_space(12.0);

    ui.group(|ui| {
        ui.heading("Equipment Distribution");
        show_distribution_chart(ui, analysis);
    });
    ui.add_space(12.0);

    ui.group(|ui| {
        ui.heading("Detailed Equipment Data");
        ui.add_space(4.0);
        show_equipment_table(ui, analysis);
    });
}

fn show_stat_cards(ui: &mut egui::Ui, analysis: &AnalysisResult) {
    ui.columns(4, |columns| {
        stat_card(
            &mut columns[0],
            "Total Equipment",
            &analysis.total_equipment.to_string(),
            "",
        );
        stat_card(
            &mut columns[1],
            "Avg Flowrate",
            &format!("{:.2}", analysis.avg_flowrate),
            "m³/h",
        );
        stat_card(
            &mut columns[2],
            "Avg Pressure",
            &format!("{:.2}", analysis.avg_pressure),
            "bar",
        );
        stat_card(
            &mut columns[3],
            "Avg Temperature",
            &format!("{:.2}", analysis.avg_temperature),
            "°C",
        );
    });
}

fn stat_card(ui: &mut egui::Ui, title: &str, value: &str, unit: &str) {
    ui.group(|ui| {
        ui.set_width(ui.available_width());
        ui.vertical(|ui| {
            ui.label(egui::RichText::new(title).small().weak());
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new(value).heading().strong());
                if !unit.is_empty() {
                    ui.label(egui::RichText::new(unit).small().weak());
                }
            });
        });
    });
}

fn show_distribution_chart(ui: &mut egui::Ui, analysis: &AnalysisResult) {
    let series = ChartSeries::from_distribution(&analysis.type_distribution);
    if series.is_empty() {
        ui.label("No distribution data");
        return;
    }

    let plot = egui_plot::Plot::new("type_distribution_chart")
        .height(240.0)
        .allow_zoom(false)
        .allow_drag(false)
        .show_background(false)
        .show_axes([false, true])
        .include_y(0.0);

    plot.show(ui, |plot_ui| {
        let bars: Vec<egui_plot::Bar> = series
            .values
            .iter()
            .enumerate()
            .map(|(i, value)| {
                egui_plot::Bar::new(i as f64, *value)
                    .name(&series.labels[i])
                    .width(0.6)
                    .fill(BAR_COLORS[i % BAR_COLORS.len()])
            })
            .collect();

        plot_ui.bar_chart(egui_plot::BarChart::new(bars));
    });

    // Axis legend in server order, colour-matched to the bars
    ui.horizontal_wrapped(|ui| {
        for (i, label) in series.labels.iter().enumerate() {
            ui.colored_label(BAR_COLORS[i % BAR_COLORS.len()], "⏺");
            ui.label(format!("{} ({})", label, series.values[i] as u64));
            ui.add_space(8.0);
        }
    });
}

fn show_equipment_table(ui: &mut egui::Ui, analysis: &AnalysisResult) {
    egui::ScrollArea::vertical()
        .id_source("equipment_table_scroll")
        .max_height(280.0)
        .show(ui, |ui| {
            egui::Grid::new("equipment_table")
                .num_columns(6)
                .spacing([16.0, 4.0])
                .striped(true)
                .show(ui, |ui| {
                    ui.strong("Equipment Name");
                    ui.strong("Type");
                    ui.strong("Flowrate");
                    ui.strong("Pressure");
                    ui.strong("Temperature");
                    ui.strong("Status");
                    ui.end_row();

                    for row in &analysis.table {
                        ui.strong(&row.name);
                        ui.label(&row.equipment_type);
                        ui.label(format!("{}", row.flowrate));
                        ui.label(format!("{}", row.pressure));
                        ui.label(format!("{}", row.temperature));

                        let category = classify(&row.equipment_type);
                        ui.colored_label(category.badge_color(), category.label());
                        ui.end_row();
                    }
                });
        });
}
