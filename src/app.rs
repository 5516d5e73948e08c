// src/app.rs
use std::sync::Arc;

use eframe::egui;
use rfd::FileDialog;

use crate::api::ApiClient;
use crate::config::ApiConfig;
use crate::report::{default_report_name, FileReportSink, ReportSink};
use crate::state::{AppState, ViewState};
use crate::ui::{dashboard, history, HistoryAction};
use crate::worker::{NetEvent, NetWorker};

pub struct ChemVisApp {
    state: AppState,
    worker: Option<NetWorker>,
    report_sink: Arc<dyn ReportSink>,
}

impl ChemVisApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let config = ApiConfig::from_env();
        let mut state = AppState::new();

        let worker = ApiClient::new(&config)
            .map_err(anyhow::Error::from)
            .and_then(|client| NetWorker::new(client, cc.egui_ctx.clone()));

        let worker = match worker {
            Ok(worker) => {
                // Token priming then initial history load, in order
                worker.start_session();
                Some(worker)
            }
            Err(e) => {
                tracing::error!("Failed to initialize network client: {:#}", e);
                state.set_error(format!("Failed to initialize network client: {}", e));
                None
            }
        };

        Self {
            state,
            worker,
            report_sink: Arc::new(FileReportSink),
        }
    }

    /// Drain settled network events and apply each one through the
    /// state's single mutation entry points.
    fn poll_worker(&mut self) {
        let mut events = Vec::new();
        if let Some(worker) = &self.worker {
            while let Some(event) = worker.try_recv() {
                events.push(event);
            }
        }
        for event in events {
            self.apply_event(event);
        }
    }

    fn apply_event(&mut self, event: NetEvent) {
        match event {
            NetEvent::SessionReady => {
                tracing::debug!("Security session primed");
            }
            NetEvent::History(entries) => self.state.replace_history(entries),
            // Already logged at the worker; the prior list stays as-is
            NetEvent::HistoryFailed(_) => {}
            NetEvent::UploadFinished(analysis) => self.state.upload_succeeded(analysis),
            NetEvent::UploadFailed(message) => self.state.upload_failed(message),
            NetEvent::ReportSaved(path) => self
                .state
                .set_status(format!("Report saved to {}", path.display())),
            NetEvent::ReportFailed(message) => self.state.set_error(message),
        }
    }

    fn pick_and_upload(&mut self) {
        let file_dialog = FileDialog::new()
            .add_filter("CSV files", &["csv"])
            .set_title("Select CSV");

        let Some(path) = file_dialog.pick_file() else {
            return;
        };

        if !self.state.begin_upload() {
            return;
        }
        if let Some(worker) = &self.worker {
            worker.upload(path);
        }
    }

    fn prompt_report_download(&mut self, id: i64, suggested: Option<&str>) {
        let file_name = default_report_name(id, suggested);
        let file_dialog = FileDialog::new()
            .add_filter("PDF files", &["pdf"])
            .set_file_name(&file_name)
            .set_title("Save Report");

        let Some(destination) = file_dialog.save_file() else {
            return;
        };

        if let Some(worker) = &self.worker {
            worker.download_report(id, destination, self.report_sink.clone());
        }
    }

    fn show_toolbar(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label(
                egui::RichText::new("ChemVis")
                    .heading()
                    .strong()
                    .color(egui::Color32::from_rgb(14, 165, 233)),
            );
            ui.separator();

            let can_upload = self.worker.is_some() && !self.state.upload_busy();
            if ui
                .add_enabled(can_upload, egui::Button::new("📂 Upload CSV…"))
                .clicked()
            {
                self.pick_and_upload();
            }

            let can_download = self.worker.is_some() && self.state.selected_dataset().is_some();
            if ui
                .add_enabled(can_download, egui::Button::new("📥 Download Report"))
                .clicked()
            {
                if let Some(id) = self.state.selected_dataset() {
                    self.prompt_report_download(id, None);
                }
            }

            if self.state.upload_busy() {
                ui.spinner();
                ui.label("Processing…");
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if let Some(status) = self.state.status_message() {
                    ui.weak(status);
                }
            });
        });
    }
}

impl eframe::App for ChemVisApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_worker();

        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            self.show_toolbar(ui);
        });

        let mut history_action = HistoryAction::None;

        match self.state.view() {
            ViewState::Loaded => {
                egui::SidePanel::right("history_panel")
                    .default_width(300.0)
                    .show(ctx, |ui| {
                        history_action = history::show_history_list(
                            ui,
                            self.state.history(),
                            self.state.selected_dataset(),
                        );
                    });

                egui::CentralPanel::default().show(ctx, |ui| {
                    egui::ScrollArea::vertical()
                        .id_source("dashboard_scroll")
                        .show(ui, |ui| {
                            if let Some(analysis) = self.state.analysis() {
                                dashboard::show_dashboard(ui, analysis);
                            }
                        });
                });
            }
            ViewState::Empty => {
                egui::CentralPanel::default().show(ctx, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.add_space(12.0);
                        ui.heading("Equipment Analysis");
                        ui.weak("Upload and visualize your chemical plant data");
                        ui.add_space(12.0);
                    });
                    history_action = history::show_history_list(
                        ui,
                        self.state.history(),
                        self.state.selected_dataset(),
                    );
                });
            }
        }

        match history_action {
            HistoryAction::None => {}
            HistoryAction::Select(id) => self.state.select_dataset(id),
            HistoryAction::Download { id, name } => {
                let suggested = format!("report-{}.pdf", name);
                self.state.select_dataset(id);
                self.prompt_report_download(id, Some(&suggested));
            }
        }

        // Blocking error modal, dismissed by the user
        let error_msg = self.state.error_message().map(|s| s.to_string());
        if let Some(error) = error_msg {
            egui::Window::new("Error")
                .collapsible(false)
                .resizable(false)
                .show(ctx, |ui| {
                    ui.label(&error);
                    if ui.button("OK").clicked() {
                        self.state.clear_error();
                    }
                });
        }
    }
}
