// src/worker.rs
use std::path::PathBuf;
use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::Arc;

use anyhow::Result;
use eframe::egui;
use tokio::runtime::Runtime;

use crate::api::{AnalysisResult, ApiClient, HistoryEntry};
use crate::report::ReportSink;

/// Settlement of one asynchronous network operation, applied to the
/// app state on the UI thread. Every task catches its own failure and
/// reports it here; nothing propagates across the channel as a panic.
#[derive(Debug)]
pub enum NetEvent {
    SessionReady,
    History(Vec<HistoryEntry>),
    HistoryFailed(String),
    UploadFinished(AnalysisResult),
    UploadFailed(String),
    ReportSaved(PathBuf),
    ReportFailed(String),
}

/// Bridge between the egui thread and the network tasks.
///
/// Owns the tokio runtime and the API client; each operation is one
/// spawned task whose settlement arrives through an mpsc channel that
/// the app drains once per frame. Sending an event requests a repaint
/// so a settled task is rendered promptly. Tasks are never cancelled
/// once dispatched; events for discarded state are simply dropped with
/// the receiver.
pub struct NetWorker {
    runtime: Runtime,
    client: Arc<ApiClient>,
    ctx: egui::Context,
    event_tx: Sender<NetEvent>,
    event_rx: Receiver<NetEvent>,
}

impl NetWorker {
    pub fn new(client: ApiClient, ctx: egui::Context) -> Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .enable_all()
            .build()?;
        let (event_tx, event_rx) = channel();

        Ok(Self {
            runtime,
            client: Arc::new(client),
            ctx,
            event_tx,
            event_rx,
        })
    }

    /// Drain one settled event, if any. Called once per frame.
    pub fn try_recv(&self) -> Option<NetEvent> {
        self.event_rx.try_recv().ok()
    }

    fn notify(ctx: &egui::Context) {
        ctx.request_repaint();
    }

    /// Startup sequence: prime the CSRF session, then load history.
    /// The history fetch is issued only after token priming has
    /// settled, successfully or not. A priming failure is a diagnostic;
    /// later mutating calls fail through their own error paths.
    pub fn start_session(&self) {
        let client = self.client.clone();
        let tx = self.event_tx.clone();
        let ctx = self.ctx.clone();

        self.runtime.spawn(async move {
            match client.init_session().await {
                Ok(()) => {
                    let _ = tx.send(NetEvent::SessionReady);
                }
                Err(e) => {
                    tracing::warn!("CSRF priming failed: {}", e);
                }
            }

            Self::send_history(&client, &tx).await;
            Self::notify(&ctx);
        });
    }

    /// Re-fetch the history list on demand.
    pub fn refresh_history(&self) {
        let client = self.client.clone();
        let tx = self.event_tx.clone();
        let ctx = self.ctx.clone();

        self.runtime.spawn(async move {
            Self::send_history(&client, &tx).await;
            Self::notify(&ctx);
        });
    }

    /// Upload one spreadsheet. On success the history refresh is
    /// chained inside the same task, after the upload response has been
    /// fully received. No retry on failure.
    pub fn upload(&self, path: PathBuf) {
        let client = self.client.clone();
        let tx = self.event_tx.clone();
        let ctx = self.ctx.clone();

        self.runtime.spawn(async move {
            let file_name = path
                .file_name()
                .and_then(|name| name.to_str())
                .unwrap_or("upload.csv")
                .to_string();

            let outcome: Result<AnalysisResult> = async {
                let bytes = tokio::fs::read(&path).await?;
                Ok(client.upload(&file_name, bytes).await?)
            }
            .await;

            match outcome {
                Ok(analysis) => {
                    let _ = tx.send(NetEvent::UploadFinished(analysis));
                    Self::notify(&ctx);
                    Self::send_history(&client, &tx).await;
                }
                Err(e) => {
                    tracing::error!("Upload of {} failed: {:#}", file_name, e);
                    let _ = tx.send(NetEvent::UploadFailed(format!(
                        "Error uploading file: {}",
                        e
                    )));
                }
            }
            Self::notify(&ctx);
        });
    }

    /// Fetch a report and hand the payload to the sink. Touches no
    /// dashboard state, so it may run alongside an in-flight upload.
    pub fn download_report(&self, id: i64, destination: PathBuf, sink: Arc<dyn ReportSink>) {
        let client = self.client.clone();
        let tx = self.event_tx.clone();
        let ctx = self.ctx.clone();

        self.runtime.spawn(async move {
            let outcome: Result<()> = async {
                let payload = client.download_report(id).await?;
                sink.deliver(&destination, &payload)
            }
            .await;

            match outcome {
                Ok(()) => {
                    let _ = tx.send(NetEvent::ReportSaved(destination));
                }
                Err(e) => {
                    tracing::error!("Report download for dataset {} failed: {:#}", id, e);
                    let _ = tx.send(NetEvent::ReportFailed(
                        "Failed to download report".to_string(),
                    ));
                }
            }
            Self::notify(&ctx);
        });
    }

    async fn send_history(client: &ApiClient, tx: &Sender<NetEvent>) {
        match client.fetch_history().await {
            Ok(entries) => {
                let _ = tx.send(NetEvent::History(entries));
            }
            Err(e) => {
                tracing::warn!("Failed to fetch history: {}", e);
                let _ = tx.send(NetEvent::HistoryFailed(e.to_string()));
            }
        }
    }
}
