// src/report.rs
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// File name offered in the save dialog: the caller's suggestion when
/// given, otherwise a deterministic name derived from the dataset id.
pub fn default_report_name(id: i64, suggested: Option<&str>) -> String {
    match suggested {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => format!("report-{}.pdf", id),
    }
}

/// Delivers a fetched report payload to the user. The production
/// implementation writes to the path picked in the save dialog; tests
/// substitute a capturing sink.
pub trait ReportSink: Send + Sync {
    fn deliver(&self, destination: &Path, payload: &[u8]) -> Result<()>;
}

/// Writes the payload straight to disk.
pub struct FileReportSink;

impl ReportSink for FileReportSink {
    fn deliver(&self, destination: &Path, payload: &[u8]) -> Result<()> {
        fs::write(destination, payload)
            .with_context(|| format!("Failed to write report to {}", destination.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use std::sync::Mutex;

    #[test]
    fn falls_back_to_deterministic_name() {
        assert_eq!(default_report_name(7, None), "report-7.pdf");
        assert_eq!(default_report_name(7, Some("")), "report-7.pdf");
    }

    #[test]
    fn suggested_name_wins_when_present() {
        assert_eq!(
            default_report_name(7, Some("plant_a_report.pdf")),
            "plant_a_report.pdf"
        );
    }

    struct CapturingSink {
        delivered: Mutex<Vec<(PathBuf, Vec<u8>)>>,
    }

    impl ReportSink for CapturingSink {
        fn deliver(&self, destination: &Path, payload: &[u8]) -> Result<()> {
            self.delivered
                .lock()
                .unwrap()
                .push((destination.to_path_buf(), payload.to_vec()));
            Ok(())
        }
    }

    #[test]
    fn sink_receives_payload_unchanged() {
        let sink = CapturingSink {
            delivered: Mutex::new(Vec::new()),
        };
        let payload = b"%PDF-1.7 fake";
        sink.deliver(Path::new("report-7.pdf"), payload).unwrap();

        let delivered = sink.delivered.lock().unwrap();
        assert_eq!(delivered.len(), 1);
        assert_eq!(delivered[0].0, PathBuf::from("report-7.pdf"));
        assert_eq!(delivered[0].1, payload);
    }
}
