// src/api/models.rs
use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Aggregated statistics and row-level data for one uploaded dataset,
/// exactly as returned by `/api/upload/`. Replaced wholesale by each
/// successful upload; never recomputed or patched client-side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Present once the server has persisted the dataset and a report
    /// can be generated for it.
    #[serde(default)]
    pub id: Option<i64>,
    pub total_equipment: u64,
    pub avg_flowrate: f64,
    pub avg_pressure: f64,
    pub avg_temperature: f64,
    /// Equipment type label -> count. The server decides the bucketing
    /// and the order; an IndexMap keeps that order through serde.
    pub type_distribution: IndexMap<String, u64>,
    pub table: Vec<EquipmentRow>,
}

/// One equipment reading, keyed the way the server's dataframe emits it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquipmentRow {
    #[serde(rename = "Equipment Name")]
    pub name: String,
    #[serde(rename = "Type")]
    pub equipment_type: String,
    #[serde(rename = "Flowrate")]
    pub flowrate: f64,
    #[serde(rename = "Pressure")]
    pub pressure: f64,
    #[serde(rename = "Temperature")]
    pub temperature: f64,
}

/// Summary record of a previously completed upload, from `/api/history/`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub id: i64,
    pub name: String,
    pub total: u64,
    pub uploaded_at: DateTime<Utc>,
}
