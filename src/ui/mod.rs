// src/ui/mod.rs
pub mod dashboard;
pub mod history;

pub use history::HistoryAction;
