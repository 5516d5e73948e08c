// src/lib.rs
pub mod api;
pub mod app;
pub mod chart;
pub mod classify;
pub mod config;
pub mod report;
pub mod state;
pub mod ui;
pub mod worker;
