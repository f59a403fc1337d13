//! Application module
//!
//! Contains the main egui application.

mod preview_app;

pub use preview_app::PreviewApp;
