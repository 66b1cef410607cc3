// web_app/pages/mod.rs - Page components module
//
// This module contains page-level Leptos components:
// - DashboardPage: the product catalog dashboard

pub mod dashboard;

// Re-export page components
pub use dashboard::DashboardPage;
