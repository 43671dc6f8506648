//! Page components for the Analytics Pro dashboard

pub mod dashboard;

pub use dashboard::Dashboard;
