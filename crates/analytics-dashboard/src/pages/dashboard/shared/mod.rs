//! Components and types shared by dashboard sections

pub mod chart;
pub mod table;
pub mod types;
