//! Presentational components shared across pages

pub mod accordion;
pub mod file_grid;
pub mod header;
pub mod upload_area;
