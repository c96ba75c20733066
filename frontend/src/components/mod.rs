pub mod dashboard;
pub mod defect_overlay;
pub mod defect_table;
pub mod header;
pub mod image_grid;
pub mod log_viewer;
pub mod notice;
pub mod results;
pub mod scan_progress;
pub mod status_badge;
pub mod utils;
