pub mod entry_points;
pub mod studio_api;
