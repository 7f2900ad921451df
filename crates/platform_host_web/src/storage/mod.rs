//! Browser storage backends for dashboard records and image assets.

pub mod indexed_db;
pub mod local_prefs;
