//! Core utilities for the Summer League scorekeeper
//!
//! - `paths`: Config and data file locations
//! - `http`: Request headers for the league backend

pub mod http;
pub mod paths;

pub use http::auth_header_map;
pub use paths::{config_file_path, data_dir, try_read_to_string};
