//! Filesystem module.
//!
//! Provides:
//! - Export path and directory management
//! - File name sanitization

pub mod naming;
pub mod paths;

pub use naming::{page_number_from_link, render_file_name, sanitize_file_name};
pub use paths::{ensure_dir, get_export_path};
