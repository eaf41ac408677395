//! Export path and directory management.

use std::path::{Path, PathBuf};

use crate::config::ExportConfig;
use crate::error::Result;
use crate::fs::naming::{render_file_name, sanitize_file_name};

/// Get the output path for a node.
pub fn get_export_path(
    export: &ExportConfig,
    page_number: &str,
    content_type: &str,
    page_name: &str,
) -> PathBuf {
    let name = render_file_name(
        &export.file_name_format,
        page_number,
        content_type,
        page_name,
    );

    export.directory.join(format!(
        "{}.{}",
        sanitize_file_name(&name),
        export.format.extension()
    ))
}

/// Ensure a directory exists, creating it if necessary.
pub fn ensure_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        std::fs::create_dir_all(path)?;
    }
    Ok(())
}
