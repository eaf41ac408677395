//! Configuration module for cms-export.
//!
//! This module handles:
//! - Loading configuration from TOML files
//! - Export format selection
//! - Configuration validation

pub mod format;
pub mod loader;
pub mod validation;

pub use format::ExportFormat;
pub use loader::{AccountConfig, Config, ExportConfig, LoginFormConfig, SiteConfig};
pub use validation::validate_config;
