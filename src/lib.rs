//! CMS Export - export the content nodes of a legacy CMS as documents.
//!
//! The exporter logs into the site as an administrator, reads the content
//! type table, walks the paginated admin node listing and converts the body
//! of every node into a standalone document with pandoc.
//!
//! # Features
//!
//! - Cookie-based administrator session
//! - Content type code lookup for file names
//! - Relative image sources rewritten to absolute URLs
//! - Book navigation blocks stripped from node bodies
//! - Already exported nodes skipped without a fetch
//! - Per-node outcomes collected into a run summary
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use cms_export::{api, run_export, Config, PandocConverter, SiteClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load(Path::new("config.toml"))?;
//!     let client = SiteClient::new(&config.site)?;
//!     api::login(&client, &config.site.login_path, &config.account, &config.login_form).await?;
//!
//!     let converter = PandocConverter::new(&config.export.pandoc_path);
//!     let summary = run_export(&client, &config, &converter).await?;
//!     println!("{} exported, {} skipped", summary.exported, summary.skipped);
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod fs;
pub mod output;
pub mod page;

// Re-exports for convenience
pub use api::SiteClient;
pub use config::{Config, ExportFormat};
pub use error::{Error, Result};
pub use export::{
    run_export, DocumentConverter, ExportContext, NodeOutcome, PandocConverter, RunSummary,
};
pub use page::{ContentTypes, NodeRow};
