//! Export module for turning site nodes into documents.
//!
//! This module provides:
//! - Content type resolution
//! - Listing pagination
//! - Single node export
//! - Document conversion
//! - Run outcome tracking

pub mod content_types;
pub mod convert;
pub mod listing;
pub mod node;
pub mod state;

pub use content_types::resolve_content_types;
pub use convert::{DocumentConverter, PandocConverter};
pub use listing::fetch_listing_page;
pub use node::export_node;
pub use state::{NodeFailure, NodeOutcome, RunSummary};

use crate::api::SiteClient;
use crate::config::Config;
use crate::error::Result;
use crate::fs::ensure_dir;
use crate::output::ExportProgress;
use crate::page::ContentTypes;

/// Everything a node export needs, passed explicitly to each stage.
pub struct ExportContext<'a> {
    pub client: &'a SiteClient,
    pub config: &'a Config,
    pub content_types: &'a ContentTypes,
    pub converter: &'a dyn DocumentConverter,
}

/// Walk every listing page and export each node.
///
/// Expects `client` to be logged in. Setup and listing page failures abort
/// the run; node failures are recorded in the summary, and stop the run only
/// when `fail_fast` is set.
pub async fn run_export(
    client: &SiteClient,
    config: &Config,
    converter: &dyn DocumentConverter,
) -> Result<RunSummary> {
    ensure_dir(&config.export.directory)?;

    let mut summary = RunSummary::new();
    let content_types = resolve_content_types(client, config).await?;
    summary.content_types = content_types.len();

    let ctx = ExportContext {
        client,
        config,
        content_types: &content_types,
        converter,
    };

    let progress = ExportProgress::new(
        u64::from(config.site.num_pages),
        config.export.show_progress,
    );

    'pages: for page in 0..config.site.num_pages {
        let rows = fetch_listing_page(client, config, page).await?;
        let nodes = progress.node_bar(rows.len() as u64);

        for row in &rows {
            let outcome = export_node(&ctx, row).await;
            summary.record(&outcome);
            nodes.inc(1);

            if let NodeOutcome::Failed { link, reason } = &outcome {
                tracing::warn!("Failed to export {}: {}", link, reason);

                if config.export.fail_fast {
                    summary.aborted = true;
                    nodes.finish_and_clear();
                    break 'pages;
                }
            }
        }

        nodes.finish_and_clear();
        summary.mark_page_done();
        progress.page_done();
    }

    progress.finish();
    summary.finish();
    Ok(summary)
}
