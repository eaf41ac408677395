//! Node listing pagination.

use crate::api::SiteClient;
use crate::config::Config;
use crate::error::Result;
use crate::page::{parse_node_rows, NodeRow};

/// Fetch one listing page and return its node rows.
pub async fn fetch_listing_page(
    client: &SiteClient,
    config: &Config,
    page: u32,
) -> Result<Vec<NodeRow>> {
    let url = client.url(&config.node_list_path(page))?;
    let html = client.get_page(&url).await?;
    let rows = parse_node_rows(&html)?;

    tracing::debug!("Listing page {}: {} node rows", page, rows.len());
    Ok(rows)
}
