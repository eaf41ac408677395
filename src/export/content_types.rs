//! Content type resolution.

use crate::api::SiteClient;
use crate::config::Config;
use crate::error::Result;
use crate::page::{parse_content_types, ContentTypes};

/// Fetch the content type admin page and build the label -> code map.
pub async fn resolve_content_types(client: &SiteClient, config: &Config) -> Result<ContentTypes> {
    let url = client.url(&config.site.content_types_path)?;
    let html = client.get_page(&url).await?;
    let types = parse_content_types(&html)?;

    if types.is_empty() {
        tracing::warn!("No content types found on {}", url);
    } else {
        tracing::info!("Resolved {} content types", types.len());
    }

    Ok(types)
}
