//! Single node export.

use crate::error::{Error, Result};
use crate::export::state::NodeOutcome;
use crate::export::ExportContext;
use crate::fs::{get_export_path, page_number_from_link};
use crate::page::{extract_node_content, NodeRow};

/// Export the node a listing row points at.
///
/// Errors are folded into [`NodeOutcome::Failed`]; nothing is retried.
pub async fn export_node(ctx: &ExportContext<'_>, row: &NodeRow) -> NodeOutcome {
    match try_export_node(ctx, row).await {
        Ok(outcome) => outcome,
        Err(e) => NodeOutcome::Failed {
            link: row.link.clone().unwrap_or_else(|| row.title.clone()),
            reason: e.to_string(),
        },
    }
}

async fn try_export_node(ctx: &ExportContext<'_>, row: &NodeRow) -> Result<NodeOutcome> {
    let link = row
        .link
        .as_deref()
        .ok_or_else(|| Error::Structure(format!("link '{}' has no href", row.title)))?;

    let label = row.type_label.as_deref().ok_or_else(|| {
        Error::Structure(format!("no content type cell after link '{}'", link))
    })?;
    let content_type = ctx.content_types.resolve(label)?;

    let target = get_export_path(
        &ctx.config.export,
        page_number_from_link(link),
        content_type,
        &row.title,
    );

    if ctx.config.export.skip_existing && target.exists() {
        tracing::debug!("Skipping existing file: {}", target.display());
        return Ok(NodeOutcome::Skipped(target));
    }

    let url = ctx.client.url(link)?;
    let page = ctx.client.get_page(&url).await?;
    let fragment = extract_node_content(&page, ctx.client.base_url())?;

    ctx.converter
        .convert(&fragment, ctx.config.export.format, &target)
        .await?;

    tracing::info!("Exported: {}", target.display());
    Ok(NodeOutcome::Exported(target))
}
