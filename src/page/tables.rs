//! Admin table parsing.
//!
//! Both the content type list and the node listing render their data in the
//! first `table.sticky-enabled` of the page.

use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};

use crate::error::{Error, Result};
use crate::page::node::{ContentTypes, NodeRow};

static TABLE: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("table.sticky-enabled").unwrap());
static ROW: LazyLock<Selector> = LazyLock::new(|| Selector::parse("tr").unwrap());
static CELL: LazyLock<Selector> = LazyLock::new(|| Selector::parse("td").unwrap());
static LINK: LazyLock<Selector> = LazyLock::new(|| Selector::parse("a").unwrap());

/// Parse the content type table into a label -> code map.
///
/// Rows without a non-empty first cell (header rows) are ignored.
pub fn parse_content_types(html: &str) -> Result<ContentTypes> {
    let document = Html::parse_document(html);
    let table = find_table(&document)?;
    let mut types = ContentTypes::new();

    for row in table.select(&ROW) {
        let Some(name_cell) = row.select(&CELL).next() else {
            continue;
        };

        let label = element_text(name_cell).trim().to_string();
        if label.is_empty() {
            continue;
        }

        let code_cell = next_cell_after(row, name_cell).ok_or_else(|| {
            Error::Structure(format!("content type '{}' has no code cell", label))
        })?;

        types.insert(label, element_text(code_cell).trim().to_string());
    }

    Ok(types)
}

/// Parse the node listing table into rows that link to a node.
///
/// Rows without an anchor or without any `td` cell are not node rows.
pub fn parse_node_rows(html: &str) -> Result<Vec<NodeRow>> {
    let document = Html::parse_document(html);
    let table = find_table(&document)?;

    let rows = table
        .select(&ROW)
        .filter(|row| row.select(&CELL).next().is_some())
        .filter_map(|row| {
            let anchor = row.select(&LINK).next()?;
            Some(NodeRow {
                link: anchor.value().attr("href").map(str::to_string),
                title: element_text(anchor).trim().to_string(),
                type_label: next_cell_after(row, anchor)
                    .map(|cell| element_text(cell).trim().to_string()),
            })
        })
        .collect();

    Ok(rows)
}

fn find_table(document: &Html) -> Result<ElementRef<'_>> {
    document
        .select(&TABLE)
        .next()
        .ok_or_else(|| Error::Structure("page has no table.sticky-enabled".to_string()))
}

/// Concatenated text of all descendants.
fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect()
}

/// First `td` following `start` in document order, within `scope`.
fn next_cell_after<'a>(scope: ElementRef<'a>, start: ElementRef<'a>) -> Option<ElementRef<'a>> {
    scope
        .descendants()
        .skip_while(|node| node.id() != start.id())
        .skip(1)
        .filter_map(ElementRef::wrap)
        .find(|element| element.value().name() == "td")
}
