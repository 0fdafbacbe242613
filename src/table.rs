//! HTML table extraction.
//!
//! Parses the protected table page permissively (malformed markup never
//! aborts the parse) and flattens every `<tr>` into a row of trimmed cell
//! strings.

use std::sync::LazyLock;

use scraper::{Html, Selector};

/// One table row: cell text in document order, trimmed.
pub type TableRow = Vec<String>;

/// All rows of the table page, in document order.
pub type TableData = Vec<TableRow>;

static ROW_SELECTOR: LazyLock<Selector> = LazyLock::new(|| compile_static_selector("tr"));
static CELL_SELECTOR: LazyLock<Selector> = LazyLock::new(|| compile_static_selector("td"));

/// Compiles a known-good selector; panics at startup for typos in static selectors.
fn compile_static_selector(selector: &str) -> Selector {
    Selector::parse(selector)
        .unwrap_or_else(|e| panic!("invalid static CSS selector '{selector}': {e}"))
}

/// Extracts all table rows from the page HTML.
///
/// Every `<tr>` in document order contributes one row built from its
/// descendant `<td>` cells. Rows with zero cells (header-only or empty rows)
/// are dropped; rows with at least one cell are kept even when cells trim to
/// empty strings. A page without rows yields an empty vec, never an error.
#[must_use]
pub fn parse_table_data(html: &str) -> TableData {
    let document = Html::parse_document(html);
    document
        .select(&ROW_SELECTOR)
        .filter_map(|row| {
            let cells: TableRow = row
                .select(&CELL_SELECTOR)
                .map(|cell| cell.text().collect::<Vec<_>>().join("").trim().to_owned())
                .collect();
            (!cells.is_empty()).then_some(cells)
        })
        .collect()
}
