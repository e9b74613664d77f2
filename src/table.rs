// src/table.rs

use scraper::{ElementRef, Html, Selector};
use tracing::{debug, info, warn};

use crate::error::{Result, ScrapeError};

fn selector(css: &str) -> Selector {
    Selector::parse(css).expect("static CSS selector should parse")
}

/// Text of an element the way the source table is meant to be read: every
/// text node trimmed, blanks dropped, the rest glued together.
pub fn cell_text(el: ElementRef<'_>) -> String {
    el.text().map(str::trim).filter(|t| !t.is_empty()).collect()
}

/// Find the `<table>` whose `id` is `table_id`.
///
/// When it is missing the error carries how many other tables the page has,
/// which is usually the first clue that the site changed its markup.
pub fn locate_table<'a>(doc: &'a Html, table_id: &str) -> Result<ElementRef<'a>> {
    let tables = selector("table");
    let mut seen = 0;
    for table in doc.select(&tables) {
        if table.value().id() == Some(table_id) {
            return Ok(table);
        }
        seen += 1;
    }

    if seen > 0 {
        warn!("Found {} other tables. Re-check the table ID if needed.", seen);
    }
    Err(ScrapeError::TableNotFound {
        id: table_id.to_string(),
        other_tables: seen,
    })
}

/// Column labels from the table's `<thead>`, in document order.
///
/// Labels are not de-duplicated.
pub fn extract_headers(table: ElementRef<'_>) -> Result<Vec<String>> {
    let thead = table
        .select(&selector("thead"))
        .next()
        .ok_or_else(|| ScrapeError::MalformedTable("table has no thead".into()))?;

    Ok(thead.select(&selector("th")).map(cell_text).collect())
}

/// One body row's cell texts, already sized to the header count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRow(Vec<String>);

impl RawRow {
    /// Right-pad with empty strings or truncate from the right so the row has
    /// exactly `width` cells. Which cell was really missing is unknowable.
    pub fn reconcile(mut cells: Vec<String>, width: usize) -> Self {
        cells.resize(width, String::new());
        RawRow(cells)
    }

    pub fn values(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Label used when reporting a rejected row.
    pub fn label(&self) -> &str {
        self.0.first().map(String::as_str).unwrap_or("Unknown")
    }
}

/// Data rows from the table's `<tbody>`, each reconciled to `width` cells.
/// Rows without any `<td>` (spacers, stray header rows) are skipped.
pub fn extract_rows(table: ElementRef<'_>, width: usize) -> Result<Vec<RawRow>> {
    let tbody = table
        .select(&selector("tbody"))
        .next()
        .ok_or_else(|| ScrapeError::MalformedTable("table has no tbody".into()))?;

    let tr = selector("tr");
    let td = selector("td");

    let trs: Vec<ElementRef<'_>> = tbody.select(&tr).collect();
    info!("Processing {} rows...", trs.len());

    let mut rows = Vec::with_capacity(trs.len());
    for row in trs {
        let cells: Vec<String> = row.select(&td).map(cell_text).collect();
        if cells.is_empty() {
            continue;
        }
        if cells.len() != width {
            debug!(
                cells = cells.len(),
                width,
                first = cells[0].as_str(),
                "reconciling ragged row"
            );
        }
        rows.push(RawRow::reconcile(cells, width));
    }
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(body: &str) -> Html {
        Html::parse_document(&format!("<html><body>{}</body></html>", body))
    }

    fn strings(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn pads_short_rows() {
        let row = RawRow::reconcile(strings(&["a", "b", "c"]), 13);
        assert_eq!(row.len(), 13);
        assert_eq!(&row.values()[..3], &strings(&["a", "b", "c"])[..]);
        assert!(row.values()[3..].iter().all(String::is_empty));
    }

    #[test]
    fn truncates_long_rows() {
        let row = RawRow::reconcile(strings(&["a", "b", "c", "d"]), 2);
        assert_eq!(row.values(), &strings(&["a", "b"])[..]);
    }

    #[test]
    fn label_falls_back_to_unknown() {
        assert_eq!(RawRow::reconcile(Vec::new(), 0).label(), "Unknown");
        assert_eq!(RawRow::reconcile(strings(&["Apple"]), 3).label(), "Apple");
    }

    #[test]
    fn finds_table_by_id_among_others() {
        let html = doc(
            r#"<table id="nav"><tr><td>x</td></tr></table>
               <table id="tablepress-1"><thead><tr><th>Food Name</th></tr></thead></table>"#,
        );
        let table = locate_table(&html, "tablepress-1").unwrap();
        assert_eq!(table.value().id(), Some("tablepress-1"));
    }

    #[test]
    fn missing_table_counts_others() {
        let html = doc("<table></table><table id='other'></table>");
        match locate_table(&html, "tablepress-1") {
            Err(ScrapeError::TableNotFound { id, other_tables }) => {
                assert_eq!(id, "tablepress-1");
                assert_eq!(other_tables, 2);
            }
            other => panic!("unexpected: {:?}", other.map(|t| t.html())),
        }
    }

    #[test]
    fn headers_are_trimmed_and_keep_duplicates() {
        let html = doc(
            r#"<table id="t"><thead><tr>
                 <th> Food Name </th><th>GI</th><th>GI</th>
               </tr></thead><tbody></tbody></table>"#,
        );
        let table = locate_table(&html, "t").unwrap();
        assert_eq!(
            extract_headers(table).unwrap(),
            strings(&["Food Name", "GI", "GI"])
        );
    }

    #[test]
    fn missing_thead_is_malformed() {
        let html = doc(r#"<table id="t"><tbody><tr><td>1</td></tr></tbody></table>"#);
        let table = locate_table(&html, "t").unwrap();
        assert!(matches!(
            extract_headers(table),
            Err(ScrapeError::MalformedTable(_))
        ));
    }

    #[test]
    fn missing_tbody_is_malformed() {
        let html = doc(r#"<table id="t"><thead><tr><th>A</th></tr></thead></table>"#);
        let table = locate_table(&html, "t").unwrap();
        assert!(matches!(
            extract_rows(table, 1),
            Err(ScrapeError::MalformedTable(_))
        ));
    }

    #[test]
    fn rows_skip_cellless_and_reconcile_each() {
        let html = doc(
            r#"<table id="t">
                 <thead><tr><th>A</th><th>B</th><th>C</th></tr></thead>
                 <tbody>
                   <tr><td> 1 </td><td>2</td><td>3</td></tr>
                   <tr></tr>
                   <tr><td>only</td></tr>
                   <tr><td>w</td><td>x</td><td>y</td><td>z</td></tr>
                 </tbody>
               </table>"#,
        );
        let table = locate_table(&html, "t").unwrap();
        let rows = extract_rows(table, 3).unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].values(), &strings(&["1", "2", "3"])[..]);
        assert_eq!(rows[1].values(), &strings(&["only", "", ""])[..]);
        assert_eq!(rows[2].values(), &strings(&["w", "x", "y"])[..]);
    }

    #[test]
    fn cell_text_strips_each_fragment() {
        let html = doc(r#"<table id="t"><tbody><tr><td>  40 <sup> a </sup>  </td></tr></tbody></table>"#);
        let td = html.select(&selector("td")).next().unwrap();
        assert_eq!(cell_text(td), "40a");
    }
}
