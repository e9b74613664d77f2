// src/pipeline.rs

use std::{fmt, path::PathBuf};

use scraper::Html;
use tracing::{debug, info, instrument, warn};

use crate::{
    config::Config,
    error::Result,
    fetch::{build_client, fetch_page},
    output::write_csv,
    record::{validate, GiEntry},
    table::{extract_headers, extract_rows, locate_table},
};

/// Where a run currently is. Every stage but `Validating` fails the whole run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
    Fetching,
    Parsing,
    Extracting,
    Validating,
    Writing,
    Done,
}

impl Stage {
    pub fn as_str(&self) -> &str {
        match self {
            Stage::Fetching => "fetching",
            Stage::Parsing => "parsing",
            Stage::Extracting => "extracting",
            Stage::Validating => "validating",
            Stage::Writing => "writing",
            Stage::Done => "done",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a run that did not fail ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Saved { path: PathBuf, count: usize },
    /// Table and headers were there but no row passed validation. Nothing is written.
    NoValidEntries,
}

/// Result of turning a page into records, before anything touches disk.
#[derive(Debug)]
pub struct Scraped {
    pub headers: Vec<String>,
    pub entries: Vec<GiEntry>,
    pub rejected: usize,
}

fn enter(stage: Stage) {
    debug!(stage = %stage, "entering stage");
}

/// Locate the table in `html`, pull headers and rows, validate each row.
/// Rows that fail validation are logged and counted, never fatal.
pub fn scrape_document(html: &str, table_id: &str) -> Result<Scraped> {
    enter(Stage::Parsing);
    let doc = Html::parse_document(html);
    let table = locate_table(&doc, table_id)?;

    enter(Stage::Extracting);
    let headers = extract_headers(table)?;
    info!("Found columns: {:?}", headers);
    let rows = extract_rows(table, headers.len())?;

    enter(Stage::Validating);
    let mut entries = Vec::with_capacity(rows.len());
    let mut rejected = 0;
    for row in &rows {
        match validate(&headers, row) {
            Ok(entry) => entries.push(entry),
            Err(e) => {
                warn!("{}", e);
                rejected += 1;
            }
        }
    }
    debug!(accepted = entries.len(), rejected, "validation finished");

    Ok(Scraped {
        headers,
        entries,
        rejected,
    })
}

/// Download, extract, validate and save, one stage after the other.
#[instrument(level = "debug", skip(cfg), fields(url = %cfg.url))]
pub async fn run(cfg: &Config) -> Result<Outcome> {
    enter(Stage::Fetching);
    let client = build_client(cfg)?;
    let body = fetch_page(&client, &cfg.url).await?;

    let scraped = scrape_document(&body, &cfg.table_id)?;
    if scraped.entries.is_empty() {
        info!("No valid entries found.");
        enter(Stage::Done);
        return Ok(Outcome::NoValidEntries);
    }

    enter(Stage::Writing);
    let count = write_csv(&cfg.output_path, &scraped.headers, &scraped.entries)?;
    info!(
        "Successfully saved {} entries to {}",
        count,
        cfg.output_path.display()
    );

    enter(Stage::Done);
    Ok(Outcome::Saved {
        path: cfg.output_path.clone(),
        count,
    })
}
