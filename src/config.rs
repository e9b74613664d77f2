// src/config.rs

use std::{path::PathBuf, time::Duration};

/// Page that hosts the GI search table.
pub const DEFAULT_URL: &str = "https://glycemicindex.com/gi-search/";

/// The site turns away browser-less clients with an unknown agent.
pub const DEFAULT_USER_AGENT: &str = "curl/7.81.0";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// `id` attribute of the TablePress table holding the dataset.
pub const DEFAULT_TABLE_ID: &str = "tablepress-1";

pub const DEFAULT_OUTPUT: &str = "gi_data.csv";

/// Everything a single scrape run needs to know.
///
/// The binary always runs with `Config::default()`; the fields are public so
/// the library can be pointed somewhere else (a local server, a temp file).
#[derive(Debug, Clone)]
pub struct Config {
    pub url: String,
    pub user_agent: String,
    /// Total request timeout, connect through body.
    pub timeout: Duration,
    pub table_id: String,
    pub output_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            url: DEFAULT_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: DEFAULT_TIMEOUT,
            table_id: DEFAULT_TABLE_ID.to_string(),
            output_path: PathBuf::from(DEFAULT_OUTPUT),
        }
    }
}

impl Config {
    /// Same defaults, different source page.
    pub fn with_url(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }

    pub fn output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = path.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_live_site() {
        let cfg = Config::default();
        assert_eq!(cfg.url, "https://glycemicindex.com/gi-search/");
        assert_eq!(cfg.user_agent, "curl/7.81.0");
        assert_eq!(cfg.timeout, Duration::from_secs(30));
        assert_eq!(cfg.table_id, "tablepress-1");
        assert_eq!(cfg.output_path, PathBuf::from("gi_data.csv"));
    }

    #[test]
    fn with_url_keeps_other_defaults() {
        let cfg = Config::with_url("http://127.0.0.1:9/page").output_path("/tmp/out.csv");
        assert_eq!(cfg.url, "http://127.0.0.1:9/page");
        assert_eq!(cfg.table_id, DEFAULT_TABLE_ID);
        assert_eq!(cfg.output_path, PathBuf::from("/tmp/out.csv"));
    }
}
