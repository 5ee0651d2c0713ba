//! Dataset loaders: resolve a [`DatasetId`] to records.
//!
//! Two sources are provided:
//! - [`FileSource`] reads `<root>/<file name>` from disk.
//! - [`HttpSource`] GETs `<base_url>/<file name>`, e.g. a static server
//!   publishing `data/*.json`.
//!
//! Both decode the dataset's JSON row shape (`Year`, `Country` and the value
//! field) and return one [`Record`] per row, in file order.
//!
//! ```no_run
//! # use econ_charts::source::{DataSource, FileSource};
//! # use econ_charts::models::DatasetId;
//! let source = FileSource::new("data");
//! let rows = source.load(DatasetId::Gdp)?;
//! # Ok::<(), econ_charts::error::LoadError>(())
//! ```

use crate::error::LoadError;
use crate::models::{DatasetId, Record};
use reqwest::blocking::Client as HttpClient;
use reqwest::redirect::Policy;
use std::path::PathBuf;
use std::time::Duration;

/// Anything that can produce a dataset's records.
pub trait DataSource {
    fn load(&self, id: DatasetId) -> Result<Vec<Record>, LoadError>;
}

/// Datasets stored as JSON files in one directory.
#[derive(Debug, Clone)]
pub struct FileSource {
    pub root: PathBuf,
}

impl FileSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl DataSource for FileSource {
    fn load(&self, id: DatasetId) -> Result<Vec<Record>, LoadError> {
        let path = self.root.join(id.file_name());
        let text = std::fs::read_to_string(&path).map_err(|source| LoadError::Io {
            path: path.clone(),
            source,
        })?;
        let records = id.parse_records(&text).map_err(|source| LoadError::Parse {
            dataset: path.display().to_string(),
            source,
        })?;
        log::debug!("loaded {} rows from {}", records.len(), path.display());
        Ok(records)
    }
}

/// Datasets served over HTTP(S) under one base URL.
#[derive(Debug, Clone)]
pub struct HttpSource {
    pub base_url: String,
    http: HttpClient,
}

impl HttpSource {
    pub fn new(base_url: impl Into<String>) -> Result<Self, LoadError> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        let http = HttpClient::builder()
            .timeout(Duration::from_secs(30)) // total request timeout
            .connect_timeout(Duration::from_secs(10))
            .redirect(Policy::limited(5))
            .user_agent(concat!("econ_charts/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| LoadError::Http {
                url: base_url.clone(),
                message: e.to_string(),
            })?;
        Ok(Self { base_url, http })
    }

    pub fn url_for(&self, id: DatasetId) -> String {
        format!("{}/{}", self.base_url, id.file_name())
    }

    /// GET `url` as text; retries 5xx responses and transport errors with a short backoff.
    fn get_text(&self, url: &str) -> Result<String, LoadError> {
        let fail = |message: String| LoadError::Http {
            url: url.to_string(),
            message,
        };
        const BACKOFF_MS: [u64; 3] = [100, 300, 700];
        let mut last_err = String::from("no attempt made");
        for (attempt, backoff_ms) in BACKOFF_MS.into_iter().enumerate() {
            match self.http.get(url).send() {
                Ok(r) if r.status().is_success() => {
                    return r.text().map_err(|e| fail(e.to_string()));
                }
                Ok(r) if r.status().is_server_error() => {
                    last_err = format!("HTTP {}", r.status());
                }
                Ok(r) => return Err(fail(format!("HTTP {}", r.status()))),
                Err(e) => last_err = e.to_string(),
            }
            if attempt + 1 == BACKOFF_MS.len() {
                break;
            }
            log::debug!("GET {url} failed ({last_err}), retrying in {backoff_ms}ms");
            std::thread::sleep(Duration::from_millis(backoff_ms));
        }
        Err(fail(last_err))
    }
}

impl DataSource for HttpSource {
    fn load(&self, id: DatasetId) -> Result<Vec<Record>, LoadError> {
        let url = self.url_for(id);
        let text = self.get_text(&url)?;
        id.parse_records(&text)
            .map_err(|source| LoadError::Parse { dataset: url, source })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn file_source_reads_and_reports_errors() {
        let dir = tempdir().unwrap();
        std::fs::write(
            dir.path().join("gdp.json"),
            r#"[{"Year": 1970, "Country": "Japan", "GDP": 2.1e11}]"#,
        )
        .unwrap();
        std::fs::write(dir.path().join("population.json"), "not json").unwrap();

        let src = FileSource::new(dir.path());
        let recs = src.load(DatasetId::Gdp).unwrap();
        assert_eq!(recs, vec![Record::new("Japan", 1970, 2.1e11)]);

        assert!(matches!(src.load(DatasetId::GdpPerCapita), Err(LoadError::Io { .. })));
        assert!(matches!(src.load(DatasetId::Population), Err(LoadError::Parse { .. })));
    }

    #[test]
    fn http_urls_join_cleanly() {
        let src = HttpSource::new("http://localhost:8000/data/").unwrap();
        assert_eq!(
            src.url_for(DatasetId::Population),
            "http://localhost:8000/data/population.json"
        );
    }
}
