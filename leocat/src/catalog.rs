//! Catalog retrieval boundary.
//!
//! The pipeline itself never touches the network; it receives one complete
//! text buffer from here. Fetch failures are fatal to the run and are never
//! retried.

use std::{
    fs,
    io::Read,
    path::{Path, PathBuf},
    time::Duration,
};
use url::Url;

/// Default CelesTrak GP query endpoint
pub const BASE_URL: &str = "https://celestrak.org/NORAD/elements/gp.php";
/// Catalog group fetched when no source argument is given
pub const DEFAULT_GROUP: &str = "active";

const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("catalog request failed: {0}")]
    Http(#[from] ureq::Error),
    #[error("failed to read catalog source: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid catalog locator: {0}")]
    Locator(#[from] url::ParseError),
}

/// Where the raw catalog text comes from.
///
/// A single source argument covers all three: anything with an http scheme
/// is a URL, an existing local path is a file (import mode, useful
/// offline), and everything else names a CelesTrak group.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum CatalogSource {
    Group(String),
    Url(String),
    File(PathBuf),
}

impl CatalogSource {
    pub fn from_arg(arg: &str) -> Self {
        if arg.starts_with("http://") || arg.starts_with("https://") {
            CatalogSource::Url(arg.to_string())
        } else if Path::new(arg).exists() {
            CatalogSource::File(PathBuf::from(arg))
        } else {
            CatalogSource::Group(arg.to_string())
        }
    }

    /// Retrieve the complete raw catalog text
    pub fn fetch(&self) -> Result<String, FetchError> {
        match self {
            CatalogSource::File(path) => Ok(fs::read_to_string(path)?),
            CatalogSource::Url(locator) => fetch_url(locator),
            CatalogSource::Group(group) => fetch_url(group_url(group)?.as_str()),
        }
    }
}

fn group_url(group: &str) -> Result<Url, url::ParseError> {
    Url::parse_with_params(BASE_URL, &[("GROUP", group), ("FORMAT", "tle")])
}

fn fetch_url(locator: &str) -> Result<String, FetchError> {
    let agent = ureq::AgentBuilder::new().timeout(FETCH_TIMEOUT).build();
    let mut text = String::new();
    agent
        .get(locator)
        .call()?
        .into_reader()
        .read_to_string(&mut text)?;
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_argument_resolution() {
        assert_eq!(
            CatalogSource::from_arg("stations"),
            CatalogSource::Group("stations".to_string())
        );
        assert_eq!(
            CatalogSource::from_arg("https://example.com/gp.php?GROUP=geo&FORMAT=tle"),
            CatalogSource::Url("https://example.com/gp.php?GROUP=geo&FORMAT=tle".to_string())
        );
        // The current directory always exists
        assert_eq!(
            CatalogSource::from_arg("."),
            CatalogSource::File(PathBuf::from("."))
        );
    }

    #[test]
    fn group_query_url() {
        assert_eq!(
            group_url("last-30-days").unwrap().as_str(),
            "https://celestrak.org/NORAD/elements/gp.php?GROUP=last-30-days&FORMAT=tle"
        );
    }

    #[test]
    fn file_source_reads_verbatim() {
        let path = std::env::temp_dir().join("leocat-fetch-test.txt");
        fs::write(&path, "SAT\n1 x\n2 y\n").unwrap();
        let text = CatalogSource::File(path.clone()).fetch().unwrap();
        assert_eq!(text, "SAT\n1 x\n2 y\n");
        let _ = fs::remove_file(path);
    }
}
