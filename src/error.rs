use std::path::PathBuf;

use thiserror::Error;

/// Errors that abort a whole harvest run.
///
/// Everything here is fatal to the invocation; per-file download problems are
/// reported through [`DownloadError`] instead and never stop sibling jobs.
#[derive(Debug, Error)]
pub enum HarvestError {
    /// The page URL could not be parsed even after scheme defaulting.
    #[error("invalid page URL: {0}")]
    InvalidUrl(String),

    /// The HTTP client itself could not be constructed.
    #[error("cannot build http client: {0}")]
    Client(#[source] reqwest::Error),

    /// The initial page request failed at the transport level.
    #[error("failed to fetch page: {0}")]
    Fetch(#[source] reqwest::Error),

    /// The initial page request came back with an error status.
    #[error("page fetch returned HTTP {status}")]
    FetchStatus { status: u16 },

    /// Extraction completed but matched no links. Distinct from a fetch
    /// failure so operators can tell "page loaded, filters matched nothing"
    /// from "page did not load".
    #[error("no image links found on the page")]
    EmptyResult,

    /// Neither the requested output directory nor the derived fallback could
    /// be created.
    #[error("cannot create output directory {path}: {source}")]
    DirectoryCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A configuration file could not be read.
    #[error("cannot read config file: {0}")]
    ConfigRead(#[source] std::io::Error),

    /// A configuration file could not be parsed.
    #[error("invalid config file: {0}")]
    ConfigParse(#[from] serde_json::Error),

    /// A tag filter name outside the known vocabulary.
    #[error("unknown tag filter: {0}")]
    UnknownTag(String),

    /// An explicit filename list that does not pair up with the URL list.
    #[error("{names} filenames supplied for {urls} urls")]
    JobMismatch { urls: usize, names: usize },
}

/// Failure of a single download job.
///
/// Closed set of kinds so callers can tell a refused response from a broken
/// transfer from a local write problem.
#[derive(Debug, Error)]
pub enum DownloadError {
    #[error("request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("server returned HTTP {0}")]
    HttpStatus(u16),

    #[error("write failed: {0}")]
    Io(#[from] std::io::Error),
}
