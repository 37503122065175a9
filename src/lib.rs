// Re-export modules
pub mod config;
pub mod download;
pub mod error;
pub mod extract;
pub mod filter;
pub mod results;
pub mod urls;

// Re-export commonly used types for convenience
pub use config::HarvestConfig;
pub use download::DownloadJob;
pub use error::{DownloadError, HarvestError};
pub use results::{BatchReport, DownloadOutcome};

use std::path::{Path, PathBuf};

use reqwest::Client;
use url::Url;

use crate::extract::{ExtractOptions, TagKind};

/// Main builder for pulling the image links out of a page and downloading
/// them to a local directory.
pub struct Harvest {
    config: HarvestConfig,
}

impl Harvest {
    /// Create a new Harvest builder for the given page URL.
    pub fn new(url: &str) -> Self {
        Self {
            config: HarvestConfig::new(url),
        }
    }

    /// Use an existing configuration.
    pub fn from_config(config: HarvestConfig) -> Self {
        Self { config }
    }

    /// Load the configuration from a JSON file.
    pub fn from_config_file<P: AsRef<Path>>(path: P) -> Result<Self, HarvestError> {
        Ok(Self {
            config: HarvestConfig::from_file(path)?,
        })
    }

    /// Constrain the link search to the first element with this CSS class.
    pub fn with_class(mut self, class: &str) -> Self {
        self.config.class = Some(class.to_string());
        self
    }

    /// Constrain the link search to the first element with this id.
    pub fn with_id(mut self, id: &str) -> Self {
        self.config.id = Some(id.to_string());
        self
    }

    /// Set the tag types to scan (`"a"`, `"img"`).
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Set the output directory instead of deriving it from the page URL.
    pub fn with_out_dir(mut self, out_dir: &str) -> Self {
        self.config.out_dir = Some(out_dir.to_string());
        self
    }

    /// Override the User-Agent header sent with every request.
    pub fn with_user_agent(mut self, user_agent: &str) -> Self {
        self.config.user_agent = user_agent.to_string();
        self
    }

    /// Set the maximum number of downloads in flight at once.
    pub fn with_max_concurrency(mut self, value: usize) -> Self {
        self.config.max_concurrency = value;
        self
    }

    /// Fetch the page and return the extracted image links, in document
    /// order, without downloading anything.
    pub async fn collect_links(&self) -> Result<Vec<String>, HarvestError> {
        let client = download::build_client(&self.config)?;
        let (_, links) = self.collect_links_with(&client).await?;
        Ok(links)
    }

    /// Run the whole pipeline: fetch, extract, prepare the output directory
    /// and download every link.
    pub async fn run(self) -> Result<BatchReport, HarvestError> {
        let client = download::build_client(&self.config)?;
        let (page_url, links) = self.collect_links_with(&client).await?;

        let out_dir = prepare_output_dir(self.config.out_dir.as_deref(), &page_url)?;
        ::log::info!("downloading {} files to {}", links.len(), out_dir.display());

        let jobs = DownloadJob::from_urls(&out_dir, &links);
        Ok(download::download_all(&client, jobs, self.config.max_concurrency).await)
    }

    async fn collect_links_with(
        &self,
        client: &Client,
    ) -> Result<(String, Vec<String>), HarvestError> {
        let page_url = urls::normalize(&self.config.start_url)?;
        ::log::debug!("normalized page URL: {page_url}");

        let html = download::fetch_page(client, &page_url).await?;

        let base =
            Url::parse(&page_url).map_err(|_| HarvestError::InvalidUrl(page_url.clone()))?;
        let options = ExtractOptions {
            class: self.config.class.clone(),
            id: self.config.id.clone(),
            tags: TagKind::parse_list(&self.config.tags)?,
        };

        let links = extract::extract_links(&html, &base, &options);
        if links.is_empty() {
            return Err(HarvestError::EmptyResult);
        }
        ::log::info!("found {} image links", links.len());
        Ok((page_url, links))
    }
}

/// Creates the output directory before the concurrent phase starts. A
/// requested directory that cannot be created falls back once to the name
/// derived from the page URL; a second failure is fatal.
fn prepare_output_dir(requested: Option<&str>, page_url: &str) -> Result<PathBuf, HarvestError> {
    if let Some(dir) = requested {
        let path = PathBuf::from(dir);
        match create_new_dir(&path) {
            Ok(()) => return Ok(path),
            Err(err) => ::log::error!(
                "creating destination dir {} failed ({err}), using page title instead",
                path.display()
            ),
        }
    }

    let title = urls::page_title(page_url);
    if title.is_empty() {
        return Err(HarvestError::DirectoryCreate {
            path: PathBuf::new(),
            source: std::io::Error::other("no directory name could be derived from the URL"),
        });
    }

    let path = PathBuf::from(title);
    create_new_dir(&path).map_err(|source| HarvestError::DirectoryCreate {
        path: path.clone(),
        source,
    })?;
    Ok(path)
}

/// Creates a directory, parents included, refusing a path that already
/// exists.
fn create_new_dir(path: &Path) -> std::io::Result<()> {
    if path.exists() {
        return Err(std::io::Error::new(
            std::io::ErrorKind::AlreadyExists,
            "directory already exists",
        ));
    }
    std::fs::create_dir_all(path)
}
