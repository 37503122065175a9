use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use futures::StreamExt;
use reqwest::Client;
use tokio::io::AsyncWriteExt;
use tokio::sync::Semaphore;

use crate::config::HarvestConfig;
use crate::error::{DownloadError, HarvestError};
use crate::results::{BatchReport, DownloadOutcome};
use crate::urls;

/// One (source URL, destination path) pair to be downloaded.
#[derive(Debug, Clone)]
pub struct DownloadJob {
    pub source_url: String,
    pub dest: PathBuf,
}

impl DownloadJob {
    /// Builds jobs for `urls`, deriving each filename from the URL basename.
    /// The job's position index backs the fallback name for URLs with an
    /// empty basename, so names stay collision-free without shared state.
    pub fn from_urls<S: AsRef<str>>(out_dir: &Path, urls: &[S]) -> Vec<DownloadJob> {
        urls.iter()
            .enumerate()
            .map(|(index, url)| {
                let url = url.as_ref();
                DownloadJob {
                    source_url: url.to_string(),
                    dest: out_dir.join(urls::file_name_for(url, index)),
                }
            })
            .collect()
    }

    /// Builds jobs with an explicit filename list, paired by position.
    pub fn from_urls_with_names<S: AsRef<str>, N: AsRef<str>>(
        out_dir: &Path,
        urls: &[S],
        names: &[N],
    ) -> Result<Vec<DownloadJob>, HarvestError> {
        if urls.len() != names.len() {
            return Err(HarvestError::JobMismatch {
                urls: urls.len(),
                names: names.len(),
            });
        }
        Ok(urls
            .iter()
            .zip(names)
            .map(|(url, name)| DownloadJob {
                source_url: url.as_ref().to_string(),
                dest: out_dir.join(name.as_ref()),
            })
            .collect())
    }
}

/// Builds the HTTP client shared by the page fetch and all download jobs.
/// Caller-supplied headers (the User-Agent) ride along as client defaults.
pub fn build_client(config: &HarvestConfig) -> Result<Client, HarvestError> {
    Client::builder()
        .user_agent(config.user_agent.as_str())
        .timeout(Duration::from_secs(config.request_timeout_secs))
        .build()
        .map_err(HarvestError::Client)
}

/// Fetches the page HTML. Runs strictly before the concurrent phase; any
/// failure here is fatal to the run.
pub async fn fetch_page(client: &Client, url: &str) -> Result<String, HarvestError> {
    let response = client.get(url).send().await.map_err(HarvestError::Fetch)?;
    let status = response.status();
    ::log::info!("got response [{status}] for page: {url}");
    if !status.is_success() {
        return Err(HarvestError::FetchStatus {
            status: status.as_u16(),
        });
    }
    response.text().await.map_err(HarvestError::Fetch)
}

/// Downloads every job concurrently, bounded by `max_concurrency` in-flight
/// transfers.
///
/// Jobs are independent: a failure is recorded in that job's slot and never
/// cancels siblings. The returned outcomes are ordered by job position, not
/// completion order.
pub async fn download_all(
    client: &Client,
    jobs: Vec<DownloadJob>,
    max_concurrency: usize,
) -> BatchReport {
    let semaphore = Arc::new(Semaphore::new(max_concurrency.max(1)));

    let mut handles = Vec::with_capacity(jobs.len());
    for job in jobs {
        let client = client.clone();
        let semaphore = Arc::clone(&semaphore);
        handles.push(tokio::spawn(async move {
            let _permit = semaphore
                .acquire_owned()
                .await
                .expect("download semaphore is never closed");
            download_one(&client, &job).await
        }));
    }

    // Handles were pushed in job order, so awaiting them in order yields a
    // position-indexed outcome vector with no shared collection structure.
    let mut outcomes = Vec::with_capacity(handles.len());
    for handle in handles {
        let outcome = match handle.await {
            Ok(outcome) => outcome,
            Err(err) => {
                ::log::error!("download task panicked: {err}");
                DownloadOutcome::Failed(DownloadError::Io(std::io::Error::other(err)))
            }
        };
        outcomes.push(outcome);
    }

    BatchReport { outcomes }
}

/// Runs a single job: skip if the destination exists, otherwise transfer.
async fn download_one(client: &Client, job: &DownloadJob) -> DownloadOutcome {
    if job.dest.exists() {
        ::log::info!(
            "file {} exists, skipping URL: {}",
            job.dest.display(),
            job.source_url
        );
        return DownloadOutcome::SkippedExisting;
    }

    match transfer(client, job).await {
        Ok(()) => {
            ::log::debug!("downloaded {} to {}", job.source_url, job.dest.display());
            DownloadOutcome::Success
        }
        Err(err) => {
            ::log::warn!("download failed for {}: {err}", job.source_url);
            DownloadOutcome::Failed(err)
        }
    }
}

/// Streams the response body to the destination file chunk by chunk. The
/// write handle is scoped to this function, so it is closed on every exit
/// path, including mid-transfer failures that leave a partial file behind.
async fn transfer(client: &Client, job: &DownloadJob) -> Result<(), DownloadError> {
    let response = client.get(&job.source_url).send().await?;
    let status = response.status();
    ::log::info!("got response [{status}] for URL: {}", job.source_url);

    if !status.is_success() {
        // Drain the body so the connection can be reused.
        let _ = response.bytes().await;
        return Err(DownloadError::HttpStatus(status.as_u16()));
    }

    let mut file = tokio::fs::File::create(&job.dest).await?;
    let mut stream = response.bytes_stream();
    while let Some(chunk) = stream.next().await {
        let chunk = chunk?;
        file.write_all(&chunk).await?;
    }
    file.flush().await?;
    Ok(())
}
