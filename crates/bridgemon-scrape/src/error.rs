/// Errors raised while pulling the metrics feed.
///
/// Either variant aborts the whole evaluation cycle; per-line problems in
/// the feed body are handled locally by the matcher instead.
#[derive(Debug, thiserror::Error)]
pub enum ScrapeError {
    /// The request could not be completed (connect, DNS, timeout, or a
    /// failure while reading the body).
    #[error("Scrape: request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The endpoint answered with a non-success status.
    #[error("Scrape: {url} returned HTTP {status}")]
    Status { url: String, status: u16 },
}

/// Convenience `Result` alias for scrape operations.
pub type Result<T> = std::result::Result<T, ScrapeError>;
