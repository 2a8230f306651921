/// Errors that can occur within the notification subsystem.
///
/// Channel implementations surface these through their `anyhow::Result`
/// return; the manager only logs them, so nothing here is fatal to the
/// monitoring loop.
///
/// # Examples
///
/// ```rust
/// use bridgemon_notify::error::NotifyError;
///
/// let err = NotifyError::Api {
///     service: "slack".to_string(),
///     status: 404,
///     body: "no_service".to_string(),
/// };
/// assert!(err.to_string().contains("slack"));
/// ```
#[derive(Debug, thiserror::Error)]
pub enum NotifyError {
    /// An HTTP request to an external notification endpoint failed.
    #[error("Notify: HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The external API returned a non-success response.
    #[error("Notify: API error from {service}: status={status}, body={body}")]
    Api {
        service: String,
        status: u16,
        body: String,
    },
}

/// Convenience `Result` alias for notification operations.
pub type Result<T> = std::result::Result<T, NotifyError>;
