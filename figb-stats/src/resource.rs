//! Loading the two precomputed documents.
//!
//! The transport is injected so the browser crate can hand in `fetch` while
//! the audit CLI and the tests read from disk or from canned bodies. Each page
//! requests its document exactly once when it mounts; there is no retry and
//! no cancellation.

use serde::de::DeserializeOwned;
use std::fmt;
use std::future::Future;
use std::rc::Rc;
use thiserror::Error;

/// Directory the offline process writes its JSON documents to.
pub const RESULTS_DIR: &str = "results";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    Summary,
    Advanced,
}

impl Resource {
    #[must_use]
    pub const fn file_name(self) -> &'static str {
        match self {
            Self::Summary => "summary_stats.json",
            Self::Advanced => "statistiche_avanzate.json",
        }
    }

    /// Site-relative path, e.g. `results/summary_stats.json`.
    #[must_use]
    pub fn relative_path(self) -> String {
        format!("{RESULTS_DIR}/{}", self.file_name())
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_name())
    }
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Request failed: {0}")]
    Request(String),
    #[error("HTTP {status}: {status_text}")]
    Status { status: u16, status_text: String },
    #[error("Response was not valid UTF-8")]
    Utf8,
    #[error("JSON parsing error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// What a transport hands back: the status line and the body as text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub status_text: String,
    pub body: String,
}

impl RawResponse {
    #[must_use]
    pub fn ok(body: impl Into<String>) -> Self {
        Self {
            status: 200,
            status_text: "OK".to_string(),
            body: body.into(),
        }
    }

    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }
}

/// Turn a transport response into a parsed document.
///
/// # Errors
///
/// A non-2xx status becomes [`LoadError::Status`]; a body that does not match
/// `T` becomes [`LoadError::Parse`].
pub fn decode<T: DeserializeOwned>(response: &RawResponse) -> Result<T, LoadError> {
    if !response.is_success() {
        return Err(LoadError::Status {
            status: response.status,
            status_text: response.status_text.clone(),
        });
    }
    Ok(serde_json::from_str(&response.body)?)
}

/// Fetch one document through `fetch` and parse it.
///
/// `fetch` is called exactly once with the resource's site-relative path.
///
/// # Errors
///
/// Propagates transport failures and the errors of [`decode`].
#[allow(clippy::future_not_send)]
pub async fn load_resource<T, F, Fut>(resource: Resource, fetch: F) -> Result<T, LoadError>
where
    T: DeserializeOwned,
    F: FnOnce(String) -> Fut,
    Fut: Future<Output = Result<RawResponse, LoadError>>,
{
    let path = resource.relative_path();
    log::debug!("fetching {path}");
    let outcome = fetch(path).await.and_then(|response| decode(&response));
    match &outcome {
        Ok(_) => log::debug!("loaded {resource}"),
        Err(err) => log::warn!("failed to load {resource}: {err}"),
    }
    outcome
}

/// Per-page lifecycle of a document request.
///
/// Starts in `Loading` and settles once. A settled state ignores any later
/// outcome.
pub enum FetchState<T> {
    Loading,
    Loaded(Rc<T>),
    Failed(Rc<LoadError>),
}

impl<T> FetchState<T> {
    #[must_use]
    pub fn from_outcome(outcome: Result<T, LoadError>) -> Self {
        match outcome {
            Ok(value) => Self::Loaded(Rc::new(value)),
            Err(err) => Self::Failed(Rc::new(err)),
        }
    }

    /// Apply an outcome if still loading. Returns whether the state changed.
    pub fn settle(&mut self, outcome: Result<T, LoadError>) -> bool {
        if self.is_settled() {
            return false;
        }
        *self = Self::from_outcome(outcome);
        true
    }

    #[must_use]
    pub const fn is_settled(&self) -> bool {
        !matches!(self, Self::Loading)
    }

    #[must_use]
    pub fn data(&self) -> Option<&T> {
        match self {
            Self::Loaded(value) => Some(value),
            _ => None,
        }
    }

    #[must_use]
    pub fn error(&self) -> Option<&LoadError> {
        match self {
            Self::Failed(err) => Some(err),
            _ => None,
        }
    }
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        Self::Loading
    }
}

impl<T> Clone for FetchState<T> {
    fn clone(&self) -> Self {
        match self {
            Self::Loading => Self::Loading,
            Self::Loaded(value) => Self::Loaded(Rc::clone(value)),
            Self::Failed(err) => Self::Failed(Rc::clone(err)),
        }
    }
}

impl<T: PartialEq> PartialEq for FetchState<T> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Loading, Self::Loading) => true,
            (Self::Loaded(a), Self::Loaded(b)) => Rc::ptr_eq(a, b) || a == b,
            (Self::Failed(a), Self::Failed(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for FetchState<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Loading => f.write_str("Loading"),
            Self::Loaded(value) => f.debug_tuple("Loaded").field(value).finish(),
            Self::Failed(err) => f.debug_tuple("Failed").field(err).finish(),
        }
    }
}
