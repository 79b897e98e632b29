//! Pagination types.
//!
//! Search results are paged with the backend's native scroll cursor. The first
//! page carries no token; every later page forwards the opaque token returned
//! with the previous page.

use std::time::Duration;

/// Page size used when the caller supplies none (or a non-positive one).
pub const DEFAULT_PAGE_SIZE: usize = 8;

/// Upper bound on the page size.
pub const MAX_PAGE_SIZE: usize = 100;

/// Paging and deadline controls for a search call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    /// Number of items per page.
    pub page_size: usize,
    /// Continuation token returned by the previous page.
    pub scroll_token: Option<String>,
    /// Deadline for the backend call, overriding the client default.
    pub timeout: Option<Duration>,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            scroll_token: None,
            timeout: None,
        }
    }
}

impl PageRequest {
    /// Creates a first-page request with the given size.
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size,
            ..Default::default()
        }
    }

    /// Resolves a caller-supplied page size.
    ///
    /// Absent or non-positive sizes fall back to `default_size`; larger sizes
    /// are clamped to `max_size`.
    pub fn resolve(requested: Option<i64>, default_size: usize, max_size: usize) -> Self {
        let requested = requested
            .filter(|n| *n > 0)
            .map(|n| usize::try_from(n).unwrap_or(max_size));
        Self::new(clamp_page_size(requested, default_size, max_size))
    }

    /// Returns the page size to send to the backend.
    ///
    /// A zero size falls back to [`DEFAULT_PAGE_SIZE`]; anything above
    /// [`MAX_PAGE_SIZE`] is clamped.
    pub fn effective_page_size(&self) -> usize {
        let requested = Some(self.page_size).filter(|n| *n > 0);
        clamp_page_size(requested, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE)
    }

    /// Sets the continuation token. Empty tokens are ignored.
    pub fn with_scroll_token(mut self, token: impl Into<String>) -> Self {
        let token = token.into();
        self.scroll_token = if token.is_empty() { None } else { Some(token) };
        self
    }

    /// Sets the backend call deadline.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Returns true if this is a continuation request.
    pub fn is_continuation(&self) -> bool {
        self.scroll_token.is_some()
    }
}

fn clamp_page_size(requested: Option<usize>, default_size: usize, max_size: usize) -> usize {
    requested.unwrap_or(default_size).min(max_size)
}
