//! Display states for a view's data fetches.
//!
//! Every read a page issues moves through exactly one of three states. The
//! page renders a placeholder while loading, then either the data view or a
//! static failure message. There is no retry.
//!
//! A response may arrive after its page has been dismissed. Completions are
//! routed through a [`MountGuard`] the page releases on cleanup, so a late
//! response never touches state that belongs to an unmounted view.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// The state of one fetch.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchState<T, E> {
    /// Request in flight.
    Loading,
    /// Request succeeded.
    Ready(T),
    /// Request failed.
    Failed(E),
}

impl<T, E> Default for FetchState<T, E> {
    fn default() -> Self {
        Self::Loading
    }
}

impl<T, E> FetchState<T, E> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// The data, if the fetch succeeded.
    pub fn data(&self) -> Option<&T> {
        match self {
            Self::Ready(data) => Some(data),
            _ => None,
        }
    }

    /// The error, if the fetch failed.
    pub fn error(&self) -> Option<&E> {
        match self {
            Self::Failed(error) => Some(error),
            _ => None,
        }
    }

    /// Transform the data of a ready state.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> FetchState<U, E> {
        match self {
            Self::Loading => FetchState::Loading,
            Self::Ready(data) => FetchState::Ready(f(data)),
            Self::Failed(error) => FetchState::Failed(error),
        }
    }
}

impl<T, E> From<Result<T, E>> for FetchState<T, E> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(data) => Self::Ready(data),
            Err(error) => Self::Failed(error),
        }
    }
}

/// Tracks whether the view that issued a fetch is still mounted.
///
/// Clones share one flag. The view keeps one clone for its cleanup hook and
/// moves another into the fetch's completion.
#[derive(Debug, Clone)]
pub struct MountGuard {
    mounted: Arc<AtomicBool>,
}

impl Default for MountGuard {
    fn default() -> Self {
        Self::new()
    }
}

impl MountGuard {
    /// A guard for a view that is mounted now.
    pub fn new() -> Self {
        Self {
            mounted: Arc::new(AtomicBool::new(true)),
        }
    }

    /// Mark the view as dismissed. Idempotent.
    pub fn release(&self) {
        self.mounted.store(false, Ordering::Release);
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted.load(Ordering::Acquire)
    }

    /// Run `update` only while the view is mounted.
    ///
    /// Returns whether the update ran.
    pub fn apply(&self, update: impl FnOnce()) -> bool {
        if self.is_mounted() {
            update();
            true
        } else {
            tracing::debug!("dropping fetch completion for dismissed view");
            false
        }
    }
}
