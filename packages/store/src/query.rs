//! Snapshot type for remotely fetched, client-cached data.

use serde::{Deserialize, Serialize};

/// The observable state of one cached remote query.
///
/// A provider owns a `QueryState` behind a signal, refetches in the
/// background, and swaps in new snapshots; consumers only ever read. A query
/// is *resolved* once the first fetch has completed, successfully or not —
/// until then `is_fetching` is `true` and both `data` and `error` are `None`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct QueryState<T> {
    pub data: Option<T>,
    pub error: Option<String>,
    pub is_fetching: bool,
}

impl<T> Default for QueryState<T> {
    fn default() -> Self {
        Self {
            data: None,
            error: None,
            is_fetching: true,
        }
    }
}

impl<T> QueryState<T> {
    /// Snapshot for a completed fetch.
    pub fn resolved(data: T) -> Self {
        Self {
            data: Some(data),
            error: None,
            is_fetching: false,
        }
    }

    /// Snapshot for a failed fetch.
    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            data: None,
            error: Some(error.into()),
            is_fetching: false,
        }
    }

    /// Whether the first fetch has completed (with data or with an error).
    pub fn is_resolved(&self) -> bool {
        !self.is_fetching
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_unresolved() {
        let state: QueryState<u32> = QueryState::default();
        assert!(!state.is_resolved());
        assert!(state.data.is_none());
        assert!(state.error.is_none());
    }

    #[test]
    fn test_resolved_and_failed() {
        let ok = QueryState::resolved(7u32);
        assert!(ok.is_resolved());
        assert_eq!(ok.data, Some(7));

        let err: QueryState<u32> = QueryState::failed("boom");
        assert!(err.is_resolved());
        assert!(err.data.is_none());
        assert_eq!(err.error.as_deref(), Some("boom"));
    }
}
