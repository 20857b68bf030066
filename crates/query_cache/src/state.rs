//! Per-key cache entry state.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::time::elapsed_ms;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
/// Outcome of the most recent fetch for an entry.
pub enum QueryStatus {
    /// No data has been stored yet.
    #[default]
    Pending,
    /// Data is available.
    Success,
    /// The last fetch failed and no later success replaced it.
    Error,
}

impl QueryStatus {
    /// Stable lowercase token used by inspectors and DOM attributes.
    pub fn token(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
/// Whether a fetch is currently in flight for an entry.
pub enum FetchStatus {
    /// No fetch in flight.
    #[default]
    Idle,
    /// A fetcher future is being awaited.
    Fetching,
}

impl FetchStatus {
    /// Stable lowercase token used by inspectors and DOM attributes.
    pub fn token(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Fetching => "fetching",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
/// Snapshot of one cache entry.
pub struct QueryState {
    /// Last successfully stored value, kept across later fetch errors.
    pub data: Option<Value>,
    /// Message of the most recent fetch error.
    pub error: Option<String>,
    /// Data/error outcome.
    pub status: QueryStatus,
    /// In-flight marker.
    pub fetch_status: FetchStatus,
    /// Unix milliseconds of the last data write, `0` when never written.
    pub data_updated_at_ms: u64,
    /// Unix milliseconds of the last recorded error, `0` when none.
    pub error_updated_at_ms: u64,
    /// Number of fetcher invocations started for this entry.
    pub fetch_count: u32,
    /// Set by invalidation; cleared by the next data write.
    pub invalidated: bool,
}

impl QueryState {
    /// Returns `true` when the entry should be refetched at `now_ms`.
    pub fn is_stale_at(&self, now_ms: u64, stale_time_ms: u64) -> bool {
        if self.invalidated || self.data.is_none() {
            return true;
        }
        elapsed_ms(self.data_updated_at_ms, now_ms) >= stale_time_ms
    }

    pub(crate) fn record_data(&mut self, data: Value, now_ms: u64) {
        self.data = Some(data);
        self.error = None;
        self.status = QueryStatus::Success;
        self.fetch_status = FetchStatus::Idle;
        self.data_updated_at_ms = now_ms;
        self.invalidated = false;
    }

    pub(crate) fn record_error(&mut self, error: String, now_ms: u64) {
        self.error = Some(error);
        self.status = QueryStatus::Error;
        self.fetch_status = FetchStatus::Idle;
        self.error_updated_at_ms = now_ms;
    }

    pub(crate) fn begin_fetch(&mut self) {
        self.fetch_status = FetchStatus::Fetching;
        self.fetch_count = self.fetch_count.saturating_add(1);
    }
}
