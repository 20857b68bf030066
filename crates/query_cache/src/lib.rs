//! Client-side query cache shared by every view of the Ember web client.
//!
//! The crate owns the cache object that fetched data flows through: typed
//! [`QueryKey`] descriptors, per-key [`QueryState`] records, and the
//! reference-counted [`QueryClient`] handle whose identity stays stable for the
//! lifetime of the application. It has no UI dependencies; the Leptos provider
//! and inspectors live in the `site` crate.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod client;
mod key;
mod state;
pub mod time;

pub use client::{
    CacheEvent, CacheListener, CacheSubscription, QueryClient, QueryClientConfig, QueryError,
    DEFAULT_STALE_TIME_MS,
};
pub use key::QueryKey;
pub use state::{FetchStatus, QueryState, QueryStatus};
pub use time::unix_time_ms_now;
