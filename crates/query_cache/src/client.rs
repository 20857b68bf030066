//! Reference-counted query client and its subscription handles.

use std::{
    cell::{Cell, RefCell},
    collections::BTreeMap,
    fmt,
    future::Future,
    rc::{Rc, Weak},
};

use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;

use crate::{key::QueryKey, state::QueryState, time::unix_time_ms_now};

/// Default freshness window. Data is stale as soon as it is written.
pub const DEFAULT_STALE_TIME_MS: u64 = 0;

thread_local! {
    static NEXT_CLIENT_ID: Cell<u64> = const { Cell::new(1) };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Tunables applied to every query owned by a [`QueryClient`].
pub struct QueryClientConfig {
    /// How long written data counts as fresh, in milliseconds.
    pub stale_time_ms: u64,
}

impl Default for QueryClientConfig {
    fn default() -> Self {
        Self {
            stale_time_ms: DEFAULT_STALE_TIME_MS,
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Errors surfaced by typed cache reads, writes, and fetches.
pub enum QueryError {
    /// A value could not be converted to JSON before caching.
    #[error("failed to serialize value for {key}: {message}")]
    Serialize {
        /// Target entry.
        key: QueryKey,
        /// Serializer message.
        message: String,
    },
    /// A cached value did not match the requested type.
    #[error("cached value for {key} has an unexpected shape: {message}")]
    Deserialize {
        /// Source entry.
        key: QueryKey,
        /// Deserializer message.
        message: String,
    },
    /// The fetcher returned an error.
    #[error("fetch for {key} failed: {message}")]
    Fetch {
        /// Fetched entry.
        key: QueryKey,
        /// Fetcher error text.
        message: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Mutation notifications delivered to [`QueryClient::subscribe`] listeners.
pub enum CacheEvent {
    /// Data was written for the key.
    Updated(QueryKey),
    /// A fetcher started for the key.
    FetchStarted(QueryKey),
    /// A fetch for the key recorded an error.
    Failed(QueryKey),
    /// The key was marked stale.
    Invalidated(QueryKey),
    /// The key was dropped from the cache.
    Removed(QueryKey),
    /// Every entry was dropped.
    Cleared,
}

/// Callback invoked for every [`CacheEvent`].
pub type CacheListener = Rc<dyn Fn(&CacheEvent)>;

struct ClientInner {
    id: u64,
    config: QueryClientConfig,
    clock: fn() -> u64,
    entries: RefCell<BTreeMap<QueryKey, QueryState>>,
    listeners: RefCell<Vec<(u64, CacheListener)>>,
    next_listener_id: Cell<u64>,
}

#[derive(Clone)]
/// Shared handle to one application-wide query cache.
///
/// Cloning the handle never copies the cache: every clone points at the same
/// entries and listeners, which is what lets descendant views observe a single
/// instance. The handle is `!Send` and meant for the UI thread only.
pub struct QueryClient {
    inner: Rc<ClientInner>,
}

impl fmt::Debug for QueryClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QueryClient")
            .field("id", &self.inner.id)
            .field("config", &self.inner.config)
            .field("entries", &self.inner.entries.borrow().len())
            .finish()
    }
}

impl Default for QueryClient {
    fn default() -> Self {
        Self::new()
    }
}

impl QueryClient {
    /// Creates an empty client with default settings.
    pub fn new() -> Self {
        Self::with_config(QueryClientConfig::default())
    }

    /// Creates an empty client with explicit settings.
    pub fn with_config(config: QueryClientConfig) -> Self {
        Self::with_clock(config, unix_time_ms_now)
    }

    /// Creates an empty client that reads time from `clock`.
    pub fn with_clock(config: QueryClientConfig, clock: fn() -> u64) -> Self {
        let id = NEXT_CLIENT_ID.with(|next| {
            let id = next.get();
            next.set(id.wrapping_add(1));
            id
        });
        Self {
            inner: Rc::new(ClientInner {
                id,
                config,
                clock,
                entries: RefCell::new(BTreeMap::new()),
                listeners: RefCell::new(Vec::new()),
                next_listener_id: Cell::new(1),
            }),
        }
    }

    /// Process-unique instance number, assigned at construction.
    pub fn id(&self) -> u64 {
        self.inner.id
    }

    /// Settings the client was built with.
    pub fn config(&self) -> QueryClientConfig {
        self.inner.config
    }

    /// Returns `true` when both handles point at the same cache.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    /// Number of cached entries.
    pub fn len(&self) -> usize {
        self.inner.entries.borrow().len()
    }

    /// Returns `true` when nothing is cached.
    pub fn is_empty(&self) -> bool {
        self.inner.entries.borrow().is_empty()
    }

    /// Returns a copy of the state recorded for `key`.
    pub fn get_query_state(&self, key: &QueryKey) -> Option<QueryState> {
        self.inner.entries.borrow().get(key).cloned()
    }

    /// Reads and deserializes the data cached for `key`.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::Deserialize`] when the cached JSON does not match `T`.
    pub fn get_query_data<T: DeserializeOwned>(
        &self,
        key: &QueryKey,
    ) -> Result<Option<T>, QueryError> {
        let Some(raw) = self
            .inner
            .entries
            .borrow()
            .get(key)
            .and_then(|state| state.data.clone())
        else {
            return Ok(None);
        };
        serde_json::from_value(raw)
            .map(Some)
            .map_err(|err| QueryError::Deserialize {
                key: key.clone(),
                message: err.to_string(),
            })
    }

    /// Serializes and stores `value` under `key`, marking the entry fresh.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::Serialize`] when `value` cannot be converted to JSON.
    pub fn set_query_data<T: Serialize + ?Sized>(
        &self,
        key: &QueryKey,
        value: &T,
    ) -> Result<(), QueryError> {
        let raw = serde_json::to_value(value).map_err(|err| QueryError::Serialize {
            key: key.clone(),
            message: err.to_string(),
        })?;
        let now = self.now();
        self.write_entry(key, CacheEvent::Updated(key.clone()), |state| {
            state.record_data(raw, now)
        });
        Ok(())
    }

    /// Returns `true` when `key` is missing, invalidated, or older than the stale time.
    pub fn is_stale(&self, key: &QueryKey) -> bool {
        self.is_stale_at(key, self.now())
    }

    /// [`Self::is_stale`] evaluated at an explicit timestamp.
    pub fn is_stale_at(&self, key: &QueryKey, now_ms: u64) -> bool {
        self.inner
            .entries
            .borrow()
            .get(key)
            .map_or(true, |state| {
                state.is_stale_at(now_ms, self.inner.config.stale_time_ms)
            })
    }

    /// Returns fresh cached data for `key`, or runs `fetcher` and caches its result.
    ///
    /// Concurrent calls for the same key each run their own fetcher; the last
    /// one to finish wins.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::Fetch`] when the fetcher fails and the serialization
    /// variants when the value cannot round-trip through JSON. Failures are also
    /// recorded on the entry so inspectors can show them.
    pub async fn fetch_query<T, E, F, Fut>(
        &self,
        key: &QueryKey,
        fetcher: F,
    ) -> Result<T, QueryError>
    where
        T: Serialize + DeserializeOwned,
        E: fmt::Display,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        if !self.is_stale(key) {
            if let Some(cached) = self.get_query_data::<T>(key)? {
                return Ok(cached);
            }
        }

        self.write_entry(key, CacheEvent::FetchStarted(key.clone()), |state| {
            state.begin_fetch()
        });

        let fetched = fetcher().await;
        let now = self.now();
        let failure = match fetched {
            Ok(value) => match serde_json::to_value(&value) {
                Ok(raw) => {
                    self.write_entry(key, CacheEvent::Updated(key.clone()), |state| {
                        state.record_data(raw, now)
                    });
                    return Ok(value);
                }
                Err(err) => QueryError::Serialize {
                    key: key.clone(),
                    message: err.to_string(),
                },
            },
            Err(err) => QueryError::Fetch {
                key: key.clone(),
                message: err.to_string(),
            },
        };

        let message = failure.to_string();
        self.write_entry(key, CacheEvent::Failed(key.clone()), |state| {
            state.record_error(message, now)
        });
        Err(failure)
    }

    /// Marks every entry under `prefix` stale and returns how many were touched.
    pub fn invalidate_queries(&self, prefix: &QueryKey) -> usize {
        let touched: Vec<QueryKey> = {
            let mut entries = self.inner.entries.borrow_mut();
            entries
                .iter_mut()
                .filter(|(key, _)| key.starts_with(prefix))
                .map(|(key, state)| {
                    state.invalidated = true;
                    key.clone()
                })
                .collect()
        };
        for key in &touched {
            self.emit(&CacheEvent::Invalidated(key.clone()));
        }
        touched.len()
    }

    /// Drops every entry under `prefix` and returns how many were removed.
    pub fn remove_queries(&self, prefix: &QueryKey) -> usize {
        let removed: Vec<QueryKey> = {
            let mut entries = self.inner.entries.borrow_mut();
            let keys: Vec<QueryKey> = entries
                .keys()
                .filter(|key| key.starts_with(prefix))
                .cloned()
                .collect();
            for key in &keys {
                entries.remove(key);
            }
            keys
        };
        for key in &removed {
            self.emit(&CacheEvent::Removed(key.clone()));
        }
        removed.len()
    }

    /// Drops every entry and returns how many were removed.
    pub fn clear(&self) -> usize {
        let removed = {
            let mut entries = self.inner.entries.borrow_mut();
            let count = entries.len();
            entries.clear();
            count
        };
        self.emit(&CacheEvent::Cleared);
        removed
    }

    /// Key-ordered copy of every entry.
    pub fn snapshot(&self) -> Vec<(QueryKey, QueryState)> {
        self.inner
            .entries
            .borrow()
            .iter()
            .map(|(key, state)| (key.clone(), state.clone()))
            .collect()
    }

    /// Registers `listener` for cache events until the returned handle is dropped.
    pub fn subscribe(&self, listener: impl Fn(&CacheEvent) + 'static) -> CacheSubscription {
        let id = self.inner.next_listener_id.get();
        self.inner.next_listener_id.set(id.wrapping_add(1));
        self.inner
            .listeners
            .borrow_mut()
            .push((id, Rc::new(listener)));
        CacheSubscription {
            id,
            client: Rc::downgrade(&self.inner),
        }
    }

    /// Number of live subscriptions.
    pub fn listener_count(&self) -> usize {
        self.inner.listeners.borrow().len()
    }

    fn now(&self) -> u64 {
        (self.inner.clock)()
    }

    fn write_entry(&self, key: &QueryKey, event: CacheEvent, apply: impl FnOnce(&mut QueryState)) {
        {
            let mut entries = self.inner.entries.borrow_mut();
            apply(entries.entry(key.clone()).or_default());
        }
        self.emit(&event);
    }

    // Listeners run with no borrows held so they can read or mutate the cache.
    fn emit(&self, event: &CacheEvent) {
        let listeners: Vec<CacheListener> = self
            .inner
            .listeners
            .borrow()
            .iter()
            .map(|(_, listener)| Rc::clone(listener))
            .collect();
        for listener in listeners {
            listener(event);
        }
    }
}

#[must_use = "dropping the subscription unsubscribes immediately"]
/// Live listener registration returned by [`QueryClient::subscribe`].
pub struct CacheSubscription {
    id: u64,
    client: Weak<ClientInner>,
}

impl CacheSubscription {
    /// Removes the listener. Equivalent to dropping the handle.
    pub fn unsubscribe(self) {}
}

impl Drop for CacheSubscription {
    fn drop(&mut self) {
        if let Some(client) = self.client.upgrade() {
            client
                .listeners
                .borrow_mut()
                .retain(|(id, _)| *id != self.id);
        }
    }
}
