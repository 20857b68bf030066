//! Shared query cache context.
//!
//! The application builds exactly one [`QueryClient`] at startup through
//! [`create_app_context`] and hands it to [`QueryProvider`], which exposes it to
//! every descendant view. Lookups outside a provider fail loudly.

use leptos::*;
use query_cache::QueryClient;
use thiserror::Error;

use crate::config::AppConfig;

#[derive(Clone, Debug)]
/// Long-lived objects created once per application instance, outside the view tree.
pub struct AppContext {
    /// The application-wide query cache.
    pub query_client: QueryClient,
}

/// Builds the application context. Call once per application lifetime.
pub fn create_app_context(config: &AppConfig) -> AppContext {
    AppContext {
        query_client: QueryClient::with_config(config.query),
    }
}

#[derive(Clone)]
/// Leptos context value published by [`QueryProvider`].
pub struct QueryClientContext {
    /// The provided client. Clones share the same cache.
    pub client: QueryClient,
    /// Bumped on every cache event so views can re-read cache state.
    pub revision: RwSignal<u64>,
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
/// Context lookup failures.
pub enum ContextError {
    /// No [`QueryProvider`] encloses the calling view.
    #[error("QueryClient not provided; wrap the view tree in <QueryProvider>")]
    MissingQueryClient,
}

#[component]
/// Provides `client` to descendant views and tracks cache mutations as a revision signal.
pub fn QueryProvider(
    /// Client built by [`create_app_context`].
    client: QueryClient,
    children: Children,
) -> impl IntoView {
    let revision = create_rw_signal(0_u64);
    let subscription = client.subscribe(move |_| revision.update(|value| *value += 1));
    on_cleanup(move || drop(subscription));

    provide_context(QueryClientContext { client, revision });

    children().into_view()
}

/// Returns the enclosing [`QueryClientContext`], or an error when no provider exists.
///
/// # Errors
///
/// Returns [`ContextError::MissingQueryClient`] outside a [`QueryProvider`].
pub fn try_use_query_client() -> Result<QueryClientContext, ContextError> {
    use_context::<QueryClientContext>().ok_or(ContextError::MissingQueryClient)
}

/// Returns the enclosing [`QueryClientContext`].
///
/// # Panics
///
/// Panics if called outside [`QueryProvider`].
pub fn use_query_client_context() -> QueryClientContext {
    match try_use_query_client() {
        Ok(context) => context,
        Err(err) => panic!("{err}"),
    }
}

/// Returns the shared [`QueryClient`].
///
/// # Panics
///
/// Panics if called outside [`QueryProvider`].
pub fn use_query_client() -> QueryClient {
    use_query_client_context().client
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use query_cache::QueryKey;

    use super::*;

    #[component]
    fn ClientProbe(seen: Rc<RefCell<Vec<QueryClient>>>) -> impl IntoView {
        seen.borrow_mut().push(use_query_client());
        view! { <span data-probe="client"></span> }
    }

    #[component]
    fn ContextProbe(sink: Rc<RefCell<Option<QueryClientContext>>>) -> impl IntoView {
        *sink.borrow_mut() = Some(use_query_client_context());
    }

    #[component]
    fn Wrapper(children: Children) -> impl IntoView {
        view! { <section>{children()}</section> }
    }

    #[test]
    fn every_descendant_sees_the_same_client() {
        let runtime = create_runtime();
        let context = create_app_context(&AppConfig::default());
        let seen = Rc::new(RefCell::new(Vec::new()));
        let (shallow, deep) = (Rc::clone(&seen), Rc::clone(&seen));

        let _ = view! {
            <QueryProvider client=context.query_client.clone()>
                <ClientProbe seen=shallow />
                <Wrapper>
                    <Wrapper>
                        <ClientProbe seen=deep />
                    </Wrapper>
                </Wrapper>
            </QueryProvider>
        }
        .into_view();

        let seen = seen.borrow();
        assert_eq!(seen.len(), 2);
        assert!(seen
            .iter()
            .all(|client| client.ptr_eq(&context.query_client)
                && client.id() == context.query_client.id()));
        runtime.dispose();
    }

    #[test]
    fn app_context_starts_with_an_empty_configured_client() {
        let mut config = AppConfig::default();
        config.query.stale_time_ms = 5_000;

        let context = create_app_context(&config);

        assert!(context.query_client.is_empty());
        assert_eq!(context.query_client.config().stale_time_ms, 5_000);
    }

    #[test]
    fn cache_events_bump_the_revision() {
        let runtime = create_runtime();
        let client = QueryClient::new();
        let captured = Rc::new(RefCell::new(None));
        let sink = Rc::clone(&captured);

        let _ = view! {
            <QueryProvider client=client.clone()>
                <ContextProbe sink=sink />
            </QueryProvider>
        }
        .into_view();

        let context = captured.borrow().clone().expect("context captured");
        let before = context.revision.get_untracked();
        client
            .set_query_data(&QueryKey::from(["stats"]), &3)
            .expect("set");
        client.invalidate_queries(&QueryKey::default());

        assert_eq!(context.revision.get_untracked(), before + 2);
        assert_eq!(client.listener_count(), 1);
        runtime.dispose();
    }

    #[test]
    fn lookup_without_provider_is_an_error() {
        let runtime = create_runtime();
        assert_eq!(
            try_use_query_client().err(),
            Some(ContextError::MissingQueryClient)
        );
        runtime.dispose();
    }

    #[test]
    #[should_panic(expected = "QueryClient not provided")]
    fn lookup_without_provider_panics() {
        let _runtime = create_runtime();
        let _ = use_query_client();
    }
}
