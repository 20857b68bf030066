//! Context providers mounted above the route tree.

pub mod query;

pub use query::{
    create_app_context, try_use_query_client, use_query_client, use_query_client_context,
    AppContext, ContextError, QueryClientContext, QueryProvider,
};
