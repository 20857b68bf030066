//! Browser client for Ember: route tree, page chrome, and the shared query cache context.

mod app;
pub mod config;
pub mod devtools;
pub mod providers;
pub mod routes;
#[cfg(test)]
mod test_support;

pub use app::App;
pub use config::{AppConfig, BuildMode};
pub use providers::{create_app_context, AppContext, QueryProvider};

/// Builds the application context once and mounts [`App`] to the document body.
#[cfg(all(feature = "csr", target_arch = "wasm32"))]
pub fn mount() {
    console_error_panic_hook::set_once();

    let config = AppConfig::from_build_env();
    leptos::logging::log!(
        "ember: mounting in {} mode (query stale time {} ms)",
        config.build_mode.token(),
        config.query.stale_time_ms
    );
    let context = create_app_context(&config);

    leptos::mount_to_body(move || leptos::view! { <App context=context config=config /> })
}
