use leptos::*;
use leptos_router::{use_location, Outlet};

use crate::{
    config::{AppConfig, BuildMode},
    devtools::{default_plugins, Devtools, DevtoolsPosition},
};

#[component]
/// Renders the nested route, then the developer overlay when `build_mode` enables it.
///
/// Navigation state arrives as the explicit `pathname` signal so the layout can be
/// rendered without a router.
pub fn RootLayout(
    build_mode: BuildMode,
    #[prop(into)] pathname: Signal<String>,
    children: Children,
) -> impl IntoView {
    view! {
        {children()}
        {build_mode.devtools_enabled().then(|| {
            view! { <Devtools position=DevtoolsPosition::BottomRight plugins=default_plugins(pathname) /> }
        })}
    }
}

#[component]
/// Root route node: [`RootLayout`] around the matched child route.
pub fn RootRoute() -> impl IntoView {
    let config = expect_context::<AppConfig>();
    let location = use_location();
    let pathname = Signal::derive(move || location.pathname.get());

    view! {
        <RootLayout build_mode=config.build_mode pathname=pathname>
            <Outlet />
        </RootLayout>
    }
}

#[cfg(test)]
mod tests {
    use query_cache::QueryClient;

    use super::*;
    use crate::{providers::QueryProvider, routes::HomePage, test_support::render_html};

    fn render_root(build_mode: BuildMode) -> String {
        render_html(move || {
            view! {
                <QueryProvider client=QueryClient::new()>
                    <RootLayout build_mode=build_mode pathname=Signal::derive(|| "/".to_string())>
                        <HomePage />
                    </RootLayout>
                </QueryProvider>
            }
        })
    }

    #[test]
    fn production_mode_leaves_no_overlay_trace() {
        let html = render_root(BuildMode::Production);

        assert!(html.contains("Ember"));
        assert!(!html.contains("devtools"), "unexpected overlay in {html}");
    }

    #[test]
    fn development_mode_mounts_two_bottom_right_plugins() {
        let html = render_root(BuildMode::Development);

        assert_eq!(html.matches("data-devtools-plugin=").count(), 2);
        assert!(html.contains("data-devtools-plugin=\"query-cache\""));
        assert!(html.contains("data-devtools-plugin=\"router\""));
        assert!(html.contains("data-devtools-position=\"bottom-right\""));
        assert!(html.contains("data-ui-anchor=\"bottom-right\""));
    }

    #[test]
    fn nested_route_renders_before_overlay() {
        let html = render_root(BuildMode::Development);

        let page = html.find("<h1").expect("page heading");
        let overlay = html.find("data-devtools-position").expect("overlay");
        assert!(page < overlay);
    }
}
