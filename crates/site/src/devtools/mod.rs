//! Developer overlays: a bottom-right dock hosting the cache and route inspectors.
//!
//! The dock only renders in development builds; see
//! [`crate::routes::RootLayout`].

mod query;
mod router;

use std::rc::Rc;

use leptos::*;
use system_ui::{Heading, OverlayAnchor, OverlayDock, Panel, TextRole};

pub use query::QueryInspector;
pub use router::RouteInspector;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Viewport corner the devtools dock is pinned to.
pub enum DevtoolsPosition {
    /// Top-left corner.
    TopLeft,
    /// Top-right corner.
    TopRight,
    /// Bottom-left corner.
    BottomLeft,
    /// Bottom-right corner.
    #[default]
    BottomRight,
}

impl DevtoolsPosition {
    fn anchor(self) -> OverlayAnchor {
        match self {
            Self::TopLeft => OverlayAnchor::TopLeft,
            Self::TopRight => OverlayAnchor::TopRight,
            Self::BottomLeft => OverlayAnchor::BottomLeft,
            Self::BottomRight => OverlayAnchor::BottomRight,
        }
    }

    /// Stable DOM token for the position.
    pub fn token(self) -> &'static str {
        self.anchor().token()
    }
}

#[derive(Clone)]
/// One named contribution rendered inside the devtools dock.
pub struct DevtoolsPlugin {
    /// Stable DOM identifier.
    pub id: &'static str,
    /// Display name.
    pub name: &'static str,
    render: Rc<dyn Fn() -> View>,
}

impl DevtoolsPlugin {
    /// Creates a plugin from a render function.
    pub fn new(id: &'static str, name: &'static str, render: impl Fn() -> View + 'static) -> Self {
        Self {
            id,
            name,
            render: Rc::new(render),
        }
    }

    /// Renders the plugin body.
    pub fn render(&self) -> View {
        (self.render)()
    }
}

/// Cache inspector plugin.
pub fn query_plugin() -> DevtoolsPlugin {
    DevtoolsPlugin::new("query-cache", "Query Cache", || {
        view! { <QueryInspector /> }.into_view()
    })
}

/// Route inspector plugin bound to the current location.
pub fn router_plugin(pathname: Signal<String>) -> DevtoolsPlugin {
    DevtoolsPlugin::new("router", "Router", move || {
        view! { <RouteInspector pathname=pathname /> }.into_view()
    })
}

/// The plugins mounted by the root route: cache inspector, then route inspector.
pub fn default_plugins(pathname: Signal<String>) -> Vec<DevtoolsPlugin> {
    vec![query_plugin(), router_plugin(pathname)]
}

#[component]
/// Non-interactive dock listing each plugin in its own panel.
pub fn Devtools(
    #[prop(default = DevtoolsPosition::BottomRight)] position: DevtoolsPosition,
    plugins: Vec<DevtoolsPlugin>,
) -> impl IntoView {
    view! {
        <OverlayDock anchor=position.anchor() layout_class="devtools" aria_label="Developer tools">
            <div class="devtools-plugins" data-devtools-position=position.token()>
                {plugins
                    .into_iter()
                    .map(|plugin| {
                        let (id, name) = (plugin.id, plugin.name);
                        let body = plugin.render();
                        view! {
                            <div class="devtools-plugin" data-devtools-plugin=id>
                                <Panel aria_label=name ui_slot="devtools-plugin-body">
                                    <Heading role=TextRole::Label>{name}</Heading>
                                    {body}
                                </Panel>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </OverlayDock>
    }
}
