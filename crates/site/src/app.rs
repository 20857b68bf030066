use leptos::*;
use leptos_meta::*;
use leptos_router::*;

use crate::{
    config::AppConfig,
    providers::{AppContext, QueryProvider},
    routes::{HOME, MAIN_LAYOUT, ROOT},
};

#[component]
/// Application root: document metadata, the shared cache context, and the route tree.
///
/// `context` is built once by the caller and owned here for the lifetime of the mount.
pub fn App(context: AppContext, config: AppConfig) -> impl IntoView {
    provide_meta_context();
    provide_context(config);

    view! {
        <Title text="Ember" />
        <Meta name="description" content="Ember web client." />

        <QueryProvider client=context.query_client>
            <Router>
                <Routes>
                    <Route path=ROOT.segment view=ROOT.view>
                        <Route path=MAIN_LAYOUT.segment view=MAIN_LAYOUT.view>
                            <Route path=HOME.segment view=HOME.view />
                        </Route>
                    </Route>
                </Routes>
            </Router>
        </QueryProvider>
    }
}
