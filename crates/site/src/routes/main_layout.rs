use leptos::*;
use leptos_router::Outlet;
use system_ui::{PageContent, PageFooter, PageHeader, PageShell};

#[component]
/// Page chrome around one content slot: fixed header, scrollable main region, footer.
pub fn MainLayout(children: Children) -> impl IntoView {
    view! {
        <PageShell layout_class="main-layout">
            <PageHeader />
            <PageContent>{children()}</PageContent>
            <PageFooter />
        </PageShell>
    }
}

#[component]
/// Layout route node: [`MainLayout`] around the matched child route.
pub fn MainLayoutRoute() -> impl IntoView {
    view! {
        <MainLayout>
            <Outlet />
        </MainLayout>
    }
}
