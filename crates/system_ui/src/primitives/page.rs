use super::*;

#[component]
/// Full-height page column: header, content, footer.
pub fn PageShell(
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-page-shell", layout_class)
            data-ui-primitive="true"
            data-ui-kind="page-shell"
        >
            {children()}
        </div>
    }
}

#[component]
/// Header bar pinned to the top of the viewport.
pub fn PageHeader(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    view! {
        <header
            class=merge_layout_class("ui-page-header", layout_class)
            data-ui-primitive="true"
            data-ui-kind="page-header"
            data-ui-position="fixed"
        >
            {children.map(|children| children())}
        </header>
    }
}

#[component]
/// Scrollable main region, offset below the fixed header, wrapping one content slot.
pub fn PageContent(
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <main
            class=merge_layout_class("ui-page-content", layout_class)
            data-ui-primitive="true"
            data-ui-kind="page-content"
        >
            <div class="ui-page-slot" data-ui-slot="content" data-ui-variant=SurfaceVariant::Muted.token()>
                {children()}
            </div>
        </main>
    }
}

#[component]
/// Page footer.
pub fn PageFooter(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    view! {
        <footer
            class=merge_layout_class("ui-page-footer", layout_class)
            data-ui-primitive="true"
            data-ui-kind="page-footer"
        >
            {children.map(|children| children())}
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_content_wraps_slot_in_main() {
        let runtime = create_runtime();
        let html = view! { <PageContent><p>"slot body"</p></PageContent> }
            .into_view()
            .render_to_string()
            .to_string();

        let main = html.find("<main").expect("main element");
        let slot = html.find("data-ui-slot=\"content\"").expect("content slot");
        let body = html.find("slot body").expect("slot children");
        assert!(main < slot && slot < body);
        runtime.dispose();
    }

    #[test]
    fn header_and_footer_render_without_children() {
        let runtime = create_runtime();
        let html = view! {
            <PageHeader />
            <PageFooter />
        }
        .into_view()
        .render_to_string()
        .to_string();

        assert!(html.contains("<header"));
        assert!(html.contains("data-ui-position=\"fixed\""));
        assert!(html.contains("<footer"));
        runtime.dispose();
    }
}
