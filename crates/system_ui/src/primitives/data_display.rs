use super::*;

#[component]
/// Raised section holding one inspector body.
pub fn Panel(
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <section
            class="ui-panel"
            data-ui-primitive="true"
            data-ui-kind="panel"
            data-ui-slot=ui_slot
            data-ui-variant=SurfaceVariant::Standard.token()
            data-ui-elevation=Elevation::Raised.token()
            aria-label=aria_label
        >
            {children()}
        </section>
    }
}

#[component]
/// Inline text run.
pub fn Text(
    #[prop(default = TextRole::Body)] role: TextRole,
    #[prop(default = TextTone::Primary)] tone: TextTone,
    children: Children,
) -> impl IntoView {
    view! {
        <span
            class="ui-text"
            data-ui-primitive="true"
            data-ui-kind="text"
            data-ui-variant=role.token()
            data-ui-tone=tone.token()
        >
            {children()}
        </span>
    }
}

#[component]
/// Section heading.
pub fn Heading(#[prop(default = TextRole::Title)] role: TextRole, children: Children) -> impl IntoView {
    view! {
        <div class="ui-heading" data-ui-primitive="true" data-ui-kind="heading" data-ui-variant=role.token()>
            {children()}
        </div>
    }
}

#[component]
/// Status badge, e.g. a query's `success` or `error` state.
pub fn Badge(#[prop(default = TextTone::Secondary)] tone: TextTone, children: Children) -> impl IntoView {
    view! {
        <span class="ui-badge" data-ui-primitive="true" data-ui-kind="badge" data-ui-tone=tone.token()>
            {children()}
        </span>
    }
}

#[component]
/// Placeholder shown when an inspector has nothing to list.
pub fn EmptyState(children: Children) -> impl IntoView {
    view! {
        <div class="ui-empty-state" data-ui-primitive="true" data-ui-kind="empty-state" role="status">
            {children()}
        </div>
    }
}

#[component]
/// Table with a fixed header row; `children` are the body rows.
pub fn DataTable(
    columns: &'static [&'static str],
    #[prop(optional, into)] aria_label: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <table class="ui-data-table" data-ui-primitive="true" data-ui-kind="data-table" aria-label=aria_label>
            <thead>
                <tr>
                    {columns.iter().map(|column| view! { <th scope="col">{*column}</th> }).collect_view()}
                </tr>
            </thead>
            <tbody>{children()}</tbody>
        </table>
    }
}

#[component]
/// Nested list of items, each indented by its depth.
pub fn Tree(
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <ul
            class=merge_layout_class("ui-tree", layout_class)
            data-ui-primitive="true"
            data-ui-kind="tree"
            role="tree"
        >
            {children()}
        </ul>
    }
}

#[component]
/// One entry of a [`Tree`]. `depth` is `0` for top-level items.
pub fn TreeItem(
    #[prop(optional)] depth: usize,
    #[prop(optional, into)] selected: MaybeSignal<bool>,
    children: Children,
) -> impl IntoView {
    view! {
        <li
            class="ui-tree-item"
            data-ui-primitive="true"
            data-ui-kind="tree-item"
            data-ui-depth=depth.to_string()
            data-ui-selected=move || bool_token(selected.get())
            role="treeitem"
            style=format!("--ui-tree-depth: {depth}")
        >
            {children()}
        </li>
    }
}

#[component]
/// Label/value grid for inspector summaries.
pub fn InspectorGrid(children: Children) -> impl IntoView {
    view! {
        <dl class="ui-inspector-grid" data-ui-primitive="true" data-ui-kind="inspector-grid">
            {children()}
        </dl>
    }
}

#[component]
/// One label/value row inside an [`InspectorGrid`].
pub fn InspectorRow(#[prop(into)] label: String, children: Children) -> impl IntoView {
    view! {
        <dt data-ui-slot="label">{label}</dt>
        <dd data-ui-slot="value">{children()}</dd>
    }
}
