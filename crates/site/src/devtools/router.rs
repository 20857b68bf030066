use leptos::*;
use system_ui::{
    InspectorGrid, InspectorRow, LayoutGap, Stack, Text, TextRole, TextTone, Tree, TreeItem,
};

use crate::routes::{RouteId, ROUTE_TREE};

fn describe_match(chain: Option<&[RouteId]>) -> String {
    match chain {
        Some(chain) => chain
            .iter()
            .map(|id| id.name())
            .collect::<Vec<_>>()
            .join(" > "),
        None => "no match".to_string(),
    }
}

#[component]
/// Shows the current location, the matched route chain, and the declared route tree.
pub fn RouteInspector(#[prop(into)] pathname: Signal<String>) -> impl IntoView {
    let matched = create_memo(move |_| pathname.with(|path| ROUTE_TREE.match_path(path)));

    view! {
        <Stack gap=LayoutGap::Sm layout_class="devtools-router">
            <InspectorGrid>
                <InspectorRow label="Location">
                    <Text role=TextRole::Code>{move || pathname.get()}</Text>
                </InspectorRow>
                <InspectorRow label="Match">
                    {move || matched.with(|chain| describe_match(chain.as_deref()))}
                </InspectorRow>
            </InspectorGrid>
            <Tree layout_class="devtools-route-tree">
                {ROUTE_TREE
                    .nodes()
                    .iter()
                    .map(|node| {
                        let id = node.id;
                        let selected = Signal::derive(move || {
                            matched.with(|chain| chain.as_ref().is_some_and(|chain| chain.contains(&id)))
                        });
                        view! {
                            <TreeItem depth=ROUTE_TREE.depth(id) selected=selected>
                                <span data-route-id=id.name()>
                                    {id.name()}
                                </span>
                                " "
                                <Text role=TextRole::Caption tone=TextTone::Secondary>
                                    {ROUTE_TREE.full_path(id)}
                                </Text>
                            </TreeItem>
                        }
                    })
                    .collect_view()}
            </Tree>
        </Stack>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{render_html, text_content};

    #[test]
    fn describes_matched_chain() {
        assert_eq!(
            describe_match(Some(&[RouteId::Root, RouteId::MainLayout, RouteId::Home][..])),
            "__root__ > /_main > /_main/"
        );
        assert_eq!(describe_match(None), "no match");
    }

    #[test]
    fn index_location_selects_every_node() {
        let html = render_html(|| {
            view! { <RouteInspector pathname=Signal::derive(|| "/".to_string()) /> }
        });

        assert_eq!(html.matches("data-route-id=").count(), 3);
        assert_eq!(html.matches("data-ui-selected=\"true\"").count(), 3);
        assert!(text_content(&html).contains("__root__ > /_main > /_main/"));
    }

    #[test]
    fn unknown_location_selects_nothing() {
        let html = render_html(|| {
            view! { <RouteInspector pathname=Signal::derive(|| "/missing".to_string()) /> }
        });

        assert!(html.contains("no match"));
        assert_eq!(html.matches("data-ui-selected=\"true\"").count(), 0);
    }
}
