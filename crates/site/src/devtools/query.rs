use leptos::*;
use query_cache::{QueryKey, QueryState, QueryStatus};
use system_ui::{
    Badge, DataTable, EmptyState, InspectorGrid, InspectorRow, LayoutGap, Stack, Text, TextRole,
    TextTone,
};

use crate::providers::{use_query_client_context, QueryClientContext};

const COLUMNS: &[&str] = &["Key", "Status", "Fetch", "Fetches", "Stale"];

fn status_tone(status: QueryStatus) -> TextTone {
    match status {
        QueryStatus::Pending => TextTone::Secondary,
        QueryStatus::Success => TextTone::Success,
        QueryStatus::Error => TextTone::Danger,
    }
}

fn entry_row((key, state): (QueryKey, QueryState)) -> impl IntoView {
    let label = key.to_string();
    let stale = if state.invalidated { "invalidated" } else { "" };
    view! {
        <tr data-query-key=label.clone()>
            <td><Text role=TextRole::Code>{label}</Text></td>
            <td><Badge tone=status_tone(state.status)>{state.status.token()}</Badge></td>
            <td>{state.fetch_status.token()}</td>
            <td>{state.fetch_count}</td>
            <td>{stale}</td>
        </tr>
    }
}

#[component]
/// Lists every entry in the shared query cache, re-rendering on cache events.
pub fn QueryInspector() -> impl IntoView {
    let QueryClientContext { client, revision } = use_query_client_context();
    let client_id = client.id();
    let stale_time_ms = client.config().stale_time_ms;

    let entries = create_memo(move |_| {
        revision.get();
        client.snapshot()
    });

    view! {
        <Stack gap=LayoutGap::Sm layout_class="devtools-query">
            <InspectorGrid>
                <InspectorRow label="Client">{format!("#{client_id}")}</InspectorRow>
                <InspectorRow label="Queries">{move || entries.with(Vec::len)}</InspectorRow>
                <InspectorRow label="Stale time">{format!("{stale_time_ms} ms")}</InspectorRow>
            </InspectorGrid>
            <Show
                when=move || entries.with(|entries| !entries.is_empty())
                fallback=|| view! { <EmptyState>"No cached queries"</EmptyState> }
            >
                <DataTable columns=COLUMNS aria_label="Cached queries">
                    {move || entries.get().into_iter().map(entry_row).collect_view()}
                </DataTable>
            </Show>
        </Stack>
    }
}

#[cfg(test)]
mod tests {
    use query_cache::QueryClient;

    use super::*;
    use crate::{providers::QueryProvider, test_support::render_html};

    #[test]
    fn empty_cache_shows_empty_state() {
        let html = render_html(|| {
            view! {
                <QueryProvider client=QueryClient::new()>
                    <QueryInspector />
                </QueryProvider>
            }
        });

        assert!(html.contains("No cached queries"));
        assert!(!html.contains("<tbody"));
    }

    #[test]
    fn cached_entries_are_listed_with_status() {
        let client = QueryClient::new();
        client
            .set_query_data(&QueryKey::from(["sessions", "42"]), &7)
            .expect("seed");
        client
            .set_query_data(&QueryKey::from(["stats"]), &1)
            .expect("seed");
        client.invalidate_queries(&QueryKey::from(["stats"]));

        let html = render_html(move || {
            view! {
                <QueryProvider client=client>
                    <QueryInspector />
                </QueryProvider>
            }
        });

        assert_eq!(html.matches("data-query-key=").count(), 2);
        assert!(html.contains("sessions"));
        assert!(html.contains("success"));
        assert!(html.contains("invalidated"));
        assert!(!html.contains("No cached queries"));
    }
}
