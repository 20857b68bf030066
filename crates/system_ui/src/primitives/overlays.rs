use super::*;

#[component]
/// Fixed, non-interactive dock pinned to a viewport corner.
///
/// The dock is `inert`: it renders diagnostic content without taking focus or pointer input.
pub fn OverlayDock(
    #[prop(default = OverlayAnchor::BottomRight)] anchor: OverlayAnchor,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_label: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <aside
            class=merge_layout_class("ui-overlay-dock", layout_class)
            data-ui-primitive="true"
            data-ui-kind="overlay-dock"
            data-ui-anchor=anchor.token()
            data-ui-elevation=Elevation::Overlay.token()
            aria-label=aria_label
            inert=true
        >
            {children()}
        </aside>
    }
}
