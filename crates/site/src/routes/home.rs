use leptos::*;

#[component]
/// Index page.
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home-page">
            <h1>"Ember"</h1>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{render_html, text_content};

    #[test]
    fn renders_only_the_ember_heading() {
        let html = render_html(|| view! { <HomePage /> });

        assert_eq!(html.matches("<h1").count(), 1);
        assert_eq!(text_content(&html), "Ember");
    }
}
