//! Render helpers shared by component tests.

use leptos::*;

/// Renders `view` to HTML inside a fresh reactive runtime.
pub(crate) fn render_html<F, N>(view: F) -> String
where
    F: FnOnce() -> N,
    N: IntoView,
{
    let runtime = create_runtime();
    let html = view().into_view().render_to_string().to_string();
    runtime.dispose();
    html
}

/// Concatenated text of `html` with tags removed and character references decoded.
pub(crate) fn text_content(html: &str) -> String {
    let mut stripped = String::new();
    let mut in_tag = false;
    for ch in html.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => stripped.push(ch),
            _ => {}
        }
    }
    decode_entities(stripped.trim())
}

fn decode_entities(text: &str) -> String {
    let mut decoded = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(start) = rest.find('&') {
        decoded.push_str(&rest[..start]);
        rest = &rest[start..];
        let resolved = rest
            .find(';')
            .and_then(|end| decode_entity(&rest[1..end]).map(|ch| (ch, end)));
        match resolved {
            Some((ch, end)) => {
                decoded.push(ch);
                rest = &rest[end + 1..];
            }
            None => {
                decoded.push('&');
                rest = &rest[1..];
            }
        }
    }
    decoded.push_str(rest);
    decoded
}

fn decode_entity(name: &str) -> Option<char> {
    match name {
        "amp" => Some('&'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" => Some('"'),
        "apos" => Some('\''),
        "nbsp" => Some('\u{a0}'),
        _ => {
            let code = name.strip_prefix('#')?;
            let value = match code.strip_prefix(['x', 'X']) {
                Some(hex) => u32::from_str_radix(hex, 16).ok()?,
                None => code.parse().ok()?,
            };
            char::from_u32(value)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_content_decodes_escaped_text() {
        assert_eq!(
            text_content("<p>__root__ &gt; &#x2F;_main &amp; &#39;x&#39;</p>"),
            "__root__ > /_main & 'x'"
        );
    }

    #[test]
    fn unknown_references_are_left_alone() {
        assert_eq!(text_content("<b>a &bogus; b & c</b>"), "a &bogus; b & c");
    }
}
