//! Optional wrapper composition

use dioxus::prelude::*;

/// Wrap `content` with `wrap` when `condition` holds, otherwise return it
/// untouched.
pub fn wrap_if(
    condition: bool,
    content: Element,
    wrap: impl FnOnce(Element) -> Element,
) -> Element {
    if condition {
        wrap(content)
    } else {
        content
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn framed(content: Element) -> Element {
        rsx! {
            div { class: "frame", {content} }
        }
    }

    #[test]
    fn wraps_when_condition_holds() {
        let html = dioxus_ssr::render_element(wrap_if(true, rsx! { span { "mark" } }, framed));
        assert_eq!(html, r#"<div class="frame"><span>mark</span></div>"#);
    }

    #[test]
    fn returns_content_unchanged_otherwise() {
        let html = dioxus_ssr::render_element(wrap_if(false, rsx! { span { "mark" } }, framed));
        assert!(html.contains("<span>mark</span>"), "{html}");
        assert!(!html.contains("frame"), "{html}");
    }

    #[test]
    fn wrapper_is_not_called_when_skipped() {
        let mut called = false;
        let _ = wrap_if(false, rsx! { span {} }, |content| {
            called = true;
            content
        });
        assert!(!called);
    }
}
