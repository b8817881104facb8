pub mod pages;

use dioxus::prelude::*;
use pages::{AppLayout, Home, LogoPreview};

pub const MAIN_CSS: Asset = asset!("/assets/main.css");
pub const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(AppLayout)]
    #[route("/")]
    Home {},
    #[route("/logo?:variant&:link&:class")]
    LogoPreview {
        variant: Option<String>,
        link: Option<String>,
        class: Option<String>,
    },
}

#[component]
pub fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Link { rel: "stylesheet", href: TAILWIND_CSS }
        div { class: "min-h-screen", Router::<Route> {} }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn home_route_is_the_logo_link_target() {
        assert_eq!(Route::Home {}.to_string(), x402_ui::HOME_ROUTE);
    }

    #[test]
    fn stylesheet_defines_logo_sizes() {
        let css = include_str!("../assets/tailwind.css");
        for selector in [".h-6 {", ".w-auto {", ".size-5 {", ".size-16 {"] {
            assert!(css.contains(selector), "missing {selector}");
        }
    }
}
