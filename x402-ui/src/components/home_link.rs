//! Navigation link to the application's root route

use dioxus::prelude::*;

/// Path of the application's home page.
pub const HOME_ROUTE: &str = "/";

/// Router link targeting [`HOME_ROUTE`]. Must be rendered beneath a `Router`.
#[component]
pub fn HomeLink(children: Element) -> Element {
    rsx! {
        Link { to: HOME_ROUTE, {children} }
    }
}
