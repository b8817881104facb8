use crate::Route;
use dioxus::prelude::*;
use x402_ui::{cn, Logo};

#[component]
pub fn AppLayout() -> Element {
    let current_route = use_route::<Route>();

    rsx! {
        div { class: "min-h-screen bg-gray-900 text-white",
            header { class: "flex items-center justify-between h-14 px-6 border-b border-gray-800",
                Logo {}
                nav { class: "flex items-center gap-4 text-sm",
                    NavLink {
                        to: Route::Home {},
                        label: "Home",
                        is_active: matches!(current_route, Route::Home {}),
                    }
                    NavLink {
                        to: Route::LogoPreview {
                            variant: None,
                            link: None,
                            class: None,
                        },
                        label: "Logo",
                        is_active: matches!(current_route, Route::LogoPreview { .. }),
                    }
                }
            }
            main { class: "px-6 py-8", Outlet::<Route> {} }
        }
    }
}

#[component]
fn NavLink(to: Route, label: &'static str, is_active: bool) -> Element {
    let class = cn([
        Some("text-gray-400 hover:text-white transition-colors"),
        is_active.then_some("text-white"),
    ]);

    rsx! {
        Link { to, class, "{label}" }
    }
}
