use crate::Route;
use dioxus::prelude::*;
use x402_ui::{Logo, LogoVariant, LOGO_ALT};

#[component]
pub fn Home() -> Element {
    rsx! {
        section { class: "flex flex-col items-center gap-4 py-16 text-center",
            Logo {
                variant: LogoVariant::Icon,
                class: Some("size-16".to_string()),
                as_link: false,
            }
            h1 { class: "text-2xl font-bold", "{LOGO_ALT}" }
            Link {
                to: Route::LogoPreview {
                    variant: None,
                    link: None,
                    class: None,
                },
                class: "text-sm text-indigo-400 hover:text-indigo-300 transition-colors",
                "Browse logo variants"
            }
        }
    }
}
