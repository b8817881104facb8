//! Logo preview page
//!
//! Renders one configurable logo specimen driven by the query string, plus
//! every variant side by side.

use crate::Route;
use dioxus::prelude::*;
use tracing::debug;
use x402_ui::{cn, logo_class, Logo, LogoVariant};

/// Logo props resolved from the preview page's query parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct PreviewSpec {
    pub variant: LogoVariant,
    pub as_link: bool,
    pub class: Option<String>,
}

impl Default for PreviewSpec {
    fn default() -> Self {
        Self {
            variant: LogoVariant::default(),
            as_link: true,
            class: None,
        }
    }
}

impl PreviewSpec {
    pub fn from_query(variant: Option<&str>, link: Option<&str>, class: Option<&str>) -> Self {
        let spec = Self {
            variant: variant.map(LogoVariant::from_name).unwrap_or_default(),
            as_link: link.map(parse_flag).unwrap_or(true),
            class: class
                .map(str::trim)
                .filter(|c| !c.is_empty())
                .map(str::to_string),
        };
        debug!(?spec, "Resolved logo preview");
        spec
    }

    pub fn with_variant(&self, variant: LogoVariant) -> Self {
        Self {
            variant,
            ..self.clone()
        }
    }

    pub fn with_link(&self, as_link: bool) -> Self {
        Self {
            as_link,
            ..self.clone()
        }
    }

    /// Route that reproduces this spec. Defaults are left out of the query.
    pub fn to_route(&self) -> Route {
        Route::LogoPreview {
            variant: (self.variant != LogoVariant::default()).then(|| self.variant.name().to_string()),
            link: (!self.as_link).then(|| "0".to_string()),
            class: self.class.clone(),
        }
    }
}

/// Query flags are on unless explicitly switched off.
fn parse_flag(value: &str) -> bool {
    !matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "0" | "false" | "no" | "off"
    )
}

#[component]
pub fn LogoPreview(
    variant: Option<String>,
    link: Option<String>,
    class: Option<String>,
) -> Element {
    let spec = PreviewSpec::from_query(variant.as_deref(), link.as_deref(), class.as_deref());
    let resolved_class = logo_class(spec.variant, spec.class.as_deref());
    let toggle_label = if spec.as_link {
        "Show bare image"
    } else {
        "Wrap in home link"
    };

    rsx! {
        div { class: "space-y-10",
            section { class: "space-y-4",
                h2 { class: "text-lg font-semibold", "Specimen" }
                div { class: "inline-flex items-center p-6 bg-gray-800 rounded-lg",
                    Logo {
                        variant: spec.variant,
                        class: spec.class.clone(),
                        as_link: spec.as_link,
                    }
                }
                dl { class: "grid grid-cols-[8rem_1fr] gap-y-1 text-sm",
                    dt { class: "text-gray-400", "variant" }
                    dd { class: "font-mono", "{spec.variant}" }
                    dt { class: "text-gray-400", "as_link" }
                    dd { class: "font-mono", "{spec.as_link}" }
                    dt { class: "text-gray-400", "class" }
                    dd { class: "font-mono", "{resolved_class}" }
                }
                div { class: "flex flex-wrap gap-2",
                    for option in LogoVariant::ALL {
                        Link {
                            key: "{option}",
                            to: spec.with_variant(option).to_route(),
                            class: preset_class(option == spec.variant),
                            "{option.label()}"
                        }
                    }
                    Link {
                        to: spec.with_link(!spec.as_link).to_route(),
                        class: preset_class(false),
                        "{toggle_label}"
                    }
                }
            }

            section { class: "space-y-4",
                h2 { class: "text-lg font-semibold", "All variants" }
                div { class: "grid grid-cols-3 gap-4",
                    for option in LogoVariant::ALL {
                        div {
                            key: "{option}",
                            class: "p-4 bg-gray-800 rounded-lg space-y-3",
                            Logo { variant: option, as_link: false }
                            div { class: "text-sm", "{option.label()}" }
                            code { class: "text-xs text-gray-400", "{option.size_class()}" }
                        }
                    }
                }
            }
        }
    }
}

fn preset_class(is_selected: bool) -> String {
    cn([
        Some("px-3 py-1.5 text-sm rounded-lg bg-gray-800 hover:bg-gray-700 transition-colors"),
        is_selected.then_some("bg-indigo-600 hover:bg-indigo-500"),
    ])
}
