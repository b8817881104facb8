//! Brand logo component
//!
//! Renders the CompuMatrice mark either as the full lockup or as a compact
//! icon, optionally linked back to the home page.

use super::helpers::wrap_if;
use super::home_link::HomeLink;
use crate::class_names::cn;
use dioxus::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::warn;

/// Bundled logo artwork.
pub const LOGO_IMAGE: Asset = asset!("/assets/cm-logo.png");

/// Alt text for the logo image.
pub const LOGO_ALT: &str = "CompuMatrice AI to AI";

/// Logo presentation size
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogoVariant {
    /// Horizontal logo-plus-wordmark lockup
    #[default]
    Full,
    /// Compact icon-only mark
    Icon,
    /// Currently an alias of `Icon`
    Responsive,
}

impl LogoVariant {
    pub const ALL: [LogoVariant; 3] = [
        LogoVariant::Full,
        LogoVariant::Icon,
        LogoVariant::Responsive,
    ];

    /// Tailwind sizing classes for this variant.
    pub fn size_class(self) -> &'static str {
        match self {
            LogoVariant::Full => "h-6 w-auto",
            // Responsive has no breakpoint behavior yet and sizes like Icon
            LogoVariant::Icon | LogoVariant::Responsive => "size-5",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            LogoVariant::Full => "full",
            LogoVariant::Icon => "icon",
            LogoVariant::Responsive => "responsive",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            LogoVariant::Full => "Full lockup",
            LogoVariant::Icon => "Icon",
            LogoVariant::Responsive => "Responsive",
        }
    }

    /// Parse an untyped variant name. Anything unrecognised renders as the
    /// compact icon.
    pub fn from_name(name: &str) -> Self {
        name.parse().unwrap_or_else(|err: UnknownLogoVariant| {
            warn!("{err}, rendering compact icon");
            LogoVariant::Icon
        })
    }
}

impl fmt::Display for LogoVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown logo variant {0:?}")]
pub struct UnknownLogoVariant(pub String);

impl FromStr for LogoVariant {
    type Err = UnknownLogoVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        LogoVariant::ALL
            .into_iter()
            .find(|variant| variant.name() == normalized)
            .ok_or_else(|| UnknownLogoVariant(s.to_string()))
    }
}

/// Final class list for the logo image: the variant's size class followed
/// by the caller's override.
pub fn logo_class(variant: LogoVariant, class: Option<&str>) -> String {
    cn([Some(variant.size_class()), class])
}

/// Brand logo image, linked to the home page unless `as_link` is false.
#[component]
pub fn Logo(
    #[props(default)] variant: LogoVariant,
    /// Extra classes, merged after the size class so they win conflicts
    #[props(default)]
    class: Option<String>,
    #[props(default = true)] as_link: bool,
) -> Element {
    let class = logo_class(variant, class.as_deref());

    let image = rsx! {
        img { src: LOGO_IMAGE, alt: LOGO_ALT, class: "{class}" }
    };

    wrap_if(as_link, image, |content| {
        rsx! {
            HomeLink { {content} }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use dioxus_history::{History, MemoryHistory};
    use std::rc::Rc;

    /// Component tree rendered on the root route of [`TestRoute`].
    #[derive(Clone, Copy)]
    struct Fixture(fn() -> Element);

    #[derive(Debug, Clone, Routable, PartialEq)]
    #[rustfmt::skip]
    enum TestRoute {
        #[route("/")]
        Home {},
    }

    #[component]
    fn Home() -> Element {
        let Fixture(fixture) = use_context::<Fixture>();
        fixture()
    }

    fn root(fixture: Fixture) -> Element {
        use_hook(|| {
            provide_context(fixture);
            provide_context(Rc::new(MemoryHistory::default()) as Rc<dyn History>)
        });
        rsx! {
            Router::<TestRoute> {}
        }
    }

    fn render(fixture: fn() -> Element) -> String {
        let mut dom = VirtualDom::new_with_props(root, Fixture(fixture));
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    fn is_linked(html: &str) -> bool {
        html.contains("<a") && html.contains(r#"href="/""#)
    }

    #[test]
    fn default_logo_is_linked_full_lockup() {
        let html = render(|| rsx! { Logo {} });
        assert!(is_linked(&html), "expected link wrapper: {html}");
        assert!(html.contains(r#"class="h-6 w-auto""#), "{html}");
        assert!(html.contains(r#"alt="CompuMatrice AI to AI""#), "{html}");
    }

    #[test]
    fn bare_icon_has_no_link() {
        let html = render(|| {
            rsx! {
                Logo { variant: LogoVariant::Icon, as_link: false }
            }
        });
        assert!(!html.contains("<a"), "unexpected link wrapper: {html}");
        assert!(html.contains(r#"class="size-5""#), "{html}");
    }

    #[test]
    fn class_override_is_appended() {
        let html = render(|| {
            rsx! {
                Logo { class: Some("mt-4".to_string()) }
            }
        });
        assert!(is_linked(&html), "{html}");
        assert!(html.contains(r#"class="h-6 w-auto mt-4""#), "{html}");
    }

    #[test]
    fn class_override_wins_size_conflict() {
        let html = render(|| {
            rsx! {
                Logo { variant: LogoVariant::Icon, class: Some("size-16".to_string()), as_link: false }
            }
        });
        assert!(html.contains(r#"class="size-16""#), "{html}");
    }

    #[test]
    fn explicit_link_matches_default() {
        let explicit = render(|| rsx! { Logo { as_link: true } });
        let default = render(|| rsx! { Logo {} });
        assert_eq!(explicit, default);
    }

    #[test]
    fn responsive_renders_like_icon() {
        let responsive = render(|| {
            rsx! {
                Logo { variant: LogoVariant::Responsive }
            }
        });
        let icon = render(|| {
            rsx! {
                Logo { variant: LogoVariant::Icon }
            }
        });
        assert_eq!(responsive, icon);
        assert!(is_linked(&icon));
    }

    #[test]
    fn size_class_per_variant() {
        assert_eq!(LogoVariant::Full.size_class(), "h-6 w-auto");
        assert_eq!(LogoVariant::Icon.size_class(), "size-5");
        assert_eq!(LogoVariant::Responsive.size_class(), "size-5");
        assert_eq!(LogoVariant::default(), LogoVariant::Full);
    }

    #[test]
    fn logo_class_merges_override() {
        assert_eq!(logo_class(LogoVariant::Full, None), "h-6 w-auto");
        assert_eq!(
            logo_class(LogoVariant::Full, Some("mt-4")),
            "h-6 w-auto mt-4"
        );
        assert_eq!(logo_class(LogoVariant::Full, Some("h-10")), "w-auto h-10");
        assert_eq!(logo_class(LogoVariant::Icon, Some("")), "size-5");
    }

    #[test]
    fn strict_parse_rejects_unknown_names() {
        assert_eq!("full".parse(), Ok(LogoVariant::Full));
        assert_eq!(" Icon ".parse(), Ok(LogoVariant::Icon));
        assert_eq!("RESPONSIVE".parse(), Ok(LogoVariant::Responsive));
        assert_eq!(
            "wordmark".parse::<LogoVariant>(),
            Err(UnknownLogoVariant("wordmark".to_string()))
        );
    }

    #[test]
    fn lenient_parse_falls_back_to_icon() {
        assert_eq!(LogoVariant::from_name("full"), LogoVariant::Full);
        assert_eq!(LogoVariant::from_name("wordmark"), LogoVariant::Icon);
        assert_eq!(LogoVariant::from_name(""), LogoVariant::Icon);
    }

    #[test]
    fn serde_uses_lowercase_names() {
        let json = serde_json::to_string(&LogoVariant::Responsive).unwrap();
        assert_eq!(json, r#""responsive""#);
        let variant: LogoVariant = serde_json::from_str(r#""icon""#).unwrap();
        assert_eq!(variant, LogoVariant::Icon);
        assert!(serde_json::from_str::<LogoVariant>(r#""Full""#).is_err());
    }

    #[test]
    fn display_round_trips_through_parse() {
        for variant in LogoVariant::ALL {
            assert_eq!(variant.to_string().parse(), Ok(variant));
        }
    }
}
