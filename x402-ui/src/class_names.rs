//! Tailwind-aware class name merging
//!
//! `cn` joins class strings in order and drops every class whose utility
//! group is overridden by a later class. Components pass their base classes
//! first and the caller's `class` prop last, so `cn([Some("size-5"), Some("size-16")])`
//! yields `"size-16"`.

use std::collections::HashSet;

/// Classes that are a whole utility on their own.
const EXACT_GROUPS: &[(&str, &str)] = &[
    ("block", "display"),
    ("inline-block", "display"),
    ("inline", "display"),
    ("flex", "display"),
    ("inline-flex", "display"),
    ("grid", "display"),
    ("inline-grid", "display"),
    ("table", "display"),
    ("contents", "display"),
    ("hidden", "display"),
    ("static", "position"),
    ("fixed", "position"),
    ("absolute", "position"),
    ("relative", "position"),
    ("sticky", "position"),
    ("visible", "visibility"),
    ("invisible", "visibility"),
    ("collapse", "visibility"),
    ("flex-row", "flex-direction"),
    ("flex-row-reverse", "flex-direction"),
    ("flex-col", "flex-direction"),
    ("flex-col-reverse", "flex-direction"),
    ("flex-wrap", "flex-wrap"),
    ("flex-wrap-reverse", "flex-wrap"),
    ("flex-nowrap", "flex-wrap"),
    ("italic", "font-style"),
    ("not-italic", "font-style"),
    ("underline", "text-decoration"),
    ("overline", "text-decoration"),
    ("line-through", "text-decoration"),
    ("no-underline", "text-decoration"),
    ("uppercase", "text-transform"),
    ("lowercase", "text-transform"),
    ("capitalize", "text-transform"),
    ("normal-case", "text-transform"),
    ("truncate", "text-overflow"),
];

/// Utilities of the form `<prefix>` or `<prefix>-<value>`. The longest
/// matching prefix wins, so `min-w-0` is `min-w` and not `m`.
const PREFIX_GROUPS: &[&str] = &[
    "size", "w", "h", "min-w", "max-w", "min-h", "max-h", "m", "mx", "my", "mt", "mr", "mb", "ml",
    "ms", "me", "p", "px", "py", "pt", "pr", "pb", "pl", "ps", "pe", "gap", "gap-x", "gap-y",
    "space-x", "space-y", "inset", "inset-x", "inset-y", "top", "right", "bottom", "left", "z",
    "opacity", "cursor", "overflow", "overflow-x", "overflow-y", "flex", "basis", "grow",
    "shrink", "order", "items", "justify", "self", "rounded", "rounded-t", "rounded-r",
    "rounded-b", "rounded-l", "rounded-tl", "rounded-tr", "rounded-br", "rounded-bl",
    "transition", "duration", "ease", "delay", "leading", "tracking", "aspect", "line-clamp",
];

const FONT_SIZES: &[&str] = &[
    "xs", "sm", "base", "lg", "xl", "2xl", "3xl", "4xl", "5xl", "6xl", "7xl", "8xl", "9xl",
];

const FONT_WEIGHTS: &[&str] = &[
    "thin",
    "extralight",
    "light",
    "normal",
    "medium",
    "semibold",
    "bold",
    "extrabold",
    "black",
];

const SHADOW_SIZES: &[&str] = &["2xs", "xs", "sm", "md", "lg", "xl", "2xl", "inner", "none"];

const BORDER_STYLES: &[&str] = &["solid", "dashed", "dotted", "double", "hidden", "none"];

/// Merge class strings, later classes overriding earlier ones that set the
/// same utility. `None` and blank entries are skipped.
pub fn cn<'a, I>(classes: I) -> String
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    let tokens: Vec<&str> = classes
        .into_iter()
        .flatten()
        .flat_map(str::split_whitespace)
        .collect();
    merge_tokens(&tokens)
}

fn merge_tokens(tokens: &[&str]) -> String {
    let mut claimed: HashSet<String> = HashSet::new();
    let mut seen: HashSet<&str> = HashSet::new();
    let mut kept = Vec::with_capacity(tokens.len());

    for &token in tokens.iter().rev() {
        if !seen.insert(token) {
            continue;
        }

        let parsed = ParsedClass::parse(token);
        if let Some(group) = classify(parsed.base) {
            let key = parsed.conflict_key(group);
            if claimed.contains(&key) {
                continue;
            }
            claimed.insert(key);
            for sub in subsumed_groups(group) {
                claimed.insert(parsed.conflict_key(sub));
            }
        }

        kept.push(token);
    }

    kept.reverse();
    kept.join(" ")
}

/// A class split into its variant modifiers, important marker and base utility.
struct ParsedClass<'a> {
    modifiers: Vec<&'a str>,
    important: bool,
    base: &'a str,
}

impl<'a> ParsedClass<'a> {
    fn parse(class: &'a str) -> Self {
        let mut modifiers = Vec::new();
        let mut depth = 0usize;
        let mut start = 0;
        for (i, ch) in class.char_indices() {
            match ch {
                '[' => depth += 1,
                ']' => depth = depth.saturating_sub(1),
                ':' if depth == 0 => {
                    modifiers.push(&class[start..i]);
                    start = i + 1;
                }
                _ => {}
            }
        }
        // Named modifiers commute; arbitrary variants like `[&>*]` pin their position
        for run in modifiers.split_mut(|m: &&str| m.starts_with('[')) {
            run.sort_unstable();
        }

        let mut base = &class[start..];
        let mut important = false;
        if let Some(rest) = base.strip_prefix('!') {
            base = rest;
            important = true;
        } else if let Some(rest) = base.strip_suffix('!') {
            base = rest;
            important = true;
        }

        Self {
            modifiers,
            important,
            base,
        }
    }

    fn conflict_key(&self, group: &str) -> String {
        let mut key = String::new();
        for modifier in &self.modifiers {
            key.push_str(modifier);
            key.push(':');
        }
        if self.important {
            key.push('!');
        }
        key.push_str(group);
        key
    }
}

/// Look up the utility group a single class (without modifiers) belongs to.
/// Unknown classes return `None` and never conflict with anything.
pub fn classify(class: &str) -> Option<&'static str> {
    let class = class.strip_prefix('-').unwrap_or(class);
    if class.is_empty() {
        return None;
    }

    if let Some((_, group)) = EXACT_GROUPS.iter().find(|(name, _)| *name == class) {
        return Some(*group);
    }

    if let Some(value) = class.strip_prefix("text-") {
        return Some(text_group(value));
    }
    if let Some(value) = class.strip_prefix("font-") {
        return Some(if is_font_weight(value) {
            "font-weight"
        } else {
            "font-family"
        });
    }
    if let Some(value) = class.strip_prefix("bg-") {
        return Some(bg_group(value));
    }
    if class == "border" || class.starts_with("border-") {
        return Some(border_group(class));
    }
    if class == "shadow" || class.starts_with("shadow-") {
        return Some(shadow_group(class));
    }
    if let Some(value) = class.strip_prefix("object-") {
        return Some(match value {
            "contain" | "cover" | "fill" | "none" | "scale-down" => "object-fit",
            _ => "object-position",
        });
    }

    PREFIX_GROUPS
        .iter()
        .filter(|prefix| {
            class == **prefix
                || class
                    .strip_prefix(**prefix)
                    .is_some_and(|rest| rest.starts_with('-'))
        })
        .max_by_key(|prefix| prefix.len())
        .copied()
}

fn text_group(value: &str) -> &'static str {
    // `text-sm/6` carries a line height after the slash
    let size = value.split_once('/').map_or(value, |(size, _)| size);
    if FONT_SIZES.contains(&size) || is_arbitrary_length(size) {
        return "font-size";
    }
    match value {
        "left" | "center" | "right" | "justify" | "start" | "end" => "text-align",
        "wrap" | "nowrap" | "balance" | "pretty" => "text-wrap",
        "ellipsis" | "clip" => "text-overflow",
        _ => "text-color",
    }
}

fn bg_group(value: &str) -> &'static str {
    match value {
        "fixed" | "local" | "scroll" => "bg-attachment",
        "auto" | "cover" | "contain" => "bg-size",
        "repeat" | "no-repeat" | "repeat-x" | "repeat-y" | "repeat-round" | "repeat-space" => {
            "bg-repeat"
        }
        "center" | "top" | "bottom" | "left" | "right" | "left-top" | "left-bottom"
        | "right-top" | "right-bottom" => "bg-position",
        "none" => "bg-image",
        v if v.starts_with("gradient-") => "bg-image",
        _ => "bg-color",
    }
}

fn border_group(class: &str) -> &'static str {
    let rest = class.strip_prefix("border").unwrap_or(class);
    let rest = rest.strip_prefix('-').unwrap_or(rest);
    if rest.is_empty() || is_width_value(rest) {
        return "border-w";
    }
    if BORDER_STYLES.contains(&rest) {
        return "border-style";
    }

    let (side, value) = rest.split_once('-').unwrap_or((rest, ""));
    let side_groups = match side {
        "x" => Some(("border-w-x", "border-color-x")),
        "y" => Some(("border-w-y", "border-color-y")),
        "t" => Some(("border-w-t", "border-color-t")),
        "r" => Some(("border-w-r", "border-color-r")),
        "b" => Some(("border-w-b", "border-color-b")),
        "l" => Some(("border-w-l", "border-color-l")),
        _ => None,
    };
    match side_groups {
        Some((width, _)) if value.is_empty() || is_width_value(value) => width,
        Some((_, color)) => color,
        None => "border-color",
    }
}

fn shadow_group(class: &str) -> &'static str {
    let value = class.strip_prefix("shadow").unwrap_or(class);
    let value = value.strip_prefix('-').unwrap_or(value);
    if value.is_empty() || SHADOW_SIZES.contains(&value) || value.starts_with('[') {
        "shadow"
    } else {
        "shadow-color"
    }
}

fn is_font_weight(value: &str) -> bool {
    FONT_WEIGHTS.contains(&value) || value.bytes().all(|b| b.is_ascii_digit())
}

fn is_width_value(value: &str) -> bool {
    value.bytes().all(|b| b.is_ascii_digit()) || is_arbitrary_length(value)
}

fn is_arbitrary_length(value: &str) -> bool {
    value
        .strip_prefix('[')
        .and_then(|v| v.strip_suffix(']'))
        .is_some_and(|inner| {
            ["px", "rem", "em", "%", "vh", "vw"]
                .iter()
                .any(|unit| inner.ends_with(unit))
        })
}

/// Groups a utility overrides besides its own: `size-*` sets both width and
/// height, `p-*` sets every side's padding, and so on.
fn subsumed_groups(group: &str) -> &'static [&'static str] {
    match group {
        "size" => &["w", "h"],
        "m" => &["mx", "my", "mt", "mr", "mb", "ml", "ms", "me"],
        "mx" => &["mr", "ml", "ms", "me"],
        "my" => &["mt", "mb"],
        "p" => &["px", "py", "pt", "pr", "pb", "pl", "ps", "pe"],
        "px" => &["pr", "pl", "ps", "pe"],
        "py" => &["pt", "pb"],
        "gap" => &["gap-x", "gap-y"],
        "inset" => &["inset-x", "inset-y", "top", "right", "bottom", "left"],
        "inset-x" => &["right", "left"],
        "inset-y" => &["top", "bottom"],
        "overflow" => &["overflow-x", "overflow-y"],
        "rounded" => &[
            "rounded-t",
            "rounded-r",
            "rounded-b",
            "rounded-l",
            "rounded-tl",
            "rounded-tr",
            "rounded-br",
            "rounded-bl",
        ],
        "rounded-t" => &["rounded-tl", "rounded-tr"],
        "rounded-r" => &["rounded-tr", "rounded-br"],
        "rounded-b" => &["rounded-br", "rounded-bl"],
        "rounded-l" => &["rounded-tl", "rounded-bl"],
        "border-w" => &[
            "border-w-x",
            "border-w-y",
            "border-w-t",
            "border-w-r",
            "border-w-b",
            "border-w-l",
        ],
        "border-w-x" => &["border-w-r", "border-w-l"],
        "border-w-y" => &["border-w-t", "border-w-b"],
        "border-color" => &[
            "border-color-x",
            "border-color-y",
            "border-color-t",
            "border-color-r",
            "border-color-b",
            "border-color-l",
        ],
        "border-color-x" => &["border-color-r", "border-color-l"],
        "border-color-y" => &["border-color-t", "border-color-b"],
        "font-size" => &["leading"],
        _ => &[],
    }
}
