//! Icon resolver: maps a symbolic name to an inline SVG glyph.
//!
//! The set of names is closed. Anything outside it renders a dashed
//! placeholder circle instead of failing, since icon keys arrive as plain
//! strings from content tables.

use yew::prelude::*;

/// Inner SVG markup per icon name, drawn on a 24x24 stroke grid.
const ICONS: &[(&str, &str)] = &[
    (
        "rocket",
        r#"<path d="M4.5 16.5c-1.5 1.26-2 5-2 5s3.74-.5 5-2c.71-.84.7-2.13-.09-2.91a2.18 2.18 0 0 0-2.91-.09z"/><path d="m12 15-3-3a22 22 0 0 1 2-3.95A12.88 12.88 0 0 1 22 2c0 2.72-.78 7.5-6 11a22.35 22.35 0 0 1-4 2z"/><path d="M9 12H4s.55-3.03 2-4c1.62-1.08 5 0 5 0"/><path d="M12 15v5s3.03-.55 4-2c1.08-1.62 0-5 0-5"/>"#,
    ),
    ("flame", FLAME),
    ("fire", FLAME),
    (
        "trending-up",
        r#"<polyline points="22 7 13.5 15.5 8.5 10.5 2 17"/><polyline points="16 7 22 7 22 13"/>"#,
    ),
    (
        "star",
        r#"<polygon points="12 2 15.09 8.26 22 9.27 17 14.14 18.18 21.02 12 17.77 5.82 21.02 7 14.14 2 9.27 8.91 8.26 12 2"/>"#,
    ),
    (
        "zap",
        r#"<polygon points="13 2 3 14 12 14 11 22 21 10 12 10 13 2"/>"#,
    ),
    (
        "skull",
        r#"<circle cx="9" cy="12" r="1"/><circle cx="15" cy="12" r="1"/><path d="M8 20v2h8v-2"/><path d="m12.5 17-.5-1-.5 1h1z"/><path d="M16 20a2 2 0 0 0 1.56-3.25 8 8 0 1 0-11.12 0A2 2 0 0 0 8 20"/>"#,
    ),
    ("moon", r#"<path d="M12 3a6 6 0 0 0 9 9 9 9 0 1 1-9-9z"/>"#),
    (
        "gem",
        r#"<path d="M6 3h12l4 6-10 13L2 9z"/><path d="M11 3 8 9l4 13 4-13-3-6"/><path d="M2 9h20"/>"#,
    ),
    (
        "crown",
        r#"<path d="m2 4 3 12h14l3-12-6 7-4-7-4 7-6-7z"/><path d="M5 20h14"/>"#,
    ),
    (
        "dollar-sign",
        r#"<line x1="12" x2="12" y1="2" y2="22"/><path d="M17 5H9.5a3.5 3.5 0 0 0 0 7h5a3.5 3.5 0 0 1 0 7H6"/>"#,
    ),
    ("arrow-up", r#"<path d="m5 12 7-7 7 7"/><path d="M12 19V5"/>"#),
    ("arrow-down", r#"<path d="M12 5v14"/><path d="m19 12-7 7-7-7"/>"#),
    ("check", r#"<polyline points="20 6 9 17 4 12"/>"#),
    ("x", r#"<path d="M18 6 6 18"/><path d="m6 6 12 12"/>"#),
    (
        "menu",
        r#"<line x1="4" x2="20" y1="6" y2="6"/><line x1="4" x2="20" y1="12" y2="12"/><line x1="4" x2="20" y1="18" y2="18"/>"#,
    ),
    (
        "send",
        r#"<path d="m22 2-7 20-4-9-9-4z"/><path d="M22 2 11 13"/>"#,
    ),
    (
        "message-circle",
        r#"<path d="M7.9 20A9 9 0 1 0 4 16.1L2 22z"/>"#,
    ),
    (
        "twitter",
        r#"<path d="M22 4s-.7 2.1-2 3.4c1.6 10-9.4 17.3-18 11.6 2.2.1 4.4-.6 6-2C3 15.5.5 9.6 3 5c2.2 2.6 5.6 4.1 9 4-.9-4.2 4-6.6 7-3.8 1.1 0 3-1.2 3-1.2z"/>"#,
    ),
    (
        "github",
        r#"<path d="M15 22v-4a4.8 4.8 0 0 0-1-3.5c3 0 6-2 6-5.5.08-1.25-.27-2.48-1-3.5.28-1.15.28-2.35 0-3.5 0 0-1 0-3 1.5-2.64-.5-5.36-.5-8 0C6 2 5 2 5 2c-.3 1.15-.3 2.35 0 3.5A5.403 5.403 0 0 0 4 9c0 3.5 3 5.5 6 5.5-.39.49-.68 1.05-.85 1.65-.17.6-.22 1.23-.15 1.85v4"/><path d="M9 18c-4.51 2-5-2-7-2"/>"#,
    ),
    (
        "globe",
        r#"<circle cx="12" cy="12" r="10"/><path d="M12 2a14.5 14.5 0 0 0 0 20 14.5 14.5 0 0 0 0-20"/><path d="M2 12h20"/>"#,
    ),
    (
        "disc",
        r#"<circle cx="12" cy="12" r="10"/><circle cx="12" cy="12" r="2"/>"#,
    ),
    (
        "trophy",
        r#"<path d="M6 9H4.5a2.5 2.5 0 0 1 0-5H6"/><path d="M18 9h1.5a2.5 2.5 0 0 0 0-5H18"/><path d="M4 22h16"/><path d="M10 14.66V17c0 .55-.47.98-.97 1.21C7.85 18.75 7 20.24 7 22"/><path d="M14 14.66V17c0 .55.47.98.97 1.21C16.15 18.75 17 20.24 17 22"/><path d="M18 2H6v7a6 6 0 0 0 12 0V2Z"/>"#,
    ),
    (
        "target",
        r#"<circle cx="12" cy="12" r="10"/><circle cx="12" cy="12" r="6"/><circle cx="12" cy="12" r="2"/>"#,
    ),
    (
        "users",
        r#"<path d="M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2"/><circle cx="9" cy="7" r="4"/><path d="M22 21v-2a4 4 0 0 0-3-3.87"/><path d="M16 3.13a4 4 0 0 1 0 7.75"/>"#,
    ),
    (
        "award",
        r#"<circle cx="12" cy="8" r="6"/><path d="M15.477 12.89 17 22l-5-3-5 3 1.523-9.11"/>"#,
    ),
    (
        "sparkles",
        r#"<path d="m12 3-1.9 5.8a2 2 0 0 1-1.287 1.288L3 12l5.8 1.9a2 2 0 0 1 1.288 1.287L12 21l1.9-5.8a2 2 0 0 1 1.287-1.288L21 12l-5.8-1.9a2 2 0 0 1-1.288-1.287z"/><path d="M5 3v4"/><path d="M19 17v4"/><path d="M3 5h4"/><path d="M17 19h4"/>"#,
    ),
];

const FLAME: &str = r#"<path d="M8.5 14.5A2.5 2.5 0 0 0 11 12c0-1.38-.5-2-1-3-1.072-2.143-.224-4.054 2-6 .5 2.5 2 4.9 4 6.5 2 1.6 3 3.5 3 5.5a7 7 0 1 1-14 0c0-1.153.433-2.294 1-3a2.5 2.5 0 0 0 2.5 2.5z"/>"#;

/// Rendered when an icon name is not in the table.
const PLACEHOLDER: &str = r#"<circle cx="12" cy="12" r="9" stroke-dasharray="3 3"/>"#;

/// Look up the inner SVG markup for a symbolic icon name.
pub fn resolve(name: &str) -> Option<&'static str> {
    ICONS
        .iter()
        .find(|(key, _)| *key == name)
        .map(|(_, body)| *body)
}

#[derive(Properties, PartialEq)]
pub struct IconProps {
    pub name: AttrValue,
    #[prop_or(24)]
    pub size: u32,
    #[prop_or_default]
    pub class: Classes,
}

/// Inline SVG icon. Unknown names render the placeholder rather than
/// breaking the page.
#[function_component(Icon)]
pub fn icon(props: &IconProps) -> Html {
    let body = match resolve(&props.name) {
        Some(body) => body,
        None => {
            log::warn!("unknown icon name: {}", props.name);
            PLACEHOLDER
        }
    };

    let svg = format!(
        concat!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{size}\" height=\"{size}\" ",
            "viewBox=\"0 0 24 24\" fill=\"none\" stroke=\"currentColor\" stroke-width=\"2\" ",
            "stroke-linecap=\"round\" stroke-linejoin=\"round\">{body}</svg>"
        ),
        size = props.size,
        body = body,
    );

    html! {
        <span class={classes!("icon", props.class.clone())}>
            { Html::from_html_unchecked(AttrValue::from(svg)) }
        </span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_supported_name_resolves_to_markup() {
        for (name, _) in ICONS {
            let body = resolve(name);
            assert!(body.is_some(), "{name} should resolve");
            assert!(!body.unwrap().is_empty(), "{name} should have markup");
        }
    }

    #[test]
    fn fire_is_an_alias_for_flame() {
        assert_eq!(resolve("fire"), resolve("flame"));
    }

    #[test]
    fn unknown_names_do_not_resolve() {
        assert_eq!(resolve("lambo"), None);
        assert_eq!(resolve(""), None);
        assert_eq!(resolve("FLAME"), None);
    }

    #[test]
    fn names_are_unique() {
        for (i, (name, _)) in ICONS.iter().enumerate() {
            assert!(
                !ICONS.iter().skip(i + 1).any(|(other, _)| other == name),
                "duplicate icon name: {name}"
            );
        }
    }
}
