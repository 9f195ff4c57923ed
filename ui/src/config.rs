//! Caller-supplied navbar configuration.
//!
//! The component performs no validation: an empty `nav_items` list renders
//! an empty menu, an empty `title` suppresses the title block. The serde
//! field names preserve the site's original JSON shape (`photoURL`,
//! `navItems`) so a config can be shipped as data unchanged.

use serde::{Deserialize, Serialize};

/// A labeled navigation target, rendered as a link-styled button.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavLink {
    pub label: String,
    pub href: String,
}

/// One entry of the language switcher.
///
/// `photo_url` is part of the contract (a flag icon) but the navbar does
/// not render it; entries are labeled with `symbol` only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageOption {
    pub symbol: String,
    pub href: String,
    #[serde(rename = "photoURL", default)]
    pub photo_url: String,
}

/// The single input of [`NavBar`](crate::components::NavBar).
///
/// `lang` is the currently active language and is conventionally a member
/// of `langs`; this is not enforced. Display order of `nav_items` and
/// `langs` is input order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavBarConfig {
    #[serde(rename = "photoURL")]
    pub photo_url: String,
    #[serde(default)]
    pub title: String,
    #[serde(rename = "navItems")]
    pub nav_items: Vec<NavLink>,
    pub lang: LanguageOption,
    pub langs: Vec<LanguageOption>,
}

impl NavBarConfig {
    /// The title block renders only for a non-empty title (no placeholder
    /// is emitted for the empty string).
    pub fn has_title(&self) -> bool {
        !self.title.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lang(symbol: &str, href: &str) -> LanguageOption {
        LanguageOption {
            symbol: symbol.into(),
            href: href.into(),
            photo_url: String::new(),
        }
    }

    fn config(title: &str) -> NavBarConfig {
        NavBarConfig {
            photo_url: "/assets/saver-mark.svg".into(),
            title: title.into(),
            nav_items: vec![
                NavLink {
                    label: "Events".into(),
                    href: "/events".into(),
                },
                NavLink {
                    label: "About".into(),
                    href: "/about".into(),
                },
            ],
            lang: lang("EN", "/en"),
            langs: vec![lang("EN", "/en"), lang("ES", "/es")],
        }
    }

    #[test]
    fn title_block_gated_on_non_empty_title() {
        assert!(config("Saver").has_title());
        assert!(!config("").has_title());
    }

    #[test]
    fn nav_items_keep_caller_order() {
        let cfg = config("Saver");
        let labels: Vec<_> = cfg.nav_items.iter().map(|i| i.label.as_str()).collect();
        assert_eq!(labels, ["Events", "About"]);
    }

    #[test]
    fn language_list_keeps_active_entry_and_order() {
        // The active language is not excluded or deduplicated from the
        // dropdown; all entries render in input order.
        let cfg = config("Saver");
        let symbols: Vec<_> = cfg.langs.iter().map(|l| l.symbol.as_str()).collect();
        assert_eq!(symbols, ["EN", "ES"]);
        assert!(cfg.langs.contains(&cfg.lang));
    }

    #[test]
    fn deserializes_original_json_shape() {
        let cfg: NavBarConfig = serde_json::from_str(
            r#"{
                "photoURL": "/logo.png",
                "title": "Saver",
                "navItems": [{"label": "Events", "href": "/events"}],
                "lang": {"symbol": "EN", "href": "/en", "photoURL": ""},
                "langs": [
                    {"symbol": "EN", "href": "/en", "photoURL": ""},
                    {"symbol": "ES", "href": "/es", "photoURL": ""}
                ]
            }"#,
        )
        .expect("valid navbar config");

        assert_eq!(cfg.photo_url, "/logo.png");
        assert_eq!(cfg.nav_items.len(), 1);
        assert_eq!(cfg.lang.symbol, "EN");
        assert_eq!(cfg.langs.len(), 2);
    }

    #[test]
    fn title_defaults_to_empty_when_absent() {
        let cfg: NavBarConfig = serde_json::from_str(
            r#"{
                "photoURL": "/logo.png",
                "navItems": [],
                "lang": {"symbol": "EN", "href": "/en"},
                "langs": []
            }"#,
        )
        .expect("valid navbar config");

        assert!(!cfg.has_title());
        assert!(cfg.nav_items.is_empty());
    }
}
