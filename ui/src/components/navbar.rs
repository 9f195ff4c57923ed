//! Responsive application navbar.
//!
//! One render path, branched on [`LayoutTier`]:
//! - Wide: inline brand, horizontal nav-link row, no hamburger.
//! - Medium/Narrow: full-width stacked brand, hamburger toggle instead of
//!   the link row; links move into the collapsible panel below the bar.
//! - All tiers: theme toggle and language dropdown stay visible.
//!
//! Local state is two disclosure flags (`menu_expanded`, `lang_open`).
//! The theme flag is shared application state reached through
//! [`theme::use_theme`]; this component only inverts it and reads it for
//! icon selection.

use dioxus::prelude::*;

use crate::config::NavBarConfig;
use crate::layout::{self, LayoutTier};
use crate::theme::{self, ThemeMode};

use super::icons::{ChevronDownIcon, CloseIcon, HamburgerIcon, MoonIcon, SunIcon};

// Navbar stylesheet, injected wherever the component is mounted.
const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");

/// Brand strapline, rendered under the logo at every tier.
const BRAND_TAGLINE: &str = "Donar es Recibir";

/// Menu state machine: Closed ⇄ Open on the toggle button.
fn menu_after_toggle(expanded: bool) -> bool {
    !expanded
}

/// Any click on a panel link collapses the menu, whichever link it was.
fn menu_after_link_click(_expanded: bool) -> bool {
    false
}

/// Panel background class for the current theme; the expanded mobile menu
/// is opaque so the page content never bleeds through it.
fn menu_theme_class(mode: ThemeMode) -> &'static str {
    if mode.is_dark() {
        "navbar__menu navbar__menu--dark"
    } else {
        "navbar__menu navbar__menu--light"
    }
}

/// Tooltip for the theme toggle: the button offers the mode it would
/// switch *to*, matching the sun/moon icon shown.
fn theme_toggle_hint(mode: ThemeMode) -> &'static str {
    if mode.is_dark() {
        "Switch to light theme"
    } else {
        "Switch to dark theme"
    }
}

#[component]
pub fn NavBar(config: NavBarConfig) -> Element {
    let mut theme = theme::use_theme();
    let mut menu_expanded = use_signal(|| false);
    let mut lang_open = use_signal(|| false);

    let width = layout::use_viewport_width();
    let tier = layout::layout_tier(width());
    let mode = theme();

    rsx! {
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }

        header {
            id: "navbar",
            class: "navbar {mode.css_class()}",
            div { class: "navbar__inner",
                // Brand: logo over tagline; stretches to full width below
                // the wide tier.
                div {
                    class: if tier == LayoutTier::Wide {
                        "navbar__brand"
                    } else {
                        "navbar__brand navbar__brand--stacked"
                    },
                    img {
                        class: "navbar__brand-mark",
                        src: "{config.photo_url}",
                        alt: "Saver Community",
                    }
                    span { class: "navbar__brand-tagline", "{BRAND_TAGLINE}" }
                }

                if config.has_title() {
                    TitleBlock { title: config.title.clone(), tier }
                }

                div { class: "navbar__spacer" }

                // Horizontal link row, wide tier only. The same
                // `nav_items` list feeds the collapsible panel below.
                if tier == LayoutTier::Wide {
                    nav { class: "navbar__links",
                        for item in config.nav_items.iter() {
                            Link {
                                key: "{item.href}",
                                class: "navbar__link",
                                to: item.href.clone(),
                                "{item.label}"
                            }
                        }
                    }
                }

                button {
                    class: "navbar__button navbar__theme-toggle",
                    title: theme_toggle_hint(mode),
                    aria_label: "Toggle color theme",
                    onclick: move |_| {
                        let next = theme().toggled();
                        theme.set(next);
                    },
                    if mode.is_dark() {
                        SunIcon {}
                    } else {
                        MoonIcon {}
                    }
                }

                // Language switcher: entries are plain navigation targets;
                // the active language is derived from the route on the next
                // render, never stored here.
                div { class: "navbar__locale",
                    button {
                        class: "navbar__button navbar__locale-button",
                        aria_label: "Switch language",
                        aria_expanded: "{lang_open()}",
                        onclick: move |_| {
                            let open = lang_open();
                            lang_open.set(!open);
                        },
                        "{config.lang.symbol}"
                        ChevronDownIcon {}
                    }
                    if lang_open() {
                        div { class: "navbar__locale-list",
                            for lang in config.langs.iter() {
                                Link {
                                    key: "{lang.href}",
                                    class: "navbar__locale-item",
                                    to: lang.href.clone(),
                                    onclick: move |_| lang_open.set(false),
                                    "{lang.symbol}"
                                }
                            }
                        }
                    }
                }

                if tier != LayoutTier::Wide {
                    button {
                        class: "navbar__button navbar__menu-toggle",
                        aria_label: "Toggle navigation",
                        aria_expanded: "{menu_expanded()}",
                        onclick: move |_| {
                            let open = menu_expanded();
                            menu_expanded.set(menu_after_toggle(open));
                        },
                        if menu_expanded() {
                            CloseIcon {}
                        } else {
                            HamburgerIcon {}
                        }
                    }
                }
            }

            // Collapsible panel: stacked full-width links, same order as the
            // horizontal row. Any click collapses the panel again.
            if menu_expanded() {
                div { class: menu_theme_class(mode),
                    for item in config.nav_items.iter() {
                        Link {
                            key: "{item.href}",
                            class: "navbar__menu-item",
                            to: item.href.clone(),
                            onclick: move |_| {
                                let open = menu_expanded();
                                menu_expanded.set(menu_after_link_click(open));
                            },
                            "{item.label}"
                        }
                    }
                }
            }
        }
    }
}

/// Title block: fixed-width spacer, then the heading. Rendered only for a
/// non-empty title; type scales down at the narrow tier.
#[component]
fn TitleBlock(title: String, tier: LayoutTier) -> Element {
    rsx! {
        div { class: "navbar__title",
            span { class: "navbar__title-spacer", aria_hidden: "true" }
            h1 {
                class: if tier == LayoutTier::Narrow {
                    "navbar__title-text"
                } else {
                    "navbar__title-text navbar__title-text--large"
                },
                "{title}"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_opens_and_closes_on_toggle() {
        let closed = false;
        let open = menu_after_toggle(closed);
        assert!(open, "toggling a closed menu must open it");
        assert!(
            !menu_after_toggle(open),
            "toggling an open menu must close it"
        );
    }

    #[test]
    fn any_panel_link_click_closes_the_menu() {
        assert!(!menu_after_link_click(true));
        // A click that races the panel collapse still leaves it closed.
        assert!(!menu_after_link_click(false));
    }

    #[test]
    fn menu_panel_class_tracks_theme() {
        assert_eq!(
            menu_theme_class(ThemeMode::Dark),
            "navbar__menu navbar__menu--dark"
        );
        assert_eq!(
            menu_theme_class(ThemeMode::Light),
            "navbar__menu navbar__menu--light"
        );
    }

    #[test]
    fn theme_hint_offers_the_opposite_mode() {
        assert_eq!(theme_toggle_hint(ThemeMode::Dark), "Switch to light theme");
        assert_eq!(theme_toggle_hint(ThemeMode::Light), "Switch to dark theme");
    }

    #[test]
    fn theme_hint_flips_with_each_toggle() {
        let mode = ThemeMode::Light;
        let hint_before = theme_toggle_hint(mode);
        let hint_toggled = theme_toggle_hint(mode.toggled());
        assert_ne!(hint_before, hint_toggled);
        assert_eq!(theme_toggle_hint(mode.toggled().toggled()), hint_before);
    }
}
