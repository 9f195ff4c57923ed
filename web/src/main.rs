use dioxus::prelude::*;

use ui::components::NavBar;
use ui::config::{LanguageOption, NavBarConfig, NavLink};
use ui::theme::ThemeMode;

mod views;
use views::{About, Events, Home, LocalizedHome};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(SiteShell)]
    #[route("/")]
    Home {},
    #[route("/events")]
    Events {},
    #[route("/about")]
    About {},
    // Language-switch targets (/en, /es). Static routes above win over
    // this dynamic segment.
    #[route("/:lang")]
    LocalizedHome { lang: String },
}

const FAVICON: Asset = asset!("/assets/favicon.ico");
const MAIN_CSS: Asset = asset!("/assets/main.css");
const SAVER_MARK: Asset = asset!("/assets/saver-mark.svg");

/// Navbar configuration for the Saver site. The active language is picked
/// from the current route; the component itself never stores it.
fn nav_config(active_lang: &str) -> NavBarConfig {
    let langs = vec![
        LanguageOption {
            symbol: "EN".into(),
            href: "/en".into(),
            photo_url: String::new(),
        },
        LanguageOption {
            symbol: "ES".into(),
            href: "/es".into(),
            photo_url: String::new(),
        },
    ];
    let lang = langs
        .iter()
        .find(|l| l.href.trim_start_matches('/') == active_lang)
        .cloned()
        .unwrap_or_else(|| langs[0].clone());

    NavBarConfig {
        photo_url: SAVER_MARK.to_string(),
        title: "Saver".into(),
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
        lang,
        langs,
    }
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // Application-wide theme flag; the navbar toggles it, every themed
    // container reads it.
    let theme = use_signal(ThemeMode::default);
    use_context_provider(|| theme);

    rsx! {
        // Global app resources
        document::Link { rel: "icon", href: FAVICON }
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        Router::<Route> {}
    }
}

/// Page shell: navbar above the routed content, theme class on the
/// wrapper so the whole page restyles with the shared flag.
#[component]
fn SiteShell() -> Element {
    let theme = use_context::<Signal<ThemeMode>>();
    let route = use_route::<Route>();
    let active_lang = match &route {
        Route::LocalizedHome { lang } => lang.clone(),
        _ => "en".to_string(),
    };

    rsx! {
        div { class: "site {theme().css_class()}",
            NavBar { config: nav_config(&active_lang) }
            main { class: "site__content",
                Outlet::<Route> {}
            }
        }
    }
}
