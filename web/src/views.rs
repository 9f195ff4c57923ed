//! Page views behind the navbar's targets. Deliberately thin; the
//! interesting surface of this fragment is the navbar itself.

use dioxus::prelude::*;

#[component]
pub fn Home() -> Element {
    rsx! {
        section { class: "page page-home",
            h2 { "Welcome to Saver" }
            p { "A community where giving is receiving." }
        }
    }
}

/// Home rendered under a language prefix (/en, /es). The navbar derives
/// the active language from this route segment.
#[component]
pub fn LocalizedHome(lang: String) -> Element {
    rsx! {
        section { class: "page page-home",
            if lang == "es" {
                h2 { "Bienvenido a Saver" }
                p { "Una comunidad donde donar es recibir." }
            } else {
                h2 { "Welcome to Saver" }
                p { "A community where giving is receiving." }
            }
        }
    }
}

#[component]
pub fn Events() -> Element {
    rsx! {
        section { class: "page page-events",
            h2 { "Events" }
            p { "Upcoming community events." }
        }
    }
}

#[component]
pub fn About() -> Element {
    rsx! {
        section { class: "page page-about",
            h2 { "About" }
            p { "What the Saver community is and how it works." }
        }
    }
}
