//! Light/dark theme state shared across the application.
//!
//! The platform crate owns the state: it provides a `Signal<ThemeMode>`
//! through Dioxus context (see `use_context_provider` in `web/src/main.rs`)
//! so the whole page can restyle, not just the navbar. The navbar only
//! reads the current mode for icon selection and inverts it on toggle.

use dioxus::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    /// The opposite mode. Two-state toggle, no "system" mode.
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Class applied to themed containers; both selectors live in the
    /// shared stylesheets.
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Light => "theme-light",
            Self::Dark => "theme-dark",
        }
    }
}

/// Obtain the shared theme signal, or a component-local one when no
/// provider is installed (keeps the navbar renderable in isolation).
///
/// The fallback is a hook so it survives re-renders; hooks must run
/// unconditionally, so it is created before the context lookup.
pub fn use_theme() -> Signal<ThemeMode> {
    let local = use_signal(ThemeMode::default);
    try_use_context::<Signal<ThemeMode>>().unwrap_or(local)
}
