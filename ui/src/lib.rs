//! Shared UI crate for the Saver front-end. The navigation bar and its
//! collaborators (configuration contract, theme state, breakpoint logic)
//! live here; platform crates supply routes and the theme provider.

pub mod config;
pub mod layout;
pub mod theme;

pub mod components {
    // Responsive application navbar (components/navbar.rs)
    pub mod navbar;
    pub use navbar::NavBar;

    // Stateless inline-SVG icon primitives (components/icons.rs)
    pub mod icons;
}
