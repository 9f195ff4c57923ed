//! Breakpoint tiers for the responsive layout.
//!
//! Instead of rendering parallel element trees hidden per media query, the
//! navbar derives a single [`LayoutTier`] from the viewport width and
//! branches on it in one render path. This keeps the desktop and mobile
//! copies of the nav-link list from drifting apart.

use dioxus::prelude::*;

/// Medium tier starts here (inclusive).
pub const MEDIUM_MIN_WIDTH: f64 = 768.0;
/// Wide tier starts here (inclusive).
pub const WIDE_MIN_WIDTH: f64 = 992.0;

/// Width reported when the platform has no queryable viewport
/// (non-wasm targets, headless tests).
const FALLBACK_WIDTH: f64 = 1280.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutTier {
    Narrow,
    Medium,
    Wide,
}

/// Map a viewport width in CSS pixels to its tier.
pub fn layout_tier(viewport_width: f64) -> LayoutTier {
    if viewport_width >= WIDE_MIN_WIDTH {
        LayoutTier::Wide
    } else if viewport_width >= MEDIUM_MIN_WIDTH {
        LayoutTier::Medium
    } else {
        LayoutTier::Narrow
    }
}

/// Viewport width as a reactive signal.
///
/// Reads `window.innerWidth` and tracks `resize` events. The listener is
/// installed once and never removed; the navbar lives for the whole
/// session.
#[cfg(target_arch = "wasm32")]
pub fn use_viewport_width() -> Signal<f64> {
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::JsCast;

    let mut width = use_signal(current_viewport_width);

    use_effect(move || {
        let Some(window) = web_sys::window() else {
            return;
        };
        let handler = Closure::<dyn FnMut()>::new(move || {
            width.set(current_viewport_width());
        });
        let _ = window
            .add_event_listener_with_callback("resize", handler.as_ref().unchecked_ref());
        handler.forget();
    });

    width
}

#[cfg(target_arch = "wasm32")]
fn current_viewport_width() -> f64 {
    web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(FALLBACK_WIDTH)
}

/// Non-wasm fallback: a fixed desktop-sized viewport.
#[cfg(not(target_arch = "wasm32"))]
pub fn use_viewport_width() -> Signal<f64> {
    use_signal(|| FALLBACK_WIDTH)
}
