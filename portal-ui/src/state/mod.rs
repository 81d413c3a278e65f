//! State Management
//!
//! The portal context (session store and theme) provided to every page, plus
//! small helpers around component lifetimes and the browser console.

pub mod session;

pub use session::LocalStorageSession;

use leptos::*;
use std::cell::Cell;
use std::rc::Rc;
use subs_portal::views::Theme;
use wasm_bindgen::JsValue;

/// Local storage key for the theme name
const THEME_KEY: &str = "subs_portal_theme";

/// Context provided to all pages
#[derive(Clone)]
pub struct PortalContext {
    pub session: LocalStorageSession,
    pub theme: Theme,
}

/// Provide the portal context to the component tree
pub fn provide_portal_context() {
    let theme = session::local_setting(THEME_KEY)
        .map(|name| Theme::named(&name))
        .unwrap_or_default();

    provide_context(PortalContext {
        session: LocalStorageSession::new(),
        theme,
    });
}

pub fn use_portal() -> PortalContext {
    use_context::<PortalContext>().expect("PortalContext not found")
}

/// A flag that stays `true` until the calling component is torn down.
///
/// Fetches spawned by a page check it before touching page state or
/// navigating, so a response that lands after the user left is dropped.
pub fn mount_guard() -> Rc<Cell<bool>> {
    let mounted = Rc::new(Cell::new(true));
    let flag = Rc::clone(&mounted);
    on_cleanup(move || flag.set(false));
    mounted
}

pub fn console_error(message: &str) {
    web_sys::console::error_1(&JsValue::from_str(message));
}

pub fn console_warn(message: &str) {
    web_sys::console::warn_1(&JsValue::from_str(message));
}
