//! Root visual marker: a `dark` or `light` class on `<html>`, consumed by
//! base style rules that are not driven by per-component props. The old
//! marker is removed before the new one is added, so exactly one of the two
//! is present at any time.

use crate::utils::Theme;

#[cfg(target_arch = "wasm32")]
pub(crate) fn set_root_marker(theme: Theme) {
    let root = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element());
    if let Some(root) = root {
        let classes = root.class_list();
        let _ = classes.remove_1(theme.toggled().token());
        let _ = classes.add_1(theme.token());
    }
}

#[cfg(not(target_arch = "wasm32"))]
use std::cell::Cell;

#[cfg(not(target_arch = "wasm32"))]
thread_local! {
    static ROOT_MARKER: Cell<Option<Theme>> = Cell::new(None);
}

#[cfg(not(target_arch = "wasm32"))]
pub(crate) fn set_root_marker(theme: Theme) {
    ROOT_MARKER.with(|m| m.set(Some(theme)));
}

/// The marker currently applied to the (stand-in) document root.
#[cfg(all(test, not(target_arch = "wasm32")))]
pub(crate) fn root_marker() -> Option<Theme> {
    ROOT_MARKER.with(|m| m.get())
}
