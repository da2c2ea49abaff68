//! Preference storage. In the browser this is `window.localStorage`; a
//! storage that is unavailable or fails to read is treated the same as an
//! empty one. Off wasm (desktop renderer, unit tests) a thread-local map
//! stands in with the same read/write contract.

#[cfg(target_arch = "wasm32")]
pub(crate) fn read(key: &str) -> Option<String> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|s| s.get_item(key).ok().flatten())
}

#[cfg(target_arch = "wasm32")]
pub(crate) fn write(key: &str, value: &str) {
    if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
        let _ = storage.set_item(key, value);
    }
}

#[cfg(not(target_arch = "wasm32"))]
use std::cell::RefCell;
#[cfg(not(target_arch = "wasm32"))]
use std::collections::HashMap;

#[cfg(not(target_arch = "wasm32"))]
thread_local! {
    static STORE: RefCell<HashMap<String, String>> = RefCell::new(HashMap::new());
}

#[cfg(not(target_arch = "wasm32"))]
pub(crate) fn read(key: &str) -> Option<String> {
    STORE.with(|s| s.borrow().get(key).cloned())
}

#[cfg(not(target_arch = "wasm32"))]
pub(crate) fn write(key: &str, value: &str) {
    STORE.with(|s| {
        s.borrow_mut().insert(key.to_string(), value.to_string());
    });
}

#[cfg(all(test, not(target_arch = "wasm32")))]
pub(crate) fn remove(key: &str) {
    STORE.with(|s| {
        s.borrow_mut().remove(key);
    });
}
