use crate::utils::{storage, THEME_STORAGE_KEY};

#[allow(dead_code)]
pub fn setup() {
    // Common test setup code can go here
    std::env::set_var("RUST_LOG", "debug");
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Drops any theme value persisted by an earlier test on this thread, so
/// fresh-session scenarios really start fresh.
pub fn reset_theme() {
    storage::remove(THEME_STORAGE_KEY);
}
