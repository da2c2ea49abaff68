pub(crate) mod dom;
pub(crate) mod storage;
mod theme_state;

pub use theme_state::{use_theme, Theme, ThemeState, THEME_STORAGE_KEY};
