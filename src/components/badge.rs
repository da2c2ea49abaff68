use dioxus::prelude::*;

use crate::utils::use_theme;

#[component]
pub fn Badge(label: String) -> Element {
    let theme = use_theme();

    rsx! {
        span {
            class: theme.read().class(
                "inline-block px-2 py-1 rounded-full text-xs font-medium bg-gray-700 text-gray-200",
                "inline-block px-2 py-1 rounded-full text-xs font-medium bg-gray-200 text-gray-700",
            ),
            {label}
        }
    }
}
