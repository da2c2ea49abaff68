use dioxus::prelude::*;

use crate::routes::Route;
use crate::utils::use_theme;

#[component]
pub fn PageNotFound(segments: Vec<String>) -> Element {
    let theme = use_theme();

    rsx! {
        div {
            class: "container mx-auto px-4 py-24 text-center",
            h1 {
                class: "text-6xl font-bold text-primary",
                "404"
            }
            p {
                class: theme.read().class(
                    "mt-4 text-xl text-gray-300",
                    "mt-4 text-xl text-gray-700",
                ),
                "That page doesn't exist."
            }
            p {
                class: "mt-2 text-sm text-gray-500",
                {format!("/{}", segments.join("/"))}
            }
            div {
                class: "mt-8",
                Link {
                    class: "inline-block px-6 py-3 bg-primary text-white rounded-lg font-semibold hover:bg-primary-dark transition-colors",
                    to: Route::Home,
                    "Back to the homepage"
                }
            }
        }
    }
}
