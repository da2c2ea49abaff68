use dioxus::prelude::*;

use crate::routes::Route;
use crate::utils::use_theme;

#[component]
pub fn CtaBanner(title: String, body: String, cta: String) -> Element {
    let theme = use_theme();

    rsx! {
        section {
            class: theme.read().class(
                "rounded-2xl bg-primary/20 border border-primary/40 px-8 py-12 text-center my-16",
                "rounded-2xl bg-primary/10 border border-primary/20 px-8 py-12 text-center my-16",
            ),
            h2 {
                class: theme.read().class(
                    "text-2xl font-bold text-white mb-3",
                    "text-2xl font-bold text-gray-900 mb-3",
                ),
                {title}
            }
            p {
                class: theme.read().class(
                    "text-gray-300 mb-6 max-w-xl mx-auto",
                    "text-gray-600 mb-6 max-w-xl mx-auto",
                ),
                {body}
            }
            Link {
                class: "inline-block px-6 py-3 bg-primary text-white rounded-lg font-semibold hover:bg-primary-dark transition-colors",
                to: Route::Pricing,
                {cta}
            }
        }
    }
}
