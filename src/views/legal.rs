use dioxus::prelude::*;

use crate::content::{LegalDoc, PRIVACY_POLICY, TERMS_OF_SERVICE};
use crate::utils::use_theme;

#[component]
pub fn Privacy() -> Element {
    rsx! {
        LegalPage { doc: "privacy" }
    }
}

#[component]
pub fn Terms() -> Element {
    rsx! {
        LegalPage { doc: "terms" }
    }
}

#[component]
fn LegalPage(doc: String) -> Element {
    let theme = use_theme();
    let doc: &LegalDoc = if doc == "terms" {
        &TERMS_OF_SERVICE
    } else {
        &PRIVACY_POLICY
    };

    rsx! {
        div {
            class: "container mx-auto px-4 py-16 max-w-3xl",
            h1 {
                class: theme.read().class(
                    "text-3xl font-bold text-white",
                    "text-3xl font-bold text-gray-900",
                ),
                {doc.title}
            }
            p {
                class: "mt-2 text-sm text-gray-500",
                {doc.updated}
            }
            div {
                class: "mt-10 space-y-8",
                for entry in doc.sections.iter() {
                    section {
                        key: "{entry.heading}",
                        h2 {
                            class: theme.read().class(
                                "text-xl font-semibold text-white",
                                "text-xl font-semibold text-gray-900",
                            ),
                            {entry.heading}
                        }
                        p {
                            class: theme.read().class(
                                "mt-3 text-gray-300 leading-relaxed",
                                "mt-3 text-gray-700 leading-relaxed",
                            ),
                            {entry.body}
                        }
                    }
                }
            }
        }
    }
}
