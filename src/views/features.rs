use dioxus::prelude::*;

use crate::components::{CtaBanner, SectionHeading};
use crate::content::{FEATURES, FEATURE_CATEGORIES};
use crate::utils::use_theme;

#[component]
pub fn Features() -> Element {
    let theme = use_theme();

    rsx! {
        div {
            class: "container mx-auto px-4 py-16",
            SectionHeading {
                title: "Every feature, tour-length",
                subtitle: "The full catalog, grouped the way schools think about their work.",
            }
            for category in FEATURE_CATEGORIES.iter() {
                section {
                    key: "{category}",
                    class: "mb-14",
                    h3 {
                        class: theme.read().class(
                            "text-xl font-semibold text-primary mb-6",
                            "text-xl font-semibold text-primary mb-6",
                        ),
                        {*category}
                    }
                    div {
                        class: "grid grid-cols-1 md:grid-cols-2 gap-6",
                        for feature in FEATURES.iter().filter(|f| f.category == *category) {
                            div {
                                key: "{feature.title}",
                                class: theme.read().class(
                                    "flex items-start space-x-4 rounded-xl bg-dark-secondary p-6",
                                    "flex items-start space-x-4 rounded-xl bg-white shadow p-6",
                                ),
                                div { class: "text-3xl", {feature.icon} }
                                div {
                                    h4 {
                                        class: theme.read().class(
                                            "text-lg font-semibold text-white",
                                            "text-lg font-semibold text-gray-900",
                                        ),
                                        {feature.title}
                                    }
                                    p {
                                        class: theme.read().class(
                                            "mt-2 text-sm text-gray-400",
                                            "mt-2 text-sm text-gray-600",
                                        ),
                                        {feature.description}
                                    }
                                }
                            }
                        }
                    }
                }
            }
            CtaBanner {
                title: "See it with your own data",
                body: "Import last year's roster into a sandbox and click around. Nothing counts until you say so.",
                cta: "Start a free trial",
            }
        }
    }
}
