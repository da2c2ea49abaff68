use dioxus::prelude::*;

use crate::utils::use_theme;

#[component]
pub fn SectionHeading(title: String, subtitle: Option<String>) -> Element {
    let theme = use_theme();

    rsx! {
        div {
            class: "text-center mb-12",
            h2 {
                class: theme.read().class(
                    "text-3xl font-bold text-white",
                    "text-3xl font-bold text-gray-900",
                ),
                {title}
            }
            {subtitle.map(|subtitle| rsx! {
                p {
                    class: theme.read().class(
                        "mt-3 text-lg text-gray-400 max-w-2xl mx-auto",
                        "mt-3 text-lg text-gray-600 max-w-2xl mx-auto",
                    ),
                    {subtitle}
                }
            })}
        }
    }
}
