use dioxus::prelude::*;

use crate::components::{Badge, SectionHeading};
use crate::content::{COMPANY_VALUES, OPENINGS};
use crate::utils::use_theme;

#[component]
pub fn Careers() -> Element {
    let theme = use_theme();

    rsx! {
        div {
            class: "container mx-auto px-4 py-16",
            SectionHeading {
                title: "Build calm software for schools",
                subtitle: "We are a remote-friendly team of 40, headquartered in Amsterdam.",
            }

            section {
                class: "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-6 mb-16",
                for value in COMPANY_VALUES.iter() {
                    div {
                        key: "{value.title}",
                        class: theme.read().class(
                            "rounded-xl bg-dark-secondary p-6",
                            "rounded-xl bg-white shadow p-6",
                        ),
                        div { class: "text-3xl", {value.icon} }
                        h3 {
                            class: theme.read().class(
                                "mt-3 font-semibold text-white",
                                "mt-3 font-semibold text-gray-900",
                            ),
                            {value.title}
                        }
                        p {
                            class: theme.read().class(
                                "mt-2 text-sm text-gray-400",
                                "mt-2 text-sm text-gray-600",
                            ),
                            {value.description}
                        }
                    }
                }
            }

            section {
                SectionHeading { title: "Open positions" }
                div {
                    class: "space-y-4 max-w-3xl mx-auto",
                    for opening in OPENINGS.iter() {
                        div {
                            key: "{opening.title}",
                            class: theme.read().class(
                                "rounded-xl bg-dark-secondary p-6 flex flex-col md:flex-row md:items-center md:justify-between",
                                "rounded-xl bg-white shadow p-6 flex flex-col md:flex-row md:items-center md:justify-between",
                            ),
                            div {
                                h4 {
                                    class: theme.read().class(
                                        "text-lg font-semibold text-white",
                                        "text-lg font-semibold text-gray-900",
                                    ),
                                    {opening.title}
                                }
                                p {
                                    class: theme.read().class(
                                        "mt-1 text-sm text-gray-400 max-w-xl",
                                        "mt-1 text-sm text-gray-600 max-w-xl",
                                    ),
                                    {opening.summary}
                                }
                                div {
                                    class: "mt-3 flex flex-wrap gap-2",
                                    Badge { label: opening.team.to_string() }
                                    Badge { label: opening.location.to_string() }
                                    Badge { label: opening.employment.to_string() }
                                }
                            }
                            div {
                                class: "mt-4 md:mt-0 md:ml-6",
                                a {
                                    class: "inline-block px-5 py-2 bg-primary text-white rounded-lg font-medium hover:bg-primary-dark transition-colors",
                                    href: "mailto:jobs@acadex.example?subject={opening.title}",
                                    "Apply"
                                }
                            }
                        }
                    }
                }
                p {
                    class: "mt-10 text-center text-sm text-gray-500",
                    "Nothing that fits? Write to jobs@acadex.example anyway — we read everything."
                }
            }
        }
    }
}
