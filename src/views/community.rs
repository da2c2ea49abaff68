use dioxus::prelude::*;

use crate::components::SectionHeading;
use crate::content::{EVENTS, PROGRAMS};
use crate::utils::use_theme;

#[component]
pub fn Community() -> Element {
    let theme = use_theme();

    rsx! {
        div {
            class: "container mx-auto px-4 py-16",
            SectionHeading {
                title: "The Acadex community",
                subtitle: "Administrators helping administrators, with us in the room.",
            }

            section {
                class: "grid grid-cols-1 md:grid-cols-3 gap-6 mb-16",
                for program in PROGRAMS.iter() {
                    div {
                        key: "{program.title}",
                        class: theme.read().class(
                            "rounded-xl bg-dark-secondary p-6 text-center",
                            "rounded-xl bg-white shadow p-6 text-center",
                        ),
                        div { class: "text-4xl", {program.icon} }
                        h3 {
                            class: theme.read().class(
                                "mt-3 text-lg font-semibold text-white",
                                "mt-3 text-lg font-semibold text-gray-900",
                            ),
                            {program.title}
                        }
                        p {
                            class: theme.read().class(
                                "mt-2 text-sm text-gray-400",
                                "mt-2 text-sm text-gray-600",
                            ),
                            {program.description}
                        }
                    }
                }
            }

            section {
                SectionHeading { title: "Upcoming events" }
                div {
                    class: "space-y-4 max-w-3xl mx-auto",
                    for event in EVENTS.iter() {
                        div {
                            key: "{event.name}",
                            class: theme.read().class(
                                "rounded-xl bg-dark-secondary p-6",
                                "rounded-xl bg-white shadow p-6",
                            ),
                            div {
                                class: "flex flex-col md:flex-row md:items-center md:justify-between",
                                h4 {
                                    class: theme.read().class(
                                        "text-lg font-semibold text-white",
                                        "text-lg font-semibold text-gray-900",
                                    ),
                                    {event.name}
                                }
                                span {
                                    class: "text-sm text-primary font-medium",
                                    {format!("{} · {}", event.date, event.location)}
                                }
                            }
                            p {
                                class: theme.read().class(
                                    "mt-2 text-sm text-gray-400",
                                    "mt-2 text-sm text-gray-600",
                                ),
                                {event.description}
                            }
                        }
                    }
                }
            }

            section {
                class: theme.read().class(
                    "mt-16 rounded-2xl bg-dark-secondary px-8 py-12 text-center",
                    "mt-16 rounded-2xl bg-gray-50 px-8 py-12 text-center",
                ),
                h2 {
                    class: theme.read().class(
                        "text-2xl font-bold text-white mb-3",
                        "text-2xl font-bold text-gray-900 mb-3",
                    ),
                    "Join the forum"
                }
                p {
                    class: theme.read().class(
                        "text-gray-400 mb-6 max-w-xl mx-auto",
                        "text-gray-600 mb-6 max-w-xl mx-auto",
                    ),
                    "Every Acadex school gets forum access with their subscription. "
                    "Browse public threads without an account."
                }
                a {
                    class: "inline-block px-6 py-3 bg-primary text-white rounded-lg font-semibold hover:bg-primary-dark transition-colors",
                    href: "https://community.acadex.example",
                    "Visit the forum"
                }
            }
        }
    }
}
