use dioxus::prelude::*;

use crate::components::{CtaBanner, SectionHeading};
use crate::content::{FEATURES, STATS, TESTIMONIALS};
use crate::routes::Route;
use crate::utils::use_theme;

#[component]
pub fn Home() -> Element {
    let theme = use_theme();

    rsx! {
        div {
            class: "container mx-auto px-4",

            // Hero
            section {
                class: "text-center py-20",
                h1 {
                    class: theme.read().class(
                        "text-4xl md:text-5xl font-bold text-white leading-tight",
                        "text-4xl md:text-5xl font-bold text-gray-900 leading-tight",
                    ),
                    "Run your school on one calm platform"
                }
                p {
                    class: theme.read().class(
                        "mt-5 text-xl text-gray-400 max-w-2xl mx-auto",
                        "mt-5 text-xl text-gray-600 max-w-2xl mx-auto",
                    ),
                    "Attendance, grades, timetables, admissions, and fees in a single "
                    "system of record your staff and families will actually enjoy using."
                }
                div {
                    class: "mt-8 flex justify-center space-x-4",
                    Link {
                        class: "px-6 py-3 bg-primary text-white rounded-lg font-semibold hover:bg-primary-dark transition-colors",
                        to: Route::Pricing,
                        "Start for free"
                    }
                    Link {
                        class: theme.read().class(
                            "px-6 py-3 rounded-lg font-semibold border border-gray-600 text-gray-200 hover:border-primary transition-colors",
                            "px-6 py-3 rounded-lg font-semibold border border-gray-300 text-gray-700 hover:border-primary transition-colors",
                        ),
                        to: Route::Features,
                        "Explore features"
                    }
                }
            }

            // Stat strip
            section {
                class: theme.read().class(
                    "grid grid-cols-2 md:grid-cols-4 gap-6 rounded-2xl bg-dark-secondary py-8 px-6",
                    "grid grid-cols-2 md:grid-cols-4 gap-6 rounded-2xl bg-gray-50 py-8 px-6",
                ),
                for stat in STATS.iter() {
                    div {
                        key: "{stat.label}",
                        class: "text-center",
                        div {
                            class: "text-3xl font-bold text-primary",
                            {stat.value}
                        }
                        div {
                            class: theme.read().class(
                                "mt-1 text-sm text-gray-400",
                                "mt-1 text-sm text-gray-600",
                            ),
                            {stat.label}
                        }
                    }
                }
            }

            // Feature highlights (first six of the catalog)
            section {
                class: "py-16",
                SectionHeading {
                    title: "Everything the office touches, in one place",
                    subtitle: "The day-to-day of running a school, minus the spreadsheet shuffle.",
                }
                div {
                    class: "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6",
                    for feature in FEATURES.iter().take(6) {
                        div {
                            key: "{feature.title}",
                            class: theme.read().class(
                                "rounded-xl bg-dark-secondary p-6 hover:ring-1 hover:ring-primary transition-shadow",
                                "rounded-xl bg-white shadow p-6 hover:shadow-md transition-shadow",
                            ),
                            div { class: "text-3xl", {feature.icon} }
                            h3 {
                                class: theme.read().class(
                                    "mt-3 text-lg font-semibold text-white",
                                    "mt-3 text-lg font-semibold text-gray-900",
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

            // Testimonials
            section {
                class: "py-16",
                SectionHeading {
                    title: "Trusted by the people who keep schools running",
                }
                div {
                    class: "grid grid-cols-1 md:grid-cols-2 gap-6",
                    for t in TESTIMONIALS.iter() {
                        figure {
                            key: "{t.name}",
                            class: theme.read().class(
                                "rounded-xl bg-dark-secondary p-6",
                                "rounded-xl bg-white shadow p-6",
                            ),
                            blockquote {
                                class: theme.read().class(
                                    "text-gray-300 italic",
                                    "text-gray-700 italic",
                                ),
                                {format!("\u{201c}{}\u{201d}", t.quote)}
                            }
                            figcaption {
                                class: "mt-4",
                                span {
                                    class: theme.read().class(
                                        "font-semibold text-white",
                                        "font-semibold text-gray-900",
                                    ),
                                    {t.name}
                                }
                                span {
                                    class: theme.read().class(
                                        "block text-sm text-gray-500",
                                        "block text-sm text-gray-500",
                                    ),
                                    {format!("{}, {}", t.role, t.school)}
                                }
                            }
                        }
                    }
                }
            }

            CtaBanner {
                title: "Ready for a calmer school year?",
                body: "Set up your school in an afternoon. No credit card, no sales call required for the Starter plan.",
                cta: "See plans and pricing",
            }
        }
    }
}
