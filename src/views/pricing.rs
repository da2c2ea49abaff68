use dioxus::prelude::*;

use crate::components::SectionHeading;
use crate::content::{PLANS, PRICING_FAQS};
use crate::utils::use_theme;

#[component]
pub fn Pricing() -> Element {
    let theme = use_theme();

    rsx! {
        div {
            class: "container mx-auto px-4 py-16",
            SectionHeading {
                title: "Pricing that fits how schools budget",
                subtitle: "Flat plans, unlimited staff seats, annual invoicing on request.",
            }
            div {
                class: "grid grid-cols-1 md:grid-cols-3 gap-8 items-stretch",
                for plan in PLANS.iter() {
                    div {
                        key: "{plan.name}",
                        class: theme.read().class(
                            if plan.featured {
                                "flex flex-col rounded-2xl bg-dark-secondary p-8 ring-2 ring-primary relative"
                            } else {
                                "flex flex-col rounded-2xl bg-dark-secondary p-8"
                            },
                            if plan.featured {
                                "flex flex-col rounded-2xl bg-white shadow-lg p-8 ring-2 ring-primary relative"
                            } else {
                                "flex flex-col rounded-2xl bg-white shadow p-8"
                            },
                        ),
                        if plan.featured {
                            span {
                                class: "absolute -top-3 left-1/2 -translate-x-1/2 px-3 py-1 bg-primary text-white text-xs font-semibold rounded-full",
                                "Most popular"
                            }
                        }
                        h3 {
                            class: theme.read().class(
                                "text-lg font-semibold text-white",
                                "text-lg font-semibold text-gray-900",
                            ),
                            {plan.name}
                        }
                        div {
                            class: "mt-4 flex items-baseline space-x-2",
                            span {
                                class: theme.read().class(
                                    "text-4xl font-bold text-white",
                                    "text-4xl font-bold text-gray-900",
                                ),
                                {plan.price}
                            }
                            span {
                                class: "text-sm text-gray-500",
                                {plan.period}
                            }
                        }
                        p {
                            class: theme.read().class(
                                "mt-3 text-sm text-gray-400",
                                "mt-3 text-sm text-gray-600",
                            ),
                            {plan.tagline}
                        }
                        ul {
                            class: "mt-6 space-y-3 flex-1",
                            for highlight in plan.highlights.iter() {
                                li {
                                    key: "{highlight}",
                                    class: theme.read().class(
                                        "flex items-start text-sm text-gray-300",
                                        "flex items-start text-sm text-gray-700",
                                    ),
                                    span { class: "text-primary mr-2", "✓" }
                                    {*highlight}
                                }
                            }
                        }
                        button {
                            class: theme.read().class(
                                if plan.featured {
                                    "mt-8 w-full py-3 bg-primary text-white rounded-lg font-semibold hover:bg-primary-dark transition-colors"
                                } else {
                                    "mt-8 w-full py-3 rounded-lg font-semibold border border-gray-600 text-gray-200 hover:border-primary transition-colors"
                                },
                                if plan.featured {
                                    "mt-8 w-full py-3 bg-primary text-white rounded-lg font-semibold hover:bg-primary-dark transition-colors"
                                } else {
                                    "mt-8 w-full py-3 rounded-lg font-semibold border border-gray-300 text-gray-700 hover:border-primary transition-colors"
                                },
                            ),
                            {plan.cta}
                        }
                    }
                }
            }

            section {
                class: "mt-20 max-w-3xl mx-auto",
                SectionHeading { title: "Frequently asked questions" }
                div {
                    class: "space-y-6",
                    for faq in PRICING_FAQS.iter() {
                        div {
                            key: "{faq.question}",
                            class: theme.read().class(
                                "rounded-xl bg-dark-secondary p-6",
                                "rounded-xl bg-white shadow p-6",
                            ),
                            h4 {
                                class: theme.read().class(
                                    "font-semibold text-white",
                                    "font-semibold text-gray-900",
                                ),
                                {faq.question}
                            }
                            p {
                                class: theme.read().class(
                                    "mt-2 text-sm text-gray-400",
                                    "mt-2 text-sm text-gray-600",
                                ),
                                {faq.answer}
                            }
                        }
                    }
                }
            }
        }
    }
}
