use dioxus::prelude::*;

use crate::components::{Badge, SectionHeading};
use crate::content::{PARTNERS, PARTNER_TIERS};
use crate::utils::use_theme;

#[component]
pub fn Partners() -> Element {
    let theme = use_theme();

    rsx! {
        div {
            class: "container mx-auto px-4 py-16",
            SectionHeading {
                title: "Partners & integrations",
                subtitle: "The payment, library, transport, and learning tools your school already uses.",
            }

            for tier in PARTNER_TIERS.iter() {
                section {
                    key: "{tier}",
                    class: "mb-14",
                    h3 {
                        class: "text-xl font-semibold text-primary mb-6",
                        {format!("{} partners", tier)}
                    }
                    div {
                        class: "grid grid-cols-1 md:grid-cols-2 gap-6",
                        for partner in PARTNERS.iter().filter(|p| p.tier == *tier) {
                            div {
                                key: "{partner.name}",
                                class: theme.read().class(
                                    "rounded-xl bg-dark-secondary p-6 flex items-start justify-between",
                                    "rounded-xl bg-white shadow p-6 flex items-start justify-between",
                                ),
                                div {
                                    h4 {
                                        class: theme.read().class(
                                            "text-lg font-semibold text-white",
                                            "text-lg font-semibold text-gray-900",
                                        ),
                                        {partner.name}
                                    }
                                    p {
                                        class: theme.read().class(
                                            "mt-2 text-sm text-gray-400",
                                            "mt-2 text-sm text-gray-600",
                                        ),
                                        {partner.blurb}
                                    }
                                }
                                Badge { label: partner.tier.to_string() }
                            }
                        }
                    }
                }
            }

            section {
                class: theme.read().class(
                    "rounded-2xl bg-dark-secondary px-8 py-12 text-center",
                    "rounded-2xl bg-gray-50 px-8 py-12 text-center",
                ),
                h2 {
                    class: theme.read().class(
                        "text-2xl font-bold text-white mb-3",
                        "text-2xl font-bold text-gray-900 mb-3",
                    ),
                    "Become a partner"
                }
                p {
                    class: theme.read().class(
                        "text-gray-400 mb-6 max-w-xl mx-auto",
                        "text-gray-600 mb-6 max-w-xl mx-auto",
                    ),
                    "We certify a small number of integration and implementation partners "
                    "each year. Tell us what you would build with school data kept safe."
                }
                a {
                    class: "inline-block px-6 py-3 bg-primary text-white rounded-lg font-semibold hover:bg-primary-dark transition-colors",
                    href: "mailto:partners@acadex.example",
                    "Contact the partnerships team"
                }
            }
        }
    }
}
