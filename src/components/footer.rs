use chrono::Datelike;
use dioxus::prelude::*;

use crate::content::FOOTER_COLUMNS;
use crate::routes::Route;
use crate::utils::use_theme;

#[component]
pub fn Footer() -> Element {
    let theme = use_theme();
    let year = chrono::Local::now().year();

    rsx! {
        footer {
            class: theme.read().class(
                "bg-dark-primary border-t border-gray-800 mt-16",
                "bg-gray-100 border-t border-gray-200 mt-16",
            ),
            div {
                class: "container mx-auto px-4 py-12 grid grid-cols-1 md:grid-cols-5 gap-8",
                div {
                    class: "md:col-span-2",
                    Link {
                        class: "text-xl font-bold text-primary",
                        to: Route::Home,
                        "Acadex"
                    }
                    p {
                        class: theme.read().class(
                            "mt-3 text-sm text-gray-400 max-w-xs",
                            "mt-3 text-sm text-gray-600 max-w-xs",
                        ),
                        "Calm, reliable software for the people who run schools."
                    }
                    // Markup only; the newsletter backend lives outside this site.
                    form {
                        class: "mt-6 flex max-w-xs",
                        input {
                            class: theme.read().class(
                                "flex-1 min-w-0 px-3 py-2 rounded-l-lg bg-gray-800 text-gray-200 placeholder-gray-500 text-sm",
                                "flex-1 min-w-0 px-3 py-2 rounded-l-lg bg-white text-gray-800 placeholder-gray-400 border border-gray-300 text-sm",
                            ),
                            r#type: "email",
                            placeholder: "Your work email",
                        }
                        button {
                            class: "px-4 py-2 bg-primary text-white rounded-r-lg text-sm font-medium hover:bg-primary-dark transition-colors",
                            r#type: "button",
                            "Subscribe"
                        }
                    }
                }
                for column in FOOTER_COLUMNS.iter() {
                    div {
                        key: "{column.title}",
                        h3 {
                            class: theme.read().class(
                                "text-sm font-semibold text-white uppercase tracking-wide",
                                "text-sm font-semibold text-gray-900 uppercase tracking-wide",
                            ),
                            {column.title}
                        }
                        ul {
                            class: "mt-3 space-y-2",
                            for link in column.links.iter() {
                                li {
                                    key: "{link.href}",
                                    Link {
                                        class: theme.read().class(
                                            "text-sm text-gray-400 hover:text-primary transition-colors",
                                            "text-sm text-gray-600 hover:text-primary transition-colors",
                                        ),
                                        to: link.href,
                                        {link.label}
                                    }
                                }
                            }
                        }
                    }
                }
            }
            div {
                class: theme.read().class(
                    "border-t border-gray-800 py-4 text-center text-sm text-gray-500",
                    "border-t border-gray-200 py-4 text-center text-sm text-gray-500",
                ),
                {format!("© {} Acadex B.V. All rights reserved.", year)}
            }
        }
    }
}
