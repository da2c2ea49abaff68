use dioxus::prelude::*;

use crate::components::Footer;
use crate::routes::Route;
use crate::utils::use_theme;

const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");

const NAV_LINKS: &[(&str, Route)] = &[
    ("Features", Route::Features),
    ("Pricing", Route::Pricing),
    ("Blog", Route::Blog),
    ("Careers", Route::Careers),
    ("Community", Route::Community),
    ("Partners", Route::Partners),
];

/// Shared shell around every route: navigation, routed content, footer.
#[component(no_case_check)]
pub fn Navbar() -> Element {
    let mut theme = use_theme();

    rsx! {
        div {
            document::Link { rel: "stylesheet", href: NAVBAR_CSS }

            nav {
                class: theme.read().class(
                    "bg-dark-primary shadow-lg transition-colors duration-200",
                    "bg-white shadow-lg transition-colors duration-200",
                ),
                div {
                    id: "navbar",
                    class: "container mx-auto px-4 py-3 flex justify-between items-center",
                    div {
                        class: "flex items-center space-x-6",
                        Link {
                            class: "text-xl font-bold text-primary",
                            to: Route::Home,
                            "Acadex"
                        }
                        for (label, route) in NAV_LINKS.iter() {
                            Link {
                                key: "{label}",
                                class: theme.read().class(
                                    "text-white hover:text-primary transition-colors",
                                    "text-gray-800 hover:text-primary transition-colors",
                                ),
                                to: route.clone(),
                                {*label}
                            }
                        }
                    }
                    button {
                        class: theme.read().class(
                            "p-2 rounded-lg bg-gray-700 hover:bg-gray-600 transition-colors",
                            "p-2 rounded-lg bg-gray-200 hover:bg-gray-300 transition-colors",
                        ),
                        onclick: move |_| theme.write().toggle(),
                        if theme.read().is_dark() {
                            "🌞"
                        } else {
                            "🌙"
                        }
                    }
                }
            }
            Outlet::<Route> {}
            Footer {}
        }
    }
}
