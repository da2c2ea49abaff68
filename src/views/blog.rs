use dioxus::prelude::*;

use crate::components::{Badge, SectionHeading};
use crate::content::{find_post, POSTS};
use crate::routes::Route;
use crate::utils::use_theme;

#[component]
pub fn Blog() -> Element {
    let theme = use_theme();

    rsx! {
        div {
            class: "container mx-auto px-4 py-16",
            SectionHeading {
                title: "From the Acadex blog",
                subtitle: "Product news and field notes from the schools we work with.",
            }
            div {
                class: "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6",
                for post in POSTS.iter() {
                    article {
                        key: "{post.slug}",
                        class: theme.read().class(
                            "flex flex-col rounded-xl bg-dark-secondary p-6 hover:ring-1 hover:ring-primary transition-shadow",
                            "flex flex-col rounded-xl bg-white shadow p-6 hover:shadow-md transition-shadow",
                        ),
                        div {
                            class: "flex items-center justify-between",
                            Badge { label: post.category.to_string() }
                            span { class: "text-xs text-gray-500", {post.date} }
                        }
                        h3 {
                            class: theme.read().class(
                                "mt-4 text-lg font-semibold text-white",
                                "mt-4 text-lg font-semibold text-gray-900",
                            ),
                            Link {
                                class: "hover:text-primary transition-colors",
                                to: Route::BlogPost { slug: post.slug.to_string() },
                                {post.title}
                            }
                        }
                        p {
                            class: theme.read().class(
                                "mt-3 text-sm text-gray-400 flex-1",
                                "mt-3 text-sm text-gray-600 flex-1",
                            ),
                            {post.excerpt}
                        }
                        div {
                            class: "mt-4 text-sm text-gray-500",
                            {format!("By {}", post.author)}
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn BlogPost(slug: String) -> Element {
    let theme = use_theme();

    match find_post(&slug) {
        Some(post) => rsx! {
            article {
                class: "container mx-auto px-4 py-16 max-w-3xl",
                div {
                    class: "flex items-center space-x-3",
                    Badge { label: post.category.to_string() }
                    span { class: "text-sm text-gray-500", {post.date} }
                }
                h1 {
                    class: theme.read().class(
                        "mt-4 text-3xl md:text-4xl font-bold text-white",
                        "mt-4 text-3xl md:text-4xl font-bold text-gray-900",
                    ),
                    {post.title}
                }
                div {
                    class: "mt-3 text-sm text-gray-500",
                    {format!("By {}", post.author)}
                }
                div {
                    class: "mt-8 space-y-5",
                    for paragraph in post.body.iter() {
                        p {
                            class: theme.read().class(
                                "text-gray-300 leading-relaxed",
                                "text-gray-700 leading-relaxed",
                            ),
                            {*paragraph}
                        }
                    }
                }
                div {
                    class: "mt-12",
                    Link {
                        class: "text-primary hover:text-primary-dark font-medium transition-colors",
                        to: Route::Blog,
                        "← All posts"
                    }
                }
            }
        },
        None => rsx! {
            div {
                class: "container mx-auto px-4 py-24 text-center",
                h1 {
                    class: theme.read().class(
                        "text-2xl font-bold text-white",
                        "text-2xl font-bold text-gray-900",
                    ),
                    "Post not found"
                }
                p {
                    class: theme.read().class(
                        "mt-3 text-gray-400",
                        "mt-3 text-gray-600",
                    ),
                    {format!("There is no post at \"{}\". It may have been renamed.", slug)}
                }
                div {
                    class: "mt-6",
                    Link {
                        class: "text-primary hover:text-primary-dark font-medium transition-colors",
                        to: Route::Blog,
                        "Browse all posts"
                    }
                }
            }
        },
    }
}
