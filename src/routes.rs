use dioxus::prelude::*;

use crate::views::{
    Blog, BlogPost, Careers, Community, Features, Home, Navbar, PageNotFound, Partners, Pricing,
    Privacy, Terms,
};

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[layout(Navbar)]
    #[route("/")]
    Home,
    #[route("/features")]
    Features,
    #[route("/pricing")]
    Pricing,
    #[route("/blog")]
    Blog,
    #[route("/blog/:slug")]
    BlogPost { slug: String },
    #[route("/careers")]
    Careers,
    #[route("/community")]
    Community,
    #[route("/partners")]
    Partners,
    #[route("/privacy")]
    Privacy,
    #[route("/terms")]
    Terms,
    #[route("/:..segments")]
    PageNotFound { segments: Vec<String> },
}
