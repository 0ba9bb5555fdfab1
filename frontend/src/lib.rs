#![allow(non_snake_case)]

use dioxus::prelude::*;
use dioxus_router::{Route, Router};

pub mod api;
pub mod config;
pub mod navbar;
pub mod pages;
pub mod render;
pub mod session;

use api::ApiClient;
use navbar::Account;

pub fn App(cx: Scope) -> Element {
    let api = use_context_provider(cx, ApiClient::from_config);
    Account::init(cx, api);

    cx.render(rsx! {
        Router {
            navbar::Navbar {}
            main {
                class: "page",
                Route { to: "/", pages::Home {} }
                Route { to: "/gpt", pages::Gpt {} }
                Route { to: "/new/post", pages::NewPost {} }
                Route { to: "/posts/:id", pages::PostPage {} }
                Route { to: "/users/:id", pages::UserPage {} }
                Route { to: "/user", pages::UserPage {} }
                Route { to: "/signup", pages::Signup {} }
                Route { to: "/signin", pages::Signin {} }
                Route { to: "", div { class: "page-error", "Page not found" } }
            }
        }
    })
}
