use dioxus::prelude::*;
use dioxus_router::use_router;

use crate::render;

pub fn Home(cx: Scope) -> Element {
    let api = super::use_api(cx);
    let router = use_router(cx);
    let posts = use_future(cx, (), |()| {
        let api = api.clone();
        async move { api.get_posts().await }
    });

    let posts = match posts.value() {
        None => return cx.render(rsx! { div { class: "page-loading", "Loading..." } }),
        Some(Err(error)) => return cx.render(rsx! { div { class: "page-error", "{error}" } }),
        Some(Ok(posts)) => posts,
    };

    cx.render(rsx! {
        div {
            class: "post-list",
            div { class: "post-list-empty", hidden: !posts.is_empty(), "No posts yet" }
            posts.iter().map(|post| {
                let id = post.id;
                let created = render::format_jst(post.created_at);
                rsx! {
                    a {
                        key: "{id}",
                        class: "post-tile",
                        href: "/posts/{id}",
                        prevent_default: "onclick",
                        onclick: move |_| router.push_route(&format!("/posts/{id}"), None, None),
                        h3 { class: "post-title", "{post.title}" }
                        p { class: "post-date", "{created}" }
                    }
                }
            })
        }
    })
}
