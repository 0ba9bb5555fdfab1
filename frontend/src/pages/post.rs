use codecure_shared::model::Id;
use dioxus::prelude::*;
use dioxus_router::{use_route, use_router};

use crate::render;

pub const MISSING_POST: &str = "no such post";

/// Reads the numeric `:id` segment of the current route.
pub fn parse_id(segment: Option<&str>) -> Option<Id> {
    segment?.trim().parse().ok()
}

pub fn PostPage(cx: Scope) -> Element {
    let api = super::use_api(cx);
    let router = use_router(cx);
    let id = parse_id(use_route(cx).segment("id"));
    let delete_error = use_state(cx, || None::<String>);

    let detail = use_future(cx, &(id,), |(id,)| {
        let api = api.clone();
        async move {
            let Some(id) = id else {
                return Err(MISSING_POST.to_string());
            };
            api.get_post(id).await.map_err(|e| e.to_string())
        }
    });

    if let Some(error) = delete_error.get() {
        return cx.render(rsx! { div { class: "page-error", "{error}" } });
    }

    let detail = match detail.value() {
        None => return cx.render(rsx! { div { class: "page-loading", "Loading..." } }),
        Some(Err(error)) => return cx.render(rsx! { div { class: "page-error", "{error}" } }),
        Some(Ok(detail)) => detail,
    };

    let post_id = detail.post.id;
    let created = render::format_jst(detail.post.created_at);
    let content = render::markdown_to_html(&detail.post.content);

    cx.render(rsx! {
        div {
            class: "post-page",
            article {
                class: "post-card",
                div { class: "post-date", "{created}" }
                h2 { class: "post-title", "{detail.post.title}" }
                div { class: "post-content", dangerous_inner_html: "{content}" }
                div {
                    class: "post-tags",
                    detail.tags.iter().map(|tag| rsx! {
                        span { key: "{tag.id}", class: "tag-chip", "{tag.name}" }
                    })
                }
            }
            section {
                class: "post-delete",
                p { "Do you delete the Post?" }
                button {
                    class: "danger",
                    onclick: move |_| {
                        let api = api.clone();
                        let router = router.clone();
                        let delete_error = delete_error.clone();
                        async move {
                            match api.delete_post(post_id).await {
                                Ok(done) => {
                                    log::info!("{}", done);
                                    super::alert(done.message());
                                    router.push_route("/", None, None);
                                }
                                Err(e) => delete_error.set(Some(e.to_string())),
                            }
                        }
                    },
                    "DELETE"
                }
            }
        }
    })
}
