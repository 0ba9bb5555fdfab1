use std::marker::PhantomData;

use dioxus::prelude::*;

use crate::api::posts::PostModel;

pub fn NewPost(cx: Scope) -> Element {
    let api = super::use_api(cx);

    cx.render(rsx! {
        div {
            class: "editor-page",
            h1 { "New post" }
            p {
                class: "form-hint",
                hidden: api.is_signed_in(),
                "You need to sign in before posting."
            }
            super::Form {
                fields: PhantomData::<PostModel>,
                label: "Post",
                submit: Box::new(move |model: PostModel| {
                    let api = api.clone();
                    super::submission(async move { api.create_post(model).await })
                }),
            }
        }
    })
}
