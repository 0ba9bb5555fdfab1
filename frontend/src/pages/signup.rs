use std::marker::PhantomData;

use dioxus::prelude::*;
use dioxus_router::Link;

use crate::api::users::SignupModel;

pub fn Signup(cx: Scope) -> Element {
    let api = super::use_api(cx);

    cx.render(rsx! {
        div {
            class: "auth-page",
            h1 { "Sign up" }
            super::Form {
                fields: PhantomData::<SignupModel>,
                label: "Sign up",
                submit: Box::new(move |model: SignupModel| {
                    let api = api.clone();
                    super::submission(async move { api.signup(model).await })
                }),
            }
            p { "Already have an account? " Link { to: "/signin", "Sign in" } }
        }
    })
}
