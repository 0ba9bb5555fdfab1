use std::marker::PhantomData;

use dioxus::prelude::*;
use dioxus_router::Link;

use crate::{api::users::SigninModel, navbar::Account};

pub fn Signin(cx: Scope) -> Element {
    let api = super::use_api(cx);
    let account = Account::use_state(cx);

    cx.render(rsx! {
        div {
            class: "auth-page",
            h1 { "Sign in" }
            super::Form {
                fields: PhantomData::<SigninModel>,
                label: "Sign in",
                submit: Box::new(move |model: SigninModel| {
                    let api = api.clone();
                    let account = account.clone();
                    super::submission(async move {
                        let result = api.signin(model).await;
                        if let Ok(signed_in) = &result {
                            *account.write() = Some(Account::from(&signed_in.user));
                        }
                        result
                    })
                }),
            }
            p { "No account yet? " Link { to: "/signup", "Sign up" } }
        }
    })
}
