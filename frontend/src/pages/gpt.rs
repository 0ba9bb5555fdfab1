use std::fmt;

use dioxus::prelude::*;

use super::FormModel;
use crate::{
    api::gpt::{GptError, PromptModel},
    render,
};

enum State {
    Empty,
    Invalid(String),
    Loading,
    Failed(GptError),
    Replied(String),
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            State::Empty | State::Replied(_) => write!(f, ""),
            State::Invalid(issues) => write!(f, "{}", issues),
            State::Loading => write!(f, "Thinking..."),
            State::Failed(err) => write!(f, "Error: {}", err),
        }
    }
}

pub fn Gpt(cx: Scope) -> Element {
    let api = super::use_api(cx);
    let state = use_state(cx, || State::Empty);

    let reply = match state.get() {
        State::Replied(html) => html.as_str(),
        _ => "",
    };

    cx.render(rsx! {
        div {
            class: "gpt-page",
            h1 { "Ask GPT" }
            form {
                class: "form",
                onsubmit: move |ev| {
                    let mut issues = vec![];
                    let model = PromptModel::parse(&ev.values, &mut issues);
                    let api = api.clone();
                    let state = state.clone();
                    async move {
                        let Some(model) = model else {
                            state.set(State::Invalid(issues.join(", ")));
                            return;
                        };
                        state.set(State::Loading);
                        state.set(match api.gpt_response(model).await {
                            Ok(reply) => State::Replied(render::markdown_to_html(&reply.0)),
                            Err(err) => State::Failed(err),
                        });
                    }
                },
                prevent_default: "onsubmit",

                div { class: "form-fields", PromptModel::render(cx) }
                input {
                    r#type: "submit",
                    value: "Send",
                    class: "form-submit",
                    disabled: matches!(state.get(), State::Loading),
                }
                div { class: "form-state", "{state.get()}" }
            }
            div { class: "gpt-reply", dangerous_inner_html: "{reply}" }
        }
    })
}
