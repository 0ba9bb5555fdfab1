use std::{collections::HashMap, fmt::Display, future::Future, marker::PhantomData, pin::Pin};

use dioxus::prelude::*;

use crate::api::ApiClient;

mod gpt;
mod home;
mod new_post;
mod post;
mod signin;
mod signup;
mod user;

pub use {
    gpt::Gpt, home::Home, new_post::NewPost, post::PostPage, signin::Signin, signup::Signup,
    user::UserPage,
};

pub fn use_api(cx: &ScopeState) -> &ApiClient {
    use_context::<ApiClient>(cx).expect("api client is provided by App")
}

pub fn alert(message: &str) {
    let Some(window) = web_sys::window() else {
        log::info!("{}", message);
        return;
    };

    if let Err(e) = window.alert_with_message(message) {
        log::warn!("alert failed: {:?}", e);
    }
}

pub trait FormModel: Default {
    fn render(cx: &ScopeState) -> Element;
    fn parse(values: &HashMap<String, String>, errors: &mut Vec<String>) -> Option<Self>;
}

pub trait InputData: Sized {
    type Error: Display;
    const TYPE: &'static str;
    fn parse(value: &str) -> Result<Self, Self::Error>;

    fn render<'a>(cx: &'a ScopeState, name: &'a str) -> Element<'a> {
        cx.render(rsx! {
            input {
                class: "form-field",
                r#type: Self::TYPE,
                name: name,
                placeholder: name,
            }
        })
    }
}

fn render_textarea<'a>(cx: &'a ScopeState, name: &'a str) -> Element<'a> {
    cx.render(rsx! {
        textarea {
            class: "form-field form-textarea",
            name: name,
            placeholder: name,
            rows: "8",
        }
    })
}

macro_rules! plain_input {
    ($($name:ident: $type:literal $(, $render:path)?;)*) => {$(
        #[derive(Default, serde::Serialize, Clone, Debug, PartialEq, Eq)]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl InputData for $name {
            type Error = std::convert::Infallible;

            const TYPE: &'static str = $type;

            fn parse(value: &str) -> Result<Self, Self::Error> {
                Ok(Self(value.to_string()))
            }

            $(
                fn render<'a>(cx: &'a ScopeState, name: &'a str) -> Element<'a> {
                    $render(cx, name)
                }
            )?
        }

        impl std::ops::Deref for $name {
            type Target = str;

            fn deref(&self) -> &Self::Target {
                self.0.as_str()
            }
        }
    )*};
}

plain_input! {
    Name: "text";
    Password: "password";
    Title: "text";
    Content: "text", render_textarea;
    Message: "text", render_textarea;
}

#[derive(Default, serde::Serialize, Clone, Debug, PartialEq, Eq)]
#[serde(transparent)]
pub struct Email(pub String);

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum EmailError {
    #[error("address needs an '@' with something on both sides")]
    Malformed,
}

impl InputData for Email {
    type Error = EmailError;

    const TYPE: &'static str = "email";

    fn parse(value: &str) -> Result<Self, Self::Error> {
        let value = value.trim();
        match value.split_once('@') {
            Some((local, domain)) if !local.is_empty() && !domain.is_empty() => {
                Ok(Self(value.to_string()))
            }
            _ => Err(EmailError::Malformed),
        }
    }
}

impl std::ops::Deref for Email {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        self.0.as_str()
    }
}

#[macro_export]
macro_rules! form_model {
    ($name:ident {$(
        $field:ident: $type:ty
    ),* $(,)?}) => {
        #[derive(Default, serde::Serialize, Debug)]
        pub struct $name {
            $(
                pub $field: $type,
            )*
        }

        impl $crate::pages::FormModel for $name {
            fn render(cx: &dioxus::prelude::ScopeState) -> dioxus::prelude::Element {
                use dioxus::prelude::*;
                cx.render(rsx! {
                    $(
                        <$type as $crate::pages::InputData>::render(cx, stringify!($field)),
                    )*
                })
            }

            fn parse(values: &std::collections::HashMap<String, String>, errors: &mut Vec<String>) -> Option<Self> {
                errors.clear();
                $(
                    let $field = values.get(stringify!($field)).filter(|i| !i.is_empty()).ok_or_else(|| {
                        format!("missing field: {}", stringify!($field))
                    }).and_then(|value| {
                        <$type as $crate::pages::InputData>::parse(value).map_err(|e| {
                            format!("invalid field: {}: {}", stringify!($field), e)
                        })
                    }).map_err(|e| {
                        errors.push(e);
                    });
                )*

                Some(Self {
                    $(
                        $field: $field.ok()?,
                    )*
                })
            }
        }
    };
}

/// What a [`Form`] submission resolves to, already rendered for display.
pub type Submission = Pin<Box<dyn Future<Output = Result<String, String>>>>;

pub fn submission<T, E>(future: impl Future<Output = Result<T, E>> + 'static) -> Submission
where
    T: Display,
    E: Display,
{
    Box::pin(async move {
        future
            .await
            .map(|ok| ok.to_string())
            .map_err(|err| err.to_string())
    })
}

enum FormState {
    Empty,
    Loading,
    Error(String),
    Success(String),
}

impl Display for FormState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FormState::Empty => write!(f, ""),
            FormState::Loading => write!(f, "Loading..."),
            FormState::Error(err) => write!(f, "Error: {}", err),
            FormState::Success(suc) => write!(f, "{}", suc),
        }
    }
}

#[inline_props]
pub fn Form<'a, M>(
    cx: Scope,
    fields: PhantomData<M>,
    label: &'a str,
    submit: Box<dyn Fn(M) -> Submission + 'a>,
) -> Element<'a>
where
    M: FormModel + 'static,
{
    let _ = fields;

    let state = use_state(cx, || FormState::Empty);
    let field_issues = use_state::<Vec<String>>(cx, Vec::new);

    cx.render(rsx! {
        form {
            class: "form",

            onsubmit: move |ev| {
                let mut new_issues = vec![];
                let data = M::parse(&ev.values, &mut new_issues);
                field_issues.set(new_issues);
                let state = state.clone();
                let fut = data.map(|data| submit(data));
                async move {
                    let Some(future) = fut else { return };
                    state.set(FormState::Loading);
                    state.set(match future.await {
                        Ok(done) => FormState::Success(done),
                        Err(err) => FormState::Error(err),
                    });
                }
            },
            prevent_default: "onsubmit",

            div { class: "form-fields", M::render(cx) }
            input { r#type: "submit", value: "{label}", class: "form-submit" }
            div { class: "form-state", "{state.get()}" }
            div {
                class: "form-issues",
                hidden: field_issues.get().is_empty(),
                for issue in field_issues.get().iter() {
                    div { class: "form-error", issue.as_str() }
                }
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::users::{SigninModel, SignupModel};

    fn values(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_parse_form() {
        let mut errors = vec![];
        let model = SigninModel::parse(
            &values(&[("email", " a@b.c "), ("password", "pw")]),
            &mut errors,
        )
        .unwrap();

        assert!(errors.is_empty());
        assert_eq!(&*model.email, "a@b.c");
        assert_eq!(&*model.password, "pw");
    }

    #[test]
    fn test_parse_form_issues() {
        let mut errors = vec!["stale".to_string()];
        let model = SignupModel::parse(
            &values(&[("name", "hanako"), ("email", "nope"), ("password", "")]),
            &mut errors,
        );

        assert!(model.is_none());
        assert_eq!(
            errors,
            [
                "invalid field: email: address needs an '@' with something on both sides",
                "missing field: password",
                "missing field: password_confirmation",
            ]
        );
    }

    #[test]
    fn test_email() {
        assert!(Email::parse("a@b").is_ok());
        assert_eq!(Email::parse("@b"), Err(EmailError::Malformed));
        assert_eq!(Email::parse("a@"), Err(EmailError::Malformed));
        assert_eq!(Email::parse("ab"), Err(EmailError::Malformed));
    }

    #[test]
    fn test_form_state_display() {
        assert_eq!(FormState::Empty.to_string(), "");
        assert_eq!(FormState::Loading.to_string(), "Loading...");
        assert_eq!(
            FormState::Error("nope".into()).to_string(),
            "Error: nope"
        );
        assert_eq!(FormState::Success("ok".into()).to_string(), "ok");
    }

    #[test]
    fn test_submission_renders_outcome() {
        let ok = block_on(submission(async { Ok::<_, String>(42) }));
        assert_eq!(ok, Ok("42".to_string()));

        let err = block_on(submission(async {
            Err::<u8, _>(crate::api::gpt::GptError::Other)
        }));
        assert_eq!(err, Err(crate::api::OTHER_MESSAGE.to_string()));
    }

    fn block_on(submission: Submission) -> Result<String, String> {
        tokio::runtime::Builder::new_current_thread()
            .build()
            .unwrap()
            .block_on(submission)
    }
}
