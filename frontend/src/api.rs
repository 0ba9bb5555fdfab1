use std::{fmt, sync::Arc};

use codecure_shared::{
    api::{ErrorResponse, MessageResponse},
    model::User,
};
use reqwest::{Method, RequestBuilder, Response};

use crate::session::{LocalStorage, TokenStore};

pub mod gpt;
pub mod posts;
pub mod users;

pub const OTHER_MESSAGE: &str = "An unexpected error occurred";

#[macro_export]
macro_rules! reqwest_error_handler {
    ($error:ident) => {
        impl From<reqwest::Error> for $error {
            fn from(error: reqwest::Error) -> Self {
                log::error!("reqwest error: {}", error);
                Self::Other
            }
        }
    };
}

#[macro_export]
macro_rules! reqwest_unexpected_status {
    ($response:expr, $error:ident) => {{
        let response = $response;
        log::warn!("unexpected status code: {}", response.status());
        log::warn!("response body: {}", response.text().await.unwrap_or_default());
        Err($error::Other)
    }};
}

#[macro_export]
macro_rules! url {
    ($client:expr, $($args:tt)*) => {
        $client.url(&format!($($args)*))
    };
}

/// Handle to the backend. Cheap to clone, every clone shares the token store.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    origin: Arc<str>,
    tokens: Arc<dyn TokenStore>,
}

impl ApiClient {
    pub fn new(origin: &str, tokens: Arc<dyn TokenStore>) -> Self {
        Self {
            http: reqwest::Client::new(),
            origin: origin.trim_end_matches('/').into(),
            tokens,
        }
    }

    pub fn from_config() -> Self {
        Self::new(crate::config::API_ORIGIN.as_str(), Arc::new(LocalStorage))
    }

    pub fn tokens(&self) -> &dyn TokenStore {
        &*self.tokens
    }

    pub fn is_signed_in(&self) -> bool {
        self.tokens.load().is_some()
    }

    /// The user a stored token was issued to, when both survived a reload.
    pub fn session_user(&self) -> Option<User> {
        self.tokens.load()?;
        self.tokens.load_user()
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.origin, path)
    }

    /// Every request goes through here so the stored token is always attached.
    fn request(&self, method: Method, url: String) -> RequestBuilder {
        let builder = self.http.request(method, url);
        match self.tokens.load() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    fn get(&self, url: String) -> RequestBuilder {
        self.request(Method::GET, url)
    }

    fn post(&self, url: String) -> RequestBuilder {
        self.request(Method::POST, url)
    }

    fn patch(&self, url: String) -> RequestBuilder {
        self.request(Method::PATCH, url)
    }

    fn delete(&self, url: String) -> RequestBuilder {
        self.request(Method::DELETE, url)
    }
}

/// Outcome of a call whose only payload is an optional server message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Confirmation {
    message: Option<String>,
    fallback: &'static str,
}

impl Confirmation {
    async fn read(response: Response, fallback: &'static str) -> Self {
        let message = match response.json::<MessageResponse>().await {
            Ok(body) => body.message,
            Err(e) => {
                log::debug!("confirmation without message: {}", e);
                None
            }
        };
        Self { message, fallback }
    }

    pub fn message(&self) -> &str {
        self.message.as_deref().unwrap_or(self.fallback)
    }
}

impl fmt::Display for Confirmation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Pulls the `error` field out of a rejected response, if the body has one.
async fn server_error(response: Response) -> Option<String> {
    match response.json::<ErrorResponse>().await {
        Ok(body) => body.into_message(),
        Err(e) => {
            log::warn!("rejection without readable error body: {}", e);
            None
        }
    }
}

#[cfg(test)]
mod test;
