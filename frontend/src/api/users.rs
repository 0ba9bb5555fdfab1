use std::fmt::{self, Display};

use codecure_shared::{
    api::{path, user},
    model::{Id, Post, User},
};
use reqwest::StatusCode;

use crate::pages::{Email, Name, Password};

use super::{ApiClient, Confirmation, OTHER_MESSAGE};


crate::form_model!(SignupModel {
    name: Name,
    email: Email,
    password: Password,
    password_confirmation: Password,
});

crate::form_model!(SigninModel {
    email: Email,
    password: Password,
});

crate::form_model!(ProfileModel {
    name: Name,
    email: Email,
});

const SIGNUP_REJECTED: &str = "signup was rejected";
const UNAUTHORIZED: &str = "Unauthorized";
const UPDATE_REJECTED: &str = "update was rejected";

impl ApiClient {
    pub async fn signup(&self, model: SignupModel) -> Result<SignupResult, SignupError> {
        let form = user::SignupForm {
            user: user::NewUser {
                name: model.name.0,
                email: model.email.0,
                password: model.password.0,
                password_confirmation: model.password_confirmation.0,
            },
        };

        let response = self
            .post(crate::url!(self, "{}", path::SIGNUP))
            .json(&form)
            .send()
            .await?;

        match response.status() {
            StatusCode::CREATED => {
                let user::SignupResponse { message, user } = response.json().await?;
                Ok(SignupResult { message, user })
            }
            StatusCode::BAD_REQUEST => Err(SignupError::Rejected(
                super::server_error(response)
                    .await
                    .unwrap_or_else(|| SIGNUP_REJECTED.into()),
            )),
            _ => crate::reqwest_unexpected_status!(response, SignupError),
        }
    }

    /// Signs in and keeps the issued token for every following request.
    pub async fn signin(&self, model: SigninModel) -> Result<SigninResult, SigninError> {
        let form = user::LoginForm {
            email: model.email.0,
            password: model.password.0,
        };

        let response = self
            .post(crate::url!(self, "{}", path::LOGIN))
            .json(&form)
            .send()
            .await?;

        match response.status() {
            StatusCode::OK => {
                let user::LoginResponse {
                    message,
                    token,
                    user,
                    posts,
                } = response.json().await?;

                self.tokens.store(&token);
                self.tokens.store_user(&user);

                Ok(SigninResult {
                    message,
                    token,
                    user_id: user.id,
                    user,
                    posts,
                })
            }
            StatusCode::UNAUTHORIZED => Err(SigninError::Unauthorized(
                super::server_error(response)
                    .await
                    .unwrap_or_else(|| UNAUTHORIZED.into()),
            )),
            _ => crate::reqwest_unexpected_status!(response, SigninError),
        }
    }

    /// The local token is dropped even when the backend call fails, the
    /// session is over from the client's point of view either way.
    pub async fn logout(&self) -> Result<Confirmation, LogoutError> {
        let result = self.logout_request().await;
        self.tokens.clear();
        result
    }

    async fn logout_request(&self) -> Result<Confirmation, LogoutError> {
        let response = self
            .delete(crate::url!(self, "{}", path::LOGOUT))
            .send()
            .await?;

        match response.status() {
            StatusCode::OK => Ok(Confirmation::read(response, "logged out").await),
            _ => crate::reqwest_unexpected_status!(response, LogoutError),
        }
    }

    pub async fn get_user(&self, id: Id) -> Result<Profile, GetUserError> {
        let response = self
            .get(crate::url!(self, "{}/{}", path::USERS, id))
            .send()
            .await?;

        match response.status() {
            StatusCode::OK => {
                let user::ShowResponse { user, posts } = response.json().await?;
                Ok(Profile { user, posts })
            }
            _ => crate::reqwest_unexpected_status!(response, GetUserError),
        }
    }

    pub async fn update_user(&self, model: ProfileModel) -> Result<UpdateUserResult, UpdateUserError> {
        let form = user::UpdateForm {
            user: user::UserChanges {
                name: model.name.0,
                email: model.email.0,
            },
        };

        let response = self
            .patch(crate::url!(self, "{}", path::CURRENT_USER))
            .json(&form)
            .send()
            .await?;

        match response.status() {
            StatusCode::OK => {
                let user::UpdateResponse { message, user } = response.json().await?;
                if self.tokens.load_user().is_some_and(|stored| stored.id == user.id) {
                    self.tokens.store_user(&user);
                }
                Ok(UpdateUserResult { message, user })
            }
            StatusCode::BAD_REQUEST => Err(UpdateUserError::Rejected(
                super::server_error(response)
                    .await
                    .unwrap_or_else(|| UPDATE_REJECTED.into()),
            )),
            _ => crate::reqwest_unexpected_status!(response, UpdateUserError),
        }
    }

    pub async fn delete_user(&self) -> Result<Confirmation, DeleteUserError> {
        let response = self
            .delete(crate::url!(self, "{}", path::CURRENT_USER))
            .send()
            .await?;

        match response.status() {
            StatusCode::OK => {
                self.tokens.clear();
                Ok(Confirmation::read(response, "account deleted").await)
            }
            _ => crate::reqwest_unexpected_status!(response, DeleteUserError),
        }
    }
}

#[derive(Debug)]
pub struct SignupResult {
    pub message: Option<String>,
    pub user: User,
}

impl Display for SignupResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.message {
            Some(message) => f.write_str(message),
            None => write!(f, "welcome, {}! you can sign in now", self.user.name),
        }
    }
}

#[derive(Clone, Debug, thiserror::Error, PartialEq, Eq)]
pub enum SignupError {
    #[error("{0}")]
    Rejected(String),
    #[error("{}", OTHER_MESSAGE)]
    Other,
}

crate::reqwest_error_handler!(SignupError);

#[derive(Debug)]
pub struct SigninResult {
    pub message: Option<String>,
    pub token: String,
    pub user: User,
    pub user_id: Id,
    pub posts: Vec<Post>,
}

impl Display for SigninResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.message {
            Some(message) => f.write_str(message),
            None => write!(f, "signed in as {}", self.user.name),
        }
    }
}

#[derive(Clone, Debug, thiserror::Error, PartialEq, Eq)]
pub enum SigninError {
    #[error("{0}")]
    Unauthorized(String),
    #[error("{}", OTHER_MESSAGE)]
    Other,
}

crate::reqwest_error_handler!(SigninError);

#[derive(Copy, Clone, Debug, thiserror::Error, PartialEq, Eq)]
pub enum LogoutError {
    #[error("{}", OTHER_MESSAGE)]
    Other,
}

crate::reqwest_error_handler!(LogoutError);

#[derive(Debug)]
pub struct Profile {
    pub user: User,
    pub posts: Vec<Post>,
}

#[derive(Copy, Clone, Debug, thiserror::Error, PartialEq, Eq)]
pub enum GetUserError {
    #[error("{}", OTHER_MESSAGE)]
    Other,
}

crate::reqwest_error_handler!(GetUserError);

#[derive(Debug)]
pub struct UpdateUserResult {
    pub message: Option<String>,
    pub user: User,
}

impl Display for UpdateUserResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.message {
            Some(message) => f.write_str(message),
            None => write!(f, "profile updated"),
        }
    }
}

#[derive(Clone, Debug, thiserror::Error, PartialEq, Eq)]
pub enum UpdateUserError {
    #[error("{0}")]
    Rejected(String),
    #[error("{}", OTHER_MESSAGE)]
    Other,
}

crate::reqwest_error_handler!(UpdateUserError);

#[derive(Copy, Clone, Debug, thiserror::Error, PartialEq, Eq)]
pub enum DeleteUserError {
    #[error("{}", OTHER_MESSAGE)]
    Other,
}

crate::reqwest_error_handler!(DeleteUserError);
