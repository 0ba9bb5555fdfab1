pub mod model {
    use chrono::{DateTime, Utc};

    pub type Id = u64;

    #[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq, Eq)]
    pub struct User {
        pub id: Id,
        pub name: String,
        pub email: String,
    }

    #[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq, Eq)]
    pub struct Post {
        pub id: Id,
        pub title: String,
        pub content: String,
        pub created_at: DateTime<Utc>,
        #[serde(default)]
        pub user_id: Option<Id>,
        #[serde(default)]
        pub tags: Vec<Tag>,
    }

    #[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq, Eq)]
    pub struct Tag {
        pub id: Id,
        pub name: String,
    }
}

pub mod api {
    pub mod path {
        pub const SIGNUP: &str = "signup";
        pub const LOGIN: &str = "login";
        pub const LOGOUT: &str = "logout";
        pub const USERS: &str = "users";
        pub const CURRENT_USER: &str = "user";
        pub const POSTS: &str = "posts";
        pub const GPT: &str = "gpt_response";
    }

    pub mod session {
        /// Local storage slot holding the bearer token.
        pub const TOKEN_KEY: &str = "token";
        /// Local storage slot holding the user the token was issued to, as JSON.
        pub const USER_KEY: &str = "user";
    }

    #[derive(serde::Serialize, serde::Deserialize, Debug)]
    pub struct MessageResponse {
        #[serde(default)]
        pub message: Option<String>,
    }

    /// Body the backend sends along with a rejected request. `error` is either
    /// a single message or a list of validation messages.
    #[derive(serde::Serialize, serde::Deserialize, Debug, Default)]
    pub struct ErrorResponse {
        #[serde(default)]
        pub error: Option<serde_json::Value>,
    }

    impl ErrorResponse {
        pub fn into_message(self) -> Option<String> {
            use serde_json::Value;

            match self.error? {
                Value::Null => None,
                Value::String(message) if message.is_empty() => None,
                Value::String(message) => Some(message),
                Value::Array(messages) => {
                    let joined = messages
                        .into_iter()
                        .filter_map(|m| match m {
                            Value::String(s) => Some(s),
                            Value::Null => None,
                            other => Some(other.to_string()),
                        })
                        .collect::<Vec<_>>()
                        .join(", ");
                    (!joined.is_empty()).then_some(joined)
                }
                other => Some(other.to_string()),
            }
        }
    }

    pub mod user {
        use crate::model::{Post, User};

        #[derive(serde::Serialize, serde::Deserialize, Debug, PartialEq, Eq)]
        pub struct SignupForm {
            pub user: NewUser,
        }

        #[derive(serde::Serialize, serde::Deserialize, Debug, PartialEq, Eq)]
        pub struct NewUser {
            pub name: String,
            pub email: String,
            pub password: String,
            pub password_confirmation: String,
        }

        #[derive(serde::Serialize, serde::Deserialize, Debug)]
        pub struct SignupResponse {
            #[serde(default)]
            pub message: Option<String>,
            pub user: User,
        }

        #[derive(serde::Serialize, serde::Deserialize, Debug, PartialEq, Eq)]
        pub struct LoginForm {
            pub email: String,
            pub password: String,
        }

        #[derive(serde::Serialize, serde::Deserialize, Debug)]
        pub struct LoginResponse {
            #[serde(default)]
            pub message: Option<String>,
            pub token: String,
            pub user: User,
            #[serde(default)]
            pub posts: Vec<Post>,
        }

        #[derive(serde::Serialize, serde::Deserialize, Debug)]
        pub struct ShowResponse {
            pub user: User,
            #[serde(default)]
            pub posts: Vec<Post>,
        }

        #[derive(serde::Serialize, serde::Deserialize, Debug, PartialEq, Eq)]
        pub struct UpdateForm {
            pub user: UserChanges,
        }

        #[derive(serde::Serialize, serde::Deserialize, Debug, PartialEq, Eq)]
        pub struct UserChanges {
            pub name: String,
            pub email: String,
        }

        #[derive(serde::Serialize, serde::Deserialize, Debug)]
        pub struct UpdateResponse {
            #[serde(default)]
            pub message: Option<String>,
            pub user: User,
        }
    }

    pub mod post {
        use crate::model::{Post, Tag};

        #[derive(serde::Serialize, serde::Deserialize, Debug)]
        pub struct ShowResponse {
            pub post: Post,
            #[serde(default)]
            pub tags: Vec<Tag>,
        }

        #[derive(serde::Serialize, serde::Deserialize, Debug)]
        pub struct IndexResponse {
            #[serde(default)]
            pub posts: Vec<Post>,
        }

        #[derive(serde::Serialize, serde::Deserialize, Debug, PartialEq, Eq)]
        pub struct PostForm {
            pub post: PostDraft,
        }

        #[derive(serde::Serialize, serde::Deserialize, Debug, PartialEq, Eq)]
        pub struct PostDraft {
            pub title: String,
            pub content: String,
        }

        #[derive(serde::Serialize, serde::Deserialize, Debug)]
        pub struct MutationResponse {
            #[serde(default)]
            pub message: Option<String>,
            pub post: Post,
        }
    }

    pub mod gpt {
        #[derive(serde::Serialize, serde::Deserialize, Debug, PartialEq, Eq)]
        pub struct Request {
            pub message: String,
        }

        #[derive(serde::Serialize, serde::Deserialize, Debug)]
        pub struct Response {
            pub response: String,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::api::{self, ErrorResponse};
    use serde_json::json;

    fn error(body: serde_json::Value) -> Option<String> {
        serde_json::from_value::<ErrorResponse>(body)
            .unwrap()
            .into_message()
    }

    #[test]
    fn test_error_message() {
        assert_eq!(error(json!({ "error": "taken" })), Some("taken".into()));
        assert_eq!(
            error(json!({ "error": ["Email is invalid", "Name can't be blank"] })),
            Some("Email is invalid, Name can't be blank".into())
        );
        assert_eq!(error(json!({ "error": "" })), None);
        assert_eq!(error(json!({ "error": null })), None);
        assert_eq!(error(json!({ "error": [] })), None);
        assert_eq!(error(json!({})), None);
        assert_eq!(error(json!({ "error": 42 })), Some("42".into()));
    }

    #[test]
    fn test_post_defaults() {
        let show: api::post::ShowResponse = serde_json::from_value(json!({
            "post": {
                "id": 3,
                "title": "hello",
                "content": "# hi",
                "created_at": "2024-05-01T12:00:00.000+09:00",
            }
        }))
        .unwrap();

        assert!(show.tags.is_empty());
        assert!(show.post.tags.is_empty());
        assert_eq!(show.post.user_id, None);
        assert_eq!(show.post.created_at.to_rfc3339(), "2024-05-01T03:00:00+00:00");
    }

    #[test]
    fn test_login_without_posts() {
        let login: api::user::LoginResponse = serde_json::from_value(json!({
            "token": "abc",
            "user": { "id": 1, "name": "a", "email": "a@b.c" },
        }))
        .unwrap();

        assert_eq!(login.message, None);
        assert!(login.posts.is_empty());
    }

    #[test]
    fn test_signup_form_shape() {
        let form = api::user::SignupForm {
            user: api::user::NewUser {
                name: "a".into(),
                email: "a@b.c".into(),
                password: "pw".into(),
                password_confirmation: "pw".into(),
            },
        };

        assert_eq!(
            serde_json::to_value(&form).unwrap(),
            json!({
                "user": {
                    "name": "a",
                    "email": "a@b.c",
                    "password": "pw",
                    "password_confirmation": "pw",
                }
            })
        );
    }
}
