use std::fmt;

use codecure_shared::{
    api::{path, post},
    model::{Id, Post, Tag},
};
use reqwest::StatusCode;

use crate::pages::{Content, Title};

use super::{ApiClient, Confirmation, OTHER_MESSAGE};


crate::form_model!(PostModel {
    title: Title,
    content: Content,
});

impl PostModel {
    fn into_form(self) -> post::PostForm {
        post::PostForm {
            post: post::PostDraft {
                title: self.title.0,
                content: self.content.0,
            },
        }
    }
}

const POST_REJECTED: &str = "post was rejected";

impl ApiClient {
    pub async fn get_post(&self, id: Id) -> Result<PostDetail, GetPostError> {
        let response = self
            .get(crate::url!(self, "{}/{}", path::POSTS, id))
            .send()
            .await?;

        match response.status() {
            StatusCode::OK => {
                let post::ShowResponse { post, tags } = response.json().await?;
                Ok(PostDetail { post, tags })
            }
            _ => crate::reqwest_unexpected_status!(response, GetPostError),
        }
    }

    pub async fn get_posts(&self) -> Result<Vec<Post>, GetPostsError> {
        let response = self
            .get(crate::url!(self, "{}", path::POSTS))
            .send()
            .await?;

        match response.status() {
            StatusCode::OK => Ok(response.json::<post::IndexResponse>().await?.posts),
            _ => crate::reqwest_unexpected_status!(response, GetPostsError),
        }
    }

    pub async fn create_post(&self, model: PostModel) -> Result<PostSaved, SavePostError> {
        let response = self
            .post(crate::url!(self, "{}", path::POSTS))
            .json(&model.into_form())
            .send()
            .await?;

        match response.status() {
            StatusCode::CREATED => PostSaved::read(response, "post created").await,
            StatusCode::BAD_REQUEST => Err(SavePostError::read(response).await),
            _ => crate::reqwest_unexpected_status!(response, SavePostError),
        }
    }

    pub async fn update_post(&self, id: Id, model: PostModel) -> Result<PostSaved, SavePostError> {
        let response = self
            .patch(crate::url!(self, "{}/{}", path::POSTS, id))
            .json(&model.into_form())
            .send()
            .await?;

        match response.status() {
            StatusCode::OK => PostSaved::read(response, "post updated").await,
            StatusCode::BAD_REQUEST => Err(SavePostError::read(response).await),
            _ => crate::reqwest_unexpected_status!(response, SavePostError),
        }
    }

    pub async fn delete_post(&self, id: Id) -> Result<Confirmation, DeletePostError> {
        let response = self
            .delete(crate::url!(self, "{}/{}", path::POSTS, id))
            .send()
            .await?;

        match response.status() {
            StatusCode::OK => Ok(Confirmation::read(response, "Post deleted successfully").await),
            _ => crate::reqwest_unexpected_status!(response, DeletePostError),
        }
    }
}

#[derive(Debug)]
pub struct PostDetail {
    pub post: Post,
    pub tags: Vec<Tag>,
}

#[derive(Copy, Clone, Debug, thiserror::Error, PartialEq, Eq)]
pub enum GetPostError {
    #[error("{}", OTHER_MESSAGE)]
    Other,
}

crate::reqwest_error_handler!(GetPostError);

#[derive(Copy, Clone, Debug, thiserror::Error, PartialEq, Eq)]
pub enum GetPostsError {
    #[error("{}", OTHER_MESSAGE)]
    Other,
}

crate::reqwest_error_handler!(GetPostsError);

#[derive(Debug)]
pub struct PostSaved {
    pub message: Option<String>,
    pub post: Post,
    fallback: &'static str,
}

impl PostSaved {
    async fn read(response: reqwest::Response, fallback: &'static str) -> Result<Self, SavePostError> {
        let post::MutationResponse { message, post } = response.json().await?;
        Ok(Self {
            message,
            post,
            fallback,
        })
    }
}

impl fmt::Display for PostSaved {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message.as_deref().unwrap_or(self.fallback))
    }
}

#[derive(Clone, Debug, thiserror::Error, PartialEq, Eq)]
pub enum SavePostError {
    #[error("{0}")]
    Rejected(String),
    #[error("{}", OTHER_MESSAGE)]
    Other,
}

impl SavePostError {
    async fn read(response: reqwest::Response) -> Self {
        Self::Rejected(
            super::server_error(response)
                .await
                .unwrap_or_else(|| POST_REJECTED.into()),
        )
    }
}

crate::reqwest_error_handler!(SavePostError);

#[derive(Copy, Clone, Debug, thiserror::Error, PartialEq, Eq)]
pub enum DeletePostError {
    #[error("{}", OTHER_MESSAGE)]
    Other,
}

crate::reqwest_error_handler!(DeletePostError);
