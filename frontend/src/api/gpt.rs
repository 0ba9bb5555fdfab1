use std::fmt;

use codecure_shared::api::{gpt, path};
use reqwest::StatusCode;

use crate::pages::Message;

use super::{ApiClient, OTHER_MESSAGE};

crate::form_model!(PromptModel { message: Message });

impl ApiClient {
    /// Forwards one message to the backend's text generation proxy.
    pub async fn gpt_response(&self, model: PromptModel) -> Result<Reply, GptError> {
        let request = gpt::Request {
            message: model.message.0,
        };

        let response = self
            .post(crate::url!(self, "{}", path::GPT))
            .json(&request)
            .send()
            .await?;

        match response.status() {
            StatusCode::OK => Ok(Reply(response.json::<gpt::Response>().await?.response)),
            _ => crate::reqwest_unexpected_status!(response, GptError),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply(pub String);

impl fmt::Display for Reply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Copy, Clone, Debug, thiserror::Error, PartialEq, Eq)]
pub enum GptError {
    #[error("{}", OTHER_MESSAGE)]
    Other,
}

crate::reqwest_error_handler!(GptError);
