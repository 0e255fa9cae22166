use contracts::domain::a002_post::{CreatePostRequest, CreatePostResponse};
use contracts::shared::{ActionError, ActionResult, Failure};
use gloo_net::http::Request;

use crate::shared::api_utils::{api_url, bearer};
use crate::system::auth::storage;

/// Create a post on the board
pub async fn create_post(request: &CreatePostRequest) -> ActionResult<CreatePostResponse> {
    let mut builder = Request::post(&api_url("/api/v1/posts"));
    if let Some(token) = storage::get_access_token() {
        builder = builder.header("Authorization", &bearer(&token));
    }

    let response = builder
        .json(request)
        .map_err(|e| ActionError::Transport(format!("Failed to serialize request: {}", e)))?
        .send()
        .await
        .map_err(|e| ActionError::Transport(format!("Failed to send request: {}", e)))?;

    match response.status() {
        200..=299 => response
            .json::<CreatePostResponse>()
            .await
            .map_err(|e| ActionError::Transport(format!("Failed to parse response: {}", e))),
        400 => match response.json::<Failure>().await {
            Ok(failure) => Err(ActionError::Failure(failure)),
            Err(e) => Err(ActionError::Transport(format!(
                "Failed to parse failure: {}",
                e
            ))),
        },
        status => Err(ActionError::Transport(format!(
            "Create post failed: {}",
            status
        ))),
    }
}
