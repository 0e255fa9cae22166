use contracts::system::auth::SessionInfo;

use crate::shared::api_utils::get_json;

pub const SESSION_PATH: &str = "/api/system/auth/session";

/// Fetch the visitor session. Anonymous visitors get `user: None`.
pub async fn fetch_session(access_token: Option<&str>) -> Result<SessionInfo, String> {
    get_json::<SessionInfo>(SESSION_PATH, access_token).await
}

