use contracts::domain::a001_tag::Tag;

use crate::shared::api_utils::get_json;
use crate::system::auth::storage;

/// Tags the board offers for new posts
pub async fn fetch_tags() -> Result<Vec<Tag>, String> {
    let token = storage::get_access_token();
    get_json::<Vec<Tag>>("/api/v1/tags", token.as_deref()).await
}
