use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: i32,
    pub name: String,
    pub email: Option<String>,
    pub is_admin: bool,
}

/// Visitor session as reported by `/api/system/auth/session`
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SessionInfo {
    /// Signed-in user, `None` for anonymous visitors
    pub user: Option<UserInfo>,
    /// Board is locked; nothing may be composed
    #[serde(default)]
    pub is_read_only: bool,
}
