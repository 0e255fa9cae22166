use serde::{Deserialize, Serialize};

// ============================================================================
// Attachments
// ============================================================================

/// Raw file content of a pending upload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageUploadData {
    #[serde(rename = "fileName")]
    pub file_name: String,
    #[serde(rename = "contentType")]
    pub content_type: String,
    /// Base64-encoded file bytes
    pub content: String,
}

/// Image attachment as the board API accepts it.
///
/// `bkey` points at an image that is already stored, `upload` carries a new one.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ImageUpload {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub bkey: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub upload: Option<ImageUploadData>,
    #[serde(default)]
    pub remove: bool,
}

impl ImageUpload {
    pub fn new_upload(
        file_name: impl Into<String>,
        content_type: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            bkey: None,
            upload: Some(ImageUploadData {
                file_name: file_name.into(),
                content_type: content_type.into(),
                content: content.into(),
            }),
            remove: false,
        }
    }

    pub fn file_name(&self) -> Option<&str> {
        self.upload.as_ref().map(|u| u.file_name.as_str())
    }
}

// ============================================================================
// Create post
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatePostRequest {
    pub title: String,
    pub description: String,
    pub attachments: Vec<ImageUpload>,
    /// Tag slugs
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatePostResponse {
    #[serde(default)]
    pub id: i32,
    pub number: i32,
    #[serde(default)]
    pub title: String,
    pub slug: String,
}

impl CreatePostResponse {
    /// Path of the newly created post page
    pub fn location(&self) -> String {
        format!("/posts/{}/{}", self.number, self.slug)
    }
}
