use serde::{Deserialize, Serialize};

// ============================================================================
// ID Type
// ============================================================================

/// Board tag identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TagId(pub i32);

impl TagId {
    pub fn new(value: i32) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i32 {
        self.0
    }
}

// ============================================================================
// Aggregate
// ============================================================================

/// Tag owned by the board; the composer only reads it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub id: TagId,
    pub name: String,
    /// Stable short identifier sent in create-post payloads
    pub slug: String,
    /// Hex color without the leading `#`
    pub color: String,
    #[serde(rename = "isPublic", default = "default_is_public")]
    pub is_public: bool,
}

fn default_is_public() -> bool {
    true
}

impl Tag {
    pub fn new(id: i32, name: impl Into<String>, slug: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            id: TagId::new(id),
            name: name.into(),
            slug: slug.into(),
            color: color.into(),
            is_public: true,
        }
    }

    /// CSS color value for the tag dot
    pub fn css_color(&self) -> String {
        if self.color.is_empty() {
            "#cccccc".to_string()
        } else {
            format!("#{}", self.color.trim_start_matches('#'))
        }
    }
}
