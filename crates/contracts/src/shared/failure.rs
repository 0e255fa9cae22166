use serde::{Deserialize, Serialize};

/// Result of a board action such as create-post
pub type ActionResult<T> = Result<T, ActionError>;

/// One error entry of a failed action; `field` is empty for form-level errors
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailureError {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub field: Option<String>,
    pub message: String,
}

/// Structured failure returned by the board API (HTTP 400 body)
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Failure {
    #[serde(default)]
    pub errors: Vec<FailureError>,
}

impl Failure {
    pub fn for_field(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            errors: vec![FailureError {
                field: Some(field.into()),
                message: message.into(),
            }],
        }
    }

    pub fn general(message: impl Into<String>) -> Self {
        Self {
            errors: vec![FailureError {
                field: None,
                message: message.into(),
            }],
        }
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Messages attached to a given form field
    pub fn field_messages<'a>(&'a self, field: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.errors
            .iter()
            .filter(move |e| e.field.as_deref() == Some(field))
            .map(|e| e.message.as_str())
    }

    /// Messages not bound to any field
    pub fn general_messages(&self) -> impl Iterator<Item = &str> {
        self.errors
            .iter()
            .filter(|e| e.field.is_none())
            .map(|e| e.message.as_str())
    }
}

/// Why an action did not produce a result
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionError {
    /// Server rejected the input with a structured payload
    Failure(Failure),
    /// Network, status or decoding problem with no structured payload
    Transport(String),
}

impl ActionError {
    pub fn failure(&self) -> Option<&Failure> {
        match self {
            ActionError::Failure(f) if !f.is_empty() => Some(f),
            _ => None,
        }
    }
}

impl std::fmt::Display for ActionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ActionError::Failure(failure) => {
                write!(f, "request rejected")?;
                for e in &failure.errors {
                    match &e.field {
                        Some(field) => write!(f, "; {}: {}", field, e.message)?,
                        None => write!(f, "; {}", e.message)?,
                    }
                }
                Ok(())
            }
            ActionError::Transport(msg) => write!(f, "transport error: {}", msg),
        }
    }
}

impl std::error::Error for ActionError {}
