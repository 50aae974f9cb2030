use serde::{Deserialize, Serialize};

/// JSON envelope every API endpoint answers with.
///
/// `needs_config` is set when the server has no database configured yet;
/// `auth_required` accompanies a 401 response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    #[serde(default)]
    pub success: bool,

    // Missing reads as `None`; `default` would add a `T: Default` bound.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub needs_config: bool,

    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub auth_required: bool,
}

impl<T> Envelope<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
            needs_config: false,
            auth_required: false,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            message: Some(message.into()),
            needs_config: false,
            auth_required: false,
        }
    }
}
