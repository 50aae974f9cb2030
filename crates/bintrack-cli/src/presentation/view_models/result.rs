use serde::Serialize;

use super::common::{Guidance, StatusBadge};

/// What a one-shot command hands to the renderer.
///
/// `content` is the only part the HTML format emits; plain text adds the
/// badge above it and the tips below.
#[derive(Debug, Serialize)]
pub struct CommandResultViewModel<T: Serialize> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub badge: Option<StatusBadge>,
    pub content: T,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub suggestions: Vec<Guidance>,
}

impl<T: Serialize> CommandResultViewModel<T> {
    pub fn new(content: T) -> Self {
        Self {
            badge: None,
            content,
            suggestions: Vec::new(),
        }
    }

    pub fn with_badge(mut self, badge: StatusBadge) -> Self {
        self.badge = Some(badge);
        self
    }

    pub fn with_suggestion(mut self, tip: Guidance) -> Self {
        self.suggestions.push(tip);
        self
    }
}
