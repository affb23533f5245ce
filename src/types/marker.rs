use serde::{Deserialize, Serialize};

use crate::atoms::text::normalize;

/// Placeholder that splits a comment template into its two halves.
pub const CURSOR_PLACEHOLDER: &str = "{cursor}";

/// A start/end delimiter pair denoting a commented region.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MarkerSet {
    pub start: String,
    #[serde(default)]
    pub end: String,
}

impl MarkerSet {
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }

    /// Both markers with whitespace runs collapsed and ends trimmed.
    pub fn normalized(&self) -> Self {
        Self {
            start: normalize(&self.start),
            end: normalize(&self.end),
        }
    }

    /// An empty start marker disables detection and insertion.
    pub fn is_disabled(&self) -> bool {
        self.start.is_empty()
    }

    pub fn has_end(&self) -> bool {
        !self.end.is_empty()
    }

    pub fn is_symmetric(&self) -> bool {
        self.start == self.end
    }
}

/// A comment template such as `%% {cursor} %%`, split around the placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentTemplate {
    pub before: String,
    pub after: String,
}

impl CommentTemplate {
    /// Split `template` at the first `{cursor}`. Without a placeholder the
    /// whole template is the `before` half.
    pub fn parse(template: &str) -> Self {
        match template.split_once(CURSOR_PLACEHOLDER) {
            Some((before, after)) => Self {
                before: before.to_string(),
                after: after.to_string(),
            },
            None => Self {
                before: template.to_string(),
                after: String::new(),
            },
        }
    }

    /// The marker pair this template toggles.
    pub fn markers(&self) -> MarkerSet {
        MarkerSet::new(&self.before, &self.after).normalized()
    }
}
