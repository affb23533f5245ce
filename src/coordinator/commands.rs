use crate::molecules::editor::{Document, EditorHost};
use crate::types::{CommentConfig, CommentTemplate, MarkerSet, Range, ToggleAction};

use super::toggle_engine::toggle;

/// The two editor commands, bound to a comment template.
///
/// Holds configuration only. Every call reads the host's live state.
#[derive(Debug, Clone)]
pub struct CommentCommands {
    template: CommentTemplate,
    word_only: bool,
}

impl CommentCommands {
    pub fn new(template: CommentTemplate, word_only: bool) -> Self {
        Self {
            template,
            word_only,
        }
    }

    pub fn from_config(config: &CommentConfig) -> Self {
        Self::new(config.template(), config.word_only)
    }

    pub fn template(&self) -> &CommentTemplate {
        &self.template
    }

    pub fn word_only(&self) -> bool {
        self.word_only
    }

    /// Comment or uncomment around the selection, word or cursor. Uses the
    /// template's markers when `markers` is `None`.
    pub fn toggle_comment<H: EditorHost + ?Sized>(
        &self,
        host: &mut H,
        markers: Option<&MarkerSet>,
    ) -> Option<ToggleAction> {
        let markers = markers
            .cloned()
            .unwrap_or_else(|| self.template.markers());
        let action = toggle(host, &markers, self.word_only);
        tracing::debug!(?action, start = %markers.start, end = %markers.end, "toggle_comment");
        action
    }

    /// Insert the template at the cursor, replacing any selection, and put
    /// the cursor where `{cursor}` was. No detection is done.
    pub fn insert_comment<H: EditorHost + ?Sized>(&self, host: &mut H) {
        let range = host
            .selection()
            .unwrap_or_else(|| Range::point(host.cursor()));
        let text = format!("{}{}", self.template.before, self.template.after);

        host.replace_range(range, &text);
        let cursor = host.clamp(range.from.after_text(&self.template.before));
        host.set_cursor(cursor);
        tracing::debug!(?cursor, "insert_comment");
    }
}

impl Default for CommentCommands {
    fn default() -> Self {
        Self::from_config(&CommentConfig::default())
    }
}
