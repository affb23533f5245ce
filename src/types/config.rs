use serde::{Deserialize, Serialize};

use super::CommentTemplate;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub comment: CommentConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            general: GeneralConfig::default(),
            comment: CommentConfig::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// `tracing` filter for `init_tracing_from_config` when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

fn default_log_filter() -> String {
    "warn".to_string()
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_filter: default_log_filter(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommentConfig {
    /// Comment template; `{cursor}` separates the start and end markers.
    #[serde(default = "default_template")]
    pub template: String,
    /// Treat a cursor sitting exactly on a word boundary as inside the word.
    #[serde(default)]
    pub word_only: bool,
}

fn default_template() -> String {
    "%% {cursor} %%".to_string()
}

impl Default for CommentConfig {
    fn default() -> Self {
        Self {
            template: default_template(),
            word_only: false,
        }
    }
}

impl CommentConfig {
    pub fn template(&self) -> CommentTemplate {
        CommentTemplate::parse(&self.template)
    }
}
