//! Static definitions document.
//!
//! Deployments ship a JSON document with UI option lists, filter defaults,
//! and prompt templates. Every field is optional; missing prompt templates
//! fall back to the hardcoded defaults below.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ClientError;

/// One selectable option from the definitions document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StaticOption {
    pub value: String,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FilterDefaults {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_relevance_score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_documents_per_source: Option<u32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Definitions {
    #[serde(default)]
    pub task_statuses: Vec<StaticOption>,
    #[serde(default)]
    pub notification_channels: Vec<StaticOption>,
    #[serde(default)]
    pub document_sort_options: Vec<StaticOption>,
    #[serde(default)]
    pub summary_display_modes: Vec<StaticOption>,
    #[serde(default)]
    pub ai_providers: Vec<StaticOption>,
    #[serde(default)]
    pub retrieval_sources: Vec<StaticOption>,
    #[serde(default)]
    pub filter_defaults: FilterDefaults,
    #[serde(default)]
    pub prompts: HashMap<String, String>,
}

/// Default relevance-filtering prompt, used when the definitions document
/// omits the `filter_default` template.
pub const FALLBACK_FILTER_PROMPT: &str = "\
Read the full document record, especially the abstract, then evaluate:

1. Relevance (is_selected): is the document directly related to the research \
topic and does it contain the required information or methods? Return true or \
false.

2. Relevance score (score): a value between 0 and 1. 0.8-1.0 highly relevant \
core literature; 0.6-0.8 moderately relevant; 0.4-0.6 marginally relevant; \
below 0.4 essentially unrelated.

3. Summary (summary): one or two sentences on the core content and why the \
document was selected or rejected.

4. Highlights (highlights): two to four key findings or innovations most \
relevant to the research topic.";

/// Default summarization prompt, used when the definitions document omits
/// the `summary_default` template.
pub const FALLBACK_SUMMARY_PROMPT: &str = "\
Produce an in-depth synthesis of the filtered documents:

1. Trend summary (trend_summary): the field's main directions, hot topics, \
and methodological evolution, in two or three coherent paragraphs.

2. Rankings (rankings): documents ordered by importance and relevance with \
the core contribution of each, at most ten entries.

3. Sections (sections): documents grouped by topic or methodology, four to \
six groups with short descriptions.

4. Key insights (key_insights): five to eight findings and innovations worth \
attention.

5. Research directions (research_directions): three to five suggested future \
directions and gaps.";

impl Definitions {
    /// Loads the definitions document from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ClientError> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    pub fn filter_prompt(&self) -> &str {
        self.prompts
            .get("filter_default")
            .map(String::as_str)
            .unwrap_or(FALLBACK_FILTER_PROMPT)
    }

    pub fn summary_prompt(&self) -> &str {
        self.prompts
            .get("summary_default")
            .map(String::as_str)
            .unwrap_or(FALLBACK_SUMMARY_PROMPT)
    }

    /// Display label for a task status value, when the document defines one.
    pub fn task_status_label(&self, status: &str) -> Option<&str> {
        self.task_statuses
            .iter()
            .find(|option| option.value == status)
            .map(|option| option.label.as_str())
    }

    /// Icon name for a notification channel, when the document defines one.
    pub fn notification_channel_icon(&self, channel: &str) -> Option<&str> {
        self.notification_channels
            .iter()
            .find(|option| option.value == channel)
            .and_then(|option| option.icon.as_deref())
    }
}
