//! Shared domain types matching the Litea backend API schemas.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The `{"data": ...}` envelope most endpoints wrap their payload in.
#[derive(Debug, Clone, Deserialize)]
pub struct Data<T> {
    pub data: T,
}

/// Paginated document listings:
/// `{"data": {"items": [...], "total": n}, "pagination": {...}}`.
#[derive(Debug, Clone, Deserialize)]
pub struct Page<T> {
    pub data: PageItems<T>,
    #[serde(default)]
    pub pagination: Option<PageBounds>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PageItems<T> {
    pub items: Vec<T>,
    pub total: i64,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct PageBounds {
    #[serde(default)]
    pub limit: Option<i64>,
    #[serde(default)]
    pub offset: Option<i64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    Inactive,
    Active,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskKeyword {
    pub keyword: String,
    pub is_user_defined: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskSourceRef {
    pub source_name: String,
    #[serde(default)]
    pub parameters: Value,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub id: i64,
    pub name: String,
    pub prompt: String,
    #[serde(default)]
    pub keywords: Vec<TaskKeyword>,
    #[serde(default)]
    pub sources: Vec<TaskSourceRef>,
    #[serde(default)]
    pub run_at_hour: Option<i32>,
    #[serde(default)]
    pub run_at_minute: Option<i32>,
    #[serde(default)]
    pub run_timezone: Option<String>,
    /// Notification settings; deployment-specific shape, kept opaque.
    #[serde(default)]
    pub notification: Option<Value>,
    #[serde(default)]
    pub ai_config: Option<Value>,
    #[serde(default)]
    pub filter_config: Option<Value>,
    #[serde(default)]
    pub summary_config: Option<Value>,
    pub status: TaskStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub last_run_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub next_run_at: Option<DateTime<Utc>>,
}

/// Create/update payload for a task. The backend fills defaults for omitted
/// optional fields.
#[derive(Debug, Clone, Default, Serialize)]
pub struct TaskDraft {
    pub name: String,
    pub prompt: String,
    pub keywords: Vec<TaskKeyword>,
    pub sources: Vec<TaskSourceRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub run_at_hour: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub run_at_minute: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub run_timezone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notification: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TaskStatus>,
}

/// Schedule/notification overrides accepted by `POST /tasks/{id}/restart`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RestartConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub run_at_hour: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notification_config: Option<Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    pub id: i64,
    pub task_id: i64,
    #[serde(default)]
    pub run_id: Option<i64>,
    #[serde(alias = "source")]
    pub source_name: String,
    pub external_id: String,
    pub title: String,
    #[serde(default)]
    pub authors: Vec<String>,
    #[serde(rename = "abstract", default)]
    pub abstract_text: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub pdf_url: Option<String>,
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub citation_count: Option<i64>,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub user_keywords: Vec<String>,
    #[serde(default)]
    pub extra_metadata: Option<Value>,
    /// Relevance-filter outcome, absent until the filtering agent has run.
    #[serde(default)]
    pub is_filtered_in: Option<bool>,
    #[serde(default)]
    pub rank_score: Option<f64>,
    #[serde(default)]
    pub zotero_key: Option<String>,
    #[serde(default)]
    pub summary: Option<DocumentSummary>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentSummary {
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub highlights: Vec<String>,
    #[serde(default)]
    pub research_trends: Vec<String>,
    #[serde(default)]
    pub agent_metadata: Option<Value>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Query filters for document listings. Unset fields are omitted from the
/// query string.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DocumentFilters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyword: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetrievalSource {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub enabled: Option<bool>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OverviewStats {
    pub total_documents: i64,
    pub active_tasks: i64,
    pub total_tasks: i64,
    pub documents_this_week: i64,
    pub week_growth_rate: f64,
    pub avg_citations: f64,
    #[serde(default)]
    pub time_range: Option<String>,
}

/// One point of a document-count time series. Dates arrive as ISO strings;
/// the backend mixes date-only and datetime renderings, so the raw string is
/// kept.
#[derive(Debug, Clone, Deserialize)]
pub struct TrendPoint {
    pub date: String,
    pub count: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TaskTrends {
    pub task_id: i64,
    pub period_days: i64,
    #[serde(default)]
    pub trends: Vec<TrendPoint>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GlobalTrends {
    pub period_days: i64,
    #[serde(default)]
    pub trends: Vec<TrendPoint>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct KeywordCount {
    pub keyword: String,
    pub count: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct KeywordDistribution {
    pub task_id: i64,
    #[serde(default)]
    pub keywords: Vec<KeywordCount>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SourceCount {
    #[serde(alias = "source")]
    pub source_name: String,
    pub count: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SourceDistribution {
    pub task_id: i64,
    #[serde(default)]
    pub sources: Vec<SourceCount>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GlobalSources {
    #[serde(default)]
    pub sources: Vec<SourceCount>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScoreBucket {
    pub range: String,
    pub count: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScoreDistribution {
    pub avg_score: f64,
    #[serde(default)]
    pub distribution: Vec<ScoreBucket>,
}

/// Result of a Zotero export; `results` holds one key per exported document,
/// `None` where the export of that document failed.
#[derive(Debug, Clone, Deserialize)]
pub struct ZoteroExport {
    pub exported: i64,
    #[serde(default)]
    pub results: Vec<Option<String>>,
}
