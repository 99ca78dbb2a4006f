use super::ActionState;
use crate::api::AnalyticsApi;
use crate::error::ClientError;
use crate::types::{KeywordCount, OverviewStats, SourceCount, TrendPoint};

/// Default window for keyword distributions when fetching everything at once.
const DEFAULT_KEYWORD_LIMIT: u32 = 20;

/// Holds the analytics slices for the currently inspected task.
#[derive(Debug)]
pub struct AnalyticsStore {
    api: AnalyticsApi,
    overview: Option<OverviewStats>,
    trends: Vec<TrendPoint>,
    keywords: Vec<KeywordCount>,
    sources: Vec<SourceCount>,
    state: ActionState,
}

impl AnalyticsStore {
    pub fn new(api: AnalyticsApi) -> Self {
        Self {
            api,
            overview: None,
            trends: Vec::new(),
            keywords: Vec::new(),
            sources: Vec::new(),
            state: ActionState::default(),
        }
    }

    pub fn overview(&self) -> Option<&OverviewStats> {
        self.overview.as_ref()
    }

    pub fn trends(&self) -> &[TrendPoint] {
        &self.trends
    }

    pub fn keywords(&self) -> &[KeywordCount] {
        &self.keywords
    }

    pub fn sources(&self) -> &[SourceCount] {
        &self.sources
    }

    pub fn loading(&self) -> bool {
        self.state.loading()
    }

    pub fn error(&self) -> Option<&str> {
        self.state.error()
    }

    pub async fn fetch_overview(&mut self) -> Result<OverviewStats, ClientError> {
        self.state.begin();
        let result = self.api.overview().await;
        let overview = self.state.settle(result, "Failed to load overview statistics")?;
        self.overview = Some(overview.clone());
        Ok(overview)
    }

    pub async fn fetch_task_trends(
        &mut self,
        task_id: i64,
        days: u32,
    ) -> Result<&[TrendPoint], ClientError> {
        self.state.begin();
        let result = self.api.task_trends(task_id, days).await;
        self.trends = self.state.settle(result, "Failed to load trend data")?.trends;
        Ok(&self.trends)
    }

    pub async fn fetch_keyword_distribution(
        &mut self,
        task_id: i64,
        limit: u32,
    ) -> Result<&[KeywordCount], ClientError> {
        self.state.begin();
        let result = self.api.keyword_distribution(task_id, limit).await;
        self.keywords = self
            .state
            .settle(result, "Failed to load keyword distribution")?
            .keywords;
        Ok(&self.keywords)
    }

    pub async fn fetch_source_distribution(
        &mut self,
        task_id: i64,
    ) -> Result<&[SourceCount], ClientError> {
        self.state.begin();
        let result = self.api.source_distribution(task_id).await;
        self.sources = self
            .state
            .settle(result, "Failed to load source distribution")?
            .sources;
        Ok(&self.sources)
    }

    /// Fan-out over the three task-scoped analytics fetches. The aggregate
    /// fails if any one fails; no partial results are stored.
    pub async fn fetch_all(&mut self, task_id: i64, days: u32) -> Result<(), ClientError> {
        self.state.begin();
        let result = tokio::try_join!(
            self.api.task_trends(task_id, days),
            self.api.keyword_distribution(task_id, DEFAULT_KEYWORD_LIMIT),
            self.api.source_distribution(task_id),
        );
        let (trends, keywords, sources) = self.state.settle(result, "Failed to load analytics")?;
        self.trends = trends.trends;
        self.keywords = keywords.keywords;
        self.sources = sources.sources;
        Ok(())
    }
}
