use crate::client::ApiClient;
use crate::error::ClientError;
use crate::types::{
    Data, GlobalSources, GlobalTrends, KeywordDistribution, OverviewStats, ScoreDistribution,
    SourceCount, SourceDistribution, TaskTrends,
};

/// Typed wrappers over the `/analytics` endpoints.
#[derive(Debug, Clone)]
pub struct AnalyticsApi {
    client: ApiClient,
}

impl AnalyticsApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Dashboard overview statistics.
    pub async fn overview(&self) -> Result<OverviewStats, ClientError> {
        Ok(self.client.get::<Data<OverviewStats>>("analytics/overview").await?.data)
    }

    pub async fn global_trends(&self, days: u32) -> Result<GlobalTrends, ClientError> {
        Ok(self
            .client
            .get_query::<Data<GlobalTrends>, _>("analytics/trends", &[("days", days)])
            .await?
            .data)
    }

    pub async fn global_sources(&self) -> Result<Vec<SourceCount>, ClientError> {
        Ok(self
            .client
            .get::<Data<GlobalSources>>("analytics/sources")
            .await?
            .data
            .sources)
    }

    pub async fn global_scores(&self) -> Result<ScoreDistribution, ClientError> {
        Ok(self.client.get::<Data<ScoreDistribution>>("analytics/scores").await?.data)
    }

    pub async fn task_trends(&self, task_id: i64, days: u32) -> Result<TaskTrends, ClientError> {
        Ok(self
            .client
            .get_query::<Data<TaskTrends>, _>(
                &format!("analytics/tasks/{task_id}/trends"),
                &[("days", days)],
            )
            .await?
            .data)
    }

    pub async fn keyword_distribution(
        &self,
        task_id: i64,
        limit: u32,
    ) -> Result<KeywordDistribution, ClientError> {
        Ok(self
            .client
            .get_query::<Data<KeywordDistribution>, _>(
                &format!("analytics/tasks/{task_id}/keywords"),
                &[("limit", limit)],
            )
            .await?
            .data)
    }

    pub async fn source_distribution(&self, task_id: i64) -> Result<SourceDistribution, ClientError> {
        Ok(self
            .client
            .get::<Data<SourceDistribution>>(&format!("analytics/tasks/{task_id}/sources"))
            .await?
            .data)
    }
}
