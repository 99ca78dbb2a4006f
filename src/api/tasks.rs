use serde::Serialize;

use crate::client::ApiClient;
use crate::error::ClientError;
use crate::types::{Data, RestartConfig, Task, TaskDraft};

/// Typed wrappers over the `/tasks` endpoints.
#[derive(Debug, Clone)]
pub struct TasksApi {
    client: ApiClient,
}

#[derive(Debug, Clone, Serialize)]
pub struct KeywordSuggestRequest<'a> {
    pub prompt: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_keywords: Option<u32>,
}

impl TasksApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Lists active (non-archived) tasks.
    pub async fn list(&self) -> Result<Vec<Task>, ClientError> {
        Ok(self.client.get::<Data<Vec<Task>>>("tasks").await?.data)
    }

    pub async fn list_archived(&self) -> Result<Vec<Task>, ClientError> {
        Ok(self.client.get::<Data<Vec<Task>>>("tasks/archived").await?.data)
    }

    pub async fn get(&self, id: i64) -> Result<Task, ClientError> {
        Ok(self.client.get::<Data<Task>>(&format!("tasks/{id}")).await?.data)
    }

    pub async fn create(&self, draft: &TaskDraft) -> Result<Task, ClientError> {
        Ok(self.client.post::<Data<Task>, _>("tasks", draft).await?.data)
    }

    pub async fn update(&self, id: i64, draft: &TaskDraft) -> Result<Task, ClientError> {
        Ok(self.client.put::<Data<Task>, _>(&format!("tasks/{id}"), draft).await?.data)
    }

    /// Permanently deletes the task and its documents.
    pub async fn delete(&self, id: i64) -> Result<(), ClientError> {
        self.client.delete(&format!("tasks/{id}")).await
    }

    /// Archives the task without deleting it or its documents.
    pub async fn archive(&self, id: i64) -> Result<Task, ClientError> {
        Ok(self.client.post_empty::<Data<Task>>(&format!("tasks/{id}/archive")).await?.data)
    }

    pub async fn start(&self, id: i64) -> Result<Task, ClientError> {
        Ok(self.client.post_empty::<Data<Task>>(&format!("tasks/{id}/start")).await?.data)
    }

    pub async fn stop(&self, id: i64) -> Result<Task, ClientError> {
        Ok(self.client.post_empty::<Data<Task>>(&format!("tasks/{id}/stop")).await?.data)
    }

    pub async fn restart(&self, id: i64, config: &RestartConfig) -> Result<Task, ClientError> {
        Ok(self
            .client
            .post::<Data<Task>, _>(&format!("tasks/{id}/restart"), config)
            .await?
            .data)
    }

    /// AI keyword suggestions for a research prompt.
    pub async fn suggest_keywords(
        &self,
        request: &KeywordSuggestRequest<'_>,
    ) -> Result<Vec<String>, ClientError> {
        Ok(self
            .client
            .post::<Data<Vec<String>>, _>("tasks/keywords/suggest", request)
            .await?
            .data)
    }
}
