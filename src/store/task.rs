use super::ActionState;
use crate::api::tasks::KeywordSuggestRequest;
use crate::api::TasksApi;
use crate::error::ClientError;
use crate::types::{RestartConfig, Task, TaskDraft, TaskStatus};

/// Read-through cache of the task collection.
#[derive(Debug)]
pub struct TaskStore {
    api: TasksApi,
    tasks: Vec<Task>,
    archived: Vec<Task>,
    current: Option<Task>,
    state: ActionState,
}

impl TaskStore {
    pub fn new(api: TasksApi) -> Self {
        Self {
            api,
            tasks: Vec::new(),
            archived: Vec::new(),
            current: None,
            state: ActionState::default(),
        }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn archived(&self) -> &[Task] {
        &self.archived
    }

    pub fn current(&self) -> Option<&Task> {
        self.current.as_ref()
    }

    pub fn loading(&self) -> bool {
        self.state.loading()
    }

    pub fn error(&self) -> Option<&str> {
        self.state.error()
    }

    pub fn active_tasks(&self) -> Vec<&Task> {
        self.tasks.iter().filter(|t| t.status == TaskStatus::Active).collect()
    }

    pub fn inactive_tasks(&self) -> Vec<&Task> {
        self.tasks.iter().filter(|t| t.status == TaskStatus::Inactive).collect()
    }

    pub async fn fetch_tasks(&mut self) -> Result<&[Task], ClientError> {
        self.state.begin();
        let result = self.api.list().await;
        self.tasks = self.state.settle(result, "Failed to load tasks")?;
        Ok(&self.tasks)
    }

    pub async fn fetch_archived_tasks(&mut self) -> Result<&[Task], ClientError> {
        self.state.begin();
        let result = self.api.list_archived().await;
        self.archived = self.state.settle(result, "Failed to load archived tasks")?;
        Ok(&self.archived)
    }

    pub async fn fetch_task(&mut self, id: i64) -> Result<Task, ClientError> {
        self.state.begin();
        let result = self.api.get(id).await;
        let task = self.state.settle(result, "Failed to load task details")?;
        self.current = Some(task.clone());
        Ok(task)
    }

    pub async fn create_task(&mut self, draft: &TaskDraft) -> Result<Task, ClientError> {
        self.state.begin();
        let result = self.api.create(draft).await;
        let task = self.state.settle(result, "Failed to create task")?;
        self.tasks.push(task.clone());
        Ok(task)
    }

    pub async fn update_task(&mut self, id: i64, draft: &TaskDraft) -> Result<Task, ClientError> {
        self.state.begin();
        let result = self.api.update(id, draft).await;
        let task = self.state.settle(result, "Failed to update task")?;
        Ok(self.absorb(task))
    }

    pub async fn delete_task(&mut self, id: i64) -> Result<(), ClientError> {
        self.state.begin();
        let result = self.api.delete(id).await;
        self.state.settle(result, "Failed to delete task")?;
        self.tasks.retain(|t| t.id != id);
        if self.current.as_ref().map(|t| t.id) == Some(id) {
            self.current = None;
        }
        Ok(())
    }

    /// Archives the task and drops it from the active list.
    pub async fn archive_task(&mut self, id: i64) -> Result<Task, ClientError> {
        self.state.begin();
        let result = self.api.archive(id).await;
        let task = self.state.settle(result, "Failed to archive task")?;
        self.tasks.retain(|t| t.id != id);
        if self.current.as_ref().map(|t| t.id) == Some(id) {
            self.current = None;
        }
        self.archived.push(task.clone());
        Ok(task)
    }

    pub async fn start_task(&mut self, id: i64) -> Result<Task, ClientError> {
        self.state.begin();
        let result = self.api.start(id).await;
        let task = self.state.settle(result, "Failed to start task")?;
        Ok(self.absorb(task))
    }

    pub async fn stop_task(&mut self, id: i64) -> Result<Task, ClientError> {
        self.state.begin();
        let result = self.api.stop(id).await;
        let task = self.state.settle(result, "Failed to stop task")?;
        Ok(self.absorb(task))
    }

    pub async fn restart_task(
        &mut self,
        id: i64,
        config: &RestartConfig,
    ) -> Result<Task, ClientError> {
        self.state.begin();
        let result = self.api.restart(id, config).await;
        let task = self.state.settle(result, "Failed to restart task")?;
        Ok(self.absorb(task))
    }

    /// Passthrough to keyword suggestion; nothing is cached.
    pub async fn suggest_keywords(
        &mut self,
        prompt: &str,
        max_keywords: Option<u32>,
    ) -> Result<Vec<String>, ClientError> {
        self.state.begin();
        let result = self
            .api
            .suggest_keywords(&KeywordSuggestRequest { prompt, max_keywords })
            .await;
        self.state.settle(result, "Failed to suggest keywords")
    }

    /// Replaces the task in the list and in `current` when ids match.
    fn absorb(&mut self, task: Task) -> Task {
        if let Some(existing) = self.tasks.iter_mut().find(|t| t.id == task.id) {
            *existing = task.clone();
        }
        if self.current.as_ref().map(|t| t.id) == Some(task.id) {
            self.current = Some(task.clone());
        }
        task
    }
}
