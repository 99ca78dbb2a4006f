use std::collections::HashSet;

use serde_json::Value;

use super::ActionState;
use crate::api::DocumentsApi;
use crate::error::ClientError;
use crate::types::{Document, DocumentFilters, ZoteroExport};

/// Read-through cache of document listings, with selection tracking for
/// bulk operations.
#[derive(Debug)]
pub struct DocumentStore {
    api: DocumentsApi,
    documents: Vec<Document>,
    current: Option<Document>,
    total: i64,
    selected: HashSet<i64>,
    state: ActionState,
}

impl DocumentStore {
    pub fn new(api: DocumentsApi) -> Self {
        Self {
            api,
            documents: Vec::new(),
            current: None,
            total: 0,
            selected: HashSet::new(),
            state: ActionState::default(),
        }
    }

    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    pub fn current(&self) -> Option<&Document> {
        self.current.as_ref()
    }

    pub fn total(&self) -> i64 {
        self.total
    }

    pub fn loading(&self) -> bool {
        self.state.loading()
    }

    pub fn error(&self) -> Option<&str> {
        self.state.error()
    }

    pub fn selected(&self) -> &HashSet<i64> {
        &self.selected
    }

    pub async fn fetch_documents(
        &mut self,
        filters: &DocumentFilters,
    ) -> Result<&[Document], ClientError> {
        self.state.begin();
        let result = self.api.list(filters).await;
        let page = self.state.settle(result, "Failed to load documents")?;
        self.documents = page.data.items;
        self.total = page.data.total;
        Ok(&self.documents)
    }

    pub async fn fetch_document(&mut self, id: i64) -> Result<Document, ClientError> {
        self.state.begin();
        let result = self.api.get(id).await;
        let document = self.state.settle(result, "Failed to load document details")?;
        self.current = Some(document.clone());
        Ok(document)
    }

    /// Passthrough to the metadata scrape; nothing is cached.
    pub async fn fetch_document_detail(&mut self, id: i64) -> Result<Value, ClientError> {
        self.state.begin();
        let result = self.api.get_detail(id).await;
        self.state.settle(result, "Failed to load document metadata")
    }

    pub async fn fetch_task_documents(
        &mut self,
        task_id: i64,
        filters: &DocumentFilters,
    ) -> Result<&[Document], ClientError> {
        self.state.begin();
        let result = self.api.list_for_task(task_id, filters).await;
        let page = self.state.settle(result, "Failed to load task documents")?;
        self.documents = page.data.items;
        self.total = page.data.total;
        Ok(&self.documents)
    }

    pub async fn export_to_zotero(
        &mut self,
        document_ids: &[i64],
        collection_name: Option<&str>,
    ) -> Result<ZoteroExport, ClientError> {
        self.state.begin();
        let result = self.api.export_to_zotero(document_ids, collection_name).await;
        self.state.settle(result, "Failed to export to Zotero")
    }

    pub fn toggle_selection(&mut self, id: i64) {
        if !self.selected.insert(id) {
            self.selected.remove(&id);
        }
    }

    /// Selects every document currently in the listing.
    pub fn select_all(&mut self) {
        self.selected.extend(self.documents.iter().map(|d| d.id));
    }

    pub fn clear_selection(&mut self) {
        self.selected.clear();
    }
}
