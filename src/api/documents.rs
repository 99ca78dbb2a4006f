use serde::Serialize;
use serde_json::Value;

use crate::client::ApiClient;
use crate::error::ClientError;
use crate::types::{Data, Document, DocumentFilters, Page, ZoteroExport};

/// Typed wrappers over the `/documents` endpoints.
#[derive(Debug, Clone)]
pub struct DocumentsApi {
    client: ApiClient,
}

#[derive(Debug, Serialize)]
struct ZoteroExportRequest<'a> {
    document_ids: &'a [i64],
    #[serde(skip_serializing_if = "Option::is_none")]
    collection_name: Option<&'a str>,
}

impl DocumentsApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn list(&self, filters: &DocumentFilters) -> Result<Page<Document>, ClientError> {
        self.client.get_query("documents", filters).await
    }

    pub async fn get(&self, id: i64) -> Result<Document, ClientError> {
        Ok(self.client.get::<Data<Document>>(&format!("documents/{id}")).await?.data)
    }

    /// Scraped page metadata for a document; deployment-specific shape.
    pub async fn get_detail(&self, id: i64) -> Result<Value, ClientError> {
        Ok(self
            .client
            .get::<Data<Value>>(&format!("documents/{id}/detail"))
            .await?
            .data)
    }

    pub async fn list_for_task(
        &self,
        task_id: i64,
        filters: &DocumentFilters,
    ) -> Result<Page<Document>, ClientError> {
        self.client
            .get_query(&format!("tasks/{task_id}/documents"), filters)
            .await
    }

    pub async fn export_to_zotero(
        &self,
        document_ids: &[i64],
        collection_name: Option<&str>,
    ) -> Result<ZoteroExport, ClientError> {
        Ok(self
            .client
            .post::<Data<ZoteroExport>, _>(
                "documents/export/zotero",
                &ZoteroExportRequest { document_ids, collection_name },
            )
            .await?
            .data)
    }
}
