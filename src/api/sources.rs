use crate::client::ApiClient;
use crate::error::ClientError;
use crate::types::{Data, RetrievalSource};

/// Typed wrapper over the `/sources` endpoint.
#[derive(Debug, Clone)]
pub struct SourcesApi {
    client: ApiClient,
}

impl SourcesApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Lists the retrieval sources the backend can query.
    pub async fn list(&self) -> Result<Vec<RetrievalSource>, ClientError> {
        Ok(self.client.get::<Data<Vec<RetrievalSource>>>("sources").await?.data)
    }
}
