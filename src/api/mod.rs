//! Method-per-endpoint wrappers translating typed calls into HTTP requests.

pub mod analytics;
pub mod documents;
pub mod sources;
pub mod tasks;

pub use analytics::AnalyticsApi;
pub use documents::DocumentsApi;
pub use sources::SourcesApi;
pub use tasks::TasksApi;
