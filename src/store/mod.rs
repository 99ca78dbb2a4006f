//! Resource stores mirroring server collections.
//!
//! Every store action follows the same shape: mark loading and clear the
//! previous error on entry, call the API, record a user-facing message and
//! propagate on failure, and drop the loading flag on every exit path. The
//! flag can never be left stuck and the error always reflects the most
//! recent failed action.

mod analytics;
mod document;
mod task;

pub use analytics::AnalyticsStore;
pub use document::DocumentStore;
pub use task::TaskStore;

use crate::error::ClientError;

/// Loading/error pair every store carries.
#[derive(Debug, Default)]
pub(crate) struct ActionState {
    loading: bool,
    error: Option<String>,
}

impl ActionState {
    fn begin(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Closes out an action: drops the loading flag and, on failure, records
    /// the server-supplied message or the action's generic fallback.
    fn settle<T>(
        &mut self,
        result: Result<T, ClientError>,
        fallback: &str,
    ) -> Result<T, ClientError> {
        self.loading = false;
        if let Err(err) = &result {
            self.error = Some(
                err.server_message()
                    .map(str::to_owned)
                    .unwrap_or_else(|| fallback.to_owned()),
            );
        }
        result
    }

    fn loading(&self) -> bool {
        self.loading
    }

    fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}
