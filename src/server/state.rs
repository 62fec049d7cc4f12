use std::sync::Arc;
use std::time::Duration;

use tokio::{task, time};
use tracing::warn;

use crate::db::Store;
use crate::error::{PartyError, PartyResult};
use crate::model::PartyDetails;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<Store>,
    pub party: Arc<PartyDetails>,
    pub storage_timeout: Duration,
}

impl AppState {
    pub fn new(store: Store, party: PartyDetails, storage_timeout: Duration) -> Self {
        Self {
            store: Arc::new(store),
            party: Arc::new(party),
            storage_timeout,
        }
    }

    /// Runs a blocking store operation on the blocking pool, giving up after
    /// the configured timeout. A timed-out write may still land on disk.
    pub async fn run<T, F>(&self, operation: &'static str, f: F) -> PartyResult<T>
    where
        F: FnOnce(&Store) -> PartyResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let store = Arc::clone(&self.store);
        let handle = task::spawn_blocking(move || f(store.as_ref()));

        match time::timeout(self.storage_timeout, handle).await {
            Ok(Ok(result)) => result,
            Ok(Err(join_error)) => Err(PartyError::Other(format!(
                "{operation} failed: {join_error}"
            ))),
            Err(_) => {
                warn!(operation, timeout_ms = self.storage_timeout.as_millis() as u64, "storage timeout");
                Err(PartyError::Timeout {
                    operation: operation.to_string(),
                })
            }
        }
    }
}
