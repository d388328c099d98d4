//! In-memory storefront state

use std::sync::Arc;
use tokio::sync::RwLock;

use crate::SheetClient;
use crate::decode::DecodedWorkbook;

/// Last successfully read workbook, shared across tasks
#[derive(Debug, Clone, Default)]
pub struct StoreState {
    inner: Arc<RwLock<Snapshot>>,
}

#[derive(Debug, Default)]
struct Snapshot {
    workbook: DecodedWorkbook,
    refreshed_at: Option<i64>,
}

impl StoreState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Re-read the workbook.
    ///
    /// On failure the current contents are kept and `false` is returned; a
    /// storefront keeps serving the last good data while the endpoint is down.
    pub async fn refresh(&self, client: &SheetClient) -> bool {
        match client.read().await {
            Some(workbook) => {
                self.replace(workbook).await;
                true
            }
            None => {
                tracing::info!("Keeping previous store contents");
                false
            }
        }
    }

    /// Swap in freshly decoded contents
    pub async fn replace(&self, workbook: DecodedWorkbook) {
        let mut guard = self.inner.write().await;
        tracing::debug!(
            products = workbook.products.len(),
            orders = workbook.orders.len(),
            "Store refreshed"
        );
        guard.workbook = workbook;
        guard.refreshed_at = Some(shared::util::now_millis());
    }

    /// Clone of the current contents
    pub async fn current(&self) -> DecodedWorkbook {
        self.inner.read().await.workbook.clone()
    }

    /// Unix millis of the last successful refresh
    pub async fn refreshed_at(&self) -> Option<i64> {
        self.inner.read().await.refreshed_at
    }
}
