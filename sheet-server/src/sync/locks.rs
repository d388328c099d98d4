use dashmap::DashMap;
use std::sync::Arc;
use tokio::sync::{Mutex, OwnedMutexGuard};

/// 按工作表串行化写入
///
/// The read-diff-write of the settings sheet and the clear-rewrite of entity
/// sheets are not atomic. Holding the sheet's guard for the whole sequence
/// serializes writers inside this process; writers in other processes can
/// still interleave.
#[derive(Debug, Default)]
pub struct SheetLocks {
    locks: DashMap<String, Arc<Mutex<()>>>,
}

impl SheetLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wait for exclusive write access to `sheet`
    pub async fn lock(&self, sheet: &str) -> OwnedMutexGuard<()> {
        // Clone the Arc out so no DashMap shard guard is held across the await
        let mutex = self
            .locks
            .entry(sheet.to_string())
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone();
        mutex.lock_owned().await
    }
}
