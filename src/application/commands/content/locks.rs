// src/application/commands/content/locks.rs
use crate::domain::content::ContentId;
use std::{
    collections::HashMap,
    sync::{Arc, Mutex, PoisonError},
};
use tokio::sync::{Mutex as AsyncMutex, OwnedMutexGuard};

/// Serializes mutations of the same content item within this process.
///
/// Each id maps to its own async mutex; slots nobody holds or waits on are
/// pruned on the next acquisition so the map stays proportional to the
/// number of items being mutated concurrently.
#[derive(Default)]
pub struct ContentLocks {
    slots: Mutex<HashMap<ContentId, Arc<AsyncMutex<()>>>>,
}

pub struct ContentGuard {
    _guard: OwnedMutexGuard<()>,
}

impl ContentLocks {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn acquire(&self, id: ContentId) -> ContentGuard {
        let slot = {
            let mut slots = self.slots.lock().unwrap_or_else(PoisonError::into_inner);
            slots.retain(|key, slot| *key == id || Arc::strong_count(slot) > 1);
            Arc::clone(slots.entry(id).or_default())
        };
        ContentGuard {
            _guard: slot.lock_owned().await,
        }
    }

    #[cfg(test)]
    fn tracked(&self) -> usize {
        self.slots
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn same_item_is_serialized() {
        let locks = Arc::new(ContentLocks::new());
        let id = ContentId::new(1).unwrap();
        let guard = locks.acquire(id).await;

        let contender = {
            let locks = Arc::clone(&locks);
            tokio::spawn(async move {
                let _g = locks.acquire(id).await;
            })
        };
        tokio::time::sleep(Duration::from_millis(20)).await;
        assert!(!contender.is_finished());

        drop(guard);
        tokio::time::timeout(Duration::from_secs(1), contender)
            .await
            .expect("contender should acquire after release")
            .unwrap();
    }

    #[tokio::test]
    async fn different_items_do_not_block_each_other() {
        let locks = ContentLocks::new();
        let _a = locks.acquire(ContentId::new(1).unwrap()).await;
        let acquired = tokio::time::timeout(
            Duration::from_millis(100),
            locks.acquire(ContentId::new(2).unwrap()),
        )
        .await;
        assert!(acquired.is_ok());
    }

    #[tokio::test]
    async fn released_slots_are_pruned() {
        let locks = ContentLocks::new();
        for raw in 1..=5 {
            let _g = locks.acquire(ContentId::new(raw).unwrap()).await;
        }
        let _last = locks.acquire(ContentId::new(6).unwrap()).await;
        assert_eq!(locks.tracked(), 1);
    }
}
