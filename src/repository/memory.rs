use std::collections::HashMap;

use async_trait::async_trait;
use dashmap::DashMap;
use parking_lot::RwLock;
use tracing::trace;

use super::ClusterRepository;
use crate::node_paths::covers;
use crate::ChangeEvent;
use crate::ChangeType;
use crate::EventSink;
use crate::Result;

/// In-process coordination repository.
///
/// Serves as the test backend and as the store for single-node embedding.
/// Watch semantics mirror the external contract: a sink registered on a path
/// receives events for that path and all descendants, in write order, with
/// `Added`/`Updated` decided by prior key existence and `Deleted` carrying
/// the removed value. Closed sinks are pruned on the next delivery.
#[derive(Default)]
pub struct MemoryRepository {
    data: DashMap<String, String>,
    watchers: RwLock<HashMap<String, Vec<EventSink>>>,
}

impl MemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn notify(
        &self,
        event: ChangeEvent,
    ) {
        let mut watchers = self.watchers.write();
        for (watched_path, sinks) in watchers.iter_mut() {
            if covers(watched_path, event.path()) {
                sinks.retain(|sink| sink.send(event.clone()).is_ok());
            }
        }
    }
}

#[async_trait]
impl ClusterRepository for MemoryRepository {
    async fn get(
        &self,
        path: &str,
    ) -> Result<Option<String>> {
        Ok(self.data.get(path).map(|entry| entry.value().clone()))
    }

    async fn persist(
        &self,
        path: &str,
        value: &str,
    ) -> Result<()> {
        let previous = self.data.insert(path.to_owned(), value.to_owned());
        let change_type = if previous.is_some() {
            ChangeType::Updated
        } else {
            ChangeType::Added
        };
        trace!(path, ?change_type, "persisted");
        self.notify(ChangeEvent::new(path, value, change_type));
        Ok(())
    }

    async fn delete(
        &self,
        path: &str,
    ) -> Result<()> {
        // Idempotent: deleting an absent key is success and emits nothing.
        if let Some((_, removed)) = self.data.remove(path) {
            trace!(path, "deleted");
            self.notify(ChangeEvent::new(path, removed, ChangeType::Deleted));
        }
        Ok(())
    }

    async fn watch(
        &self,
        path: &str,
        sink: EventSink,
    ) -> Result<()> {
        self.watchers.write().entry(path.to_owned()).or_default().push(sink);
        Ok(())
    }

    async fn remove_watch(
        &self,
        path: &str,
    ) -> Result<()> {
        self.watchers.write().remove(path);
        Ok(())
    }
}
