mod lifecycle;
mod memory;

pub use lifecycle::*;
pub use memory::*;

#[cfg(test)]
mod memory_test;

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use crate::EventSink;
use crate::Result;

/// Cluster-visible coordination store with hierarchical keys and watches.
///
/// The store owns the authoritative copy of everything under its namespace;
/// this crate only projects it locally. Implementations sit in front of a
/// ZooKeeper/etcd-class system; [`MemoryRepository`] backs tests and
/// single-process embedding.
///
/// Contract notes:
/// - `delete` is idempotent: deleting an absent key is success. An adapter
///   whose store errors on missing keys must absorb that error, since the
///   lifecycle acknowledgment intentionally races across nodes.
/// - `watch` delivers one [`crate::ChangeEvent`] per observed mutation of
///   the path or its descendants, in observation order per path.
/// - `remove_watch` of a never-watched path is a no-op.
/// - Retry/backoff on store failures is the implementation's concern; the
///   dispatch core never retries.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ClusterRepository: Send + Sync + 'static {
    async fn get(
        &self,
        path: &str,
    ) -> Result<Option<String>>;

    async fn persist(
        &self,
        path: &str,
        value: &str,
    ) -> Result<()>;

    async fn delete(
        &self,
        path: &str,
    ) -> Result<()>;

    async fn watch(
        &self,
        path: &str,
        sink: EventSink,
    ) -> Result<()>;

    async fn remove_watch(
        &self,
        path: &str,
    ) -> Result<()>;
}
