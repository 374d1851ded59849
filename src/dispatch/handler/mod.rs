mod listener_assisted;
pub use listener_assisted::*;


use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use crate::ChangeEvent;
use crate::ClusterContext;
use crate::Result;

/// A path-scoped consumer of coordination store change events.
///
/// Implementations declare one subscribed key (a path prefix); the registry
/// indexes them by that key at startup and the dispatcher routes each event
/// to at most one handler. Handlers receive the node's [`ClusterContext`]
/// per invocation; they never own it.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ChangeEventHandler: Send + Sync + 'static {
    /// Path prefix this handler subscribes to.
    fn subscribed_key(&self) -> &str;

    /// Reacts to one event routed under the subscribed key.
    ///
    /// Returns only after all local mutation and follow-up repository calls
    /// have been issued. Repository failures propagate unmodified; malformed
    /// or unrelated events are absorbed as no-ops.
    async fn handle(
        &self,
        context: &ClusterContext,
        event: &ChangeEvent,
    ) -> Result<()>;
}
