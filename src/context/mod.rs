mod builder;
mod instance;
mod metadata;

pub use builder::*;
pub use instance::*;
pub use metadata::*;

#[cfg(test)]
mod metadata_test;

use std::fmt::Debug;
use std::sync::Arc;

use crate::ClusterRepository;
use crate::EventSink;

/// Node-local state handed to every handler invocation.
///
/// Owns nothing a handler should mutate structurally: the repository and
/// metadata context are shared process-wide, the instance identity is
/// read-only, and the event sink feeds the node's single listener loop so
/// watches registered by handlers deliver into the same dispatch stream.
pub struct ClusterContext {
    instance: InstanceMetadata,
    metadata: Arc<dyn MetadataContext>,
    repository: Arc<dyn ClusterRepository>,
    event_sink: EventSink,
}

impl ClusterContext {
    pub fn new(
        instance: InstanceMetadata,
        metadata: Arc<dyn MetadataContext>,
        repository: Arc<dyn ClusterRepository>,
        event_sink: EventSink,
    ) -> Self {
        Self {
            instance,
            metadata,
            repository,
            event_sink,
        }
    }

    pub fn instance(&self) -> &InstanceMetadata {
        &self.instance
    }

    pub fn metadata(&self) -> &Arc<dyn MetadataContext> {
        &self.metadata
    }

    pub fn repository(&self) -> &Arc<dyn ClusterRepository> {
        &self.repository
    }

    /// Clone of the sink new repository watches should deliver into.
    pub fn event_sink(&self) -> EventSink {
        self.event_sink.clone()
    }
}

impl Debug for ClusterContext {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        f.debug_struct("ClusterContext")
            .field("instance_id", &self.instance.instance_id())
            .field("role", &self.instance.role())
            .finish()
    }
}
