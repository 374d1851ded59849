use std::sync::Arc;

use tracing::debug;

use super::ClusterRepository;
use crate::database_marker_path;
use crate::LifecycleSignal;
use crate::Result;

/// Coordinator-side half of the listener-assisted handshake.
///
/// Announces a database create/drop by writing the short-lived marker node
/// every node watches; each node converges independently and acknowledges by
/// deleting the marker. The announcing node does not wait for the marker to
/// disappear.
pub struct ListenerAssistedService {
    repository: Arc<dyn ClusterRepository>,
}

impl ListenerAssistedService {
    pub fn new(repository: Arc<dyn ClusterRepository>) -> Self {
        Self { repository }
    }

    pub async fn announce_create_database(
        &self,
        database_name: &str,
    ) -> Result<()> {
        self.announce(database_name, LifecycleSignal::CreateDatabase).await
    }

    pub async fn announce_drop_database(
        &self,
        database_name: &str,
    ) -> Result<()> {
        self.announce(database_name, LifecycleSignal::DropDatabase).await
    }

    async fn announce(
        &self,
        database_name: &str,
        signal: LifecycleSignal,
    ) -> Result<()> {
        debug!(database = database_name, signal = signal.as_str(), "announcing");
        self.repository
            .persist(&database_marker_path(database_name), signal.as_str())
            .await
    }
}
