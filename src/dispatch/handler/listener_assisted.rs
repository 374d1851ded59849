use async_trait::async_trait;
use tracing::debug;

use super::ChangeEventHandler;
use crate::database_marker_path;
use crate::database_metadata_path;
use crate::node_paths::database_name_in_marker;
use crate::ChangeEvent;
use crate::ChangeType;
use crate::ClusterContext;
use crate::Result;
use crate::LISTENER_ASSISTED_ROOT;

/// Signal vocabulary carried in a lifecycle marker's value.
///
/// Wire values are exact and case-sensitive; anything else is not a signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleSignal {
    CreateDatabase,
    DropDatabase,
}

impl LifecycleSignal {
    pub fn from_value(value: &str) -> Option<Self> {
        match value {
            "CREATE_DATABASE" => Some(Self::CreateDatabase),
            "DROP_DATABASE" => Some(Self::DropDatabase),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CreateDatabase => "CREATE_DATABASE",
            Self::DropDatabase => "DROP_DATABASE",
        }
    }
}

/// Listener-assisted database lifecycle handler.
///
/// A coordinator announces a create/drop by writing a short-lived marker at
/// `/states/listener_assisted/{database_name}`. Every node watching the root
/// converges independently: it adjusts its watch set and local metadata, then
/// acknowledges by deleting the marker. The marker's disappearance is not a
/// correctness signal; convergence is observed per-node through local state.
///
/// Delivery is at-least-once, so every step absorbs redelivery: adding a
/// present database and dropping an absent one are no-ops, and the
/// acknowledgment delete may race with other nodes deleting the same marker.
pub struct ListenerAssistedHandler;

#[async_trait]
impl ChangeEventHandler for ListenerAssistedHandler {
    fn subscribed_key(&self) -> &str {
        LISTENER_ASSISTED_ROOT
    }

    async fn handle(
        &self,
        context: &ClusterContext,
        event: &ChangeEvent,
    ) -> Result<()> {
        // An event at the bare root carries no database name and must not
        // mutate anything, regardless of its type or value.
        let Some(database_name) = database_name_in_marker(event.path()) else {
            return Ok(());
        };
        if event.change_type() != ChangeType::Added {
            return Ok(());
        }
        let Some(signal) = LifecycleSignal::from_value(event.value()) else {
            debug!(
                path = event.path(),
                value = event.value(),
                "unrecognized lifecycle signal, ignored"
            );
            return Ok(());
        };

        match signal {
            LifecycleSignal::CreateDatabase => {
                context
                    .repository()
                    .watch(&database_metadata_path(database_name), context.event_sink())
                    .await?;
                context.metadata().add_database(database_name);
            }
            LifecycleSignal::DropDatabase => {
                context
                    .repository()
                    .remove_watch(&database_metadata_path(database_name))
                    .await?;
                context.metadata().drop_database(database_name);
            }
        }

        debug!(
            database = database_name,
            signal = signal.as_str(),
            role = ?context.instance().role(),
            "lifecycle signal applied locally"
        );

        // Acknowledge by deleting the marker. Local state is already applied
        // and stays applied even if this delete fails; redelivery of the same
        // signal is absorbed above.
        context
            .repository()
            .delete(&database_marker_path(database_name))
            .await?;
        Ok(())
    }
}
