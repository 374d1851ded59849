//! Assembles the node's coordination plumbing.
//!
//! [`ClusterContextBuilder`] wires the repository, metadata context, handler
//! registry and dispatcher together, subscribes every registered key with
//! the repository, and spawns the listener loop. The returned
//! [`ClusterHandle`] owns the loop's shutdown token.

use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::info;

use super::ClusterContext;
use super::InMemoryMetadataContext;
use super::InstanceMetadata;
use super::MetadataContext;
use crate::ChangeEventHandler;
use crate::ClusterEventListener;
use crate::ClusterRepository;
use crate::EventDispatcher;
use crate::HandlerRegistry;
use crate::ListenerAssistedHandler;
use crate::Result;
use crate::Settings;

pub struct ClusterContextBuilder {
    settings: Settings,
    repository: Arc<dyn ClusterRepository>,
    metadata: Option<Arc<dyn MetadataContext>>,
    extra_handlers: Vec<Arc<dyn ChangeEventHandler>>,
}

impl ClusterContextBuilder {
    pub fn new(
        settings: Settings,
        repository: Arc<dyn ClusterRepository>,
    ) -> Self {
        Self {
            settings,
            repository,
            metadata: None,
            extra_handlers: Vec::new(),
        }
    }

    /// Overrides the default in-memory metadata context.
    pub fn metadata_context(
        mut self,
        metadata: Arc<dyn MetadataContext>,
    ) -> Self {
        self.metadata = Some(metadata);
        self
    }

    /// Registers a handler beyond the built-in set.
    ///
    /// Registration happens during `start`; a key colliding with an already
    /// registered handler fails startup.
    pub fn register_handler(
        mut self,
        handler: Arc<dyn ChangeEventHandler>,
    ) -> Self {
        self.extra_handlers.push(handler);
        self
    }

    /// Validates settings, builds the context and registry, subscribes all
    /// handler keys with the repository and spawns the listener loop.
    pub async fn start(self) -> Result<ClusterHandle> {
        self.settings.validate()?;

        let instance = match &self.settings.node.instance_id {
            Some(id) => InstanceMetadata::with_id(id.clone(), self.settings.node.role),
            None => InstanceMetadata::new(self.settings.node.role),
        };
        info!(
            instance_id = instance.instance_id(),
            role = ?instance.role(),
            "starting cluster metadata synchronization"
        );

        let metadata = self
            .metadata
            .unwrap_or_else(|| Arc::new(InMemoryMetadataContext::new()));

        let (event_tx, event_rx) = mpsc::unbounded_channel();
        let context = Arc::new(ClusterContext::new(
            instance,
            metadata,
            self.repository,
            event_tx,
        ));

        let mut handlers: Vec<Arc<dyn ChangeEventHandler>> =
            vec![Arc::new(ListenerAssistedHandler)];
        handlers.extend(self.extra_handlers);
        let registry = Arc::new(HandlerRegistry::with_handlers(handlers)?);

        ClusterEventListener::subscribe(&context, &registry).await?;

        let shutdown = CancellationToken::new();
        let listener = ClusterEventListener::new(
            EventDispatcher::new(context.clone(), registry),
            event_rx,
            shutdown.clone(),
        );
        let listener_handle = tokio::spawn(listener.run());

        Ok(ClusterHandle {
            context,
            shutdown,
            listener_handle,
        })
    }
}

/// Running coordination core of one node.
pub struct ClusterHandle {
    context: Arc<ClusterContext>,
    shutdown: CancellationToken,
    listener_handle: JoinHandle<()>,
}

impl ClusterHandle {
    pub fn context(&self) -> &Arc<ClusterContext> {
        &self.context
    }

    /// Cooperative shutdown: cancels the listener loop and waits for it.
    pub async fn shutdown(self) {
        self.shutdown.cancel();
        let _ = self.listener_handle.await;
    }
}
