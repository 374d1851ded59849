use std::collections::HashMap;
use std::sync::Arc;

use super::ChangeEventHandler;
use super::ListenerAssistedHandler;
use crate::node_paths::covers;
use crate::Error;
use crate::Result;

/// Startup-time registration table of change event handlers, indexed by
/// subscribed key.
///
/// Built once during process initialization and read-only afterwards, so
/// lookups are safe from any number of delivery threads. Two handlers
/// declaring the same subscribed key is a configuration defect and fails
/// construction, not a runtime condition to recover from.
pub struct HandlerRegistry {
    handlers: HashMap<String, Arc<dyn ChangeEventHandler>>,
}

impl HandlerRegistry {
    /// Builds a registry from an explicit handler table.
    ///
    /// # Errors
    /// Returns [`Error::Fatal`] when two handlers declare the same
    /// subscribed key.
    pub fn with_handlers(
        handlers: impl IntoIterator<Item = Arc<dyn ChangeEventHandler>>
    ) -> Result<Self> {
        let mut indexed: HashMap<String, Arc<dyn ChangeEventHandler>> = HashMap::new();
        for handler in handlers {
            let key = handler.subscribed_key().to_owned();
            if indexed.insert(key.clone(), handler).is_some() {
                return Err(Error::Fatal(format!(
                    "duplicate change event handler registered for subscribed key {}",
                    key
                )));
            }
        }
        Ok(Self { handlers: indexed })
    }

    /// Registry holding the built-in handler set.
    pub fn builtin() -> Result<Self> {
        Self::with_handlers([Arc::new(ListenerAssistedHandler) as Arc<dyn ChangeEventHandler>])
    }

    /// Selects the handler whose subscribed key is the most specific
    /// (longest) prefix of `path` on a segment boundary.
    pub fn route(
        &self,
        path: &str,
    ) -> Option<&Arc<dyn ChangeEventHandler>> {
        self.handlers
            .iter()
            .filter(|(key, _)| covers(key, path))
            .max_by_key(|(key, _)| key.len())
            .map(|(_, handler)| handler)
    }

    /// All subscribed keys, one per registered handler.
    pub fn subscribed_keys(&self) -> impl Iterator<Item = &str> {
        self.handlers.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}
