use tokio::sync::mpsc;

/// Kind of mutation the coordination store observed on a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeType {
    Added,
    Updated,
    Deleted,
}

/// One notification from the coordination store.
///
/// Produced exactly once per observed mutation on a watched path and
/// consumed exactly once by the dispatcher. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeEvent {
    path: String,
    value: String,
    change_type: ChangeType,
}

impl ChangeEvent {
    pub fn new(
        path: impl Into<String>,
        value: impl Into<String>,
        change_type: ChangeType,
    ) -> Self {
        Self {
            path: path.into(),
            value: value.into(),
            change_type,
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn change_type(&self) -> ChangeType {
        self.change_type
    }
}

/// Delivery target a repository watch pushes change events into.
///
/// Unbounded on purpose: the store's delivery thread must never block on a
/// slow consumer; per-path ordering is preserved by the sender.
pub type EventSink = mpsc::UnboundedSender<ChangeEvent>;
