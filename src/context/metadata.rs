use dashmap::DashMap;

#[cfg(test)]
use mockall::automock;

/// Local in-memory projection of a database's existence on this node.
///
/// Created and destroyed exclusively by the lifecycle handler in response to
/// converged signals; application code on remote nodes never writes it
/// directly.
#[derive(Debug, Clone)]
pub struct DatabaseMetadata {
    name: String,
}

impl DatabaseMetadata {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// The node-local metadata state the lifecycle handler mutates.
///
/// Narrow by design: only the calls this core issues, so a test double is a
/// small trait impl rather than a deep facade mock. Both mutators are
/// idempotent; the watch mechanism delivers at-least-once and a slow node
/// may replay a signal it already applied.
#[cfg_attr(test, automock)]
pub trait MetadataContext: Send + Sync + 'static {
    /// Adds a database to the local projection. Adding a present database is
    /// a no-op, not an error.
    fn add_database(
        &self,
        name: &str,
    );

    /// Drops a database from the local projection. Dropping an absent
    /// database is a no-op, not an error.
    fn drop_database(
        &self,
        name: &str,
    );

    fn contains_database(
        &self,
        name: &str,
    ) -> bool;

    fn database_names(&self) -> Vec<String>;
}

/// Default shared-map metadata context.
///
/// Keyed by database name so adds/drops of different names proceed without
/// coordination, while each single entry flips atomically; concurrent
/// readers observe a database as either fully present or fully absent.
#[derive(Debug, Default)]
pub struct InMemoryMetadataContext {
    databases: DashMap<String, DatabaseMetadata>,
}

impl InMemoryMetadataContext {
    pub fn new() -> Self {
        Self::default()
    }
}

impl MetadataContext for InMemoryMetadataContext {
    fn add_database(
        &self,
        name: &str,
    ) {
        self.databases
            .entry(name.to_owned())
            .or_insert_with(|| DatabaseMetadata::new(name));
    }

    fn drop_database(
        &self,
        name: &str,
    ) {
        self.databases.remove(name);
    }

    fn contains_database(
        &self,
        name: &str,
    ) -> bool {
        self.databases.contains_key(name)
    }

    fn database_names(&self) -> Vec<String> {
        self.databases.iter().map(|entry| entry.key().clone()).collect()
    }
}
