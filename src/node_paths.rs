//! Well-known path namespace of the coordination store.
//!
//! Paths are hierarchical slash-separated keys. The constants and builders
//! here are the wire contract shared by every node in the cluster; changing
//! them is a cluster-wide protocol change.

/// Root under which listener-assisted lifecycle markers are written.
///
/// A marker lives at `/states/listener_assisted/{database_name}`; the bare
/// root itself is subscribed-to but never a trigger.
pub const LISTENER_ASSISTED_ROOT: &str = "/states/listener_assisted";

/// Root of the per-database metadata subtree.
pub const DATABASE_METADATA_ROOT: &str = "/metadata";

/// Marker path announcing a lifecycle operation for one database.
pub fn database_marker_path(database_name: &str) -> String {
    format!("{}/{}", LISTENER_ASSISTED_ROOT, database_name)
}

/// Metadata subtree path watched on behalf of one database.
pub fn database_metadata_path(database_name: &str) -> String {
    format!("{}/{}", DATABASE_METADATA_ROOT, database_name)
}

/// Extracts the database name from a lifecycle marker path.
///
/// Returns `None` for the bare root, for empty trailing segments and for
/// paths nested deeper than one segment below the root.
pub(crate) fn database_name_in_marker(path: &str) -> Option<&str> {
    let rest = path.strip_prefix(LISTENER_ASSISTED_ROOT)?;
    let name = rest.strip_prefix('/')?;
    (!name.is_empty() && !name.contains('/')).then_some(name)
}

/// Whether `prefix` covers `path` on a segment boundary.
///
/// `/states/listener_assisted` covers itself and any descendant, but not
/// `/states/listener_assisted_x`.
pub(crate) fn covers(
    prefix: &str,
    path: &str,
) -> bool {
    match path.strip_prefix(prefix) {
        Some(rest) => rest.is_empty() || rest.starts_with('/'),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_database_name_in_marker() {
        assert_eq!(
            database_name_in_marker("/states/listener_assisted/foo_db"),
            Some("foo_db")
        );
        assert_eq!(database_name_in_marker("/states/listener_assisted"), None);
        assert_eq!(database_name_in_marker("/states/listener_assisted/"), None);
        assert_eq!(database_name_in_marker("/states/listener_assisted/foo/bar"), None);
        assert_eq!(database_name_in_marker("/metadata/foo_db"), None);
    }

    #[test]
    fn test_covers_respects_segment_boundaries() {
        assert!(covers("/states/listener_assisted", "/states/listener_assisted"));
        assert!(covers("/states/listener_assisted", "/states/listener_assisted/foo_db"));
        assert!(!covers("/states/listener_assisted", "/states/listener_assisted_x"));
        assert!(!covers("/states/listener_assisted", "/states"));
        assert!(covers("/metadata", "/metadata/foo_db/schemas/foo_schema"));
    }

    #[test]
    fn test_path_builders() {
        assert_eq!(database_marker_path("foo_db"), "/states/listener_assisted/foo_db");
        assert_eq!(database_metadata_path("foo_db"), "/metadata/foo_db");
    }
}
