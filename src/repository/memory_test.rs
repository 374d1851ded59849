use tokio::sync::mpsc;

use crate::ChangeType;
use crate::ClusterRepository;
use crate::MemoryRepository;

/// # Case 1: Watches on a prefix observe descendant mutations in write order
///
/// ## Validation criterias:
/// 1. Added on first write, Updated on overwrite, Deleted on removal
/// 2. Deleted carries the removed value
#[tokio::test]
async fn test_watch_delivery_case1() {
    let repository = MemoryRepository::new();
    let (tx, mut rx) = mpsc::unbounded_channel();
    repository.watch("/states/listener_assisted", tx).await.unwrap();

    repository
        .persist("/states/listener_assisted/foo_db", "CREATE_DATABASE")
        .await
        .unwrap();
    repository
        .persist("/states/listener_assisted/foo_db", "DROP_DATABASE")
        .await
        .unwrap();
    repository.delete("/states/listener_assisted/foo_db").await.unwrap();

    let added = rx.recv().await.unwrap();
    assert_eq!(added.change_type(), ChangeType::Added);
    assert_eq!(added.value(), "CREATE_DATABASE");

    let updated = rx.recv().await.unwrap();
    assert_eq!(updated.change_type(), ChangeType::Updated);
    assert_eq!(updated.value(), "DROP_DATABASE");

    let deleted = rx.recv().await.unwrap();
    assert_eq!(deleted.change_type(), ChangeType::Deleted);
    assert_eq!(deleted.value(), "DROP_DATABASE");
    assert_eq!(deleted.path(), "/states/listener_assisted/foo_db");
}

/// # Case 2: Deleting an absent key succeeds and emits nothing
#[tokio::test]
async fn test_delete_absent_key_case2() {
    let repository = MemoryRepository::new();
    let (tx, mut rx) = mpsc::unbounded_channel();
    repository.watch("/states/listener_assisted", tx).await.unwrap();

    assert!(repository.delete("/states/listener_assisted/ghost_db").await.is_ok());
    assert!(rx.try_recv().is_err());
}

/// # Case 3: Watches are path-scoped with segment boundaries
///
/// ## Validation criterias:
/// 1. Sibling namespaces do not leak into the watch
#[tokio::test]
async fn test_watch_scoping_case3() {
    let repository = MemoryRepository::new();
    let (tx, mut rx) = mpsc::unbounded_channel();
    repository.watch("/metadata/foo_db", tx).await.unwrap();

    repository.persist("/metadata/foo_db_backup", "x").await.unwrap();
    repository.persist("/metadata/bar_db", "y").await.unwrap();
    repository.persist("/metadata/foo_db/schemas", "z").await.unwrap();

    let event = rx.recv().await.unwrap();
    assert_eq!(event.path(), "/metadata/foo_db/schemas");
    assert!(rx.try_recv().is_err());
}

/// # Case 4: Removing a watch stops delivery; removing again is a no-op
#[tokio::test]
async fn test_remove_watch_case4() {
    let repository = MemoryRepository::new();
    let (tx, mut rx) = mpsc::unbounded_channel();
    repository.watch("/metadata/foo_db", tx).await.unwrap();

    repository.remove_watch("/metadata/foo_db").await.unwrap();
    repository.persist("/metadata/foo_db", "schema").await.unwrap();
    assert!(rx.try_recv().is_err());

    assert!(repository.remove_watch("/metadata/foo_db").await.is_ok());
    assert!(repository.remove_watch("/never/watched").await.is_ok());
}

/// # Case 5: Values read back what was last persisted
#[tokio::test]
async fn test_get_case5() {
    let repository = MemoryRepository::new();

    assert_eq!(repository.get("/metadata/foo_db").await.unwrap(), None);
    repository.persist("/metadata/foo_db", "v1").await.unwrap();
    repository.persist("/metadata/foo_db", "v2").await.unwrap();
    assert_eq!(
        repository.get("/metadata/foo_db").await.unwrap(),
        Some("v2".to_string())
    );
}
