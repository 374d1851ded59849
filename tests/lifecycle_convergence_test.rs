//! End-to-end convergence of the listener-assisted lifecycle handshake over
//! the in-memory repository: a coordinator-side announcement becomes a local
//! metadata mutation plus a deleted marker on the observing node.

use std::sync::Arc;
use std::time::Duration;

use metasync::database_marker_path;
use metasync::ClusterContextBuilder;
use metasync::ClusterHandle;
use metasync::ClusterRepository;
use metasync::ListenerAssistedService;
use metasync::MemoryRepository;
use metasync::MetadataContext;
use metasync::NodeConfig;
use metasync::NodeRole;
use metasync::Settings;

async fn start_node(
    repository: Arc<MemoryRepository>,
    role: NodeRole,
) -> ClusterHandle {
    let settings = Settings {
        node: NodeConfig {
            role,
            ..NodeConfig::default()
        },
        ..Settings::default()
    };
    ClusterContextBuilder::new(settings, repository)
        .start()
        .await
        .expect("node must start")
}

async fn wait_for<F>(
    what: &str,
    condition: F,
) where
    F: Fn() -> bool,
{
    for _ in 0..200 {
        if condition() {
            return;
        }
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
    panic!("timed out waiting for {}", what);
}

#[tokio::test]
async fn test_create_database_converges() {
    let repository = Arc::new(MemoryRepository::new());
    let node = start_node(repository.clone(), NodeRole::StandaloneProxy).await;
    let service = ListenerAssistedService::new(repository.clone());

    service.announce_create_database("foo_db").await.unwrap();

    let context = node.context().clone();
    wait_for("local database entry", || {
        context.metadata().contains_database("foo_db")
    })
    .await;

    // The node acknowledged by deleting the marker.
    let marker = database_marker_path("foo_db");
    let mut acknowledged = false;
    for _ in 0..200 {
        if repository.get(&marker).await.unwrap().is_none() {
            acknowledged = true;
            break;
        }
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
    assert!(acknowledged, "marker must be deleted as acknowledgment");

    node.shutdown().await;
}

#[tokio::test]
async fn test_drop_database_converges() {
    let repository = Arc::new(MemoryRepository::new());
    let node = start_node(repository.clone(), NodeRole::DriverEmbedded).await;
    let service = ListenerAssistedService::new(repository.clone());

    service.announce_create_database("foo_db").await.unwrap();
    let context = node.context().clone();
    wait_for("database created", || {
        context.metadata().contains_database("foo_db")
    })
    .await;

    service.announce_drop_database("foo_db").await.unwrap();
    wait_for("database dropped", || {
        !context.metadata().contains_database("foo_db")
    })
    .await;

    node.shutdown().await;
}

#[tokio::test]
async fn test_duplicate_announcements_are_absorbed() {
    let repository = Arc::new(MemoryRepository::new());
    let node = start_node(repository.clone(), NodeRole::StandaloneProxy).await;
    let service = ListenerAssistedService::new(repository.clone());

    service.announce_create_database("foo_db").await.unwrap();
    service.announce_create_database("foo_db").await.unwrap();

    let context = node.context().clone();
    wait_for("single local database entry", || {
        context.metadata().contains_database("foo_db")
    })
    .await;
    assert_eq!(context.metadata().database_names(), vec!["foo_db".to_string()]);

    node.shutdown().await;
}

#[tokio::test]
async fn test_unrelated_paths_are_ignored() {
    let repository = Arc::new(MemoryRepository::new());
    let node = start_node(repository.clone(), NodeRole::StandaloneProxy).await;

    repository
        .persist("/nodes/compute_node/1", "online")
        .await
        .unwrap();
    repository
        .persist("/states/listener_assisted/foo_db", "TRUNCATE_DATABASE")
        .await
        .unwrap();

    // Give the listener loop a moment; nothing may materialize locally.
    tokio::time::sleep(Duration::from_millis(50)).await;
    let context = node.context();
    assert!(context.metadata().database_names().is_empty());

    node.shutdown().await;
}
