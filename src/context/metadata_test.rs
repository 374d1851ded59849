use std::sync::Arc;

use crate::InMemoryMetadataContext;
use crate::MetadataContext;

/// # Case 1: Adds and drops are idempotent
///
/// ## Validation criterias:
/// 1. Re-adding a present database keeps a single entry
/// 2. Dropping an absent database is a silent no-op
#[test]
fn test_idempotent_mutations_case1() {
    let metadata = InMemoryMetadataContext::new();

    metadata.add_database("foo_db");
    metadata.add_database("foo_db");
    assert!(metadata.contains_database("foo_db"));
    assert_eq!(metadata.database_names(), vec!["foo_db".to_string()]);

    metadata.drop_database("foo_db");
    metadata.drop_database("foo_db");
    assert!(!metadata.contains_database("foo_db"));
    assert!(metadata.database_names().is_empty());
}

/// # Case 2: Different database names mutate without coordination
///
/// ## Validation criterias:
/// 1. Concurrent adds/drops of distinct names all land
#[tokio::test(flavor = "multi_thread")]
async fn test_concurrent_distinct_names_case2() {
    let metadata = Arc::new(InMemoryMetadataContext::new());

    let mut joins = Vec::new();
    for i in 0..16 {
        let metadata = metadata.clone();
        joins.push(tokio::spawn(async move {
            let name = format!("db_{}", i);
            metadata.add_database(&name);
            if i % 2 == 0 {
                metadata.drop_database(&name);
            }
        }));
    }
    for join in joins {
        join.await.expect("mutation task must not panic");
    }

    let names = metadata.database_names();
    assert_eq!(names.len(), 8);
    assert!(names.iter().all(|name| {
        let index: usize = name.trim_start_matches("db_").parse().unwrap();
        index % 2 == 1
    }));
}
