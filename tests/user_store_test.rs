//! Repository tests against an in-memory SQLite database.

mod common;

use user_crud::domain::{UserPatch, UserPayload};
use user_crud::infra::{UserRepository, UserStore};

use common::test_database;

async fn store() -> UserStore {
    UserStore::new(test_database().await)
}

fn payload(name: &str, email: &str, age: Option<i32>) -> UserPayload {
    UserPayload {
        name: name.to_string(),
        email: email.to_string(),
        age,
    }
}

#[tokio::test]
async fn test_create_then_find_returns_payload_with_id() {
    let store = store().await;

    let created = store
        .create(payload("Alice", "a@x.com", Some(30)))
        .await
        .unwrap();
    let found = store.find_by_id(created.id).await.unwrap().unwrap();

    assert_eq!(found, created);
    assert_eq!(found.name, "Alice");
    assert_eq!(found.email, "a@x.com");
    assert_eq!(found.age, Some(30));
}

#[tokio::test]
async fn test_ids_are_assigned_sequentially() {
    let store = store().await;

    let first = store.create(payload("A", "a@x.com", None)).await.unwrap();
    let second = store.create(payload("A", "a@x.com", None)).await.unwrap();

    assert_eq!(first.id, 1);
    assert_eq!(second.id, 2);
    assert_eq!(store.list().await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_replace_is_full_overwrite() {
    let store = store().await;
    let created = store
        .create(payload("Alice", "a@x.com", Some(30)))
        .await
        .unwrap();

    let replaced = store
        .replace(created.id, payload("Bob", "b@x.com", None))
        .await
        .unwrap()
        .unwrap();

    assert_eq!(replaced.id, created.id);
    assert_eq!(replaced.name, "Bob");
    assert_eq!(replaced.age, None);
    assert_eq!(store.find_by_id(created.id).await.unwrap(), Some(replaced));
}

#[tokio::test]
async fn test_patch_age_leaves_other_fields() {
    let store = store().await;
    let created = store
        .create(payload("Alice", "a@x.com", None))
        .await
        .unwrap();

    let patched = store
        .patch(
            created.id,
            UserPatch {
                age: Some(Some(41)),
                ..Default::default()
            },
        )
        .await
        .unwrap()
        .unwrap();

    assert_eq!(patched.age, Some(41));
    assert_eq!(patched.name, "Alice");
    assert_eq!(patched.email, "a@x.com");
}

#[tokio::test]
async fn test_missing_ids_report_absence() {
    let store = store().await;

    assert_eq!(store.find_by_id(7).await.unwrap(), None);
    assert_eq!(
        store
            .replace(7, payload("Alice", "a@x.com", None))
            .await
            .unwrap(),
        None
    );
    assert_eq!(store.patch(7, UserPatch::default()).await.unwrap(), None);
    assert!(!store.delete(7).await.unwrap());
}

#[tokio::test]
async fn test_delete_is_not_idempotent() {
    let store = store().await;
    let created = store
        .create(payload("Alice", "a@x.com", None))
        .await
        .unwrap();

    assert!(store.delete(created.id).await.unwrap());
    assert!(!store.delete(created.id).await.unwrap());
    assert_eq!(store.find_by_id(created.id).await.unwrap(), None);
}

#[tokio::test]
async fn test_failed_lookup_releases_session() {
    let store = store().await;

    // Single pooled connection: a leaked transaction would block the next call
    assert_eq!(store.patch(1, UserPatch::default()).await.unwrap(), None);
    let created = store
        .create(payload("Alice", "a@x.com", None))
        .await
        .unwrap();
    assert_eq!(created.id, 1);
}
