//! Concurrency tests for the file-backed record store.
//!
//! Raw `load`/`write` pairs can interleave and lose data; repositories go
//! through `update`, which serializes the whole read-modify-write.

use std::collections::BTreeSet;
use std::sync::Arc;

use futures::future::join_all;
use tempfile::TempDir;

use chirpy::adapters::storage::{DocumentChirpRepository, DocumentUserRepository, FileRecordStore};
use chirpy::domain::chirp::{Chirp, ChirpBody};
use chirpy::domain::foundation::{ChirpId, UserId};
use chirpy::ports::{ChirpRepository, RecordStore, UserRepository};

async fn store_in(dir: &TempDir) -> FileRecordStore {
    let store = FileRecordStore::new(dir.path().join("database.json"));
    store.initialize().await.unwrap();
    store
}

#[tokio::test]
async fn interleaved_load_and_write_loses_an_insert() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir).await;

    let mut first = store.load().await.unwrap();
    let mut second = store.load().await.unwrap();

    for (document, text) in [(&mut first, "first"), (&mut second, "second")] {
        let id = document.next_chirp_id();
        let body = ChirpBody::parse(text).unwrap();
        document.chirps.insert(id, Chirp::new(id, UserId::new(1), body));
    }
    store.write(&first).await.unwrap();
    store.write(&second).await.unwrap();

    let document = store.load().await.unwrap();
    assert_eq!(document.chirps.len(), 1);
    assert_eq!(document.chirps[&ChirpId::new(1)].body, "second");
}

#[tokio::test]
async fn concurrent_chirp_creates_all_persist_with_distinct_ids() {
    let dir = TempDir::new().unwrap();
    let repo = Arc::new(DocumentChirpRepository::new(store_in(&dir).await));

    let tasks: Vec<_> = (0..25)
        .map(|n| {
            let repo = repo.clone();
            tokio::spawn(async move {
                let body = ChirpBody::parse(&format!("chirp {n}")).unwrap();
                repo.create(body, UserId::new(1 + n % 3)).await.unwrap()
            })
        })
        .collect();

    let created: BTreeSet<u64> = join_all(tasks)
        .await
        .into_iter()
        .map(|joined| joined.unwrap().id.as_u64())
        .collect();

    assert_eq!(created, (1..=25).collect::<BTreeSet<_>>());

    let reopened = DocumentChirpRepository::new(FileRecordStore::new(dir.path().join("database.json")));
    assert_eq!(reopened.list().await.unwrap().len(), 25);
}

#[tokio::test]
async fn concurrent_registrations_of_one_email_admit_exactly_one() {
    let dir = TempDir::new().unwrap();
    let repo = Arc::new(DocumentUserRepository::new(store_in(&dir).await));

    let tasks: Vec<_> = (0..10)
        .map(|n| {
            let repo = repo.clone();
            tokio::spawn(async move { repo.create("walt@breakingbad.com", &format!("hash-{n}")).await })
        })
        .collect();

    let successes = join_all(tasks)
        .await
        .into_iter()
        .filter(|joined| joined.as_ref().is_ok_and(Result::is_ok))
        .count();

    assert_eq!(successes, 1);
    let user = repo.get_by_email("walt@breakingbad.com").await.unwrap();
    assert_eq!(user.id, UserId::new(1));
}
