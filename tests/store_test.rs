//! Store round trips against a real PostgreSQL database.
//!
//! Run with: DATABASE_URL="postgres://localhost/tmt_resources_test" cargo test --test store_test -- --ignored

use std::sync::Arc;
use tmt_resources::{
    ensure_tables, service, FixedIdGenerator, IdGenerator, LocalIdGenerator, Resource, ResourceStore, ResourceVerb,
    TypeStore, VerbStore,
};
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

async fn pool() -> PgPool {
    let url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set for store tests");
    let pool = PgPoolOptions::new()
        .max_connections(2)
        .connect(&url)
        .await
        .expect("connect to test database");
    ensure_tables(&pool).await.expect("create tables");
    pool
}

fn local_ids() -> Arc<dyn IdGenerator> {
    Arc::new(LocalIdGenerator)
}

fn sample() -> Resource {
    Resource::new("test", "this is a test", "tmt.byu.edu/resources")
}

#[tokio::test]
#[ignore] // requires DATABASE_URL
async fn insert_then_get_returns_assigned_guid() {
    let fresh = uuid::Uuid::new_v4().to_string();
    let store = ResourceStore::new(pool().await, Arc::new(FixedIdGenerator::new(fresh.clone())));

    let mut submitted = sample();
    submitted.guid = "client-supplied".into();
    let created = store.insert(submitted).await.unwrap();
    assert_eq!(created.guid, fresh);

    let fetched = store.get(&fresh).await.unwrap();
    assert_eq!(fetched, Resource { guid: fresh.clone(), ..sample() });
    assert!(fetched.verbs.is_empty());
    assert!(store.get("client-supplied").await.is_err());

    store.delete(&fresh).await.unwrap();
}

#[tokio::test]
#[ignore] // requires DATABASE_URL
async fn update_overwrites_fields_but_not_guid() {
    let store = ResourceStore::new(pool().await, local_ids());
    let mut created = store.insert(sample()).await.unwrap();
    created.name = "renamed".into();
    created.api_endpoint = "tmt.byu.edu/renamed".into();
    store.update(&created).await.unwrap();

    let fetched = store.get(&created.guid).await.unwrap();
    assert_eq!(fetched, created);

    store.delete(&created.guid).await.unwrap();
}

#[tokio::test]
#[ignore] // requires DATABASE_URL
async fn update_and_delete_of_missing_rows_succeed() {
    let store = ResourceStore::new(pool().await, local_ids());
    let missing = Resource {
        guid: uuid::Uuid::new_v4().to_string(),
        ..sample()
    };
    store.update(&missing).await.unwrap();
    store.delete(&missing.guid).await.unwrap();
}

#[tokio::test]
#[ignore] // requires DATABASE_URL
async fn delete_then_get_fails() {
    let store = ResourceStore::new(pool().await, local_ids());
    let created = store.insert(sample()).await.unwrap();
    store.delete(&created.guid).await.unwrap();
    assert!(store.get(&created.guid).await.is_err());
}

#[tokio::test]
#[ignore] // requires DATABASE_URL
async fn verb_update_changes_only_description() {
    let pool = pool().await;
    let resources = ResourceStore::new(pool.clone(), local_ids());
    let verbs = VerbStore::new(pool, local_ids());
    let resource = resources.insert(sample()).await.unwrap();

    let added = verbs
        .add(ResourceVerb {
            guid: "ignored".into(),
            resource_guid: resource.guid.clone(),
            verb: "edit".into(),
            description: "can edit".into(),
        })
        .await
        .unwrap();
    assert_ne!(added.guid, "ignored");

    verbs.update(&added.guid, "new description").await.unwrap();
    let fetched = verbs.get(&added.guid).await.unwrap();
    assert_eq!(fetched.description, "new description");
    assert_eq!(fetched.verb, "edit");
    assert_eq!(fetched.resource_guid, resource.guid);

    verbs.remove(&added.guid).await.unwrap();
    assert!(verbs.get(&added.guid).await.is_err());
    resources.delete(&resource.guid).await.unwrap();
}

#[tokio::test]
#[ignore] // requires DATABASE_URL
async fn aggregation_attaches_exactly_each_resources_verbs() {
    let pool = pool().await;
    let resources = ResourceStore::new(pool.clone(), local_ids());
    let verbs = VerbStore::new(pool, local_ids());

    let a = resources.insert(sample()).await.unwrap();
    let b = resources.insert(Resource::new("other", "another test", "tmt.byu.edu/other")).await.unwrap();
    for (owner, name) in [(&a, "edit"), (&a, "view"), (&b, "delete")] {
        verbs
            .add(ResourceVerb {
                guid: String::new(),
                resource_guid: owner.guid.clone(),
                verb: name.into(),
                description: format!("can {}", name),
            })
            .await
            .unwrap();
    }

    let all = service::with_verbs_all(&verbs, resources.get_all().await.unwrap()).await;
    for r in all.iter().filter(|r| r.guid == a.guid || r.guid == b.guid) {
        assert!(r.verbs.iter().all(|v| v.resource_guid == r.guid));
    }
    let a_full = all.iter().find(|r| r.guid == a.guid).unwrap();
    let b_full = all.iter().find(|r| r.guid == b.guid).unwrap();
    assert_eq!(a_full.verbs.len(), 2);
    assert_eq!(b_full.verbs.len(), 1);
    assert_eq!(b_full.verbs[0].verb, "delete");

    for r in [a_full, b_full] {
        for v in &r.verbs {
            verbs.remove(&v.guid).await.unwrap();
        }
        resources.delete(&r.guid).await.unwrap();
    }
}

#[tokio::test]
#[ignore] // requires DATABASE_URL
async fn get_type_follows_association() {
    let pool = pool().await;
    let resources = ResourceStore::new(pool.clone(), local_ids());
    let types = TypeStore::new(pool.clone(), local_ids());

    let whiteboard_type = resources
        .insert(Resource::new("whiteboard", "a whiteboard", "tmt.byu.edu/whiteboards"))
        .await
        .unwrap();
    let instance = resources.insert(sample()).await.unwrap();

    let association = types.insert(&instance.guid, &whiteboard_type.guid).await.unwrap();
    assert_eq!(association.resource_guid, instance.guid);
    assert_eq!(association.type_guid, whiteboard_type.guid);

    let fetched = types.get_type(&instance.guid).await.unwrap();
    assert_eq!(fetched, whiteboard_type);
    assert!(types.get_type(&whiteboard_type.guid).await.is_err());

    sqlx::query("DELETE FROM resourceTypes WHERE guid = $1")
        .bind(&association.guid)
        .execute(&pool)
        .await
        .unwrap();
    resources.delete(&instance.guid).await.unwrap();
    resources.delete(&whiteboard_type.guid).await.unwrap();
}
