//! End-to-end repository tests against a real database. They run only when
//! `TEST_DATABASE_URL` points at a disposable Postgres instance and are
//! skipped otherwise.

use sqlx::PgPool;

use inventory_api::db::create_pool;
use inventory_api::error::AppError;
use inventory_api::models::ItemPayload;
use inventory_api::services::ItemsService;

// The tests share one database; serialize them so the table reset in one
// does not race another's assertions.
static DB_LOCK: tokio::sync::Mutex<()> = tokio::sync::Mutex::const_new(());

async fn test_pool() -> Option<PgPool> {
    let url = std::env::var("TEST_DATABASE_URL").ok()?;
    let pool = create_pool(&url).await.expect("connect to test database");

    sqlx::query(
        "CREATE TABLE IF NOT EXISTS items (\
             id BIGINT GENERATED ALWAYS AS IDENTITY PRIMARY KEY, \
             name TEXT NOT NULL, \
             quantity INTEGER NOT NULL, \
             description TEXT\
         )",
    )
    .execute(&pool)
    .await
    .expect("create items table");

    sqlx::query("TRUNCATE items RESTART IDENTITY")
        .execute(&pool)
        .await
        .expect("reset items table");

    Some(pool)
}

fn payload(name: &str, quantity: i32, description: Option<&str>) -> ItemPayload {
    ItemPayload {
        name: Some(name.to_string()),
        quantity: Some(quantity),
        description: description.map(String::from),
    }
}

#[tokio::test]
async fn create_update_delete_round_trip() {
    let _guard = DB_LOCK.lock().await;
    let Some(pool) = test_pool().await else {
        eprintln!("TEST_DATABASE_URL not set, skipping");
        return;
    };
    let items = ItemsService::new(pool);

    // Create returns the stored row with a fresh id and null description.
    let created = items.create(payload("Bolt", 10, None)).await.unwrap();
    assert_eq!(created.id, 1);
    assert_eq!(created.name, "Bolt");
    assert_eq!(created.quantity, 10);
    assert_eq!(created.description, None);

    let listed = items.list().await.unwrap();
    assert_eq!(listed, vec![created.clone()]);

    // Update is a full overwrite, re-read from storage.
    let updated = items
        .update(created.id, payload("Bolt", 5, Some("M6")))
        .await
        .unwrap();
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.quantity, 5);
    assert_eq!(updated.description.as_deref(), Some("M6"));

    // Overwriting with no description clears the stored one.
    let cleared = items
        .update(created.id, payload("Bolt", 5, None))
        .await
        .unwrap();
    assert_eq!(cleared.description, None);

    items.delete(created.id).await.unwrap();
    assert!(items.list().await.unwrap().is_empty());

    // Second delete of the same id reports NotFound, not success.
    assert!(matches!(
        items.delete(created.id).await,
        Err(AppError::NotFound(_))
    ));
}

#[tokio::test]
async fn rejected_create_persists_nothing() {
    let _guard = DB_LOCK.lock().await;
    let Some(pool) = test_pool().await else {
        eprintln!("TEST_DATABASE_URL not set, skipping");
        return;
    };
    let items = ItemsService::new(pool);

    let before = items.list().await.unwrap().len();

    let missing_name = ItemPayload {
        name: None,
        quantity: Some(3),
        description: None,
    };
    assert!(matches!(
        items.create(missing_name).await,
        Err(AppError::InvalidInput(_))
    ));

    assert_eq!(items.list().await.unwrap().len(), before);
}

#[tokio::test]
async fn unknown_id_leaves_the_store_unchanged() {
    let _guard = DB_LOCK.lock().await;
    let Some(pool) = test_pool().await else {
        eprintln!("TEST_DATABASE_URL not set, skipping");
        return;
    };
    let items = ItemsService::new(pool);

    assert!(matches!(
        items.update(999_999, payload("Ghost", 1, None)).await,
        Err(AppError::NotFound(_))
    ));
    assert!(matches!(
        items.delete(999_999).await,
        Err(AppError::NotFound(_))
    ));
}
