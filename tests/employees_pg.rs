use anyhow::{Context, Result};
use migration::{Migrator, MigratorTrait};
use platform_db::{DbPool, connect_url};
use products_hr::{EmployeeInput, EmployeeStore, SeaOrmEmployeeStore, StoreError};
use sea_orm::{ConnectionTrait, DatabaseBackend, Statement};
use url::Url;

/// Creates a fresh database for one test. Returns `None` when
/// `TEST_DATABASE_URL` is unset.
async fn scratch_database(name: &str) -> Result<Option<(DbPool, DbPool, String)>> {
    let Ok(base) = std::env::var("TEST_DATABASE_URL") else {
        eprintln!("TEST_DATABASE_URL not set; skipping postgres test");
        return Ok(None);
    };
    let url = Url::parse(&base).context("invalid TEST_DATABASE_URL")?;
    let db_name = format!("employees_{name}_{}", std::process::id());

    let mut admin_url = url.clone();
    admin_url.set_path("/postgres");
    let admin = connect_url(admin_url.as_str(), 1).await?;
    exec(&admin, format!("DROP DATABASE IF EXISTS \"{db_name}\" WITH (FORCE)")).await?;
    exec(&admin, format!("CREATE DATABASE \"{db_name}\"")).await?;

    let mut test_url = url;
    test_url.set_path(&format!("/{db_name}"));
    let pool = connect_url(test_url.as_str(), 5).await?;
    Ok(Some((admin, pool, db_name)))
}

async fn drop_database(admin: DbPool, pool: DbPool, db_name: &str) -> Result<()> {
    drop(pool);
    exec(
        &admin,
        format!("DROP DATABASE IF EXISTS \"{db_name}\" WITH (FORCE)"),
    )
    .await
}

async fn exec(pool: &DbPool, sql: impl Into<String>) -> Result<()> {
    pool.execute(Statement::from_string(DatabaseBackend::Postgres, sql.into()))
        .await?;
    Ok(())
}

#[tokio::test]
async fn migrations_apply_and_roll_back() -> Result<()> {
    let Some((admin, pool, db_name)) = scratch_database("migrations").await? else {
        return Ok(());
    };

    Migrator::up(&pool, None).await?;
    assert!(Migrator::get_pending_migrations(&pool).await?.is_empty());

    Migrator::down(&pool, None).await?;
    assert_eq!(Migrator::get_pending_migrations(&pool).await?.len(), 1);

    drop_database(admin, pool, &db_name).await
}

#[tokio::test]
async fn employee_lifecycle_on_postgres() -> Result<()> {
    let Some((admin, pool, db_name)) = scratch_database("lifecycle").await? else {
        return Ok(());
    };
    Migrator::up(&pool, None).await?;
    let store = SeaOrmEmployeeStore::new(pool.clone());

    assert!(store.list().await?.is_empty());

    let created = store
        .create(EmployeeInput::new("Alice", "Liddell", "alice@example.com"))
        .await?;
    assert_eq!(store.get(created.id).await?, Some(created.clone()));

    let updated = store
        .update(
            created.id,
            EmployeeInput {
                email: Some("alice@wonderland.example".into()),
                ..EmployeeInput::default()
            },
        )
        .await?;
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.first_name, None);
    assert_eq!(updated.email.as_deref(), Some("alice@wonderland.example"));

    store.delete(created.id).await?;
    assert_eq!(store.get(created.id).await?, None);
    assert!(matches!(
        store.delete(created.id).await,
        Err(StoreError::NotFound(_))
    ));
    assert!(matches!(
        store.update(created.id, EmployeeInput::default()).await,
        Err(StoreError::NotFound(_))
    ));

    drop(store);
    drop_database(admin, pool, &db_name).await
}
