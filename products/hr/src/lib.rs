//! HR vertical slice: the employee store and its SeaORM backing.

mod seed;
mod sea_orm_store;
mod store;

pub use entity::employees::Model as Employee;
pub use sea_orm_store::SeaOrmEmployeeStore;
pub use seed::seed_demo;
pub use store::{EmployeeInput, EmployeeStore, StoreError, StoreResult};

#[cfg(any(test, feature = "testing"))]
pub mod testing {
    //! Test support shared with the server crate.

    use migration::{Migrator, MigratorTrait};
    use platform_db::{DbPool, connect_url};

    /// In-memory SQLite with the real migrations applied. In-memory databases
    /// are per connection, so the pool holds exactly one.
    pub async fn migrated_sqlite() -> DbPool {
        let pool = connect_url("sqlite::memory:", 1)
            .await
            .expect("sqlite in-memory pool");
        Migrator::up(&pool, None)
            .await
            .expect("migrations apply on sqlite");
        pool
    }
}
