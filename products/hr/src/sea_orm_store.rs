use async_trait::async_trait;
use entity::employees;
use platform_db::DbPool;
use sea_orm::{ActiveModelTrait, DbErr, EntityTrait, NotSet, QueryOrder, Set, Unchanged};
use tracing::debug;

use crate::{Employee, EmployeeInput, EmployeeStore, StoreError, StoreResult};

/// [`EmployeeStore`] backed by the `employees` table.
#[derive(Clone, Debug)]
pub struct SeaOrmEmployeeStore {
    pool: DbPool,
}

impl SeaOrmEmployeeStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EmployeeStore for SeaOrmEmployeeStore {
    async fn list(&self) -> StoreResult<Vec<Employee>> {
        let rows = employees::Entity::find()
            .order_by_asc(employees::Column::Id)
            .all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn get(&self, id: i64) -> StoreResult<Option<Employee>> {
        let row = employees::Entity::find_by_id(id).one(&self.pool).await?;
        Ok(row)
    }

    async fn create(&self, input: EmployeeInput) -> StoreResult<Employee> {
        let model = employees::ActiveModel {
            id: NotSet,
            first_name: Set(input.first_name),
            last_name: Set(input.last_name),
            email: Set(input.email),
        };
        let created = model.insert(&self.pool).await?;
        debug!(id = created.id, "employee created");
        Ok(created)
    }

    async fn update(&self, id: i64, input: EmployeeInput) -> StoreResult<Employee> {
        let model = employees::ActiveModel {
            id: Unchanged(id),
            first_name: Set(input.first_name),
            last_name: Set(input.last_name),
            email: Set(input.email),
        };
        let updated = model
            .update(&self.pool)
            .await
            .map_err(|err| missing_row(err, id))?;
        debug!(id, "employee updated");
        Ok(updated)
    }

    async fn delete(&self, id: i64) -> StoreResult<()> {
        let result = employees::Entity::delete_by_id(id)
            .exec(&self.pool)
            .await?;
        if result.rows_affected == 0 {
            return Err(StoreError::NotFound(id));
        }
        debug!(id, "employee deleted");
        Ok(())
    }
}

/// An UPDATE that touched no row means the id does not exist (or was deleted
/// concurrently).
fn missing_row(err: DbErr, id: i64) -> StoreError {
    match err {
        DbErr::RecordNotUpdated | DbErr::RecordNotFound(_) => StoreError::NotFound(id),
        other => StoreError::Db(other),
    }
}
