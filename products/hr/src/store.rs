use async_trait::async_trait;
use sea_orm::DbErr;
use serde::{Deserialize, Deserializer};
use thiserror::Error;

use crate::Employee;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("employee {0} not found")]
    NotFound(i64),
    #[error(transparent)]
    Db(#[from] DbErr),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Business fields accepted on create and update.
///
/// Every field is optional and a missing one is stored as null. Any `id` in
/// the payload is ignored; identifiers come from the path or the database.
/// Numbers and booleans are accepted and stored as their text form.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeInput {
    #[serde(default, deserialize_with = "scalar_text")]
    pub first_name: Option<String>,
    #[serde(default, deserialize_with = "scalar_text")]
    pub last_name: Option<String>,
    #[serde(default, deserialize_with = "scalar_text")]
    pub email: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Text(String),
    Bool(bool),
    Int(i64),
    UInt(u64),
    Float(f64),
}

impl From<Scalar> for String {
    fn from(value: Scalar) -> Self {
        match value {
            Scalar::Text(text) => text,
            Scalar::Bool(flag) => flag.to_string(),
            Scalar::Int(n) => n.to_string(),
            Scalar::UInt(n) => n.to_string(),
            Scalar::Float(n) => n.to_string(),
        }
    }
}

fn scalar_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Scalar>::deserialize(deserializer)?.map(String::from))
}

impl EmployeeInput {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            first_name: Some(first_name.into()),
            last_name: Some(last_name.into()),
            email: Some(email.into()),
        }
    }
}

/// CRUD over the employee table.
///
/// `get` reports absence as `Ok(None)`; `update` and `delete` treat a missing
/// id as [`StoreError::NotFound`].
#[async_trait]
pub trait EmployeeStore: Send + Sync {
    async fn list(&self) -> StoreResult<Vec<Employee>>;
    async fn get(&self, id: i64) -> StoreResult<Option<Employee>>;
    async fn create(&self, input: EmployeeInput) -> StoreResult<Employee>;
    async fn update(&self, id: i64, input: EmployeeInput) -> StoreResult<Employee>;
    async fn delete(&self, id: i64) -> StoreResult<()>;
}
