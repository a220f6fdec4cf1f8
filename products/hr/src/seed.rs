use tracing::info;

use crate::{EmployeeInput, EmployeeStore, StoreResult};

const DEMO_EMPLOYEES: &[(&str, &str, &str)] = &[
    ("Ada", "Lovelace", "ada@example.com"),
    ("Alan", "Turing", "alan@example.com"),
    ("Grace", "Hopper", "grace@example.com"),
];

/// Insert demo employees into an empty store. Returns how many were inserted.
pub async fn seed_demo(store: &dyn EmployeeStore) -> StoreResult<usize> {
    if !store.list().await?.is_empty() {
        info!("employees already present; skipping seed");
        return Ok(0);
    }
    for (first, last, email) in DEMO_EMPLOYEES {
        store.create(EmployeeInput::new(*first, *last, *email)).await?;
    }
    info!(count = DEMO_EMPLOYEES.len(), "demo employees seeded");
    Ok(DEMO_EMPLOYEES.len())
}
