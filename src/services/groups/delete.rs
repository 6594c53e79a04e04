use tracing::{info, warn};

use super::{GroupService, get::load_detail};
use crate::errors::{EDeptError, Result};
use crate::services::transaction::finish;
use crate::storage::Storage;

pub async fn delete_group(service: &GroupService, id: i64) -> Result<()> {
    let tx = service.storage.begin().await?;
    let result = guarded_delete(tx.storage(), id).await;
    finish(tx, result).await
}

async fn guarded_delete(storage: &dyn Storage, id: i64) -> Result<()> {
    let Some(detail) = load_detail(storage, id).await? else {
        return Ok(());
    };

    if detail.has_dependents() {
        warn!(
            "Refusing to delete group {}: {} students, {} subjects",
            id,
            detail.students.len(),
            detail.subjects.len()
        );
        return Err(EDeptError::validation(
            "Cannot delete group with existing students or subjects",
        ));
    }

    storage.delete_group(id).await?;
    info!("Group {} deleted", id);
    Ok(())
}
