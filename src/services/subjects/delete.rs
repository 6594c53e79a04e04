use tracing::info;

use super::SubjectService;
use crate::errors::Result;
use crate::services::transaction::finish;

pub async fn delete_subject(service: &SubjectService, id: i64) -> Result<()> {
    let tx = service.storage.begin().await?;
    let result = tx.storage().delete_subject(id).await;
    if finish(tx, result).await? {
        info!("Subject {} deleted", id);
    }
    Ok(())
}
