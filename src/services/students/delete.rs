use tracing::info;

use super::StudentService;
use crate::errors::Result;
use crate::services::transaction::finish;

pub async fn delete_student(service: &StudentService, id: i64) -> Result<()> {
    let tx = service.storage.begin().await?;
    let result = tx.storage().delete_student(id).await;
    // 不存在时同样视为成功
    if finish(tx, result).await? {
        info!("Student {} deleted", id);
    }
    Ok(())
}
