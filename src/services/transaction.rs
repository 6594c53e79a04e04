use tracing::warn;

use crate::errors::Result;
use crate::storage::StorageTransaction;

/// 根据步骤结果结束事务：成功则提交，失败则回滚并原样返回错误
pub(crate) async fn finish<T>(tx: Box<dyn StorageTransaction>, result: Result<T>) -> Result<T> {
    match result {
        Ok(value) => {
            tx.commit().await?;
            Ok(value)
        }
        Err(err) => {
            if let Err(rollback_err) = tx.rollback().await {
                warn!("事务回滚失败: {}", rollback_err);
            }
            Err(err)
        }
    }
}
