use crate::domain::model::{CacheKey, Domain, WorkspaceId};
use crate::utils::error::Result;
use async_trait::async_trait;

/// 發出網域轉移請求的後端
#[async_trait]
pub trait TransferApi: Send + Sync {
    async fn transfer(
        &self,
        domain: &Domain,
        current_workspace: &WorkspaceId,
        new_workspace: &WorkspaceId,
    ) -> Result<()>;
}

/// 共用的 client 端資料快取，只暴露 invalidation 能力
pub trait CacheInvalidator: Send + Sync {
    /// 將所有符合 predicate 的 entry 標記為 stale，回傳命中的數量
    fn invalidate(&self, predicate: &dyn Fn(&CacheKey) -> bool) -> usize;
}

/// Toast 風格的通知。每次送出：先 `on_pending`，再恰好一次 `on_success` 或 `on_error`。
pub trait Notifier: Send + Sync {
    fn on_pending(&self, message: &str);
    fn on_success(&self, message: &str);
    fn on_error(&self, message: &str);
}

pub trait ConfigProvider: Send + Sync {
    fn api_base_url(&self) -> &str;
    fn current_workspace(&self) -> &WorkspaceId;
}
