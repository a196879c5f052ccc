// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::repositories::state_repository::StateRepository;
use crate::domain::repositories::RepositoryError;
use std::sync::Arc;
use tracing::{error, info, warn};

/// 全局序列号
///
/// OpenKJ 客户端通过轮询序列号发现变化，任何状态变更都要推进它
#[derive(Clone)]
pub struct SerialCounter {
    state: Arc<dyn StateRepository>,
}

impl SerialCounter {
    pub fn new(state: Arc<dyn StateRepository>) -> Self {
        Self { state }
    }

    /// 确保状态行存在
    pub async fn ensure_row(&self) -> Result<(), RepositoryError> {
        if self.state.ensure_row().await? {
            info!("Created global state row with serial 0");
        }
        Ok(())
    }

    /// 当前序列号，状态行缺失时先创建
    pub async fn current(&self) -> Result<i32, RepositoryError> {
        if let Some(serial) = self.state.serial().await? {
            return Ok(serial);
        }
        self.ensure_row().await?;
        Ok(self.state.serial().await?.unwrap_or(0))
    }

    /// 当前序列号，状态行缺失时视为 0
    pub async fn peek(&self) -> Result<i32, RepositoryError> {
        Ok(self.state.serial().await?.unwrap_or(0))
    }

    /// 原子递增并返回新序列号
    ///
    /// 不会失败：数据库出错时记录日志，并返回当前值加一（读取也失败时返回 0）
    pub async fn advance(&self) -> i32 {
        match self.state.increment_serial().await {
            Ok(Some(serial)) => serial,
            Ok(None) => {
                warn!("Global state row missing while advancing serial; recreating");
                match self.ensure_row().await {
                    Ok(()) => match self.state.increment_serial().await {
                        Ok(Some(serial)) => serial,
                        Ok(None) => self.fallback().await,
                        Err(e) => {
                            error!(error = %e, "Failed to advance serial after recreating state row");
                            self.fallback().await
                        }
                    },
                    Err(e) => {
                        error!(error = %e, "Failed to recreate global state row");
                        0
                    }
                }
            }
            Err(e) => {
                error!(error = %e, "Failed to advance serial");
                self.fallback().await
            }
        }
    }

    async fn fallback(&self) -> i32 {
        match self.state.serial().await {
            Ok(Some(serial)) => serial + 1,
            Ok(None) => 0,
            Err(e) => {
                error!(error = %e, "Failed to read serial for fallback");
                0
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::in_memory::InMemoryStore;

    fn counter(store: &Arc<InMemoryStore>) -> SerialCounter {
        SerialCounter::new(store.clone())
    }

    #[tokio::test]
    async fn test_advance_is_monotonic() {
        let store = Arc::new(InMemoryStore::new());
        let serial = counter(&store);

        assert_eq!(serial.current().await.unwrap(), 0);
        assert_eq!(serial.advance().await, 1);
        assert_eq!(serial.advance().await, 2);
        assert_eq!(serial.current().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_missing_row_is_recreated() {
        let store = Arc::new(InMemoryStore::new());
        store.drop_state_row().await;
        let serial = counter(&store);

        assert_eq!(serial.peek().await.unwrap(), 0);
        assert_eq!(serial.advance().await, 1);

        store.drop_state_row().await;
        assert_eq!(serial.current().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_increment_failure_falls_back_to_current_plus_one() {
        let store = Arc::new(InMemoryStore::new());
        store.set_serial(41).await;
        store.fail("state.increment");

        assert_eq!(counter(&store).advance().await, 42);
    }

    #[tokio::test]
    async fn test_total_failure_falls_back_to_zero() {
        let store = Arc::new(InMemoryStore::new());
        store.fail("state.increment");
        store.fail("state.read");

        assert_eq!(counter(&store).advance().await, 0);
    }
}
