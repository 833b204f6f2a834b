//! 批次刪除
//!
//! 各專案獨立刪除並行執行，非原子操作：單筆失敗不會回復其他筆。
//! 結果只回報總數，不對應到個別專案。

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::store::ProjectStore;

/// 批次操作結果
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchOutcome {
    /// 請求數量
    pub requested: usize,
    /// 成功數量
    pub deleted: usize,
    /// 失敗數量
    pub failed: usize,
}

impl BatchOutcome {
    /// 是否全部成功
    pub fn is_complete_success(&self) -> bool {
        self.failed == 0
    }
}

impl ProjectStore {
    /// 盡力刪除多個專案
    pub fn delete_projects(&self, ids: &[Uuid]) -> BatchOutcome {
        let deleted = ids
            .par_iter()
            .map(|&id| self.delete_project(id))
            .filter(Result::is_ok)
            .count();

        let outcome = BatchOutcome {
            requested: ids.len(),
            deleted,
            failed: ids.len() - deleted,
        };

        if outcome.is_complete_success() {
            tracing::info!("批次刪除完成: {} 筆", outcome.deleted);
        } else {
            tracing::warn!(
                "批次刪除部分失敗: 成功 {} 筆，失敗 {} 筆",
                outcome.deleted,
                outcome.failed
            );
        }

        outcome
    }
}
