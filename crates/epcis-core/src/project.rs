//! 專案鎖定狀態機
//!
//! Draft → SerialsAssigned → Completed，單向轉換，不可回到 Draft。

use serde::{Deserialize, Serialize};

use crate::{EpcisError, Result};

/// 專案鎖定狀態
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ProjectState {
    /// 配置可編輯，尚無序號
    #[default]
    Draft,
    /// 已有序號，配置鎖定，尚未產生文件
    SerialsAssigned,
    /// 已產生文件，配置與序號完全不可變（終止狀態）
    Completed,
}

impl ProjectState {
    /// 配置與序號是否已鎖定
    pub fn is_locked(&self) -> bool {
        !matches!(self, ProjectState::Draft)
    }

    /// 是否可產生文件
    pub fn can_generate(&self) -> bool {
        self.is_locked()
    }

    /// 轉換到下一個狀態
    ///
    /// Completed → Completed 允許（重新產生），其餘回頭轉換一律拒絕。
    pub fn transition_to(self, next: ProjectState) -> Result<ProjectState> {
        use ProjectState::*;

        match (self, next) {
            (Draft, SerialsAssigned) | (SerialsAssigned, Completed) | (Completed, Completed) => {
                Ok(next)
            }
            (Draft, Completed) => Err(EpcisError::invalid("serials", "尚未提交序號，無法產生文件")),
            (current, next) if current == next => Ok(next),
            _ => Err(EpcisError::ConfigurationLocked),
        }
    }
}
