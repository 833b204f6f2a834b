//! # EPCIS Core
//!
//! 核心資料模型與類型定義（包裝層級、序號、專案鎖定狀態）

pub mod config;
pub mod event;
pub mod node;
pub mod project;
pub mod serial;
pub mod tier;

// Re-export 主要類型
pub use config::PackagingConfig;
pub use event::{AggregationEvent, GenerationContext, ACTION_ADD, BIZ_STEP_PACKING};
pub use node::PackagingNode;
pub use project::ProjectState;
pub use serial::SerialNumbers;
pub use tier::{HierarchyPlan, HierarchyShape, Tier, TierPlan};

/// EPCIS 聚合錯誤類型
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EpcisError {
    /// 配置欄位超出範圍或格式錯誤（field 為外部欄位名稱，如 `itemsPerCase`）
    #[error("配置無效 [{field}]: {reason}")]
    ConfigurationInvalid { field: &'static str, reason: String },

    /// 已有序號後嘗試修改配置或序號
    #[error("配置已鎖定，無法修改")]
    ConfigurationLocked,

    /// 序號清單長度與層級規劃數量不符
    #[error("層級數量不符 [{tier}]: 預期 {expected}，實際 {actual}")]
    HierarchyMismatch {
        tier: Tier,
        expected: usize,
        actual: usize,
    },

    /// 序號去除空白後為空或含控制字元（index 從 1 起算）
    #[error("序號不完整 [{tier}] 第 {index} 筆")]
    IncompleteSerial { tier: Tier, index: usize },

    #[error("找不到專案: {0}")]
    NotFound(String),

    /// 產生文件時的內部錯誤，對已通過驗證的輸入不應發生
    #[error("文件產生失敗: {0}")]
    GenerationFailure(String),
}

impl EpcisError {
    /// 建立配置無效錯誤
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::ConfigurationInvalid {
            field,
            reason: reason.into(),
        }
    }

    /// 是否為呼叫端可修正的輸入錯誤
    pub fn is_caller_correctable(&self) -> bool {
        matches!(
            self,
            Self::ConfigurationInvalid { .. }
                | Self::HierarchyMismatch { .. }
                | Self::IncompleteSerial { .. }
        )
    }

    /// 是否為程式缺陷（而非使用錯誤）
    pub fn is_defect(&self) -> bool {
        matches!(self, Self::GenerationFailure(_))
    }
}

pub type Result<T> = std::result::Result<T, EpcisError>;
