//! 聚合事件模型

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::tier::Tier;

/// 動作標記：加入容器
pub const ACTION_ADD: &str = "ADD";

/// 業務步驟標記：包裝
pub const BIZ_STEP_PACKING: &str = "urn:epcglobal:cbv:bizstep:packing";

/// 產生請求的上下文（讀取點、業務位置、事件時間）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationContext {
    /// 讀取點參照
    pub read_point: String,

    /// 業務位置參照
    pub biz_location: String,

    /// 事件時間（產生時的系統時間，非使用者指定）
    pub event_time: DateTime<Utc>,
}

impl GenerationContext {
    /// 創建新的上下文，事件時間為目前時間
    pub fn new(read_point: impl Into<String>, biz_location: impl Into<String>) -> Self {
        Self {
            read_point: read_point.into(),
            biz_location: biz_location.into(),
            event_time: Utc::now(),
        }
    }

    /// 建構器模式：固定事件時間
    pub fn with_event_time(mut self, event_time: DateTime<Utc>) -> Self {
        self.event_time = event_time;
        self
    }
}

/// 聚合（包裝）事件：一個父容器與其依序排列的子項
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregationEvent {
    /// 父容器所在層級
    pub parent_tier: Tier,

    /// 動作標記
    pub action: String,

    /// 業務步驟標記
    pub biz_step: String,

    pub read_point: String,

    pub biz_location: String,

    pub event_time: DateTime<Utc>,

    /// 父容器識別碼
    pub parent_id: String,

    /// 子項識別碼（依 tier_index 遞增）
    pub child_ids: Vec<String>,
}

impl AggregationEvent {
    /// 創建新的包裝事件
    pub fn packing(
        parent_tier: Tier,
        parent_id: String,
        child_ids: Vec<String>,
        context: &GenerationContext,
    ) -> Self {
        Self {
            parent_tier,
            action: ACTION_ADD.to_string(),
            biz_step: BIZ_STEP_PACKING.to_string(),
            read_point: context.read_point.clone(),
            biz_location: context.biz_location.clone(),
            event_time: context.event_time,
            parent_id,
            child_ids,
        }
    }

    /// 子項數量
    pub fn child_count(&self) -> usize {
        self.child_ids.len()
    }
}
