//! 包裝節點模型

use serde::{Deserialize, Serialize};

use crate::tier::Tier;

/// 包裝節點（每個實體單位一個，產生文件時暫時建立）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackagingNode {
    /// 層級
    pub tier: Tier,

    /// 層級內序號位置（從 1 起算）
    pub tier_index: usize,

    /// 使用者提供的序號（已去除前後空白）
    pub serial: String,

    /// 標準識別碼（EPC URI）
    pub identifier: String,

    /// 上一層容器節點的 tier_index（SSCC 為 None）
    pub parent_index: Option<usize>,
}

impl PackagingNode {
    /// 創建新的包裝節點（識別碼尚未計算）
    pub fn new(tier: Tier, tier_index: usize, serial: impl Into<String>) -> Self {
        Self {
            tier,
            tier_index,
            serial: serial.into(),
            identifier: String::new(),
            parent_index: None,
        }
    }

    /// 建構器模式：設置上一層容器
    pub fn with_parent(mut self, parent_index: usize) -> Self {
        self.parent_index = Some(parent_index);
        self
    }

    /// 建構器模式：設置識別碼
    pub fn with_identifier(mut self, identifier: String) -> Self {
        self.identifier = identifier;
        self
    }

    /// 是否為根節點（SSCC）
    pub fn is_root(&self) -> bool {
        self.parent_index.is_none()
    }
}
