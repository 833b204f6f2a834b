//! 專案記錄與請求模型

use chrono::{DateTime, Utc};
use epcis_core::{PackagingConfig, ProjectState, SerialNumbers};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 專案記錄（一個專案擁有一份配置與一組序號）
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// 專案ID
    pub id: Uuid,

    /// 專案名稱（決定下載檔名）
    pub name: Option<String>,

    /// 包裝配置
    pub config: Option<PackagingConfig>,

    /// 已提交的序號（已去除空白）
    pub serials: Option<SerialNumbers>,

    /// 鎖定狀態
    pub state: ProjectState,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,

    /// 最近一次產生文件的時間
    pub last_generated_at: Option<DateTime<Utc>>,
}

impl Project {
    /// 創建新的草稿專案
    pub fn new(name: Option<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name,
            config: None,
            serials: None,
            state: ProjectState::Draft,
            created_at: now,
            updated_at: now,
            last_generated_at: None,
        }
    }

    /// 檢查是否已鎖定
    pub fn is_locked(&self) -> bool {
        self.state.is_locked()
    }

    pub(crate) fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

/// 文件產生請求
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationRequest {
    /// 讀取點參照
    pub read_point: String,

    /// 業務位置參照
    pub biz_location: String,

    /// 呼叫端附帶的配置（若有，必須與已鎖定的配置相同）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub configuration: Option<PackagingConfig>,
}

impl GenerationRequest {
    pub fn new(read_point: impl Into<String>, biz_location: impl Into<String>) -> Self {
        Self {
            read_point: read_point.into(),
            biz_location: biz_location.into(),
            configuration: None,
        }
    }

    /// 建構器模式：附帶配置
    pub fn with_configuration(mut self, config: PackagingConfig) -> Self {
        self.configuration = Some(config);
        self
    }
}

/// 產生的文件（回應內容）
#[derive(Debug, Clone)]
pub struct GeneratedDocument {
    /// 下載檔名
    pub file_name: String,

    /// 文件內容
    pub content: Vec<u8>,

    /// 完整產生結果
    pub result: epcis_engine::GenerationResult,
}
