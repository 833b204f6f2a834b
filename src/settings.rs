//! 產生器設定
//!
//! 從 JSON 檔讀取，缺少的鍵使用預設值。

use epcis_engine::emitter::DEFAULT_SCHEMA_VERSION;
use epcis_engine::AggregationGenerator;
use epcis_store::naming::DEFAULT_FILE_NAME;
use epcis_store::ProjectStore;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// 設定讀取錯誤
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("無法讀取設定檔 {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("設定檔格式錯誤: {0}")]
    Json(#[from] serde_json::Error),
}

/// 產生器設定
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GeneratorSettings {
    /// 未命名專案的下載檔名
    pub default_file_name: String,

    /// EPCIS 文件版本
    pub schema_version: String,

    /// 請求未指定時使用的讀取點
    pub default_read_point: Option<String>,

    /// 請求未指定時使用的業務位置
    pub default_biz_location: Option<String>,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            default_file_name: DEFAULT_FILE_NAME.to_string(),
            schema_version: DEFAULT_SCHEMA_VERSION.to_string(),
            default_read_point: None,
            default_biz_location: None,
        }
    }
}

impl GeneratorSettings {
    /// 從 JSON 檔讀取設定
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&content)
    }

    /// 從 JSON 字串解析設定
    pub fn from_json(content: &str) -> Result<Self, SettingsError> {
        Ok(serde_json::from_str(content)?)
    }

    /// 依設定建立產生器
    pub fn generator(&self) -> AggregationGenerator {
        AggregationGenerator::new().with_schema_version(self.schema_version.clone())
    }

    /// 依設定建立專案儲存
    pub fn store(&self) -> ProjectStore {
        ProjectStore::new()
            .with_generator(self.generator())
            .with_default_file_name(self.default_file_name.clone())
    }
}
