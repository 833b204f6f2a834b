//! 單檔產生請求（命令列使用）

use chrono::{DateTime, Utc};
use epcis_core::{EpcisError, PackagingConfig, Result, SerialNumbers};
use epcis_store::{GeneratedDocument, GenerationRequest, ProjectStore};
use serde::{Deserialize, Serialize};

use crate::settings::GeneratorSettings;

/// 包含配置、序號與產生參數的請求檔
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationFile {
    /// 專案名稱（決定輸出檔名）
    #[serde(default)]
    pub project_name: Option<String>,

    pub configuration: PackagingConfig,

    pub serials: SerialNumbers,

    #[serde(default)]
    pub read_point: Option<String>,

    #[serde(default)]
    pub biz_location: Option<String>,

    /// 固定事件時間（未指定時使用目前時間）
    #[serde(default)]
    pub event_time: Option<DateTime<Utc>>,
}

impl GenerationFile {
    /// 以設定補齊讀取點與業務位置
    pub fn generation_request(&self, settings: &GeneratorSettings) -> Result<GenerationRequest> {
        let read_point = self
            .read_point
            .clone()
            .or_else(|| settings.default_read_point.clone())
            .ok_or_else(|| EpcisError::invalid("readPoint", "未指定讀取點"))?;
        let biz_location = self
            .biz_location
            .clone()
            .or_else(|| settings.default_biz_location.clone())
            .ok_or_else(|| EpcisError::invalid("bizLocation", "未指定業務位置"))?;

        Ok(GenerationRequest::new(read_point, biz_location))
    }

    /// 建立專案、提交序號並產生文件
    pub fn run(&self, store: &ProjectStore, settings: &GeneratorSettings) -> Result<GeneratedDocument> {
        let request = self.generation_request(settings)?;

        let id = store.create_project(self.project_name.clone());
        store.submit_serials(id, self.configuration.clone(), self.serials.clone())?;

        match self.event_time {
            Some(event_time) => store.generate_at(id, &request, event_time),
            None => store.generate(id, &request),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const REQUEST_JSON: &str = r#"{
        "projectName": "Demo Lot",
        "configuration": {
            "itemsPerCase": 2,
            "casesPerSscc": 0,
            "numberOfSscc": 1,
            "companyPrefix": "0614141",
            "itemProductCode": "12345",
            "caseProductCode": "54321",
            "ssccIndicatorDigit": "0",
            "caseIndicatorDigit": "1",
            "itemIndicatorDigit": "0"
        },
        "serials": {"sscc": ["000000001"], "item": ["A1", "A2"]},
        "eventTime": "2026-02-01T00:00:00Z"
    }"#;

    #[test]
    fn test_run_with_settings_defaults() {
        let file: GenerationFile = serde_json::from_str(REQUEST_JSON).unwrap();
        let settings = GeneratorSettings {
            default_read_point: Some("urn:epc:id:sgln:0614141.00777.0".to_string()),
            default_biz_location: Some("urn:epc:id:sgln:0614141.00888.0".to_string()),
            ..GeneratorSettings::default()
        };
        let store = settings.store();

        let document = file.run(&store, &settings).unwrap();

        assert_eq!(document.file_name, "Demo_Lot.xml");
        assert_eq!(document.result.events.len(), 1);
        let xml = String::from_utf8(document.content).unwrap();
        assert!(xml.contains("<eventTime>2026-02-01T00:00:00.000Z</eventTime>"));
        assert!(xml.contains("<parentID>urn:epc:id:sscc:0614141.0000000001</parentID>"));
    }

    #[test]
    fn test_missing_read_point() {
        let file: GenerationFile = serde_json::from_str(REQUEST_JSON).unwrap();
        let result = file.generation_request(&GeneratorSettings::default());

        assert!(matches!(
            result,
            Err(EpcisError::ConfigurationInvalid { field: "readPoint", .. })
        ));
    }
}
