//! 包裝配置模型

use serde::{Deserialize, Serialize};

use crate::tier::HierarchyShape;

/// 專案包裝配置（序號存在後即鎖定）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackagingConfig {
    /// 每箱單品數（1-100）
    pub items_per_case: u32,

    /// 每個 SSCC 的箱數（0-50，0 表示無箱層級）
    pub cases_per_sscc: u32,

    /// SSCC 數量（1-20）
    pub number_of_sscc: u32,

    /// 是否使用內箱
    #[serde(default)]
    pub use_inner_cases: bool,

    /// 每箱內箱數（僅在使用內箱時有意義）
    #[serde(default)]
    pub inner_cases_per_case: u32,

    /// 每內箱單品數（僅在使用內箱時有意義）
    #[serde(default)]
    pub items_per_inner_case: u32,

    /// 廠商代碼
    pub company_prefix: String,

    /// 單品產品代碼
    pub item_product_code: String,

    /// 箱產品代碼
    pub case_product_code: String,

    /// 內箱產品代碼（未設定時沿用箱產品代碼）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inner_case_product_code: Option<String>,

    /// SSCC 指示碼（單一數字）
    pub sscc_indicator_digit: String,

    /// 箱指示碼（單一數字，內箱共用）
    pub case_indicator_digit: String,

    /// 單品指示碼（單一數字）
    pub item_indicator_digit: String,
}

impl PackagingConfig {
    /// 創建新的包裝配置（預設：每個 SSCC 直接裝 10 個單品）
    pub fn new(
        company_prefix: impl Into<String>,
        item_product_code: impl Into<String>,
        case_product_code: impl Into<String>,
    ) -> Self {
        Self {
            items_per_case: 10,
            cases_per_sscc: 0,
            number_of_sscc: 1,
            use_inner_cases: false,
            inner_cases_per_case: 0,
            items_per_inner_case: 0,
            company_prefix: company_prefix.into(),
            item_product_code: item_product_code.into(),
            case_product_code: case_product_code.into(),
            inner_case_product_code: None,
            sscc_indicator_digit: "0".to_string(),
            case_indicator_digit: "1".to_string(),
            item_indicator_digit: "0".to_string(),
        }
    }

    /// 建構器模式：設置每箱單品數
    pub fn with_items_per_case(mut self, items: u32) -> Self {
        self.items_per_case = items;
        self
    }

    /// 建構器模式：設置每個 SSCC 的箱數
    pub fn with_cases_per_sscc(mut self, cases: u32) -> Self {
        self.cases_per_sscc = cases;
        self
    }

    /// 建構器模式：設置 SSCC 數量
    pub fn with_number_of_sscc(mut self, count: u32) -> Self {
        self.number_of_sscc = count;
        self
    }

    /// 建構器模式：啟用內箱
    pub fn with_inner_cases(mut self, inner_cases_per_case: u32, items_per_inner_case: u32) -> Self {
        self.use_inner_cases = true;
        self.inner_cases_per_case = inner_cases_per_case;
        self.items_per_inner_case = items_per_inner_case;
        self
    }

    /// 建構器模式：停用內箱
    pub fn without_inner_cases(mut self) -> Self {
        self.use_inner_cases = false;
        self.inner_cases_per_case = 0;
        self.items_per_inner_case = 0;
        self
    }

    /// 建構器模式：設置三個指示碼
    pub fn with_indicator_digits(
        mut self,
        sscc: impl Into<String>,
        case: impl Into<String>,
        item: impl Into<String>,
    ) -> Self {
        self.sscc_indicator_digit = sscc.into();
        self.case_indicator_digit = case.into();
        self.item_indicator_digit = item.into();
        self
    }

    /// 建構器模式：設置內箱產品代碼
    pub fn with_inner_case_product_code(mut self, code: impl Into<String>) -> Self {
        self.inner_case_product_code = Some(code.into());
        self
    }

    /// 層級結構型態
    pub fn shape(&self) -> HierarchyShape {
        HierarchyShape::select(self.cases_per_sscc, self.use_inner_cases)
    }

    /// 內箱實際使用的產品代碼
    pub fn effective_inner_case_product_code(&self) -> &str {
        self.inner_case_product_code
            .as_deref()
            .unwrap_or(&self.case_product_code)
    }
}
