//! 標準識別碼建構（EPC URI）
//!
//! 不計算檢查碼，也不檢查跨層級序號唯一性。

use epcis_core::{PackagingConfig, Tier};

/// EPC 識別碼 URI 前綴
pub const EPC_URI_PREFIX: &str = "urn:epc:id:";

/// 識別碼建構器
#[derive(Debug, Clone, Copy)]
pub struct IdentifierBuilder<'a> {
    config: &'a PackagingConfig,
}

impl<'a> IdentifierBuilder<'a> {
    pub fn new(config: &'a PackagingConfig) -> Self {
        Self { config }
    }

    /// 由層級與序號產生識別碼
    pub fn build(&self, tier: Tier, serial: &str) -> String {
        let config = self.config;
        match tier {
            Tier::Sscc => format!(
                "{}sscc:{}.{}{}",
                EPC_URI_PREFIX, config.company_prefix, config.sscc_indicator_digit, serial
            ),
            Tier::Case => self.sgtin(&config.case_indicator_digit, &config.case_product_code, serial),
            // 內箱沿用箱指示碼
            Tier::InnerCase => self.sgtin(
                &config.case_indicator_digit,
                config.effective_inner_case_product_code(),
                serial,
            ),
            Tier::Item => self.sgtin(&config.item_indicator_digit, &config.item_product_code, serial),
        }
    }

    fn sgtin(&self, indicator: &str, product_code: &str, serial: &str) -> String {
        format!(
            "{}sgtin:{}.{}{}.{}",
            EPC_URI_PREFIX, self.config.company_prefix, indicator, product_code, serial
        )
    }
}
