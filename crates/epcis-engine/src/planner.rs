//! 層級規劃
//!
//! 由包裝配置推導每個層級需要的節點數。

use epcis_core::{EpcisError, HierarchyPlan, HierarchyShape, PackagingConfig, Result, Tier, TierPlan};
use std::ops::RangeInclusive;

/// 每箱單品數允許範圍
pub const ITEMS_PER_CASE_RANGE: RangeInclusive<u32> = 1..=100;
/// 每個 SSCC 箱數允許範圍
pub const CASES_PER_SSCC_RANGE: RangeInclusive<u32> = 0..=50;
/// SSCC 數量允許範圍
pub const NUMBER_OF_SSCC_RANGE: RangeInclusive<u32> = 1..=20;
/// 每箱內箱數允許範圍（四層結構）
pub const INNER_CASES_PER_CASE_RANGE: RangeInclusive<u32> = 1..=50;
/// 每內箱單品數允許範圍（四層結構）
pub const ITEMS_PER_INNER_CASE_RANGE: RangeInclusive<u32> = 1..=100;

/// 層級規劃器
pub struct HierarchyPlanner;

impl HierarchyPlanner {
    /// 驗證配置並產生層級規劃
    pub fn plan(config: &PackagingConfig) -> Result<HierarchyPlan> {
        Self::validate(config)?;

        let shape = config.shape();
        let sscc_count = config.number_of_sscc as usize;
        let mut tiers = vec![TierPlan {
            tier: Tier::Sscc,
            count: sscc_count,
            per_parent: None,
        }];

        match shape {
            HierarchyShape::Direct => {
                // SSCC 直接包含單品
                push_tier(&mut tiers, Tier::Item, config.items_per_case);
            }
            HierarchyShape::Cased => {
                push_tier(&mut tiers, Tier::Case, config.cases_per_sscc);
                push_tier(&mut tiers, Tier::Item, config.items_per_case);
            }
            HierarchyShape::InnerCased => {
                push_tier(&mut tiers, Tier::Case, config.cases_per_sscc);
                push_tier(&mut tiers, Tier::InnerCase, config.inner_cases_per_case);
                push_tier(&mut tiers, Tier::Item, config.items_per_inner_case);
            }
        }

        let plan = HierarchyPlan::new(shape, tiers);
        tracing::debug!(
            "層級規劃: {:?}，單品 {} 個，節點 {} 個",
            shape,
            plan.total_items(),
            plan.total_nodes()
        );

        Ok(plan)
    }

    /// 檢查配置欄位範圍與格式
    pub fn validate(config: &PackagingConfig) -> Result<()> {
        check_range("itemsPerCase", config.items_per_case, &ITEMS_PER_CASE_RANGE)?;
        check_range("casesPerSscc", config.cases_per_sscc, &CASES_PER_SSCC_RANGE)?;
        check_range("numberOfSscc", config.number_of_sscc, &NUMBER_OF_SSCC_RANGE)?;

        if config.shape() == HierarchyShape::InnerCased {
            check_range(
                "innerCasesPerCase",
                config.inner_cases_per_case,
                &INNER_CASES_PER_CASE_RANGE,
            )?;
            check_range(
                "itemsPerInnerCase",
                config.items_per_inner_case,
                &ITEMS_PER_INNER_CASE_RANGE,
            )?;
        }

        check_digit_string("companyPrefix", &config.company_prefix)?;
        check_digit_string("itemProductCode", &config.item_product_code)?;
        check_digit_string("caseProductCode", &config.case_product_code)?;
        if let Some(code) = &config.inner_case_product_code {
            check_digit_string("innerCaseProductCode", code)?;
        }

        check_indicator_digit("ssccIndicatorDigit", &config.sscc_indicator_digit)?;
        check_indicator_digit("caseIndicatorDigit", &config.case_indicator_digit)?;
        check_indicator_digit("itemIndicatorDigit", &config.item_indicator_digit)?;

        Ok(())
    }
}

/// 依上一層數量乘上倍數，加入下一層
fn push_tier(tiers: &mut Vec<TierPlan>, tier: Tier, per_parent: u32) {
    let parent_count = tiers.last().map(|plan| plan.count).unwrap_or(0);
    let per_parent = per_parent as usize;
    tiers.push(TierPlan {
        tier,
        count: parent_count * per_parent,
        per_parent: Some(per_parent),
    });
}

fn check_range(field: &'static str, value: u32, range: &RangeInclusive<u32>) -> Result<()> {
    if range.contains(&value) {
        Ok(())
    } else {
        Err(EpcisError::invalid(
            field,
            format!("{} 超出範圍 {}-{}", value, range.start(), range.end()),
        ))
    }
}

fn check_digit_string(field: &'static str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(EpcisError::invalid(field, "不可為空"));
    }
    if !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(EpcisError::invalid(field, format!("'{}' 必須為純數字", value)));
    }
    Ok(())
}

fn check_indicator_digit(field: &'static str, value: &str) -> Result<()> {
    match value.as_bytes() {
        [b] if b.is_ascii_digit() => Ok(()),
        _ => Err(EpcisError::invalid(
            field,
            format!("'{}' 必須為單一數字", value),
        )),
    }
}
