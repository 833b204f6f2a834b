//! 序號清單模型

use serde::{Deserialize, Serialize};

use crate::tier::{HierarchyPlan, Tier};

/// 使用者提交的各層級序號清單（依 tier_index 排序）
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SerialNumbers {
    #[serde(default)]
    pub sscc: Vec<String>,

    #[serde(default)]
    pub case: Vec<String>,

    /// 內箱序號（僅在內箱層級存在時需要）
    #[serde(default)]
    pub inner_case: Vec<String>,

    #[serde(default)]
    pub item: Vec<String>,
}

impl SerialNumbers {
    /// 創建空的序號清單
    pub fn new() -> Self {
        Self::default()
    }

    /// 依規劃建立對應長度的空白清單（供輸入介面使用）
    pub fn required(plan: &HierarchyPlan) -> Self {
        let blank = |tier: Tier| vec![String::new(); plan.count(tier)];
        Self {
            sscc: blank(Tier::Sscc),
            case: blank(Tier::Case),
            inner_case: blank(Tier::InnerCase),
            item: blank(Tier::Item),
        }
    }

    /// 建構器模式：設置指定層級的序號
    pub fn with_tier<I, S>(mut self, tier: Tier, serials: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        *self.for_tier_mut(tier) = serials.into_iter().map(Into::into).collect();
        self
    }

    /// 取得指定層級的序號
    pub fn for_tier(&self, tier: Tier) -> &[String] {
        match tier {
            Tier::Sscc => &self.sscc,
            Tier::Case => &self.case,
            Tier::InnerCase => &self.inner_case,
            Tier::Item => &self.item,
        }
    }

    fn for_tier_mut(&mut self, tier: Tier) -> &mut Vec<String> {
        match tier {
            Tier::Sscc => &mut self.sscc,
            Tier::Case => &mut self.case,
            Tier::InnerCase => &mut self.inner_case,
            Tier::Item => &mut self.item,
        }
    }

    /// 去除前後空白後的副本
    pub fn normalized(&self) -> Self {
        let trim = |list: &[String]| list.iter().map(|s| s.trim().to_string()).collect();
        Self {
            sscc: trim(&self.sscc),
            case: trim(&self.case),
            inner_case: trim(&self.inner_case),
            item: trim(&self.item),
        }
    }

    /// 是否已有任何序號
    pub fn is_empty(&self) -> bool {
        Tier::ALL.iter().all(|&tier| self.for_tier(tier).is_empty())
    }

    /// 序號總數
    pub fn total(&self) -> usize {
        Tier::ALL.iter().map(|&tier| self.for_tier(tier).len()).sum()
    }
}
