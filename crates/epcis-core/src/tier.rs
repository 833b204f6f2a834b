//! 包裝層級與層級規劃模型

use serde::{Deserialize, Serialize};
use std::fmt;

/// 包裝層級（由外到內）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Tier {
    /// 物流貨櫃（SSCC）
    Sscc,
    /// 箱
    Case,
    /// 內箱
    InnerCase,
    /// 單品
    Item,
}

impl Tier {
    /// 所有層級，由外到內
    pub const ALL: [Tier; 4] = [Tier::Sscc, Tier::Case, Tier::InnerCase, Tier::Item];

    /// 是否以 SGTIN 編碼
    pub fn is_sgtin(&self) -> bool {
        !matches!(self, Tier::Sscc)
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Tier::Sscc => "SSCC",
            Tier::Case => "Case",
            Tier::InnerCase => "InnerCase",
            Tier::Item => "Item",
        };
        f.write_str(name)
    }
}

/// 層級結構型態
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HierarchyShape {
    /// SSCC → Item（casesPerSscc = 0）
    Direct,
    /// SSCC → Case → Item
    Cased,
    /// SSCC → Case → InnerCase → Item
    InnerCased,
}

impl HierarchyShape {
    /// 由兩個旗標決定結構型態
    pub fn select(cases_per_sscc: u32, use_inner_cases: bool) -> Self {
        match (cases_per_sscc, use_inner_cases) {
            (0, _) => HierarchyShape::Direct,
            (_, false) => HierarchyShape::Cased,
            (_, true) => HierarchyShape::InnerCased,
        }
    }

    /// 此型態包含的層級，由外到內
    pub fn tiers(&self) -> &'static [Tier] {
        match self {
            HierarchyShape::Direct => &[Tier::Sscc, Tier::Item],
            HierarchyShape::Cased => &[Tier::Sscc, Tier::Case, Tier::Item],
            HierarchyShape::InnerCased => &[Tier::Sscc, Tier::Case, Tier::InnerCase, Tier::Item],
        }
    }
}

/// 單一層級的規劃結果
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierPlan {
    /// 層級
    pub tier: Tier,

    /// 該層級節點總數
    pub count: usize,

    /// 每個父節點的子節點數（根層級為 None）
    pub per_parent: Option<usize>,
}

/// 完整層級規劃（由外到內排序）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HierarchyPlan {
    shape: HierarchyShape,
    tiers: Vec<TierPlan>,
}

impl HierarchyPlan {
    /// 創建新的層級規劃
    pub fn new(shape: HierarchyShape, tiers: Vec<TierPlan>) -> Self {
        Self { shape, tiers }
    }

    pub fn shape(&self) -> HierarchyShape {
        self.shape
    }

    /// 所有層級規劃，由外到內
    pub fn tiers(&self) -> &[TierPlan] {
        &self.tiers
    }

    /// 查詢指定層級的規劃
    pub fn get(&self, tier: Tier) -> Option<&TierPlan> {
        self.tiers.iter().find(|plan| plan.tier == tier)
    }

    /// 檢查層級是否存在於此規劃
    pub fn contains(&self, tier: Tier) -> bool {
        self.get(tier).is_some()
    }

    /// 指定層級的節點數（不存在的層級為 0）
    pub fn count(&self, tier: Tier) -> usize {
        self.get(tier).map(|plan| plan.count).unwrap_or(0)
    }

    /// 單品總數
    pub fn total_items(&self) -> usize {
        self.count(Tier::Item)
    }

    /// 所有層級節點總數
    pub fn total_nodes(&self) -> usize {
        self.tiers.iter().map(|plan| plan.count).sum()
    }

    /// 存在的層級，由外到內
    pub fn tiers_present(&self) -> Vec<Tier> {
        self.tiers.iter().map(|plan| plan.tier).collect()
    }

    /// 上一層（容器）層級
    pub fn parent_tier(&self, tier: Tier) -> Option<Tier> {
        let position = self.tiers.iter().position(|plan| plan.tier == tier)?;
        position
            .checked_sub(1)
            .map(|parent| self.tiers[parent].tier)
    }

    /// 下一層（內容物）層級
    pub fn child_tier(&self, tier: Tier) -> Option<Tier> {
        let position = self.tiers.iter().position(|plan| plan.tier == tier)?;
        self.tiers.get(position + 1).map(|plan| plan.tier)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cased_plan() -> HierarchyPlan {
        HierarchyPlan::new(
            HierarchyShape::Cased,
            vec![
                TierPlan { tier: Tier::Sscc, count: 2, per_parent: None },
                TierPlan { tier: Tier::Case, count: 10, per_parent: Some(5) },
                TierPlan { tier: Tier::Item, count: 100, per_parent: Some(10) },
            ],
        )
    }

    #[test]
    fn test_shape_selection() {
        assert_eq!(HierarchyShape::select(0, false), HierarchyShape::Direct);
        assert_eq!(HierarchyShape::select(0, true), HierarchyShape::Direct);
        assert_eq!(HierarchyShape::select(5, false), HierarchyShape::Cased);
        assert_eq!(HierarchyShape::select(5, true), HierarchyShape::InnerCased);
    }

    #[test]
    fn test_plan_queries() {
        let plan = cased_plan();

        assert_eq!(plan.count(Tier::Case), 10);
        assert_eq!(plan.count(Tier::InnerCase), 0);
        assert_eq!(plan.total_items(), 100);
        assert_eq!(plan.total_nodes(), 112);
        assert!(!plan.contains(Tier::InnerCase));
        assert_eq!(plan.tiers_present(), vec![Tier::Sscc, Tier::Case, Tier::Item]);
    }

    #[test]
    fn test_parent_and_child_tiers() {
        let plan = cased_plan();

        assert_eq!(plan.parent_tier(Tier::Item), Some(Tier::Case));
        assert_eq!(plan.parent_tier(Tier::Case), Some(Tier::Sscc));
        assert_eq!(plan.parent_tier(Tier::Sscc), None);
        assert_eq!(plan.child_tier(Tier::Sscc), Some(Tier::Case));
        assert_eq!(plan.child_tier(Tier::Item), None);
        assert_eq!(plan.parent_tier(Tier::InnerCase), None);
    }

    #[test]
    fn test_tier_display() {
        assert_eq!(Tier::Sscc.to_string(), "SSCC");
        assert_eq!(Tier::InnerCase.to_string(), "InnerCase");
        assert!(Tier::Case.is_sgtin());
        assert!(!Tier::Sscc.is_sgtin());
    }
}
