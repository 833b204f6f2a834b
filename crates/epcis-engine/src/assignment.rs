//! 序號指派
//!
//! 依固定順序將使用者序號綁定到層級節點：第 i 筆（從 0 起算）序號成為
//! tier_index = i + 1 的節點，其父節點為 `i / per_parent + 1`。

use epcis_core::{HierarchyPlan, PackagingConfig, PackagingNode, SerialNumbers, Tier};

use crate::identifier::IdentifierBuilder;

/// 已指派序號與識別碼的層級樹
#[derive(Debug, Clone)]
pub struct AssignedHierarchy {
    plan: HierarchyPlan,
    /// 與 plan.tiers() 同序，每層依 tier_index 排序
    levels: Vec<Vec<PackagingNode>>,
}

impl AssignedHierarchy {
    pub fn plan(&self) -> &HierarchyPlan {
        &self.plan
    }

    /// 指定層級的所有節點（不存在的層級為空）
    pub fn nodes(&self, tier: Tier) -> &[PackagingNode] {
        self.level_position(tier)
            .map(|position| self.levels[position].as_slice())
            .unwrap_or(&[])
    }

    /// 節點的直接子項，依 tier_index 遞增
    pub fn children_of(&self, node: &PackagingNode) -> &[PackagingNode] {
        let Some(child_tier) = self.plan.child_tier(node.tier) else {
            return &[];
        };
        let Some(per_parent) = self.plan.get(child_tier).and_then(|plan| plan.per_parent) else {
            return &[];
        };

        let Some(position) = node.tier_index.checked_sub(1) else {
            return &[];
        };
        let start = position * per_parent;
        self.nodes(child_tier)
            .get(start..start + per_parent)
            .unwrap_or(&[])
    }

    /// 節點的上一層容器
    pub fn parent_of(&self, node: &PackagingNode) -> Option<&PackagingNode> {
        let parent_tier = self.plan.parent_tier(node.tier)?;
        let position = node.parent_index?.checked_sub(1)?;
        self.nodes(parent_tier).get(position)
    }

    /// 節點總數
    pub fn node_count(&self) -> usize {
        self.levels.iter().map(Vec::len).sum()
    }

    fn level_position(&self, tier: Tier) -> Option<usize> {
        self.plan.tiers().iter().position(|plan| plan.tier == tier)
    }
}

/// 序號指派器
pub struct SerialAssigner;

impl SerialAssigner {
    /// 指派序號並計算識別碼
    ///
    /// 輸入須已通過 [`crate::validation::ValidationGate`]。
    pub fn assign(
        config: &PackagingConfig,
        plan: &HierarchyPlan,
        serials: &SerialNumbers,
    ) -> AssignedHierarchy {
        let builder = IdentifierBuilder::new(config);

        let levels = plan
            .tiers()
            .iter()
            .map(|tier_plan| {
                serials
                    .for_tier(tier_plan.tier)
                    .iter()
                    .take(tier_plan.count)
                    .enumerate()
                    .map(|(position, raw)| {
                        let serial = raw.trim();
                        let node = PackagingNode::new(tier_plan.tier, position + 1, serial)
                            .with_identifier(builder.build(tier_plan.tier, serial));
                        match tier_plan.per_parent {
                            Some(per_parent) => node.with_parent(position / per_parent + 1),
                            None => node,
                        }
                    })
                    .collect::<Vec<_>>()
            })
            .collect();

        AssignedHierarchy {
            plan: plan.clone(),
            levels,
        }
    }
}
