//! # EPCIS Aggregation Engine
//!
//! 包裝層級規劃、序號驗證與指派、識別碼建構、聚合事件輸出

pub mod assignment;
pub mod emitter;
pub mod generator;
pub mod identifier;
pub mod planner;
pub mod validation;

// Re-export 主要類型
pub use assignment::{AssignedHierarchy, SerialAssigner};
pub use emitter::AggregationEventEmitter;
pub use generator::AggregationGenerator;
pub use identifier::IdentifierBuilder;
pub use planner::HierarchyPlanner;
pub use validation::ValidationGate;

use chrono::{DateTime, Utc};
use epcis_core::{AggregationEvent, HierarchyPlan, HierarchyShape, Tier};
use serde::Serialize;

/// 文件產生結果
#[derive(Debug, Clone)]
pub struct GenerationResult {
    /// 層級規劃
    pub plan: HierarchyPlan,

    /// 包含事件（葉層優先）
    pub events: Vec<AggregationEvent>,

    /// EPCIS XML 文件內容
    pub document: Vec<u8>,

    /// 事件時間
    pub generated_at: DateTime<Utc>,

    /// 計算耗時（毫秒）
    pub calculation_time_ms: Option<u128>,
}

impl GenerationResult {
    /// 產生統計資訊
    pub fn statistics(&self) -> GenerationStatistics {
        GenerationStatistics {
            shape: self.plan.shape(),
            tier_counts: self
                .plan
                .tiers()
                .iter()
                .map(|plan| TierCount {
                    tier: plan.tier,
                    count: plan.count,
                })
                .collect(),
            event_count: self.events.len(),
            document_bytes: self.document.len(),
        }
    }

    /// 指定父層級的事件數
    pub fn events_for(&self, parent_tier: Tier) -> usize {
        self.events
            .iter()
            .filter(|event| event.parent_tier == parent_tier)
            .count()
    }
}

/// 單一層級節點數
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TierCount {
    pub tier: Tier,
    pub count: usize,
}

/// 產生統計
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationStatistics {
    pub shape: HierarchyShape,
    pub tier_counts: Vec<TierCount>,
    pub event_count: usize,
    pub document_bytes: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use epcis_core::{GenerationContext, PackagingConfig, SerialNumbers};

    #[test]
    fn test_statistics() {
        let config = PackagingConfig::new("0614141", "12345", "54321")
            .with_items_per_case(3)
            .with_number_of_sscc(2);
        let serials = SerialNumbers::new()
            .with_tier(Tier::Sscc, ["S1", "S2"])
            .with_tier(Tier::Item, ["I1", "I2", "I3", "I4", "I5", "I6"]);
        let context = GenerationContext::new("rp", "loc")
            .with_event_time(Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap());

        let result = AggregationGenerator::new()
            .generate(&config, &serials, &context)
            .unwrap();
        let stats = result.statistics();

        assert_eq!(stats.shape, HierarchyShape::Direct);
        assert_eq!(
            stats.tier_counts,
            vec![
                TierCount { tier: Tier::Sscc, count: 2 },
                TierCount { tier: Tier::Item, count: 6 },
            ]
        );
        assert_eq!(stats.event_count, 2);
        assert_eq!(result.events_for(Tier::Sscc), 2);
        assert_eq!(result.events_for(Tier::Case), 0);
        assert_eq!(stats.document_bytes, result.document.len());
    }
}
