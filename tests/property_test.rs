//! 層級規劃與文件產生的性質測試

use chrono::{TimeZone, Utc};
use epcis_aggregator::*;
use epcis_engine::SerialAssigner;
use proptest::prelude::*;

fn numbered(prefix: &str, count: usize) -> Vec<String> {
    (1..=count).map(|i| format!("{}{}", prefix, i)).collect()
}

fn serials_for(plan: &HierarchyPlan) -> SerialNumbers {
    SerialNumbers::new()
        .with_tier(Tier::Sscc, numbered("S", plan.count(Tier::Sscc)))
        .with_tier(Tier::Case, numbered("C", plan.count(Tier::Case)))
        .with_tier(Tier::InnerCase, numbered("N", plan.count(Tier::InnerCase)))
        .with_tier(Tier::Item, numbered("I", plan.count(Tier::Item)))
}

fn context() -> GenerationContext {
    GenerationContext::new("urn:epc:id:sgln:0614141.00777.0", "urn:epc:id:sgln:0614141.00888.0")
        .with_event_time(Utc.with_ymd_and_hms(2026, 3, 1, 9, 30, 0).unwrap())
}

fn arb_config() -> impl Strategy<Value = PackagingConfig> {
    (1u32..=12, 0u32..=6, 1u32..=4, any::<bool>(), 1u32..=3, 1u32..=5).prop_map(
        |(items, cases, ssccs, inner, inner_per_case, items_per_inner)| {
            let config = PackagingConfig::new("0614141", "12345", "54321")
                .with_items_per_case(items)
                .with_cases_per_sscc(cases)
                .with_number_of_sscc(ssccs);
            if inner {
                config.with_inner_cases(inner_per_case, items_per_inner)
            } else {
                config
            }
        },
    )
}

/// 一般文字、空白與夾帶控制字元的文字
fn arb_text() -> impl Strategy<Value = String> {
    prop_oneof![
        any::<String>(),
        r"[ \t]{0,3}",
        r"[A-Za-z0-9]{0,4}[\x00-\x1f\x7f][A-Za-z0-9]{0,4}",
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// 各層數量為上層數量乘以每單位容量
    #[test]
    fn prop_tier_counts_multiply(config in arb_config()) {
        let plan = HierarchyPlanner::plan(&config).unwrap();
        let ssccs = config.number_of_sscc as usize;

        prop_assert_eq!(plan.count(Tier::Sscc), ssccs);
        if config.cases_per_sscc == 0 {
            prop_assert!(!plan.contains(Tier::Case));
            prop_assert!(!plan.contains(Tier::InnerCase));
            prop_assert_eq!(plan.count(Tier::Item), ssccs * config.items_per_case as usize);
        } else if config.use_inner_cases {
            let cases = ssccs * config.cases_per_sscc as usize;
            let inner = cases * config.inner_cases_per_case as usize;
            prop_assert_eq!(plan.count(Tier::Case), cases);
            prop_assert_eq!(plan.count(Tier::InnerCase), inner);
            prop_assert_eq!(plan.count(Tier::Item), inner * config.items_per_inner_case as usize);
        } else {
            let cases = ssccs * config.cases_per_sscc as usize;
            prop_assert!(!plan.contains(Tier::InnerCase));
            prop_assert_eq!(plan.count(Tier::Case), cases);
            prop_assert_eq!(plan.count(Tier::Item), cases * config.items_per_case as usize);
        }
    }

    /// 事件數等於所有非葉層節點數，且每筆事件至少一個子項
    #[test]
    fn prop_one_event_per_parent(config in arb_config()) {
        let plan = HierarchyPlanner::plan(&config).unwrap();
        let result = AggregationGenerator::new()
            .generate(&config, &serials_for(&plan), &context())
            .unwrap();

        let parents = plan.total_nodes() - plan.count(Tier::Item);
        prop_assert_eq!(result.events.len(), parents);
        prop_assert!(result.events.iter().all(|event| event.child_count() > 0));

        let children: usize = result.events.iter().map(|event| event.child_count()).sum();
        prop_assert_eq!(children, plan.total_nodes() - plan.count(Tier::Sscc));
    }

    /// 第 i 個子節點（從 0 起算）屬於第 floor(i / 容量) + 1 個父節點
    #[test]
    fn prop_child_maps_to_floor_parent(config in arb_config()) {
        let plan = HierarchyPlanner::plan(&config).unwrap();
        let hierarchy = SerialAssigner::assign(&config, &plan, &serials_for(&plan));

        for tier_plan in plan.tiers() {
            let Some(per_parent) = tier_plan.per_parent else { continue };
            for (i, node) in hierarchy.nodes(tier_plan.tier).iter().enumerate() {
                prop_assert_eq!(node.parent_index, Some(i / per_parent + 1));
            }
        }
    }

    /// 相同輸入與固定時間產生位元組完全相同的文件
    #[test]
    fn prop_generation_is_deterministic(config in arb_config()) {
        let plan = HierarchyPlanner::plan(&config).unwrap();
        let serials = serials_for(&plan);
        let generator = AggregationGenerator::new();

        let first = generator.generate(&config, &serials, &context()).unwrap();
        let second = generator.generate(&config, &serials, &context()).unwrap();
        prop_assert_eq!(first.document, second.document);
    }

    /// 任意序號內容與參照：產生成功，或以呼叫端可修正的錯誤拒絕，絕不回報內部缺陷
    #[test]
    fn prop_validated_input_never_fails_generation(
        config in arb_config(),
        pool in prop::collection::vec(arb_text(), 1..16),
        read_point in arb_text(),
        biz_location in arb_text(),
    ) {
        let plan = HierarchyPlanner::plan(&config).unwrap();

        let mut slot = 0;
        let mut serials = SerialNumbers::new();
        for tier in Tier::ALL {
            let values: Vec<String> = (0..plan.count(tier))
                .map(|_| {
                    slot += 1;
                    pool[slot % pool.len()].clone()
                })
                .collect();
            serials = serials.with_tier(tier, values);
        }

        let context = GenerationContext::new(read_point, biz_location)
            .with_event_time(Utc.with_ymd_and_hms(2026, 3, 1, 9, 30, 0).unwrap());

        match AggregationGenerator::new().generate(&config, &serials, &context) {
            Ok(result) => prop_assert_eq!(result.events.len(), plan.total_nodes() - plan.count(Tier::Item)),
            Err(error) => {
                prop_assert!(!error.is_defect(), "內部缺陷: {}", error);
                prop_assert!(error.is_caller_correctable());
            }
        }
    }

    /// 任一層少一個序號即回報該層數量不符
    #[test]
    fn prop_short_tier_is_rejected(config in arb_config(), pick in any::<prop::sample::Index>()) {
        let plan = HierarchyPlanner::plan(&config).unwrap();
        let tiers = plan.tiers_present();
        let tier = tiers[pick.index(tiers.len())];

        let mut serials = serials_for(&plan);
        let shortened: Vec<String> = serials.for_tier(tier).iter().skip(1).cloned().collect();
        serials = serials.with_tier(tier, shortened);

        let error = AggregationGenerator::new()
            .generate(&config, &serials, &context())
            .unwrap_err();
        prop_assert_eq!(
            error,
            EpcisError::HierarchyMismatch {
                tier,
                expected: plan.count(tier),
                actual: plan.count(tier) - 1,
            }
        );
    }
}
