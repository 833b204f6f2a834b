//! 三層包裝聚合示例（SSCC → 箱 → 單品）

use epcis_aggregator::{
    AggregationGenerator, GenerationContext, HierarchyPlanner, PackagingConfig, SerialNumbers, Tier,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== 三層包裝聚合示例 ===\n");

    // 每箱 10 個單品、每個 SSCC 5 箱、共 2 個 SSCC
    let config = PackagingConfig::new("0614141", "12345", "54321")
        .with_items_per_case(10)
        .with_cases_per_sscc(5)
        .with_number_of_sscc(2);

    let plan = HierarchyPlanner::plan(&config)?;
    println!("層級規劃 ({:?}):", plan.shape());
    for tier in plan.tiers() {
        println!("  - {}: {} 個", tier.tier, tier.count);
    }

    // 產生序號
    let serials = SerialNumbers::new()
        .with_tier(Tier::Sscc, (1..=plan.count(Tier::Sscc)).map(|i| format!("{:09}", i)))
        .with_tier(Tier::Case, (1..=plan.count(Tier::Case)).map(|i| format!("CS{:04}", i)))
        .with_tier(Tier::Item, (1..=plan.count(Tier::Item)).map(|i| format!("IT{:06}", i)));

    let context = GenerationContext::new(
        "urn:epc:id:sgln:0614141.00777.0",
        "urn:epc:id:sgln:0614141.00888.0",
    );
    let result = AggregationGenerator::new().generate(&config, &serials, &context)?;

    println!("\n包裝事件:");
    for event in &result.events {
        println!("  - {} ← {} 個子項", event.parent_id, event.child_count());
    }

    let statistics = result.statistics();
    println!(
        "\n共 {} 筆事件，文件 {} bytes",
        statistics.event_count, statistics.document_bytes
    );

    Ok(())
}
