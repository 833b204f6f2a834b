//! 四層包裝專案示例（含內箱，經由專案存放區）

use epcis_aggregator::{
    GenerationRequest, PackagingConfig, ProjectStore, SerialNumbers, Tier,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== 四層包裝專案示例 ===\n");

    let store = ProjectStore::new().with_default_file_name("inner_case_demo");
    let id = store.create_project(Some("Vaccine Lot 42".to_string()));

    // 每個 SSCC 2 箱、每箱 3 個內箱、每內箱 4 個單品
    let config = PackagingConfig::new("0614141", "12345", "54321")
        .with_cases_per_sscc(2)
        .with_number_of_sscc(1)
        .with_inner_cases(3, 4)
        .with_inner_case_product_code("67890");

    let plan = store.save_configuration(id, config.clone())?;
    let required = SerialNumbers::required(&plan);
    println!("需要序號: 共 {} 個", required.total());

    let serials = Tier::ALL
        .iter()
        .fold(SerialNumbers::new(), |serials, &tier| {
            let count = plan.count(tier);
            serials.with_tier(tier, (1..=count).map(move |i| format!("{}-{:03}", tier, i)))
        });
    store.submit_serials(id, config.clone(), serials)?;
    println!("序號已提交，專案狀態: {:?}", store.get(id)?.state);

    // 鎖定後修改配置會被拒絕
    if let Err(e) = store.save_configuration(id, config.with_items_per_case(20)) {
        println!("修改配置被拒絕: {}", e);
    }

    let request = GenerationRequest::new(
        "urn:epc:id:sgln:0614141.00777.0",
        "urn:epc:id:sgln:0614141.00888.0",
    );
    let document = store.generate(id, &request)?;

    println!("\n輸出檔名: {}", document.file_name);
    for tier in [Tier::InnerCase, Tier::Case, Tier::Sscc] {
        println!("  - {} 事件: {} 筆", tier, document.result.events_for(tier));
    }
    println!("專案狀態: {:?}", store.get(id)?.state);

    Ok(())
}
