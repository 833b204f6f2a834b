//! 聚合文件主產生器

use epcis_core::{GenerationContext, HierarchyPlan, PackagingConfig, SerialNumbers};

use crate::assignment::SerialAssigner;
use crate::emitter::AggregationEventEmitter;
use crate::planner::HierarchyPlanner;
use crate::validation::ValidationGate;
use crate::GenerationResult;

/// 聚合文件產生器（無內部可變狀態，可在任意執行緒使用）
#[derive(Debug, Clone, Default)]
pub struct AggregationGenerator {
    emitter: AggregationEventEmitter,
}

impl AggregationGenerator {
    /// 創建新的產生器
    pub fn new() -> Self {
        Self::default()
    }

    /// 建構器模式：設置文件版本
    pub fn with_schema_version(mut self, version: impl Into<String>) -> Self {
        self.emitter = self.emitter.with_schema_version(version);
        self
    }

    /// 規劃並驗證序號（提交序號時使用，不產生文件）
    pub fn validate(
        &self,
        config: &PackagingConfig,
        serials: &SerialNumbers,
    ) -> epcis_core::Result<HierarchyPlan> {
        let plan = HierarchyPlanner::plan(config)?;
        ValidationGate::check_serials(&plan, serials)?;
        Ok(plan)
    }

    /// 主產生入口
    pub fn generate(
        &self,
        config: &PackagingConfig,
        serials: &SerialNumbers,
        context: &GenerationContext,
    ) -> epcis_core::Result<GenerationResult> {
        tracing::info!(
            "開始產生聚合文件：SSCC {} 個，讀取點 {}",
            config.number_of_sscc,
            context.read_point
        );

        let start_time = std::time::Instant::now();

        // Step 1: 層級規劃與驗證（配置、序號、讀取點與業務位置）
        tracing::debug!("Step 1: 層級規劃與驗證");
        let plan = self.validate(config, serials)?;
        ValidationGate::check_context(context)?;

        // Step 2: 指派序號與識別碼
        tracing::debug!("Step 2: 指派序號");
        let hierarchy = SerialAssigner::assign(config, &plan, serials);
        tracing::debug!("節點數量: {}", hierarchy.node_count());

        // Step 3: 產生包含事件（葉層優先）
        tracing::debug!("Step 3: 產生包含事件");
        let events = self.emitter.emit(&hierarchy, context);

        // Step 4: 序列化
        tracing::debug!("Step 4: 序列化文件");
        let document = self.emitter.serialize(&events, context.event_time)?;

        let result = GenerationResult {
            plan,
            events,
            document,
            generated_at: context.event_time,
            calculation_time_ms: Some(start_time.elapsed().as_millis()),
        };

        tracing::info!("聚合文件產生完成，耗時 {:?}", start_time.elapsed());
        tracing::info!(
            "事件數量: {}，文件大小: {} bytes",
            result.events.len(),
            result.document.len()
        );

        Ok(result)
    }
}
