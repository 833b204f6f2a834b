//! # EPCIS Aggregator
//!
//! 醫藥包裝 GS1 EPCIS 聚合文件產生：包裝層級規劃、序號指派、
//! SSCC / SGTIN 識別碼與包裝事件輸出。

pub mod logging;
pub mod request;
pub mod settings;

pub use epcis_core::{
    AggregationEvent, EpcisError, GenerationContext, HierarchyPlan, PackagingConfig,
    ProjectState, SerialNumbers, Tier,
};
pub use epcis_engine::{AggregationGenerator, GenerationResult, HierarchyPlanner};
pub use epcis_store::{BatchOutcome, GeneratedDocument, GenerationRequest, ProjectStore};
pub use request::GenerationFile;
pub use settings::GeneratorSettings;
