//! # EPCIS Store
//!
//! 專案儲存：鎖定狀態機、序號提交、文件產生與批次刪除

pub mod batch;
pub mod naming;
pub mod project;
pub mod store;

// Re-export 主要類型
pub use batch::BatchOutcome;
pub use project::{GeneratedDocument, GenerationRequest, Project};
pub use store::ProjectStore;
