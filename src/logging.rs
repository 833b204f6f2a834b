//! 日誌系統初始化
//!
//! 使用 tracing 與 tracing-subscriber，以 RUST_LOG 環境變數設定等級。

use tracing_subscriber::{fmt, EnvFilter};

/// 初始化日誌系統
///
/// 日誌寫到 stderr，stdout 只輸出 `epcis-gen` 的規劃與統計 JSON，可直接導向其他工具。
///
/// # 環境變數
/// - RUST_LOG: 日誌等級過濾（預設: info）
///   例如: RUST_LOG=debug 或 RUST_LOG=epcis_engine=trace
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_line_number(true)
        .with_writer(std::io::stderr)
        .init();
}

/// 初始化測試環境的日誌系統（可重複呼叫）
pub fn init_test() {
    let _ = fmt()
        .with_env_filter(EnvFilter::new("debug"))
        .with_test_writer()
        .try_init();
}
