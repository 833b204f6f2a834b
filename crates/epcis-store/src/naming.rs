//! 下載檔名規則

/// 未指定專案名稱時的預設檔名
pub const DEFAULT_FILE_NAME: &str = "epcis_aggregation";

/// 文件副檔名
pub const FILE_EXTENSION: &str = "xml";

/// 由專案名稱產生檔名：非英數字元轉為 `_`，空名稱使用預設值
pub fn file_name_for(project_name: Option<&str>, default_name: &str) -> String {
    let stem = project_name
        .map(sanitize)
        .filter(|stem| !stem.is_empty())
        .unwrap_or_else(|| sanitize(default_name));

    let stem = if stem.is_empty() {
        DEFAULT_FILE_NAME.to_string()
    } else {
        stem
    };

    format!("{}.{}", stem, FILE_EXTENSION)
}

fn sanitize(name: &str) -> String {
    let replaced: String = name
        .trim()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();

    replaced.trim_matches('_').to_string()
}
