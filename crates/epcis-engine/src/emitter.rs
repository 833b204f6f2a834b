//! # 聚合事件輸出
//!
//! 依包含關係將已識別的節點分組，每個有子項的父節點輸出一筆 ADD / packing
//! 事件，再序列化為 EPCIS 1.2 XML 文件。
//!
//! ## 輸出順序
//!
//! 由葉層往根層：先輸出包含單品的事件，再往上到內箱、箱，最後是 SSCC。
//! 同一層內依父節點 tier_index 遞增；子項同樣依 tier_index 遞增。
//! 相同輸入與固定時間下，輸出逐位元組相同。

use chrono::{DateTime, SecondsFormat, Utc};
use epcis_core::{AggregationEvent, EpcisError, GenerationContext, Result};
use std::fmt::Write;

use crate::assignment::AssignedHierarchy;

/// EPCIS 1.x XML 命名空間
pub const EPCIS_NAMESPACE: &str = "urn:epcglobal:epcis:xsd:1";

/// 預設文件版本
pub const DEFAULT_SCHEMA_VERSION: &str = "1.2";

/// 事件時間一律以 UTC 輸出
const TIME_ZONE_OFFSET: &str = "+00:00";

/// 聚合事件輸出器
#[derive(Debug, Clone)]
pub struct AggregationEventEmitter {
    schema_version: String,
}

impl Default for AggregationEventEmitter {
    fn default() -> Self {
        Self::new()
    }
}

impl AggregationEventEmitter {
    pub fn new() -> Self {
        Self {
            schema_version: DEFAULT_SCHEMA_VERSION.to_string(),
        }
    }

    /// 建構器模式：設置文件版本
    pub fn with_schema_version(mut self, version: impl Into<String>) -> Self {
        self.schema_version = version.into();
        self
    }

    /// 由葉層往根層產生包含事件
    pub fn emit(
        &self,
        hierarchy: &AssignedHierarchy,
        context: &GenerationContext,
    ) -> Vec<AggregationEvent> {
        let plan = hierarchy.plan();
        let mut events = Vec::new();

        // 最內層（單品）沒有子項，從倒數第二層開始往外
        for tier_plan in plan.tiers().iter().rev().skip(1) {
            for parent in hierarchy.nodes(tier_plan.tier) {
                let children = hierarchy.children_of(parent);
                if children.is_empty() {
                    continue;
                }

                events.push(AggregationEvent::packing(
                    parent.tier,
                    parent.identifier.clone(),
                    children.iter().map(|child| child.identifier.clone()).collect(),
                    context,
                ));
            }
        }

        tracing::debug!("產生包含事件 {} 筆", events.len());
        events
    }

    /// 序列化為 EPCIS XML 文件
    ///
    /// 任何欄位為空或含控制字元時整份失敗，不輸出部分內容。
    pub fn serialize(
        &self,
        events: &[AggregationEvent],
        created_at: DateTime<Utc>,
    ) -> Result<Vec<u8>> {
        let schema_version = checked("schemaVersion", &self.schema_version)?;
        let escaped = events
            .iter()
            .enumerate()
            .map(|(position, event)| {
                EscapedEvent::from_event(event).map_err(|e| {
                    tracing::error!("第 {} 筆事件無法序列化: {}", position + 1, e);
                    e
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let mut xml = String::with_capacity(256 + events.len() * 512);
        write_document(&mut xml, &schema_version, &escaped, created_at)
            .map_err(|e| EpcisError::GenerationFailure(format!("XML 寫入失敗: {}", e)))?;

        Ok(xml.into_bytes())
    }
}

/// 已檢查並轉義的事件欄位
struct EscapedEvent {
    event_time: String,
    parent_id: String,
    child_ids: Vec<String>,
    action: String,
    biz_step: String,
    read_point: String,
    biz_location: String,
}

impl EscapedEvent {
    fn from_event(event: &AggregationEvent) -> Result<Self> {
        Ok(Self {
            event_time: format_time(event.event_time),
            parent_id: checked("parentID", &event.parent_id)?,
            child_ids: event
                .child_ids
                .iter()
                .map(|child| checked("epc", child))
                .collect::<Result<Vec<_>>>()?,
            action: checked("action", &event.action)?,
            biz_step: checked("bizStep", &event.biz_step)?,
            read_point: checked("readPoint", &event.read_point)?,
            biz_location: checked("bizLocation", &event.biz_location)?,
        })
    }
}

fn write_document(
    xml: &mut String,
    schema_version: &str,
    events: &[EscapedEvent],
    created_at: DateTime<Utc>,
) -> std::fmt::Result {
    writeln!(xml, r#"<?xml version="1.0" encoding="UTF-8"?>"#)?;
    writeln!(
        xml,
        r#"<epcis:EPCISDocument xmlns:epcis="{}" schemaVersion="{}" creationDate="{}">"#,
        EPCIS_NAMESPACE,
        schema_version,
        format_time(created_at)
    )?;
    writeln!(xml, "  <EPCISBody>")?;
    writeln!(xml, "    <EventList>")?;

    for event in events {
        writeln!(xml, "      <AggregationEvent>")?;
        writeln!(xml, "        <eventTime>{}</eventTime>", event.event_time)?;
        writeln!(xml, "        <eventTimeZoneOffset>{}</eventTimeZoneOffset>", TIME_ZONE_OFFSET)?;
        writeln!(xml, "        <parentID>{}</parentID>", event.parent_id)?;
        writeln!(xml, "        <childEPCs>")?;
        for child in &event.child_ids {
            writeln!(xml, "          <epc>{}</epc>", child)?;
        }
        writeln!(xml, "        </childEPCs>")?;
        writeln!(xml, "        <action>{}</action>", event.action)?;
        writeln!(xml, "        <bizStep>{}</bizStep>", event.biz_step)?;
        writeln!(xml, "        <readPoint>")?;
        writeln!(xml, "          <id>{}</id>", event.read_point)?;
        writeln!(xml, "        </readPoint>")?;
        writeln!(xml, "        <bizLocation>")?;
        writeln!(xml, "          <id>{}</id>", event.biz_location)?;
        writeln!(xml, "        </bizLocation>")?;
        writeln!(xml, "      </AggregationEvent>")?;
    }

    writeln!(xml, "    </EventList>")?;
    writeln!(xml, "  </EPCISBody>")?;
    writeln!(xml, "</epcis:EPCISDocument>")?;

    Ok(())
}

fn format_time(time: DateTime<Utc>) -> String {
    time.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// 檢查欄位並轉義
fn checked(field: &str, value: &str) -> Result<String> {
    if value.is_empty() {
        return Err(EpcisError::GenerationFailure(format!("{} 為空", field)));
    }
    if value.chars().any(char::is_control) {
        return Err(EpcisError::GenerationFailure(format!(
            "{} 含有控制字元: {:?}",
            field, value
        )));
    }
    Ok(xml_escape(value))
}

/// XML 文字與屬性值轉義
fn xml_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}
