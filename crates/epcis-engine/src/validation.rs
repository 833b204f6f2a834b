//! 序號驗證與鎖定檢查
//!
//! 規劃之後、指派之前執行；任何失敗都不會留下部分狀態。

use epcis_core::{
    EpcisError, GenerationContext, HierarchyPlan, ProjectState, Result, SerialNumbers, Tier,
};

/// 驗證閘門
pub struct ValidationGate;

impl ValidationGate {
    /// 依序檢查序號清單長度與序號內容
    pub fn check_serials(plan: &HierarchyPlan, serials: &SerialNumbers) -> Result<()> {
        Self::check_counts(plan, serials)?;
        Self::check_values(plan, serials)?;
        Ok(())
    }

    /// 每個層級的序號數量必須等於規劃數量（不存在的層級必須為空）
    pub fn check_counts(plan: &HierarchyPlan, serials: &SerialNumbers) -> Result<()> {
        for tier in Tier::ALL {
            let expected = plan.count(tier);
            let actual = serials.for_tier(tier).len();
            if expected != actual {
                return Err(EpcisError::HierarchyMismatch {
                    tier,
                    expected,
                    actual,
                });
            }
        }
        Ok(())
    }

    /// 去除空白後不可為空，且不可含控制字元（無法寫入文件）
    pub fn check_values(plan: &HierarchyPlan, serials: &SerialNumbers) -> Result<()> {
        for tier in plan.tiers_present() {
            if let Some(position) = serials
                .for_tier(tier)
                .iter()
                .position(|serial| !is_usable(serial.trim()))
            {
                return Err(EpcisError::IncompleteSerial {
                    tier,
                    index: position + 1,
                });
            }
        }
        Ok(())
    }

    /// 讀取點與業務位置必須可寫入文件
    pub fn check_context(context: &GenerationContext) -> Result<()> {
        check_reference("readPoint", &context.read_point)?;
        check_reference("bizLocation", &context.biz_location)?;
        Ok(())
    }

    /// 鎖定規則：已鎖定的專案只接受與已保存內容相同的資料
    pub fn check_lock<T: PartialEq>(
        state: ProjectState,
        stored: Option<&T>,
        incoming: &T,
    ) -> Result<()> {
        if !state.is_locked() {
            return Ok(());
        }

        match stored {
            Some(stored) if stored == incoming => Ok(()),
            _ => {
                tracing::warn!("拒絕修改已鎖定的專案（狀態 {:?}）", state);
                Err(EpcisError::ConfigurationLocked)
            }
        }
    }
}

fn is_usable(value: &str) -> bool {
    !value.is_empty() && !value.chars().any(char::is_control)
}

fn check_reference(field: &'static str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(EpcisError::invalid(field, "不可為空"));
    }
    if value.chars().any(char::is_control) {
        return Err(EpcisError::invalid(field, format!("含有控制字元: {:?}", value)));
    }
    Ok(())
}
