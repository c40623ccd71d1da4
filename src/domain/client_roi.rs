// ==========================================
// Call-a-Vet 经济测算 - 客户 ROI 参数与结果
// ==========================================
// 参数: 马匹数量、分诊事件、数字化解决率、上门/交通成本、停工成本、会员费
// 结果: 全部由参数确定性派生，不可变
// ==========================================

use crate::domain::fields::{finite_or_zero, ParamFields};
use serde::{Deserialize, Serialize};

/// 客户 ROI 参数（每期，默认按月）
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ClientRoiParams {
    /// 马匹数量
    pub horses: f64,
    /// 每匹马每期分诊事件数
    pub events_per_horse: f64,
    /// 数字化解决率 [0,1]
    pub resolution: f64,
    /// 上门出诊成本（每次避免的出诊）
    pub onsite_cost: f64,
    /// 交通成本（每次避免的出诊）
    pub travel_cost: f64,
    /// 每个事件节省的小时数
    pub hours_saved: f64,
    /// 停工成本（每小时）
    pub downtime_cost: f64,
    /// 会员费（每期）
    pub membership_cost: f64,
}

impl Default for ClientRoiParams {
    /// 墨西哥马匹场景默认值（Cuadra 5 会员）
    fn default() -> Self {
        Self {
            horses: 5.0,
            events_per_horse: 0.2,
            resolution: 0.6,
            onsite_cost: 2500.0,
            travel_cost: 500.0,
            hours_saved: 1.5,
            downtime_cost: 400.0,
            membership_cost: 999.0,
        }
    }
}

impl ParamFields for ClientRoiParams {
    const FIELDS: &'static [&'static str] = &[
        "horses",
        "eventsPerHorse",
        "resolution",
        "onsiteCost",
        "travelCost",
        "hoursSaved",
        "downtimeCost",
        "membershipCost",
    ];

    fn get_field(&self, name: &str) -> Option<f64> {
        let value = match Self::canonical_field(name)? {
            "horses" => self.horses,
            "eventsPerHorse" => self.events_per_horse,
            "resolution" => self.resolution,
            "onsiteCost" => self.onsite_cost,
            "travelCost" => self.travel_cost,
            "hoursSaved" => self.hours_saved,
            "downtimeCost" => self.downtime_cost,
            "membershipCost" => self.membership_cost,
            _ => return None,
        };
        Some(value)
    }

    fn set_field(&mut self, name: &str, value: f64) -> bool {
        let value = finite_or_zero(value);
        let slot = match Self::canonical_field(name) {
            Some("horses") => &mut self.horses,
            Some("eventsPerHorse") => &mut self.events_per_horse,
            Some("resolution") => &mut self.resolution,
            Some("onsiteCost") => &mut self.onsite_cost,
            Some("travelCost") => &mut self.travel_cost,
            Some("hoursSaved") => &mut self.hours_saved,
            Some("downtimeCost") => &mut self.downtime_cost,
            Some("membershipCost") => &mut self.membership_cost,
            _ => return false,
        };
        *slot = value;
        true
    }
}

/// 客户 ROI 结果
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientRoiResult {
    pub total_events: f64,
    pub avoided_visits: f64,
    pub savings_visits: f64,
    pub savings_time: f64,
    pub total_savings: f64,
    /// (总节省 - 会员费) / 会员费；会员费为 0 时为 0
    pub roi: f64,
    /// 会员费 / 总节省；总节省为 0 时为 0（不是“立即回本”）
    pub payback_periods: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_lookup_accepts_snake_case() {
        let params = ClientRoiParams::default();
        assert_eq!(params.get_field("eventsPerHorse"), Some(0.2));
        assert_eq!(params.get_field("events_per_horse"), Some(0.2));
        assert_eq!(params.get_field("MEMBERSHIP-COST"), Some(999.0));
        assert_eq!(params.get_field("ponies"), None);
    }

    #[test]
    fn test_set_field_coerces_non_finite_to_zero() {
        let mut params = ClientRoiParams::default();
        assert!(params.set_field("horses", f64::NAN));
        assert_eq!(params.horses, 0.0);
        assert!(params.set_field("travel_cost", f64::INFINITY));
        assert_eq!(params.travel_cost, 0.0);
        assert!(!params.set_field("unknown", 1.0));
    }

    #[test]
    fn test_deserialize_partial_json_uses_defaults() {
        let params: ClientRoiParams =
            serde_json::from_str(r#"{"horses": 12, "membershipCost": 2499}"#).unwrap();
        assert_eq!(params.horses, 12.0);
        assert_eq!(params.membership_cost, 2499.0);
        assert_eq!(params.resolution, 0.6);
    }
}
