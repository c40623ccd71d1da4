// ==========================================
// Call-a-Vet 经济测算 - 参考场景
// ==========================================
// 用途:
// - 页面默认值之外的固定试算场景（基线 / 扩张 / 精简 / 边界）；
// - 测试与 CLI `--scenario` 共用同一组参数，保证结果可复现。

use crate::domain::client_roi::ClientRoiParams;
use crate::domain::operator_economics::OperatorEconomicsParams;
use serde::{Deserialize, Serialize};

/// 客户 ROI 参考场景
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClientScenario {
    Baseline,
    LargeStable,
    ZeroEvents,
}

impl ClientScenario {
    pub const ALL: [ClientScenario; 3] = [
        ClientScenario::Baseline,
        ClientScenario::LargeStable,
        ClientScenario::ZeroEvents,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ClientScenario::Baseline => "baseline",
            ClientScenario::LargeStable => "large_stable",
            ClientScenario::ZeroEvents => "zero_events",
        }
    }

    pub fn title_key(&self) -> &'static str {
        match self {
            ClientScenario::Baseline => "scenario.client.baseline",
            ClientScenario::LargeStable => "scenario.client.large_stable",
            ClientScenario::ZeroEvents => "scenario.client.zero_events",
        }
    }

    pub fn params(&self) -> ClientRoiParams {
        match self {
            ClientScenario::Baseline => ClientRoiParams::default(),
            // 大马厩、成本更高（Cuadra 15）
            ClientScenario::LargeStable => ClientRoiParams {
                horses: 15.0,
                events_per_horse: 0.3,
                resolution: 0.65,
                onsite_cost: 3000.0,
                travel_cost: 700.0,
                hours_saved: 2.0,
                downtime_cost: 450.0,
                membership_cost: 2499.0,
            },
            // 边界: 零事件 → 零节省
            ClientScenario::ZeroEvents => ClientRoiParams {
                horses: 10.0,
                events_per_horse: 0.0,
                ..ClientRoiParams::default()
            },
        }
    }
}

impl Default for ClientScenario {
    fn default() -> Self {
        ClientScenario::Baseline
    }
}

impl std::str::FromStr for ClientScenario {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_id(s).as_str() {
            "baseline" => Ok(ClientScenario::Baseline),
            "large_stable" => Ok(ClientScenario::LargeStable),
            "zero_events" => Ok(ClientScenario::ZeroEvents),
            other => Err(format!("未知客户场景: {}", other)),
        }
    }
}

/// 运营单位经济参考场景
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OperatorScenario {
    Baseline,
    Scale,
    Lean,
    ZeroRevenue,
}

impl OperatorScenario {
    pub const ALL: [OperatorScenario; 4] = [
        OperatorScenario::Baseline,
        OperatorScenario::Scale,
        OperatorScenario::Lean,
        OperatorScenario::ZeroRevenue,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OperatorScenario::Baseline => "baseline",
            OperatorScenario::Scale => "scale",
            OperatorScenario::Lean => "lean",
            OperatorScenario::ZeroRevenue => "zero_revenue",
        }
    }

    pub fn title_key(&self) -> &'static str {
        match self {
            OperatorScenario::Baseline => "scenario.operator.baseline",
            OperatorScenario::Scale => "scenario.operator.scale",
            OperatorScenario::Lean => "scenario.operator.lean",
            OperatorScenario::ZeroRevenue => "scenario.operator.zero_revenue",
        }
    }

    pub fn params(&self) -> OperatorEconomicsParams {
        match self {
            OperatorScenario::Baseline => OperatorEconomicsParams::default(),
            OperatorScenario::Scale => OperatorEconomicsParams {
                chats: 400.0,
                chat_price: 279.0,
                videos: 200.0,
                video_price: 549.0,
                memberships: 120.0,
                membership_price: 999.0,
                take_rate: 0.28,
                pay_fee_pct: 0.03,
                refund_pct: 0.015,
                ai_cost_per_consult: 2.5,
                livekit_min_per_video: 15.0,
                livekit_cost_per_min: 0.18,
                support_cost_per_consult: 7.0,
                included_chats_per_membership: 2.0,
                included_videos_per_membership: 0.8,
                fixed_servers: 12000.0,
                fixed_open_ai_base: 5000.0,
                operator_base_salary: 25000.0,
                iva_rate: 0.16,
            },
            OperatorScenario::Lean => OperatorEconomicsParams {
                chats: 40.0,
                chat_price: 279.0,
                videos: 10.0,
                video_price: 549.0,
                memberships: 10.0,
                membership_price: 999.0,
                take_rate: 0.22,
                pay_fee_pct: 0.035,
                refund_pct: 0.02,
                ai_cost_per_consult: 3.5,
                livekit_min_per_video: 15.0,
                livekit_cost_per_min: 0.22,
                support_cost_per_consult: 9.0,
                included_chats_per_membership: 1.0,
                included_videos_per_membership: 0.3,
                fixed_servers: 8000.0,
                fixed_open_ai_base: 3000.0,
                operator_base_salary: 25000.0,
                iva_rate: 0.16,
            },
            // 边界: 无业务量、无包含额度，只剩固定成本
            OperatorScenario::ZeroRevenue => OperatorEconomicsParams {
                chats: 0.0,
                videos: 0.0,
                memberships: 0.0,
                included_chats_per_membership: 0.0,
                included_videos_per_membership: 0.0,
                ..OperatorEconomicsParams::default()
            },
        }
    }
}

impl Default for OperatorScenario {
    fn default() -> Self {
        OperatorScenario::Baseline
    }
}

impl std::str::FromStr for OperatorScenario {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_id(s).as_str() {
            "baseline" => Ok(OperatorScenario::Baseline),
            "scale" => Ok(OperatorScenario::Scale),
            "lean" => Ok(OperatorScenario::Lean),
            "zero_revenue" => Ok(OperatorScenario::ZeroRevenue),
            other => Err(format!("未知运营场景: {}", other)),
        }
    }
}

fn normalize_id(s: &str) -> String {
    s.trim().to_lowercase().replace('-', "_")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scenario_ids_round_trip() {
        for scenario in ClientScenario::ALL {
            assert_eq!(scenario.as_str().parse::<ClientScenario>(), Ok(scenario));
        }
        for scenario in OperatorScenario::ALL {
            assert_eq!(scenario.as_str().parse::<OperatorScenario>(), Ok(scenario));
        }
    }

    #[test]
    fn test_scenario_id_accepts_dashes_and_case() {
        assert_eq!(
            "Zero-Revenue".parse::<OperatorScenario>(),
            Ok(OperatorScenario::ZeroRevenue)
        );
        assert_eq!(
            " LARGE-STABLE ".parse::<ClientScenario>(),
            Ok(ClientScenario::LargeStable)
        );
        assert!("huge".parse::<OperatorScenario>().is_err());
    }

    #[test]
    fn test_zero_events_keeps_baseline_costs() {
        let p = ClientScenario::ZeroEvents.params();
        assert_eq!(p.horses, 10.0);
        assert_eq!(p.events_per_horse, 0.0);
        assert_eq!(p.membership_cost, 999.0);
    }
}
