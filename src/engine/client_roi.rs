// ==========================================
// Call-a-Vet 经济测算 - 客户 ROI 引擎
// ==========================================
// 输入: ClientRoiParams（调用方持有的快照，按值传入）
// 输出: ClientRoiResult（每次全新计算，无缓存）
// ==========================================
// 推导:
// 1) 事件数 × 解决率 → 避免的出诊次数
// 2) 两个独立节省通道: 出诊+交通 / 停工时间
// 3) 相对会员费: ROI（比值）与回本期（反比）
// ==========================================

use crate::domain::client_roi::{ClientRoiParams, ClientRoiResult};

// ==========================================
// ClientRoiEngine - 客户 ROI 引擎
// ==========================================
// 红线: 无状态引擎,所有方法都是纯函数
#[derive(Debug, Clone, Copy, Default)]
pub struct ClientRoiEngine;

impl ClientRoiEngine {
    pub fn new() -> Self {
        Self
    }

    /// 计算客户 ROI
    ///
    /// 全函数: 任意实数输入均有结果。两处除法守卫:
    /// - membership_cost ≤ 0 → roi = 0
    /// - total_savings ≤ 0 → payback_periods = 0
    ///
    /// 第二个守卫在零节省时给出 0（而非“不可达”），保留该口径不做修正。
    pub fn compute(&self, params: ClientRoiParams) -> ClientRoiResult {
        let total_events = params.horses * params.events_per_horse;
        let avoided_visits = total_events * params.resolution;
        let savings_visits = avoided_visits * (params.onsite_cost + params.travel_cost);
        let savings_time = total_events * params.hours_saved * params.downtime_cost;
        let total_savings = savings_visits + savings_time;

        let roi = if params.membership_cost > 0.0 {
            (total_savings - params.membership_cost) / params.membership_cost
        } else {
            0.0
        };
        let payback_periods = if total_savings > 0.0 {
            params.membership_cost / total_savings
        } else {
            0.0
        };

        tracing::debug!(
            target: "engine::client_roi",
            total_events,
            total_savings,
            roi,
            payback_periods,
            "client roi computed"
        );

        ClientRoiResult {
            total_events,
            avoided_visits,
            savings_visits,
            savings_time,
            total_savings,
            roi,
            payback_periods,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_baseline_defaults() {
        let r = ClientRoiEngine::new().compute(ClientRoiParams::default());
        assert!((r.total_events - 1.0).abs() < 1e-12);
        assert!((r.avoided_visits - 0.6).abs() < 1e-12);
        assert!((r.savings_visits - 1800.0).abs() < 1e-9);
        assert!((r.savings_time - 600.0).abs() < 1e-9);
        assert!((r.total_savings - 2400.0).abs() < 1e-9);
        assert!((r.roi - 1401.0 / 999.0).abs() < 1e-12);
        assert!((r.payback_periods - 999.0 / 2400.0).abs() < 1e-12);
    }

    #[test]
    fn test_negative_membership_cost_hits_roi_guard() {
        let params = ClientRoiParams {
            membership_cost: -10.0,
            ..ClientRoiParams::default()
        };
        let r = ClientRoiEngine::new().compute(params);
        assert_eq!(r.roi, 0.0);
        // 回本期不受 ROI 守卫影响
        assert!(r.payback_periods < 0.0);
    }
}
