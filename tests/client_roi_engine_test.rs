// ==========================================
// 客户 ROI 引擎集成测试
// ==========================================
// 场景: 默认值 / 零事件 / 会员费守卫 / 节省守卫 / 幂等
// ==========================================

mod helpers;

use call_a_vet_economics::domain::ClientRoiParams;
use call_a_vet_economics::engine::{ClientRoiEngine, ClientScenario};
use helpers::{assert_close, REL_TOL};

#[test]
fn test_baseline_defaults() {
    let r = ClientRoiEngine::new().compute(ClientRoiParams::default());

    assert_close(r.total_events, 1.0, REL_TOL);
    assert_close(r.avoided_visits, 0.6, REL_TOL);
    assert_close(r.savings_visits, 1800.0, REL_TOL);
    assert_close(r.savings_time, 600.0, REL_TOL);
    assert_close(r.total_savings, 2400.0, REL_TOL);
    assert_close(r.roi, 1401.0 / 999.0, REL_TOL);
    assert_close(r.payback_periods, 999.0 / 2400.0, REL_TOL);
}

#[test]
fn test_zero_events_yields_negative_roi_and_zero_payback() {
    let params = ClientScenario::ZeroEvents.params();
    let r = ClientRoiEngine::new().compute(params);

    assert_eq!(r.total_events, 0.0);
    assert_eq!(r.total_savings, 0.0);
    assert_eq!(r.roi, -1.0);
    // 节省为 0 时回本期数记为 0（而不是无穷大）
    assert_eq!(r.payback_periods, 0.0);
}

#[test]
fn test_non_positive_membership_cost_guards_roi() {
    let engine = ClientRoiEngine::new();
    for cost in [0.0, -10.0] {
        let params = ClientRoiParams {
            membership_cost: cost,
            ..ClientRoiParams::default()
        };
        let r = engine.compute(params);
        assert_eq!(r.roi, 0.0);
        assert!(r.roi.is_finite());
        assert_close(r.total_savings, 2400.0, REL_TOL);
    }
}

#[test]
fn test_negative_savings_hits_payback_guard() {
    // 负的上门成本 → 负节省
    let params = ClientRoiParams {
        onsite_cost: -5000.0,
        travel_cost: 0.0,
        hours_saved: 0.0,
        ..ClientRoiParams::default()
    };
    let r = ClientRoiEngine::new().compute(params);
    assert!(r.total_savings < 0.0);
    assert_eq!(r.payback_periods, 0.0);
}

#[test]
fn test_compute_is_idempotent() {
    let engine = ClientRoiEngine::new();
    for scenario in ClientScenario::ALL {
        let params = scenario.params();
        assert_eq!(engine.compute(params), engine.compute(params));
    }
}

#[test]
fn test_large_stable_scenario() {
    let r = ClientRoiEngine::new().compute(ClientScenario::LargeStable.params());
    // 15 × 0.3 = 4.5 事件，0.65 解决 → 2.925 次免上门
    assert_close(r.total_events, 4.5, REL_TOL);
    assert_close(r.avoided_visits, 2.925, REL_TOL);
    assert_close(r.savings_visits, 2.925 * 3700.0, REL_TOL);
    assert_close(r.savings_time, 4.5 * 2.0 * 450.0, REL_TOL);
    assert!(r.roi > 0.0);
}
