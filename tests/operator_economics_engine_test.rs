// ==========================================
// 运营单位经济引擎集成测试
// ==========================================
// 场景: 基线全链路 / 零收入 / 负边际贡献 / 幂等
// ==========================================

mod helpers;

use call_a_vet_economics::domain::OperatorEconomicsParams;
use call_a_vet_economics::engine::{OperatorEconomicsEngine, OperatorScenario};
use helpers::{assert_close, REL_TOL};

#[test]
fn test_baseline_revenue_chain() {
    let r = OperatorEconomicsEngine::new().compute(OperatorEconomicsParams::default());

    assert_close(r.gmv_consults, 66420.0, REL_TOL);
    assert_close(r.gmv_memberships, 29970.0, REL_TOL);
    assert_close(r.gmv, 96390.0, REL_TOL);
    assert_close(r.net_factor_consults, 0.945, REL_TOL);
    assert_close(r.platform_rev_consults, 15691.725, REL_TOL);
    assert_close(r.platform_rev_memberships, 28921.05, REL_TOL);
}

#[test]
fn test_baseline_cost_and_contribution_chain() {
    let r = OperatorEconomicsEngine::new().compute(OperatorEconomicsParams::default());

    assert_close(r.consults_count, 180.0, REL_TOL);
    assert_close(r.ai_cost, 540.0, REL_TOL);
    assert_close(r.livekit_cost, 180.0, REL_TOL);
    assert_close(r.support_cost, 1440.0, REL_TOL);

    assert_close(r.inc_chats, 60.0, REL_TOL);
    assert_close(r.inc_videos, 15.0, REL_TOL);
    assert_close(r.inc_count, 75.0, REL_TOL);
    assert_close(r.ai_cost_included, 225.0, REL_TOL);
    assert_close(r.livekit_cost_included, 45.0, REL_TOL);
    assert_close(r.support_cost_included, 600.0, REL_TOL);

    assert_close(r.contribution_consults, 13531.725, REL_TOL);
    assert_close(r.membership_contribution, 28051.05, REL_TOL);
    assert_close(r.total_contribution, 41582.775, REL_TOL);
    assert_close(r.contrib_margin_pct, 41582.775 / 96390.0, REL_TOL);
}

#[test]
fn test_baseline_fixed_costs_and_break_even() {
    let r = OperatorEconomicsEngine::new().compute(OperatorEconomicsParams::default());

    assert_close(r.operator_salary_with_iva, 29000.0, REL_TOL);
    assert_close(r.fixed_costs, 40000.0, REL_TOL);
    assert_close(r.net_operating, 1582.775, REL_TOL);

    assert_close(r.mc_chat, 54.91375, REL_TOL);
    assert_close(r.mc_video, 115.70125, REL_TOL);
    assert_close(r.mix_chats, 2.0 / 3.0, REL_TOL);
    assert_close(r.mix_videos, 1.0 / 3.0, REL_TOL);
    assert_close(r.mc_weighted, 75.17625, REL_TOL);
    assert_close(r.break_even_consults, 532.0829384280275, REL_TOL);
    assert!(r.break_even_reachable());
}

#[test]
fn test_zero_revenue_keeps_fixed_costs() {
    let r = OperatorEconomicsEngine::new().compute(OperatorScenario::ZeroRevenue.params());

    assert_eq!(r.gmv, 0.0);
    assert_eq!(r.total_contribution, 0.0);
    assert_eq!(r.contrib_margin_pct, 0.0);
    assert_close(r.net_operating, -r.fixed_costs, REL_TOL);
    assert_close(r.net_operating, -40000.0, REL_TOL);

    // 无业务量时按 50/50 混合估算
    assert_eq!(r.mix_chats, 0.5);
    assert_close(r.mc_weighted, 85.3075, REL_TOL);
    assert!(r.break_even_consults.is_finite());
    assert_close(r.break_even_consults, 40000.0 / 85.3075, REL_TOL);
}

#[test]
fn test_scale_scenario_values() {
    let r = OperatorEconomicsEngine::new().compute(OperatorScenario::Scale.params());

    assert_close(r.gmv, 341280.0, REL_TOL);
    assert_close(r.platform_rev_consults, 59202.36, REL_TOL);
    assert_close(r.platform_rev_memberships, 116283.6, REL_TOL);
    assert_close(r.contribution_consults, 52962.36, REL_TOL);
    assert_close(r.membership_contribution, 112832.4, REL_TOL);
    assert_close(r.total_contribution, 165794.76, REL_TOL);
    assert_close(r.fixed_costs, 46000.0, REL_TOL);
    assert_close(r.net_operating, 119794.76, REL_TOL);
    assert_close(r.mc_chat, 65.1046, REL_TOL);
    assert_close(r.mc_video, 134.6026, REL_TOL);
    assert_close(r.mc_weighted, 88.2706, REL_TOL);
    assert_close(r.break_even_consults, 521.1248139244549, REL_TOL);
}

#[test]
fn test_lean_scenario_values() {
    let r = OperatorEconomicsEngine::new().compute(OperatorScenario::Lean.params());

    assert_close(r.gmv, 26640.0, REL_TOL);
    assert_close(r.platform_rev_consults, 3461.535, REL_TOL);
    assert_close(r.platform_rev_memberships, 9640.35, REL_TOL);
    assert_close(r.contribution_consults, 2803.535, REL_TOL);
    assert_close(r.membership_contribution, 9467.95, REL_TOL);
    assert_close(r.total_contribution, 12271.485, REL_TOL);
    assert_close(r.fixed_costs, 40000.0, REL_TOL);
    // 精简场景经营净额为负
    assert_close(r.net_operating, -27728.515, REL_TOL);
    assert_close(r.mc_chat, 45.5041, REL_TOL);
    assert_close(r.mc_video, 98.3371, REL_TOL);
    assert_close(r.mc_weighted, 56.0707, REL_TOL);
    assert_close(r.break_even_consults, 713.3850656403436, REL_TOL);
}

#[test]
fn test_non_positive_weighted_margin_means_unreachable_break_even() {
    let params = OperatorEconomicsParams {
        take_rate: 0.0,
        ..OperatorEconomicsParams::default()
    };
    let r = OperatorEconomicsEngine::new().compute(params);

    assert!(r.mc_weighted <= 0.0);
    assert_eq!(r.break_even_consults, f64::INFINITY);
    assert!(!r.break_even_reachable());
}

#[test]
fn test_fees_above_hundred_percent_turn_net_factor_negative() {
    let params = OperatorEconomicsParams {
        pay_fee_pct: 0.9,
        refund_pct: 0.3,
        ..OperatorEconomicsParams::default()
    };
    let r = OperatorEconomicsEngine::new().compute(params);

    assert_close(r.net_factor_consults, -0.2, REL_TOL);
    assert!(r.platform_rev_consults < 0.0);
    assert_eq!(r.break_even_consults, f64::INFINITY);
}

#[test]
fn test_all_scenarios_are_idempotent() {
    let engine = OperatorEconomicsEngine::new();
    for scenario in OperatorScenario::ALL {
        let params = scenario.params();
        let first = engine.compute(params);
        let second = engine.compute(params);
        // 盈亏平衡可能为 +∞，PartialEq 对 ∞ 成立
        assert_eq!(first, second);
    }
}
