// ==========================================
// Call-a-Vet 经济测算 - 结果摘要
// ==========================================
// 输出: 标签 + 已格式化数值 + 是否高亮
// 标签按显式语言解析，不依赖全局 locale
// ==========================================

use crate::domain::client_roi::ClientRoiResult;
use crate::domain::operator_economics::OperatorEconomicsResult;
use crate::i18n::t_in;
use crate::presentation::format::{
    format_break_even, format_count, format_currency, format_payback, format_percent,
};
use serde::Serialize;

/// 摘要卡片
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryStat {
    pub label: String,
    pub value: String,
    pub accent: bool,
}

impl SummaryStat {
    fn new(label_key: &str, locale: &str, value: String) -> Self {
        Self {
            label: t_in(label_key, locale),
            value,
            accent: false,
        }
    }

    fn accented(mut self) -> Self {
        self.accent = true;
        self
    }
}

/// 客户 ROI 摘要（7 项）
pub fn client_summary(r: &ClientRoiResult, locale: &str) -> Vec<SummaryStat> {
    vec![
        SummaryStat::new("summary.client.total_events", locale, format_count(r.total_events)),
        SummaryStat::new("summary.client.avoided_visits", locale, format_count(r.avoided_visits)),
        SummaryStat::new("summary.client.savings_visits", locale, format_currency(r.savings_visits))
            .accented(),
        SummaryStat::new("summary.client.savings_time", locale, format_currency(r.savings_time)),
        SummaryStat::new("summary.client.total_savings", locale, format_currency(r.total_savings))
            .accented(),
        SummaryStat::new("summary.client.roi", locale, format_percent(r.roi)),
        SummaryStat::new("summary.client.payback", locale, format_payback(r.payback_periods)),
    ]
}

/// 运营单位经济摘要（18 项）
pub fn operator_summary(r: &OperatorEconomicsResult, locale: &str) -> Vec<SummaryStat> {
    let money = |key: &str, value: f64| SummaryStat::new(key, locale, format_currency(value));

    vec![
        money("summary.operator.gmv", r.gmv),
        money("summary.operator.gmv_consults", r.gmv_consults),
        money("summary.operator.gmv_memberships", r.gmv_memberships),
        money("summary.operator.platform_rev_consults", r.platform_rev_consults),
        money("summary.operator.platform_rev_memberships", r.platform_rev_memberships),
        SummaryStat::new(
            "summary.operator.fee_and_refunds",
            locale,
            format_percent(1.0 - r.net_factor_consults),
        ),
        money("summary.operator.ai_cost", r.ai_cost),
        money("summary.operator.livekit_cost", r.livekit_cost),
        money("summary.operator.support_cost", r.support_cost),
        money("summary.operator.included_costs", r.included_costs_total()),
        money("summary.operator.contribution_consults", r.contribution_consults),
        money("summary.operator.membership_contribution", r.membership_contribution),
        money("summary.operator.total_contribution", r.total_contribution).accented(),
        money("summary.operator.fixed_costs", r.fixed_costs),
        money("summary.operator.net_operating", r.net_operating).accented(),
        money("summary.operator.mc_chat", r.mc_chat),
        money("summary.operator.mc_video", r.mc_video),
        SummaryStat::new(
            "summary.operator.break_even",
            locale,
            format_break_even(r.break_even_consults),
        ),
    ]
}
