// ==========================================
// Call-a-Vet 经济测算 - 导出行
// ==========================================
// 客户 ROI: 8 项输入 + 7 项结果
// 运营: 5 项 GMV/收入 + 3 项费率输入 + 6 项成本 + 3 项贡献
//       + 固定成本 + 经营净额 + 2 项单位边际贡献 + 盈亏平衡
// ==========================================

use crate::domain::client_roi::{ClientRoiParams, ClientRoiResult};
use crate::domain::operator_economics::{OperatorEconomicsParams, OperatorEconomicsResult};
use crate::i18n::t_in;
use serde::Serialize;

/// 导出行（原始数值，不做格式化）
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExportRow {
    pub label: String,
    pub value: f64,
}

fn row(key: &str, locale: &str, value: f64) -> ExportRow {
    ExportRow {
        label: t_in(key, locale),
        value,
    }
}

/// 客户 ROI 导出行
pub fn client_rows(p: &ClientRoiParams, r: &ClientRoiResult, locale: &str) -> Vec<ExportRow> {
    vec![
        // 输入
        row("export.client.horses", locale, p.horses),
        row("export.client.events_per_horse", locale, p.events_per_horse),
        row("export.client.resolution", locale, p.resolution),
        row("export.client.onsite_cost", locale, p.onsite_cost),
        row("export.client.travel_cost", locale, p.travel_cost),
        row("export.client.hours_saved", locale, p.hours_saved),
        row("export.client.downtime_cost", locale, p.downtime_cost),
        row("export.client.membership_cost", locale, p.membership_cost),
        // 结果
        row("export.client.total_events", locale, r.total_events),
        row("export.client.avoided_visits", locale, r.avoided_visits),
        row("export.client.savings_visits", locale, r.savings_visits),
        row("export.client.savings_time", locale, r.savings_time),
        row("export.client.total_savings", locale, r.total_savings),
        row("export.client.roi", locale, r.roi),
        row("export.client.payback", locale, r.payback_periods),
    ]
}

/// 运营单位经济导出行
pub fn operator_rows(
    p: &OperatorEconomicsParams,
    r: &OperatorEconomicsResult,
    locale: &str,
) -> Vec<ExportRow> {
    vec![
        row("export.operator.gmv", locale, r.gmv),
        row("export.operator.gmv_consults", locale, r.gmv_consults),
        row("export.operator.gmv_memberships", locale, r.gmv_memberships),
        row("export.operator.platform_rev_consults", locale, r.platform_rev_consults),
        row("export.operator.platform_rev_memberships", locale, r.platform_rev_memberships),
        row("export.operator.pay_fee_pct", locale, p.pay_fee_pct),
        row("export.operator.refund_pct", locale, p.refund_pct),
        row("export.operator.take_rate", locale, p.take_rate),
        row("export.operator.ai_cost", locale, r.ai_cost),
        row("export.operator.livekit_cost", locale, r.livekit_cost),
        row("export.operator.support_cost", locale, r.support_cost),
        row("export.operator.ai_cost_included", locale, r.ai_cost_included),
        row("export.operator.livekit_cost_included", locale, r.livekit_cost_included),
        row("export.operator.support_cost_included", locale, r.support_cost_included),
        row("export.operator.contribution_consults", locale, r.contribution_consults),
        row("export.operator.membership_contribution", locale, r.membership_contribution),
        row("export.operator.total_contribution", locale, r.total_contribution),
        row("export.operator.fixed_costs", locale, r.fixed_costs),
        row("export.operator.net_operating", locale, r.net_operating),
        row("export.operator.mc_chat", locale, r.mc_chat),
        row("export.operator.mc_video", locale, r.mc_video),
        row("export.operator.break_even", locale, r.break_even_consults),
    ]
}
