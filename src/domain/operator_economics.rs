// ==========================================
// Call-a-Vet 经济测算 - 运营单位经济参数与结果
// ==========================================
// 参数: 业务量、单价、费率、单位变动成本、会员包含额度、月固定成本、IVA
// 结果: GMV → 平台收入 → 变动成本 → 贡献 → 固定成本 → 盈亏平衡
// ==========================================

use crate::domain::fields::{finite_or_zero, ParamFields};
use serde::{Deserialize, Serialize};

/// 运营单位经济参数（每月）
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OperatorEconomicsParams {
    // ===== 业务量与单价 =====
    pub chats: f64,
    pub chat_price: f64,
    pub videos: f64,
    pub video_price: f64,
    /// 活跃会员数
    pub memberships: f64,
    /// 会员月 ARPU
    pub membership_price: f64,

    // ===== 费率 [0,1] =====
    /// 平台抽成（作用于扣除支付费与退款后的净额）
    pub take_rate: f64,
    /// 支付手续费（占 GMV）
    pub pay_fee_pct: f64,
    /// 退款率（占 GMV，仅咨询）
    pub refund_pct: f64,

    // ===== 单位变动成本 =====
    pub ai_cost_per_consult: f64,
    pub livekit_min_per_video: f64,
    pub livekit_cost_per_min: f64,
    pub support_cost_per_consult: f64,

    // ===== 会员包含额度 =====
    pub included_chats_per_membership: f64,
    pub included_videos_per_membership: f64,

    // ===== 月固定成本 =====
    pub fixed_servers: f64,
    #[serde(rename = "fixedOpenAIBase")]
    pub fixed_open_ai_base: f64,
    pub operator_base_salary: f64,
    /// 运营人员薪资适用的 IVA 税率
    pub iva_rate: f64,
}

impl Default for OperatorEconomicsParams {
    /// 墨西哥马匹场景保守默认值
    fn default() -> Self {
        Self {
            chats: 120.0,
            chat_price: 279.0,
            videos: 60.0,
            video_price: 549.0,
            memberships: 30.0,
            membership_price: 999.0,
            take_rate: 0.25,
            pay_fee_pct: 0.035,
            refund_pct: 0.02,
            ai_cost_per_consult: 3.0,
            livekit_min_per_video: 15.0,
            livekit_cost_per_min: 0.2,
            support_cost_per_consult: 8.0,
            included_chats_per_membership: 2.0,
            included_videos_per_membership: 0.5,
            fixed_servers: 8000.0,
            fixed_open_ai_base: 3000.0,
            operator_base_salary: 25000.0,
            iva_rate: 0.16,
        }
    }
}

impl ParamFields for OperatorEconomicsParams {
    const FIELDS: &'static [&'static str] = &[
        "chats",
        "chatPrice",
        "videos",
        "videoPrice",
        "memberships",
        "membershipPrice",
        "takeRate",
        "payFeePct",
        "refundPct",
        "aiCostPerConsult",
        "livekitMinPerVideo",
        "livekitCostPerMin",
        "supportCostPerConsult",
        "includedChatsPerMembership",
        "includedVideosPerMembership",
        "fixedServers",
        "fixedOpenAIBase",
        "operatorBaseSalary",
        "ivaRate",
    ];

    fn get_field(&self, name: &str) -> Option<f64> {
        let mut copy = *self;
        copy.slot(name).map(|slot| *slot)
    }

    fn set_field(&mut self, name: &str, value: f64) -> bool {
        match self.slot(name) {
            Some(slot) => {
                *slot = finite_or_zero(value);
                true
            }
            None => false,
        }
    }
}

impl OperatorEconomicsParams {
    fn slot(&mut self, name: &str) -> Option<&mut f64> {
        let slot = match Self::canonical_field(name)? {
            "chats" => &mut self.chats,
            "chatPrice" => &mut self.chat_price,
            "videos" => &mut self.videos,
            "videoPrice" => &mut self.video_price,
            "memberships" => &mut self.memberships,
            "membershipPrice" => &mut self.membership_price,
            "takeRate" => &mut self.take_rate,
            "payFeePct" => &mut self.pay_fee_pct,
            "refundPct" => &mut self.refund_pct,
            "aiCostPerConsult" => &mut self.ai_cost_per_consult,
            "livekitMinPerVideo" => &mut self.livekit_min_per_video,
            "livekitCostPerMin" => &mut self.livekit_cost_per_min,
            "supportCostPerConsult" => &mut self.support_cost_per_consult,
            "includedChatsPerMembership" => &mut self.included_chats_per_membership,
            "includedVideosPerMembership" => &mut self.included_videos_per_membership,
            "fixedServers" => &mut self.fixed_servers,
            "fixedOpenAIBase" => &mut self.fixed_open_ai_base,
            "operatorBaseSalary" => &mut self.operator_base_salary,
            "ivaRate" => &mut self.iva_rate,
            _ => return None,
        };
        Some(slot)
    }
}

/// 运营单位经济结果
///
/// 除标题指标外也保留中间量（咨询数、包含额度、混合比例），便于核对推导链
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperatorEconomicsResult {
    // ===== GMV =====
    pub gmv: f64,
    pub gmv_consults: f64,
    pub gmv_memberships: f64,

    // ===== 平台收入 =====
    /// 1 - 支付费 - 退款，可为负（不拒绝）
    pub net_factor_consults: f64,
    pub platform_rev_consults: f64,
    pub platform_rev_memberships: f64,

    // ===== 付费咨询变动成本 =====
    pub consults_count: f64,
    pub ai_cost: f64,
    pub livekit_cost: f64,
    pub support_cost: f64,

    // ===== 会员包含额度成本（独立成本池，无对应收入行）=====
    pub inc_chats: f64,
    pub inc_videos: f64,
    pub inc_count: f64,
    pub ai_cost_included: f64,
    pub livekit_cost_included: f64,
    pub support_cost_included: f64,

    // ===== 贡献 =====
    pub contribution_consults: f64,
    pub membership_contribution: f64,
    pub total_contribution: f64,
    pub contrib_margin_pct: f64,

    // ===== 固定成本 =====
    #[serde(rename = "operatorSalaryWithIVA")]
    pub operator_salary_with_iva: f64,
    pub fixed_costs: f64,
    pub net_operating: f64,

    // ===== 边际贡献与盈亏平衡 =====
    pub mc_chat: f64,
    pub mc_video: f64,
    pub mix_chats: f64,
    pub mix_videos: f64,
    pub mc_weighted: f64,
    /// mcWeighted ≤ 0 时为 +∞（当前价格/成本结构不可达）
    pub break_even_consults: f64,
}

impl OperatorEconomicsResult {
    /// 会员包含额度的三项成本合计
    pub fn included_costs_total(&self) -> f64 {
        self.ai_cost_included + self.livekit_cost_included + self.support_cost_included
    }

    /// 盈亏平衡是否可达
    pub fn break_even_reachable(&self) -> bool {
        self.break_even_consults.is_finite()
    }
}
