// ==========================================
// Call-a-Vet 经济测算 - 运营单位经济引擎
// ==========================================
// 输入: OperatorEconomicsParams（调用方持有的快照，按值传入）
// 输出: OperatorEconomicsResult（每次全新计算，无缓存）
// ==========================================
// 推导链（严格顺序，每步只依赖输入或前序结果）:
// 1) GMV        2) 净额系数      3) 咨询平台收入   4) 会员平台收入
// 5) 咨询变动成本                6) 会员包含额度成本（独立成本池）
// 7) 贡献与贡献率                8) 固定成本与经营净额
// 9) 单位边际贡献、混合比例、盈亏平衡咨询量
// ==========================================

use crate::domain::operator_economics::{OperatorEconomicsParams, OperatorEconomicsResult};

/// 无实际业务量时的默认 chat 占比（均分）
const DEFAULT_CHAT_MIX: f64 = 0.5;

// ==========================================
// OperatorEconomicsEngine - 运营单位经济引擎
// ==========================================
// 红线: 无状态引擎,所有方法都是纯函数
#[derive(Debug, Clone, Copy, Default)]
pub struct OperatorEconomicsEngine;

impl OperatorEconomicsEngine {
    pub fn new() -> Self {
        Self
    }

    /// 计算运营单位经济
    ///
    /// 全函数，不报错。退化结果均为有效输出:
    /// - 支付费 + 退款 > 100% → 净额系数为负
    /// - gmv ≤ 0 → 贡献率 0
    /// - 加权边际贡献 ≤ 0 → 盈亏平衡为 +∞
    pub fn compute(&self, p: OperatorEconomicsParams) -> OperatorEconomicsResult {
        // 1. GMV
        let gmv_consults = p.chats * p.chat_price + p.videos * p.video_price;
        let gmv_memberships = p.memberships * p.membership_price;
        let gmv = gmv_consults + gmv_memberships;

        // 2. 净额系数（扣除支付费与退款）
        let net_factor_consults = 1.0 - p.pay_fee_pct - p.refund_pct;

        // 3. 咨询: 抽成作用于净额
        let platform_rev_consults = gmv_consults * net_factor_consults * p.take_rate;

        // 4. 会员: 非撮合交易，不抽成、不计退款，只扣支付费
        let platform_rev_memberships = gmv_memberships * (1.0 - p.pay_fee_pct);

        // 5. 付费咨询变动成本
        let consults_count = p.chats + p.videos;
        let ai_cost = consults_count * p.ai_cost_per_consult;
        let livekit_cost = p.videos * p.livekit_min_per_video * p.livekit_cost_per_min;
        let support_cost = consults_count * p.support_cost_per_consult;

        // 6. 会员包含额度: 纯成本，收入已计入会员平台收入
        let inc_chats = p.memberships * p.included_chats_per_membership;
        let inc_videos = p.memberships * p.included_videos_per_membership;
        let inc_count = inc_chats + inc_videos;
        let ai_cost_included = inc_count * p.ai_cost_per_consult;
        let livekit_cost_included = inc_videos * p.livekit_min_per_video * p.livekit_cost_per_min;
        let support_cost_included = inc_count * p.support_cost_per_consult;

        // 7. 贡献
        let contribution_consults = platform_rev_consults - (ai_cost + livekit_cost + support_cost);
        let membership_contribution = platform_rev_memberships
            - (ai_cost_included + livekit_cost_included + support_cost_included);
        let total_contribution = contribution_consults + membership_contribution;
        let contrib_margin_pct = if gmv > 0.0 {
            total_contribution / gmv
        } else {
            0.0
        };

        // 8. 固定成本
        let operator_salary_with_iva = p.operator_base_salary * (1.0 + p.iva_rate);
        let fixed_costs = p.fixed_servers + p.fixed_open_ai_base + operator_salary_with_iva;
        let net_operating = total_contribution - fixed_costs;

        // 9. 单位边际贡献与盈亏平衡
        let per_consult_cost = p.ai_cost_per_consult + p.support_cost_per_consult;
        let mc_chat = p.chat_price * net_factor_consults * p.take_rate - per_consult_cost;
        let mc_video = p.video_price * net_factor_consults * p.take_rate
            - (per_consult_cost + p.livekit_min_per_video * p.livekit_cost_per_min);
        let mix_chats = if consults_count > 0.0 {
            p.chats / consults_count
        } else {
            DEFAULT_CHAT_MIX
        };
        let mix_videos = 1.0 - mix_chats;
        let mc_weighted = mc_chat * mix_chats + mc_video * mix_videos;
        let break_even_consults = if mc_weighted > 0.0 {
            fixed_costs / mc_weighted
        } else {
            f64::INFINITY
        };

        tracing::debug!(
            target: "engine::operator_economics",
            gmv,
            total_contribution,
            net_operating,
            break_even_consults,
            "operator economics computed"
        );

        OperatorEconomicsResult {
            gmv,
            gmv_consults,
            gmv_memberships,
            net_factor_consults,
            platform_rev_consults,
            platform_rev_memberships,
            consults_count,
            ai_cost,
            livekit_cost,
            support_cost,
            inc_chats,
            inc_videos,
            inc_count,
            ai_cost_included,
            livekit_cost_included,
            support_cost_included,
            contribution_consults,
            membership_contribution,
            total_contribution,
            contrib_margin_pct,
            operator_salary_with_iva,
            fixed_costs,
            net_operating,
            mc_chat,
            mc_video,
            mix_chats,
            mix_videos,
            mc_weighted,
            break_even_consults,
        }
    }
}
