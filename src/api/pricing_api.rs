// ==========================================
// Call-a-Vet 经济测算 - 价格方案 API
// ==========================================
// 职责: 价格目录查询 + 本地化价格标签
// ==========================================

use serde::Serialize;

use crate::api::error::{ApiError, ApiResult};
use crate::domain::pricing::{Plan, PricingCatalog};
use crate::domain::types::PlanTier;
use crate::i18n::t_in;
use crate::presentation::format_currency;

/// 方案展示视图
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanView {
    pub id: &'static str,
    pub title: &'static str,
    pub tier: PlanTier,
    pub tier_label: String,
    /// "$549 / mes" 或 "$199 – $349 por consulta"
    pub price_label: String,
    pub badge: Option<&'static str>,
    pub highlight: bool,
    pub features: &'static [&'static str],
    pub cta: &'static str,
}

/// 价格方案 API
pub struct PricingApi {
    catalog: PricingCatalog,
}

impl PricingApi {
    pub fn new() -> Self {
        Self {
            catalog: PricingCatalog::new(),
        }
    }

    /// 列出方案
    ///
    /// # 参数
    /// - tier: 分组过滤（None 为全部，保持页面顺序）
    pub fn list_plans(&self, tier: Option<&str>, locale: &str) -> ApiResult<Vec<PlanView>> {
        let plans: Vec<&'static Plan> = match tier {
            Some(raw) => {
                let tier = raw.parse::<PlanTier>().map_err(ApiError::InvalidInput)?;
                self.catalog.plans_in(tier).collect()
            }
            None => self.catalog.plans().iter().collect(),
        };

        Ok(plans.into_iter().map(|p| plan_view(p, locale)).collect())
    }

    /// 查询单个方案
    pub fn get_plan(&self, id: &str, locale: &str) -> ApiResult<PlanView> {
        self.catalog
            .plan(id)
            .map(|p| plan_view(p, locale))
            .ok_or_else(|| ApiError::UnknownPlan(id.to_string()))
    }

    /// 会员月费（用作客户 ROI 的 membershipCost）
    pub fn membership_price(&self, id: &str) -> ApiResult<f64> {
        if let Some(price) = self.catalog.membership_price(id) {
            return Ok(price);
        }
        match self.catalog.plan(id) {
            Some(plan) => Err(ApiError::InvalidInput(format!(
                "方案 {} 为按次付费，没有月费",
                plan.id
            ))),
            None => Err(ApiError::UnknownPlan(id.to_string())),
        }
    }
}

impl Default for PricingApi {
    fn default() -> Self {
        Self::new()
    }
}

fn plan_view(plan: &'static Plan, locale: &str) -> PlanView {
    PlanView {
        id: plan.id,
        title: plan.title,
        tier: plan.tier,
        tier_label: t_in(plan.tier.label_key(), locale),
        price_label: price_label(plan, locale),
        badge: plan.badge,
        highlight: plan.highlight,
        features: plan.features,
        cta: plan.cta,
    }
}

fn price_label(plan: &Plan, locale: &str) -> String {
    match plan.price_range {
        Some(range) => format!(
            "{} – {} {}",
            format_currency(range.min),
            format_currency(range.max),
            t_in(range.unit_key, locale)
        ),
        None => format!(
            "{} {}",
            format_currency(plan.monthly_price),
            t_in("pricing.per_month", locale)
        ),
    }
}
