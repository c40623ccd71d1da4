// ==========================================
// Call-a-Vet 经济测算 - 领域类型定义
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 计算器类型 (Calculator Kind)
// ==========================================
// 每个计算器对应一个固定的导出文件名
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CalculatorKind {
    ClientRoi, // 客户 ROI（马主/马厩）
    Operator,  // 运营单位经济
}

impl CalculatorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            CalculatorKind::ClientRoi => "client_roi",
            CalculatorKind::Operator => "operator",
        }
    }

    /// 导出文件名（固定，不带时间戳）
    pub fn export_file_name(&self) -> &'static str {
        match self {
            CalculatorKind::ClientRoi => "ROI_Equinos_Call-a-Vet_CLIENTE.csv",
            CalculatorKind::Operator => "Operator_Economics_Call-a-Vet.csv",
        }
    }

    /// 配置键前缀（默认输入覆写: `client_roi/horses`）
    pub fn config_prefix(&self) -> &'static str {
        self.as_str()
    }
}

impl fmt::Display for CalculatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ==========================================
// 价格方案分组 (Plan Tier)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanTier {
    PayPerUse,            // 按次付费
    IndividualMembership, // 个人会员
    StableMembership,     // 马厩会员
    ProAndRanch,          // 专业/牧场
}

impl PlanTier {
    /// i18n 标签键
    pub fn label_key(&self) -> &'static str {
        match self {
            PlanTier::PayPerUse => "pricing.tier.pay_per_use",
            PlanTier::IndividualMembership => "pricing.tier.individual",
            PlanTier::StableMembership => "pricing.tier.stable",
            PlanTier::ProAndRanch => "pricing.tier.pro_and_ranch",
        }
    }
}

impl std::str::FromStr for PlanTier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "pay_per_use" | "payg" => Ok(PlanTier::PayPerUse),
            "individual" | "individual_membership" => Ok(PlanTier::IndividualMembership),
            "stable" | "stable_membership" => Ok(PlanTier::StableMembership),
            "pro" | "pro_and_ranch" => Ok(PlanTier::ProAndRanch),
            other => Err(format!("未知方案分组: {}", other)),
        }
    }
}
