// ==========================================
// Call-a-Vet équidos - 经济测算核心库
// ==========================================
// 两个计算器:
// - 客户 ROI（马主/马厩: 远程兽医会员是否划算）
// - 运营单位经济（平台: GMV → 贡献 → 经营净额 → 盈亏平衡）
// 系统定位: 无状态纯计算 + 本地化展示 + CSV 导出
// ==========================================

// 初始化国际化系统
rust_i18n::i18n!("locales", fallback = "es-MX");

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 参数/结果快照与价格目录
pub mod domain;

// 引擎层 - 纯函数计算
pub mod engine;

// 输入边界 - 文本 → 有限实数
pub mod input;

// 展示层 - 货币/百分比格式化与摘要卡片
pub mod presentation;

// 导出层 - CSV 文本与文件写入
pub mod export;

// 配置层 - 系统配置
pub mod config;

// API 层 - 业务接口
pub mod api;

// 日志系统
pub mod logging;

// 国际化
pub mod i18n;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::{
    CalculatorKind, ClientRoiParams, ClientRoiResult, OperatorEconomicsParams,
    OperatorEconomicsResult, ParamFields, Plan, PlanTier, PricingCatalog,
};

// 引擎
pub use engine::{ClientRoiEngine, ClientScenario, OperatorEconomicsEngine, OperatorScenario};

// API
pub use api::{ApiError, ApiResult, CalculationRequest, CalculatorApi, PricingApi};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "Call-a-Vet équidos";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_engines_are_reexported() {
        let result = ClientRoiEngine::new().compute(ClientRoiParams::default());
        assert_eq!(result.total_events, 1.0);
    }
}
