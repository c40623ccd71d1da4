// ==========================================
// Call-a-Vet 经济测算 - API 层
// ==========================================
// 职责: 提供计算与价格查询接口，供 CLI 调用
// ==========================================

pub mod calculator_api;
pub mod error;
pub mod pricing_api;

// 重导出核心类型
pub use calculator_api::{
    CalculationReport, CalculationRequest, CalculatorApi, ClientRoiReport, OperatorReport,
    ScenarioInfo,
};
pub use error::{ApiError, ApiResult};
pub use pricing_api::{PlanView, PricingApi};
