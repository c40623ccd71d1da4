// ==========================================
// Call-a-Vet 经济测算 - 领域模型层
// ==========================================
// 职责: 定义参数记录、结果记录、计算器类型、价格目录
// 红线: 不含解析逻辑,不含引擎逻辑,不含 I/O
// ==========================================

pub mod client_roi;
pub mod fields;
pub mod operator_economics;
pub mod pricing;
pub mod types;

// 重导出核心类型
pub use client_roi::{ClientRoiParams, ClientRoiResult};
pub use fields::ParamFields;
pub use operator_economics::{OperatorEconomicsParams, OperatorEconomicsResult};
pub use pricing::{Plan, PriceRange, PricingCatalog};
pub use types::{CalculatorKind, PlanTier};
