// ==========================================
// Call-a-Vet 经济测算 - 引擎层
// ==========================================
// 职责: 两个纯函数计算引擎 + 参考场景
// 红线: 引擎无状态、无 I/O、不报错；除零一律显式守卫
// ==========================================

pub mod client_roi;
pub mod operator_economics;
pub mod scenarios;

// 重导出核心引擎
pub use client_roi::ClientRoiEngine;
pub use operator_economics::OperatorEconomicsEngine;
pub use scenarios::{ClientScenario, OperatorScenario};
