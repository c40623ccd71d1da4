// ==========================================
// Call-a-Vet 经济测算 - API层错误类型
// ==========================================
// 职责: 汇总输入/导出/配置层错误，统一对外错误消息
// 所有错误信息必须包含显式原因
// ==========================================

use crate::config::error::ConfigError;
use crate::export::error::ExportError;
use crate::input::error::InputError;
use thiserror::Error;

/// API层错误类型
#[derive(Error, Debug)]
pub enum ApiError {
    // ==========================================
    // 业务规则错误
    // ==========================================
    #[error("无效输入: {0}")]
    InvalidInput(String),

    #[error("未知场景: {scenario}（计算器 {calculator}）")]
    UnknownScenario { calculator: String, scenario: String },

    #[error("未知价格方案: {0}")]
    UnknownPlan(String),

    #[error("不支持的语言: {0}")]
    UnsupportedLocale(String),

    // ==========================================
    // 下层错误
    // ==========================================
    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Export(#[from] ExportError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result 类型别名
pub type ApiResult<T> = Result<T, ApiError>;
