// ==========================================
// Call-a-Vet 经济测算 - 输入层错误类型
// ==========================================
// 工具: thiserror 派生宏
// 说明: 数值本身从不报错（非数值归零），错误只来自字段名与文件
// ==========================================

use thiserror::Error;

/// 输入层错误类型
#[derive(Error, Debug)]
pub enum InputError {
    // ===== 字段相关错误 =====
    #[error("未知字段: {field}（可用字段: {available}）")]
    UnknownField { field: String, available: String },

    #[error("赋值格式错误: {0}（应为 key=value）")]
    MalformedAssignment(String),

    #[error("字段值类型错误 (字段 {field}): {message}")]
    InvalidValueType { field: String, message: String },

    // ===== 文件相关错误 =====
    #[error("参数文件不存在: {0}")]
    FileNotFound(String),

    #[error("参数文件读取失败: {0}")]
    FileReadError(String),

    #[error("参数文件格式错误: {0}")]
    InvalidParamsFile(String),

    // ===== 通用错误 =====
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

// 实现 From<std::io::Error>
impl From<std::io::Error> for InputError {
    fn from(err: std::io::Error) -> Self {
        InputError::FileReadError(err.to_string())
    }
}

// 实现 From<serde_json::Error>
impl From<serde_json::Error> for InputError {
    fn from(err: serde_json::Error) -> Self {
        InputError::InvalidParamsFile(err.to_string())
    }
}

/// Result 类型别名
pub type InputResult<T> = Result<T, InputError>;
