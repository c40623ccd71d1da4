// ==========================================
// Call-a-Vet 经济测算 - 配置层
// ==========================================
// 职责: 系统配置管理（语言、导出目录、默认输入覆写）
// 存储: JSON 对象文件 → 扁平 key/value（嵌套对象以 '/' 拼接键）
// ==========================================

pub mod calculator_config_trait;
pub mod config_manager;
pub mod error;

// 重导出核心配置管理器
pub use calculator_config_trait::CalculatorConfigReader;
pub use config_manager::{config_keys, default_config_path, ConfigManager};
pub use error::{ConfigError, ConfigResult};
