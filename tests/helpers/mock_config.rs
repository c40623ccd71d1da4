// ==========================================
// Mock 配置实现 - 用于集成测试
// ==========================================

use call_a_vet_economics::config::CalculatorConfigReader;
use call_a_vet_economics::domain::{ClientRoiParams, OperatorEconomicsParams};
use std::path::PathBuf;

/// Mock 配置结构
#[derive(Debug, Clone)]
pub struct MockConfig {
    pub locale: String,
    pub export_dir: PathBuf,
    pub client_defaults: ClientRoiParams,
    pub operator_defaults: OperatorEconomicsParams,
}

impl MockConfig {
    /// 创建默认配置
    pub fn default() -> Self {
        Self {
            locale: "es-MX".to_string(),
            export_dir: PathBuf::from("."),
            client_defaults: ClientRoiParams::default(),
            operator_defaults: OperatorEconomicsParams::default(),
        }
    }

    /// 指定导出目录
    pub fn with_export_dir(dir: impl Into<PathBuf>) -> Self {
        let mut config = Self::default();
        config.export_dir = dir.into();
        config
    }

    /// 指定语言
    pub fn with_locale(locale: &str) -> Self {
        let mut config = Self::default();
        config.locale = locale.to_string();
        config
    }
}

impl CalculatorConfigReader for MockConfig {
    fn get_locale(&self) -> String {
        self.locale.clone()
    }

    fn get_export_dir(&self) -> PathBuf {
        self.export_dir.clone()
    }

    fn get_client_defaults(&self) -> ClientRoiParams {
        self.client_defaults
    }

    fn get_operator_defaults(&self) -> OperatorEconomicsParams {
        self.operator_defaults
    }
}
