// ==========================================
// Call-a-Vet 经济测算 - 计算器配置读取 Trait
// ==========================================
// 职责: 定义 API 层所需的配置读取接口（不包含实现）
// 红线: 不包含配置写入、不包含业务逻辑
// ==========================================

use crate::domain::client_roi::ClientRoiParams;
use crate::domain::operator_economics::OperatorEconomicsParams;
use std::path::PathBuf;

// ==========================================
// CalculatorConfigReader Trait
// ==========================================
// 实现者: ConfigManager（从配置文件读取）/ 测试 MockConfig
pub trait CalculatorConfigReader: Send + Sync {
    /// 展示与导出标签语言
    ///
    /// # 默认值
    /// - es-MX（不支持的语言同样回退到 es-MX）
    fn get_locale(&self) -> String;

    /// 导出目录
    ///
    /// # 默认值
    /// - 用户下载目录；取不到时为当前目录
    fn get_export_dir(&self) -> PathBuf;

    /// 客户 ROI 表单默认值（`client_roi/<field>` 覆写）
    fn get_client_defaults(&self) -> ClientRoiParams;

    /// 运营单位经济表单默认值（`operator/<field>` 覆写）
    fn get_operator_defaults(&self) -> OperatorEconomicsParams;
}
