// ==========================================
// Call-a-Vet 经济测算 - 计算器 API
// ==========================================
// 职责: 输入装配 → 引擎计算 → 摘要/导出行 → 可选导出
// 输入叠加顺序（后者覆盖前者）:
//   1) 场景参数（指定 --scenario 时）或配置默认值
//   2) 参数文件（JSON）
//   3) 表单文本字段
//   4) key=value 赋值
// ==========================================

use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::Serialize;

use crate::api::error::{ApiError, ApiResult};
use crate::config::calculator_config_trait::CalculatorConfigReader;
use crate::domain::client_roi::{ClientRoiParams, ClientRoiResult};
use crate::domain::fields::ParamFields;
use crate::domain::operator_economics::{OperatorEconomicsParams, OperatorEconomicsResult};
use crate::domain::types::CalculatorKind;
use crate::engine::{ClientRoiEngine, ClientScenario, OperatorEconomicsEngine, OperatorScenario};
use crate::export::{client_rows, operator_rows, render_rows, CsvExporter, ExportResult, ExportRow};
use crate::i18n;
use crate::input::FieldMapper;
use crate::presentation::{client_summary, operator_summary, SummaryStat};

// ==========================================
// 请求/响应 DTO
// ==========================================

/// 计算请求
#[derive(Debug, Clone, Default)]
pub struct CalculationRequest {
    /// 参考场景 id（替代配置默认值作为起点）
    pub scenario: Option<String>,
    /// JSON 参数文件
    pub params_file: Option<PathBuf>,
    /// 表单文本字段（字段名, 原始文本）
    pub form: Vec<(String, String)>,
    /// `key=value` 赋值
    pub assignments: Vec<String>,
    /// 显式语言（None 时取配置）
    pub locale: Option<String>,
}

impl CalculationRequest {
    pub fn with_scenario(mut self, scenario: &str) -> Self {
        self.scenario = Some(scenario.to_string());
        self
    }

    pub fn with_field(mut self, field: &str, raw: &str) -> Self {
        self.form.push((field.to_string(), raw.to_string()));
        self
    }

    pub fn with_locale(mut self, locale: &str) -> Self {
        self.locale = Some(locale.to_string());
        self
    }
}

/// 计算报告（参数快照 + 结果 + 摘要 + 导出行）
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationReport<P, R> {
    pub calculator: CalculatorKind,
    pub locale: String,
    pub params: P,
    pub result: R,
    pub summary: Vec<SummaryStat>,
    pub export_rows: Vec<ExportRow>,
    pub file_name: &'static str,
}

pub type ClientRoiReport = CalculationReport<ClientRoiParams, ClientRoiResult>;
pub type OperatorReport = CalculationReport<OperatorEconomicsParams, OperatorEconomicsResult>;

impl<P, R> CalculationReport<P, R> {
    /// 导出文本（表头 + 每行 label,value，无末尾换行）
    pub fn csv(&self) -> ExportResult<String> {
        render_rows(&self.export_rows)
    }
}

/// 场景列表项
#[derive(Debug, Clone, Serialize)]
pub struct ScenarioInfo {
    pub calculator: CalculatorKind,
    pub id: &'static str,
    pub title: String,
}

// ==========================================
// CalculatorApi - 计算器 API
// ==========================================

/// 计算器 API
///
/// 职责：
/// 1. 把文本/文件/场景输入装配为参数快照
/// 2. 调用无状态引擎计算
/// 3. 生成本地化摘要与导出行
/// 4. 导出到目录（唯一的 I/O）
pub struct CalculatorApi {
    config: Arc<dyn CalculatorConfigReader>,
    mapper: FieldMapper,
    client_engine: ClientRoiEngine,
    operator_engine: OperatorEconomicsEngine,
    exporter: CsvExporter,
}

impl CalculatorApi {
    /// 创建新的 CalculatorApi 实例
    pub fn new(config: Arc<dyn CalculatorConfigReader>) -> Self {
        Self {
            config,
            mapper: FieldMapper::new(),
            client_engine: ClientRoiEngine::new(),
            operator_engine: OperatorEconomicsEngine::new(),
            exporter: CsvExporter::new(),
        }
    }

    /// 客户 ROI 计算
    pub fn client_roi(&self, request: &CalculationRequest) -> ApiResult<ClientRoiReport> {
        let locale = self.resolve_locale(request)?;
        let base = match request.scenario.as_deref() {
            Some(id) => id
                .parse::<ClientScenario>()
                .map_err(|_| unknown_scenario(CalculatorKind::ClientRoi, id))?
                .params(),
            None => self.config.get_client_defaults(),
        };
        let params = self.assemble(base, request)?;
        let result = self.client_engine.compute(params);

        tracing::info!(
            calculator = %CalculatorKind::ClientRoi,
            scenario = request.scenario.as_deref().unwrap_or("-"),
            total_savings = result.total_savings,
            roi = result.roi,
            "客户 ROI 计算完成"
        );

        Ok(CalculationReport {
            calculator: CalculatorKind::ClientRoi,
            summary: client_summary(&result, &locale),
            export_rows: client_rows(&params, &result, &locale),
            file_name: CalculatorKind::ClientRoi.export_file_name(),
            locale,
            params,
            result,
        })
    }

    /// 运营单位经济计算
    pub fn operator_economics(&self, request: &CalculationRequest) -> ApiResult<OperatorReport> {
        let locale = self.resolve_locale(request)?;
        let base = match request.scenario.as_deref() {
            Some(id) => id
                .parse::<OperatorScenario>()
                .map_err(|_| unknown_scenario(CalculatorKind::Operator, id))?
                .params(),
            None => self.config.get_operator_defaults(),
        };
        let params = self.assemble(base, request)?;
        let result = self.operator_engine.compute(params);

        tracing::info!(
            calculator = %CalculatorKind::Operator,
            scenario = request.scenario.as_deref().unwrap_or("-"),
            net_operating = result.net_operating,
            break_even = result.break_even_consults,
            "运营单位经济计算完成"
        );

        Ok(CalculationReport {
            calculator: CalculatorKind::Operator,
            summary: operator_summary(&result, &locale),
            export_rows: operator_rows(&params, &result, &locale),
            file_name: CalculatorKind::Operator.export_file_name(),
            locale,
            params,
            result,
        })
    }

    /// 导出报告
    ///
    /// # 参数
    /// - dir: 导出目录；None 时使用配置的导出目录
    ///
    /// # 返回
    /// - Ok(PathBuf): 写入的文件路径（文件名固定，覆盖同名文件）
    pub fn export<P, R>(&self, report: &CalculationReport<P, R>, dir: Option<&Path>) -> ApiResult<PathBuf> {
        let dir = match dir {
            Some(d) => d.to_path_buf(),
            None => self.config.get_export_dir(),
        };
        let content = report.csv()?;
        Ok(self.exporter.write(&dir, report.calculator, &content)?)
    }

    /// 列出参考场景
    pub fn list_scenarios(&self, locale: Option<&str>) -> ApiResult<Vec<ScenarioInfo>> {
        let locale = self.check_locale(locale)?;

        let client = ClientScenario::ALL.iter().map(|s| ScenarioInfo {
            calculator: CalculatorKind::ClientRoi,
            id: s.as_str(),
            title: i18n::t_in(s.title_key(), &locale),
        });
        let operator = OperatorScenario::ALL.iter().map(|s| ScenarioInfo {
            calculator: CalculatorKind::Operator,
            id: s.as_str(),
            title: i18n::t_in(s.title_key(), &locale),
        });

        Ok(client.chain(operator).collect())
    }

    // ==========================================
    // 内部辅助
    // ==========================================

    fn assemble<P: ParamFields>(&self, base: P, request: &CalculationRequest) -> ApiResult<P> {
        let mut params = base;
        if let Some(path) = &request.params_file {
            params = self.mapper.load_params_file(params, path)?;
        }
        params = self
            .mapper
            .apply_form(params, request.form.iter().map(|(k, v)| (k.as_str(), v.as_str())))?;
        params = self.mapper.apply_assignments(params, &request.assignments)?;
        Ok(params)
    }

    fn resolve_locale(&self, request: &CalculationRequest) -> ApiResult<String> {
        self.check_locale(request.locale.as_deref())
    }

    fn check_locale(&self, locale: Option<&str>) -> ApiResult<String> {
        match locale {
            Some(l) => {
                i18n::canonical_locale(l).ok_or_else(|| ApiError::UnsupportedLocale(l.to_string()))
            }
            None => Ok(self.config.get_locale()),
        }
    }
}

fn unknown_scenario(kind: CalculatorKind, id: &str) -> ApiError {
    ApiError::UnknownScenario {
        calculator: kind.to_string(),
        scenario: id.to_string(),
    }
}
