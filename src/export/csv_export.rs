// ==========================================
// Call-a-Vet 经济测算 - 文本导出
// ==========================================
// 规则:
// - 表头固定 ("Variable","Valor")，与语言无关
// - 字段以 ',' 分隔，行以 '\n' 分隔，末行无换行
// - 不加引号、不转义（QuoteStyle::Never）
// - 数值按 JS Number → String 口径输出（1800 / 0.6 / Infinity）
// ==========================================

use crate::domain::types::CalculatorKind;
use crate::export::error::{ExportError, ExportResult};
use crate::export::rows::ExportRow;
use csv::{QuoteStyle, Terminator, WriterBuilder};
use std::path::{Path, PathBuf};

/// 固定表头
pub const EXPORT_HEADER: (&str, &str) = ("Variable", "Valor");

/// 渲染导出文本
pub fn render_rows(rows: &[ExportRow]) -> ExportResult<String> {
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .quote_style(QuoteStyle::Never)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer.write_record([EXPORT_HEADER.0, EXPORT_HEADER.1])?;
    for row in rows {
        writer.write_record([row.label.as_str(), js_number_string(row.value).as_str()])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| ExportError::CsvWriteError(e.to_string()))?;
    let mut text =
        String::from_utf8(bytes).map_err(|e| ExportError::CsvWriteError(e.to_string()))?;

    // 行之间用换行连接，末行不带
    if text.ends_with('\n') {
        text.pop();
    }
    Ok(text)
}

/// 按 JS `String(number)` 口径输出数值
///
/// ```
/// use call_a_vet_economics::export::js_number_string;
/// assert_eq!(js_number_string(1800.0), "1800");
/// assert_eq!(js_number_string(f64::INFINITY), "Infinity");
/// ```
pub fn js_number_string(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        // -0 也输出 "0"
        return "0".to_string();
    }

    let abs = value.abs();
    if abs >= 1e21 || abs < 1e-6 {
        // 指数形式: 1e+21 / 1.5e-7
        let exp = format!("{:e}", value);
        return match exp.split_once('e') {
            Some((mantissa, power)) if !power.starts_with('-') => {
                format!("{}e+{}", mantissa, power)
            }
            _ => exp,
        };
    }
    format!("{}", value)
}

// ==========================================
// CsvExporter - 导出文件写入
// ==========================================
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvExporter;

impl CsvExporter {
    pub fn new() -> Self {
        Self
    }

    /// 写入导出文件（文件名由计算器类型固定），返回完整路径
    ///
    /// 目录必须已存在；同名文件直接覆盖
    pub fn write(&self, dir: &Path, kind: CalculatorKind, content: &str) -> ExportResult<PathBuf> {
        if !dir.is_dir() {
            return Err(ExportError::DirectoryNotFound(dir.display().to_string()));
        }

        let path = dir.join(kind.export_file_name());
        std::fs::write(&path, content.as_bytes())?;

        tracing::info!(
            target: "export",
            calculator = %kind,
            path = %path.display(),
            bytes = content.len(),
            "export written"
        );
        Ok(path)
    }
}
