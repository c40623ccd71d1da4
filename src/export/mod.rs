// ==========================================
// Call-a-Vet 经济测算 - 导出层
// ==========================================
// 格式: 首行固定表头 ("Variable","Valor")，每行 label,value
// 说明: 不做转义（标签为固定可信集合），不是通用 CSV 编码器
// ==========================================

pub mod csv_export;
pub mod error;
pub mod rows;

// 重导出核心类型
pub use csv_export::{js_number_string, render_rows, CsvExporter, EXPORT_HEADER};
pub use error::{ExportError, ExportResult};
pub use rows::{client_rows, operator_rows, ExportRow};
