// ==========================================
// Call-a-Vet 经济测算 - 输入边界层
// ==========================================
// 职责: 文本字段 → 有限实数（小数点/逗号兼容，非数值归零）
// 红线: 引擎永远看不到非法输入；字段值不报错，只有未知字段报错
// ==========================================

pub mod error;
pub mod field_mapper;
pub mod number_parser;

// 重导出核心类型
pub use error::{InputError, InputResult};
pub use field_mapper::FieldMapper;
pub use number_parser::parse_locale_number;
