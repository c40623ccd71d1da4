// ==========================================
// Call-a-Vet 经济测算 - 展示层
// ==========================================
// 职责: 货币/百分比格式化、结果摘要卡片
// 说明: 只做格式化，不参与计算
// ==========================================

pub mod format;
pub mod summary;

pub use format::{
    format_break_even, format_count, format_currency, format_payback, format_percent, EM_DASH,
};
pub use summary::{client_summary, operator_summary, SummaryStat};
