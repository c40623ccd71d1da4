// ==========================================
// Call-a-Vet 经济测算 - 参数字段访问
// ==========================================
// 职责: 按字段名读写参数记录（表单字段 / 配置覆写 / CLI --set 共用）
// 字段名: 统一使用 camelCase 规范名
// ==========================================

/// 按名称访问参数记录的数值字段
pub trait ParamFields: Sized + Copy {
    /// 规范字段名（顺序即表单/导出顺序）
    const FIELDS: &'static [&'static str];

    /// 读取字段值，字段不存在返回 None
    fn get_field(&self, name: &str) -> Option<f64>;

    /// 写入字段值，字段不存在返回 false
    ///
    /// 非有限值（NaN / ±∞）一律写入 0
    fn set_field(&mut self, name: &str, value: f64) -> bool;

    /// 按规范字段名查找，忽略大小写与 `_` / `-`（兼容 snake_case）
    fn canonical_field(name: &str) -> Option<&'static str> {
        let wanted = fold_field_name(name);
        Self::FIELDS
            .iter()
            .copied()
            .find(|field| fold_field_name(field) == wanted)
    }
}

/// 非有限值归零
pub fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

fn fold_field_name(name: &str) -> String {
    name.trim()
        .chars()
        .filter(|c| *c != '_' && *c != '-')
        .flat_map(char::to_lowercase)
        .collect()
}
