// ==========================================
// Call-a-Vet 经济测算 - 数值格式化
// ==========================================
// 货币: es-MX / MXN，0 位小数，千分位 ','，四舍五入（远离零）
// 百分比: 1 位小数
// 不可达/无意义值: 用 "—" 而不是数字
// ==========================================

/// 不可达 / 不适用时的占位符
pub const EM_DASH: &str = "—";

/// 货币（MXN，无小数）
///
/// ```
/// use call_a_vet_economics::presentation::format_currency;
/// assert_eq!(format_currency(2400.0), "$2,400");
/// assert_eq!(format_currency(-36_000.4), "-$36,000");
/// ```
pub fn format_currency(value: f64) -> String {
    if !value.is_finite() {
        return EM_DASH.to_string();
    }
    let rounded = value.abs().round();
    let sign = if value < 0.0 && rounded > 0.0 { "-" } else { "" };
    format!("{}${}", sign, group_thousands(rounded as u128))
}

/// 百分比（1 位小数），0.1402 → "14.0%"
pub fn format_percent(ratio: f64) -> String {
    if !ratio.is_finite() {
        return EM_DASH.to_string();
    }
    format!("{}%", to_fixed(ratio * 100.0, 1))
}

/// 计数（2 位小数）
pub fn format_count(value: f64) -> String {
    if !value.is_finite() {
        return EM_DASH.to_string();
    }
    to_fixed(value, 2)
}

/// 回本期: 0 显示 "—"（零节省时的守卫值），否则 2 位小数
pub fn format_payback(periods: f64) -> String {
    if periods == 0.0 || !periods.is_finite() {
        EM_DASH.to_string()
    } else {
        to_fixed(periods, 2)
    }
}

/// 盈亏平衡咨询量: +∞ 显示 "—"，否则 1 位小数
pub fn format_break_even(consults: f64) -> String {
    if consults.is_finite() {
        to_fixed(consults, 1)
    } else {
        EM_DASH.to_string()
    }
}

/// 定点小数，.5 远离零进位（`{:.N}` 对恰好的 .5 取偶）
fn to_fixed(value: f64, decimals: u32) -> String {
    let scale = 10f64.powi(decimals as i32);
    let rounded = (value * scale).round() / scale;
    format!("{:.*}", decimals as usize, rounded)
}

fn group_thousands(n: u128) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
