// ==========================================
// Call-a-Vet 经济测算 - 数值解析
// ==========================================
// 规则（与表单输入口径一致）:
// 1) 第一个 ',' 视为小数点
// 2) 取最长合法的十进制前缀（可带符号/小数/指数），忽略其后内容
// 3) 无数值前缀 → 0；溢出为 ±∞ → 0
// ==========================================

use crate::domain::fields::finite_or_zero;

/// 解析表单数值（逗号或点作小数点），结果一定是有限实数
///
/// ```
/// use call_a_vet_economics::input::parse_locale_number;
/// assert_eq!(parse_locale_number("2,5"), 2.5);
/// assert_eq!(parse_locale_number("15 min"), 15.0);
/// assert_eq!(parse_locale_number("abc"), 0.0);
/// ```
pub fn parse_locale_number(raw: &str) -> f64 {
    let normalized = raw.replacen(',', ".", 1);
    match leading_decimal(&normalized) {
        Some(prefix) => finite_or_zero(prefix.parse::<f64>().unwrap_or(0.0)),
        None => 0.0,
    }
}

/// 提取最长十进制前缀，规范化为 Rust 可解析的形式
fn leading_decimal(s: &str) -> Option<String> {
    let bytes = s.trim_start().as_bytes();
    let mut i = 0;
    let mut out = String::new();

    if i < bytes.len() && (bytes[i] == b'+' || bytes[i] == b'-') {
        if bytes[i] == b'-' {
            out.push('-');
        }
        i += 1;
    }

    let int_start = i;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    let int_digits = &bytes[int_start..i];

    let mut frac_digits: &[u8] = &[];
    if i < bytes.len() && bytes[i] == b'.' {
        let frac_start = i + 1;
        let mut j = frac_start;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        frac_digits = &bytes[frac_start..j];
        i = j;
    }

    if int_digits.is_empty() && frac_digits.is_empty() {
        return None;
    }

    out.push_str(if int_digits.is_empty() {
        "0"
    } else {
        ascii(int_digits)
    });
    if !frac_digits.is_empty() {
        out.push('.');
        out.push_str(ascii(frac_digits));
    }

    // 指数部分必须带数字才算数
    if i < bytes.len() && (bytes[i] == b'e' || bytes[i] == b'E') {
        let mut j = i + 1;
        let mut exp = String::from("e");
        if j < bytes.len() && (bytes[j] == b'+' || bytes[j] == b'-') {
            if bytes[j] == b'-' {
                exp.push('-');
            }
            j += 1;
        }
        let exp_start = j;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        if j > exp_start {
            exp.push_str(ascii(&bytes[exp_start..j]));
            out.push_str(&exp);
        }
    }

    Some(out)
}

fn ascii(digits: &[u8]) -> &str {
    // 只含 ASCII 数字
    std::str::from_utf8(digits).unwrap_or("0")
}
