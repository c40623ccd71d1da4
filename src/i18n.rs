// ==========================================
// 国际化 (i18n) 模块
// ==========================================
// 使用 rust-i18n 库
// 支持西班牙语-墨西哥（默认）和英文
// ==========================================
// 注意: rust_i18n::i18n! 宏已在 lib.rs 中初始化
// ==========================================

/// 默认语言（导出/展示标签的原始口径）
pub const DEFAULT_LOCALE: &str = "es-MX";

/// 获取当前语言
pub fn current_locale() -> String {
    rust_i18n::locale().to_string()
}

/// 设置语言
///
/// # 参数
/// - locale: 语言代码（"es-MX" 或 "en"）
pub fn set_locale(locale: &str) {
    rust_i18n::set_locale(locale);
}

/// 规范化语言代码: "EN" → "en"，"es-mx" → "es-MX"
///
/// 翻译查找区分大小写，下游一律使用这里返回的写法
pub fn canonical_locale(locale: &str) -> Option<String> {
    let wanted = locale.trim();
    rust_i18n::available_locales!()
        .into_iter()
        .find(|l| l.eq_ignore_ascii_case(wanted))
        .map(|l| l.to_string())
}

/// 翻译消息（无参数，当前语言）
///
/// # 示例
/// ```no_run
/// use call_a_vet_economics::i18n::t;
/// let msg = t("common.success");
/// ```
pub fn t(key: &str) -> String {
    rust_i18n::t!(key).to_string()
}

/// 翻译消息（指定语言，不读写全局状态）
///
/// 导出与展示标签走这里，调用方并发时互不干扰
pub fn t_in(key: &str, locale: &str) -> String {
    rust_i18n::t!(key, locale = locale).to_string()
}

/// 翻译消息（带参数）
///
/// # 示例
/// ```no_run
/// use call_a_vet_economics::i18n::t_with_args;
/// let msg = t_with_args("common.export_written", &[("path", "/tmp/roi.csv")]);
/// ```
pub fn t_with_args(key: &str, args: &[(&str, &str)]) -> String {
    let mut result = rust_i18n::t!(key).to_string();
    for (k, v) in args {
        let placeholder = format!("%{{{}}}", k);
        result = result.replace(&placeholder, v);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // rust-i18n 的 locale 为全局状态，且 Rust 测试默认并行执行；
    // 为避免测试互相干扰，这里对 i18n 相关测试串行化。
    static LOCALE_TEST_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_set_locale() {
        let _guard = LOCALE_TEST_LOCK.lock().unwrap();
        set_locale("es-MX");
        assert_eq!(current_locale(), "es-MX");

        set_locale("en");
        assert_eq!(current_locale(), "en");

        // 恢复默认语言
        set_locale(DEFAULT_LOCALE);
    }

    #[test]
    fn test_translate_simple() {
        let _guard = LOCALE_TEST_LOCK.lock().unwrap();
        set_locale("es-MX");
        assert_eq!(t("common.success"), "Operación exitosa");

        set_locale("en");
        assert_eq!(t("common.success"), "Operation successful");

        set_locale(DEFAULT_LOCALE);
    }

    #[test]
    fn test_translate_with_args() {
        let _guard = LOCALE_TEST_LOCK.lock().unwrap();
        set_locale("en");
        let msg = t_with_args("common.export_written", &[("path", "/tmp/roi.csv")]);
        assert!(msg.contains("/tmp/roi.csv"));
        assert!(msg.contains("Export written"));

        set_locale(DEFAULT_LOCALE);
    }

    #[test]
    fn test_translate_in_explicit_locale() {
        // 不依赖全局语言
        assert_eq!(t_in("export.client.horses", "es-MX"), "Número de caballos");
        assert_eq!(t_in("export.client.horses", "en"), "Number of horses");
    }

    #[test]
    fn test_canonical_locale_restores_catalogue_case() {
        assert_eq!(canonical_locale("EN").as_deref(), Some("en"));
        assert_eq!(canonical_locale(" es-mx ").as_deref(), Some("es-MX"));
        assert_eq!(canonical_locale("fr"), None);

        let locale = canonical_locale("EN").unwrap();
        assert_eq!(t_in("summary.client.total_events", &locale), "Total events/month");
    }
}
