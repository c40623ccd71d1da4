// ==========================================
// Call-a-Vet 经济测算 - 配置管理器
// ==========================================
// 职责: 配置加载、查询、默认输入覆写
// 存储: JSON 对象文件 → 扁平 key/value
//   {"locale": "en", "client_roi": {"horses": 8}}
//   → locale = "en", client_roi/horses = "8"
// ==========================================

use crate::config::calculator_config_trait::CalculatorConfigReader;
use crate::config::error::{ConfigError, ConfigResult};
use crate::domain::client_roi::ClientRoiParams;
use crate::domain::fields::ParamFields;
use crate::domain::operator_economics::OperatorEconomicsParams;
use crate::domain::types::CalculatorKind;
use crate::i18n;
use crate::input::parse_locale_number;
use serde_json::Value;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// 配置文件所在子目录（位于用户配置目录下）
const CONFIG_DIR_NAME: &str = "call-a-vet";
const CONFIG_FILE_NAME: &str = "config.json";

// ==========================================
// ConfigManager - 配置管理器
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct ConfigManager {
    values: HashMap<String, String>,
    source: Option<PathBuf>,
}

impl ConfigManager {
    /// 创建空配置（全部使用默认值）
    pub fn new() -> Self {
        Self::default()
    }

    /// 从已有键值创建（测试与嵌入调用）
    pub fn from_map(values: HashMap<String, String>) -> Self {
        Self {
            values,
            source: None,
        }
    }

    /// 从 JSON 配置文件加载
    ///
    /// # 参数
    /// - path: 配置文件路径（必须存在）
    ///
    /// # 返回
    /// - Err(FileNotFound): 文件不存在
    /// - Err(InvalidFormat): 非 JSON 或顶层不是对象
    pub fn from_file(path: &Path) -> ConfigResult<Self> {
        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.display().to_string()));
        }

        let raw = std::fs::read_to_string(path)?;
        let json: Value = serde_json::from_str(&raw)?;
        let values = flatten_config(&json)?;

        tracing::info!(
            path = %path.display(),
            keys = values.len(),
            "配置文件加载完成"
        );

        Ok(Self {
            values,
            source: Some(path.to_path_buf()),
        })
    }

    /// 加载配置；文件缺失时全部使用默认值
    ///
    /// # 参数
    /// - path: 显式路径；None 时使用 [`default_config_path`]
    pub fn load_or_default(path: Option<&Path>) -> ConfigResult<Self> {
        let resolved = match path {
            Some(p) => Some(p.to_path_buf()),
            None => default_config_path(),
        };

        match resolved {
            Some(p) if p.exists() => Self::from_file(&p),
            Some(p) => {
                tracing::info!(path = %p.display(), "配置文件不存在，使用默认配置");
                Ok(Self::new())
            }
            None => Ok(Self::new()),
        }
    }

    /// 配置来源文件（内存配置为 None）
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// 读取配置值
    fn get_config_value(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// 读取配置值，带默认值
    fn get_config_or_default(&self, key: &str, default: &str) -> String {
        self.get_config_value(key).unwrap_or(default).to_string()
    }

    /// 应用 `<prefix>/<field>` 覆写到默认参数
    ///
    /// 未知字段记录 warn 后忽略；数值走表单解析口径，不会失败
    fn read_param_defaults<P: ParamFields>(&self, kind: CalculatorKind, base: P) -> P {
        let prefix = format!("{}/", kind.config_prefix());
        let mut params = base;

        let mut keys: Vec<&String> = self
            .values
            .keys()
            .filter(|k| k.starts_with(&prefix))
            .collect();
        keys.sort();

        for key in keys {
            let field = &key[prefix.len()..];
            let raw = &self.values[key];
            if !params.set_field(field, parse_locale_number(raw)) {
                tracing::warn!(
                    config_key = %key,
                    raw_value = %raw,
                    "未知的默认输入字段，已忽略"
                );
            }
        }

        params
    }
}

// ==========================================
// CalculatorConfigReader Trait 实现
// ==========================================
impl CalculatorConfigReader for ConfigManager {
    fn get_locale(&self) -> String {
        let value = self.get_config_or_default(config_keys::LOCALE, i18n::DEFAULT_LOCALE);
        i18n::canonical_locale(&value).unwrap_or_else(|| {
            tracing::warn!(
                config_key = config_keys::LOCALE,
                raw_value = %value,
                "不支持的语言配置，使用默认语言"
            );
            i18n::DEFAULT_LOCALE.to_string()
        })
    }

    fn get_export_dir(&self) -> PathBuf {
        match self.get_config_value(config_keys::EXPORT_DIR) {
            Some(dir) if !dir.trim().is_empty() => PathBuf::from(dir.trim()),
            Some(_) => {
                tracing::warn!(
                    config_key = config_keys::EXPORT_DIR,
                    "导出目录配置为空，使用默认目录"
                );
                default_export_dir()
            }
            None => default_export_dir(),
        }
    }

    fn get_client_defaults(&self) -> ClientRoiParams {
        self.read_param_defaults(CalculatorKind::ClientRoi, ClientRoiParams::default())
    }

    fn get_operator_defaults(&self) -> OperatorEconomicsParams {
        self.read_param_defaults(CalculatorKind::Operator, OperatorEconomicsParams::default())
    }
}

/// 默认配置文件路径: <用户配置目录>/call-a-vet/config.json
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}

/// 默认导出目录: 用户下载目录，取不到时为当前目录
fn default_export_dir() -> PathBuf {
    dirs::download_dir().unwrap_or_else(|| PathBuf::from("."))
}

/// 展平 JSON 对象: 嵌套对象键以 '/' 拼接，标量转为文本
fn flatten_config(json: &Value) -> ConfigResult<HashMap<String, String>> {
    let object = json
        .as_object()
        .ok_or_else(|| ConfigError::InvalidFormat("顶层必须是 JSON 对象".to_string()))?;

    let mut out = HashMap::new();
    for (key, value) in object {
        flatten_into(key, value, &mut out);
    }
    Ok(out)
}

fn flatten_into(key: &str, value: &Value, out: &mut HashMap<String, String>) {
    match value {
        Value::Object(map) => {
            for (child, v) in map {
                flatten_into(&format!("{}/{}", key, child), v, out);
            }
        }
        Value::String(s) => {
            out.insert(key.to_string(), s.clone());
        }
        Value::Null => {
            tracing::warn!(config_key = %key, "配置项为 null，已忽略");
        }
        other => {
            out.insert(key.to_string(), other.to_string());
        }
    }
}

// ==========================================
// 配置键常量
// ==========================================
pub mod config_keys {
    /// 展示与导出语言
    pub const LOCALE: &str = "locale";
    /// 导出目录
    pub const EXPORT_DIR: &str = "export_dir";
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = ConfigManager::new();
        assert_eq!(config.get_locale(), "es-MX");
        assert_eq!(config.get_client_defaults(), ClientRoiParams::default());
        assert_eq!(config.get_operator_defaults(), OperatorEconomicsParams::default());
    }

    #[test]
    fn test_nested_overrides_are_flattened() {
        let file = write_config(
            r#"{"locale": "en", "export_dir": "/tmp/out",
                "client_roi": {"horses": 8, "membershipCost": "1499,5"},
                "operator": {"take_rate": 0.3}}"#,
        );
        let config = ConfigManager::from_file(file.path()).unwrap();

        assert_eq!(config.get_locale(), "en");
        assert_eq!(config.get_export_dir(), PathBuf::from("/tmp/out"));

        let client = config.get_client_defaults();
        assert_eq!(client.horses, 8.0);
        assert_eq!(client.membership_cost, 1499.5);
        assert_eq!(client.events_per_horse, 0.2);

        let operator = config.get_operator_defaults();
        assert_eq!(operator.take_rate, 0.3);
        assert_eq!(operator.chats, OperatorEconomicsParams::default().chats);
    }

    #[test]
    fn test_unknown_override_and_locale_fall_back() {
        let mut values = HashMap::new();
        values.insert("locale".to_string(), "xx-YY".to_string());
        values.insert("client_roi/stalls".to_string(), "3".to_string());
        let config = ConfigManager::from_map(values);

        assert_eq!(config.get_locale(), "es-MX");
        assert_eq!(config.get_client_defaults(), ClientRoiParams::default());
    }

    #[test]
    fn test_locale_case_is_normalized() {
        let mut values = HashMap::new();
        values.insert("locale".to_string(), "EN".to_string());
        let config = ConfigManager::from_map(values);

        assert_eq!(config.get_locale(), "en");
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.json");

        assert!(matches!(
            ConfigManager::from_file(&path),
            Err(ConfigError::FileNotFound(_))
        ));
        let config = ConfigManager::load_or_default(Some(&path)).unwrap();
        assert!(config.source().is_none());
    }

    #[test]
    fn test_invalid_format() {
        let file = write_config("[1, 2]");
        assert!(matches!(
            ConfigManager::from_file(file.path()),
            Err(ConfigError::InvalidFormat(_))
        ));

        let file = write_config("{not json");
        assert!(matches!(
            ConfigManager::from_file(file.path()),
            Err(ConfigError::InvalidFormat(_))
        ));
    }
}
