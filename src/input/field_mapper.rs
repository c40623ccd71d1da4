// ==========================================
// Call-a-Vet 经济测算 - 字段映射器
// ==========================================
// 职责: 表单字段 / key=value 赋值 / JSON 参数文件 → 参数记录
// 规则: 在调用方给出的基础快照上逐字段覆写，返回新快照
// ==========================================

use crate::domain::fields::ParamFields;
use crate::input::error::{InputError, InputResult};
use crate::input::number_parser::parse_locale_number;
use serde_json::Value;
use std::path::Path;

#[derive(Debug, Clone, Copy, Default)]
pub struct FieldMapper;

impl FieldMapper {
    pub fn new() -> Self {
        Self
    }

    /// 写入单个文本字段
    pub fn set_text<P: ParamFields>(&self, params: &mut P, field: &str, raw: &str) -> InputResult<()> {
        self.set_number(params, field, parse_locale_number(raw))
    }

    /// 写入单个数值字段（非有限值归零）
    pub fn set_number<P: ParamFields>(&self, params: &mut P, field: &str, value: f64) -> InputResult<()> {
        if params.set_field(field, value) {
            Ok(())
        } else {
            Err(unknown_field::<P>(field))
        }
    }

    /// 用表单字段覆写基础快照
    pub fn apply_form<'a, P, I>(&self, base: P, fields: I) -> InputResult<P>
    where
        P: ParamFields,
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut params = base;
        for (field, raw) in fields {
            self.set_text(&mut params, field, raw)?;
        }
        Ok(params)
    }

    /// 用 `key=value` 赋值列表覆写基础快照
    pub fn apply_assignments<P, S>(&self, base: P, assignments: &[S]) -> InputResult<P>
    where
        P: ParamFields,
        S: AsRef<str>,
    {
        let mut params = base;
        for assignment in assignments {
            let (field, raw) = self.parse_assignment(assignment.as_ref())?;
            self.set_text(&mut params, field, raw)?;
        }
        Ok(params)
    }

    /// 拆分 `key=value`
    pub fn parse_assignment<'a>(&self, raw: &'a str) -> InputResult<(&'a str, &'a str)> {
        match raw.split_once('=') {
            Some((key, value)) if !key.trim().is_empty() => Ok((key.trim(), value.trim())),
            _ => Err(InputError::MalformedAssignment(raw.to_string())),
        }
    }

    /// 用 JSON 对象覆写基础快照
    ///
    /// 值可以是数字，也可以是表单文本（按表单规则解析）；null 视为 0
    pub fn apply_json<P: ParamFields>(&self, base: P, json: &Value) -> InputResult<P> {
        let object = json.as_object().ok_or_else(|| {
            InputError::InvalidParamsFile("参数文件顶层必须是 JSON 对象".to_string())
        })?;

        let mut params = base;
        for (field, value) in object {
            match value {
                Value::Number(n) => self.set_number(&mut params, field, n.as_f64().unwrap_or(0.0))?,
                Value::String(s) => self.set_text(&mut params, field, s)?,
                Value::Null => self.set_number(&mut params, field, 0.0)?,
                other => {
                    return Err(InputError::InvalidValueType {
                        field: field.clone(),
                        message: format!("期望数字或文本，实际 {}", other),
                    })
                }
            }
        }
        Ok(params)
    }

    /// 读取 JSON 参数文件并覆写基础快照
    pub fn load_params_file<P: ParamFields>(&self, base: P, path: &Path) -> InputResult<P> {
        if !path.exists() {
            return Err(InputError::FileNotFound(path.display().to_string()));
        }

        let content = std::fs::read_to_string(path)?;
        let json: Value = serde_json::from_str(&content)?;
        let params = self.apply_json(base, &json)?;

        tracing::debug!(path = %path.display(), "params file loaded");
        Ok(params)
    }
}

fn unknown_field<P: ParamFields>(field: &str) -> InputError {
    InputError::UnknownField {
        field: field.to_string(),
        available: P::FIELDS.join(", "),
    }
}
