//! 字段错误模块
//!
//! 定义验证结果中使用的字段路径、字段错误以及错误/警告集合

use crate::error::{CheckError, Result};
use serde::Serialize;
use serde_json::Value;
use std::fmt;

/// 字段路径
///
/// 定位配置文档中某个值的位置，渲染为 `a.b[key][0]` 形式。
/// 路径是不可变值，每次扩展都返回新的路径。
///
/// # Examples
///
/// ```rust
/// use mastercheck::validation::FieldPath;
///
/// let path = FieldPath::new("admissionConfig").child("pluginConfig").key("foo");
/// assert_eq!(path.to_string(), "admissionConfig.pluginConfig[foo]");
/// assert_eq!(FieldPath::root().key("foo").to_string(), "[foo]");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct FieldPath {
    rendered: String,
}

impl FieldPath {
    /// 空路径，用于校验整个文档
    pub fn root() -> Self {
        Self::default()
    }

    /// 以单个字段名开头的路径
    pub fn new(name: &str) -> Self {
        Self::root().child(name)
    }

    pub fn child(&self, name: &str) -> Self {
        if self.rendered.is_empty() {
            return Self {
                rendered: name.to_string(),
            };
        }
        Self {
            rendered: format!("{}.{}", self.rendered, name),
        }
    }

    pub fn key(&self, key: &str) -> Self {
        Self {
            rendered: format!("{}[{}]", self.rendered, key),
        }
    }

    pub fn index(&self, index: usize) -> Self {
        Self {
            rendered: format!("{}[{}]", self.rendered, index),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.rendered
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.rendered)
    }
}

/// 字段错误类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ErrorKind {
    /// 值不在允许的枚举集合中
    NotSupported,
    /// 必填值缺失
    Required,
    /// 值存在但未通过校验
    Invalid,
    /// 互斥或重复的赋值
    Duplicate,
}

impl ErrorKind {
    fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::NotSupported => "Unsupported value",
            ErrorKind::Required => "Required value",
            ErrorKind::Invalid => "Invalid value",
            ErrorKind::Duplicate => "Duplicate value",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 字段错误
///
/// 包含字段路径、出错的值以及可读的详细说明。错误和警告使用同一类型。
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldError {
    pub kind: ErrorKind,
    pub field: FieldPath,
    pub bad_value: Value,
    pub detail: String,
}

impl FieldError {
    /// 值不在允许集合中
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mastercheck::validation::{FieldError, FieldPath};
    ///
    /// let err = FieldError::not_supported(&FieldPath::new("storageVersion"), "bogus", &["v1"]);
    /// assert_eq!(
    ///     err.to_string(),
    ///     r#"storageVersion: Unsupported value: "bogus": supported values: "v1""#
    /// );
    /// ```
    pub fn not_supported(path: &FieldPath, value: impl Into<Value>, allowed: &[&str]) -> Self {
        let quoted: Vec<String> = allowed.iter().map(|v| format!("{:?}", v)).collect();
        Self {
            kind: ErrorKind::NotSupported,
            field: path.clone(),
            bad_value: value.into(),
            detail: format!("supported values: {}", quoted.join(", ")),
        }
    }

    pub fn required(path: &FieldPath, detail: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::Required,
            field: path.clone(),
            bad_value: Value::String(String::new()),
            detail: detail.into(),
        }
    }

    pub fn invalid(path: &FieldPath, value: impl Into<Value>, detail: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::Invalid,
            field: path.clone(),
            bad_value: value.into(),
            detail: detail.into(),
        }
    }

    pub fn duplicate(path: &FieldPath, value: impl Into<Value>) -> Self {
        Self {
            kind: ErrorKind::Duplicate,
            field: path.clone(),
            bad_value: value.into(),
            detail: String::new(),
        }
    }

    /// 出错值为字符串时返回该字符串
    pub fn bad_value_str(&self) -> Option<&str> {
        self.bad_value.as_str()
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.kind)?;
        if self.kind != ErrorKind::Required {
            write!(f, ": {}", self.bad_value)?;
        }
        if !self.detail.is_empty() {
            write!(f, ": {}", self.detail)?;
        }
        Ok(())
    }
}

impl std::error::Error for FieldError {}

/// 字段错误列表
pub type ErrorList = Vec<FieldError>;

/// 验证结果
///
/// 错误会阻止配置被使用，警告只做提示
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ValidationResults {
    pub errors: ErrorList,
    pub warnings: ErrorList,
}

impl ValidationResults {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_errors(&mut self, errors: impl IntoIterator<Item = FieldError>) {
        self.errors.extend(errors);
    }

    pub fn add_warnings(&mut self, warnings: impl IntoIterator<Item = FieldError>) {
        self.warnings.extend(warnings);
    }

    /// 合并另一个验证结果，保持各自的顺序
    pub fn append(&mut self, other: ValidationResults) {
        self.errors.extend(other.errors);
        self.warnings.extend(other.warnings);
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty() && self.warnings.is_empty()
    }

    /// 存在错误时返回验证失败，否则返回剩余的警告
    pub fn into_result(self) -> Result<ErrorList> {
        if self.errors.is_empty() {
            return Ok(self.warnings);
        }

        let messages: Vec<String> = self.errors.iter().map(ToString::to_string).collect();
        Err(CheckError::validation(messages.join("; ")))
    }
}

impl From<ErrorList> for ValidationResults {
    fn from(errors: ErrorList) -> Self {
        Self {
            errors,
            warnings: ErrorList::new(),
        }
    }
}
