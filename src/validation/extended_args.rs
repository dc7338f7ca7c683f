//! 扩展参数验证模块
//!
//! 校验转发给内嵌API服务器和控制器管理器的命令行风格参数

use super::field::{ErrorList, FieldError, FieldPath, ValidationResults};
use super::flags::{api_server_flags, controller_flags, FlagSet};
use crate::types::ExtendedArguments;
use serde_json::Value;
use tracing::debug;

/// 已被废弃但仍可透传给API服务器的标志，以及对应的警告信息
const DEPRECATED_API_SERVER_FLAGS: &[(&str, &str)] = &[
    (
        "admission-control",
        "specified admission ordering is being phased out. Convert to DefaultAdmissionConfig in admissionConfig.pluginConfig.",
    ),
    (
        "admission-control-config-file",
        "specifying a single admission control config file is being phased out. Convert to admissionConfig.pluginConfig, one file per plugin.",
    ),
];

/// 扩展参数验证器
///
/// 对照参考标志集合校验每个参数名和参数值。没有参考标志集合时为宽松模式，
/// 不检查参数名，也不做任何解析。
pub struct ExtendedArgumentsValidator<'a> {
    flags: Option<&'a dyn FlagSet>,
}

impl<'a> ExtendedArgumentsValidator<'a> {
    /// 创建新的扩展参数验证器
    ///
    /// # Arguments
    ///
    /// * `flags` - 参考标志集合
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mastercheck::validation::{api_server_flags, ExtendedArgumentsValidator, FieldPath};
    /// use mastercheck::types::ExtendedArguments;
    ///
    /// let flags = api_server_flags();
    /// let validator = ExtendedArgumentsValidator::new(&flags);
    ///
    /// let mut args = ExtendedArguments::new();
    /// args.insert("missing-key".to_string(), vec!["value".to_string()]);
    /// assert_eq!(validator.validate(&args, &FieldPath::root()).len(), 1);
    /// ```
    pub fn new(flags: &'a dyn FlagSet) -> Self {
        Self { flags: Some(flags) }
    }

    /// 创建不做名称检查的宽松验证器
    pub fn permissive() -> Self {
        Self { flags: None }
    }

    /// 验证扩展参数
    ///
    /// 所有参数都会被检查，错误逐条累积
    ///
    /// # Arguments
    ///
    /// * `args` - 扩展参数
    /// * `path` - 参数在配置文档中的位置
    ///
    /// # Returns
    ///
    /// 未知标志报告在 `flag` 字段上，值解析失败报告在标志名字段上
    pub fn validate(&self, args: &ExtendedArguments, path: &FieldPath) -> ErrorList {
        let mut errors = ErrorList::new();

        let Some(flags) = self.flags else {
            debug!("No reference flag set for {}, skipping flag checks", path);
            return errors;
        };

        for (name, values) in args {
            debug!("Validating extended argument: {}={:?}", name, values);

            if !flags.knows(name) {
                errors.push(FieldError::invalid(
                    &path.child("flag"),
                    name.as_str(),
                    "is not a valid flag",
                ));
                continue;
            }

            if let Err(err) = flags.set(name, values) {
                errors.push(FieldError::invalid(
                    &path.child(name),
                    err.value,
                    format!("could not be set: {}", err.message),
                ));
            }
        }

        errors
    }
}

/// 验证API服务器扩展参数
///
/// 除了参数错误外，对仍在透传但已废弃的准入相关标志给出警告
pub fn validate_api_server_extended_arguments(
    args: &ExtendedArguments,
    path: &FieldPath,
) -> ValidationResults {
    let flags = api_server_flags();
    let mut results = ValidationResults::new();
    results.add_errors(ExtendedArgumentsValidator::new(&flags).validate(args, path));

    for (flag, message) in DEPRECATED_API_SERVER_FLAGS {
        if let Some(values) = args.get(*flag).filter(|values| !values.is_empty()) {
            results.add_warnings([FieldError::invalid(
                &path.key(flag),
                Value::from(values.clone()),
                *message,
            )]);
        }
    }

    results
}

/// 验证控制器管理器扩展参数
pub fn validate_controller_extended_arguments(
    args: &ExtendedArguments,
    path: &FieldPath,
) -> ErrorList {
    let flags = controller_flags();
    ExtendedArgumentsValidator::new(&flags).validate(args, path)
}
