//! 准入插件配置验证模块
//!
//! 插件配置只能通过文件位置或内联配置二选一给出

use super::field::{FieldError, FieldPath, ValidationResults};
use crate::types::{AdmissionConfig, AdmissionPluginConfig};
use serde_json::Value;
use std::collections::BTreeMap;
use tracing::debug;

/// 历史遗留的插件名，允许既无位置也无内联配置，只给出警告
pub const LEGACY_ADMISSION_PLUGIN_NAMES: &[&str] = &["openshift.io/OriginResourceQuota"];

pub fn is_legacy_plugin(name: &str) -> bool {
    LEGACY_ADMISSION_PLUGIN_NAMES.contains(&name)
}

/// 验证准入插件配置
///
/// # Arguments
///
/// * `plugin_config` - 插件名到插件配置的映射
/// * `path` - 映射在配置文档中的位置，每个插件报告在 `path[插件名]` 上
///
/// # Returns
///
/// 位置与内联配置同时设置或都未设置时报告错误；遗留插件名只报告一条警告
pub fn validate_admission_plugin_config(
    plugin_config: &BTreeMap<String, AdmissionPluginConfig>,
    path: &FieldPath,
) -> ValidationResults {
    let mut results = ValidationResults::new();

    for (name, config) in plugin_config {
        debug!("Validating admission plugin config: {}", name);
        let plugin_path = path.key(name);
        let legacy = is_legacy_plugin(name);

        if legacy {
            results.add_warnings([FieldError::invalid(
                &plugin_path,
                "",
                "specified admission plugin is deprecated",
            )]);
        }

        match (config.has_location(), config.has_configuration()) {
            (true, true) => results.add_errors([FieldError::invalid(
                &plugin_path,
                config.location.as_str(),
                "can't have location and config",
            )]),
            // the deprecation warning above already covers empty legacy plugins
            (false, false) if legacy => {}
            (false, false) => results.add_errors([FieldError::invalid(
                &plugin_path,
                "",
                "specify either location or config",
            )]),
            _ => {}
        }
    }

    results
}

/// 验证准入配置
///
/// 覆盖插件顺序的做法已被废弃，给出警告后继续校验各插件配置
pub fn validate_admission_config(config: &AdmissionConfig, path: &FieldPath) -> ValidationResults {
    let mut results = ValidationResults::new();

    if !config.plugin_order_override.is_empty() {
        results.add_warnings([FieldError::invalid(
            &path.child("pluginOrderOverride"),
            Value::from(config.plugin_order_override.clone()),
            "specified admission ordering is being phased out. Convert to DefaultAdmissionConfig in admissionConfig.pluginConfig.",
        )]);
    }

    results.append(validate_admission_plugin_config(
        &config.plugin_config,
        &path.child("pluginConfig"),
    ));
    results
}
