//! etcd存储配置验证模块

use super::field::{ErrorList, FieldError, FieldPath};
use crate::types::EtcdStorageConfig;
use tracing::debug;

/// 当前支持的存储版本
pub const KNOWN_STORAGE_VERSIONS: &[&str] = &["v1"];

/// 验证etcd存储配置
///
/// 两个存储版本相互独立地检查：为空报告必填错误，不在支持集合中报告不支持错误。
/// 存储路径前缀不能包含 `%` 字符。
///
/// # Examples
///
/// ```rust
/// use mastercheck::types::EtcdStorageConfig;
/// use mastercheck::validation::{validate_etcd_storage_config, FieldPath};
///
/// let config = EtcdStorageConfig {
///     kubernetes_storage_version: "v1".to_string(),
///     open_shift_storage_version: "v1".to_string(),
///     ..Default::default()
/// };
/// assert!(validate_etcd_storage_config(&config, &FieldPath::root()).is_empty());
/// ```
pub fn validate_etcd_storage_config(config: &EtcdStorageConfig, path: &FieldPath) -> ErrorList {
    debug!(
        "Validating etcd storage config: kubernetes={:?}, openshift={:?}",
        config.kubernetes_storage_version, config.open_shift_storage_version
    );

    let mut errors = ErrorList::new();
    errors.extend(validate_storage_version(
        &config.kubernetes_storage_version,
        KNOWN_STORAGE_VERSIONS,
        &path.child("kubernetesStorageVersion"),
    ));
    errors.extend(validate_storage_version(
        &config.open_shift_storage_version,
        KNOWN_STORAGE_VERSIONS,
        &path.child("openShiftStorageVersion"),
    ));
    errors.extend(validate_storage_prefix(
        &config.kubernetes_storage_prefix,
        &path.child("kubernetesStoragePrefix"),
    ));
    errors.extend(validate_storage_prefix(
        &config.open_shift_storage_prefix,
        &path.child("openShiftStoragePrefix"),
    ));
    errors
}

/// 验证单个存储版本
pub fn validate_storage_version(
    version: &str,
    allowed: &[&str],
    path: &FieldPath,
) -> Option<FieldError> {
    if version.is_empty() {
        return Some(FieldError::required(path, ""));
    }
    if !allowed.contains(&version) {
        return Some(FieldError::not_supported(path, version, allowed));
    }
    None
}

fn validate_storage_prefix(prefix: &str, path: &FieldPath) -> Option<FieldError> {
    prefix.contains('%').then(|| {
        FieldError::invalid(
            path,
            prefix,
            "the '%' character may not be used in etcd path prefixes",
        )
    })
}
