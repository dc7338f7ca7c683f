//! 主配置综合验证模块
//!
//! 组合各个子验证器，对整个主配置文档给出汇总结果

use super::{
    admission::validate_admission_config,
    auth::validate_master_auth_config,
    etcd::validate_etcd_storage_config,
    extended_args::{validate_api_server_extended_arguments, validate_controller_extended_arguments},
    field::{FieldPath, ValidationResults},
    network::{validate_ingress_ip_network_cidr, validate_network_config},
};
use crate::types::MasterConfig;
use tracing::debug;

/// 验证主配置
///
/// 依次验证etcd存储、API服务器参数、控制器参数、准入配置、网络配置和认证配置，
/// 错误和警告按检查顺序汇总
///
/// # Arguments
///
/// * `config` - 主配置
/// * `path` - 主配置在更大文档中的位置，通常为根路径
///
/// # Examples
///
/// ```rust
/// use mastercheck::types::MasterConfig;
/// use mastercheck::validation::{validate_master_config, FieldPath};
///
/// let results = validate_master_config(&MasterConfig::default(), &FieldPath::root());
/// assert!(results.warnings.is_empty());
/// ```
pub fn validate_master_config(config: &MasterConfig, path: &FieldPath) -> ValidationResults {
    debug!("Validating master config at {:?}", path.as_str());
    let mut results = ValidationResults::new();

    results.add_errors(validate_etcd_storage_config(
        &config.etcd_storage_config,
        &path.child("etcdStorageConfig"),
    ));

    let kube_path = path.child("kubernetesMasterConfig");
    results.append(validate_api_server_extended_arguments(
        &config.kubernetes_master_config.api_server_arguments,
        &kube_path.child("apiServerArguments"),
    ));
    results.add_errors(validate_controller_extended_arguments(
        &config.kubernetes_master_config.controller_arguments,
        &kube_path.child("controllerArguments"),
    ));

    results.append(validate_admission_config(
        &config.admission_config,
        &path.child("admissionConfig"),
    ));

    let network_path = path.child("networkConfig");
    results.add_errors(validate_network_config(&config.network_config, &network_path));
    results.add_errors(validate_ingress_ip_network_cidr(
        config,
        &network_path.child("ingressIPNetworkCIDR"),
    ));

    results.append(validate_master_auth_config(
        &config.auth_config,
        &path.child("authConfig"),
    ));

    debug!(
        "Master config validation finished: {} errors, {} warnings",
        results.errors.len(),
        results.warnings.len()
    );
    results
}
