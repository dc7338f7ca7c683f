//! 网络配置验证模块
//!
//! 校验服务网段、集群网段以及Ingress IP网段之间的关系

use super::field::{ErrorList, FieldError, FieldPath};
use crate::types::{MasterConfig, MasterNetworkConfig};
use ipnetwork::IpNetwork;
use std::collections::HashSet;
use tracing::debug;

/// 解析CIDR，必须带前缀长度
pub fn parse_cidr(cidr: &str) -> Option<IpNetwork> {
    if !cidr.contains('/') {
        return None;
    }
    cidr.parse().ok()
}

/// 两个网段是否重叠
pub fn networks_overlap(a: &IpNetwork, b: &IpNetwork) -> bool {
    a.contains(b.network()) || b.contains(a.network())
}

/// 完全未指定的单地址网段（`0.0.0.0/32`、`::/128`），表示由云厂商分配
fn is_unspecified(network: &IpNetwork) -> bool {
    network.network().is_unspecified() && network.prefix() == max_prefix(network)
}

/// 验证Ingress IP网段
///
/// # Arguments
///
/// * `ingress_cidr` - Ingress IP网段，为空表示未配置
/// * `cloud_provider` - 控制器使用的云厂商名称，为空表示没有云厂商
/// * `service_cidr` - 服务网段
/// * `cluster_cidrs` - 集群网段列表
/// * `path` - Ingress网段字段的位置
///
/// # Returns
///
/// 每条违规单独计数：与服务网段、每个集群网段的重叠各算一个错误
///
/// # Examples
///
/// ```rust
/// use mastercheck::validation::{validate_ingress_cidr, FieldPath};
///
/// let path = FieldPath::new("ingressIPNetworkCIDR");
/// let errors = validate_ingress_cidr("172.16.0.0/16", "", "172.16.0.0/16", &["172.16.0.0/16"], &path);
/// assert_eq!(errors.len(), 2);
/// ```
pub fn validate_ingress_cidr(
    ingress_cidr: &str,
    cloud_provider: &str,
    service_cidr: &str,
    cluster_cidrs: &[&str],
    path: &FieldPath,
) -> ErrorList {
    let mut errors = ErrorList::new();
    if ingress_cidr.is_empty() {
        return errors;
    }

    debug!(
        "Validating ingress CIDR {} (cloud provider: {:?})",
        ingress_cidr, cloud_provider
    );

    let Some(ingress) = parse_cidr(ingress_cidr) else {
        errors.push(FieldError::invalid(
            path,
            ingress_cidr,
            "must be a valid CIDR notation IP range (e.g. 172.46.0.0/16)",
        ));
        return errors;
    };

    if is_unspecified(&ingress) {
        return errors;
    }

    if !cloud_provider.is_empty() {
        errors.push(FieldError::invalid(
            path,
            ingress_cidr,
            "should not be provided when a cloud-provider is enabled",
        ));
        return errors;
    }

    if parse_cidr(service_cidr).is_some_and(|service| networks_overlap(&ingress, &service)) {
        errors.push(FieldError::invalid(
            path,
            ingress_cidr,
            "conflicts with service network CIDR",
        ));
    }

    for cluster_cidr in cluster_cidrs {
        if parse_cidr(cluster_cidr).is_some_and(|cluster| networks_overlap(&ingress, &cluster)) {
            errors.push(FieldError::invalid(
                path,
                ingress_cidr,
                format!("conflicts with cluster network CIDR {}", cluster_cidr),
            ));
        }
    }

    errors
}

/// 验证主配置中的Ingress IP网段，云厂商取自控制器参数 `cloud-provider`
pub fn validate_ingress_ip_network_cidr(config: &MasterConfig, path: &FieldPath) -> ErrorList {
    let network = &config.network_config;
    validate_ingress_cidr(
        &network.ingress_ip_network_cidr,
        config.cloud_provider(),
        &network.service_network_cidr,
        &network.cluster_cidrs(),
        path,
    )
}

/// 验证服务网段和集群网段本身的合法性
pub fn validate_network_config(config: &MasterNetworkConfig, path: &FieldPath) -> ErrorList {
    let mut errors = ErrorList::new();

    if !config.service_network_cidr.is_empty() && parse_cidr(&config.service_network_cidr).is_none()
    {
        errors.push(FieldError::invalid(
            &path.child("serviceNetworkCIDR"),
            config.service_network_cidr.as_str(),
            "must be a valid CIDR notation IP range (e.g. 172.30.0.0/16)",
        ));
    }

    let mut seen = HashSet::new();
    for (i, entry) in config.cluster_networks.iter().enumerate() {
        let entry_path = path.child("clusterNetworks").index(i);
        let cidr_path = entry_path.child("cidr");

        if entry.cidr.is_empty() {
            errors.push(FieldError::required(&cidr_path, ""));
            continue;
        }

        let Some(network) = parse_cidr(&entry.cidr) else {
            errors.push(FieldError::invalid(
                &cidr_path,
                entry.cidr.as_str(),
                "must be a valid CIDR notation IP range (e.g. 10.128.0.0/14)",
            ));
            continue;
        };

        if !seen.insert(network.network()) {
            errors.push(FieldError::duplicate(&cidr_path, entry.cidr.as_str()));
        }

        let host_bits = u32::from(max_prefix(&network) - network.prefix());
        let length_path = entry_path.child("hostSubnetLength");
        if entry.host_subnet_length == 0 {
            errors.push(FieldError::invalid(
                &length_path,
                entry.host_subnet_length,
                "must be greater than zero",
            ));
        } else if entry.host_subnet_length >= host_bits {
            errors.push(FieldError::invalid(
                &length_path,
                entry.host_subnet_length,
                format!(
                    "must be smaller than the {} host bits of the cluster network",
                    host_bits
                ),
            ));
        }
    }

    errors
}

fn max_prefix(network: &IpNetwork) -> u8 {
    match network {
        IpNetwork::V4(_) => 32,
        IpNetwork::V6(_) => 128,
    }
}
