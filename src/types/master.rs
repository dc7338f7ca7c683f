use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::{ExtendedArguments, MasterAuthConfig};

/// Master configuration document
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct MasterConfig {
    pub etcd_storage_config: EtcdStorageConfig,
    pub kubernetes_master_config: KubernetesMasterConfig,
    pub admission_config: AdmissionConfig,
    pub network_config: MasterNetworkConfig,
    pub auth_config: MasterAuthConfig,
}

impl MasterConfig {
    /// Cloud provider configured for the controllers, empty when none is set
    pub fn cloud_provider(&self) -> &str {
        self.kubernetes_master_config
            .controller_arguments
            .get("cloud-provider")
            .and_then(|values| values.first())
            .map(String::as_str)
            .unwrap_or_default()
    }
}

/// Arguments forwarded to the embedded API server and controller manager
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct KubernetesMasterConfig {
    pub api_server_arguments: ExtendedArguments,
    pub controller_arguments: ExtendedArguments,
}

/// Storage versions and key prefixes used in etcd
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct EtcdStorageConfig {
    pub kubernetes_storage_version: String,
    pub kubernetes_storage_prefix: String,
    pub open_shift_storage_version: String,
    pub open_shift_storage_prefix: String,
}

/// Admission chain configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct AdmissionConfig {
    pub plugin_config: BTreeMap<String, AdmissionPluginConfig>,
    pub plugin_order_override: Vec<String>,
}

/// Configuration of one admission plugin, either by file location or inline
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct AdmissionPluginConfig {
    pub location: String,
    pub configuration: Option<serde_json::Value>,
}

impl AdmissionPluginConfig {
    pub fn with_location(location: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            configuration: None,
        }
    }

    pub fn with_configuration(configuration: serde_json::Value) -> Self {
        Self {
            location: String::new(),
            configuration: Some(configuration),
        }
    }

    pub fn has_location(&self) -> bool {
        !self.location.is_empty()
    }

    pub fn has_configuration(&self) -> bool {
        self.configuration.is_some()
    }
}

/// Network ranges handed out by the master
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct MasterNetworkConfig {
    #[serde(rename = "ingressIPNetworkCIDR")]
    pub ingress_ip_network_cidr: String,
    #[serde(rename = "serviceNetworkCIDR")]
    pub service_network_cidr: String,
    pub cluster_networks: Vec<ClusterNetworkEntry>,
}

impl MasterNetworkConfig {
    pub fn cluster_cidrs(&self) -> Vec<&str> {
        self.cluster_networks
            .iter()
            .map(|entry| entry.cidr.as_str())
            .collect()
    }
}

/// One cluster network range and the subnet size carved out per host
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct ClusterNetworkEntry {
    pub cidr: String,
    pub host_subnet_length: u32,
}

impl ClusterNetworkEntry {
    pub fn new(cidr: impl Into<String>) -> Self {
        Self {
            cidr: cidr.into(),
            host_subnet_length: 0,
        }
    }
}
