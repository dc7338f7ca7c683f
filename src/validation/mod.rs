//! 主配置验证模块
//!
//! 提供主节点配置的校验功能，包括扩展参数、etcd存储版本、准入插件、Ingress网段和认证配置。
//! 每个检查都是纯函数，返回带字段路径的错误和警告。

mod admission;
mod auth;
mod duration;
mod etcd;
mod extended_args;
mod field;
mod flags;
mod master;
mod network;

pub use admission::{
    is_legacy_plugin, validate_admission_config, validate_admission_plugin_config,
    LEGACY_ADMISSION_PLUGIN_NAMES,
};
pub use auth::{load_oauth_metadata_file, validate_file, validate_master_auth_config, MetadataError};
pub use duration::{parse_duration, DurationParseError, SignedDuration};
pub use etcd::{validate_etcd_storage_config, validate_storage_version, KNOWN_STORAGE_VERSIONS};
pub use extended_args::{
    validate_api_server_extended_arguments, validate_controller_extended_arguments,
    ExtendedArgumentsValidator,
};
pub use field::{ErrorKind, ErrorList, FieldError, FieldPath, ValidationResults};
pub use flags::{api_server_flags, controller_flags, FlagKind, FlagSet, FlagValueError, TypedFlagSet};
pub use master::validate_master_config;
pub use network::{
    networks_overlap, parse_cidr, validate_ingress_cidr, validate_ingress_ip_network_cidr,
    validate_network_config,
};

#[cfg(test)]
#[path = "field_test.rs"]
mod field_tests;

#[cfg(test)]
#[path = "duration_test.rs"]
mod duration_tests;

#[cfg(test)]
#[path = "extended_args_test.rs"]
mod extended_args_tests;

#[cfg(test)]
#[path = "etcd_test.rs"]
mod etcd_tests;

#[cfg(test)]
#[path = "admission_test.rs"]
mod admission_tests;

#[cfg(test)]
#[path = "network_test.rs"]
mod network_tests;

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_tests;

#[cfg(test)]
#[path = "master_test.rs"]
mod master_tests;
