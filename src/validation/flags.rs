//! 参数标志模块
//!
//! 定义扩展参数校验所依赖的标志集合抽象，以及内嵌API服务器和控制器管理器的内置标志集合

use super::duration::parse_duration;
use std::collections::BTreeMap;
use std::net::IpAddr;
use thiserror::Error;

/// 标志值设置失败
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct FlagValueError {
    /// 导致失败的原始字符串
    pub value: String,
    /// 底层解析错误信息
    pub message: String,
}

impl FlagValueError {
    pub fn new(value: impl Into<String>, message: impl ToString) -> Self {
        Self {
            value: value.into(),
            message: message.to_string(),
        }
    }
}

/// 标志集合
///
/// 扩展参数校验器通过该接口判断标志名是否合法，并尝试把字符串值设置到标志上。
/// 校验器不依赖具体的命令行解析库。
pub trait FlagSet {
    /// 是否识别该标志名
    fn knows(&self, name: &str) -> bool;

    /// 按顺序设置标志值，返回第一个无法解析的值
    fn set(&self, name: &str, values: &[String]) -> Result<(), FlagValueError>;
}

/// 标志值类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlagKind {
    Bool,
    Int,
    Uint,
    Float,
    String,
    StringSlice,
    Duration,
    Ip,
}

impl FlagKind {
    /// 按标志类型解析单个值
    pub fn parse(&self, value: &str) -> Result<(), FlagValueError> {
        match self {
            FlagKind::Bool => parse_bool(value),
            FlagKind::Int => value
                .parse::<i64>()
                .map(drop)
                .map_err(|e| FlagValueError::new(value, e)),
            FlagKind::Uint => value
                .parse::<u64>()
                .map(drop)
                .map_err(|e| FlagValueError::new(value, e)),
            FlagKind::Float => value
                .parse::<f64>()
                .map(drop)
                .map_err(|e| FlagValueError::new(value, e)),
            FlagKind::Duration => parse_duration(value)
                .map(drop)
                .map_err(|e| FlagValueError::new(value, e)),
            FlagKind::Ip => value
                .parse::<IpAddr>()
                .map(drop)
                .map_err(|e| FlagValueError::new(value, e)),
            FlagKind::String | FlagKind::StringSlice => Ok(()),
        }
    }
}

fn parse_bool(value: &str) -> Result<(), FlagValueError> {
    match value {
        "1" | "t" | "T" | "true" | "TRUE" | "True" | "0" | "f" | "F" | "false" | "FALSE"
        | "False" => Ok(()),
        _ => Err(FlagValueError::new(
            value,
            format!("invalid boolean value {:?}", value),
        )),
    }
}

/// 带类型的标志集合
///
/// # Examples
///
/// ```rust
/// use mastercheck::validation::{FlagKind, FlagSet, TypedFlagSet};
///
/// let flags = TypedFlagSet::new("demo").flag("port", FlagKind::Int);
/// assert!(flags.knows("port"));
/// assert!(flags.set("port", &["8443".to_string()]).is_ok());
/// assert!(flags.set("port", &["http".to_string()]).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct TypedFlagSet {
    name: &'static str,
    flags: BTreeMap<&'static str, FlagKind>,
}

impl TypedFlagSet {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            flags: BTreeMap::new(),
        }
    }

    /// 注册一个标志
    pub fn flag(mut self, name: &'static str, kind: FlagKind) -> Self {
        self.flags.insert(name, kind);
        self
    }

    pub fn name(&self) -> &str {
        self.name
    }

    pub fn kind(&self, name: &str) -> Option<FlagKind> {
        self.flags.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.flags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }
}

impl FlagSet for TypedFlagSet {
    fn knows(&self, name: &str) -> bool {
        self.flags.contains_key(name)
    }

    fn set(&self, name: &str, values: &[String]) -> Result<(), FlagValueError> {
        let kind = self
            .kind(name)
            .ok_or_else(|| FlagValueError::new(name, format!("unknown flag {:?}", name)))?;
        for value in values {
            kind.parse(value)?;
        }
        Ok(())
    }
}

/// 内嵌API服务器接受的标志
pub fn api_server_flags() -> TypedFlagSet {
    TypedFlagSet::new("kube-apiserver")
        .flag("admission-control", FlagKind::StringSlice)
        .flag("admission-control-config-file", FlagKind::String)
        .flag("audit-log-maxage", FlagKind::Int)
        .flag("audit-log-maxbackup", FlagKind::Int)
        .flag("audit-log-maxsize", FlagKind::Int)
        .flag("audit-log-path", FlagKind::String)
        .flag("bind-address", FlagKind::Ip)
        .flag("cloud-config", FlagKind::String)
        .flag("cloud-provider", FlagKind::String)
        .flag("default-watch-cache-size", FlagKind::Int)
        .flag("delete-collection-workers", FlagKind::Int)
        .flag("enable-swagger-ui", FlagKind::Bool)
        .flag("event-ttl", FlagKind::Duration)
        .flag("feature-gates", FlagKind::String)
        .flag("max-mutating-requests-inflight", FlagKind::Int)
        .flag("max-requests-inflight", FlagKind::Int)
        .flag("min-request-timeout", FlagKind::Int)
        .flag("port", FlagKind::Int)
        .flag("request-timeout", FlagKind::Duration)
        .flag("runtime-config", FlagKind::StringSlice)
        .flag("secure-port", FlagKind::Int)
        .flag("storage-media-type", FlagKind::String)
        .flag("target-ram-mb", FlagKind::Int)
        .flag("watch-cache", FlagKind::Bool)
        .flag("watch-cache-sizes", FlagKind::StringSlice)
}

/// 控制器管理器接受的标志
pub fn controller_flags() -> TypedFlagSet {
    TypedFlagSet::new("kube-controller-manager")
        .flag("cloud-config", FlagKind::String)
        .flag("cloud-provider", FlagKind::String)
        .flag("concurrent-deployment-syncs", FlagKind::Int)
        .flag("concurrent-endpoint-syncs", FlagKind::Int)
        .flag("concurrent-namespace-syncs", FlagKind::Int)
        .flag("concurrent-replicaset-syncs", FlagKind::Int)
        .flag("concurrent-resource-quota-syncs", FlagKind::Int)
        .flag("controllers", FlagKind::StringSlice)
        .flag("enable-hostpath-provisioner", FlagKind::Bool)
        .flag("feature-gates", FlagKind::String)
        .flag("horizontal-pod-autoscaler-sync-period", FlagKind::Duration)
        .flag("kube-api-burst", FlagKind::Int)
        .flag("kube-api-qps", FlagKind::Float)
        .flag("leader-elect", FlagKind::Bool)
        .flag("leader-elect-lease-duration", FlagKind::Duration)
        .flag("node-monitor-grace-period", FlagKind::Duration)
        .flag("pod-eviction-timeout", FlagKind::Duration)
        .flag("port", FlagKind::Int)
        .flag("resource-quota-sync-period", FlagKind::Duration)
        .flag("terminated-pod-gc-threshold", FlagKind::Int)
}
