//! 认证配置验证模块
//!
//! 校验请求头认证、Webhook令牌认证器以及外部OAuth元数据文件

use super::duration::parse_duration;
use super::field::{FieldError, FieldPath, ValidationResults};
use crate::types::{MasterAuthConfig, OAuthMetadata, WebhookTokenAuthenticator};
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

/// OAuth元数据文件加载错误
#[derive(Error, Debug)]
pub enum MetadataError {
    #[error("unable to read External OAuth Metadata file: {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("unable to decode External OAuth Metadata file: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("External OAuth Metadata file is missing {0}")]
    MissingField(&'static str),
}

/// 读取并解码外部OAuth元数据文件
///
/// # Arguments
///
/// * `path` - 元数据文件路径
///
/// # Returns
///
/// 成功时返回解析后的发现文档
pub fn load_oauth_metadata_file(path: &str) -> Result<OAuthMetadata, MetadataError> {
    let content = fs::read(path).map_err(|source| MetadataError::Read {
        path: path.to_string(),
        source,
    })?;
    let metadata: OAuthMetadata = serde_json::from_slice(&content)?;

    let required = [
        ("issuer", &metadata.issuer),
        ("authorization_endpoint", &metadata.authorization_endpoint),
        ("token_endpoint", &metadata.token_endpoint),
    ];
    for (name, value) in required {
        if value.is_empty() {
            return Err(MetadataError::MissingField(name));
        }
    }

    Ok(metadata)
}

/// 检查文件是否存在且可访问
pub fn validate_file(file: &str, path: &FieldPath) -> Option<FieldError> {
    fs::metadata(Path::new(file)).err().map(|err| {
        FieldError::invalid(path, file, format!("could not read file: {}: {}", file, err))
    })
}

/// 验证单个Webhook令牌认证器
fn validate_webhook_token_authenticator(
    authenticator: &WebhookTokenAuthenticator,
    path: &FieldPath,
) -> Vec<FieldError> {
    let mut errors = Vec::new();

    let config_file = path.child("ConfigFile");
    if authenticator.config_file.is_empty() {
        errors.push(FieldError::required(&config_file, ""));
    } else {
        errors.extend(validate_file(&authenticator.config_file, &config_file));
    }

    let cache_ttl = path.child("cacheTTL");
    if authenticator.cache_ttl.is_empty() {
        errors.push(FieldError::required(&cache_ttl, ""));
    } else {
        match parse_duration(&authenticator.cache_ttl) {
            Err(err) => errors.push(FieldError::invalid(
                &cache_ttl,
                authenticator.cache_ttl.as_str(),
                err.to_string(),
            )),
            Ok(ttl) if ttl.is_negative() => errors.push(FieldError::invalid(
                &cache_ttl,
                authenticator.cache_ttl.as_str(),
                "cannot be less than zero",
            )),
            Ok(_) => {}
        }
    }

    errors
}

/// 验证主节点认证配置
///
/// 各子项独立检查并累积错误：先检查OAuth元数据文件，再按顺序检查每个Webhook令牌认证器。
/// 请求头认证只要求结构存在，不做更深入的检查。
///
/// # Examples
///
/// ```rust
/// use mastercheck::types::{MasterAuthConfig, WebhookTokenAuthenticator};
/// use mastercheck::validation::{validate_master_auth_config, FieldPath};
///
/// let config = MasterAuthConfig {
///     webhook_token_authenticators: vec![WebhookTokenAuthenticator::new("Unexisting", "2m")],
///     ..Default::default()
/// };
/// let results = validate_master_auth_config(&config, &FieldPath::root());
/// assert_eq!(results.errors.len(), 1);
/// assert!(results.errors[0].detail.contains("could not read file"));
/// ```
pub fn validate_master_auth_config(config: &MasterAuthConfig, path: &FieldPath) -> ValidationResults {
    let mut results = ValidationResults::new();

    if !config.oauth_metadata_file.is_empty() {
        debug!("Validating OAuth metadata file: {}", config.oauth_metadata_file);
        if let Err(err) = load_oauth_metadata_file(&config.oauth_metadata_file) {
            results.add_errors([FieldError::invalid(
                &path.child("oauthMetadataFile"),
                config.oauth_metadata_file.as_str(),
                format!("Metadata validation failed: {}", err),
            )]);
        }
    }

    let authenticators_path = path.child("webhookTokenAuthenticators");
    for (i, authenticator) in config.webhook_token_authenticators.iter().enumerate() {
        debug!("Validating webhook token authenticator #{}", i);
        results.add_errors(validate_webhook_token_authenticator(
            authenticator,
            &authenticators_path,
        ));
    }

    if config.request_header.is_some() {
        debug!("Request header authentication configured");
    }

    results
}
