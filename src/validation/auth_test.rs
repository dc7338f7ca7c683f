#[cfg(test)]
mod auth_tests {
    use crate::types::{MasterAuthConfig, RequestHeaderAuthenticationOptions, WebhookTokenAuthenticator};
    use crate::validation::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const TEST_METADATA_CONTENT: &str = r#"{
        "issuer": "https://127.0.0.1/",
        "authorization_endpoint": "https://127.0.0.1/",
        "token_endpoint": "https://127.0.0.1/",
        "scopes_supported": ["openid", "profile", "email", "address", "phone", "offline_access"],
        "response_types_supported": ["code", "code token"],
        "grant_types_supported": ["authorization_code", "implicit"],
        "code_challenge_methods_supported": ["plain", "S256"]}"#;

    fn temp_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    fn path_of(file: &NamedTempFile) -> String {
        file.path().to_string_lossy().into_owned()
    }

    fn validate(config: MasterAuthConfig) -> Vec<String> {
        validate_master_auth_config(&config, &FieldPath::root())
            .errors
            .iter()
            .map(ToString::to_string)
            .collect()
    }

    #[test]
    fn test_no_auth_config() {
        assert!(validate(MasterAuthConfig::default()).is_empty());
    }

    #[test]
    fn test_valid_request_header() {
        let config = MasterAuthConfig {
            request_header: Some(RequestHeaderAuthenticationOptions {
                client_ca: "ClientCA".to_string(),
                client_common_names: vec!["ClientCommonNames".into(), "2".into(), "3".into()],
                username_headers: vec!["Username".into(), "Headers".into()],
                group_headers: vec!["Group".into(), "Headers".into()],
                extra_header_prefixes: vec!["Extra".into(), "Header".into(), "Prefixes".into()],
            }),
            ..Default::default()
        };
        assert!(validate(config).is_empty());
    }

    #[test]
    fn test_single_webhook_token_authenticator() {
        let config_file = temp_file("");
        let config = MasterAuthConfig {
            webhook_token_authenticators: vec![WebhookTokenAuthenticator::new(
                path_of(&config_file),
                "2m",
            )],
            ..Default::default()
        };
        assert!(validate(config).is_empty());
    }

    #[test]
    fn test_missing_config_file_in_second_authenticator() {
        let config_file = temp_file("");
        let config = MasterAuthConfig {
            webhook_token_authenticators: vec![
                WebhookTokenAuthenticator::new(path_of(&config_file), "2m"),
                WebhookTokenAuthenticator::new("Unexisting", "2m"),
            ],
            ..Default::default()
        };

        let results = validate_master_auth_config(&config, &FieldPath::root());
        assert_eq!(results.errors.len(), 1);
        let err = &results.errors[0];
        assert_eq!(err.kind, ErrorKind::Invalid);
        assert_eq!(err.field.as_str(), "webhookTokenAuthenticators.ConfigFile");
        assert_eq!(err.bad_value_str(), Some("Unexisting"));
        assert!(err.detail.starts_with("could not read file: Unexisting: "));
    }

    #[test]
    fn test_invalid_and_empty_cache_ttl() {
        let config_file = temp_file("");
        let config = MasterAuthConfig {
            webhook_token_authenticators: vec![
                WebhookTokenAuthenticator::new(path_of(&config_file), "-2m"),
                WebhookTokenAuthenticator::new(path_of(&config_file), ""),
            ],
            ..Default::default()
        };

        assert_eq!(
            validate(config),
            vec![
                r#"webhookTokenAuthenticators.cacheTTL: Invalid value: "-2m": cannot be less than zero"#,
                "webhookTokenAuthenticators.cacheTTL: Required value",
            ]
        );
    }

    #[test]
    fn test_unparsable_cache_ttl_and_empty_config_file() {
        let config = MasterAuthConfig {
            webhook_token_authenticators: vec![WebhookTokenAuthenticator::new("", "soon")],
            ..Default::default()
        };

        assert_eq!(
            validate(config),
            vec![
                "webhookTokenAuthenticators.ConfigFile: Required value",
                r#"webhookTokenAuthenticators.cacheTTL: Invalid value: "soon": invalid duration "soon""#,
            ]
        );
    }

    #[test]
    fn test_valid_oauth_metadata_file() {
        let metadata_file = temp_file(TEST_METADATA_CONTENT);
        let config = MasterAuthConfig {
            oauth_metadata_file: path_of(&metadata_file),
            ..Default::default()
        };
        assert!(validate(config).is_empty());

        let metadata = load_oauth_metadata_file(&path_of(&metadata_file)).unwrap();
        assert_eq!(metadata.issuer, "https://127.0.0.1/");
        assert_eq!(metadata.code_challenge_methods_supported, vec!["plain", "S256"]);
    }

    #[test]
    fn test_missing_oauth_metadata_file() {
        let config = MasterAuthConfig {
            oauth_metadata_file: "NoFile".to_string(),
            ..Default::default()
        };

        let errors = validate(config);
        assert_eq!(errors.len(), 1);
        assert!(errors[0].starts_with(
            r#"oauthMetadataFile: Invalid value: "NoFile": Metadata validation failed: unable to read External OAuth Metadata file: NoFile: "#
        ));
    }

    #[test]
    fn test_bad_oauth_metadata_file() {
        let bad_file = temp_file("bad file");
        let config = MasterAuthConfig {
            oauth_metadata_file: path_of(&bad_file),
            ..Default::default()
        };

        let results = validate_master_auth_config(&config, &FieldPath::root());
        assert_eq!(results.errors.len(), 1);
        assert!(results.errors[0]
            .detail
            .starts_with("Metadata validation failed: unable to decode External OAuth Metadata file: "));
    }

    #[test]
    fn test_incomplete_oauth_metadata_file() {
        let partial = temp_file(r#"{"issuer": "https://127.0.0.1/"}"#);
        assert!(matches!(
            load_oauth_metadata_file(&path_of(&partial)),
            Err(MetadataError::Decode(_))
        ));

        let empty_issuer = temp_file(
            r#"{
            "issuer": "",
            "authorization_endpoint": "https://127.0.0.1/",
            "token_endpoint": "https://127.0.0.1/",
            "scopes_supported": ["openid"],
            "response_types_supported": ["code"],
            "grant_types_supported": ["authorization_code"]}"#,
        );
        assert!(matches!(
            load_oauth_metadata_file(&path_of(&empty_issuer)),
            Err(MetadataError::MissingField("issuer"))
        ));
    }

    #[test]
    fn test_errors_accumulate_across_sub_checks() {
        let config = MasterAuthConfig {
            oauth_metadata_file: "NoFile".to_string(),
            webhook_token_authenticators: vec![WebhookTokenAuthenticator::new("Unexisting", "")],
            ..Default::default()
        };

        let fields: Vec<String> = validate_master_auth_config(&config, &FieldPath::new("authConfig"))
            .errors
            .iter()
            .map(|e| e.field.to_string())
            .collect();
        assert_eq!(
            fields,
            vec![
                "authConfig.oauthMetadataFile",
                "authConfig.webhookTokenAuthenticators.ConfigFile",
                "authConfig.webhookTokenAuthenticators.cacheTTL",
            ]
        );
    }
}
