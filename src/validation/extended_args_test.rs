#[cfg(test)]
mod extended_args_tests {
    use crate::types::ExtendedArguments;
    use crate::validation::*;

    fn args(pairs: &[(&str, Vec<&str>)]) -> ExtendedArguments {
        pairs
            .iter()
            .map(|(key, values)| {
                (
                    key.to_string(),
                    values.iter().map(|v| v.to_string()).collect(),
                )
            })
            .collect()
    }

    fn find<'a>(errors: &'a [FieldError], field: &str) -> &'a FieldError {
        errors
            .iter()
            .find(|e| e.field.as_str() == field)
            .unwrap_or_else(|| panic!("missing error for {}: {:?}", field, errors))
    }

    #[test]
    fn test_failing_api_server_args() {
        let args = args(&[("port", vec!["invalid-value"]), ("missing-key", vec!["value"])]);

        let results = validate_api_server_extended_arguments(&args, &FieldPath::root());
        let errors = results.errors;
        assert_eq!(errors.len(), 2, "expected 2 errors, not {:?}", errors);

        let port_err = find(&errors, "port");
        assert_eq!(port_err.kind, ErrorKind::Invalid);
        assert_eq!(port_err.bad_value_str(), Some("invalid-value"));
        assert_eq!(
            port_err.detail,
            "could not be set: invalid digit found in string"
        );

        let missing_err = find(&errors, "flag");
        assert_eq!(missing_err.bad_value_str(), Some("missing-key"));
        assert_eq!(missing_err.detail, "is not a valid flag");
    }

    #[test]
    fn test_failing_controller_args() {
        let args = args(&[("port", vec!["invalid-value"]), ("missing-key", vec!["value"])]);

        let errors = validate_controller_extended_arguments(&args, &FieldPath::root());
        assert_eq!(errors.len(), 2, "expected 2 errors, not {:?}", errors);

        let port_err = find(&errors, "port");
        assert_eq!(port_err.bad_value_str(), Some("invalid-value"));
        assert!(port_err.detail.starts_with("could not be set: "));

        let missing_err = find(&errors, "flag");
        assert_eq!(missing_err.bad_value_str(), Some("missing-key"));
    }

    #[test]
    fn test_only_unknown_keys() {
        let flags = api_server_flags();
        let validator = ExtendedArgumentsValidator::new(&flags);
        let args = args(&[("foo", vec!["1"]), ("bar", vec!["2"]), ("baz", vec![])]);

        let errors = validator.validate(&args, &FieldPath::root());
        assert_eq!(errors.len(), 3);
        for err in &errors {
            assert_eq!(err.field.as_str(), "flag");
            assert_eq!(err.detail, "is not a valid flag");
        }
    }

    #[test]
    fn test_permissive_without_flag_set() {
        let validator = ExtendedArgumentsValidator::permissive();
        let args = args(&[("anything", vec!["goes"]), ("port", vec!["invalid-value"])]);

        assert!(validator.validate(&args, &FieldPath::root()).is_empty());
    }

    #[test]
    fn test_paths_are_qualified() {
        let path = FieldPath::new("kubernetesMasterConfig").child("controllerArguments");
        let args = args(&[("leader-elect", vec!["maybe"]), ("nope", vec!["x"])]);

        let errors = validate_controller_extended_arguments(&args, &path);
        assert_eq!(errors.len(), 2);
        let bool_err = find(&errors, "kubernetesMasterConfig.controllerArguments.leader-elect");
        assert_eq!(bool_err.bad_value_str(), Some("maybe"));
        find(&errors, "kubernetesMasterConfig.controllerArguments.flag");
    }

    #[test]
    fn test_offending_value_is_reported() {
        let args = args(&[("pod-eviction-timeout", vec!["5m", "soon"])]);

        let errors = validate_controller_extended_arguments(&args, &FieldPath::root());
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].bad_value_str(), Some("soon"));
        assert_eq!(
            errors[0].detail,
            r#"could not be set: invalid duration "soon""#
        );
    }

    #[test]
    fn test_valid_args() {
        let args = args(&[
            ("port", vec!["8080"]),
            ("bind-address", vec!["0.0.0.0"]),
            ("enable-swagger-ui", vec!["true"]),
            ("request-timeout", vec!["1m0s"]),
            ("runtime-config", vec!["apis/batch/v2alpha1=true", "apis/settings/v1alpha1=true"]),
        ]);

        let results = validate_api_server_extended_arguments(&args, &FieldPath::root());
        assert!(results.is_empty(), "unexpected findings: {:?}", results);
    }

    #[test]
    fn test_deprecated_admission_flags_warn() {
        let path = FieldPath::new("kubernetesMasterConfig").child("apiServerArguments");
        let args = args(&[
            ("admission-control", vec!["foo"]),
            ("admission-control-config-file", vec!["bar"]),
        ]);

        let results = validate_api_server_extended_arguments(&args, &path);
        assert!(results.errors.is_empty());

        let fields: Vec<&str> = results.warnings.iter().map(|w| w.field.as_str()).collect();
        assert_eq!(
            fields,
            vec![
                "kubernetesMasterConfig.apiServerArguments[admission-control]",
                "kubernetesMasterConfig.apiServerArguments[admission-control-config-file]",
            ]
        );
    }

    #[test]
    fn test_flag_kinds() {
        assert!(FlagKind::Bool.parse("T").is_ok());
        assert!(FlagKind::Bool.parse("yes").is_err());
        assert!(FlagKind::Uint.parse("-1").is_err());
        assert!(FlagKind::Float.parse("0.5").is_ok());
        assert!(FlagKind::Ip.parse("::1").is_ok());
        assert!(FlagKind::Ip.parse("localhost").is_err());
        assert!(FlagKind::StringSlice.parse("").is_ok());

        let flags = controller_flags();
        assert_eq!(flags.name(), "kube-controller-manager");
        assert_eq!(flags.kind("port"), Some(FlagKind::Int));
        assert!(!flags.is_empty());
    }
}
