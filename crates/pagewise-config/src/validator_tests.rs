use super::*;

#[test]
fn test_validate_default_config() {
    let result = ConfigValidator::validate(&Config::default());
    assert!(result.is_valid());
    assert!(result.warnings.is_empty());
}

#[test]
fn test_zero_timeout_is_error() {
    let mut config = Config::default();
    config.browser.timeout_secs = 0;

    let result = ConfigValidator::validate(&config);
    assert!(!result.is_valid());
    assert!(result.errors.iter().any(|e| e.path == "browser.timeout_secs"));
}

#[test]
fn test_unknown_log_level_is_error() {
    let mut config = Config::default();
    config.logging.level = "verbose".to_string();

    let result = ConfigValidator::validate(&config);
    assert!(!result.is_valid());
    assert!(result.errors[0].message.contains("verbose"));
}

#[test]
fn test_target_directives_accepted() {
    let mut config = Config::default();
    config.logging.level = "WARN, pagewise_dom=debug,pagewise=trace".to_string();

    assert!(ConfigValidator::validate(&config).is_valid());
}

#[test]
fn test_bad_directive_among_good_ones() {
    let mut config = Config::default();
    config.logging.level = "info,pagewise=loud".to_string();

    let result = ConfigValidator::validate(&config);
    assert_eq!(result.errors.len(), 1);
    assert_eq!(result.errors[0].path, "logging.level");
}

#[test]
fn test_large_context_size_warns() {
    let mut config = Config::default();
    config.browser.context_size = 11;

    let result = ConfigValidator::validate(&config);
    assert!(result.is_valid());
    assert_eq!(result.warnings.len(), 1);
    assert_eq!(result.warnings[0].path, "browser.context_size");

    config.browser.context_size = 10;
    assert!(ConfigValidator::validate(&config).warnings.is_empty());
}
