//! Tests for configuration file loading.

use super::*;
use serial_test::serial;
use std::env;
use std::fs;

#[test]
fn default_config_path_contains_wraplist_config_toml() {
    let Some(path) = default_config_path() else {
        return;
    };
    let path_str = path.to_string_lossy();
    assert!(
        path_str.contains("wraplist") && path_str.ends_with("config.toml"),
        "Path should contain 'wraplist' and end with 'config.toml', got: {}",
        path_str
    );
}

#[test]
fn load_config_file_returns_ok_none_for_missing_file() {
    let result = load_config_file("/nonexistent/path/to/config.toml");
    assert_eq!(
        result,
        Ok(None),
        "Missing config file should return Ok(None), not an error"
    );
}

#[test]
fn load_config_file_parses_valid_toml() {
    let config_path = env::temp_dir().join("wraplist_test_config.toml");

    let toml_content = r#"
relative_numbers = true
scroll_margin = 2
cursor_marker = "→"
selected_marker = "[x]"
unselected_marker = "[ ]"
head_glyph = "+"
continuation_glyph = "|"
show_item_glyphs = false
"#;

    fs::write(&config_path, toml_content).expect("Failed to write test config");

    let config = load_config_file(&config_path)
        .expect("Should successfully parse valid TOML")
        .expect("Should return Some(ConfigFile) for existing file");

    assert_eq!(config.relative_numbers, Some(true));
    assert_eq!(config.scroll_margin, Some(2));
    assert_eq!(config.cursor_marker.as_deref(), Some("→"));
    assert_eq!(config.selected_marker.as_deref(), Some("[x]"));
    assert_eq!(config.unselected_marker.as_deref(), Some("[ ]"));
    assert_eq!(config.head_glyph.as_deref(), Some("+"));
    assert_eq!(config.continuation_glyph.as_deref(), Some("|"));
    assert_eq!(config.show_item_glyphs, Some(false));

    fs::remove_file(config_path).ok();
}

#[test]
fn load_config_file_returns_error_for_invalid_toml() {
    let config_path = env::temp_dir().join("wraplist_test_invalid.toml");

    fs::write(&config_path, "this is not valid TOML ][}{")
        .expect("Failed to write invalid test config");

    let result = load_config_file(&config_path);
    match result {
        Err(ConfigError::ParseError { ref path, .. }) => {
            assert_eq!(path, &config_path);
        }
        _ => panic!("Expected ParseError, got {:?}", result),
    }

    fs::remove_file(config_path).ok();
}

#[test]
fn config_file_rejects_unknown_fields() {
    let result: Result<ConfigFile, _> = toml::from_str("colour = \"red\"\n");
    assert!(result.is_err(), "Unknown keys should be rejected");
}

#[test]
fn merge_config_uses_defaults_when_none() {
    assert_eq!(merge_config(None), ResolvedConfig::default());
}

#[test]
fn merge_config_uses_defaults_for_none_fields() {
    let config_file = ConfigFile {
        selected_marker: Some("[x]".to_string()),
        ..ConfigFile::default()
    };

    let resolved = merge_config(Some(config_file));
    let defaults = ResolvedConfig::default();

    assert_eq!(resolved.glyphs.selected_marker, "[x]");
    assert_eq!(resolved.glyphs.cursor_marker, defaults.glyphs.cursor_marker);
    assert_eq!(resolved.glyphs.head_glyph, defaults.glyphs.head_glyph);
    assert_eq!(resolved.scroll_margin, defaults.scroll_margin);
    assert_eq!(resolved.relative_numbers, defaults.relative_numbers);
}

#[test]
fn resolved_config_default_has_expected_values() {
    let config = ResolvedConfig::default();

    assert!(!config.relative_numbers);
    assert_eq!(config.scroll_margin, 4);
    assert_eq!(config.glyphs, Glyphs::default());
    assert_eq!(config.numbering(), NumberingMode::Absolute);
}

/// RAII guard to ensure environment variable cleanup even under test parallelism.
struct EnvGuard(&'static str);

impl EnvGuard {
    fn new(name: &'static str) -> Self {
        env::remove_var(name);
        EnvGuard(name)
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        env::remove_var(self.0);
    }
}

#[test]
#[serial(wraplist_relative)]
fn apply_env_overrides_respects_wraplist_relative() {
    let _guard = EnvGuard::new(RELATIVE_ENV_VAR);
    env::set_var(RELATIVE_ENV_VAR, "1");

    let result = apply_env_overrides(ResolvedConfig::default());

    assert!(result.relative_numbers);
    assert_eq!(result.numbering(), NumberingMode::Relative);
}

#[test]
#[serial(wraplist_relative)]
fn apply_env_overrides_can_switch_relative_off() {
    let _guard = EnvGuard::new(RELATIVE_ENV_VAR);
    env::set_var(RELATIVE_ENV_VAR, "false");

    let base = ResolvedConfig {
        relative_numbers: true,
        ..ResolvedConfig::default()
    };

    assert!(!apply_env_overrides(base).relative_numbers);
}

#[test]
#[serial(wraplist_relative)]
fn apply_env_overrides_ignores_garbage_values() {
    let _guard = EnvGuard::new(RELATIVE_ENV_VAR);
    env::set_var(RELATIVE_ENV_VAR, "sometimes");

    let base = ResolvedConfig::default();
    assert_eq!(apply_env_overrides(base.clone()), base);
}

#[test]
#[serial(wraplist_relative)]
fn apply_env_overrides_no_change_when_env_var_not_set() {
    let _guard = EnvGuard::new(RELATIVE_ENV_VAR);

    let base = ResolvedConfig::default();
    assert_eq!(apply_env_overrides(base.clone()), base);
}

#[test]
#[serial(wraplist_config)]
fn load_config_with_precedence_prefers_explicit_path() {
    let _guard = EnvGuard::new(CONFIG_ENV_VAR);

    let temp_dir = env::temp_dir();
    let explicit_path = temp_dir.join("wraplist_explicit.toml");
    fs::write(&explicit_path, "scroll_margin = 1\n").expect("Failed to write explicit config");

    let env_path = temp_dir.join("wraplist_env.toml");
    fs::write(&env_path, "scroll_margin = 7\n").expect("Failed to write env config");
    env::set_var(CONFIG_ENV_VAR, &env_path);

    let config = load_config_with_precedence(Some(explicit_path.clone()))
        .unwrap()
        .unwrap();
    assert_eq!(
        config.scroll_margin,
        Some(1),
        "Should use explicit path, not WRAPLIST_CONFIG env var"
    );

    fs::remove_file(explicit_path).ok();
    fs::remove_file(env_path).ok();
}

#[test]
#[serial(wraplist_config)]
fn load_config_with_precedence_uses_env_var_when_no_explicit_path() {
    let _guard = EnvGuard::new(CONFIG_ENV_VAR);

    let env_path = env::temp_dir().join("wraplist_env_only.toml");
    fs::write(&env_path, "relative_numbers = true\n").expect("Failed to write env config");
    env::set_var(CONFIG_ENV_VAR, &env_path);

    let config = load_config_with_precedence(None).unwrap().unwrap();
    assert_eq!(config.relative_numbers, Some(true));

    fs::remove_file(env_path).ok();
}

#[test]
#[serial(wraplist_config)]
fn load_config_with_precedence_rejects_empty_env_path() {
    let _guard = EnvGuard::new(CONFIG_ENV_VAR);
    env::set_var(CONFIG_ENV_VAR, "");

    assert!(matches!(
        load_config_with_precedence(None),
        Err(ConfigError::InvalidPath(_))
    ));
}

#[test]
fn apply_cli_overrides_no_overrides() {
    let base = ResolvedConfig::default();
    assert_eq!(apply_cli_overrides(base.clone(), None, None), base);
}

#[test]
fn apply_cli_overrides_multiple_overrides() {
    let result = apply_cli_overrides(ResolvedConfig::default(), Some(true), Some(0));
    assert!(result.relative_numbers);
    assert_eq!(result.scroll_margin, 0);
}

#[test]
#[serial(wraplist_relative)]
fn precedence_chain_env_vars_to_cli_args() {
    let _guard = EnvGuard::new(RELATIVE_ENV_VAR);
    env::set_var(RELATIVE_ENV_VAR, "true");

    let file = ConfigFile {
        relative_numbers: Some(false),
        scroll_margin: Some(3),
        ..ConfigFile::default()
    };

    let merged = merge_config(Some(file));
    assert!(!merged.relative_numbers, "file value applied over default");

    let with_env = apply_env_overrides(merged);
    assert!(with_env.relative_numbers, "env var beats config file");

    let with_cli = apply_cli_overrides(with_env, Some(false), None);
    assert!(!with_cli.relative_numbers, "CLI beats env var");
    assert_eq!(with_cli.scroll_margin, 3);
}
