use std::path::PathBuf;

use crate::app_config::{
    AppConfig, Environment, InsightsConfig, DEFAULT_API_URL, DEFAULT_LOCAL_MODEL,
    DEFAULT_LOCAL_URL, DEFAULT_MODEL, DEFAULT_RESPONSE_LANGUAGE,
};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the process environment so it can be tested with a plain
/// `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let env = parse_environment(&or_default("SALESDASH_ENV", "development"));
    let log_level = or_default("SALESDASH_LOG_LEVEL", "info");
    let data_dir = PathBuf::from(or_default("SALESDASH_DATA_DIR", "./processed_data/weekly"));

    let use_local = parse_bool(
        "SALESDASH_USE_LOCAL_MODEL",
        &or_default("SALESDASH_USE_LOCAL_MODEL", "false"),
    )?;

    // The hosted backend cannot authenticate without a credential.
    let api_key = lookup("SALESDASH_API_KEY")
        .ok()
        .filter(|key| !key.trim().is_empty());
    if !use_local && api_key.is_none() {
        return Err(ConfigError::MissingEnvVar("SALESDASH_API_KEY".to_string()));
    }

    let request_timeout_secs = parse_u64("SALESDASH_REQUEST_TIMEOUT_SECS", "120")?;
    if request_timeout_secs == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "SALESDASH_REQUEST_TIMEOUT_SECS".to_string(),
            reason: "must be greater than zero".to_string(),
        });
    }

    let insights = InsightsConfig {
        api_key,
        api_url: or_default("SALESDASH_API_URL", DEFAULT_API_URL),
        model: or_default("SALESDASH_MODEL", DEFAULT_MODEL),
        use_local,
        local_url: or_default("SALESDASH_LOCAL_URL", DEFAULT_LOCAL_URL),
        local_model: or_default("SALESDASH_LOCAL_MODEL", DEFAULT_LOCAL_MODEL),
        response_language: or_default("SALESDASH_RESPONSE_LANGUAGE", DEFAULT_RESPONSE_LANGUAGE),
        request_timeout_secs,
    };

    Ok(AppConfig {
        env,
        log_level,
        data_dir,
        insights,
    })
}

/// Parse a string into an `Environment` variant.
///
/// Unrecognized values default to `Environment::Development`.
fn parse_environment(s: &str) -> Environment {
    match s {
        "production" => Environment::Production,
        "test" => Environment::Test,
        _ => Environment::Development,
    }
}

fn parse_bool(var: &str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" | "" => Ok(false),
        other => Err(ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: format!("expected true/false, got '{other}'"),
        }),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::env::VarError;

    use super::*;

    fn lookup_from_map<'a>(
        map: &'a HashMap<&'a str, &'a str>,
    ) -> impl Fn(&str) -> Result<String, VarError> + 'a {
        move |key| {
            map.get(key)
                .map(|v| (*v).to_string())
                .ok_or(VarError::NotPresent)
        }
    }

    /// Returns a map with all required env vars populated with valid defaults.
    fn full_env<'a>() -> HashMap<&'a str, &'a str> {
        let mut m = HashMap::new();
        m.insert("SALESDASH_API_KEY", "test-key");
        m
    }

    #[test]
    fn parse_environment_production() {
        assert_eq!(parse_environment("production"), Environment::Production);
    }

    #[test]
    fn parse_environment_unknown_defaults_to_development() {
        assert_eq!(parse_environment("staging"), Environment::Development);
    }

    #[test]
    fn build_app_config_fails_without_api_key_for_hosted_backend() {
        let map: HashMap<&str, &str> = HashMap::new();
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::MissingEnvVar(ref v)) if v == "SALESDASH_API_KEY"),
            "expected MissingEnvVar(SALESDASH_API_KEY), got: {result:?}"
        );
    }

    #[test]
    fn build_app_config_treats_blank_api_key_as_missing() {
        let mut map = HashMap::new();
        map.insert("SALESDASH_API_KEY", "   ");
        let result = build_app_config(lookup_from_map(&map));
        assert!(matches!(result, Err(ConfigError::MissingEnvVar(_))));
    }

    #[test]
    fn build_app_config_local_backend_needs_no_api_key() {
        let mut map = HashMap::new();
        map.insert("SALESDASH_USE_LOCAL_MODEL", "true");
        let cfg = build_app_config(lookup_from_map(&map)).expect("local config should load");
        assert!(cfg.insights.use_local);
        assert!(cfg.insights.api_key.is_none());
    }

    #[test]
    fn build_app_config_succeeds_with_defaults() {
        let map = full_env();
        let result = build_app_config(lookup_from_map(&map));
        assert!(result.is_ok(), "expected Ok, got: {result:?}");
        let cfg = result.unwrap();
        assert_eq!(cfg.env, Environment::Development);
        assert_eq!(cfg.log_level, "info");
        assert_eq!(cfg.data_dir, PathBuf::from("./processed_data/weekly"));
        assert_eq!(cfg.insights.api_key.as_deref(), Some("test-key"));
        assert_eq!(
            cfg.insights.api_url,
            "https://api.openai.com/v1/chat/completions"
        );
        assert_eq!(cfg.insights.model, "gpt-4");
        assert!(!cfg.insights.use_local);
        assert_eq!(cfg.insights.local_url, "http://localhost:11434/api/generate");
        assert_eq!(cfg.insights.local_model, "llama2");
        assert_eq!(cfg.insights.response_language, "Korean");
        assert_eq!(cfg.insights.request_timeout_secs, 120);
    }

    #[test]
    fn build_app_config_applies_overrides() {
        let mut map = full_env();
        map.insert("SALESDASH_MODEL", "gpt-4o-mini");
        map.insert("SALESDASH_LOCAL_URL", "http://gpu-box:11434/api/generate");
        map.insert("SALESDASH_RESPONSE_LANGUAGE", "English");
        map.insert("SALESDASH_REQUEST_TIMEOUT_SECS", "30");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(cfg.insights.model, "gpt-4o-mini");
        assert_eq!(cfg.insights.local_url, "http://gpu-box:11434/api/generate");
        assert_eq!(cfg.insights.response_language, "English");
        assert_eq!(cfg.insights.request_timeout_secs, 30);
    }

    #[test]
    fn build_app_config_rejects_invalid_use_local_flag() {
        let mut map = full_env();
        map.insert("SALESDASH_USE_LOCAL_MODEL", "maybe");
        let result = build_app_config(lookup_from_map(&map));
        let Err(ConfigError::InvalidEnvVar { var, .. }) = &result else {
            panic!("expected InvalidEnvVar(SALESDASH_USE_LOCAL_MODEL), got: {result:?}");
        };
        assert_eq!(var, "SALESDASH_USE_LOCAL_MODEL");
    }

    #[test]
    fn build_app_config_rejects_invalid_timeout() {
        let mut map = full_env();
        map.insert("SALESDASH_REQUEST_TIMEOUT_SECS", "not-a-number");
        let result = build_app_config(lookup_from_map(&map));
        let Err(ConfigError::InvalidEnvVar { var, .. }) = &result else {
            panic!("expected InvalidEnvVar(SALESDASH_REQUEST_TIMEOUT_SECS), got: {result:?}");
        };
        assert_eq!(var, "SALESDASH_REQUEST_TIMEOUT_SECS");
    }

    #[test]
    fn build_app_config_rejects_zero_timeout() {
        let mut map = full_env();
        map.insert("SALESDASH_REQUEST_TIMEOUT_SECS", "0");
        let result = build_app_config(lookup_from_map(&map));
        assert!(matches!(result, Err(ConfigError::InvalidEnvVar { .. })));
    }

    #[test]
    fn parse_bool_accepts_common_spellings() {
        assert!(parse_bool("X", "TRUE").unwrap());
        assert!(parse_bool("X", "1").unwrap());
        assert!(parse_bool("X", "yes").unwrap());
        assert!(!parse_bool("X", "false").unwrap());
        assert!(!parse_bool("X", "0").unwrap());
        assert!(!parse_bool("X", "").unwrap());
    }
}
