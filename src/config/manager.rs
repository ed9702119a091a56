use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use crate::paths;

/// Provider table keys recognized in config.toml.
pub const GEMINI_PROVIDER: &str = "gemini";
pub const MYMEMORY_PROVIDER: &str = "mymemory";
pub const ADVICE_PROVIDER: &str = "adviceslip";

/// Built-in defaults; the tool works with no config file at all.
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";
pub const DEFAULT_API_KEY_ENV: &str = "GEMINI_API_KEY";
const DEFAULT_GEMINI_ENDPOINT: &str = "https://generativelanguage.googleapis.com";
const DEFAULT_MYMEMORY_ENDPOINT: &str = "https://api.mymemory.translated.net";
const DEFAULT_ADVICE_ENDPOINT: &str = "https://api.adviceslip.com";

/// Default settings in the `[quotes]` section of config.toml.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QuotesConfig {
    /// Model used for translation and daily-quote generation.
    pub model: Option<String>,
}

/// Per-provider overrides.
///
/// Every field is optional; anything unset falls back to the built-in
/// defaults above.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// Endpoint URL override.
    #[serde(default)]
    pub endpoint: Option<String>,
    /// API key stored directly in config (not recommended).
    #[serde(default)]
    pub api_key: Option<String>,
    /// Environment variable name containing the API key.
    #[serde(default)]
    pub api_key_env: Option<String>,
}

impl ProviderConfig {
    /// Gets the API key, preferring the environment over the config file.
    ///
    /// `default_env` is consulted when no `api_key_env` is configured, so
    /// the conventional variable works without any config file.
    pub fn get_api_key(&self, default_env: &str) -> Option<String> {
        let env_var = self.api_key_env.as_deref().unwrap_or(default_env);
        if let Ok(key) = std::env::var(env_var)
            && !key.is_empty()
        {
            return Some(key);
        }
        self.api_key.clone()
    }
}

/// The complete configuration file structure.
///
/// Corresponds to `~/.config/mingala/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    /// Default settings.
    #[serde(default)]
    pub quotes: QuotesConfig,
    /// Provider overrides keyed by name (`gemini`, `mymemory`, `adviceslip`).
    #[serde(default)]
    pub providers: HashMap<String, ProviderConfig>,
}

/// Resolved configuration after merging CLI arguments, config file values,
/// and built-in defaults.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    /// The generation model name.
    pub model: String,
    /// Generative API endpoint.
    pub gemini_endpoint: String,
    /// Generation API key; `None` degrades gracefully (daily quote
    /// disabled, resolver skips straight to the fallback provider).
    pub api_key: Option<String>,
    /// Fallback translation endpoint.
    pub mymemory_endpoint: String,
    /// Random-advice endpoint.
    pub advice_endpoint: String,
}

/// CLI overrides that take precedence over config file values.
#[derive(Debug, Clone, Default)]
pub struct ResolveOptions {
    /// Model name override.
    pub model: Option<String>,
}

/// Merges CLI options, config file settings, and built-in defaults.
///
/// Precedence: CLI option > config file > built-in default. Unlike most of
/// the config surface this cannot fail; a missing key only narrows what the
/// app can do.
pub fn resolve_config(options: &ResolveOptions, config_file: &ConfigFile) -> ResolvedConfig {
    let model = options
        .model
        .clone()
        .or_else(|| config_file.quotes.model.clone())
        .unwrap_or_else(|| DEFAULT_MODEL.to_string());

    let api_key = config_file
        .providers
        .get(GEMINI_PROVIDER)
        .map_or_else(default_env_api_key, |p| p.get_api_key(DEFAULT_API_KEY_ENV));

    ResolvedConfig {
        model,
        gemini_endpoint: provider_endpoint(config_file, GEMINI_PROVIDER, DEFAULT_GEMINI_ENDPOINT),
        api_key,
        mymemory_endpoint: provider_endpoint(
            config_file,
            MYMEMORY_PROVIDER,
            DEFAULT_MYMEMORY_ENDPOINT,
        ),
        advice_endpoint: provider_endpoint(config_file, ADVICE_PROVIDER, DEFAULT_ADVICE_ENDPOINT),
    }
}

/// Loads the config file (if any) and resolves it against `options`.
pub fn load_resolved(options: &ResolveOptions) -> ResolvedConfig {
    let manager = ConfigManager::new();
    let config_file = manager.load_or_default();
    resolve_config(options, &config_file)
}

fn default_env_api_key() -> Option<String> {
    std::env::var(DEFAULT_API_KEY_ENV)
        .ok()
        .filter(|key| !key.is_empty())
}

fn provider_endpoint(config_file: &ConfigFile, name: &str, default: &str) -> String {
    config_file
        .providers
        .get(name)
        .and_then(|p| p.endpoint.clone())
        .unwrap_or_else(|| default.to_string())
}

/// Manages loading and saving configuration files.
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    /// Creates a new config manager.
    ///
    /// Configuration is stored at `$XDG_CONFIG_HOME/mingala/config.toml`
    /// or `~/.config/mingala/config.toml` if `XDG_CONFIG_HOME` is not set.
    pub fn new() -> Self {
        Self {
            config_path: paths::config_dir().join("config.toml"),
        }
    }

    pub const fn config_path(&self) -> &PathBuf {
        &self.config_path
    }

    pub fn load(&self) -> Result<ConfigFile> {
        let contents = fs::read_to_string(&self.config_path).with_context(|| {
            format!("Failed to read config file: {}", self.config_path.display())
        })?;

        let config_file: ConfigFile =
            toml::from_str(&contents).with_context(|| "Failed to parse config file")?;

        Ok(config_file)
    }

    pub fn save(&self, config: &ConfigFile) -> Result<()> {
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let contents = toml::to_string_pretty(config).context("Failed to serialize config")?;

        fs::write(&self.config_path, contents).with_context(|| {
            format!(
                "Failed to write config file: {}",
                self.config_path.display()
            )
        })?;

        Ok(())
    }

    pub fn load_or_default(&self) -> ConfigFile {
        self.load().unwrap_or_default()
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::TempDir;

    fn create_test_manager(temp_dir: &TempDir) -> ConfigManager {
        ConfigManager {
            config_path: temp_dir.path().join("config.toml"),
        }
    }

    fn config_without_env_lookup() -> ConfigFile {
        // Point api_key_env at a variable that never exists so tests stay
        // independent of the surrounding environment.
        let mut providers = HashMap::new();
        providers.insert(
            GEMINI_PROVIDER.to_string(),
            ProviderConfig {
                endpoint: None,
                api_key: None,
                api_key_env: Some("MINGALA_TEST_NONEXISTENT_KEY".to_string()),
            },
        );
        ConfigFile {
            quotes: QuotesConfig::default(),
            providers,
        }
    }

    #[test]
    fn test_save_and_load_config() {
        let temp_dir = TempDir::new().unwrap();
        let manager = create_test_manager(&temp_dir);

        let mut providers = HashMap::new();
        providers.insert(
            GEMINI_PROVIDER.to_string(),
            ProviderConfig {
                endpoint: Some("http://localhost:9090".to_string()),
                api_key: None,
                api_key_env: Some("MY_GEMINI_KEY".to_string()),
            },
        );

        let config = ConfigFile {
            quotes: QuotesConfig {
                model: Some("gemini-2.0-flash".to_string()),
            },
            providers,
        };

        manager.save(&config).unwrap();
        let loaded = manager.load().unwrap();

        assert_eq!(loaded.quotes.model, Some("gemini-2.0-flash".to_string()));
        let gemini = loaded.providers.get(GEMINI_PROVIDER).unwrap();
        assert_eq!(gemini.endpoint, Some("http://localhost:9090".to_string()));
        assert_eq!(gemini.api_key_env, Some("MY_GEMINI_KEY".to_string()));
    }

    #[test]
    fn test_load_nonexistent_config() {
        let temp_dir = TempDir::new().unwrap();
        let manager = create_test_manager(&temp_dir);

        assert!(manager.load().is_err());
    }

    #[test]
    #[serial]
    fn test_provider_get_api_key_from_env() {
        // SAFETY: serial test, touches only a test-specific env var
        unsafe {
            std::env::set_var("MINGALA_TEST_API_KEY", "env-key-value");
        }

        let provider = ProviderConfig {
            endpoint: None,
            api_key: Some("file-key".to_string()),
            api_key_env: Some("MINGALA_TEST_API_KEY".to_string()),
        };

        // Environment variable takes priority
        assert_eq!(
            provider.get_api_key(DEFAULT_API_KEY_ENV),
            Some("env-key-value".to_string())
        );

        // SAFETY: cleanup test env var
        unsafe {
            std::env::remove_var("MINGALA_TEST_API_KEY");
        }
    }

    #[test]
    #[serial]
    fn test_provider_get_api_key_falls_back_to_file() {
        let provider = ProviderConfig {
            endpoint: None,
            api_key: Some("file-key".to_string()),
            api_key_env: Some("MINGALA_TEST_NONEXISTENT_KEY".to_string()),
        };

        assert_eq!(
            provider.get_api_key(DEFAULT_API_KEY_ENV),
            Some("file-key".to_string())
        );
    }

    #[test]
    #[serial]
    fn test_provider_get_api_key_uses_default_env() {
        // SAFETY: serial test, restores the variable afterwards
        let original = std::env::var(DEFAULT_API_KEY_ENV).ok();
        unsafe {
            std::env::set_var(DEFAULT_API_KEY_ENV, "conventional-key");
        }

        let provider = ProviderConfig::default();
        assert_eq!(
            provider.get_api_key(DEFAULT_API_KEY_ENV),
            Some("conventional-key".to_string())
        );

        // SAFETY: restore
        unsafe {
            match original {
                Some(val) => std::env::set_var(DEFAULT_API_KEY_ENV, val),
                None => std::env::remove_var(DEFAULT_API_KEY_ENV),
            }
        }
    }

    #[test]
    fn test_resolve_config_built_in_defaults() {
        let options = ResolveOptions::default();
        let resolved = resolve_config(&options, &config_without_env_lookup());

        assert_eq!(resolved.model, DEFAULT_MODEL);
        assert_eq!(resolved.gemini_endpoint, DEFAULT_GEMINI_ENDPOINT);
        assert_eq!(resolved.mymemory_endpoint, DEFAULT_MYMEMORY_ENDPOINT);
        assert_eq!(resolved.advice_endpoint, DEFAULT_ADVICE_ENDPOINT);
        assert!(resolved.api_key.is_none());
    }

    #[test]
    fn test_resolve_config_cli_model_overrides_file() {
        let mut config = config_without_env_lookup();
        config.quotes.model = Some("file-model".to_string());

        let options = ResolveOptions {
            model: Some("cli-model".to_string()),
        };

        let resolved = resolve_config(&options, &config);
        assert_eq!(resolved.model, "cli-model");
    }

    #[test]
    fn test_resolve_config_file_model_beats_default() {
        let mut config = config_without_env_lookup();
        config.quotes.model = Some("file-model".to_string());

        let resolved = resolve_config(&ResolveOptions::default(), &config);
        assert_eq!(resolved.model, "file-model");
    }

    #[test]
    fn test_resolve_config_endpoint_override() {
        let mut config = config_without_env_lookup();
        config.providers.insert(
            MYMEMORY_PROVIDER.to_string(),
            ProviderConfig {
                endpoint: Some("http://localhost:7700".to_string()),
                ..ProviderConfig::default()
            },
        );

        let resolved = resolve_config(&ResolveOptions::default(), &config);
        assert_eq!(resolved.mymemory_endpoint, "http://localhost:7700");
        // Untouched providers keep their defaults
        assert_eq!(resolved.advice_endpoint, DEFAULT_ADVICE_ENDPOINT);
    }

    #[test]
    fn test_resolve_config_api_key_from_file() {
        let mut config = config_without_env_lookup();
        if let Some(gemini) = config.providers.get_mut(GEMINI_PROVIDER) {
            gemini.api_key = Some("file-key".to_string());
        }

        let resolved = resolve_config(&ResolveOptions::default(), &config);
        assert_eq!(resolved.api_key, Some("file-key".to_string()));
    }
}
