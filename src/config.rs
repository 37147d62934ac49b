//! Provider profile resolution and environment configuration.
//!
//! A provider profile is a named bundle of model identifier, credential and
//! endpoint used to configure the backing language model. The table of known
//! providers is fixed; API keys are resolved at lookup time from the OS keyring
//! or the provider's environment variable.

use keyring::Entry;
use once_cell::sync::Lazy;
use std::collections::BTreeMap;
use std::env;
use std::path::PathBuf;
use std::sync::Once;

use crate::{Error, Result};

/// Provider used when `LLM_PROVIDER` is not set.
pub const DEFAULT_PROVIDER: &str = "deepseek_local";

/// Keyring service name for API key lookups.
const KEYRING_SERVICE: &str = "openhands-client";

/// Static portion of a provider entry. The API key is resolved per lookup.
struct ProviderSpec {
    model: &'static str,
    base_url: &'static str,
    /// Environment variable holding the API key, if the provider needs one.
    key_env: Option<&'static str>,
    /// Fixed placeholder key (Ollama accepts any non-empty key).
    fixed_key: Option<&'static str>,
}

static PROVIDERS: Lazy<BTreeMap<&'static str, ProviderSpec>> = Lazy::new(|| {
    BTreeMap::from([
        (
            "deepseek_local",
            ProviderSpec {
                model: "ollama/deepseek-coder-v2:16b",
                base_url: "http://localhost:11434",
                key_env: None,
                fixed_key: Some("ollama"),
            },
        ),
        (
            "deepseek_api",
            ProviderSpec {
                model: "deepseek-chat",
                base_url: "https://api.deepseek.com/v1",
                key_env: Some("DEEPSEEK_API_KEY"),
                fixed_key: None,
            },
        ),
        (
            "openai",
            ProviderSpec {
                model: "gpt-4o",
                base_url: "https://api.openai.com/v1",
                key_env: Some("OPENAI_API_KEY"),
                fixed_key: None,
            },
        ),
        (
            "anthropic",
            ProviderSpec {
                model: "claude-sonnet-4-20250514",
                base_url: "https://api.anthropic.com",
                key_env: Some("ANTHROPIC_API_KEY"),
                fixed_key: None,
            },
        ),
    ])
});

/// Named bundle of model identifier, credential and endpoint.
/// Immutable once resolved; selected once per client instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderProfile {
    pub name: String,
    pub model: String,
    /// May be empty when the provider's key is not configured.
    pub api_key: String,
    pub base_url: String,
}

static DOTENV: Once = Once::new();

/// Load `.env` once per process. Missing files are fine.
fn load_dotenv() {
    DOTENV.call_once(|| {
        let _ = dotenv::dotenv();
    });
}

/// Provider name from `LLM_PROVIDER`, falling back to the built-in default.
pub fn default_provider() -> String {
    load_dotenv();
    env::var("LLM_PROVIDER").unwrap_or_else(|_| DEFAULT_PROVIDER.to_string())
}

/// Workspace root for relative file operations, from `WORKSPACE_DIR`.
pub fn workspace_dir() -> PathBuf {
    load_dotenv();
    PathBuf::from(env::var("WORKSPACE_DIR").unwrap_or_else(|_| "./workspace".to_string()))
}

/// OpenHands server endpoint, from `OPENHANDS_SERVER_URL`.
pub fn server_url() -> String {
    load_dotenv();
    env::var("OPENHANDS_SERVER_URL").unwrap_or_else(|_| "http://localhost:3000".to_string())
}

/// Resolve a provider profile by name, defaulting to `LLM_PROVIDER`.
///
/// Unknown names fail with a validation error that enumerates every valid key.
/// Pure lookup: no side effects besides environment (and keyring) reads.
pub fn resolve_profile(provider: Option<&str>) -> Result<ProviderProfile> {
    load_dotenv();
    let name = provider
        .map(|s| s.to_string())
        .unwrap_or_else(default_provider);

    let spec = PROVIDERS.get(name.as_str()).ok_or_else(|| {
        let available: Vec<&str> = PROVIDERS.keys().copied().collect();
        Error::validation(format!(
            "Unknown provider: {}. Available: {}",
            name,
            available.join(", ")
        ))
    })?;

    Ok(ProviderProfile {
        name: name.clone(),
        model: spec.model.to_string(),
        api_key: api_key_for(&name, spec),
        base_url: spec.base_url.to_string(),
    })
}

/// All known provider names, sorted.
pub fn provider_names() -> Vec<&'static str> {
    PROVIDERS.keys().copied().collect()
}

fn api_key_for(name: &str, spec: &ProviderSpec) -> String {
    if let Some(key) = spec.fixed_key {
        return key.to_string();
    }

    // 1. OS keyring
    if let Ok(entry) = Entry::new(KEYRING_SERVICE, name) {
        if let Ok(key) = entry.get_password() {
            return key;
        }
    }

    // 2. Environment variable
    spec.key_env
        .and_then(|var| env::var(var).ok())
        .unwrap_or_default()
}
