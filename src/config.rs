//! Admin Configuration
//!
//! Where the API lives and how reorders are confirmed.
//! Resolution order for the base URL:
//! 1. `<meta name="codelance-api-base" content="...">` in the host page
//! 2. `CODELANCE_API_BASE` at compile time
//! 3. `http://localhost:8000/api`

use reorder_core::{ConfirmPolicy, ControllerOptions};

pub const DEFAULT_API_BASE: &str = "http://localhost:8000/api";
const API_BASE_META: &str = "codelance-api-base";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminConfig {
    pub api_base_url: String,
    pub confirm_policy: ConfirmPolicy,
}

impl AdminConfig {
    /// Read configuration from the host page and build environment
    pub fn load() -> Self {
        Self::resolve(
            read_meta(API_BASE_META),
            option_env!("CODELANCE_API_BASE"),
            option_env!("CODELANCE_TRUST_OPTIMISTIC"),
        )
    }

    pub fn resolve(meta_base: Option<String>, env_base: Option<&str>, trust_optimistic: Option<&str>) -> Self {
        let api_base_url = meta_base
            .filter(|s| !s.trim().is_empty())
            .or_else(|| env_base.filter(|s| !s.trim().is_empty()).map(str::to_string))
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string());

        let confirm_policy = match trust_optimistic.map(str::trim) {
            Some("1") | Some("true") | Some("yes") => ConfirmPolicy::TrustOptimistic,
            _ => ConfirmPolicy::Refetch,
        };

        Self {
            api_base_url: api_base_url.trim().to_string(),
            confirm_policy,
        }
    }

    pub fn controller_options(&self) -> ControllerOptions {
        ControllerOptions {
            confirm_policy: self.confirm_policy,
        }
    }
}

fn read_meta(name: &str) -> Option<String> {
    let document = web_sys::window()?.document()?;
    let selector = format!("meta[name=\"{}\"]", name);
    let element = document.query_selector(&selector).ok()??;
    element.get_attribute("content")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meta_wins_over_env() {
        let config = AdminConfig::resolve(
            Some("https://api.codelance.dev".to_string()),
            Some("http://staging/api"),
            None,
        );
        assert_eq!(config.api_base_url, "https://api.codelance.dev");
        assert_eq!(config.confirm_policy, ConfirmPolicy::Refetch);
    }

    #[test]
    fn test_fallbacks() {
        let config = AdminConfig::resolve(Some("  ".to_string()), Some("http://staging/api"), None);
        assert_eq!(config.api_base_url, "http://staging/api");

        let config = AdminConfig::resolve(None, None, None);
        assert_eq!(config.api_base_url, DEFAULT_API_BASE);
    }

    #[test]
    fn test_trust_optimistic_flag() {
        let config = AdminConfig::resolve(None, None, Some("true"));
        assert_eq!(config.confirm_policy, ConfirmPolicy::TrustOptimistic);
        assert_eq!(
            config.controller_options().confirm_policy,
            ConfirmPolicy::TrustOptimistic
        );
    }
}
