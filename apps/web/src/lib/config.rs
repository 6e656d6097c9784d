//! Build-time configuration for the user API endpoint with an optional
//! runtime override. The runtime config is read from `window.JOBPORTAL_CONFIG`
//! (if present) so static deployments can change endpoints without rebuilding.
//! Configuration values are public; do not store secrets here.

/// Endpoint used when neither the build nor the page configures one.
const DEFAULT_USER_API_END_POINT: &str = "http://localhost:8000/api/v1/user";

/// Frontend configuration derived from build-time environment variables.
#[derive(Clone, Debug)]
pub struct AppConfig {
    pub user_api_base_url: String,
}

impl AppConfig {
    /// Loads config from build-time environment variables and applies runtime overrides.
    pub fn load() -> Self {
        let user_api_base_url =
            option_env!("JOBPORTAL_USER_API_END_POINT").unwrap_or(DEFAULT_USER_API_END_POINT);

        let mut config = Self {
            user_api_base_url: user_api_base_url.to_string(),
        };

        if let Some(runtime) = runtime_config() {
            apply_runtime_overrides(&mut config, runtime);
        }

        config
    }

    /// Joins `path` onto the configured user API base.
    pub fn user_api_url(&self, path: &str) -> String {
        build_url_with_base(&self.user_api_base_url, path)
    }
}

#[derive(Default)]
struct RuntimeConfig {
    user_api_base_url: Option<String>,
}

fn apply_runtime_overrides(config: &mut AppConfig, runtime: RuntimeConfig) {
    if let Some(value) = runtime.user_api_base_url {
        config.user_api_base_url = value;
    }
}

#[cfg(target_arch = "wasm32")]
fn runtime_config() -> Option<RuntimeConfig> {
    use js_sys::{Object, Reflect};
    use wasm_bindgen::JsValue;

    let window = web_sys::window()?;
    let config = Reflect::get(&window, &JsValue::from_str("JOBPORTAL_CONFIG")).ok()?;
    if config.is_null() || config.is_undefined() {
        return None;
    }
    let object = Object::from(config);

    Some(RuntimeConfig {
        user_api_base_url: read_runtime_value(&object, "user_api_base_url"),
    })
}

#[cfg(not(target_arch = "wasm32"))]
fn runtime_config() -> Option<RuntimeConfig> {
    None
}

#[cfg(target_arch = "wasm32")]
fn read_runtime_value(object: &js_sys::Object, key: &str) -> Option<String> {
    let value = js_sys::Reflect::get(object, &wasm_bindgen::JsValue::from_str(key))
        .ok()?
        .as_string()?;
    normalize_runtime_value(&value)
}

fn normalize_runtime_value(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Builds a URL from an explicit base URL and the provided path.
fn build_url_with_base(base_url: &str, path: &str) -> String {
    let base = base_url.trim().trim_end_matches('/');
    let path = path.trim();

    if base.is_empty() {
        path.to_string()
    } else {
        format!("{}/{}", base, path.trim_start_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::{
        AppConfig, RuntimeConfig, apply_runtime_overrides, build_url_with_base,
        normalize_runtime_value,
    };

    #[test]
    fn normalize_runtime_value_trims_and_rejects_empty() {
        assert_eq!(normalize_runtime_value(""), None);
        assert_eq!(normalize_runtime_value("   "), None);
        assert_eq!(
            normalize_runtime_value("  https://api.jobportal.dev/user "),
            Some("https://api.jobportal.dev/user".to_string())
        );
    }

    #[test]
    fn apply_runtime_overrides_ignores_empty_values() {
        let mut config = AppConfig {
            user_api_base_url: "https://api.default/user".to_string(),
        };
        let runtime = RuntimeConfig {
            user_api_base_url: normalize_runtime_value("  "),
        };

        apply_runtime_overrides(&mut config, runtime);

        assert_eq!(config.user_api_base_url, "https://api.default/user");
    }

    #[test]
    fn apply_runtime_overrides_overwrites_when_present() {
        let mut config = AppConfig {
            user_api_base_url: "https://api.default/user".to_string(),
        };
        let runtime = RuntimeConfig {
            user_api_base_url: normalize_runtime_value("https://api.override/user"),
        };

        apply_runtime_overrides(&mut config, runtime);

        assert_eq!(config.user_api_base_url, "https://api.override/user");
    }

    #[test]
    fn user_api_url_joins_without_double_slashes() {
        let config = AppConfig {
            user_api_base_url: "https://api.jobportal.dev/api/v1/user/".to_string(),
        };
        assert_eq!(
            config.user_api_url("/login"),
            "https://api.jobportal.dev/api/v1/user/login"
        );
        assert_eq!(build_url_with_base("", "/logout"), "/logout");
    }

    #[test]
    fn load_falls_back_to_default_endpoint_on_host() {
        let config = AppConfig::load();
        assert!(!config.user_api_base_url.trim().is_empty());
    }
}
