use serde::Deserialize;

pub const DEFAULT_API_BASE: &str = "/api";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ClientConfig {
    /// Prefix for every REST path, e.g. `/api` or `https://rides.example.com/api`.
    pub api_base: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_owned(),
        }
    }
}

impl ClientConfig {
    /// Uses `api_base` when it is set and not blank, the default otherwise.
    /// Meant for `option_env!` values baked in at build time.
    pub fn with_api_base(api_base: Option<&str>) -> Self {
        match api_base.map(str::trim) {
            Some(base) if !base.is_empty() => Self {
                api_base: base.trim_end_matches('/').to_owned(),
            },
            _ => Self::default(),
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.api_base.trim_end_matches('/'), path)
    }
}
