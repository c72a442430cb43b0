//! Client configuration from environment variables

use std::path::PathBuf;

/// Default journal API base URL
pub const DEFAULT_API_URL: &str = "http://localhost:8080/api";

/// Default location of the persisted session token
pub const DEFAULT_SESSION_FILE: &str = "./moodecho-session.json";

/// Terminal width assumed when `COLUMNS` is unset or unparsable
pub const DEFAULT_COLUMNS: u16 = 80;

/// Client configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL of the journal API, without trailing slash
    pub api_url: String,
    /// File holding the session token between runs
    pub session_file: PathBuf,
    /// Terminal width used to pick the dashboard layout
    pub columns: u16,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            session_file: PathBuf::from(DEFAULT_SESSION_FILE),
            columns: DEFAULT_COLUMNS,
        }
    }
}

impl ClientConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let api_url = lookup("MOODECHO_API_URL")
            .filter(|v| !v.trim().is_empty())
            .map(|v| normalize_base_url(&v))
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        let session_file = lookup("MOODECHO_SESSION_FILE")
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SESSION_FILE));

        let columns = lookup("COLUMNS")
            .and_then(|v| v.trim().parse().ok())
            .unwrap_or(DEFAULT_COLUMNS);

        Self {
            api_url,
            session_file,
            columns,
        }
    }

    /// Override the API base URL
    pub fn with_api_url(mut self, api_url: impl AsRef<str>) -> Self {
        self.api_url = normalize_base_url(api_url.as_ref());
        self
    }

    /// Override the session file path
    pub fn with_session_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.session_file = path.into();
        self
    }
}

fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = ClientConfig::from_lookup(lookup_from(&[]));
        assert_eq!(config, ClientConfig::default());
    }

    #[test]
    fn test_reads_overrides_and_trims_slash() {
        let config = ClientConfig::from_lookup(lookup_from(&[
            ("MOODECHO_API_URL", "https://journal.example.com/api/"),
            ("MOODECHO_SESSION_FILE", "/tmp/session.json"),
            ("COLUMNS", "132"),
        ]));
        assert_eq!(config.api_url, "https://journal.example.com/api");
        assert_eq!(config.session_file, PathBuf::from("/tmp/session.json"));
        assert_eq!(config.columns, 132);
    }

    #[test]
    fn test_bad_columns_falls_back() {
        let config = ClientConfig::from_lookup(lookup_from(&[("COLUMNS", "wide")]));
        assert_eq!(config.columns, DEFAULT_COLUMNS);
    }
}
