//! API server configuration.

/// Configuration for the API server.
///
/// Holds only what the HTTP layer itself reads; the database pool, token
/// codec, and file store are constructed by the binary and handed over
/// through [`crate::AppState`].
#[derive(Clone, Debug)]
pub struct ApiConfig {
    /// Address to bind the HTTP listener (e.g. "127.0.0.1:4000").
    pub bind_addr: String,
    /// Path prefixes the authentication middleware forwards untouched.
    pub public_paths: Vec<String>,
}

impl ApiConfig {
    /// Reads configuration from environment variables with sensible defaults.
    ///
    /// | Variable    | Default          |
    /// |-------------|------------------|
    /// | `BIND_ADDR` | `127.0.0.1:4000` |
    pub fn from_env() -> Self {
        Self {
            bind_addr: std::env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:4000".into()),
            public_paths: default_public_paths(),
        }
    }

    /// True when `path` falls under a configured public prefix.
    pub fn is_public_path(&self, path: &str) -> bool {
        self.public_paths.iter().any(|prefix| path.starts_with(prefix))
    }
}

/// Paths served without authentication: login, registration, and stored
/// pictures (linked from rental listings rendered before any login).
pub fn default_public_paths() -> Vec<String> {
    ["/auth/login", "/auth/register", "/files/"]
        .into_iter()
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> ApiConfig {
        ApiConfig {
            bind_addr: String::new(),
            public_paths: default_public_paths(),
        }
    }

    #[test]
    fn public_prefixes_match_by_prefix_only() {
        let config = config();
        assert!(config.is_public_path("/auth/login"));
        assert!(config.is_public_path("/auth/register"));
        assert!(config.is_public_path("/files/rentalpicture/1/a.jpg"));
        assert!(!config.is_public_path("/auth/me"));
        assert!(!config.is_public_path("/rentals"));
        assert!(!config.is_public_path("/filesystem"));
    }
}
