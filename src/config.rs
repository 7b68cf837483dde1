/// Runtime configuration handed to the page tree through a `ContextProvider`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    pub backend_url: String,
}

impl AppConfig {
    pub fn new(backend_url: impl Into<String>) -> Self {
        Self {
            backend_url: backend_url.into(),
        }
    }

    /// `BACKEND_URL` at compile time wins over the build-profile default.
    pub fn from_build_env() -> Self {
        Self::new(option_env!("BACKEND_URL").unwrap_or_else(default_backend_url))
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.backend_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

#[cfg(debug_assertions)]
fn default_backend_url() -> &'static str {
    "http://localhost:3001" // Development URL when running locally
}

#[cfg(not(debug_assertions))]
fn default_backend_url() -> &'static str {
    "" // Same origin in production
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_joins_without_doubling_slashes() {
        let config = AppConfig::new("https://api.raze.example/");
        assert_eq!(
            config.endpoint("/api/public/social-proof"),
            "https://api.raze.example/api/public/social-proof"
        );
    }

    #[test]
    fn empty_base_url_stays_same_origin() {
        let config = AppConfig::new("");
        assert_eq!(config.endpoint("api/public/social-proof"), "/api/public/social-proof");
    }
}
