use crate::constants::{DATABASE_URL_ENV, DEFAULT_DATABASE_URL};

/// Runtime configuration, read from the environment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// PostgreSQL connection string
    pub database_url: String,
}

impl Config {
    /// Builds the configuration from process environment variables.
    /// `.env` must already be loaded for its values to be visible here.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup(DATABASE_URL_ENV)
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());

        Config { database_url }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn falls_back_to_local_database_when_unset() {
        let config = Config::from_lookup(|_| None);
        assert_eq!(config.database_url, DEFAULT_DATABASE_URL);
    }

    #[test]
    fn blank_value_counts_as_unset() {
        let config = Config::from_lookup(|_| Some("  ".to_string()));
        assert_eq!(config.database_url, DEFAULT_DATABASE_URL);
    }

    #[test]
    fn uses_database_url_from_environment() {
        let config = Config::from_lookup(|key| {
            (key == "DATABASE_URL").then(|| "postgres://db:5432/shipments".to_string())
        });
        assert_eq!(config.database_url, "postgres://db:5432/shipments");
    }
}
