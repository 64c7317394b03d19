use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;

/// Departments processed when `DOF_DEPARTMENTS` is not set, in output order.
pub const DEFAULT_DEPARTMENTS: [&str; 2] = [
    "SECRETARIA DE HACIENDA Y CREDITO PUBLICO",
    "BANCO DE MEXICO",
];

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    /// Missing key is not fatal at startup; the digest endpoint answers a
    /// fixed 500 until it is configured.
    pub openai_api_key: Option<String>,
    pub openai_model: String,
    pub dof_base_url: String,
    pub departments: Vec<String>,
    pub fetch_timeout_secs: u64,
    pub openai_timeout_secs: u64,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Ok(Self {
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .context("PORT must be a valid number")?,
            openai_api_key: env::var("OPENAI_API_KEY").ok().filter(|k| !k.is_empty()),
            openai_model: env::var("OPENAI_MODEL").unwrap_or_else(|_| "gpt-4o".to_string()),
            dof_base_url: env::var("DOF_BASE_URL")
                .unwrap_or_else(|_| "https://www.dof.gob.mx/".to_string()),
            departments: env::var("DOF_DEPARTMENTS")
                .map(|raw| parse_departments(&raw))
                .unwrap_or_else(|_| {
                    DEFAULT_DEPARTMENTS.iter().map(|d| d.to_string()).collect()
                }),
            fetch_timeout_secs: env::var("DOF_FETCH_TIMEOUT_SECS")
                .unwrap_or_else(|_| "10".to_string())
                .parse()
                .context("DOF_FETCH_TIMEOUT_SECS must be a valid number")?,
            openai_timeout_secs: env::var("OPENAI_TIMEOUT_SECS")
                .unwrap_or_else(|_| "60".to_string())
                .parse()
                .context("OPENAI_TIMEOUT_SECS must be a valid number")?,
        })
    }
}

fn parse_departments(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|d| d.trim().to_string())
        .filter(|d| !d.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_departments_trims_and_drops_empties() {
        let parsed = parse_departments(" BANCO DE MEXICO , ,SECRETARIA DE ECONOMIA");
        assert_eq!(parsed, vec!["BANCO DE MEXICO", "SECRETARIA DE ECONOMIA"]);
    }

    #[test]
    fn test_default_departments_order() {
        assert_eq!(
            DEFAULT_DEPARTMENTS[0],
            "SECRETARIA DE HACIENDA Y CREDITO PUBLICO"
        );
        assert_eq!(DEFAULT_DEPARTMENTS[1], "BANCO DE MEXICO");
    }
}
