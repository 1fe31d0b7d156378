use crate::error::{AppError, Result};
use std::{env, path::PathBuf, str::FromStr};

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_MAX_BODY_SIZE: usize = 10 * 1024 * 1024;
const DEFAULT_MAX_UPLOAD_SIZE: usize = 5 * 1024 * 1024;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub uploads: UploadConfig,
    pub cors: CorsConfig,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub max_body_size: usize,
}

#[derive(Debug, Clone)]
pub struct UploadConfig {
    pub dir: PathBuf,
    pub max_file_size: usize,
}

#[derive(Debug, Clone)]
pub struct CorsConfig {
    /// Empty means any origin.
    pub allowed_origins: Vec<String>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            server: ServerConfig {
                host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
                port: parse_or(&lookup, "PORT", DEFAULT_PORT)?,
                max_body_size: parse_or(&lookup, "MAX_BODY_SIZE", DEFAULT_MAX_BODY_SIZE)?,
            },
            uploads: UploadConfig {
                dir: lookup("UPLOADS_DIR")
                    .map(PathBuf::from)
                    .unwrap_or_else(|| PathBuf::from("uploads")),
                max_file_size: parse_or(&lookup, "MAX_UPLOAD_SIZE", DEFAULT_MAX_UPLOAD_SIZE)?,
            },
            cors: CorsConfig {
                allowed_origins: lookup("CORS_ALLOWED_ORIGINS")
                    .map(|origins| {
                        origins
                            .split(',')
                            .map(|s| s.trim().to_string())
                            .filter(|s| !s.is_empty() && s != "*")
                            .collect()
                    })
                    .unwrap_or_default(),
            },
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: DEFAULT_PORT,
                max_body_size: DEFAULT_MAX_BODY_SIZE,
            },
            uploads: UploadConfig {
                dir: PathBuf::from("uploads"),
                max_file_size: DEFAULT_MAX_UPLOAD_SIZE,
            },
            cors: CorsConfig {
                allowed_origins: Vec::new(),
            },
        }
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| AppError::ConfigError(format!("Invalid {} value", key))),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn defaults_apply_when_unset() {
        let config = AppConfig::from_lookup(lookup_from(&[])).unwrap();

        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server_address(), "0.0.0.0:8080");
        assert_eq!(config.uploads.dir, PathBuf::from("uploads"));
        assert_eq!(config.uploads.max_file_size, 5 * 1024 * 1024);
        assert!(config.cors.allowed_origins.is_empty());
    }

    #[test]
    fn reads_port_and_origins() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("PORT", "3000"),
            ("CORS_ALLOWED_ORIGINS", "http://a.test, http://b.test"),
        ]))
        .unwrap();

        assert_eq!(config.server.port, 3000);
        assert_eq!(
            config.cors.allowed_origins,
            vec!["http://a.test".to_string(), "http://b.test".to_string()]
        );
    }

    #[test]
    fn wildcard_origin_means_any() {
        let config =
            AppConfig::from_lookup(lookup_from(&[("CORS_ALLOWED_ORIGINS", "*")])).unwrap();
        assert!(config.cors.allowed_origins.is_empty());
    }

    #[test]
    fn invalid_port_is_config_error() {
        let err = AppConfig::from_lookup(lookup_from(&[("PORT", "eighty")])).unwrap_err();
        assert!(matches!(err, AppError::ConfigError(msg) if msg == "Invalid PORT value"));
    }
}
