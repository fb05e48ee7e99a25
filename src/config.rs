use std::env;
use std::path::{Path, PathBuf};
use anyhow::{Context, Result};

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_ORIGINS: &str = "http://localhost:3000,http://127.0.0.1:3000";

/// Runtime settings, read from the environment once at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_host: String,
    pub port: u16,
    /// Root of everything served as a static asset.
    pub public_dir: PathBuf,
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
        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .with_context(|| format!("PORT must be a valid port number, got '{}'", raw))?,
            None => DEFAULT_PORT,
        };

        let bind_host = lookup("BIND_HOST")
            .map(|h| h.trim().to_string())
            .filter(|h| !h.is_empty())
            .unwrap_or_else(|| "0.0.0.0".to_string());

        let public_dir = lookup("PUBLIC_DIR")
            .map(|d| d.trim().to_string())
            .filter(|d| !d.is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("public"));

        let allowed_origins = lookup("ALLOWED_ORIGINS")
            .unwrap_or_else(|| DEFAULT_ORIGINS.to_string())
            .split(',')
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect();

        Ok(Self { bind_host, port, public_dir, allowed_origins })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.bind_host, self.port)
    }

    pub fn achievements_dir(&self) -> PathBuf {
        self.public_dir.join("achievements")
    }

    pub fn profile_dir(&self) -> PathBuf {
        self.public_dir.join("profile")
    }

    pub fn public_dir(&self) -> &Path {
        &self.public_dir
    }
}
