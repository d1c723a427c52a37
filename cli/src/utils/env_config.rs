use anyhow::{Context, Result};
use blog_content::DEFAULT_RELATED_LIMIT;
use std::env;
use std::path::{Path, PathBuf};

pub const CONTENT_PATH_VAR: &str = "BLOG_CONTENT_PATH";
pub const RELATED_LIMIT_VAR: &str = "BLOG_RELATED_LIMIT";

/// Environment-based configuration for the blog CLI
#[derive(Debug, Clone, PartialEq)]
pub struct BlogConfig {
    /// JSON content export to read instead of the built-in placeholder posts
    pub content_path: Option<PathBuf>,
    /// Default number of related posts
    pub related_limit: usize,
}

impl BlogConfig {
    /// Load configuration from environment variables with defaults
    pub fn load() -> Result<Self> {
        Self::load_with_base(None)
    }

    /// Load configuration with an optional base directory for relative paths
    /// This is primarily for testing purposes
    pub fn load_with_base(base_dir: Option<PathBuf>) -> Result<Self> {
        let base = if let Some(base) = base_dir {
            base
        } else {
            // Try to load .env file if it exists in current directory
            if let Ok(current_dir) = env::current_dir() {
                let env_file = current_dir.join(".env");
                if env_file.exists() {
                    dotenv::from_path(&env_file).ok();
                }
            }
            env::current_dir().context("Failed to get current directory")?
        };

        Ok(Self {
            content_path: Self::get_path_from_env(CONTENT_PATH_VAR, &base),
            related_limit: Self::get_limit_from_env(RELATED_LIMIT_VAR, DEFAULT_RELATED_LIMIT)?,
        })
    }

    /// Get an optional path from an environment variable, resolving relative paths against the base directory
    fn get_path_from_env(var_name: &str, base_dir: &Path) -> Option<PathBuf> {
        let value = env::var(var_name)
            .ok()
            .filter(|value| !value.trim().is_empty())?;
        let path = PathBuf::from(value);

        if path.is_relative() {
            Some(base_dir.join(path))
        } else {
            Some(path)
        }
    }

    fn get_limit_from_env(var_name: &str, default: usize) -> Result<usize> {
        match env::var(var_name) {
            Ok(value) => value
                .trim()
                .parse()
                .with_context(|| {
                    format!("{var_name} must be a non-negative integer, got '{value}'")
                }),
            Err(_) => Ok(default),
        }
    }
}
