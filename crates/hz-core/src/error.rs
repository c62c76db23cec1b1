use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum HzError {
    #[error("Config file not found: {0}")]
    ConfigNotFound(PathBuf),
    #[error("{0} missing or empty.")]
    MissingOption(String),
    #[error("{name} '{}' does not exist.", .path.display())]
    PathNotFound { name: String, path: PathBuf },
    #[error("Invalid config: {0}")]
    InvalidConfig(#[from] toml::de::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, HzError>;
