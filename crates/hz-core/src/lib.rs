pub mod config;
pub mod error;
pub mod types;

pub use config::{HzWordsConfig, SelectionParams};
pub use error::{HzError, Result};
pub use types::*;

#[cfg(test)]
mod tests;
