#![deny(warnings)]

//! Loading of cake catalogs and game configs from JSON or YAML files.
//!
//! A catalog file is a flat list of `{type, hungerRestore, healthRestore,
//! cost}` records. A config file holds any subset of [`GameConfig`] fields.

use pet_core::{validate_catalog, validate_config, Cake, GameConfig, ValidationError};
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::{info, warn};

/// On-disk encodings, picked from the file extension.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    Json,
    Yaml,
}

impl Format {
    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        match ext.as_str() {
            "json" => Ok(Format::Json),
            "yaml" | "yml" => Ok(Format::Yaml),
            _ => Err(CatalogError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum CatalogError {
    #[error("io error: {0}")]
    Io(String),
    #[error("parse error: {0}")]
    Parse(String),
    #[error("unsupported file type: {0}")]
    UnsupportedFormat(String),
    #[error("invalid data: {0}")]
    Invalid(#[from] ValidationError),
}

impl From<std::io::Error> for CatalogError {
    fn from(e: std::io::Error) -> Self {
        CatalogError::Io(e.to_string())
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(e: serde_json::Error) -> Self {
        CatalogError::Parse(e.to_string())
    }
}

impl From<serde_yaml::Error> for CatalogError {
    fn from(e: serde_yaml::Error) -> Self {
        CatalogError::Parse(e.to_string())
    }
}

fn decode<T: serde::de::DeserializeOwned>(text: &str, format: Format) -> Result<T, CatalogError> {
    Ok(match format {
        Format::Json => serde_json::from_str(text)?,
        Format::Yaml => serde_yaml::from_str(text)?,
    })
}

/// Parses and validates a catalog.
pub fn parse_cakes(text: &str, format: Format) -> Result<Vec<Cake>, CatalogError> {
    let cakes: Vec<Cake> = decode(text, format)?;
    validate_catalog(&cakes)?;
    Ok(cakes)
}

pub fn load_cakes(path: &Path) -> Result<Vec<Cake>, CatalogError> {
    let format = Format::from_path(path)?;
    let text = fs::read_to_string(path)?;
    let cakes = parse_cakes(&text, format)?;
    info!(path = %path.display(), cakes = cakes.len(), "loaded cake catalog");
    Ok(cakes)
}

/// Loads `path` if given, falling back to the built-in menu on any error.
pub fn load_cakes_or_default(path: Option<&Path>) -> Vec<Cake> {
    let Some(path) = path else {
        return pet_core::default_catalog();
    };
    load_cakes(path).unwrap_or_else(|e| {
        warn!(path = %path.display(), error = %e, "using default cake catalog");
        pet_core::default_catalog()
    })
}

/// Writes a catalog in the format implied by the extension.
pub fn save_cakes(path: &Path, cakes: &[Cake]) -> Result<(), CatalogError> {
    validate_catalog(cakes)?;
    let text = match Format::from_path(path)? {
        Format::Json => serde_json::to_string_pretty(cakes)?,
        Format::Yaml => serde_yaml::to_string(cakes)?,
    };
    fs::write(path, text)?;
    Ok(())
}

/// Parses and validates a config; absent fields take their defaults.
pub fn parse_config(text: &str, format: Format) -> Result<GameConfig, CatalogError> {
    let config: GameConfig = decode(text, format)?;
    validate_config(&config)?;
    Ok(config)
}

pub fn load_config(path: &Path) -> Result<GameConfig, CatalogError> {
    let format = Format::from_path(path)?;
    let text = fs::read_to_string(path)?;
    let config = parse_config(&text, format)?;
    info!(path = %path.display(), ?config, "loaded game config");
    Ok(config)
}

pub fn load_config_or_default(path: Option<&Path>) -> GameConfig {
    let Some(path) = path else {
        return GameConfig::default();
    };
    load_config(path).unwrap_or_else(|e| {
        warn!(path = %path.display(), error = %e, "using default game config");
        GameConfig::default()
    })
}
