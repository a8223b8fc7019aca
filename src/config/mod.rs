mod types;

pub use types::*;

use crate::{Error, Result};
use std::env;
use std::path::Path;
use tracing::{debug, warn};

const DEFAULT_CONFIG_PATH: &str = "config.yaml";

/// Builds the process configuration from `.env`, the YAML file at
/// `CONFIG_PATH` and the `USE_MOCK_GENAI` override, in that order.
pub async fn load() -> Result<Config> {
    apply_dotenv(dotenvy::dotenv());

    let (config_path, explicit) = match env::var("CONFIG_PATH") {
        Ok(path) => (path, true),
        Err(_) => (DEFAULT_CONFIG_PATH.to_string(), false),
    };

    let contents = read_config_file(Path::new(&config_path), explicit).await?;
    let use_mock_env = env::var("USE_MOCK_GENAI").ok();

    resolve(contents.as_deref(), use_mock_env.as_deref())
}

/// Like [`load`], but reads a specific file that must exist and takes the
/// `USE_MOCK_GENAI` value from the caller instead of the environment.
pub async fn load_from_path(path: impl AsRef<Path>, use_mock_env: Option<&str>) -> Result<Config> {
    let contents = read_config_file(path.as_ref(), true).await?;
    resolve(contents.as_deref(), use_mock_env)
}

/// Reports the outcome of loading a `.env` file; returns whether one was applied.
/// A missing file is expected outside local development.
fn apply_dotenv<T>(result: dotenvy::Result<T>) -> bool {
    match result {
        Ok(_) => {
            debug!("Loaded environment from .env");
            true
        }
        Err(e) if e.not_found() => false,
        Err(e) => {
            warn!("Ignoring unreadable .env file: {}", e);
            false
        }
    }
}

async fn read_config_file(path: &Path, required: bool) -> Result<Option<String>> {
    debug!("Loading configuration from: {}", path.display());

    match tokio::fs::read_to_string(path).await {
        Ok(contents) => Ok(Some(contents)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound && !required => {
            debug!("No configuration file at {}, using defaults", path.display());
            Ok(None)
        }
        Err(e) => Err(e.into()),
    }
}

/// Merges optional YAML contents with the raw `USE_MOCK_GENAI` value.
pub fn resolve(contents: Option<&str>, use_mock_env: Option<&str>) -> Result<Config> {
    let mut config = match contents {
        Some(yaml) if !yaml.trim().is_empty() => serde_yaml::from_str::<Config>(yaml)?,
        _ => Config::default(),
    };

    if let Some(value) = use_mock_env {
        config.genai.use_mock = parse_use_mock(value);
    }

    validate(&config)?;
    Ok(config)
}

/// Only `"true"` (any case) enables the mock; every other value disables it.
pub fn parse_use_mock(value: &str) -> bool {
    value.eq_ignore_ascii_case("true")
}

fn validate(config: &Config) -> Result<()> {
    let mock = &config.genai.mock;
    if mock.latency_min_ms > mock.latency_max_ms {
        return Err(Error::config(format!(
            "genai.mock.latency_min_ms ({}) must not exceed latency_max_ms ({})",
            mock.latency_min_ms, mock.latency_max_ms
        )));
    }

    if let Some(llm) = &config.genai.llm {
        if llm.model.trim().is_empty() {
            return Err(Error::config("genai.llm.model must not be empty"));
        }
    }

    Ok(())
}
