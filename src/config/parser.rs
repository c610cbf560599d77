use std::path::Path;

use crate::errors::PrecinctError;

use super::types::PrecinctConfig;

/// Load configuration: YAML file (when given), then environment overrides,
/// then semantic validation.
pub async fn load_config(path: Option<&Path>) -> Result<PrecinctConfig, PrecinctError> {
    let mut config = match path {
        Some(path) => parse_file(path).await?,
        None => PrecinctConfig::default(),
    };

    if let Ok(url) = std::env::var("PRECINCT_API_URL") {
        if !url.is_empty() {
            config.api.base_url = url;
        }
    }
    if let Ok(identity) = std::env::var("PRECINCT_GENERATED_BY") {
        if !identity.is_empty() {
            config.report.generated_by = identity;
        }
    }

    validate(&config)?;
    Ok(config)
}

async fn parse_file(path: &Path) -> Result<PrecinctConfig, PrecinctError> {
    if !path.exists() {
        return Err(PrecinctError::Config(format!(
            "Config file not found: {}",
            path.display()
        )));
    }

    let metadata = tokio::fs::metadata(path).await?;
    if metadata.len() > 1_048_576 {
        return Err(PrecinctError::Config("Config file exceeds 1MB limit".into()));
    }

    let content = tokio::fs::read_to_string(path).await?;
    let config: PrecinctConfig = serde_yaml::from_str(&content)?;
    Ok(config)
}

fn validate(config: &PrecinctConfig) -> Result<(), PrecinctError> {
    if config.api.base_url.trim().is_empty() {
        return Err(PrecinctError::Config("api.base_url must not be empty".into()));
    }
    if !config.api.base_url.starts_with("http://") && !config.api.base_url.starts_with("https://") {
        return Err(PrecinctError::Config(format!(
            "api.base_url must be an http(s) URL: {}",
            config.api.base_url
        )));
    }
    if config.api.timeout_secs == 0 {
        return Err(PrecinctError::Config("api.timeout_secs must be positive".into()));
    }
    Ok(())
}
