use crate::config::types::SourceConfig;
use crate::config::validation::validate;
use crate::ConfigError;
use std::path::Path;

/// Loads, parses, and validates a single source configuration file
///
/// # Arguments
///
/// * `path` - Path to a JSON source file
///
/// # Returns
///
/// * `Ok(SourceConfig)` - Successfully loaded and validated source
/// * `Err(ConfigError)` - Failed to read, parse, or validate the file
///
/// # Example
///
/// ```no_run
/// use std::path::Path;
/// use news_scout::config::load_source_config;
///
/// let source = load_source_config(Path::new("sources/example_com.json")).unwrap();
/// println!("{} categories", source.categories.len());
/// ```
pub fn load_source_config(path: &Path) -> Result<SourceConfig, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    let source: SourceConfig = serde_json::from_str(&content)?;
    validate(&source)?;
    Ok(source)
}

/// Loads every source configuration from a directory
///
/// Scans `dir` for `*.json` files and loads each one. A file that fails to
/// parse or validate is logged and skipped; the rest of the directory still
/// loads. Only an unreadable directory is an error, which callers treat as
/// fatal at startup.
///
/// # Arguments
///
/// * `dir` - Directory containing one JSON file per source
///
/// # Returns
///
/// * `Ok(Vec<SourceConfig>)` - All sources that loaded cleanly (may be empty)
/// * `Err(ConfigError)` - The directory could not be read
pub fn load_all_sources(dir: &Path) -> Result<Vec<SourceConfig>, ConfigError> {
    let entries = std::fs::read_dir(dir)?;
    let mut sources = Vec::new();

    for entry in entries {
        let entry = entry?;
        let path = entry.path();

        if path.extension().and_then(|e| e.to_str()) != Some("json") {
            continue;
        }

        match load_source_config(&path) {
            Ok(source) => {
                tracing::debug!(
                    "Loaded source '{}' ({} categories) from {}",
                    source.domain_name,
                    source.categories.len(),
                    path.display()
                );
                sources.push(source);
            }
            Err(e) => {
                tracing::warn!("Skipping config file {}: {}", path.display(), e);
            }
        }
    }

    Ok(sources)
}
