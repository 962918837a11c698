pub mod init;
mod schema;

pub use schema::{ColorChoice, Config, OutputConfig, OutputFormat};

use anyhow::{Context, Result};
use atomic_write_file::AtomicWriteFile;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Get the config directory path (~/.config/merit-calc/)
pub fn get_config_dir() -> Result<PathBuf> {
    let home = dirs::home_dir().context("Could not determine home directory")?;
    Ok(home.join(".config").join("merit-calc"))
}

/// Get the default answers file path (~/.config/merit-calc/answers.yaml)
pub fn get_config_path() -> Result<PathBuf> {
    Ok(get_config_dir()?.join("answers.yaml"))
}

/// Load an answers file
///
/// # Arguments
///
/// * `path` - Optional path to the answers file. If None, uses the default path
///
/// # Errors
///
/// Returns an error if:
/// - The file does not exist
/// - The file cannot be read
/// - The YAML cannot be parsed or has unknown fields
pub fn load_config(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(p) => p,
        None => get_config_path()?,
    };

    if !config_path.exists() {
        anyhow::bail!(
            "Answers file not found at {}. Run `merit-calc init` to create one",
            config_path.display()
        );
    }

    let content = fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read answers file at {}", config_path.display()))?;

    let config: Config = serde_saphyr::from_str(&content)
        .with_context(|| format!("Failed to parse answers: invalid YAML in {}", config_path.display()))?;

    tracing::debug!(path = %config_path.display(), "loaded answers file");
    Ok(config)
}

/// Like [`load_config`], but a missing file at the default location is not an
/// error: the form's initial answers are used instead. An explicit path must exist.
pub fn load_config_or_default(path: Option<PathBuf>) -> Result<Config> {
    if path.is_some() {
        return load_config(path);
    }

    let default_path = match get_config_path() {
        Ok(p) => p,
        Err(e) => {
            tracing::debug!(error = %e, "no home directory, using default answers");
            return Ok(Config::default());
        }
    };

    load_config_or_default_at(default_path)
}

/// Load the answers file at `default_path` if it exists, otherwise the defaults
fn load_config_or_default_at(default_path: PathBuf) -> Result<Config> {
    if default_path.exists() {
        load_config(Some(default_path))
    } else {
        tracing::debug!(path = %default_path.display(), "no answers file, using defaults");
        Ok(Config::default())
    }
}

/// Save an answers file atomically, creating parent directories as needed.
pub fn save_config(path: &Path, config: &Config) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }
    }

    let yaml = serde_saphyr::to_string(config)
        .map_err(|e| anyhow::anyhow!("Failed to serialize answers: {}", e))?;

    let mut file = AtomicWriteFile::open(path)
        .with_context(|| format!("Failed to open atomic write file at {}", path.display()))?;
    file.write_all(yaml.as_bytes())
        .with_context(|| format!("Failed to write answers to {}", path.display()))?;
    file.commit()
        .with_context(|| format!("Failed to save answers to {}", path.display()))?;

    tracing::debug!(path = %path.display(), "saved answers file");
    Ok(())
}
