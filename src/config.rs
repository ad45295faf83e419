use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

const APP_DIR: &str = "filetui";
const CONFIG_FILE: &str = "config.yaml";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub base_url: String,
    #[serde(default)]
    pub vim_mode: bool,
    #[serde(default = "default_icon_mode")]
    pub icon_mode: String,
    /// Where downloads are written
    #[serde(default)]
    pub download_dir: Option<PathBuf>,
}

fn default_icon_mode() -> String {
    "emoji".to_string()
}

impl Config {
    /// Config for a server given on the command line only
    pub fn from_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            vim_mode: false,
            icon_mode: default_icon_mode(),
            download_dir: None,
        }
    }

    pub fn parse(yaml: &str) -> Result<Self> {
        let config: Config = serde_yaml::from_str(yaml).context("Invalid config file")?;
        if config.base_url.trim().is_empty() {
            anyhow::bail!("Config field base_url must not be empty");
        }
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let yaml = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::parse(&yaml)
    }

    /// Download directory: configured, else the platform's, else the working directory
    pub fn download_dir(&self) -> PathBuf {
        self.download_dir
            .clone()
            .or_else(dirs::download_dir)
            .unwrap_or_else(|| PathBuf::from("."))
    }
}

/// Determine the config file path with fallback logic
///
/// An explicit path must exist. Otherwise `~/.config/filetui/config.yaml`
/// then `./config.yaml` are tried; `None` when neither exists.
pub fn find_config_path(cli_path: Option<&str>) -> Result<Option<PathBuf>> {
    // If CLI argument provided, use it
    if let Some(path) = cli_path {
        let p = PathBuf::from(path);
        if p.exists() {
            return Ok(Some(p));
        }
        anyhow::bail!("Config file not found at specified path: {}", path);
    }

    if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(APP_DIR).join(CONFIG_FILE);
        if config_path.exists() {
            return Ok(Some(config_path));
        }
    }

    let local_config = PathBuf::from(CONFIG_FILE);
    if local_config.exists() {
        return Ok(Some(local_config));
    }

    Ok(None)
}

/// Load the configuration, letting `--url` stand in for a missing file
pub fn load_config(cli_path: Option<&str>, url: Option<&str>) -> Result<Config> {
    let mut config = match find_config_path(cli_path)? {
        Some(path) => {
            tracing::debug!("loading config from {}", path.display());
            Config::from_file(&path)?
        }
        None => match url {
            Some(url) => Config::from_url(url),
            None => {
                let expected_path = dirs::config_dir()
                    .map(|dir| dir.join(APP_DIR).join(CONFIG_FILE).display().to_string())
                    .unwrap_or_else(|| format!("~/.config/{}/{}", APP_DIR, CONFIG_FILE));

                anyhow::bail!(
                    "Config file not found. Expected locations:\n\
                     1. {} (preferred)\n\
                     2. ./{} (fallback)\n\
                     \n\
                     Use --config <path> to specify a custom location, \
                     or --url <base-url> to run without one.",
                    expected_path,
                    CONFIG_FILE
                )
            }
        },
    };

    if let Some(url) = url {
        config.base_url = url.to_string();
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_applies_defaults() {
        let config = Config::parse("base_url: http://localhost:8080\n").unwrap();
        assert_eq!(config.base_url, "http://localhost:8080");
        assert!(!config.vim_mode);
        assert_eq!(config.icon_mode, "emoji");
        assert_eq!(config.download_dir, None);
    }

    #[test]
    fn test_parse_all_fields() {
        let yaml = "base_url: http://nas:3000\nvim_mode: true\nicon_mode: nerdfont\ndownload_dir: /tmp/dl\n";
        let config = Config::parse(yaml).unwrap();
        assert!(config.vim_mode);
        assert_eq!(config.icon_mode, "nerdfont");
        assert_eq!(config.download_dir(), PathBuf::from("/tmp/dl"));
    }

    #[test]
    fn test_parse_rejects_missing_or_empty_url() {
        assert!(Config::parse("vim_mode: true\n").is_err());
        assert!(Config::parse("base_url: \"  \"\n").is_err());
    }

    #[test]
    fn test_explicit_missing_config_is_an_error() {
        let err = find_config_path(Some("/definitely/not/here/config.yaml")).unwrap_err();
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn test_url_overrides_config_file() {
        let dir = std::env::temp_dir().join(format!("filetui-config-test-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.yaml");
        std::fs::write(&path, "base_url: http://from-file\n").unwrap();

        let path_str = path.display().to_string();
        let config = load_config(Some(path_str.as_str()), Some("http://from-cli")).unwrap();
        assert_eq!(config.base_url, "http://from-cli");

        let config = load_config(Some(path_str.as_str()), None).unwrap();
        assert_eq!(config.base_url, "http://from-file");

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
