use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Deserialize;

use autoparse_core::DEFAULT_API_URL;

pub const ENV_API_URL: &str = "AUTOPARSE_API_URL";
pub const ENV_LOG_FILE: &str = "AUTOPARSE_LOG_FILE";

/// Contents of `config.toml`. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub api_url: Option<String>,
    pub log_file: Option<PathBuf>,
}

/// `<config dir>/autoparse/config.toml`.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("autoparse").join("config.toml"))
}

/// Load the config file.
///
/// An explicitly requested file must exist; the default location is optional.
pub fn load_file(explicit: Option<&Path>) -> anyhow::Result<FileConfig> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => match default_config_path() {
            Some(path) if path.exists() => path,
            _ => return Ok(FileConfig::default()),
        },
    };
    let text = std::fs::read_to_string(&path)
        .with_context(|| format!("reading config file {}", path.display()))?;
    let config = toml::from_str(&text)
        .with_context(|| format!("parsing config file {}", path.display()))?;
    log::debug!("loaded config from {}", path.display());
    Ok(config)
}

/// Values given on the command line.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub api_url: Option<String>,
    pub log_file: Option<PathBuf>,
}

/// Effective settings after layering CLI flags > env vars > config file > defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub api_url: String,
    pub log_file: Option<PathBuf>,
}

impl Settings {
    pub fn resolve(
        cli: CliOverrides,
        env: impl Fn(&str) -> Option<String>,
        file: FileConfig,
    ) -> Self {
        let non_empty = |v: String| if v.trim().is_empty() { None } else { Some(v) };

        let api_url = cli
            .api_url
            .and_then(non_empty)
            .or_else(|| env(ENV_API_URL).and_then(non_empty))
            .or_else(|| file.api_url.and_then(non_empty))
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());
        let log_file = cli
            .log_file
            .or_else(|| env(ENV_LOG_FILE).and_then(non_empty).map(PathBuf::from))
            .or(file.log_file);

        Self { api_url, log_file }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let s = Settings::resolve(CliOverrides::default(), env(&[]), FileConfig::default());
        assert_eq!(s.api_url, DEFAULT_API_URL);
        assert_eq!(s.log_file, None);
    }

    #[test]
    fn cli_beats_env_beats_file() {
        let file = FileConfig {
            api_url: Some("http://file".into()),
            log_file: Some("/file.log".into()),
        };
        let s = Settings::resolve(
            CliOverrides::default(),
            env(&[(ENV_API_URL, "http://env")]),
            file.clone(),
        );
        assert_eq!(s.api_url, "http://env");
        assert_eq!(s.log_file, Some(PathBuf::from("/file.log")));

        let s = Settings::resolve(
            CliOverrides {
                api_url: Some("http://cli".into()),
                log_file: None,
            },
            env(&[(ENV_API_URL, "http://env"), (ENV_LOG_FILE, "/env.log")]),
            file,
        );
        assert_eq!(s.api_url, "http://cli");
        assert_eq!(s.log_file, Some(PathBuf::from("/env.log")));
    }

    #[test]
    fn blank_values_fall_through() {
        let s = Settings::resolve(
            CliOverrides::default(),
            env(&[(ENV_API_URL, "  ")]),
            FileConfig {
                api_url: Some("http://file".into()),
                log_file: None,
            },
        );
        assert_eq!(s.api_url, "http://file");
    }

    #[test]
    fn explicit_file_is_parsed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "api_url = \"http://localhost:8000\"\nlog_file = \"/tmp/a.log\"\n")
            .unwrap();
        let config = load_file(Some(&path)).unwrap();
        assert_eq!(config.api_url.as_deref(), Some("http://localhost:8000"));
        assert_eq!(config.log_file, Some(PathBuf::from("/tmp/a.log")));
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_file(Some(&dir.path().join("nope.toml"))).is_err());
    }

    #[test]
    fn invalid_toml_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "api_url = [").unwrap();
        assert!(load_file(Some(&path)).is_err());
    }
}
