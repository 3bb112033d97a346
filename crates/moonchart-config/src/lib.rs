use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_BIND: &str = "127.0.0.1:8000";
pub const DEFAULT_EPHEMERIS_PATH: &str = "/usr/local/share/swisseph";
pub const DEFAULT_HOUSE_SYSTEM: &str = "placidus";
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Front-end dev servers allowed to call the API out of the box.
pub const DEFAULT_ALLOWED_ORIGINS: &[&str] = &["http://localhost:3000", "http://localhost:8000"];

const CONFIG_PATHS: &[&str] = &["configs/moonchart.toml", "../../configs/moonchart.toml"];

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub bind: String,
    pub allowed_origins: Vec<String>,
    pub log_filter: String,
    pub ephemeris_path: PathBuf,
    pub house_system: String,
    pub modern_rulers: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bind: DEFAULT_BIND.to_string(),
            allowed_origins: DEFAULT_ALLOWED_ORIGINS.iter().map(|s| s.to_string()).collect(),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            ephemeris_path: PathBuf::from(DEFAULT_EPHEMERIS_PATH),
            house_system: DEFAULT_HOUSE_SYSTEM.to_string(),
            modern_rulers: true,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
struct ServerToml {
    #[serde(default)]
    bind: Option<String>,
    #[serde(default)]
    allowed_origins: Option<Vec<String>>,
    #[serde(default)]
    log_filter: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct EphemerisToml {
    #[serde(default)]
    path: Option<PathBuf>,
    #[serde(default)]
    house_system: Option<String>,
    #[serde(default)]
    modern_rulers: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct RootConfigToml {
    #[serde(default)]
    server: ServerToml,
    #[serde(default)]
    ephemeris: EphemerisToml,
}

/// An explicit path must exist; otherwise try the usual relative locations
/// and settle for defaults when none is there.
pub fn read_config_text(path: Option<&Path>) -> anyhow::Result<Option<String>> {
    if let Some(p) = path {
        let text = fs::read_to_string(p)
            .map_err(|e| anyhow::anyhow!("Could not read config {}: {e}", p.display()))?;
        return Ok(Some(text));
    }
    for p in CONFIG_PATHS {
        if let Ok(c) = fs::read_to_string(p) {
            return Ok(Some(c));
        }
    }
    Ok(None)
}

pub fn parse_settings(text: &str) -> anyhow::Result<Settings> {
    let root: RootConfigToml = toml::from_str(text)
        .map_err(|e| anyhow::anyhow!("Failed to parse moonchart config: {e}"))?;
    let RootConfigToml { server, ephemeris } = root;
    let defaults = Settings::default();
    Ok(Settings {
        bind: server.bind.unwrap_or(defaults.bind),
        allowed_origins: server.allowed_origins.unwrap_or(defaults.allowed_origins),
        log_filter: server.log_filter.unwrap_or(defaults.log_filter),
        ephemeris_path: ephemeris.path.unwrap_or(defaults.ephemeris_path),
        house_system: ephemeris.house_system.unwrap_or(defaults.house_system),
        modern_rulers: ephemeris.modern_rulers.unwrap_or(defaults.modern_rulers),
    })
}

/// `SWISS_EPHEMERIS_PATH` and `MOONCHART_BIND` win over the file.
pub fn apply_env_overrides<F>(mut settings: Settings, var: F) -> Settings
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(path) = var("SWISS_EPHEMERIS_PATH").filter(|v| !v.is_empty()) {
        settings.ephemeris_path = PathBuf::from(path);
    }
    if let Some(bind) = var("MOONCHART_BIND").filter(|v| !v.is_empty()) {
        settings.bind = bind;
    }
    settings
}

pub fn load_settings(path: Option<&Path>) -> anyhow::Result<Settings> {
    let settings = match read_config_text(path)? {
        Some(text) => parse_settings(&text)?,
        None => Settings::default(),
    };
    Ok(apply_env_overrides(settings, |k| std::env::var(k).ok()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_empty_config_gives_defaults() {
        assert_eq!(parse_settings("").unwrap(), Settings::default());
    }

    #[test]
    fn test_partial_config() {
        let text = r#"
            [server]
            bind = "0.0.0.0:9000"

            [ephemeris]
            path = "/srv/ephe"
            house_system = "whole_sign"
            modern_rulers = false
        "#;
        let s = parse_settings(text).unwrap();
        assert_eq!(s.bind, "0.0.0.0:9000");
        assert_eq!(s.ephemeris_path, PathBuf::from("/srv/ephe"));
        assert_eq!(s.house_system, "whole_sign");
        assert!(!s.modern_rulers);
        assert_eq!(s.allowed_origins, Settings::default().allowed_origins);
    }

    #[test]
    fn test_bad_toml_is_an_error() {
        assert!(parse_settings("[server\nbind = 1").is_err());
    }

    #[test]
    fn test_env_overrides() {
        let s = apply_env_overrides(Settings::default(), |k| match k {
            "SWISS_EPHEMERIS_PATH" => Some("/opt/ephe".to_string()),
            "MOONCHART_BIND" => Some(String::new()),
            _ => None,
        });
        assert_eq!(s.ephemeris_path, PathBuf::from("/opt/ephe"));
        assert_eq!(s.bind, DEFAULT_BIND);
    }

    #[test]
    fn test_explicit_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[server]\nlog_filter = \"debug\"").unwrap();
        let text = read_config_text(Some(file.path())).unwrap().unwrap();
        assert_eq!(parse_settings(&text).unwrap().log_filter, "debug");

        assert!(read_config_text(Some(Path::new("/no/such/moonchart.toml"))).is_err());
    }
}
