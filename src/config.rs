use crate::error::ConfigError;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_ENDPOINT: &str = "https://reqres.in/api/users";
pub const DEFAULT_BANNER_TTL: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub endpoint: String,
    /// `None` means the request may wait indefinitely.
    pub timeout: Option<Duration>,
    pub log_file: Option<PathBuf>,
    pub banner_ttl: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout: None,
            log_file: None,
            banner_ttl: DEFAULT_BANNER_TTL,
        }
    }
}

/// Optional YAML config file. Every key may be omitted.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub endpoint: Option<String>,
    pub timeout_secs: Option<u64>,
    pub log_file: Option<PathBuf>,
    pub banner_ttl_secs: Option<u64>,
}

/// Values coming from the command line or environment; these win over the
/// file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub endpoint: Option<String>,
    pub timeout_secs: Option<u64>,
    pub log_file: Option<PathBuf>,
}

impl FileConfig {
    pub fn from_yaml_str(source: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(source)?)
    }

    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_yaml::from_str(&source).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

impl Config {
    /// Defaults, then the file, then overrides.
    pub fn resolve(file: Option<FileConfig>, overrides: Overrides) -> Result<Self, ConfigError> {
        let file = file.unwrap_or_default();
        let mut config = Self::default();

        if let Some(endpoint) = overrides.endpoint.or(file.endpoint) {
            config.endpoint = endpoint;
        }
        if let Some(secs) = overrides.timeout_secs.or(file.timeout_secs) {
            if secs == 0 {
                return Err(ConfigError::ZeroDuration("timeout_secs"));
            }
            config.timeout = Some(Duration::from_secs(secs));
        }
        config.log_file = overrides.log_file.or(file.log_file);
        if let Some(secs) = file.banner_ttl_secs {
            if secs == 0 {
                return Err(ConfigError::ZeroDuration("banner_ttl_secs"));
            }
            config.banner_ttl = Duration::from_secs(secs);
        }

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let endpoint = self.endpoint.trim();
        let has_scheme = ["http://", "https://"].iter().any(|scheme| {
            endpoint
                .get(..scheme.len())
                .is_some_and(|prefix| prefix.eq_ignore_ascii_case(scheme))
                && endpoint.len() > scheme.len()
        });
        if has_scheme {
            Ok(())
        } else {
            Err(ConfigError::InvalidEndpoint(self.endpoint.clone()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Config, DEFAULT_ENDPOINT, FileConfig, Overrides};
    use crate::error::ConfigError;
    use std::path::PathBuf;
    use std::time::Duration;

    fn scratch_file(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "onboarding-{}-{name}.yaml",
            std::process::id()
        ));
        std::fs::write(&path, contents).expect("write config");
        path
    }

    #[test]
    fn defaults_without_sources() {
        let config = Config::resolve(None, Overrides::default()).expect("config");
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.timeout, None);
        assert_eq!(config.log_file, None);
    }

    #[test]
    fn overrides_win_over_file() {
        let file = FileConfig::from_yaml_str(
            "endpoint: http://file.local/users\ntimeout_secs: 3\nbanner_ttl_secs: 9\n",
        )
        .expect("yaml");
        let overrides = Overrides {
            endpoint: Some("http://cli.local/users".into()),
            ..Overrides::default()
        };

        let config = Config::resolve(Some(file), overrides).expect("config");
        assert_eq!(config.endpoint, "http://cli.local/users");
        assert_eq!(config.timeout, Some(Duration::from_secs(3)));
        assert_eq!(config.banner_ttl, Duration::from_secs(9));
    }

    #[test]
    fn rejects_endpoint_without_http_scheme() {
        let overrides = Overrides {
            endpoint: Some("ftp://example.com".into()),
            ..Overrides::default()
        };
        assert!(matches!(
            Config::resolve(None, overrides),
            Err(ConfigError::InvalidEndpoint(_))
        ));
    }

    #[test]
    fn rejects_zero_timeout_and_unknown_keys() {
        let overrides = Overrides {
            timeout_secs: Some(0),
            ..Overrides::default()
        };
        assert!(matches!(
            Config::resolve(None, overrides),
            Err(ConfigError::ZeroDuration("timeout_secs"))
        ));
        assert!(FileConfig::from_yaml_str("retries: 3\n").is_err());
    }

    #[test]
    fn loads_file_from_disk() {
        let path = scratch_file(
            "valid",
            "endpoint: https://example.test/users\nlog_file: /tmp/onboarding.log\n",
        );
        let file = FileConfig::from_path(&path).expect("file config");
        let _ = std::fs::remove_file(&path);

        let config = Config::resolve(Some(file), Overrides::default()).expect("config");
        assert_eq!(config.endpoint, "https://example.test/users");
        assert_eq!(config.log_file, Some(PathBuf::from("/tmp/onboarding.log")));
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let path = std::env::temp_dir().join("onboarding-does-not-exist.yaml");
        match FileConfig::from_path(&path) {
            Err(ConfigError::Read { path: reported, .. }) => assert_eq!(reported, path),
            other => panic!("expected read error, got {other:?}"),
        }
    }

    #[test]
    fn malformed_file_is_a_parse_error() {
        let path = scratch_file("malformed", "timeout_secs: [not, a, number]\n");
        let result = FileConfig::from_path(&path);
        let _ = std::fs::remove_file(&path);

        match result {
            Err(ConfigError::Parse { path: reported, .. }) => assert_eq!(reported, path),
            other => panic!("expected parse error, got {other:?}"),
        }
    }
}
