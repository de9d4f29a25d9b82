use crate::domain::ports::ConfigProvider;
use crate::utils::error::{AnalyzerError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub service: ServiceConfig,
    pub output: Option<OutputConfig>,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    pub endpoint: String,
    pub timeout_seconds: Option<u64>,
    pub headers: Option<HashMap<String, String>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    pub html_path: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
    /// "compact" or "json"
    pub format: Option<String>,
}

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];
const LOG_FORMATS: [&str; 2] = ["compact", "json"];

impl TomlConfig {
    /// Load configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(AnalyzerError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| AnalyzerError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replace `${VAR}` with the environment value; unknown variables are left as-is.
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| AnalyzerError::ConfigError {
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        validation::validate_url("service.endpoint", &self.service.endpoint)?;

        if let Some(timeout) = self.service.timeout_seconds {
            validation::validate_positive_number("service.timeout_seconds", timeout, 1)?;
        }

        if let Some(headers) = &self.service.headers {
            for name in headers.keys() {
                validation::validate_header_name("service.headers", name)?;
            }
        }

        if let Some(path) = self.output.as_ref().and_then(|o| o.html_path.as_deref()) {
            validation::validate_path("output.html_path", path)?;
        }

        if let Some(logging) = &self.logging {
            if let Some(level) = &logging.level {
                if !LOG_LEVELS.contains(&level.as_str()) {
                    return Err(AnalyzerError::InvalidConfigValueError {
                        field: "logging.level".to_string(),
                        value: level.clone(),
                        reason: format!("Valid levels: {}", LOG_LEVELS.join(", ")),
                    });
                }
            }
            if let Some(format) = &logging.format {
                if !LOG_FORMATS.contains(&format.as_str()) {
                    return Err(AnalyzerError::InvalidConfigValueError {
                        field: "logging.format".to_string(),
                        value: format.clone(),
                        reason: format!("Valid formats: {}", LOG_FORMATS.join(", ")),
                    });
                }
            }
        }

        Ok(())
    }

    pub fn log_level(&self) -> &str {
        self.logging
            .as_ref()
            .and_then(|l| l.level.as_deref())
            .unwrap_or("info")
    }

    pub fn json_logging(&self) -> bool {
        self.logging
            .as_ref()
            .and_then(|l| l.format.as_deref())
            .map(|f| f == "json")
            .unwrap_or(false)
    }

    pub fn set_html_path(&mut self, path: String) {
        self.output.get_or_insert_with(OutputConfig::default).html_path = Some(path);
    }
}

impl ConfigProvider for TomlConfig {
    fn endpoint(&self) -> &str {
        &self.service.endpoint
    }

    fn timeout(&self) -> Option<Duration> {
        self.service.timeout_seconds.map(Duration::from_secs)
    }

    fn headers(&self) -> HashMap<String, String> {
        self.service.headers.clone().unwrap_or_default()
    }

    fn html_output_path(&self) -> Option<&str> {
        self.output.as_ref().and_then(|o| o.html_path.as_deref())
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;
    use tokio_test::{assert_err, assert_ok};

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[service]
endpoint = "https://analyzer.example.com/api/analyze"
timeout_seconds = 20
headers = { "X-Api-Key" = "abc" }

[output]
html_path = "./results.html"

[logging]
level = "debug"
format = "json"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.endpoint(), "https://analyzer.example.com/api/analyze");
        assert_eq!(config.timeout(), Some(Duration::from_secs(20)));
        assert_eq!(config.headers().get("X-Api-Key").map(String::as_str), Some("abc"));
        assert_eq!(config.html_output_path(), Some("./results.html"));
        assert_eq!(config.log_level(), "debug");
        assert!(config.json_logging());
        assert_ok!(config.validate());
    }

    #[test]
    fn test_minimal_config_defaults() {
        let config = TomlConfig::from_toml_str(
            r#"
[service]
endpoint = "http://localhost:5000/api/analyze"
"#,
        )
        .unwrap();

        assert_eq!(config.timeout(), None);
        assert!(config.headers().is_empty());
        assert_eq!(config.html_output_path(), None);
        assert_eq!(config.log_level(), "info");
        assert!(!config.json_logging());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("TOPIC_ANALYZER_TEST_ENDPOINT", "https://env.example.com/api/analyze");

        let config = TomlConfig::from_toml_str(
            r#"
[service]
endpoint = "${TOPIC_ANALYZER_TEST_ENDPOINT}"
"#,
        )
        .unwrap();
        assert_eq!(config.endpoint(), "https://env.example.com/api/analyze");

        std::env::remove_var("TOPIC_ANALYZER_TEST_ENDPOINT");
    }

    #[test]
    fn test_unknown_env_var_fails_url_validation() {
        let config = TomlConfig::from_toml_str(
            r#"
[service]
endpoint = "${TOPIC_ANALYZER_UNSET_VARIABLE}"
"#,
        )
        .unwrap();
        assert_eq!(config.endpoint(), "${TOPIC_ANALYZER_UNSET_VARIABLE}");
        assert_err!(config.validate());
    }

    #[test]
    fn test_config_validation() {
        let invalid = [
            "[service]\nendpoint = \"invalid-url\"\n",
            "[service]\nendpoint = \"http://localhost\"\ntimeout_seconds = 0\n",
            "[service]\nendpoint = \"http://localhost\"\n[logging]\nlevel = \"loud\"\n",
            "[service]\nendpoint = \"http://localhost\"\n[logging]\nformat = \"xml\"\n",
        ];

        for content in invalid {
            let config = TomlConfig::from_toml_str(content).unwrap();
            assert!(config.validate().is_err(), "expected invalid: {}", content);
        }
    }

    #[test]
    fn test_missing_service_section_is_parse_error() {
        let err = TomlConfig::from_toml_str("[output]\nhtml_path = \"x.html\"\n").unwrap_err();
        assert!(matches!(err, AnalyzerError::ConfigValidationError { .. }));
    }

    #[test]
    fn test_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[service]\nendpoint = \"http://localhost:5000/api/analyze\"").unwrap();

        let mut config = TomlConfig::from_file(file.path()).unwrap();
        config.set_html_path("page.html".to_string());

        assert_eq!(config.endpoint(), "http://localhost:5000/api/analyze");
        assert_eq!(config.html_output_path(), Some("page.html"));
    }
}
