//! Configuration management for textlens using the prefer crate.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Config file stem discovered by prefer (`textlens.toml`, `textlens.json`, ...).
pub const CONFIG_NAME: &str = "textlens";

/// External extraction tools.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolsConfig {
    /// Poppler `pdftotext` binary.
    #[serde(default = "default_pdftotext")]
    pub pdftotext: String,
    /// Poppler `pdfinfo` binary, used for page counts.
    #[serde(default = "default_pdfinfo")]
    pub pdfinfo: String,
    /// `antiword` binary for legacy binary .doc files.
    #[serde(default = "default_antiword")]
    pub antiword: String,
}

fn default_pdftotext() -> String {
    "pdftotext".to_string()
}

fn default_pdfinfo() -> String {
    "pdfinfo".to_string()
}

fn default_antiword() -> String {
    "antiword".to_string()
}

impl Default for ToolsConfig {
    fn default() -> Self {
        Self {
            pdftotext: default_pdftotext(),
            pdfinfo: default_pdfinfo(),
            antiword: default_antiword(),
        }
    }
}

impl ToolsConfig {
    /// Apply `TEXTLENS_*` environment variable overrides, then expand `~`.
    pub fn resolve_env(self) -> Self {
        self.with_overrides(env_override).expand_paths()
    }

    fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(v) = lookup("TEXTLENS_PDFTOTEXT") {
            self.pdftotext = v;
        }
        if let Some(v) = lookup("TEXTLENS_PDFINFO") {
            self.pdfinfo = v;
        }
        if let Some(v) = lookup("TEXTLENS_ANTIWORD") {
            self.antiword = v;
        }
        self
    }

    /// Expand `~` in tool paths.
    fn expand_paths(mut self) -> Self {
        for tool in [&mut self.pdftotext, &mut self.pdfinfo, &mut self.antiword] {
            *tool = shellexpand::tilde(tool.as_str()).into_owned();
        }
        self
    }
}

fn env_override(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|s| !s.is_empty())
}

/// Output settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Emit JSON instead of the text report.
    #[serde(default)]
    pub json: bool,
}

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub tools: ToolsConfig,
    #[serde(default)]
    pub output: OutputConfig,
    /// File this config was loaded from, if any.
    #[serde(skip)]
    pub source_path: Option<PathBuf>,
}

impl Config {
    /// Load configuration using prefer crate for discovery.
    /// Falls back to defaults when no config file is found.
    pub async fn load() -> Self {
        match prefer::load(CONFIG_NAME).await {
            Ok(pref_config) => {
                if let Some(path) = pref_config.source_path() {
                    match Self::load_from_path(path).await {
                        Ok(config) => config,
                        Err(e) => {
                            tracing::warn!("Ignoring config {}: {}", path.display(), e);
                            Self::default_with_env()
                        }
                    }
                } else {
                    Self::default_with_env()
                }
            }
            Err(_) => Self::default_with_env(),
        }
    }

    /// Default config with environment variable overrides applied.
    pub fn default_with_env() -> Self {
        Self {
            tools: ToolsConfig::default().resolve_env(),
            ..Self::default()
        }
    }

    /// Load configuration from a specific file path.
    /// Format is chosen by extension: TOML, YAML, or JSON (default).
    pub async fn load_from_path(path: &Path) -> Result<Self, String> {
        let contents = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| format!("Failed to read config file: {}", e))?;

        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

        let mut config = Self::parse(&contents, ext)?;
        config.source_path = Some(path.to_path_buf());
        Ok(config)
    }

    /// Parse config text in the given format and apply env overrides.
    pub fn parse(contents: &str, ext: &str) -> Result<Self, String> {
        let config: Config = match ext {
            "toml" => toml::from_str(contents)
                .map_err(|e| format!("Failed to parse TOML config: {}", e))?,
            "yaml" | "yml" => serde_yaml::from_str(contents)
                .map_err(|e| format!("Failed to parse YAML config: {}", e))?,
            _ => serde_json::from_str(contents)
                .map_err(|e| format!("Failed to parse JSON config: {}", e))?,
        };

        Ok(Self {
            tools: config.tools.resolve_env(),
            ..config
        })
    }

    /// Render the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

/// Options controlling where configuration comes from.
#[derive(Debug, Clone, Default)]
pub struct LoadOptions {
    /// Explicit config file (skips discovery).
    pub config_path: Option<PathBuf>,
}

/// Load configuration honoring an explicit path before discovery.
pub async fn load_config(options: &LoadOptions) -> anyhow::Result<Config> {
    if let Some(ref path) = options.config_path {
        if !path.exists() {
            anyhow::bail!("Config file not found: {}", path.display());
        }
        let config = Config::load_from_path(path)
            .await
            .map_err(|e| anyhow::anyhow!(e))?;
        tracing::debug!("Loaded config from {}", path.display());
        return Ok(config);
    }

    let config = Config::load().await;
    if let Some(ref path) = config.source_path {
        tracing::debug!("Discovered config at {}", path.display());
    }
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.tools.pdftotext, "pdftotext");
        assert_eq!(config.tools.pdfinfo, "pdfinfo");
        assert_eq!(config.tools.antiword, "antiword");
        assert!(!config.output.json);
    }

    #[test]
    fn test_parse_toml_partial() {
        let config = Config::parse(
            "[tools]\npdftotext = \"/opt/poppler/bin/pdftotext\"\n\n[output]\njson = true\n",
            "toml",
        )
        .unwrap();
        assert_eq!(config.tools.pdftotext, "/opt/poppler/bin/pdftotext");
        assert_eq!(config.tools.pdfinfo, "pdfinfo");
        assert!(config.output.json);
    }

    #[test]
    fn test_parse_yaml() {
        let config = Config::parse("output:\n  json: true\n", "yaml").unwrap();
        assert!(config.output.json);
    }

    #[test]
    fn test_parse_json_empty_object() {
        let config = Config::parse("{}", "json").unwrap();
        assert_eq!(config.tools.antiword, "antiword");
    }

    #[test]
    fn test_parse_invalid() {
        let err = Config::parse("tools = [", "toml").unwrap_err();
        assert!(err.contains("TOML"));
    }

    #[tokio::test]
    async fn test_load_from_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("textlens.toml");
        std::fs::write(&path, "[output]\njson = true\n").unwrap();

        let config = Config::load_from_path(&path).await.unwrap();
        assert!(config.output.json);
        assert_eq!(config.source_path.as_deref(), Some(path.as_path()));
    }

    #[tokio::test]
    async fn test_load_config_missing_explicit_path() {
        let options = LoadOptions {
            config_path: Some(PathBuf::from("/nonexistent/textlens.toml")),
        };
        assert!(load_config(&options).await.is_err());
    }

    #[test]
    fn test_overrides_are_tilde_expanded() {
        let tools = ToolsConfig::default()
            .with_overrides(|name| match name {
                "TEXTLENS_PDFTOTEXT" => Some("~/bin/pdftotext".to_string()),
                "TEXTLENS_ANTIWORD" => Some("/usr/local/bin/antiword".to_string()),
                _ => None,
            })
            .expand_paths();

        assert_eq!(tools.pdftotext, shellexpand::tilde("~/bin/pdftotext"));
        assert_eq!(tools.pdfinfo, "pdfinfo");
        assert_eq!(tools.antiword, "/usr/local/bin/antiword");
    }

    #[test]
    fn test_unset_env_has_no_override() {
        assert_eq!(env_override("TEXTLENS_TEST_UNSET_VARIABLE"), None);
    }

    #[test]
    fn test_to_toml_round_trips_tools() {
        let rendered = Config::default().to_toml().unwrap();
        assert!(rendered.contains("pdftotext = \"pdftotext\""));
    }
}
