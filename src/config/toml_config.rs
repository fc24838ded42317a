use crate::config::{IconSettings, DEFAULT_OUTPUT_DIR, DEFAULT_SIZES};
use crate::core::{ConfigProvider, RendererKind};
use crate::utils::error::{IconError, Result};
use crate::utils::validation::Validate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub render: RenderConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_output_dir")]
    pub dir: String,
    #[serde(default = "default_sizes")]
    pub sizes: Vec<u32>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: default_output_dir(),
            sizes: default_sizes(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RenderConfig {
    #[serde(default)]
    pub renderer: RendererKind,
}

fn default_output_dir() -> String {
    DEFAULT_OUTPUT_DIR.to_string()
}

fn default_sizes() -> Vec<u32> {
    DEFAULT_SIZES.to_vec()
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(|e| {
            IconError::ConfigValidationError {
                field: "config".to_string(),
                message: format!("cannot read {}: {}", path.as_ref().display(), e),
            }
        })?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| IconError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${ICON_DIR})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| IconError::ConfigValidationError {
            field: "env_substitution".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn settings(&self) -> IconSettings {
        IconSettings {
            output_dir: self.output.dir.clone(),
            sizes: self.output.sizes.clone(),
            renderer: self.render.renderer,
        }
    }
}

impl ConfigProvider for TomlConfig {
    fn output_dir(&self) -> &str {
        &self.output.dir
    }

    fn sizes(&self) -> &[u32] {
        &self.output.sizes
    }

    fn renderer(&self) -> RendererKind {
        self.render.renderer
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.settings().validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_basic_toml_config() {
        let toml_content = r#"
[output]
dir = "./extension/icons"
sizes = [16, 32]

[render]
renderer = "canvas"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.output_dir(), "./extension/icons");
        assert_eq!(config.sizes(), &[16, 32]);
        assert_eq!(config.renderer(), RendererKind::Canvas);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let config = TomlConfig::from_toml_str("").unwrap();
        assert_eq!(config.settings(), IconSettings::default());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("PROHIBIT_ICONS_TEST_DIR", "/tmp/prohibit-icons");

        let toml_content = r#"
[output]
dir = "${PROHIBIT_ICONS_TEST_DIR}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.output.dir, "/tmp/prohibit-icons");

        std::env::remove_var("PROHIBIT_ICONS_TEST_DIR");
    }

    #[test]
    fn test_config_validation() {
        let toml_content = r#"
[output]
sizes = [16, 4096]
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_unknown_renderer_is_parse_error() {
        let result = TomlConfig::from_toml_str("[render]\nrenderer = \"svg\"\n");
        assert!(matches!(
            result,
            Err(IconError::ConfigValidationError { .. })
        ));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[output]\ndir = \"file-icons\"\n")
            .unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.output.dir, "file-icons");
        assert_eq!(config.output.sizes, vec![16, 48, 128]);
    }
}
