pub mod cli;
pub mod toml_config;

use crate::core::{ConfigProvider, RendererKind};
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};

pub const DEFAULT_OUTPUT_DIR: &str = "icons";
pub const DEFAULT_SIZES: [u32; 3] = [16, 48, 128];

/// Fully resolved settings for one generation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IconSettings {
    pub output_dir: String,
    pub sizes: Vec<u32>,
    pub renderer: RendererKind,
}

impl Default for IconSettings {
    fn default() -> Self {
        Self {
            output_dir: DEFAULT_OUTPUT_DIR.to_string(),
            sizes: DEFAULT_SIZES.to_vec(),
            renderer: RendererKind::default(),
        }
    }
}

impl ConfigProvider for IconSettings {
    fn output_dir(&self) -> &str {
        &self.output_dir
    }

    fn sizes(&self) -> &[u32] {
        &self.sizes
    }

    fn renderer(&self) -> RendererKind {
        self.renderer
    }
}

impl Validate for IconSettings {
    fn validate(&self) -> Result<()> {
        validation::validate_path("output_dir", &self.output_dir)?;
        validation::validate_icon_sizes("sizes", &self.sizes)?;
        Ok(())
    }
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, clap::Parser)]
#[command(name = "prohibit-icons")]
#[command(about = "Generate the prohibited-sign PNG icons for the browser extension")]
pub struct CliConfig {
    /// Directory the icon files are written to [default: icons]
    #[arg(long)]
    pub output_dir: Option<String>,

    /// Comma separated icon sizes [default: 16,48,128]
    #[arg(long, value_delimiter = ',')]
    pub sizes: Option<Vec<u32>>,

    /// How the icons are drawn and encoded [default: encoded]
    #[arg(long, value_enum)]
    pub renderer: Option<RendererKind>,

    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Show what would be written without writing anything
    #[arg(long)]
    pub dry_run: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// 先載入設定檔（若有），再套用命令列覆蓋
    pub fn resolve(&self) -> Result<IconSettings> {
        let mut settings = match &self.config {
            Some(path) => {
                tracing::info!("📁 Loading configuration from: {}", path);
                toml_config::TomlConfig::from_file(path)?.settings()
            }
            None => IconSettings::default(),
        };

        if let Some(dir) = &self.output_dir {
            settings.output_dir = dir.clone();
        }
        if let Some(sizes) = &self.sizes {
            settings.sizes = sizes.clone();
        }
        if let Some(renderer) = self.renderer {
            settings.renderer = renderer;
        }

        settings.validate()?;
        Ok(settings)
    }
}
