pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::config::{cli::LocalStorage, toml_config::TomlConfig, IconSettings};
pub use crate::core::{generator::IconGenerator, renderer_for, IconSpec, RendererKind};
pub use crate::utils::error::{IconError, Result};
