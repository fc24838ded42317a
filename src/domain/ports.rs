use crate::utils::error::Result;
use std::path::PathBuf;

pub trait Storage {
    /// Writes `data` under `name` and returns the full path written.
    fn write_file(&self, name: &str, data: &[u8]) -> Result<PathBuf>;
}

pub trait ConfigProvider {
    fn output_dir(&self) -> &str;
    fn sizes(&self) -> &[u32];
    fn renderer(&self) -> RendererKind;
}

/// Produces a complete PNG file for a square icon of `size` pixels.
pub trait IconRenderer {
    fn name(&self) -> &'static str;
    fn render(&self, size: u32) -> Result<Vec<u8>>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum RendererKind {
    /// Hand-encoded PNG with the flat prohibited pattern
    #[default]
    Encoded,
    /// Drawn and encoded through the `image` crate
    Canvas,
}

impl<T: IconRenderer + ?Sized> IconRenderer for Box<T> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn render(&self, size: u32) -> Result<Vec<u8>> {
        (**self).render(size)
    }
}
