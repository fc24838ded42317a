use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgba(pub [u8; 4]);

impl Rgba {
    pub const TRANSPARENT: Rgba = Rgba([0, 0, 0, 0]);
    pub const WHITE: Rgba = Rgba([255, 255, 255, 255]);
    /// #667eea
    pub const BRAND_BLUE: Rgba = Rgba([102, 126, 234, 255]);
}

/// Row-major RGBA8 pixels.
#[derive(Debug, Clone)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl PixelBuffer {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![0; width as usize * height as usize * 4],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn set(&mut self, x: u32, y: u32, color: Rgba) {
        let idx = (y as usize * self.width as usize + x as usize) * 4;
        self.data[idx..idx + 4].copy_from_slice(&color.0);
    }

    #[cfg(test)]
    pub fn get(&self, x: u32, y: u32) -> Rgba {
        let idx = (y as usize * self.width as usize + x as usize) * 4;
        let mut px = [0u8; 4];
        px.copy_from_slice(&self.data[idx..idx + 4]);
        Rgba(px)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IconSpec {
    pub size: u32,
}

impl IconSpec {
    pub fn new(size: u32) -> Self {
        Self { size }
    }

    pub fn file_name(&self) -> String {
        format!("icon{}.png", self.size)
    }
}

#[derive(Debug, Clone)]
pub struct IconOutcome {
    pub spec: IconSpec,
    pub path: PathBuf,
    pub bytes_written: usize,
    pub used_fallback: bool,
}

#[derive(Debug, Clone, Default)]
pub struct GenerationReport {
    pub outcomes: Vec<IconOutcome>,
}

impl GenerationReport {
    pub fn fallback_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.used_fallback).count()
    }
}
