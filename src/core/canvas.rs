use crate::domain::model::Rgba as Color;
use crate::domain::ports::IconRenderer;
use crate::utils::error::{IconError, Result};
use image::{ImageFormat, Rgba, RgbaImage};
use std::io::Cursor;

/// Geometry of the drawn prohibited sign for one icon size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SignGeometry {
    pub center: f64,
    pub outer_radius: f64,
    pub outer_outline: f64,
    pub inner_radius: f64,
    pub inner_outline: f64,
    pub diagonal_offset: f64,
    pub diagonal_width: f64,
}

impl SignGeometry {
    pub fn for_size(size: u32) -> Self {
        let inner_radius = (size as f64 * 0.25).floor();
        Self {
            center: (size / 2) as f64,
            outer_radius: (size as f64 * 0.45).floor(),
            outer_outline: (size / 32).max(1) as f64,
            inner_radius,
            inner_outline: (size / 16).max(2) as f64,
            diagonal_offset: (inner_radius * 0.7).floor(),
            diagonal_width: (size / 12).max(2) as f64,
        }
    }

    pub fn color_at(&self, x: u32, y: u32) -> Color {
        let dx = x as f64 - self.center;
        let dy = y as f64 - self.center;
        let distance = (dx * dx + dy * dy).sqrt();

        // 邊界框包含端點，像素中心半徑需多半格
        let outer = self.outer_radius + 0.5;
        let inner = self.inner_radius + 0.5;

        let mut color = Color::TRANSPARENT;
        if distance <= outer {
            color = if distance > outer - self.outer_outline {
                Color::WHITE
            } else {
                Color::BRAND_BLUE
            };
        }
        if distance <= inner && distance > inner - self.inner_outline {
            color = Color::WHITE;
        }
        if self.distance_to_diagonal(dx, dy) <= self.diagonal_width / 2.0 {
            color = Color::WHITE;
        }
        color
    }

    /// Distance from an offset to the segment (-d,-d)..(d,d).
    fn distance_to_diagonal(&self, dx: f64, dy: f64) -> f64 {
        let d = self.diagonal_offset;
        if d == 0.0 {
            return (dx * dx + dy * dy).sqrt();
        }
        let t = ((dx + dy) / 2.0).clamp(-d, d);
        let (px, py) = (dx - t, dy - t);
        (px * px + py * py).sqrt()
    }
}

pub fn draw(size: u32) -> RgbaImage {
    let geometry = SignGeometry::for_size(size);
    let mut image = RgbaImage::new(size, size);
    for (x, y, pixel) in image.enumerate_pixels_mut() {
        *pixel = Rgba(geometry.color_at(x, y).0);
    }
    image
}

/// Renders through the `image` crate, which also does the PNG encoding.
#[derive(Debug, Clone, Copy, Default)]
pub struct CanvasRenderer;

impl IconRenderer for CanvasRenderer {
    fn name(&self) -> &'static str {
        "canvas"
    }

    fn render(&self, size: u32) -> Result<Vec<u8>> {
        if size == 0 {
            return Err(IconError::encoding("icon size must be non-zero"));
        }
        let image = draw(size);
        let mut bytes = Vec::new();
        image.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
        Ok(bytes)
    }
}
