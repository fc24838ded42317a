use crate::core::png;
use crate::domain::model::{PixelBuffer, Rgba};
use crate::domain::ports::IconRenderer;
use crate::utils::error::Result;

/// 對角線與外框的像素寬度
const STROKE: f64 = 3.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelClass {
    Transparent,
    Ring,
    Fill,
    Diagonal,
}

impl PixelClass {
    pub fn color(self) -> Rgba {
        match self {
            PixelClass::Transparent => Rgba::TRANSPARENT,
            PixelClass::Ring | PixelClass::Diagonal => Rgba::WHITE,
            PixelClass::Fill => Rgba::BRAND_BLUE,
        }
    }
}

/// Classifies a pixel of a `size` x `size` icon by its offset from the centre.
///
/// Both diagonals are drawn, so the mark reads as an "X" inside the disc.
pub fn classify(size: u32, x: u32, y: u32) -> PixelClass {
    let center = (size / 2) as i64;
    let radius = (size / 3) as f64;
    let dx = x as i64 - center;
    let dy = y as i64 - center;
    let distance = ((dx * dx + dy * dy) as f64).sqrt();

    if distance > radius {
        PixelClass::Transparent
    } else if ((dx - dy).abs() as f64) < STROKE || ((dx + dy).abs() as f64) < STROKE {
        PixelClass::Diagonal
    } else if distance > radius - STROKE {
        PixelClass::Ring
    } else {
        PixelClass::Fill
    }
}

pub fn render_pixels(size: u32) -> PixelBuffer {
    let mut buffer = PixelBuffer::new(size, size);
    for y in 0..size {
        for x in 0..size {
            buffer.set(x, y, classify(size, x, y).color());
        }
    }
    buffer
}

/// Hand-encoded PNG renderer, no imaging library involved.
#[derive(Debug, Clone, Copy, Default)]
pub struct EncodedRenderer;

impl IconRenderer for EncodedRenderer {
    fn name(&self) -> &'static str {
        "encoded"
    }

    fn render(&self, size: u32) -> Result<Vec<u8>> {
        let pixels = render_pixels(size);
        png::encode_rgba(pixels.width(), pixels.height(), pixels.as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_known_pixels_48() {
        // center = 24, radius = 16
        assert_eq!(classify(48, 0, 0), PixelClass::Transparent);
        assert_eq!(classify(48, 24, 24), PixelClass::Diagonal);
        assert_eq!(classify(48, 30, 18), PixelClass::Diagonal);
        assert_eq!(classify(48, 24, 9), PixelClass::Ring);
        assert_eq!(classify(48, 24, 14), PixelClass::Fill);
        assert_eq!(classify(48, 24, 7), PixelClass::Transparent);
    }

    #[test]
    fn test_pattern_is_symmetric() {
        let size = 128;
        let c = size / 2;
        for d in 0..c {
            assert_eq!(classify(size, c + d, c), classify(size, c - d, c));
            assert_eq!(classify(size, c, c + d), classify(size, c, c - d));
        }
    }

    #[test]
    fn test_render_pixels_colors() {
        let buffer = render_pixels(16);
        assert_eq!(buffer.get(0, 0), Rgba::TRANSPARENT);
        assert_eq!(buffer.get(8, 8), Rgba::WHITE);
        assert_eq!(buffer.as_bytes().len(), 16 * 16 * 4);
    }

    #[test]
    fn test_encoded_renderer_output_dimensions() {
        let bytes = EncodedRenderer.render(48).unwrap();
        let header = png::read_header(&bytes).unwrap();
        assert_eq!((header.width, header.height), (48, 48));
    }
}
