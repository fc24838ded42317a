pub mod canvas;
pub mod generator;
pub mod pattern;
pub mod png;

pub use crate::domain::model::{GenerationReport, IconOutcome, IconSpec, PixelBuffer, Rgba};
pub use crate::domain::ports::{ConfigProvider, IconRenderer, RendererKind, Storage};
pub use crate::utils::error::Result;

pub fn renderer_for(kind: RendererKind) -> Box<dyn IconRenderer> {
    match kind {
        RendererKind::Encoded => Box::new(pattern::EncodedRenderer),
        RendererKind::Canvas => Box::new(canvas::CanvasRenderer),
    }
}
