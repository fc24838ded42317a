use crate::core::png::{self, MINIMAL_PNG};
use crate::domain::model::{GenerationReport, IconOutcome, IconSpec};
use crate::domain::ports::{IconRenderer, Storage};
use crate::utils::error::{IconError, Result};
use std::path::PathBuf;

pub struct IconGenerator<S: Storage, R: IconRenderer> {
    storage: S,
    renderer: R,
    specs: Vec<IconSpec>,
}

impl<S: Storage, R: IconRenderer> IconGenerator<S, R> {
    pub fn new(storage: S, renderer: R, sizes: &[u32]) -> Self {
        Self {
            storage,
            renderer,
            specs: sizes.iter().copied().map(IconSpec::new).collect(),
        }
    }

    pub fn specs(&self) -> &[IconSpec] {
        &self.specs
    }

    pub fn renderer_name(&self) -> &'static str {
        self.renderer.name()
    }

    pub fn run(&self) -> Result<GenerationReport> {
        tracing::info!(
            "🎨 Generating {} icon(s) with the {} renderer",
            self.specs.len(),
            self.renderer.name()
        );

        let mut report = GenerationReport::default();
        for spec in &self.specs {
            let outcome = match self.generate(spec) {
                Ok((path, bytes_written)) => {
                    tracing::info!(
                        "✅ Icon created: {} ({}x{})",
                        path.display(),
                        spec.size,
                        spec.size
                    );
                    IconOutcome {
                        spec: *spec,
                        path,
                        bytes_written,
                        used_fallback: false,
                    }
                }
                Err(e) => {
                    tracing::warn!("⚠️ Failed to create {}: {}", spec.file_name(), e);
                    let path = self.storage.write_file(&spec.file_name(), &MINIMAL_PNG)?;
                    tracing::info!("🩹 Minimal fallback icon created: {}", path.display());
                    IconOutcome {
                        spec: *spec,
                        path,
                        bytes_written: MINIMAL_PNG.len(),
                        used_fallback: true,
                    }
                }
            };
            report.outcomes.push(outcome);
        }

        Ok(report)
    }

    fn generate(&self, spec: &IconSpec) -> Result<(PathBuf, usize)> {
        let bytes = self.renderer.render(spec.size)?;

        let header = png::read_header(&bytes)?;
        if header.width != spec.size || header.height != spec.size {
            return Err(IconError::invalid_png(format!(
                "renderer produced {}x{}, expected {}x{}",
                header.width, header.height, spec.size, spec.size
            )));
        }

        let path = self.storage.write_file(&spec.file_name(), &bytes)?;
        Ok((path, bytes.len()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct MemoryStorage {
        files: RefCell<Vec<(String, Vec<u8>)>>,
    }

    impl Storage for MemoryStorage {
        fn write_file(&self, name: &str, data: &[u8]) -> Result<PathBuf> {
            self.files
                .borrow_mut()
                .push((name.to_string(), data.to_vec()));
            Ok(PathBuf::from(name))
        }
    }

    /// Fails for one size, encodes the rest.
    struct FlakyRenderer {
        failing_size: u32,
    }

    impl IconRenderer for FlakyRenderer {
        fn name(&self) -> &'static str {
            "flaky"
        }

        fn render(&self, size: u32) -> Result<Vec<u8>> {
            if size == self.failing_size {
                return Err(IconError::encoding("boom"));
            }
            png::encode_rgba(size, size, &vec![0u8; (size * size * 4) as usize])
        }
    }

    struct WrongSizeRenderer;

    impl IconRenderer for WrongSizeRenderer {
        fn name(&self) -> &'static str {
            "wrong-size"
        }

        fn render(&self, _size: u32) -> Result<Vec<u8>> {
            png::encode_rgba(2, 2, &[0u8; 16])
        }
    }

    #[test]
    fn test_fallback_replaces_failed_render() {
        let generator = IconGenerator::new(
            MemoryStorage::default(),
            FlakyRenderer { failing_size: 48 },
            &[16, 48, 128],
        );

        let report = generator.run().unwrap();
        assert_eq!(report.outcomes.len(), 3);
        assert_eq!(report.fallback_count(), 1);
        assert!(report.outcomes[1].used_fallback);

        let files = generator.storage.files.borrow();
        let names: Vec<&str> = files.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, vec!["icon16.png", "icon48.png", "icon128.png"]);
        assert_eq!(files[1].1, MINIMAL_PNG.to_vec());
    }

    #[test]
    fn test_specs_follow_configured_order() {
        let generator = IconGenerator::new(
            MemoryStorage::default(),
            FlakyRenderer { failing_size: 0 },
            &[128, 16],
        );
        let names: Vec<String> = generator.specs().iter().map(|s| s.file_name()).collect();
        assert_eq!(names, vec!["icon128.png", "icon16.png"]);
        assert_eq!(generator.renderer_name(), "flaky");
        assert!(generator.storage.files.borrow().is_empty());
    }

    #[test]
    fn test_dimension_mismatch_uses_fallback() {
        let generator = IconGenerator::new(MemoryStorage::default(), WrongSizeRenderer, &[16]);
        let report = generator.run().unwrap();
        assert_eq!(report.fallback_count(), 1);
    }
}
