use clap::Parser;
use prohibit_icons::core::ConfigProvider;
use prohibit_icons::utils::error::ErrorSeverity;
use prohibit_icons::utils::logger;
use prohibit_icons::{renderer_for, CliConfig, IconGenerator, LocalStorage};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting prohibit-icons");
    tracing::debug!("CLI config: {:?}", config);

    let settings = match config.resolve() {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!("❌ Configuration validation failed: {}", e);
            tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    };

    let storage = LocalStorage::new(settings.output_dir());
    let generator = IconGenerator::new(storage, renderer_for(settings.renderer()), settings.sizes());

    if config.dry_run {
        tracing::info!("🔍 DRY RUN MODE - No files will be written");
        for spec in generator.specs() {
            println!(
                "Would create: {}/{} ({}x{}, {} renderer)",
                settings.output_dir(),
                spec.file_name(),
                spec.size,
                spec.size,
                generator.renderer_name()
            );
        }
        return Ok(());
    }

    match generator.run() {
        Ok(report) => {
            for outcome in &report.outcomes {
                let label = if outcome.used_fallback {
                    "Minimal icon created"
                } else {
                    "Icon created"
                };
                println!(
                    "{}: {} ({}x{})",
                    label,
                    outcome.path.display(),
                    outcome.spec.size,
                    outcome.spec.size
                );
            }
            if report.fallback_count() > 0 {
                tracing::warn!(
                    "⚠️ {} icon(s) fell back to the minimal placeholder",
                    report.fallback_count()
                );
            }
            println!("✅ All icons created!");
        }
        Err(e) => {
            tracing::error!(
                "❌ Icon generation failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());

            let exit_code = match e.severity() {
                ErrorSeverity::Low => 0,
                ErrorSeverity::Medium => 2,
                ErrorSeverity::High => 1,
                ErrorSeverity::Critical => 3,
            };

            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}
