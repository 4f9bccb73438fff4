use anyhow::Context;
use icon_forge::config::asset_root_from_args;
use icon_forge::{AssetError, GenerationReport, IconGenerator, ItemOutcome, Variant};
use std::path::Path;

const LOG_TARGET_STARTUP: &str = "icon_forge::startup";
const LOG_TARGET_GENERATE: &str = "icon_forge::generate";

/// Initialize tracing for console output
///
/// Level comes from `RUST_LOG`, info by default.
fn initialize_tracing() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let console_layer = fmt::layer()
        .with_writer(std::io::stdout)
        .with_ansi(true)
        .with_target(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .init();
}

fn main() -> anyhow::Result<()> {
    initialize_tracing();

    let asset_root = asset_root_from_args(std::env::args());
    tracing::info!(
        target: LOG_TARGET_STARTUP,
        "Starting icon-forge v{} in {}",
        env!("CARGO_PKG_VERSION"),
        asset_root.display()
    );

    // Configuration and backend are checked before touching any file
    let generator = IconGenerator::with_defaults()
        .context("Cannot generate icons: SVG rasterization is not available")?;

    let mut report = generator.discover(&asset_root);
    log_discovery(&report);

    generator.generate(&asset_root, &mut report);
    log_outcomes(&asset_root, &report);

    println!(
        "\nDone: generated {} icon files from {} SVG sources ({} failed, {} skipped)",
        report.generated_count(),
        report.discovered.len(),
        report.failed_count(),
        report.skipped_count()
    );

    Ok(())
}

fn log_discovery(report: &GenerationReport) {
    tracing::info!(
        target: LOG_TARGET_GENERATE,
        "Found {} SVG icons:",
        report.discovered.len()
    );
    for path in &report.discovered {
        tracing::info!(target: LOG_TARGET_GENERATE, "  {}", path.display());
    }
    if !report.special_found.is_empty() {
        tracing::info!(
            target: LOG_TARGET_GENERATE,
            "Orange variants for: {}",
            report.special_found.join(", ")
        );
    }
}

fn log_outcomes(root: &Path, report: &GenerationReport) {
    for path in &report.unpainted {
        tracing::warn!(
            target: LOG_TARGET_GENERATE,
            "{}: no fill/stroke and no <path> element, colours left unchanged",
            path.display()
        );
    }

    for outcome in &report.outcomes {
        match outcome {
            ItemOutcome::Generated { output, variant } => {
                let label = match variant {
                    Variant::Theme => "Generated",
                    Variant::Orange => "Generated orange",
                };
                tracing::info!(target: LOG_TARGET_GENERATE, "{}: {}", label, output.display());
            }
            ItemOutcome::Skipped(e) => {
                tracing::warn!(
                    target: LOG_TARGET_GENERATE,
                    "Skipped {}: {}",
                    display_relative(root, e.path()),
                    cause_of(e)
                );
            }
            ItemOutcome::Failed(e) => {
                tracing::error!(
                    target: LOG_TARGET_GENERATE,
                    "Conversion failed {}: {}",
                    e.path().display(),
                    cause_of(e)
                );
            }
        }
    }
}

/// Underlying cause, or the error itself when it has none
fn cause_of(error: &AssetError) -> String {
    std::error::Error::source(error)
        .map(|s| s.to_string())
        .unwrap_or_else(|| error.to_string())
}

fn display_relative(root: &Path, path: &Path) -> String {
    path.strip_prefix(root).unwrap_or(path).display().to_string()
}
