/// Icon generation pipeline
///
/// discovery -> colour policy -> rasterization per size table -> orange
/// variant. Nothing here prints; every per-file result ends up in the
/// returned `GenerationReport` and the caller decides how to present it.
use crate::config::{IconConfig, OutputSpec};
use crate::discovery::find_svg_files;
use crate::error::{AssetError, SetupError};
use crate::paths::output_path;
use crate::raster::{Rasterizer, ResvgRasterizer};
use crate::recolor::{RecolorRule, Recolored, Recolorer};
use std::fs;
use std::path::{Path, PathBuf};

const LOG_TARGET: &str = "icon_forge::generate";

/// How an icon is treated, decided from its file stem
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconRole {
    /// Tab bar icon; active ones are forced to the theme colour
    Navigation { active: bool },
    /// Theme icon plus an orange variant
    Special,
    Standard,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    Theme,
    Orange,
}

/// A source file read from the asset tree
#[derive(Debug, Clone)]
pub struct SvgAsset {
    pub path: PathBuf,
    /// Path relative to the asset root
    pub relative: PathBuf,
    pub text: String,
}

#[derive(Debug)]
pub enum ItemOutcome {
    /// PNG written; `output` is relative to the asset root
    Generated { output: PathBuf, variant: Variant },
    /// Source file could not be used at all
    Skipped(AssetError),
    /// A single output could not be produced
    Failed(AssetError),
}

#[derive(Debug, Default)]
pub struct GenerationReport {
    /// Relative paths of every SVG found
    pub discovered: Vec<PathBuf>,
    /// Special icon names present in this tree
    pub special_found: Vec<String>,
    /// Sources left uncoloured because they have no paint attribute and no `<path>`
    pub unpainted: Vec<PathBuf>,
    pub outcomes: Vec<ItemOutcome>,
}

impl GenerationReport {
    pub fn generated_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, ItemOutcome::Generated { .. }))
            .count()
    }

    pub fn skipped_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, ItemOutcome::Skipped(_)))
            .count()
    }

    pub fn failed_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, ItemOutcome::Failed(_)))
            .count()
    }
}

pub struct IconGenerator<R = ResvgRasterizer> {
    config: IconConfig,
    recolorer: Recolorer,
    rasterizer: R,
}

impl IconGenerator<ResvgRasterizer> {
    /// Generator with the embedded tables and the resvg backend
    pub fn with_defaults() -> Result<Self, SetupError> {
        Self::new(IconConfig::load_embedded()?, ResvgRasterizer::new())
    }
}

impl<R: Rasterizer> IconGenerator<R> {
    /// Validate the configuration and check the backend before any I/O.
    pub fn new(config: IconConfig, rasterizer: R) -> Result<Self, SetupError> {
        config.validate()?;
        rasterizer.check_available()?;

        Ok(Self {
            config,
            recolorer: Recolorer::new()?,
            rasterizer,
        })
    }

    pub fn config(&self) -> &IconConfig {
        &self.config
    }

    pub fn role(&self, stem: &str) -> IconRole {
        if self.config.is_navigation_icon(stem) {
            IconRole::Navigation {
                active: stem.contains("active"),
            }
        } else if self.config.is_special_icon(stem) {
            IconRole::Special
        } else {
            IconRole::Standard
        }
    }

    /// Theme-coloured text for an icon of the given role
    pub fn theme_variant(&self, role: IconRole, text: &str) -> Recolored {
        let color = &self.config.theme_color;
        match role {
            IconRole::Navigation { active: true } => {
                self.recolorer.recolor_stroke_first(text, color)
            }
            IconRole::Navigation { active: false } => Recolored {
                text: text.to_string(),
                rule: RecolorRule::Unchanged,
            },
            IconRole::Special | IconRole::Standard => self.recolorer.recolor(text, color),
        }
    }

    /// Orange text, always derived from the original source
    pub fn orange_variant(&self, text: &str) -> Recolored {
        self.recolorer.recolor(text, &self.config.orange_color)
    }

    /// Process every SVG under `root` and write PNGs next to them.
    pub fn run(&self, root: &Path) -> GenerationReport {
        let mut report = self.discover(root);
        self.generate(root, &mut report);
        report
    }

    /// Scan `root` without rendering anything: fills `discovered` and
    /// `special_found` so the caller can announce the batch first.
    pub fn discover(&self, root: &Path) -> GenerationReport {
        let files = find_svg_files(root, &self.config.excluded_files);

        let special_found = self
            .config
            .special_icons
            .iter()
            .filter(|name| {
                files
                    .iter()
                    .any(|p| p.file_stem().and_then(|s| s.to_str()) == Some(name.as_str()))
            })
            .cloned()
            .collect();

        tracing::debug!(
            target: LOG_TARGET,
            "Discovered {} SVG files under {}",
            files.len(),
            root.display()
        );

        GenerationReport {
            discovered: files.iter().map(|p| relative_to(root, p)).collect(),
            special_found,
            ..Default::default()
        }
    }

    /// Render every file listed in `report.discovered`, appending outcomes.
    pub fn generate(&self, root: &Path, report: &mut GenerationReport) {
        let files: Vec<PathBuf> = report.discovered.iter().map(|rel| root.join(rel)).collect();

        for path in &files {
            match read_asset(root, path) {
                Ok(asset) => self.process_asset(root, &asset, report),
                Err(e) => report.outcomes.push(ItemOutcome::Skipped(e)),
            }
        }
    }

    fn process_asset(&self, root: &Path, asset: &SvgAsset, report: &mut GenerationReport) {
        let stem = asset
            .relative
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        let role = self.role(&stem);

        let theme = self.theme_variant(role, &asset.text);
        tracing::debug!(
            target: LOG_TARGET,
            "{}: role {:?}, rule {:?}",
            asset.relative.display(),
            role,
            theme.rule
        );
        if theme.rule == RecolorRule::NoPaintTarget {
            report.unpainted.push(asset.relative.clone());
        }

        self.render_table(
            root,
            &asset.relative,
            &theme.text,
            &self.config.standard_outputs,
            Variant::Theme,
            report,
        );

        if role == IconRole::Special {
            let orange = self.orange_variant(&asset.text);
            self.render_table(
                root,
                &asset.relative,
                &orange.text,
                &self.config.orange_outputs,
                Variant::Orange,
                report,
            );
        }
    }

    fn render_table(
        &self,
        root: &Path,
        relative: &Path,
        svg: &str,
        table: &[OutputSpec],
        variant: Variant,
        report: &mut GenerationReport,
    ) {
        for spec in table {
            let output = output_path(relative, &spec.suffix, variant == Variant::Orange);
            let outcome = match self.render_one(svg, spec, &root.join(&output)) {
                Ok(()) => ItemOutcome::Generated { output, variant },
                Err(e) => ItemOutcome::Failed(e),
            };
            report.outcomes.push(outcome);
        }
    }

    fn render_one(&self, svg: &str, spec: &OutputSpec, target: &Path) -> Result<(), AssetError> {
        let png = self
            .rasterizer
            .rasterize(svg, spec.width, spec.height)
            .map_err(|source| AssetError::ConversionFailure {
                path: target.to_path_buf(),
                source,
            })?;

        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent).map_err(|source| AssetError::WriteFailed {
                path: target.to_path_buf(),
                source,
            })?;
        }

        fs::write(target, png).map_err(|source| AssetError::WriteFailed {
            path: target.to_path_buf(),
            source,
        })
    }
}

/// Read one source file as UTF-8 text; empty files are rejected.
pub fn read_asset(root: &Path, path: &Path) -> Result<SvgAsset, AssetError> {
    let text = fs::read_to_string(path).map_err(|source| AssetError::UnreadableSource {
        path: path.to_path_buf(),
        source,
    })?;

    if text.trim().is_empty() {
        return Err(AssetError::EmptySource {
            path: path.to_path_buf(),
        });
    }

    Ok(SvgAsset {
        path: path.to_path_buf(),
        relative: relative_to(root, path),
        text,
    })
}

fn relative_to(root: &Path, path: &Path) -> PathBuf {
    path.strip_prefix(root).unwrap_or(path).to_path_buf()
}
