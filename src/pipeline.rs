use crate::config::{Locale, PipelineConfig};
use crate::error::PipelineResult;
use crate::tcg::CatalogSource;
use crate::utils::files::collect_images;
use crate::utils::images::convert_all;
use crate::verify::verify;
use std::path::PathBuf;
use tracing::info;

fn collect_and_verify(
    locale: &Locale,
    catalog: &dyn CatalogSource,
    config: &PipelineConfig,
) -> PipelineResult<Vec<PathBuf>> {
    info!(">>> Processing directory: {}", locale.source.display());

    let collector = collect_images(&locale.source, &config.exclusion_dir, &config.extensions)?;
    verify(&collector, catalog, &config.skipped_pack)?;
    Ok(collector)
}

/// One locale run: collect, verify against the catalog, then rebuild the
/// destination tree.
pub fn process(
    locale: &Locale,
    catalog: &dyn CatalogSource,
    config: &PipelineConfig,
) -> PipelineResult<()> {
    let collector = collect_and_verify(locale, catalog, config)?;
    convert_all(
        &collector,
        &locale.destination,
        &config.presets,
        &config.output_extension,
    )
}

/// Process every configured locale in order, stopping at the first failure.
pub fn run(config: &PipelineConfig, catalog: &dyn CatalogSource) -> PipelineResult<()> {
    for locale in &config.locales {
        process(locale, catalog, config)?;
    }
    Ok(())
}

/// Coverage check only; destination trees are left untouched.
pub fn verify_only(config: &PipelineConfig, catalog: &dyn CatalogSource) -> PipelineResult<()> {
    for locale in &config.locales {
        collect_and_verify(locale, catalog, config)?;
    }
    Ok(())
}
