use crate::error::PipelineResult;
use crate::tcg::CatalogSource;
use crate::utils::files::card_identifier;
use std::collections::BTreeSet;
use std::path::PathBuf;
use tracing::{info, warn};

/// Catalog codes covered by the collected images.
pub fn local_identifiers(paths: &[PathBuf]) -> BTreeSet<String> {
    paths
        .iter()
        .filter_map(|path| card_identifier(path))
        .map(str::to_string)
        .collect()
}

/// Check the collected images against the catalog and log every card that
/// has no local image.
///
/// Missing cards are reported only; a fetch failure is the sole error.
pub fn verify(
    paths: &[PathBuf],
    catalog: &dyn CatalogSource,
    skipped_pack: &str,
) -> PipelineResult<()> {
    let identifiers = local_identifiers(paths);
    let cards = catalog.fetch_cards()?;

    let mut skipped = 0;
    let mut missing = 0;
    for card in &cards {
        if card.pack_code == skipped_pack {
            skipped += 1;
            continue;
        }

        if !identifiers.contains(&card.code) {
            warn!("> Missing: {} {}", card.code, card.title);
            missing += 1;
        }
    }

    info!(
        "Checked {} cards ({} skipped in pack {}), {} missing",
        cards.len() - skipped,
        skipped,
        skipped_pack,
        missing
    );
    Ok(())
}
