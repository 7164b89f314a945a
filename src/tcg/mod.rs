use crate::error::PipelineResult;
use serde::Deserialize;

/// One entry of a remote card catalog. Only the fields needed to check image
/// coverage are kept.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CatalogItem {
    pub code: String,
    pub title: String,
    pub pack_code: String,
}

/// Anything able to list the cards a locale is expected to have images for.
pub trait CatalogSource {
    fn fetch_cards(&self) -> PipelineResult<Vec<CatalogItem>>;
}

pub mod nrdb;
