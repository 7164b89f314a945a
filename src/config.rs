use std::path::PathBuf;

/// NetrunnerDB public card list, see https://netrunnerdb.com/api/2.0/doc
pub const NRDB_CARDS_URL: &str = "https://netrunnerdb.com/api/2.0/public/cards";

/// Folder holding non-card artwork, never converted.
pub const EXCLUSION_DIR: &str = "Others";

/// Terminal Directive Campaign has no localized card scans.
pub const SKIPPED_PACK: &str = "tdc";

pub const SOURCE_EXTENSIONS: [&str; 2] = ["png", "jpg"];

pub const OUTPUT_EXTENSION: &str = "webp";

/// One output resolution tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizePreset {
    pub label: &'static str,
    pub width: u32,
    pub height: u32,
}

impl SizePreset {
    pub const XLARGE: Self = Self::new("xlarge", 750, 1050);
    pub const LARGE: Self = Self::new("large", 300, 420);
    pub const MEDIUM: Self = Self::new("medium", 164, 230);
    pub const SMALL: Self = Self::new("small", 116, 162);
    pub const TINY: Self = Self::new("tiny", 50, 70);

    /// Every preset, in the order they are written.
    pub const ALL: [Self; 5] = [
        Self::XLARGE,
        Self::LARGE,
        Self::MEDIUM,
        Self::SMALL,
        Self::TINY,
    ];

    pub const fn new(label: &'static str, width: u32, height: u32) -> Self {
        Self {
            label,
            width,
            height,
        }
    }
}

/// A source tree and the destination tree rebuilt from it.
#[derive(Debug, Clone)]
pub struct Locale {
    pub name: String,
    pub source: PathBuf,
    pub destination: PathBuf,
}

impl Locale {
    pub fn new(
        name: impl Into<String>,
        source: impl Into<PathBuf>,
        destination: impl Into<PathBuf>,
    ) -> Self {
        Self {
            name: name.into(),
            source: source.into(),
            destination: destination.into(),
        }
    }
}

/// Everything the pipeline needs to know, passed in explicitly so tests can
/// point it at scratch directories and a local catalog.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub locales: Vec<Locale>,
    pub presets: Vec<SizePreset>,
    pub catalog_url: String,
    pub exclusion_dir: String,
    pub skipped_pack: String,
    pub extensions: Vec<String>,
    pub output_extension: String,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            locales: vec![
                Locale::new("zh", "./source/zh", "./webp/zh"),
                Locale::new("en", "./source/en", "./webp/en"),
            ],
            presets: SizePreset::ALL.to_vec(),
            catalog_url: NRDB_CARDS_URL.to_string(),
            exclusion_dir: EXCLUSION_DIR.to_string(),
            skipped_pack: SKIPPED_PACK.to_string(),
            extensions: SOURCE_EXTENSIONS.iter().map(|ext| ext.to_string()).collect(),
            output_extension: OUTPUT_EXTENSION.to_string(),
        }
    }
}
