use crate::error::{PipelineError, PipelineResult};
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

/// Recursively collect every card image under `root`.
///
/// Directories named `exclusion_dir` are pruned at any depth below the root.
/// Files are kept when their extension matches one of `extensions`, ignoring
/// ASCII case; everything else is silently skipped.
pub fn collect_images(
    root: &Path,
    exclusion_dir: &str,
    extensions: &[String],
) -> PipelineResult<Vec<PathBuf>> {
    let mut collector = Vec::new();

    let walker = WalkDir::new(root)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| entry.depth() == 0 || entry.file_name() != exclusion_dir);

    for entry in walker {
        let entry = entry?;
        if entry.file_type().is_file() && has_extension(entry.path(), extensions) {
            collector.push(entry.into_path());
        }
    }

    debug!("Collected {} images under {}", collector.len(), root.display());
    Ok(collector)
}

fn has_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(OsStr::to_str)
        .map_or(false, |ext| {
            extensions.iter().any(|known| known.eq_ignore_ascii_case(ext))
        })
}

/// Catalog code for an image file: the stem up to its first hyphen.
///
/// Double-faced cards and alternate arts carry a `-suffix` after the code,
/// so `01001-back.png` and `01001.png` both map to `01001`.
pub fn card_identifier(path: &Path) -> Option<&str> {
    let stem = path.file_stem()?.to_str()?;
    stem.split('-').next()
}

/// Wipe `dest` if present and recreate it empty.
pub fn rebuild_directory(dest: &Path) -> PipelineResult<()> {
    if dest.exists() {
        fs::remove_dir_all(dest).map_err(|e| PipelineError::io(dest, e))?;
        debug!("Removed previous output: {}", dest.display());
    }

    fs::create_dir_all(dest).map_err(|e| PipelineError::io(dest, e))
}
