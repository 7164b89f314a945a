use crate::config::SizePreset;
use crate::error::{PipelineError, PipelineResult};
use crate::utils::files::rebuild_directory;
use image::imageops::FilterType;
use image::{ImageFormat, ImageReader};
use indicatif::{ProgressBar, ProgressStyle};
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Decode `source`, stretch it to exactly `width`x`height` and write it to
/// `target` as WebP.
///
/// The image is normalised to RGBA first, so sources without an alpha
/// channel gain a fully opaque one. Aspect ratio is not preserved.
pub fn convert_image(source: &Path, target: &Path, width: u32, height: u32) -> PipelineResult<()> {
    // Guess from content so upper-case extensions still decode
    let img = ImageReader::open(source)
        .and_then(|reader| reader.with_guessed_format())
        .map_err(|e| PipelineError::io(source, e))?
        .decode()
        .map_err(|e| PipelineError::image(source, e))?;

    let img = img.into_rgba8();
    let resized = image::imageops::resize(&img, width, height, FilterType::Lanczos3);

    resized
        .save_with_format(target, ImageFormat::WebP)
        .map_err(|e| PipelineError::image(target, e))
}

/// `<folder>/<source stem>.<extension>`
pub fn output_path(folder: &Path, source: &Path, extension: &str) -> PipelineResult<PathBuf> {
    let stem = source
        .file_stem()
        .ok_or_else(|| PipelineError::InvalidFileName(source.to_path_buf()))?;

    let mut name = OsString::from(stem);
    name.push(".");
    name.push(extension);
    Ok(folder.join(name))
}

/// Rebuild `dest` from scratch with one subfolder per preset, each holding a
/// resized copy of every source image.
///
/// Anything already under `dest` is deleted. The first failure aborts the
/// batch and leaves partial output behind.
pub fn convert_all(
    sources: &[PathBuf],
    dest: &Path,
    presets: &[SizePreset],
    extension: &str,
) -> PipelineResult<()> {
    rebuild_directory(dest)?;

    let pb = ProgressBar::new((sources.len() * presets.len()) as u64);
    pb.set_style(
        ProgressStyle::with_template(
            "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}",
        )
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("#>-"),
    );

    for preset in presets {
        let folder = dest.join(preset.label);
        fs::create_dir(&folder).map_err(|e| PipelineError::io(&folder, e))?;
        pb.set_message(preset.label);

        for source in sources {
            let target = output_path(&folder, source, extension)?;
            convert_image(source, &target, preset.width, preset.height)?;

            pb.suspend(|| info!("> Generated: {}", target.display()));
            pb.inc(1);
        }
    }

    pb.finish_and_clear();
    Ok(())
}
