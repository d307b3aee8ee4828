use std::path::{Path, PathBuf};

use image::imageops;

use super::{row_images, CandidateSet, RgbImgBuf, StripError};

//fixed resampling filter (bilinear), so that repeated runs over the same
//textures produce identical output.
const RESIZE_FILTER: imageops::FilterType = imageops::FilterType::Triangle;

/// Concatenates every .png/.jpg file directly inside `src_dir` into one
/// horizontal strip image at `dest_path`.
///
/// Every texture is resized to the dimensions of the smallest texture (by
/// pixel count) before concatenation. Candidates are processed in
/// lexicographic path order. Any failure aborts the whole run; no partial
/// output is written.
pub fn build_strip(src_dir: &Path, dest_path: &Path) -> Result<(), StripError> {
    let candidates = CandidateSet::enumerate_from_fs(src_dir)?;
    if candidates.is_empty() {
        return Err(StripError::NoCandidates(src_dir.to_path_buf()));
    }

    let textures = decode_candidates(candidates.paths())?;

    let (target_x, target_y) = target_size(&textures);
    info!(
        target: "strip",
        "concatenating {} textures at {}x{}",
        textures.len(),
        target_x,
        target_y
    );

    let resized = textures
        .iter()
        .map(|tex| imageops::resize(tex, target_x, target_y, RESIZE_FILTER))
        .collect::<Vec<_>>();

    let strip_buf = row_images(&resized).map_err(StripError::Compose)?;

    strip_buf
        .save(dest_path)
        .map_err(|e| StripError::Encode(dest_path.to_path_buf(), e))?;

    Ok(())
}

fn decode_candidates(paths: &[PathBuf]) -> Result<Vec<RgbImgBuf>, StripError> {
    paths
        .iter()
        .map(|src_path| {
            image::open(src_path)
                .map(|tex| tex.to_rgb8())
                .map_err(|e| StripError::Decode(src_path.clone(), e))
        })
        .collect()
}

//min_by_key keeps the first minimum, so a tie on pixel count goes to the
//earliest candidate in sorted order.
fn target_size(textures: &[RgbImgBuf]) -> (u32, u32) {
    textures
        .iter()
        .min_by_key(|tex| u64::from(tex.width()) * u64::from(tex.height()))
        .map(|tex| tex.dimensions())
        .unwrap_or_else(|| unreachable!())
}
