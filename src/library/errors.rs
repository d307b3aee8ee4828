use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StripError {
    #[error("Source directory not found: {0}")]
    SrcDirNotFound(PathBuf),

    #[error("Source path is not a directory: {0}")]
    SrcDirNotADirectory(PathBuf),

    #[error("Failed to enumerate textures in {0}")]
    Enumeration(PathBuf, #[source] walkdir::Error),

    #[error("No .png or .jpg files found in {0}")]
    NoCandidates(PathBuf),

    #[error("Failed to decode texture: {0}")]
    Decode(PathBuf, #[source] image::ImageError),

    #[error("Failed to compose the strip image")]
    Compose(#[source] image::ImageError),

    #[error("Failed to write strip image to {0}")]
    Encode(PathBuf, #[source] image::ImageError),
}
