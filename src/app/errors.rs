use std::path::PathBuf;

use thiserror::Error;

use crate::library::StripError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Source directory has no parent directory to write the strip image into: {0}")]
    NoOutputParent(PathBuf),

    #[error(transparent)]
    StripError(#[from] StripError),
}
