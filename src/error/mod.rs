use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type IconResult<T> = std::result::Result<T, IconError>;

#[derive(Debug, Error)]
pub enum IconError {
    #[error("output directory does not exist: {}", path.display())]
    MissingOutputDirectory { path: PathBuf },
    #[error("png encoding failed: {0}")]
    Encode(#[from] image::ImageError),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}
