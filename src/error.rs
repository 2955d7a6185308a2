use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GpxError {
    #[error("{0}")]
    Io(#[from] io::Error),

    #[error("{0}")]
    Xml(#[from] roxmltree::Error),

    #[error("no <gpx> root element")]
    MissingRoot,

    #[error("failed to read gpx \"{}\": {source}", .path.display())]
    Input {
        path: PathBuf,
        source: Box<GpxError>,
    },

    #[error("failed to create file \"{}\": {source}", .path.display())]
    Create { path: PathBuf, source: io::Error },

    #[error("failed to write file \"{}\": {source}", .path.display())]
    Write { path: PathBuf, source: io::Error },
}

impl GpxError {
    /// Tags a load or parse failure with the input file it came from.
    pub fn for_input(self, path: &Path) -> Self {
        GpxError::Input {
            path: path.to_path_buf(),
            source: Box::new(self),
        }
    }
}

pub type Result<T> = std::result::Result<T, GpxError>;
