//! Error type shared by every stage of the reader.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DicomError {
    /// The input path does not exist.
    #[error("file not found: {0}")]
    FileNotFound(PathBuf),

    /// The input path exists but could not be opened for reading.
    #[error("failed to open {path}: {source}")]
    OpenFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Compressed, retired or encapsulated transfer syntaxes.
    #[error("unsupported transfer syntax: {0}")]
    UnsupportedTransferSyntax(String),

    /// The stream ended before the pixel data element was located.
    #[error("stream truncated at offset {offset}: wanted {wanted} bytes, got {got}")]
    TruncatedStream { offset: u64, wanted: usize, got: usize },

    /// Rows, columns or bits allocated were never resolved.
    #[error("image geometry missing: {0}")]
    GeometryMissing(&'static str),

    #[error("buffer too small: {required} bytes required, {provided} provided")]
    BufferTooSmall { required: usize, provided: usize },

    /// Multi-sample pixels or a bit depth other than 8/16.
    #[error("unsupported pixel layout: {0}")]
    UnsupportedPixelLayout(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("image error: {0}")]
    Image(#[from] image::ImageError),
}
