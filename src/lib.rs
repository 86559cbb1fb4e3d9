//! Streaming reader for single-frame, uncompressed greyscale DICOM files.
//!
//! The element stream is walked once, front to back. Explicit and implicit
//! VR are told apart per element, the byte order follows the transfer
//! syntax, and the walk stops at the pixel data element. The pixels are then
//! rescaled and normalized into a buffer supplied by the caller.

pub mod accumulator;
pub mod config;
pub mod cursor;
pub mod dictionary;
mod dictionary_table;
pub mod element_reader;
pub mod error;
pub mod model;
pub mod pixel;
pub mod reader;
pub mod render;
pub mod tag_decoder;
pub mod util;

pub use dictionary::DataElementDictionary;
pub use error::DicomError;
pub use model::{DicomInfo, DicomVersion, Tag, Vr};
pub use reader::DicomReader;

pub type CommonResult<T> = std::result::Result<T, DicomError>;
