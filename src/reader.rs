use std::{
    io::{BufReader, Read, Seek},
    path::Path,
};

use crate::accumulator::DicomInfoAccumulator;
use crate::cursor::ByteCursor;
use crate::dictionary::DataElementDictionary;
use crate::error::DicomError;
use crate::model::{DicomInfo, DicomVersion};
use crate::pixel::{self, PixelDecoder};
use crate::CommonResult;

/// Bytes before the `DICM` magic in a DICOM 3.0 file.
pub const PREAMBLE_LENGTH: u64 = 128;
pub const MAGIC: &[u8; 4] = b"DICM";

/// Reads one file at a time: metadata first, then the pixel data into a
/// buffer the caller owns.
///
/// ```no_run
/// use dicom_parser::DicomReader;
///
/// let mut reader = DicomReader::new();
/// let (info, pixels) = reader.read_image("./datas/1-003.dcm")?;
/// println!("{}x{} {} bit, {} bytes", info.width, info.height, info.pixel_depth, pixels.len());
/// # Ok::<(), dicom_parser::DicomError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct DicomReader {
    dict: DataElementDictionary,
    header_dump: bool,
    header: Vec<String>,
}

impl DicomReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_dictionary(dict: DataElementDictionary) -> Self {
        DicomReader {
            dict,
            ..Default::default()
        }
    }

    pub fn with_header_dump(mut self, enabled: bool) -> Self {
        self.header_dump = enabled;
        self
    }

    pub fn dictionary(&self) -> &DataElementDictionary {
        &self.dict
    }

    pub fn dictionary_mut(&mut self) -> &mut DataElementDictionary {
        &mut self.dict
    }

    /// Description lines of the last parse, when the dump is enabled.
    pub fn header(&self) -> &[String] {
        &self.header
    }

    /// Parses `path` and decodes its pixels into `buffer`.
    pub fn read_file(&mut self, path: impl AsRef<Path>, buffer: &mut [u8]) -> CommonResult<DicomInfo> {
        let path = path.as_ref();
        let file = crate::util::get_file(path)?;

        log::debug!("reading {}", path.display());

        self.read_from(BufReader::new(file), buffer)
            .inspect_err(|error| log::error!("{}: {}", path.display(), error))
    }

    pub fn read_from<R: Read + Seek>(&mut self, source: R, buffer: &mut [u8]) -> CommonResult<DicomInfo> {
        let mut cursor = ByteCursor::new(source);

        let info = self.scan(&mut cursor)?;

        PixelDecoder::new(&info)?.decode_pixels(&mut cursor, buffer)?;

        Ok(info)
    }

    /// Metadata only; the pixel data is located but not read.
    pub fn read_info(&mut self, path: impl AsRef<Path>) -> CommonResult<DicomInfo> {
        let file = crate::util::get_file(path.as_ref())?;
        let mut cursor = ByteCursor::new(BufReader::new(file));

        self.scan(&mut cursor)
    }

    /// Like `read_file`, with a buffer sized from the metadata. The size is
    /// checked against the pixel data element and the file before anything
    /// is allocated.
    pub fn read_image(&mut self, path: impl AsRef<Path>) -> CommonResult<(DicomInfo, Vec<u8>)> {
        let file = crate::util::get_file(path.as_ref())?;
        let file_length = file.metadata()?.len();
        let mut cursor = ByteCursor::new(BufReader::new(file));

        let info = self.scan(&mut cursor)?;

        let decoder = PixelDecoder::new(&info)?;
        let required = decoder.required_bytes();

        // 头部声明的尺寸可能远大于文件实际内容，先校验再分配
        let available = (info.pixel_data_length as u64)
            .min(file_length.saturating_sub(info.pixel_data_offset));
        if (required as u64) > available {
            log::error!(
                "{} pixel bytes declared, {} available",
                required,
                available
            );
            return Err(DicomError::TruncatedStream {
                offset: info.pixel_data_offset,
                wanted: required,
                got: available as usize,
            });
        }

        let mut pixels = vec![0u8; required];
        decoder.decode_pixels(&mut cursor, &mut pixels)?;

        Ok((info, pixels))
    }

    fn scan<R: Read + Seek>(&mut self, cursor: &mut ByteCursor<R>) -> CommonResult<DicomInfo> {
        self.header.clear();

        let is_dicom3 = detect_preamble(cursor)?;

        let mut accumulator = DicomInfoAccumulator::new(&self.dict);
        if self.header_dump {
            accumulator = accumulator.with_header_dump();
        }

        let result = accumulator.walk(cursor);
        let (mut info, header) = accumulator.finish();
        self.header = header;
        result?;

        info.version = if is_dicom3 {
            DicomVersion::Dicom3
        } else {
            DicomVersion::PreDicom3
        };
        info.value_offset = pixel::value_offset(&info);

        log::debug!("image height = {}", info.height);
        log::debug!("image width = {}", info.width);
        log::debug!("pixel depth = {}", info.pixel_depth);
        log::info!(
            "{:?}, {} {}, pixel data at {}",
            info.version,
            info.modality,
            info.photometric_interpretation,
            info.pixel_data_offset
        );

        Ok(info)
    }
}

/// Leaves the cursor on the first element: after the magic for DICOM 3.0,
/// at byte 0 for the older layout.
fn detect_preamble<R: Read + Seek>(cursor: &mut ByteCursor<R>) -> CommonResult<bool> {
    cursor.seek_to(PREAMBLE_LENGTH)?;

    match cursor.read_bytes(MAGIC.len()) {
        Ok(magic) if magic.as_slice() == MAGIC => Ok(true),
        Ok(magic) => {
            log::debug!(
                "no DICM magic ({}), reading from byte 0",
                crate::util::show_buffer_by_hex(&magic)
            );
            cursor.seek_to(0)?;
            Ok(false)
        }
        Err(DicomError::TruncatedStream { .. }) => {
            cursor.seek_to(0)?;
            Ok(false)
        }
        Err(error) => Err(error),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn preamble_detection() {
        let mut dicom3 = vec![0u8; 128];
        dicom3.extend_from_slice(b"DICM");
        dicom3.extend_from_slice(&[0x02, 0x00]);
        let mut cursor = ByteCursor::new(Cursor::new(dicom3));
        assert!(detect_preamble(&mut cursor).unwrap());
        assert_eq!(cursor.position(), 132);

        let mut legacy = ByteCursor::new(Cursor::new(vec![0x08, 0x00, 0x16, 0x00]));
        assert!(!detect_preamble(&mut legacy).unwrap());
        assert_eq!(legacy.position(), 0);

        let mut no_magic = ByteCursor::new(Cursor::new(vec![0x41u8; 200]));
        assert!(!detect_preamble(&mut no_magic).unwrap());
        assert_eq!(no_magic.position(), 0);
    }

    #[test]
    fn custom_dictionary_is_used_for_the_walk() {
        let mut bytes = vec![0u8; 128];
        bytes.extend_from_slice(b"DICM");
        for (element, value) in [(0x0010u16, 1u16), (0x0011, 2), (0x0100, 8)] {
            bytes.extend_from_slice(&[0x28, 0x00]);
            bytes.extend_from_slice(&element.to_le_bytes());
            bytes.extend_from_slice(b"US");
            bytes.extend_from_slice(&2u16.to_le_bytes());
            bytes.extend_from_slice(&value.to_le_bytes());
        }
        bytes.extend_from_slice(&[0xE0, 0x7F, 0x10, 0x00, b'O', b'W', 0x00, 0x00]);
        bytes.extend_from_slice(&2u32.to_le_bytes());
        bytes.extend_from_slice(&[3, 4]);

        let mut reader =
            DicomReader::with_dictionary(DataElementDictionary::empty()).with_header_dump(true);
        assert!(reader.dictionary().is_empty());

        let mut buffer = [0u8; 2];
        let info = reader.read_from(Cursor::new(bytes), &mut buffer).unwrap();

        assert_eq!((info.height, info.width), (1, 2));
        assert_eq!(buffer, [3, 4]);
        // no names: every described element shows up as private
        assert!(!reader.header().is_empty());
        assert!(reader
            .header()
            .iter()
            .all(|line| line.starts_with("Private Tag: ")));
    }

    #[test]
    fn missing_file() {
        let mut reader = DicomReader::new();
        let result = reader.read_image("/no/such/file.dcm");
        assert!(matches!(result, Err(DicomError::FileNotFound(_))));
    }
}
