use std::io::{Read, Seek};

use crate::cursor::ByteCursor;
use crate::dictionary::DataElementDictionary;
use crate::element_reader::ElementReader;
use crate::error::DicomError;
use crate::model::*;
use crate::tag_decoder::TagDecoder;
use crate::util::{format_tag, parse_decimal_strings, parse_leading_int};
use crate::CommonResult;

const JPEG_FAMILY: &str = "1.2.840.10008.1.2.4";
const RLE_LOSSLESS: &str = "1.2.840.10008.1.2.5";
const DEFLATED_EXPLICIT_LITTLE_ENDIAN: &str = "1.2.840.10008.1.2.1.99";
const EXPLICIT_BIG_ENDIAN: &str = "1.2.840.10008.1.2.2";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WalkState {
    Scanning,
    PixelDataFound,
}

/// Walks the element stream and fills a `DicomInfo` from the tags it knows.
///
/// Elements nested in sequences are consumed without being dispatched, so an
/// icon image or a referenced frame cannot overwrite the main geometry.
pub struct DicomInfoAccumulator<'d> {
    dict: &'d DataElementDictionary,
    decoder: TagDecoder,
    reader: ElementReader,
    info: DicomInfo,
    rows: Option<u16>,
    columns: Option<u16>,
    bits_allocated: Option<u16>,
    state: WalkState,
    header_lines: Option<Vec<String>>,
}

impl<'d> DicomInfoAccumulator<'d> {
    pub fn new(dict: &'d DataElementDictionary) -> Self {
        DicomInfoAccumulator {
            dict,
            decoder: TagDecoder::new(),
            reader: ElementReader::new(),
            info: DicomInfo::default(),
            rows: None,
            columns: None,
            bits_allocated: None,
            state: WalkState::Scanning,
            header_lines: None,
        }
    }

    /// Also collect a text line per described element.
    pub fn with_header_dump(mut self) -> Self {
        self.header_lines = Some(Vec::new());
        self
    }

    /// Runs until the pixel data element is found. Running out of input
    /// first is an error.
    pub fn walk<R: Read + Seek>(&mut self, cursor: &mut ByteCursor<R>) -> CommonResult<()> {
        while self.state == WalkState::Scanning {
            self.reader.close_finished(cursor.position());

            let result = match self.decoder.next_tag_header(cursor, self.dict) {
                Ok(header) => self.step(&header, cursor),
                Err(error) => Err(error),
            };

            match result {
                Ok(()) => {}
                Err(error @ DicomError::TruncatedStream { .. }) => {
                    return Err(self.end_of_stream(error));
                }
                Err(error) => return Err(error),
            }
        }

        self.check_geometry()?;

        self.info.big_endian = cursor.is_big_endian();

        Ok(())
    }

    pub fn finish(self) -> (DicomInfo, Vec<String>) {
        (self.info, self.header_lines.unwrap_or_default())
    }

    fn step<R: Read + Seek>(
        &mut self,
        header: &ElementHeader,
        cursor: &mut ByteCursor<R>,
    ) -> CommonResult<()> {
        // 序列内部的元素只消费，不分派
        if self.reader.in_sequence()
            || matches!(header.tag, ITEM | ITEM_DELIMITATION | SEQUENCE_DELIMITATION)
            || (header.undefined_length && header.tag != PIXEL_DATA)
        {
            return self.consume(header, cursor);
        }

        match header.tag {
            TRANSFER_SYNTAX_UID => {
                let uid = self.read_text(header, cursor)?;
                self.note(header, Some(uid.clone()));
                self.check_transfer_syntax(&uid)?;
                self.info.transfer_syntax_uid = uid;
            }
            SPECIFIC_CHARACTER_SET => {
                let value = self.read_text(header, cursor)?;
                self.reader.set_character_set(&value);
                self.note(header, Some(value));
            }
            MODALITY => {
                self.info.modality = self.read_text(header, cursor)?;
                self.note(header, Some(self.info.modality.clone()));
            }
            PHOTOMETRIC_INTERPRETATION => {
                self.info.photometric_interpretation = self.read_text(header, cursor)?;
                self.note(header, Some(self.info.photometric_interpretation.clone()));
            }
            SAMPLES_PER_PIXEL => {
                if let Some(value) = self.read_unsigned_short(header, cursor)? {
                    self.info.samples_per_pixel = value;
                }
            }
            PLANAR_CONFIGURATION => {
                if let Some(value) = self.read_unsigned_short(header, cursor)? {
                    self.info.planar_configuration = value;
                }
            }
            ROWS => {
                if let Some(value) = self.read_unsigned_short(header, cursor)? {
                    self.rows = Some(value);
                }
            }
            COLUMNS => {
                if let Some(value) = self.read_unsigned_short(header, cursor)? {
                    self.columns = Some(value);
                }
            }
            BITS_ALLOCATED => {
                if let Some(value) = self.read_unsigned_short(header, cursor)? {
                    self.bits_allocated = Some(value);
                }
            }
            BITS_STORED => {
                if let Some(value) = self.read_unsigned_short(header, cursor)? {
                    self.info.bits_stored = value;
                }
            }
            PIXEL_REPRESENTATION => {
                if let Some(value) = self.read_unsigned_short(header, cursor)? {
                    self.info.pixel_representation = value;
                }
            }
            NUMBER_OF_FRAMES => {
                let text = self.read_text(header, cursor)?;
                let frames = parse_leading_int(text.as_bytes());
                if frames > 1 {
                    log::warn!("{} frames declared, only the first is decoded", frames);
                }
                self.info.number_of_frames = frames.max(1) as u32;
                self.note(header, Some(text));
            }
            WINDOW_CENTER | WINDOW_WIDTH => {
                // 只取前4个字节按整数解析，较长的窗值不支持
                let bytes = cursor.read_bytes(header.length as usize)?;
                let head = &bytes[..bytes.len().min(4)];
                let value = parse_leading_int(head);
                if header.tag == WINDOW_CENTER {
                    self.info.window_center = value;
                } else {
                    self.info.window_width = value;
                }
                self.note(header, Some(self.reader.decode_text(head)));
            }
            RESCALE_INTERCEPT => {
                let text = self.read_text(header, cursor)?;
                if let Some(value) = parse_decimal_strings(&text).first() {
                    self.info.rescale_intercept = *value;
                }
                self.note(header, Some(text));
            }
            RESCALE_SLOPE => {
                let text = self.read_text(header, cursor)?;
                if let Some(value) = parse_decimal_strings(&text).first() {
                    self.info.rescale_slope = *value;
                }
                self.note(header, Some(text));
            }
            PIXEL_SPACING => {
                let text = self.read_text(header, cursor)?;
                if let [row, column, ..] = parse_decimal_strings(&text).as_slice() {
                    self.info.pixel_spacing = Some((*row, *column));
                }
                self.note(header, Some(text));
            }
            SLICE_THICKNESS | SPACING_BETWEEN_SLICES => {
                let text = self.read_text(header, cursor)?;
                let value = parse_decimal_strings(&text).first().copied();
                if header.tag == SLICE_THICKNESS {
                    self.info.slice_thickness = value;
                } else {
                    self.info.spacing_between_slices = value;
                }
                self.note(header, Some(text));
            }
            PIXEL_DATA => {
                if header.undefined_length {
                    self.info.version = DicomVersion::Unknown;
                    return Err(DicomError::UnsupportedTransferSyntax(
                        "encapsulated pixel data".to_string(),
                    ));
                }

                if header.length != 0 {
                    self.info.pixel_data_offset = cursor.position();
                    self.info.pixel_data_length = header.length;
                    self.note(header, Some(cursor.position().to_string()));
                    self.state = WalkState::PixelDataFound;
                }
            }
            _ => return self.consume(header, cursor),
        }

        Ok(())
    }

    fn consume<R: Read + Seek>(
        &mut self,
        header: &ElementHeader,
        cursor: &mut ByteCursor<R>,
    ) -> CommonResult<()> {
        let element = self.reader.read_element_content(header, cursor, self.dict)?;
        self.record(&element);

        Ok(())
    }

    fn read_text<R: Read + Seek>(
        &self,
        header: &ElementHeader,
        cursor: &mut ByteCursor<R>,
    ) -> CommonResult<String> {
        let bytes = cursor.read_bytes(header.length as usize)?;

        Ok(self.reader.decode_text(&bytes))
    }

    /// The first value of a US element. Shorter values are consumed and
    /// ignored.
    fn read_unsigned_short<R: Read + Seek>(
        &mut self,
        header: &ElementHeader,
        cursor: &mut ByteCursor<R>,
    ) -> CommonResult<Option<u16>> {
        let bytes = cursor.read_bytes(header.length as usize)?;

        let value = if bytes.len() >= 2 {
            Some(cursor.u16_from(&bytes[..2]))
        } else {
            log::warn!(
                "{} has length {}, expected 2",
                format_tag(header.tag),
                header.length
            );
            None
        };

        self.note(header, value.map(|v| v.to_string()));

        Ok(value)
    }

    fn check_transfer_syntax(&mut self, uid: &str) -> CommonResult<()> {
        if uid.starts_with(JPEG_FAMILY)
            || uid.starts_with(RLE_LOSSLESS)
            || uid == DEFLATED_EXPLICIT_LITTLE_ENDIAN
        {
            self.info.version = DicomVersion::Unknown;
            return Err(DicomError::UnsupportedTransferSyntax(uid.to_string()));
        }

        if uid == EXPLICIT_BIG_ENDIAN {
            self.decoder.mark_big_endian_syntax();
        }

        Ok(())
    }

    fn note(&mut self, header: &ElementHeader, value: Option<String>) {
        let element = DataElement {
            header: *header,
            name: self.dict.name_of(header.tag).map(|name| name.to_string()),
            value,
            depth: self.reader.depth(),
        };

        self.record(&element);
    }

    fn record(&mut self, element: &DataElement) {
        let Some(line) = element.describe() else {
            return;
        };

        log::trace!(
            "{} {} {}",
            format_tag(element.header.tag),
            element.header.vr,
            line
        );

        if let Some(lines) = self.header_lines.as_mut() {
            lines.push(line);
        }
    }

    fn missing_geometry(&self) -> Option<&'static str> {
        if self.rows.unwrap_or(0) == 0 {
            Some("rows")
        } else if self.columns.unwrap_or(0) == 0 {
            Some("columns")
        } else if self.bits_allocated.unwrap_or(0) == 0 {
            Some("bits allocated")
        } else {
            None
        }
    }

    fn end_of_stream(&self, error: DicomError) -> DicomError {
        match self.missing_geometry() {
            Some(field) => DicomError::GeometryMissing(field),
            None => error,
        }
    }

    fn check_geometry(&mut self) -> CommonResult<()> {
        if let Some(field) = self.missing_geometry() {
            return Err(DicomError::GeometryMissing(field));
        }

        self.info.height = self.rows.unwrap_or(0);
        self.info.width = self.columns.unwrap_or(0);
        self.info.pixel_depth = self.bits_allocated.unwrap_or(0);

        if self.info.bits_stored == 0 {
            self.info.bits_stored = self.info.pixel_depth;
        }

        Ok(())
    }
}
