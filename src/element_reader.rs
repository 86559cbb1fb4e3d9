use std::io::{Read, Seek};

use byteorder::{BigEndian, ByteOrder, LittleEndian};
use encoding_rs::Encoding;

use crate::cursor::ByteCursor;
use crate::dictionary::DataElementDictionary;
use crate::model::{
    DataElement, ElementHeader, Tag, Vr, ICON_IMAGE_SEQUENCE, ITEM, ITEM_DELIMITATION,
    SEQUENCE_DELIMITATION,
};
use crate::CommonResult;

/// Longest unresolved value still rendered as text.
pub const IMPLICIT_TEXT_LIMIT: u32 = 44;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BracketKind {
    Sequence,
    Item,
}

#[derive(Debug, Clone, Copy)]
struct Bracket {
    kind: BracketKind,
    /// `None` for undefined length, closed by a delimitation tag.
    end: Option<u64>,
}

/// Consumes element values and keeps track of the sequences the walk is in.
pub struct ElementReader {
    brackets: Vec<Bracket>,
    encoding: &'static Encoding,
}

impl Default for ElementReader {
    fn default() -> Self {
        ElementReader {
            brackets: Vec::new(),
            encoding: encoding_rs::WINDOWS_1252,
        }
    }
}

impl ElementReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn in_sequence(&self) -> bool {
        !self.brackets.is_empty()
    }

    pub fn depth(&self) -> usize {
        self.brackets.len()
    }

    /// Picks the text decoder from a Specific Character Set value.
    pub fn set_character_set(&mut self, value: &str) {
        self.encoding = encoding_for(value);
    }

    /// Drops every defined-length bracket the cursor has moved past.
    pub fn close_finished(&mut self, position: u64) {
        while let Some(Bracket { end: Some(end), .. }) = self.brackets.last() {
            if *end > position {
                break;
            }
            self.brackets.pop();
        }
    }

    pub fn decode_text(&self, bytes: &[u8]) -> String {
        let (result, _, _) = self.encoding.decode(bytes);

        crate::util::trim_value(&result)
    }

    /// Reads (or skips) the value of `header`. The cursor ends up exactly
    /// `header.length` bytes further, or unmoved for sequences and items that
    /// are walked into.
    pub fn read_element_content<R: Read + Seek>(
        &mut self,
        header: &ElementHeader,
        cursor: &mut ByteCursor<R>,
        dict: &DataElementDictionary,
    ) -> CommonResult<DataElement> {
        let depth = self.depth();
        let mut element = DataElement {
            header: *header,
            name: None,
            value: None,
            depth,
        };

        // 这三个tag只是括号，不带任何语义
        match header.tag {
            ITEM => {
                self.open(BracketKind::Item, header, cursor.position());
                return Ok(element);
            }
            ITEM_DELIMITATION => {
                self.close(BracketKind::Item, header.tag);
                return Ok(element);
            }
            SEQUENCE_DELIMITATION => {
                self.close(BracketKind::Sequence, header.tag);
                return Ok(element);
            }
            _ => {}
        }

        element.name = dict.name_of(header.tag).map(|name| name.to_string());

        if header.undefined_length {
            self.open(BracketKind::Sequence, header, cursor.position());
            return Ok(element);
        }

        let length = header.length as usize;
        let big_endian = cursor.is_big_endian();

        element.value = match header.vr {
            Vr::AE
            | Vr::AS
            | Vr::CS
            | Vr::DA
            | Vr::DS
            | Vr::DT
            | Vr::IS
            | Vr::LO
            | Vr::LT
            | Vr::PN
            | Vr::SH
            | Vr::ST
            | Vr::TM
            | Vr::UI => {
                let bytes = cursor.read_bytes(length)?;
                Some(self.decode_text(&bytes))
            }
            Vr::AT => {
                let bytes = cursor.read_bytes(length)?;
                Some(join_values(&bytes, 4, |chunk| {
                    let group = read_u16(&chunk[..2], big_endian) as Tag;
                    let element = read_u16(&chunk[2..], big_endian) as Tag;
                    crate::util::format_tag(group << 16 | element)
                }))
            }
            Vr::US => {
                let bytes = cursor.read_bytes(length)?;
                Some(join_values(&bytes, 2, |chunk| {
                    read_u16(chunk, big_endian).to_string()
                }))
            }
            Vr::SS => {
                let bytes = cursor.read_bytes(length)?;
                Some(join_values(&bytes, 2, |chunk| {
                    (read_u16(chunk, big_endian) as i16).to_string()
                }))
            }
            Vr::UL => {
                let bytes = cursor.read_bytes(length)?;
                Some(join_values(&bytes, 4, |chunk| {
                    read_u32(chunk, big_endian).to_string()
                }))
            }
            Vr::SL => {
                let bytes = cursor.read_bytes(length)?;
                Some(join_values(&bytes, 4, |chunk| {
                    (read_u32(chunk, big_endian) as i32).to_string()
                }))
            }
            Vr::FL => {
                let bytes = cursor.read_bytes(length)?;
                Some(join_values(&bytes, 4, |chunk| {
                    f32::from_bits(read_u32(chunk, big_endian)).to_string()
                }))
            }
            Vr::FD => {
                let bytes = cursor.read_bytes(length)?;
                Some(join_values(&bytes, 8, |chunk| {
                    let value = if big_endian {
                        BigEndian::read_f64(chunk)
                    } else {
                        LittleEndian::read_f64(chunk)
                    };
                    value.to_string()
                }))
            }
            Vr::Implicit => {
                let bytes = cursor.read_bytes(length)?;
                if header.length > IMPLICIT_TEXT_LIMIT {
                    None
                } else {
                    Some(self.decode_text(&bytes))
                }
            }
            Vr::SQ => {
                // 图标序列和私有序列不解析，直接跳过
                if header.tag == ICON_IMAGE_SEQUENCE || header.group() & 1 != 0 {
                    cursor.skip(header.length as u64)?;
                } else {
                    self.open(BracketKind::Sequence, header, cursor.position());
                }
                None
            }
            _ => {
                cursor.skip(header.length as u64)?;
                None
            }
        };

        Ok(element)
    }

    fn open(&mut self, kind: BracketKind, header: &ElementHeader, position: u64) {
        let end = if header.undefined_length {
            None
        } else if header.length == 0 {
            return;
        } else {
            Some(position + header.length as u64)
        };

        self.brackets.push(Bracket { kind, end });
    }

    fn close(&mut self, kind: BracketKind, tag: Tag) {
        match self.brackets.iter().rposition(|bracket| bracket.kind == kind) {
            Some(index) => self.brackets.truncate(index),
            None => log::warn!(
                "{} without an open {:?}",
                crate::util::format_tag(tag),
                kind
            ),
        }
    }
}

fn read_u16(bytes: &[u8], big_endian: bool) -> u16 {
    if big_endian {
        BigEndian::read_u16(bytes)
    } else {
        LittleEndian::read_u16(bytes)
    }
}

fn read_u32(bytes: &[u8], big_endian: bool) -> u32 {
    if big_endian {
        BigEndian::read_u32(bytes)
    } else {
        LittleEndian::read_u32(bytes)
    }
}

// 多值用反斜杠拼接，末尾不足一个值的字节忽略
fn join_values(bytes: &[u8], size: usize, render: impl Fn(&[u8]) -> String) -> String {
    bytes
        .chunks_exact(size)
        .map(render)
        .collect::<Vec<String>>()
        .join("\\")
}

/// Maps the first Specific Character Set term to a decoder. Unknown terms
/// fall back to the default repertoire.
pub fn encoding_for(value: &str) -> &'static Encoding {
    let term = value.split('\\').next().unwrap_or("").trim();

    match term {
        "" | "ISO_IR 6" | "ISO 2022 IR 6" | "ISO_IR 100" | "ISO 2022 IR 100" => {
            encoding_rs::WINDOWS_1252
        }
        "ISO_IR 192" => encoding_rs::UTF_8,
        "GB18030" => encoding_rs::GB18030,
        "GBK" => encoding_rs::GBK,
        "ISO_IR 101" | "ISO 2022 IR 101" => encoding_rs::ISO_8859_2,
        "ISO_IR 144" | "ISO 2022 IR 144" => encoding_rs::ISO_8859_5,
        "ISO_IR 127" | "ISO 2022 IR 127" => encoding_rs::ISO_8859_6,
        "ISO_IR 126" | "ISO 2022 IR 126" => encoding_rs::ISO_8859_7,
        "ISO_IR 138" | "ISO 2022 IR 138" => encoding_rs::ISO_8859_8,
        "ISO_IR 148" | "ISO 2022 IR 148" => encoding_rs::WINDOWS_1254,
        "ISO_IR 166" | "ISO 2022 IR 166" => encoding_rs::WINDOWS_874,
        "ISO_IR 13" | "ISO 2022 IR 13" => encoding_rs::SHIFT_JIS,
        "ISO 2022 IR 149" => encoding_rs::EUC_KR,
        other => {
            log::warn!("unsupported character set {:?}, using default", other);
            encoding_rs::WINDOWS_1252
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tag_decoder::TagDecoder;
    use std::io::Cursor;

    fn element(tag: Tag, vr: Vr, length: u32) -> ElementHeader {
        ElementHeader {
            tag,
            vr,
            length,
            undefined_length: false,
            explicit: true,
        }
    }

    fn cursor(bytes: &[u8]) -> ByteCursor<Cursor<Vec<u8>>> {
        ByteCursor::new(Cursor::new(bytes.to_vec()))
    }

    #[test]
    fn text_values_are_trimmed_and_advance_by_length() {
        let dict = DataElementDictionary::standard();
        let mut reader = ElementReader::new();
        let mut cursor = cursor(b"CT\0\0MORE");

        let header = element(0x0008_0060, Vr::CS, 4);
        let element = reader.read_element_content(&header, &mut cursor, &dict).unwrap();

        assert_eq!(element.value.as_deref(), Some("CT"));
        assert_eq!(element.describe().unwrap(), "Modality: CT");
        assert_eq!(cursor.position(), 4);
    }

    #[test]
    fn multi_valued_unsigned_shorts() {
        let dict = DataElementDictionary::standard();
        let mut reader = ElementReader::new();
        let mut cursor = cursor(&[0x01, 0x00, 0x02, 0x00, 0x03, 0x00]);

        let header = element(0x0028_0010, Vr::US, 6);
        let element = reader.read_element_content(&header, &mut cursor, &dict).unwrap();

        assert_eq!(element.value.as_deref(), Some("1\\2\\3"));
        assert_eq!(cursor.position(), 6);
    }

    #[test]
    fn long_implicit_values_are_consumed_but_suppressed() {
        let dict = DataElementDictionary::standard();
        let mut reader = ElementReader::new();
        let mut cursor = cursor(&[b'a'; 50]);

        let header = element(0x0009_1001, Vr::Implicit, 45);
        let element = reader.read_element_content(&header, &mut cursor, &dict).unwrap();

        assert_eq!(element.value, None);
        assert_eq!(cursor.position(), 45);

        let header = ElementHeader {
            length: 5,
            ..header
        };
        let element = reader.read_element_content(&header, &mut cursor, &dict).unwrap();
        assert_eq!(element.describe().unwrap(), "Private Tag: aaaaa");
    }

    #[test]
    fn binary_vrs_are_skipped() {
        let dict = DataElementDictionary::standard();
        let mut reader = ElementReader::new();
        let mut cursor = cursor(&[0u8; 16]);

        let header = element(0x0029_1010, Vr::OB, 10);
        let element = reader.read_element_content(&header, &mut cursor, &dict).unwrap();

        assert_eq!(element.value, None);
        assert_eq!(cursor.position(), 10);
    }

    #[test]
    fn icon_and_private_sequences_are_skipped_others_entered() {
        let dict = DataElementDictionary::standard();
        let mut reader = ElementReader::new();
        let mut cursor = cursor(&[0u8; 64]);

        let icon = element(ICON_IMAGE_SEQUENCE, Vr::SQ, 20);
        reader.read_element_content(&icon, &mut cursor, &dict).unwrap();
        assert_eq!(cursor.position(), 20);
        assert!(!reader.in_sequence());

        let private = element(0x0029_1020, Vr::SQ, 8);
        reader.read_element_content(&private, &mut cursor, &dict).unwrap();
        assert_eq!(cursor.position(), 28);

        let public = element(0x0008_1140, Vr::SQ, 16);
        reader.read_element_content(&public, &mut cursor, &dict).unwrap();
        assert_eq!(cursor.position(), 28);
        assert!(reader.in_sequence());

        reader.close_finished(44);
        assert!(!reader.in_sequence());
    }

    #[test]
    fn delimitation_tags_close_undefined_brackets() {
        let dict = DataElementDictionary::standard();
        let mut reader = ElementReader::new();
        let mut cursor = cursor(&[]);

        let sequence = ElementHeader {
            undefined_length: true,
            length: 0,
            ..element(0x0008_1140, Vr::SQ, 0)
        };
        let item = ElementHeader {
            undefined_length: true,
            length: 0,
            ..element(ITEM, Vr::Implicit, 0)
        };

        reader.read_element_content(&sequence, &mut cursor, &dict).unwrap();
        reader.read_element_content(&item, &mut cursor, &dict).unwrap();
        assert_eq!(reader.depth(), 2);

        let end_item = element(ITEM_DELIMITATION, Vr::Implicit, 0);
        let described = reader.read_element_content(&end_item, &mut cursor, &dict).unwrap();
        assert_eq!(described.describe(), None);
        assert_eq!(reader.depth(), 1);

        let end_sequence = element(SEQUENCE_DELIMITATION, Vr::Implicit, 0);
        reader.read_element_content(&end_sequence, &mut cursor, &dict).unwrap();
        assert!(!reader.in_sequence());
    }

    #[test]
    fn header_and_content_stay_aligned_across_elements() {
        let dict = DataElementDictionary::standard();
        let mut bytes = Vec::new();
        // (0008,0060) CS "MR"
        bytes.extend_from_slice(&[0x08, 0x00, 0x60, 0x00, b'C', b'S', 0x02, 0x00, b'M', b'R']);
        // (0029,1010) OB, reserved bytes malformed to 0x00 0x55
        bytes.extend_from_slice(&[0x29, 0x00, 0x10, 0x10, b'O', b'B', 0x00, 0x55]);
        bytes.extend_from_slice(&3u32.to_le_bytes());
        bytes.extend_from_slice(&[1, 2, 3]);
        // (0028,0011) US 512
        bytes.extend_from_slice(&[0x28, 0x00, 0x11, 0x00, b'U', b'S', 0x02, 0x00, 0x00, 0x02]);

        let mut cursor = cursor(&bytes);
        let mut decoder = TagDecoder::new();
        let mut reader = ElementReader::new();

        let mut values = Vec::new();
        while cursor.position() < bytes.len() as u64 {
            let header = decoder.next_tag_header(&mut cursor, &dict).unwrap();
            let element = reader.read_element_content(&header, &mut cursor, &dict).unwrap();
            values.push((header.tag, element.value));
        }

        assert_eq!(
            values,
            vec![
                (0x0008_0060, Some("MR".to_string())),
                (0x0029_1010, None),
                (0x0028_0011, Some("512".to_string())),
            ]
        );
    }

    #[test]
    fn truncated_value_is_an_error() {
        let dict = DataElementDictionary::standard();
        let mut reader = ElementReader::new();
        let mut cursor = cursor(b"1.2");

        let header = element(0x0002_0010, Vr::UI, 20);
        assert!(reader.read_element_content(&header, &mut cursor, &dict).is_err());
    }

    #[test]
    fn character_sets() {
        assert_eq!(encoding_for("ISO_IR 192"), encoding_rs::UTF_8);
        assert_eq!(encoding_for("\\ISO 2022 IR 149"), encoding_rs::WINDOWS_1252);
        assert_eq!(encoding_for("GB18030"), encoding_rs::GB18030);
        assert_eq!(encoding_for("ISO_IR 100"), encoding_rs::WINDOWS_1252);

        let mut reader = ElementReader::new();
        reader.set_character_set("ISO_IR 192");
        assert_eq!(reader.decode_text("Müller^Jörg ".as_bytes()), "Müller^Jörg");
    }
}
