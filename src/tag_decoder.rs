use std::io::{Read, Seek};

use crate::cursor::ByteCursor;
use crate::dictionary::DataElementDictionary;
use crate::model::{ElementHeader, Tag, Vr, UNDEFINED_LENGTH};
use crate::CommonResult;

/// Reads tag headers and decides, element by element, between explicit and
/// implicit VR.
#[derive(Debug, Default)]
pub struct TagDecoder {
    big_endian_pending: bool,
    odd_index: bool,
}

impl TagDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// The transfer syntax announced explicit VR big endian. The meta group
    /// stays little endian; the switch happens on the first tag outside it.
    pub fn mark_big_endian_syntax(&mut self) {
        self.big_endian_pending = true;
    }

    pub fn next_tag_header<R: Read + Seek>(
        &mut self,
        cursor: &mut ByteCursor<R>,
        dict: &DataElementDictionary,
    ) -> CommonResult<ElementHeader> {
        let group_bytes = cursor.read_bytes(2)?;
        let mut group = cursor.u16_from(&group_bytes);

        // 大端数据集的(0008,xxxx)按小端读出来是0x0800
        if self.big_endian_pending && group != 0x0002 {
            group = group.swap_bytes();
            cursor.set_big_endian(true);
            self.big_endian_pending = false;
            log::debug!("switching to big endian at group {:04X}", group);
        }

        let element = cursor.read_u16()?;

        let tag: Tag = (group as u32) << 16 | element as u32;

        let (vr, mut length, explicit) = self.read_vr_and_length(tag, cursor, dict)?;

        // 某厂商的OB会写出长度13，实际是10
        if length == 13 && !self.odd_index {
            length = 10;
        }

        if cursor.position() & 1 != 0 {
            self.odd_index = true;
        }

        let undefined_length = length == UNDEFINED_LENGTH;
        if undefined_length {
            length = 0;
        }

        Ok(ElementHeader {
            tag,
            vr,
            length,
            undefined_length,
            explicit,
        })
    }

    fn read_vr_and_length<R: Read + Seek>(
        &self,
        tag: Tag,
        cursor: &mut ByteCursor<R>,
        dict: &DataElementDictionary,
    ) -> CommonResult<(Vr, u32, bool)> {
        let marker = cursor.read_bytes(4)?;

        // 不查完整的字典无法确定是显式还是隐式，只能看这两个字节像不像vr
        match Vr::from_code([marker[0], marker[1]]) {
            Some(vr) if vr.has_long_length() => {
                // 显式vr特殊结构：2字节保留，之后是4字节长度
                if marker[2] == 0 || marker[3] == 0 {
                    let length = cursor.read_u32()?;
                    Ok((vr, length, true))
                } else {
                    // 保留字节不为0，说明这4个字节其实是隐式vr的长度
                    let length = cursor.u32_from(&marker);
                    Ok((implicit_vr(tag, dict), length, false))
                }
            }
            Some(vr) => {
                // 显式vr普通结构：2字节长度
                let length = cursor.u16_from(&marker[2..4]) as u32;
                Ok((vr, length, true))
            }
            None => {
                let length = cursor.u32_from(&marker);
                Ok((implicit_vr(tag, dict), length, false))
            }
        }
    }
}

fn implicit_vr(tag: Tag, dict: &DataElementDictionary) -> Vr {
    dict.vr_of(tag).unwrap_or(Vr::Implicit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn decode(bytes: Vec<u8>) -> (ElementHeader, u64) {
        let dict = DataElementDictionary::standard();
        let mut cursor = ByteCursor::new(Cursor::new(bytes));
        let mut decoder = TagDecoder::new();
        let header = decoder.next_tag_header(&mut cursor, &dict).unwrap();
        (header, cursor.position())
    }

    #[test]
    fn explicit_short_length_vrs() {
        for (code, vr) in [
            (b"AE", Vr::AE),
            (b"AS", Vr::AS),
            (b"AT", Vr::AT),
            (b"CS", Vr::CS),
            (b"DA", Vr::DA),
            (b"DS", Vr::DS),
            (b"DT", Vr::DT),
            (b"FD", Vr::FD),
            (b"FL", Vr::FL),
            (b"IS", Vr::IS),
            (b"LO", Vr::LO),
            (b"LT", Vr::LT),
            (b"PN", Vr::PN),
            (b"SH", Vr::SH),
            (b"SL", Vr::SL),
            (b"SS", Vr::SS),
            (b"ST", Vr::ST),
            (b"TM", Vr::TM),
            (b"UI", Vr::UI),
            (b"UL", Vr::UL),
            (b"US", Vr::US),
            (b"??", Vr::QQ),
            (b"RT", Vr::RT),
        ] {
            let mut bytes = vec![0x28, 0x00, 0x10, 0x00, code[0], code[1], 0x06, 0x00];
            bytes.extend_from_slice(&[0; 6]);

            let (header, position) = decode(bytes);
            assert_eq!(header.tag, 0x0028_0010);
            assert_eq!(header.vr, vr);
            assert_eq!(header.length, 6);
            assert!(header.explicit);
            assert_eq!(position, 8);
        }
    }

    #[test]
    fn explicit_long_length_vrs_skip_reserved_bytes() {
        for (code, vr) in [
            (b"OB", Vr::OB),
            (b"OD", Vr::OD),
            (b"OF", Vr::OF),
            (b"OW", Vr::OW),
            (b"SQ", Vr::SQ),
            (b"UN", Vr::UN),
            (b"UT", Vr::UT),
        ] {
            let mut bytes = vec![0x09, 0x00, 0x10, 0x10, code[0], code[1], 0x00, 0x00];
            bytes.extend_from_slice(&0x0102u32.to_le_bytes());

            let (header, position) = decode(bytes);
            assert_eq!(header.vr, vr);
            assert_eq!(header.length, 0x0102);
            assert_eq!(position, 12);
        }
    }

    #[test]
    fn one_nonzero_reserved_byte_is_still_explicit() {
        let mut bytes = vec![0x09, 0x00, 0x10, 0x10, b'O', b'B', 0x7F, 0x00];
        bytes.extend_from_slice(&8u32.to_le_bytes());

        let (header, position) = decode(bytes);
        assert_eq!(header.vr, Vr::OB);
        assert_eq!(header.length, 8);
        assert_eq!(position, 12);
    }

    #[test]
    fn both_reserved_bytes_set_means_implicit_length() {
        // "OB" followed by two non-zero bytes is read as a 4-byte implicit length
        let bytes = vec![0x28, 0x00, 0x10, 0x00, b'O', b'B', 0x01, 0x02];

        let (header, position) = decode(bytes);
        assert!(!header.explicit);
        assert_eq!(header.vr, Vr::US);
        assert_eq!(header.length, u32::from_le_bytes([b'O', b'B', 0x01, 0x02]));
        assert_eq!(position, 8);
    }

    #[test]
    fn implicit_vr_comes_from_dictionary() {
        let mut bytes = vec![0x28, 0x00, 0x11, 0x00];
        bytes.extend_from_slice(&2u32.to_le_bytes());

        let (header, _) = decode(bytes);
        assert_eq!(header.vr, Vr::US);
        assert!(!header.explicit);
        assert_eq!(header.length, 2);
    }

    #[test]
    fn implicit_unknown_tag_falls_back() {
        let mut bytes = vec![0x09, 0x00, 0x01, 0x10];
        bytes.extend_from_slice(&4u32.to_le_bytes());

        let (header, _) = decode(bytes);
        assert_eq!(header.vr, Vr::Implicit);
        assert_eq!(header.length, 4);
    }

    #[test]
    fn undefined_length_is_zeroed_and_flagged() {
        let bytes = vec![0xFE, 0xFF, 0x00, 0xE0, 0xFF, 0xFF, 0xFF, 0xFF];

        let (header, _) = decode(bytes);
        assert_eq!(header.tag, 0xFFFE_E000);
        assert!(header.undefined_length);
        assert_eq!(header.length, 0);
    }

    #[test]
    fn length_thirteen_before_any_odd_offset_becomes_ten() {
        let bytes = vec![0x09, 0x00, 0x10, 0x10, b'L', b'O', 13, 0x00];

        let (header, _) = decode(bytes);
        assert_eq!(header.length, 10);
    }

    #[test]
    fn big_endian_switch_happens_after_meta_group() {
        let dict = DataElementDictionary::standard();
        let mut bytes = vec![0x02, 0x00, 0x12, 0x00, b'U', b'I', 0x02, 0x00, b'1', 0x00];
        bytes.extend_from_slice(&[0x00, 0x28, 0x00, 0x10, b'U', b'S', 0x00, 0x02]);

        let mut cursor = ByteCursor::new(Cursor::new(bytes));
        let mut decoder = TagDecoder::new();
        decoder.mark_big_endian_syntax();

        let meta = decoder.next_tag_header(&mut cursor, &dict).unwrap();
        assert_eq!(meta.tag, 0x0002_0012);
        assert!(!cursor.is_big_endian());
        cursor.skip(meta.length as u64).unwrap();

        let rows = decoder.next_tag_header(&mut cursor, &dict).unwrap();
        assert_eq!(rows.tag, 0x0028_0010);
        assert_eq!(rows.length, 2);
        assert!(cursor.is_big_endian());
    }
}
