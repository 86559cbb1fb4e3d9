#![allow(dead_code)]

use std::io::Write;

use tempfile::NamedTempFile;

pub const EXPLICIT_LITTLE_ENDIAN: &str = "1.2.840.10008.1.2.1";
pub const IMPLICIT_LITTLE_ENDIAN: &str = "1.2.840.10008.1.2";
pub const EXPLICIT_BIG_ENDIAN: &str = "1.2.840.10008.1.2.2";
pub const JPEG_BASELINE: &str = "1.2.840.10008.1.2.4.50";

/// Builds synthetic DICOM byte streams element by element.
pub struct DicomBuilder {
    bytes: Vec<u8>,
    implicit: bool,
    big_endian: bool,
}

impl DicomBuilder {
    /// 128-byte preamble and the `DICM` magic.
    pub fn new() -> Self {
        let mut bytes = vec![0u8; 128];
        bytes.extend_from_slice(b"DICM");

        DicomBuilder {
            bytes,
            implicit: false,
            big_endian: false,
        }
    }

    /// No preamble, elements start at byte 0.
    pub fn legacy() -> Self {
        DicomBuilder {
            bytes: Vec::new(),
            implicit: false,
            big_endian: false,
        }
    }

    /// File meta group, always explicit little endian. Switches the
    /// encoding of the elements that follow to match `transfer_syntax`.
    pub fn meta(mut self, transfer_syntax: &str) -> Self {
        self = self.element(0x0002_0001, b"OB", &[0x00, 0x01]);
        self = self.text(0x0002_0010, b"UI", transfer_syntax);

        self.implicit = transfer_syntax == IMPLICIT_LITTLE_ENDIAN;
        self.big_endian = transfer_syntax == EXPLICIT_BIG_ENDIAN;
        self
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    fn u16(&mut self, value: u16) {
        if self.big_endian {
            self.bytes.extend_from_slice(&value.to_be_bytes());
        } else {
            self.bytes.extend_from_slice(&value.to_le_bytes());
        }
    }

    fn u32(&mut self, value: u32) {
        if self.big_endian {
            self.bytes.extend_from_slice(&value.to_be_bytes());
        } else {
            self.bytes.extend_from_slice(&value.to_le_bytes());
        }
    }

    pub fn header(mut self, tag: u32, vr: &[u8; 2], length: u32) -> Self {
        self.u16((tag >> 16) as u16);
        self.u16((tag & 0xFFFF) as u16);

        if self.implicit {
            self.u32(length);
        } else if matches!(vr, b"OB" | b"OW" | b"SQ" | b"UN" | b"UT") {
            self.bytes.extend_from_slice(vr);
            self.bytes.extend_from_slice(&[0, 0]);
            self.u32(length);
        } else {
            self.bytes.extend_from_slice(vr);
            self.u16(length as u16);
        }

        self
    }

    pub fn element(self, tag: u32, vr: &[u8; 2], value: &[u8]) -> Self {
        let mut this = self.header(tag, vr, value.len() as u32);
        this.bytes.extend_from_slice(value);
        this
    }

    /// Text padded to even length: `\0` for UIDs, space otherwise.
    pub fn text(self, tag: u32, vr: &[u8; 2], value: &str) -> Self {
        let mut bytes = value.as_bytes().to_vec();
        if bytes.len() % 2 == 1 {
            bytes.push(if vr == b"UI" { 0 } else { b' ' });
        }
        self.element(tag, vr, &bytes)
    }

    pub fn us(self, tag: u32, value: u16) -> Self {
        let bytes = if self.big_endian {
            value.to_be_bytes()
        } else {
            value.to_le_bytes()
        };
        self.element(tag, b"US", &bytes)
    }

    pub fn raw(mut self, bytes: &[u8]) -> Self {
        self.bytes.extend_from_slice(bytes);
        self
    }

    /// Rows, columns, bits allocated, samples per pixel and photometric
    /// interpretation in one go.
    pub fn image(self, rows: u16, columns: u16, bits: u16, photometric: &str) -> Self {
        self.us(0x0028_0002, 1)
            .text(0x0028_0004, b"CS", photometric)
            .us(0x0028_0010, rows)
            .us(0x0028_0011, columns)
            .us(0x0028_0100, bits)
    }

    pub fn pixel_data(self, data: &[u8]) -> Self {
        self.element(0x7FE0_0010, b"OW", data)
    }

    pub fn build(self) -> Vec<u8> {
        self.bytes
    }
}

pub fn write_temp(bytes: &[u8]) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("temp file");
    file.write_all(bytes).expect("write temp file");
    file.flush().expect("flush temp file");
    file
}
