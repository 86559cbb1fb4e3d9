use std::io::{Read, Seek, SeekFrom};

use byteorder::{BigEndian, ByteOrder, LittleEndian};

use crate::error::DicomError;
use crate::CommonResult;

/// Read position over a seekable source.
///
/// Every read hands back an owned buffer, so a cursor can be dropped or
/// replaced between elements without anything borrowing from it.
pub struct ByteCursor<R> {
    source: R,
    position: u64,
    big_endian: bool,
}

impl<R: Read + Seek> ByteCursor<R> {
    pub fn new(source: R) -> Self {
        ByteCursor {
            source,
            position: 0,
            big_endian: false,
        }
    }

    pub fn position(&self) -> u64 {
        self.position
    }

    pub fn is_big_endian(&self) -> bool {
        self.big_endian
    }

    pub fn set_big_endian(&mut self, big_endian: bool) {
        self.big_endian = big_endian;
    }

    pub fn seek_to(&mut self, offset: u64) -> CommonResult<()> {
        self.position = self.source.seek(SeekFrom::Start(offset))?;

        Ok(())
    }

    /// Moves forward without reading. Skipping past the end is not detected
    /// here; the next read reports the truncation.
    pub fn skip(&mut self, length: u64) -> CommonResult<()> {
        if length > 0 {
            self.position = self.source.seek(SeekFrom::Current(length as i64))?;
        }

        Ok(())
    }

    pub fn read_bytes(&mut self, length: usize) -> CommonResult<Vec<u8>> {
        let mut buffer = Vec::with_capacity(length.min(1 << 16));

        let got = (&mut self.source)
            .take(length as u64)
            .read_to_end(&mut buffer)?;

        let offset = self.position;
        self.position += got as u64;

        if got < length {
            return Err(DicomError::TruncatedStream {
                offset,
                wanted: length,
                got,
            });
        }

        Ok(buffer)
    }

    /// Fills `buffer` completely or fails with `TruncatedStream`.
    pub fn read_into(&mut self, buffer: &mut [u8]) -> CommonResult<()> {
        let mut filled = 0;

        while filled < buffer.len() {
            let count = self.source.read(&mut buffer[filled..])?;
            if count == 0 {
                break;
            }
            filled += count;
        }

        let offset = self.position;
        self.position += filled as u64;

        if filled < buffer.len() {
            return Err(DicomError::TruncatedStream {
                offset,
                wanted: buffer.len(),
                got: filled,
            });
        }

        Ok(())
    }

    pub fn read_u16(&mut self) -> CommonResult<u16> {
        let bytes = self.read_bytes(2)?;

        Ok(self.u16_from(&bytes))
    }

    pub fn read_u32(&mut self) -> CommonResult<u32> {
        let bytes = self.read_bytes(4)?;

        Ok(self.u32_from(&bytes))
    }

    /// Interprets two already-read bytes in the cursor's byte order.
    pub fn u16_from(&self, bytes: &[u8]) -> u16 {
        if self.big_endian {
            BigEndian::read_u16(bytes)
        } else {
            LittleEndian::read_u16(bytes)
        }
    }

    pub fn u32_from(&self, bytes: &[u8]) -> u32 {
        if self.big_endian {
            BigEndian::read_u32(bytes)
        } else {
            LittleEndian::read_u32(bytes)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn reads_track_position_and_byte_order() {
        let mut cursor = ByteCursor::new(Cursor::new(vec![0x01, 0x02, 0x03, 0x04, 0x05, 0x06]));

        assert_eq!(cursor.read_u16().unwrap(), 0x0201);
        cursor.set_big_endian(true);
        assert_eq!(cursor.read_u16().unwrap(), 0x0304);
        assert_eq!(cursor.position(), 4);

        cursor.seek_to(0).unwrap();
        assert_eq!(cursor.read_u32().unwrap(), 0x0102_0304);
    }

    #[test]
    fn short_read_is_a_truncation_not_a_panic() {
        let mut cursor = ByteCursor::new(Cursor::new(vec![0xAA, 0xBB, 0xCC]));

        cursor.skip(1).unwrap();
        match cursor.read_bytes(4) {
            Err(DicomError::TruncatedStream { offset, wanted, got }) => {
                assert_eq!((offset, wanted, got), (1, 4, 2));
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn read_into_fills_or_fails() {
        let mut cursor = ByteCursor::new(Cursor::new(vec![1, 2, 3]));
        let mut buffer = [0u8; 2];
        cursor.read_into(&mut buffer).unwrap();
        assert_eq!(buffer, [1, 2]);

        let mut rest = [0u8; 2];
        assert!(matches!(
            cursor.read_into(&mut rest),
            Err(DicomError::TruncatedStream { got: 1, .. })
        ));
    }
}
