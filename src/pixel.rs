use std::io::{Read, Seek};

use byteorder::{BigEndian, ByteOrder, LittleEndian};

use crate::cursor::ByteCursor;
use crate::error::DicomError;
use crate::model::DicomInfo;
use crate::CommonResult;

/// Offset added to decoded 16-bit samples when the rescaled values can go
/// below zero: signed data or a negative intercept. 8-bit samples are never
/// offset, negative results clamp to 0.
pub fn value_offset(info: &DicomInfo) -> i32 {
    if info.pixel_depth != 16 {
        return 0;
    }

    if info.is_signed() || info.rescale_intercept < 0.0 {
        32768
    } else {
        0
    }
}

/// Turns the stored pixel payload into rescaled, unsigned, display-order
/// samples inside a caller buffer.
#[derive(Debug, Clone)]
pub struct PixelDecoder {
    offset: u64,
    pixels: usize,
    depth: u16,
    signed: bool,
    big_endian: bool,
    monochrome1: bool,
    slope: f64,
    intercept: f64,
    value_offset: i64,
}

impl PixelDecoder {
    pub fn new(info: &DicomInfo) -> CommonResult<Self> {
        if info.pixel_data_offset == 0 {
            return Err(DicomError::GeometryMissing("pixel data offset"));
        }
        if info.height == 0 {
            return Err(DicomError::GeometryMissing("rows"));
        }
        if info.width == 0 {
            return Err(DicomError::GeometryMissing("columns"));
        }
        if info.samples_per_pixel != 1 {
            return Err(DicomError::UnsupportedPixelLayout(format!(
                "{} samples per pixel",
                info.samples_per_pixel
            )));
        }
        if info.pixel_depth != 8 && info.pixel_depth != 16 {
            return Err(DicomError::UnsupportedPixelLayout(format!(
                "{} bits allocated",
                info.pixel_depth
            )));
        }

        Ok(PixelDecoder {
            offset: info.pixel_data_offset,
            pixels: info.height as usize * info.width as usize,
            depth: info.pixel_depth,
            signed: info.is_signed(),
            big_endian: info.big_endian,
            monochrome1: info.is_monochrome1(),
            slope: info.rescale_slope,
            intercept: info.rescale_intercept,
            value_offset: value_offset(info) as i64,
        })
    }

    pub fn required_bytes(&self) -> usize {
        self.pixels * (self.depth as usize / 8)
    }

    /// Reads the payload into `buffer` and converts it. Nothing is written
    /// when the buffer is too small.
    pub fn decode_pixels<R: Read + Seek>(
        &self,
        cursor: &mut ByteCursor<R>,
        buffer: &mut [u8],
    ) -> CommonResult<usize> {
        let required = self.check_capacity(buffer)?;

        cursor.seek_to(self.offset)?;
        cursor.read_into(&mut buffer[..required])?;

        log::debug!("{} bytes loaded", required);

        self.convert_in_place(buffer)?;

        Ok(required)
    }

    /// Converts raw stored samples already sitting in `buffer`.
    pub fn convert_in_place(&self, buffer: &mut [u8]) -> CommonResult<()> {
        let required = self.check_capacity(buffer)?;
        let samples = &mut buffer[..required];

        if self.depth == 8 {
            for sample in samples.iter_mut() {
                let raw = if self.signed {
                    *sample as i8 as i64
                } else {
                    *sample as i64
                };

                let mut pix_val = self.rescale(raw).clamp(0, 255);

                if self.monochrome1 {
                    pix_val = 255 - pix_val;
                }

                *sample = pix_val as u8;
            }
        } else {
            for pair in samples.chunks_exact_mut(2) {
                let stored = if self.big_endian {
                    BigEndian::read_u16(pair)
                } else {
                    LittleEndian::read_u16(pair)
                };

                // 像素表示为1时是补码
                let raw = if self.signed {
                    stored as i16 as i64
                } else {
                    stored as i64
                };

                let mut pix_val = self.rescale(raw).clamp(0, 65535);

                if self.monochrome1 {
                    pix_val = 65535 - pix_val;
                }

                LittleEndian::write_u16(pair, pix_val as u16);
            }
        }

        Ok(())
    }

    // value * slope + intercept + 0.5，向零截断；偏移量先加上，负值也能正确舍入
    fn rescale(&self, raw: i64) -> i64 {
        (raw as f64 * self.slope + self.intercept + self.value_offset as f64 + 0.5) as i64
    }

    fn check_capacity(&self, buffer: &[u8]) -> CommonResult<usize> {
        let required = self.required_bytes();

        if buffer.len() < required {
            log::error!(
                "{} bytes required, {} provided",
                required,
                buffer.len()
            );
            return Err(DicomError::BufferTooSmall {
                required,
                provided: buffer.len(),
            });
        }

        Ok(required)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn info(depth: u16) -> DicomInfo {
        DicomInfo {
            height: 2,
            width: 2,
            pixel_depth: depth,
            bits_stored: depth,
            photometric_interpretation: "MONOCHROME2".to_string(),
            pixel_data_offset: 4,
            ..Default::default()
        }
    }

    #[test]
    fn eight_bit_identity() {
        let decoder = PixelDecoder::new(&info(8)).unwrap();
        let mut buffer = [10u8, 20, 30, 40];

        decoder.convert_in_place(&mut buffer).unwrap();
        assert_eq!(buffer, [10, 20, 30, 40]);
    }

    #[test]
    fn eight_bit_monochrome1_inverts() {
        let mut info = info(8);
        info.photometric_interpretation = "MONOCHROME1".to_string();
        let decoder = PixelDecoder::new(&info).unwrap();
        let mut buffer = [0u8, 255, 100, 1];

        decoder.convert_in_place(&mut buffer).unwrap();
        assert_eq!(buffer, [255, 0, 155, 254]);
    }

    #[test]
    fn eight_bit_rescale_rounds_and_clamps() {
        let mut info = info(8);
        info.rescale_slope = 1.5;
        info.rescale_intercept = 10.0;
        let decoder = PixelDecoder::new(&info).unwrap();
        let mut buffer = [1u8, 3, 200, 0];

        decoder.convert_in_place(&mut buffer).unwrap();
        // 1.5+10.5=12, 4.5+10.5=15, 300+10.5 -> 255, 10.5 -> 10
        assert_eq!(buffer, [12, 15, 255, 10]);
    }

    #[test]
    fn eight_bit_negative_intercept_is_not_offset() {
        let mut info = info(8);
        info.rescale_intercept = -10.0;
        assert_eq!(value_offset(&info), 0);

        let decoder = PixelDecoder::new(&info).unwrap();
        let mut buffer = [20u8, 30, 40, 50];

        decoder.convert_in_place(&mut buffer).unwrap();
        assert_eq!(buffer, [10, 20, 30, 40]);
    }

    #[test]
    fn eight_bit_signed_negatives_clamp_to_zero() {
        let mut info = info(8);
        info.pixel_representation = 1;
        assert_eq!(value_offset(&info), 0);

        let decoder = PixelDecoder::new(&info).unwrap();
        // -1, -128, 5, 127 as two's complement
        let mut buffer = [0xFFu8, 0x80, 0x05, 0x7F];

        decoder.convert_in_place(&mut buffer).unwrap();
        assert_eq!(buffer, [0, 0, 5, 127]);
    }

    #[test]
    fn sixteen_bit_big_endian_source_is_stored_little_endian() {
        let mut info = info(16);
        info.big_endian = true;
        let decoder = PixelDecoder::new(&info).unwrap();
        let mut buffer = [0x01, 0x02, 0x00, 0xFF, 0xFF, 0xFF, 0x00, 0x00];

        decoder.convert_in_place(&mut buffer).unwrap();
        assert_eq!(buffer, [0x02, 0x01, 0xFF, 0x00, 0xFF, 0xFF, 0x00, 0x00]);
    }

    #[test]
    fn sixteen_bit_signed_values_are_offset() {
        let mut info = info(16);
        info.pixel_representation = 1;
        let decoder = PixelDecoder::new(&info).unwrap();

        let mut buffer = Vec::new();
        for value in [-1000i16, 0, 1000, i16::MIN] {
            buffer.extend_from_slice(&value.to_le_bytes());
        }

        decoder.convert_in_place(&mut buffer).unwrap();
        let decoded = buffer
            .chunks_exact(2)
            .map(LittleEndian::read_u16)
            .collect::<Vec<u16>>();
        assert_eq!(decoded, vec![31768, 32768, 33768, 0]);
    }

    #[test]
    fn sixteen_bit_monochrome1_inverts() {
        let mut info = info(16);
        info.photometric_interpretation = "MONOCHROME1".to_string();
        let decoder = PixelDecoder::new(&info).unwrap();
        let mut buffer = [0x00, 0x00, 0xFF, 0xFF, 0x10, 0x00, 0x00, 0x01];

        decoder.convert_in_place(&mut buffer).unwrap();
        let decoded = buffer
            .chunks_exact(2)
            .map(LittleEndian::read_u16)
            .collect::<Vec<u16>>();
        assert_eq!(decoded, vec![65535, 0, 65519, 65279]);
    }

    #[test]
    fn negative_intercept_on_unsigned_data_gets_offset() {
        let mut info = info(16);
        info.rescale_intercept = -1024.0;
        assert_eq!(value_offset(&info), 32768);

        let decoder = PixelDecoder::new(&info).unwrap();
        let mut buffer = [0x00, 0x00, 0x00, 0x04, 0, 0, 0, 0];
        decoder.convert_in_place(&mut buffer).unwrap();
        assert_eq!(LittleEndian::read_u16(&buffer[..2]), 32768 - 1024);
        assert_eq!(LittleEndian::read_u16(&buffer[2..4]), 32768);
    }

    #[test]
    fn short_buffer_is_rejected_untouched() {
        let decoder = PixelDecoder::new(&info(16)).unwrap();
        let mut cursor = ByteCursor::new(Cursor::new(vec![0xAB; 16]));
        let mut buffer = vec![0u8; 7];

        let result = decoder.decode_pixels(&mut cursor, &mut buffer);
        assert!(matches!(
            result,
            Err(DicomError::BufferTooSmall {
                required: 8,
                provided: 7
            })
        ));
        assert!(buffer.iter().all(|b| *b == 0));
    }

    #[test]
    fn layout_checks() {
        let mut rgb = info(8);
        rgb.samples_per_pixel = 3;
        assert!(matches!(
            PixelDecoder::new(&rgb),
            Err(DicomError::UnsupportedPixelLayout(_))
        ));

        let mut twelve = info(12);
        twelve.pixel_depth = 12;
        assert!(matches!(
            PixelDecoder::new(&twelve),
            Err(DicomError::UnsupportedPixelLayout(_))
        ));

        let mut no_offset = info(8);
        no_offset.pixel_data_offset = 0;
        assert!(matches!(
            PixelDecoder::new(&no_offset),
            Err(DicomError::GeometryMissing(_))
        ));
    }

    #[test]
    fn decode_reads_from_offset() {
        let decoder = PixelDecoder::new(&info(8)).unwrap();
        let mut cursor = ByteCursor::new(Cursor::new(vec![9, 9, 9, 9, 1, 2, 3, 4, 9]));
        let mut buffer = vec![0u8; 6];

        let used = decoder.decode_pixels(&mut cursor, &mut buffer).unwrap();
        assert_eq!(used, 4);
        assert_eq!(buffer, vec![1, 2, 3, 4, 0, 0]);
    }
}
