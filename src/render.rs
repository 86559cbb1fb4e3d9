use std::path::Path;

use byteorder::{ByteOrder, LittleEndian};
use image::{ImageBuffer, Luma};

use crate::error::DicomError;
use crate::model::DicomInfo;
use crate::CommonResult;

pub type GreyImage = ImageBuffer<Luma<u8>, Vec<u8>>;

/// Maps a decoded pixel buffer to 8-bit grey levels.
///
/// The window center/width from the file is applied to the rescaled values;
/// without a window the full range of the image is stretched instead.
pub fn render_to_luma(info: &DicomInfo, pixels: &[u8]) -> CommonResult<GreyImage> {
    let required = info.required_bytes();
    if pixels.len() < required {
        return Err(DicomError::BufferTooSmall {
            required,
            provided: pixels.len(),
        });
    }

    let max_stored = match info.pixel_depth {
        8 => 255.0,
        16 => 65535.0,
        other => {
            return Err(DicomError::UnsupportedPixelLayout(format!(
                "{} bits allocated",
                other
            )))
        }
    };
    let monochrome1 = info.is_monochrome1();
    let offset = info.value_offset as f64;

    // 先还原成物理值（去掉反转和偏移），再做窗宽窗位
    let values = stored_samples(info, &pixels[..required])
        .map(|v| if monochrome1 { max_stored - v } else { v })
        .map(|v| v - offset)
        .collect::<Vec<f64>>();

    let (lower, upper) = if info.window_width > 0 {
        let center = info.window_center as f64;
        let width = info.window_width as f64;
        (center - width / 2.0, center + width / 2.0)
    } else {
        let data_min = values.iter().cloned().fold(f64::INFINITY, f64::min);
        let data_max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        (data_min, data_max)
    };

    let range = upper - lower;

    let mut grey = values
        .iter()
        .map(|v| {
            if range <= 0.0 {
                0.0
            } else {
                ((v - lower) / range).clamp(0.0, 1.0) * 255.0
            }
        })
        .map(|v| v.round() as u8)
        .collect::<Vec<u8>>();

    // 对MONOCHROME1的显示进行额外处理
    if monochrome1 {
        grey.iter_mut().for_each(|v| *v = 255 - *v);
    }

    ImageBuffer::from_raw(info.width as u32, info.height as u32, grey)
        .ok_or_else(|| DicomError::UnsupportedPixelLayout("image size mismatch".to_string()))
}

pub fn write_image_pixels_to_file(
    info: &DicomInfo,
    pixels: &[u8],
    path: impl AsRef<Path>,
) -> CommonResult<()> {
    let img = render_to_luma(info, pixels)?;

    img.save(path.as_ref())?;

    log::info!(
        "{}x{} image written to {}",
        info.width,
        info.height,
        path.as_ref().display()
    );

    Ok(())
}

fn stored_samples<'a>(info: &DicomInfo, pixels: &'a [u8]) -> Box<dyn Iterator<Item = f64> + 'a> {
    if info.pixel_depth == 8 {
        Box::new(pixels.iter().map(|v| *v as f64))
    } else {
        Box::new(pixels.chunks_exact(2).map(|pair| LittleEndian::read_u16(pair) as f64))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn info(depth: u16) -> DicomInfo {
        DicomInfo {
            height: 1,
            width: 4,
            pixel_depth: depth,
            photometric_interpretation: "MONOCHROME2".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn stretches_without_window() {
        let img = render_to_luma(&info(8), &[10, 20, 30, 40]).unwrap();

        assert_eq!(img.as_raw(), &vec![0, 85, 170, 255]);
    }

    #[test]
    fn applies_window_to_physical_values() {
        let mut info = info(16);
        info.window_center = 0;
        info.window_width = 200;
        info.rescale_intercept = -1024.0;
        info.value_offset = 32768;

        let mut pixels = Vec::new();
        for physical in [-500i32, -100, 0, 100] {
            pixels.extend_from_slice(&((physical + 32768) as u16).to_le_bytes());
        }

        let img = render_to_luma(&info, &pixels).unwrap();
        assert_eq!(img.as_raw(), &vec![0, 0, 128, 255]);
    }

    #[test]
    fn monochrome1_renders_dark_for_high_values() {
        let mut info = info(8);
        info.photometric_interpretation = "MONOCHROME1".to_string();

        // decoded buffer is already inverted: stored 245 was raw 10
        let img = render_to_luma(&info, &[245, 235, 225, 215]).unwrap();
        assert_eq!(img.as_raw(), &vec![255, 170, 85, 0]);
    }

    #[test]
    fn writes_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.png");

        write_image_pixels_to_file(&info(8), &[0, 64, 128, 255], &path).unwrap();

        let loaded = image::open(&path).unwrap().to_luma8();
        assert_eq!(loaded.dimensions(), (4, 1));
    }

    #[test]
    fn short_buffer() {
        assert!(matches!(
            render_to_luma(&info(16), &[0; 7]),
            Err(DicomError::BufferTooSmall { .. })
        ));
    }
}
