use std::{
    fs::{File, OpenOptions},
    path::Path,
};

use crate::error::DicomError;
use crate::model::Tag;
use crate::CommonResult;

pub fn get_file(file_path: &Path) -> CommonResult<File> {
    if !file_path.exists() {
        return Err(DicomError::FileNotFound(file_path.to_path_buf()));
    }

    let f = OpenOptions::new()
        .read(true)
        .open(file_path)
        .map_err(|source| DicomError::OpenFailed {
            path: file_path.to_path_buf(),
            source,
        })?;

    Ok(f)
}

/// Eight upper-case hex digits, group first: `0x00280010` -> `"00280010"`.
pub fn tag_hex(tag: Tag) -> String {
    format!("{:08X}", tag)
}

/// `(GGGG,EEEE)` notation.
pub fn format_tag(tag: Tag) -> String {
    format!("({:04X},{:04X})", tag >> 16, tag & 0xFFFF)
}

// 文本值两端可能带空格，尾部可能用\0补齐
pub fn trim_value(text: &str) -> String {
    text.trim_end_matches('\0').trim().to_string()
}

/// Parses a leading decimal integer the way `atoi` does: optional leading
/// whitespace and sign, digits up to the first non-digit, 0 when none.
pub fn parse_leading_int(bytes: &[u8]) -> i32 {
    let mut iter = bytes
        .iter()
        .copied()
        .skip_while(|b| b.is_ascii_whitespace())
        .peekable();

    let negative = match iter.peek() {
        Some(b'-') => {
            iter.next();
            true
        }
        Some(b'+') => {
            iter.next();
            false
        }
        _ => false,
    };

    let mut value: i64 = 0;
    for b in iter.take_while(|b| b.is_ascii_digit()) {
        value = (value * 10 + (b - b'0') as i64).min(i32::MAX as i64 + 1);
    }

    if negative {
        value = -value;
    }

    value.clamp(i32::MIN as i64, i32::MAX as i64) as i32
}

/// Splits a multi-valued decimal string (`"0.5\0.5"`) into numbers.
/// Values that do not parse are dropped.
pub fn parse_decimal_strings(text: &str) -> Vec<f64> {
    text.split('\\')
        .map(trim_value)
        .filter(|v| !v.is_empty())
        .filter_map(|v| v.parse::<f64>().ok())
        .collect()
}

pub fn show_buffer_by_hex(buffer: &[u8]) -> String {
    let result = buffer
        .iter()
        .map(|v| format!("{:02X}", v))
        .collect::<Vec<String>>();

    result.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_formatting() {
        assert_eq!(tag_hex(0x7FE0_0010), "7FE00010");
        assert_eq!(format_tag(0x0028_0010), "(0028,0010)");
    }

    #[test]
    fn leading_int_behaves_like_atoi() {
        assert_eq!(parse_leading_int(b"40  "), 40);
        assert_eq!(parse_leading_int(b" -600"), -600);
        assert_eq!(parse_leading_int(b"40.5"), 40);
        assert_eq!(parse_leading_int(b"abc"), 0);
        assert_eq!(parse_leading_int(b""), 0);
        assert_eq!(parse_leading_int(b"+12\0"), 12);
    }

    #[test]
    fn decimal_strings_split_on_backslash() {
        assert_eq!(parse_decimal_strings("0.5\\0.25 "), vec![0.5, 0.25]);
        assert_eq!(parse_decimal_strings("-1024 "), vec![-1024.0]);
        assert_eq!(parse_decimal_strings("x\\2"), vec![2.0]);
        assert!(parse_decimal_strings("").is_empty());
    }

    #[test]
    fn missing_file_is_reported_as_not_found() {
        let path = Path::new("/definitely/not/here.dcm");
        assert!(matches!(get_file(path), Err(DicomError::FileNotFound(_))));
    }

    #[test]
    fn hex_dump() {
        assert_eq!(show_buffer_by_hex(&[0x44, 0x49, 0x43, 0x4D]), "44 49 43 4D");
    }
}
