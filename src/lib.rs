#![doc = include_str!("../README.md")]
mod protocol;
pub mod encoder;
pub mod validate;

pub use encoder::make_content;
pub use protocol::*;
pub use validate::{try_make_content, ValidationError};

/// CRC-16/CCITT-FALSE register
///
/// Starts from 0xFFFF and uses the 0x1021 polynomial.
/// Feeds the UTF-16 code units of `input`, only the low byte of each unit reaches the register
pub fn crc16_value(input: &str) -> u16 {
    let mut crc: u16 = 0xFFFF;
    for unit in input.encode_utf16() {
        crc ^= unit << 8;
        for _bit in 0..8 {
            if crc & 0x8000 != 0 {
                crc = (crc << 1) ^ 0x1021;
            } else {
                crc <<= 1;
            }
        }
    }
    crc
}

/// CRC-16/CCITT-FALSE rendered as 4 uppercase hex digits
///
/// See [`crc16_value`] for the register itself.
pub fn crc16(input: &str) -> String {
    hex::encode_upper(crc16_value(input).to_be_bytes())
}

/// Checks the trailing checksum field of a generated payload
///
/// True when `content` ends with [`CRC_TAG`] followed by 4 hex digits
/// that equal the [`crc16`] of everything before them.
pub fn checksum_matches(content: &str) -> bool {
    let Some(split) = content.len().checked_sub(4) else {
        return false;
    };
    if !content.is_char_boundary(split) {
        return false;
    }
    let (covered, sent) = content.split_at(split);
    covered.ends_with(CRC_TAG) && crc16(covered) == sent
}
