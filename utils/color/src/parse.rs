use super::HexColorError;

const fn hex_digit(b: u8) -> u8 {
    match b {
        b'0'..=b'9' => b - b'0',
        b'a'..=b'f' => b - b'a' + 10,
        b'A'..=b'F' => b - b'A' + 10,
        _ => panic!("invalid hex digit"),
    }
}

const fn hex_byte(s: &[u8], i: usize) -> u8 {
    (hex_digit(s[i]) << 4) | hex_digit(s[i + 1])
}

const fn prefix_len(bytes: &[u8]) -> usize {
    if !bytes.is_empty() && bytes[0] == b'#' {
        1
    } else if bytes.len() >= 2 && bytes[0] == b'0' && (bytes[1] == b'x' || bytes[1] == b'X') {
        2
    } else {
        0
    }
}

/// Compile-time parser for palette constants. Panics on malformed input.
pub const fn parse_hex_color(s: &str) -> (u8, u8, u8) {
    let bytes = s.as_bytes();
    let i = prefix_len(bytes);
    assert!(bytes.len() - i == 6, "expected 6 hex digits");

    (
        hex_byte(bytes, i),
        hex_byte(bytes, i + 2),
        hex_byte(bytes, i + 4),
    )
}

const fn runtime_digit(b: u8, index: usize) -> Result<u8, HexColorError> {
    match b {
        b'0'..=b'9' => Ok(b - b'0'),
        b'a'..=b'f' => Ok(b - b'a' + 10),
        b'A'..=b'F' => Ok(b - b'A' + 10),
        _ => Err(HexColorError::InvalidDigit(index)),
    }
}

/// Parses `#RRGGBB`, `0xRRGGBB` or bare `RRGGBB` from user input.
pub fn parse_hex_color_runtime(s: &str) -> Result<(u8, u8, u8), HexColorError> {
    let bytes = s.trim().as_bytes();
    let offset = prefix_len(bytes);
    if bytes.len().saturating_sub(offset) != 6 {
        return Err(HexColorError::InvalidLength);
    }

    let channel = |at: usize| -> Result<u8, HexColorError> {
        Ok((runtime_digit(bytes[at], at)? << 4) | runtime_digit(bytes[at + 1], at + 1)?)
    };
    Ok((channel(offset)?, channel(offset + 2)?, channel(offset + 4)?))
}
