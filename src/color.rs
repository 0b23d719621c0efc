use std::fmt;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ColorError {
    #[error("color `{0}` must be six hex digits, optionally prefixed with #")]
    Malformed(String),
}

/// Overlay tint; alpha is tracked separately on the preset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    pub fn from_hex(s: &str) -> Result<Self, ColorError> {
        let digits = s.strip_prefix('#').unwrap_or(s);
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ColorError::Malformed(s.to_string()));
        }
        let channel = |i: usize| {
            u8::from_str_radix(&digits[i..i + 2], 16)
                .map_err(|_| ColorError::Malformed(s.to_string()))
        };
        Ok(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }

    /// Win32 COLORREF layout (0x00BBGGRR)
    pub fn to_colorref(self) -> u32 {
        (self.b as u32) << 16 | (self.g as u32) << 8 | self.r as u32
    }

    pub fn from_colorref(value: u32) -> Self {
        Self::new(
            (value & 0xFF) as u8,
            ((value >> 8) & 0xFF) as u8,
            ((value >> 16) & 0xFF) as u8,
        )
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_is_lowercase_with_hash() {
        assert_eq!(Rgb::new(255, 16, 0).to_hex(), "#ff1000");
    }

    #[test]
    fn parses_with_or_without_hash() {
        assert_eq!(Rgb::from_hex("#1A2b3C").unwrap(), Rgb::new(0x1a, 0x2b, 0x3c));
        assert_eq!(Rgb::from_hex("000000").unwrap(), Rgb::BLACK);
    }

    #[test]
    fn rejects_malformed() {
        for bad in ["", "#fff", "#12345g", "#1234567", "#+12345"] {
            assert!(Rgb::from_hex(bad).is_err(), "{bad} should be rejected");
        }
    }

    #[test]
    fn colorref_swaps_channels() {
        let c = Rgb::new(0x11, 0x22, 0x33);
        assert_eq!(c.to_colorref(), 0x0033_2211);
        assert_eq!(Rgb::from_colorref(0x0033_2211), c);
    }
}
