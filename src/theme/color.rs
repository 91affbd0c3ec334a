use std::fmt;

/// Hex colour as written in the palette, `#rgb` or `#rrggbb`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    hex: &'static str,
}

impl Color {
    pub const fn hex(hex: &'static str) -> Self {
        Self { hex }
    }

    pub fn as_str(&self) -> &'static str {
        self.hex
    }

    /// Red, green and blue channels; `None` when the literal is not valid hex.
    pub fn rgb(&self) -> Option<(u8, u8, u8)> {
        let digits = self.hex.strip_prefix('#')?;
        if !digits.is_ascii() {
            return None;
        }

        match digits.len() {
            3 => {
                let channel = |i: usize| u8::from_str_radix(&digits[i..=i], 16).ok().map(|v| v * 17);
                Some((channel(0)?, channel(1)?, channel(2)?))
            }
            6 => {
                let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
                Some((channel(0)?, channel(2)?, channel(4)?))
            }
            _ => None,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.rgb() {
            Some((r, g, b)) => write!(f, "{r},{g},{b}"),
            None => f.write_str(self.hex),
        }
    }
}
