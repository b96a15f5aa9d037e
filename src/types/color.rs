use serde::{Deserialize, Serialize};

/// The fixed, ordered highlight palette. Discriminants are the color ids
/// stored in saved pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MinecraftColor {
    White = 0,
    Orange,
    Magenta,
    LightBlue,
    Yellow,
    Lime,
    Pink,
    Gray,
    LightGray,
    Cyan,
    Purple,
    Blue,
    Brown,
    Green,
    Red,
    Black,
}

impl MinecraftColor {
    pub const ALL: [MinecraftColor; 16] = [
        MinecraftColor::White,
        MinecraftColor::Orange,
        MinecraftColor::Magenta,
        MinecraftColor::LightBlue,
        MinecraftColor::Yellow,
        MinecraftColor::Lime,
        MinecraftColor::Pink,
        MinecraftColor::Gray,
        MinecraftColor::LightGray,
        MinecraftColor::Cyan,
        MinecraftColor::Purple,
        MinecraftColor::Blue,
        MinecraftColor::Brown,
        MinecraftColor::Green,
        MinecraftColor::Red,
        MinecraftColor::Black,
    ];

    pub const FIRST_ID: i32 = 0;
    pub const LAST_ID: i32 = Self::ALL.len() as i32 - 1;

    /// Resolves any integer to a palette entry, wrapping out-of-range ids.
    pub fn from_id(id: i32) -> Self {
        Self::ALL[id.rem_euclid(Self::ALL.len() as i32) as usize]
    }

    pub fn id(self) -> i32 {
        self as i32
    }

    /// Packed 0xRRGGBB value.
    pub fn rgb(self) -> u32 {
        match self {
            MinecraftColor::White => 0xF9FFFE,
            MinecraftColor::Orange => 0xF9801D,
            MinecraftColor::Magenta => 0xC74EBD,
            MinecraftColor::LightBlue => 0x3AB3DA,
            MinecraftColor::Yellow => 0xFED83D,
            MinecraftColor::Lime => 0x80C71F,
            MinecraftColor::Pink => 0xF38BAA,
            MinecraftColor::Gray => 0x474F52,
            MinecraftColor::LightGray => 0x9D9D97,
            MinecraftColor::Cyan => 0x169C9C,
            MinecraftColor::Purple => 0x8932B8,
            MinecraftColor::Blue => 0x3C44AA,
            MinecraftColor::Brown => 0x835432,
            MinecraftColor::Green => 0x5E7C16,
            MinecraftColor::Red => 0xB02E26,
            MinecraftColor::Black => 0x1D1D21,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            MinecraftColor::White => "white",
            MinecraftColor::Orange => "orange",
            MinecraftColor::Magenta => "magenta",
            MinecraftColor::LightBlue => "light_blue",
            MinecraftColor::Yellow => "yellow",
            MinecraftColor::Lime => "lime",
            MinecraftColor::Pink => "pink",
            MinecraftColor::Gray => "gray",
            MinecraftColor::LightGray => "light_gray",
            MinecraftColor::Cyan => "cyan",
            MinecraftColor::Purple => "purple",
            MinecraftColor::Blue => "blue",
            MinecraftColor::Brown => "brown",
            MinecraftColor::Green => "green",
            MinecraftColor::Red => "red",
            MinecraftColor::Black => "black",
        }
    }
}

/// Steps a color id one place through the palette, backwards when `inverted`.
///
/// Total over all of `i32`: ids outside the palette are first wrapped into it.
pub fn cycle_color_id(id: i32, inverted: bool) -> i32 {
    let len = MinecraftColor::ALL.len() as i32;
    let current = id.rem_euclid(len);
    let step = if inverted { len - 1 } else { 1 };
    (current + step) % len
}
