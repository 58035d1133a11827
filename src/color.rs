/// 4-bit ANSI colors, numbered in console attribute order.
#[repr(i8)]
#[derive(Debug, Clone, Copy, Ord, PartialOrd, Eq, PartialEq, Hash, Default)]
pub enum Color {
    Black,
    Blue,
    Green,
    Cyan,
    Red,
    Pink,
    Yellow,
    White,
    LightBlack,
    LightBlue,
    LightGreen,
    LightCyan,
    LightRed,
    LightPink,
    LightYellow,
    LightWhite,

    /// The terminal's own default foreground or background.
    #[default]
    Default = -1,
}

impl Color {
    /// Every concrete color, ordered by attribute index.
    pub const ALL: [Color; 16] = [
        Color::Black,
        Color::Blue,
        Color::Green,
        Color::Cyan,
        Color::Red,
        Color::Pink,
        Color::Yellow,
        Color::White,
        Color::LightBlack,
        Color::LightBlue,
        Color::LightGreen,
        Color::LightCyan,
        Color::LightRed,
        Color::LightPink,
        Color::LightYellow,
        Color::LightWhite,
    ];

    pub fn index(self) -> i8 {
        self as i8
    }

    pub fn from_index(index: i8) -> Option<Color> {
        match index {
            -1 => Some(Color::Default),
            0..=15 => Some(Self::ALL[index as usize]),
            _ => None,
        }
    }

    pub fn is_light(self) -> bool {
        self.index() >= 8
    }
}

#[cfg(test)]
#[path = "../tests/unit/color.rs"]
mod tests;
