use smart_leds::RGB8;

pub type Rgb = RGB8;

/// Black, the color every channel starts with after reset
pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };

/// One of the three independently driven output paths
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    Red,
    Green,
    Blue,
}

impl Channel {
    /// All channels in wiring order
    pub const ALL: [Channel; 3] = [Channel::Red, Channel::Green, Channel::Blue];

    /// Index of the channel (red = 0, green = 1, blue = 2)
    pub const fn index(self) -> usize {
        match self {
            Channel::Red => 0,
            Channel::Green => 1,
            Channel::Blue => 2,
        }
    }

    /// Get the channel component of a color
    pub const fn level(self, color: Rgb) -> u8 {
        match self {
            Channel::Red => color.r,
            Channel::Green => color.g,
            Channel::Blue => color.b,
        }
    }
}
