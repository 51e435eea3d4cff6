//! Brightness correction table
//!
//! Maps an 8-bit linear level to a 16-bit compare value so that equal level
//! steps are perceived as equal brightness steps. The curve is the 256-step
//! LED fading table from <https://www.mikrocontroller.net/articles/LED-Fading>.

use crate::color::{Channel, Rgb};

/// Precomputed compare values, indexed by level
///
/// Kept as a `static` so it lives in read-only memory (flash) on the target.
pub static PWM_TABLE: [u16; 256] = [
    0, 1, 1, 1, 1, 1, 1, 1, 1, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 3, //
    3, 3, 3, 3, 3, 3, 4, 4, 4, 4, 4, 4, 5, 5, 5, 5, 5, 6, 6, 6, 6, 7, //
    7, 7, 8, 8, 8, 9, 9, 10, 10, 10, 11, 11, 12, 12, 13, 13, 14, 15, //
    15, 16, 17, 17, 18, 19, 20, 21, 22, 23, 24, 25, 26, 27, 28, 29, //
    31, 32, 33, 35, 36, 38, 40, 41, 43, 45, 47, 49, 52, 54, 56, 59, //
    61, 64, 67, 70, 73, 76, 79, 83, 87, 91, 95, 99, 103, 108, 112, //
    117, 123, 128, 134, 140, 146, 152, 159, 166, 173, 181, 189, 197, //
    206, 215, 225, 235, 245, 256, 267, 279, 292, 304, 318, 332, 347, //
    362, 378, 395, 412, 431, 450, 470, 490, 512, 535, 558, 583, 609, //
    636, 664, 693, 724, 756, 790, 825, 861, 899, 939, 981, 1024, 1069, //
    1117, 1166, 1218, 1272, 1328, 1387, 1448, 1512, 1579, 1649, 1722, //
    1798, 1878, 1961, 2048, 2139, 2233, 2332, 2435, 2543, 2656, 2773, //
    2896, 3025, 3158, 3298, 3444, 3597, 3756, 3922, 4096, 4277, 4467, //
    4664, 4871, 5087, 5312, 5547, 5793, 6049, 6317, 6596, 6889, 7194, //
    7512, 7845, 8192, 8555, 8933, 9329, 9742, 10173, 10624, 11094, //
    11585, 12098, 12634, 13193, 13777, 14387, 15024, 15689, 16384, //
    17109, 17867, 18658, 19484, 20346, 21247, 22188, 23170, 24196, //
    25267, 26386, 27554, 28774, 30048, 31378, 32768, 34218, 35733, //
    37315, 38967, 40693, 42494, 44376, 46340, 48392, 50534, 52772, //
    55108, 57548, 60096, 62757, 65535,
];

/// Get the compare value for a level
#[inline]
pub fn value_at(level: u8) -> u16 {
    PWM_TABLE[level as usize]
}

/// Get the compare value for a level on a channel whose full range is `top`
///
/// The curve keeps its shape: level 0 maps to 0 and level 255 maps to `top`.
#[inline]
pub fn scaled_value_at(level: u8, top: u16) -> u16 {
    rescale(value_at(level), u16::MAX, top)
}

/// Move a value from the range `0..=from_top` onto `0..=to_top`, rounding to
/// the nearest step
///
/// Values above `from_top` are clamped.
#[allow(clippy::cast_possible_truncation)]
pub fn rescale(value: u16, from_top: u16, to_top: u16) -> u16 {
    if from_top == to_top {
        return value.min(from_top);
    }
    let from = u32::from(from_top.max(1));
    let value = u32::from(value.min(from_top));
    // value <= from, so the result never exceeds to_top
    ((value * u32::from(to_top) + from / 2) / from) as u16
}

/// Compare values for all three channels, taken from one color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CompareValues {
    pub red: u16,
    pub green: u16,
    pub blue: u16,
}

impl CompareValues {
    /// Look up the compare values for a color
    pub fn from_color(color: Rgb) -> Self {
        Self {
            red: value_at(color.r),
            green: value_at(color.g),
            blue: value_at(color.b),
        }
    }

    /// Get the compare value of a channel
    pub const fn get(self, channel: Channel) -> u16 {
        match channel {
            Channel::Red => self.red,
            Channel::Green => self.green,
            Channel::Blue => self.blue,
        }
    }
}
