use std::ops::RangeInclusive;

/// Integer ranges of generated mesh positions.
pub const POSITION_X: RangeInclusive<i32> = -5..=9;
pub const POSITION_Y: RangeInclusive<i32> = 1..=4;
pub const POSITION_Z: RangeInclusive<i32> = -5..=4;

/// Integer range shared by width, height and depth.
pub const DIMENSION: RangeInclusive<u32> = 1..=4;

/// Channel ranges of generated colours.
pub const COLOUR_R: RangeInclusive<u8> = 0..=99;
pub const COLOUR_G: RangeInclusive<u8> = 0..=174;
pub const COLOUR_B: RangeInclusive<u8> = 0..=199;
