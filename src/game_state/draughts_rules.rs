//! Canonical draughts-rule constants.
//!
//! Board geometry and the standard starting layout used to initialize and
//! validate game state setup.

pub const BOARD_ROWS: u8 = 8;
pub const BOARD_COLS: u8 = 8;
pub const BOARD_SQUARES: usize = (BOARD_ROWS as usize) * (BOARD_COLS as usize);

/// Rows filled with Dark base pieces at the start.
pub const DARK_START_ROWS: std::ops::RangeInclusive<u8> = 0..=2;
/// Rows filled with Light base pieces at the start.
pub const LIGHT_START_ROWS: std::ops::RangeInclusive<u8> = 5..=7;

/// Standard starting position in the text layout understood by `utils::layout`.
pub const STARTING_POSITION_LAYOUT: &str = "\
.d.d.d.d
d.d.d.d.
.d.d.d.d
........
........
l.l.l.l.
.l.l.l.l
l.l.l.l.
light";
