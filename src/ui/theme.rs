//! Palette. Film titles use the opening-crawl yellow; everything else stays
//! neutral so status colors stand out.

use ratatui::style::Color;

pub const CRAWL_YELLOW: Color = Color::Rgb(0xff, 0xe8, 0x1f);
pub const FRAME_BORDER: Color = Color::Rgb(0x3f, 0x3f, 0x46);
pub const PRIMARY_TEXT: Color = Color::Rgb(0xe4, 0xe4, 0xe7);
pub const SEPARATOR: Color = Color::Rgb(0x71, 0x71, 0x7a);
pub const MUTED_TEXT: Color = Color::Rgb(0xa1, 0xa1, 0xaa);
pub const STATUS_OK: Color = Color::Rgb(0x22, 0xc5, 0x5e);
pub const STATUS_ERROR: Color = Color::Rgb(0xef, 0x44, 0x44);
pub const BUTTON_BG: Color = Color::Rgb(0x27, 0x27, 0x2a);
