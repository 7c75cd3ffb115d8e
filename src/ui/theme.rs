use ratatui::style::Color;

pub const ACCENT: Color = Color::Rgb(0x26, 0x8b, 0xd2);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const SECONDARY_TEXT: Color = Color::Rgb(0x9c, 0xa3, 0xaf);
pub const DRAWER_BORDER: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const STATUS_OK: Color = Color::Rgb(0x22, 0xc5, 0x5e);
pub const STATUS_ERROR: Color = Color::Rgb(0xef, 0x44, 0x44);
pub const ACTIVE_HIGHLIGHT: Color = Color::Rgb(0x26, 0x26, 0x26);
pub const TAG_BG: Color = Color::Rgb(0x1f, 0x2a, 0x37);
