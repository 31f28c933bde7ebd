use ratatui::style::Color;

use crate::domain::Tone;

pub const NIBBO_ORANGE: Color = Color::Rgb(0xf9, 0x73, 0x16);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const HEADER_SEPARATOR: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const MUTED_TEXT: Color = Color::Rgb(0x94, 0xa3, 0xb8);
pub const POPUP_BORDER: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const STATUS_OK: Color = Color::Rgb(0x10, 0xb9, 0x81);
pub const STATUS_ERROR: Color = Color::Rgb(0xf4, 0x3f, 0x5e);
pub const ACTIVE_HIGHLIGHT: Color = Color::Rgb(0x26, 0x26, 0x26);
pub const WHATSAPP_GREEN: Color = Color::Rgb(0x25, 0xd3, 0x66);

pub fn tone_color(tone: Tone) -> Color {
    match tone {
        Tone::Blue => Color::Rgb(0x3b, 0x82, 0xf6),
        Tone::Orange => NIBBO_ORANGE,
        Tone::Emerald => STATUS_OK,
        Tone::Rose => STATUS_ERROR,
    }
}
