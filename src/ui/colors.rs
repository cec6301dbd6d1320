use ratatui::style::Color;

pub struct ColorPalette {
    pub primary: Color,
    pub accent: Color,
    pub error: Color,
    pub muted: Color,
    pub selected_bg: Color,
    pub selected_fg: Color,
}

impl ColorPalette {
    pub fn kitchen() -> Self {
        Self {
            // Paprika
            primary: Color::Rgb(0xE0, 0x6C, 0x3C),
            // Basil
            accent: Color::Rgb(0x6A, 0xA8, 0x4F),
            error: Color::Rgb(0xBF, 0x4D, 0x43),
            muted: Color::DarkGray,
            selected_bg: Color::Rgb(0xE0, 0x6C, 0x3C),
            selected_fg: Color::Rgb(0xFF, 0xFF, 0xFF),
        }
    }
}
