use ratatui::style::Color;

// Brand colors
pub const BRAND_CORAL: Color = Color::Rgb(232, 131, 136);      // #E88388
pub const BRAND_GOLD: Color = Color::Rgb(219, 171, 121);       // #DBAB79
pub const BRAND_BLUE: Color = Color::Rgb(30, 144, 255);        // #1E90FF, slider thumb
pub const BRAND_MINT: Color = Color::Rgb(161, 193, 129);       // #A1C181

// UI colors
pub const TEXT_DIM: Color = Color::Rgb(128, 128, 128);         // #808080, inactive label
pub const TEXT_WHITE: Color = Color::Rgb(255, 255, 255);       // #FFFFFF
pub const TRACK_GRAY: Color = Color::Rgb(204, 204, 204);       // #CCCCCC
