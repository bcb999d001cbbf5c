//! Color palettes, one per theme setting. The dashboard is mostly dark
//! chrome with a single accent hue.

use crate::config::ThemeName;
use ratatui::style::Color;

#[derive(Debug, Clone, Copy)]
#[allow(dead_code)]
pub struct Palette {
    pub bg_primary: Color,
    pub bg_secondary: Color,
    pub fg_primary: Color,
    pub fg_secondary: Color,
    pub accent: Color,
    pub accent_alt: Color,
    pub border: Color,
    pub success: Color,
    pub error: Color,
}

impl Palette {
    const fn with_accent(accent: Color, accent_alt: Color) -> Self {
        Self {
            bg_primary: Color::Rgb(10, 10, 14),
            bg_secondary: Color::Rgb(24, 24, 30),
            fg_primary: Color::Rgb(235, 235, 235),
            fg_secondary: Color::Rgb(136, 136, 144),
            accent,
            accent_alt,
            border: Color::Rgb(64, 64, 72),
            success: Color::Rgb(120, 220, 150),
            error: Color::Rgb(235, 100, 100),
        }
    }

    pub const DEFAULT: Self = Self::with_accent(
        Color::Rgb(130, 170, 255), // soft blue
        Color::Rgb(90, 130, 210),
    );

    pub const AMBER: Self = Self::with_accent(
        Color::Rgb(255, 190, 90),
        Color::Rgb(215, 150, 60),
    );

    pub const CYAN: Self = Self::with_accent(
        Color::Rgb(100, 220, 230),
        Color::Rgb(60, 170, 185),
    );

    pub const ROSE: Self = Self::with_accent(
        Color::Rgb(250, 130, 160),
        Color::Rgb(205, 95, 125),
    );

    pub const VIOLET: Self = Self::with_accent(
        Color::Rgb(185, 145, 255),
        Color::Rgb(140, 105, 210),
    );

    pub fn for_theme(name: ThemeName) -> Self {
        match name {
            ThemeName::Default => Self::DEFAULT,
            ThemeName::Amber => Self::AMBER,
            ThemeName::Cyan => Self::CYAN,
            ThemeName::Rose => Self::ROSE,
            ThemeName::Violet => Self::VIOLET,
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::DEFAULT
    }
}
