//! Theme configuration: one palette per configurable accent.

pub mod borders;
pub mod icons;
pub mod palette;

pub use borders::BorderStyle;
pub use icons::Icons;
pub use palette::Palette;

use crate::config::ThemeName;

/// Active theme configuration
#[derive(Debug, Clone)]
pub struct Theme {
    pub palette: Palette,
    pub icons: Icons,
}

impl Theme {
    pub fn border_set(&self) -> ratatui::symbols::border::Set<'static> {
        BorderStyle::to_border_set()
    }
}

pub fn get_theme(name: ThemeName) -> Theme {
    Theme {
        palette: Palette::for_theme(name),
        icons: Icons::default(),
    }
}
