//! Glyphs for TUI display. Plain unicode, no font requirements.

#[derive(Debug, Clone)]
#[allow(dead_code)]
pub struct Icons {
    // Navigation
    pub home: &'static str,
    pub media: &'static str,
    pub link: &'static str,
    pub settings: &'static str,
    pub help: &'static str,

    // Status
    pub success: &'static str,
    pub error: &'static str,
    pub loading: &'static str,
    pub info: &'static str,

    // Dashboard
    pub clock: &'static str,
    pub quote: &'static str,
    pub search: &'static str,
    pub location: &'static str,
    pub play: &'static str,
    pub pause: &'static str,

    // Selection
    pub selected: &'static str,
    pub unselected: &'static str,
    pub bullet: &'static str,
}

impl Icons {
    pub const fn plain() -> Self {
        Self {
            home: "⌂",
            media: "▣",
            link: "➤",
            settings: "⚙",
            help: "?",

            success: "✓",
            error: "✗",
            loading: "…",
            info: "i",

            clock: "◷",
            quote: "❝",
            search: "⌕",
            location: "◎",
            play: "▶",
            pause: "‖",

            selected: "▸",
            unselected: " ",
            bullet: "•",
        }
    }
}

impl Default for Icons {
    fn default() -> Self {
        Self::plain()
    }
}
