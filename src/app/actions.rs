use super::state::Screen;

#[derive(Debug, Clone)]
pub enum Action {
    Quit,
    NextScreen,
    PrevScreen,
    SetScreen(Screen),
    /// Close the settings surface back to the dashboard.
    CloseSettings,

    ListUp,
    ListDown,
    GoTop,
    GoBottom,

    /// Context-dependent: toggle/cycle a settings row, open a quick link,
    /// play the selected media entry.
    Activate,
    /// Remove the selected user URL / local record / quick link.
    RemoveSelected,

    // Line editor (search bar, URL/link/path prompts, text settings).
    InputChar(char),
    Backspace,
    ClearInput,
    CancelInput,
    CommitInput,
    FocusSearch,

    // Prompts.
    BeginAddSource,
    BeginImportMedia,
    BeginAddLink,

    // Background / playback.
    NextBackground,
    TogglePause,

    Refresh,
    Resize,
}
