use crate::catalog::Role;
use crate::interactive_ratatui::domain::models::Theme;

#[derive(Clone, Debug)]
pub enum Message {
    // Search events
    QueryChanged(String),
    SearchRequested,
    SearchCompleted { id: u64, roles: Vec<Role> },
    SearchFailed { id: u64, reason: String },

    // Result navigation
    SelectResult(usize),
    ResultClicked(usize),

    // Theme
    ToggleTheme,
    SetTheme(Theme),

    // Focus and mode changes
    ToggleFocus,
    FocusSearchInput,
    ShowHelp,
    CloseHelp,

    // UI events
    SetStatus(String),
    ClearStatus,
}
