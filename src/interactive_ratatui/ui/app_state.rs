use crate::catalog::Role;
use crate::interactive_ratatui::domain::models::{Focus, SearchError, Theme};
use crate::interactive_ratatui::ui::commands::Command;
use crate::interactive_ratatui::ui::events::Message;

// Re-export Mode
pub use crate::interactive_ratatui::domain::models::Mode;

pub struct AppState {
    pub mode: Mode,
    pub theme: Theme,
    pub search: SearchState,
    pub ui: UiState,
    revision: u64,
}

pub struct SearchState {
    pub query: String,
    pub results: Vec<Role>,
    pub loading: bool,
    pub error: Option<String>,
    /// Latches on the first non-empty submission and never resets
    pub has_searched: bool,
    pub current_search_id: u64,
    pub selected_index: usize,
}

pub struct UiState {
    pub focus: Focus,
    pub message: Option<String>,
}

/// Partial state applied by [`AppState::merge`]. Unset fields are left alone.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StatePatch {
    mode: Option<Mode>,
    theme: Option<Theme>,
    results: Option<Vec<Role>>,
    loading: Option<bool>,
    error: Option<Option<String>>,
    has_searched: Option<bool>,
    selected_index: Option<usize>,
    focus: Option<Focus>,
    message: Option<Option<String>>,
}

impl StatePatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(mut self, mode: Mode) -> Self {
        self.mode = Some(mode);
        self
    }

    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = Some(theme);
        self
    }

    pub fn results(mut self, results: Vec<Role>) -> Self {
        self.results = Some(results);
        self
    }

    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = Some(loading);
        self
    }

    pub fn error(mut self, error: Option<String>) -> Self {
        self.error = Some(error);
        self
    }

    pub fn has_searched(mut self, has_searched: bool) -> Self {
        self.has_searched = Some(has_searched);
        self
    }

    pub fn selected_index(mut self, index: usize) -> Self {
        self.selected_index = Some(index);
        self
    }

    pub fn focus(mut self, focus: Focus) -> Self {
        self.focus = Some(focus);
        self
    }

    pub fn message(mut self, message: Option<String>) -> Self {
        self.message = Some(message);
        self
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self {
            mode: Mode::Search,
            theme: Theme::Dark,
            search: SearchState {
                query: String::new(),
                results: Vec::new(),
                loading: false,
                error: None,
                has_searched: false,
                current_search_id: 0,
                selected_index: 0,
            },
            ui: UiState {
                focus: Focus::SearchInput,
                message: None,
            },
            revision: 0,
        }
    }

    /// Bumped by every merge. The renderer rebuilds memoized sections when it
    /// changes.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Shallow-merge `patch` into the state and mark the view dirty
    pub fn merge(&mut self, patch: StatePatch) {
        if let Some(mode) = patch.mode {
            self.mode = mode;
        }
        if let Some(theme) = patch.theme {
            self.theme = theme;
        }
        if let Some(results) = patch.results {
            self.search.results = results;
        }
        if let Some(loading) = patch.loading {
            self.search.loading = loading;
        }
        if let Some(error) = patch.error {
            self.search.error = error;
        }
        if patch.has_searched == Some(true) {
            self.search.has_searched = true;
        }
        if let Some(index) = patch.selected_index {
            self.search.selected_index = index;
        }
        if let Some(focus) = patch.focus {
            self.ui.focus = focus;
        }
        if let Some(message) = patch.message {
            self.ui.message = message;
        }
        self.revision += 1;
    }

    /// High-frequency channel for keystrokes: the query is stored without
    /// marking the view dirty, so memoized sections and the caret are kept.
    pub fn set_query(&mut self, query: String) {
        self.search.query = query;
    }

    pub fn set_theme(&mut self, theme: Theme) -> Command {
        self.merge(StatePatch::new().theme(theme));
        tracing::info!(theme = %theme, "theme changed");
        Command::ApplyTheme(theme)
    }

    pub fn toggle_theme(&mut self) -> Command {
        self.set_theme(self.theme.toggled())
    }

    pub fn update(&mut self, msg: Message) -> Command {
        match msg {
            Message::QueryChanged(q) => {
                self.set_query(q);
                Command::None
            }
            Message::SearchRequested => self.submit_search(),
            Message::SearchCompleted { id, roles } => {
                if !self.accepts_response(id) {
                    tracing::debug!(id, current = self.search.current_search_id, "dropping stale search result");
                    return Command::None;
                }
                self.merge(
                    StatePatch::new()
                        .results(roles)
                        .loading(false)
                        .selected_index(0),
                );
                Command::None
            }
            Message::SearchFailed { id, reason } => {
                if !self.accepts_response(id) {
                    tracing::debug!(id, current = self.search.current_search_id, "dropping stale search failure");
                    return Command::None;
                }
                tracing::warn!(id, reason = %reason, "search failed");
                self.merge(
                    StatePatch::new()
                        .error(Some(SearchError::SearchFailure.message().to_string()))
                        .loading(false),
                );
                Command::None
            }
            Message::SelectResult(index) => {
                if index < self.search.results.len() && index != self.search.selected_index {
                    self.merge(StatePatch::new().selected_index(index));
                }
                Command::None
            }
            Message::ResultClicked(index) => {
                if index < self.search.results.len() {
                    self.merge(
                        StatePatch::new()
                            .selected_index(index)
                            .focus(Focus::Results),
                    );
                }
                Command::None
            }
            Message::ToggleTheme => self.toggle_theme(),
            Message::SetTheme(theme) => self.set_theme(theme),
            Message::ToggleFocus => {
                self.merge(StatePatch::new().focus(self.ui.focus.toggled()));
                Command::None
            }
            Message::FocusSearchInput => {
                if self.ui.focus != Focus::SearchInput {
                    self.merge(StatePatch::new().focus(Focus::SearchInput));
                }
                Command::None
            }
            Message::ShowHelp => {
                self.merge(StatePatch::new().mode(Mode::Help));
                Command::None
            }
            Message::CloseHelp => {
                self.merge(StatePatch::new().mode(Mode::Search));
                Command::None
            }
            Message::SetStatus(msg) => {
                self.merge(StatePatch::new().message(Some(msg)));
                Command::None
            }
            Message::ClearStatus => {
                self.merge(StatePatch::new().message(None));
                Command::None
            }
        }
    }

    fn submit_search(&mut self) -> Command {
        // The submit button is disabled while a search is in flight
        if self.search.loading {
            tracing::debug!("search submission ignored while loading");
            return Command::None;
        }

        if self.search.query.trim().is_empty() {
            self.merge(
                StatePatch::new().error(Some(SearchError::EmptyQuery.message().to_string())),
            );
            return Command::None;
        }

        self.search.current_search_id += 1;
        tracing::info!(
            id = self.search.current_search_id,
            query = self.search.query.trim(),
            "search submitted"
        );
        self.merge(
            StatePatch::new()
                .loading(true)
                .error(None)
                .has_searched(true),
        );
        Command::ExecuteSearch
    }

    fn accepts_response(&self, id: u64) -> bool {
        self.search.loading && id == self.search.current_search_id
    }

    /// Text shown next to the results header
    pub fn results_count_text(&self) -> String {
        if self.search.loading {
            "Searching...".to_string()
        } else {
            format_role_count(self.search.results.len())
        }
    }
}

pub fn format_role_count(count: usize) -> String {
    if count == 1 {
        "1 role found".to_string()
    } else {
        format!("{count} roles found")
    }
}
