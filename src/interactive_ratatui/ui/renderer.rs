use crate::interactive_ratatui::constants::{ERROR_BANNER_HEIGHT, SEARCH_BAR_HEIGHT};
use crate::interactive_ratatui::domain::models::Focus;
use crate::interactive_ratatui::ui::app_state::{AppState, Mode};
use crate::interactive_ratatui::ui::components::{
    Component, error_banner::ErrorBanner, header::Header, help_dialog::HelpDialog,
    results_panel::ResultsPanel, search_bar::SearchBar, view_layout::ViewLayout,
};
use crate::interactive_ratatui::ui::events::Message;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Position, Rect},
};

/// Draws the whole screen from an `AppState`. Every frame is rendered in
/// full; the terminal backend diffs it against the previous frame, so only
/// changed cells reach the terminal.
pub struct Renderer {
    header: Header,
    search_bar: SearchBar,
    error_banner: ErrorBanner,
    results_panel: ResultsPanel,
    help_dialog: HelpDialog,
    results_visible: bool,
    help_visible: bool,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer {
    pub fn new() -> Self {
        Self {
            header: Header::new(),
            search_bar: SearchBar::new(),
            error_banner: ErrorBanner::new(),
            results_panel: ResultsPanel::new(),
            help_dialog: HelpDialog::new(),
            results_visible: false,
            help_visible: false,
        }
    }

    pub fn render(&mut self, f: &mut Frame, state: &AppState) {
        let area = f.area();
        self.sync(state, area.width);

        let layout = ViewLayout::new(state.theme).with_status_text(state.ui.message.clone());
        layout.render(f, area, |f, content| self.render_content(f, content));

        self.help_visible = state.mode == Mode::Help;
        if self.help_visible {
            self.help_dialog.render(f, area);
        }
    }

    fn sync(&mut self, state: &AppState, width: u16) {
        self.header.set_theme(state.theme);

        self.search_bar.set_theme(state.theme);
        self.search_bar.set_query(&state.search.query);
        self.search_bar.set_loading(state.search.loading);
        self.search_bar
            .set_focused(state.ui.focus == Focus::SearchInput && state.mode == Mode::Search);

        self.error_banner.set_theme(state.theme);
        self.error_banner.set_error(state.search.error.clone());

        self.help_dialog.set_theme(state.theme);

        self.results_visible = state.search.has_searched;
        if self.results_visible {
            self.results_panel.sync(state, width);
        }
    }

    fn render_content(&mut self, f: &mut Frame, area: Rect) {
        let banner_height = if self.error_banner.is_visible() {
            ERROR_BANNER_HEIGHT
        } else {
            0
        };

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(Header::height()),
                Constraint::Length(SEARCH_BAR_HEIGHT),
                Constraint::Length(banner_height),
                Constraint::Min(0), // Results
            ])
            .split(area);

        self.header.render(f, chunks[0]);
        self.search_bar.render(f, chunks[1]);
        self.error_banner.render(f, chunks[2]);
        if self.results_visible {
            self.results_panel.render(f, chunks[3]);
        }
    }

    /// Map a mouse click to a message using the regions of the last frame
    pub fn hit_test(&self, column: u16, row: u16) -> Option<Message> {
        if self.help_visible {
            return Some(Message::CloseHelp);
        }

        let position = Position::new(column, row);
        if self.header.toggle_area().contains(position) {
            Some(Message::ToggleTheme)
        } else if self.search_bar.button_area().contains(position) {
            Some(Message::SearchRequested)
        } else if self.search_bar.input_area().contains(position) {
            Some(Message::FocusSearchInput)
        } else if self.results_visible && self.results_panel.area().contains(position) {
            self.results_panel
                .card_at_row(row)
                .map(Message::ResultClicked)
        } else {
            None
        }
    }

    pub fn search_bar(&self) -> &SearchBar {
        &self.search_bar
    }

    pub fn results_panel(&self) -> &ResultsPanel {
        &self.results_panel
    }

    pub fn header(&self) -> &Header {
        &self.header
    }

    pub fn get_search_bar_mut(&mut self) -> &mut SearchBar {
        &mut self.search_bar
    }

    pub fn get_results_panel_mut(&mut self) -> &mut ResultsPanel {
        &mut self.results_panel
    }

    pub fn get_help_dialog_mut(&mut self) -> &mut HelpDialog {
        &mut self.help_dialog
    }
}
