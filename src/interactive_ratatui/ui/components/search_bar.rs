use crate::interactive_ratatui::domain::models::Theme;
use crate::interactive_ratatui::ui::components::{Component, text_input::TextInput, view_layout::Palette};
use crate::interactive_ratatui::ui::events::Message;
use crate::interactive_ratatui::ui::icons::Icon;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

pub const SEARCH_PLACEHOLDER: &str =
    "e.g., Reset user password, Create security group, Manage app registrations";

const BUTTON_WIDTH: u16 = 18;

/// Search form: one text input plus the submit button
pub struct SearchBar {
    input: TextInput,
    loading: bool,
    focused: bool,
    palette: Palette,
    input_area: Rect,
    button_area: Rect,
}

impl Default for SearchBar {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchBar {
    pub fn new() -> Self {
        Self {
            input: TextInput::new(),
            loading: false,
            focused: true,
            palette: Palette::for_theme(Theme::Dark),
            input_area: Rect::default(),
            button_area: Rect::default(),
        }
    }

    /// Pull the query from state. The caret only moves if the text differs.
    pub fn set_query(&mut self, query: &str) {
        self.input.sync_text(query);
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.palette = Palette::for_theme(theme);
    }

    pub fn get_query(&self) -> &str {
        self.input.text()
    }

    pub fn cursor_position(&self) -> usize {
        self.input.cursor_position()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn button_label(&self) -> String {
        if self.loading {
            format!("{}Searching...", Icon::Loader.prefix())
        } else {
            format!("{}Find Role", Icon::Search.prefix())
        }
    }

    /// Areas recorded by the last render, for mouse hit-testing
    pub fn input_area(&self) -> Rect {
        self.input_area
    }

    pub fn button_area(&self) -> Rect {
        self.button_area
    }
}

impl Component for SearchBar {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(10), Constraint::Length(BUTTON_WIDTH)])
            .split(area);
        self.input_area = chunks[0];
        self.button_area = chunks[1];

        let cursor_style = Style::default()
            .bg(self.palette.text)
            .fg(self.palette.background);

        let mut spans = vec![Span::styled(Icon::Search.prefix(), self.palette.dimmed())];
        if self.input.text().is_empty() {
            if self.focused {
                spans.push(Span::styled(" ", cursor_style));
            }
            spans.push(Span::styled(SEARCH_PLACEHOLDER, self.palette.dimmed()));
        } else {
            spans.extend(self.input.render_cursor_spans(self.focused, cursor_style));
        }

        let input = Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(self.palette.border(self.focused))
                .title(" Administrative task "),
        );
        f.render_widget(input, chunks[0]);

        let mut button_style = self.palette.button(!self.loading);
        if self.loading {
            button_style = button_style.add_modifier(Modifier::DIM);
        }
        let button = Paragraph::new(self.button_label())
            .style(button_style)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).border_style(button_style));
        f.render_widget(button, chunks[1]);
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<Message> {
        match key.code {
            KeyCode::Enter => Some(Message::SearchRequested),
            _ => {
                if self.input.handle_key(key) {
                    Some(Message::QueryChanged(self.input.text().to_string()))
                } else {
                    None
                }
            }
        }
    }
}
