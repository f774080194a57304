use crate::interactive_ratatui::domain::models::Theme;
use crate::interactive_ratatui::ui::components::{Component, view_layout::Palette};
use crate::interactive_ratatui::ui::events::Message;
use crate::interactive_ratatui::ui::icons::Icon;
use crossterm::event::KeyEvent;
use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
};

/// Single-row error line shown between the search form and the results
#[derive(Default)]
pub struct ErrorBanner {
    error: Option<String>,
    theme: Theme,
}

impl ErrorBanner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_error(&mut self, error: Option<String>) {
        self.error = error;
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    pub fn is_visible(&self) -> bool {
        self.error.is_some()
    }
}

impl Component for ErrorBanner {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        let Some(error) = &self.error else {
            return;
        };
        let palette = Palette::for_theme(self.theme);
        let line = Line::from(vec![
            Span::styled(Icon::AlertCircle.prefix(), palette.error()),
            Span::styled(error.clone(), palette.error()),
        ]);
        f.render_widget(Paragraph::new(line), area);
    }

    fn handle_key(&mut self, _key: KeyEvent) -> Option<Message> {
        None
    }
}
