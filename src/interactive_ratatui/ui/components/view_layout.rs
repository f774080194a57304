use crate::interactive_ratatui::domain::models::Theme;
use crate::interactive_ratatui::ui::components::is_exit_prompt;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Paragraph},
};

/// Screen frame: themed background, content area and a status bar
pub struct ViewLayout {
    palette: Palette,
    status_text: Option<String>,
}

impl ViewLayout {
    pub fn new(theme: Theme) -> Self {
        Self {
            palette: Palette::for_theme(theme),
            status_text: None,
        }
    }

    pub fn with_status_text(mut self, text: Option<String>) -> Self {
        self.status_text = text;
        self
    }

    pub fn render<F>(&self, f: &mut Frame, area: Rect, render_content: F)
    where
        F: FnOnce(&mut Frame, Rect),
    {
        // Paint the whole frame first so every widget inherits the theme
        f.render_widget(Block::default().style(self.palette.base()), area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),    // Content
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        render_content(f, chunks[0]);
        self.render_status_bar(f, chunks[1]);
    }

    fn render_status_bar(&self, f: &mut Frame, area: Rect) {
        let (text, style) = match self.status_text.as_deref() {
            Some(text) if is_exit_prompt(&self.status_text) => (text, self.palette.error()),
            Some(text) => (text, Style::default().fg(self.palette.accent)),
            None => (DEFAULT_STATUS_TEXT, self.palette.dimmed()),
        };

        let status_bar = Paragraph::new(text)
            .style(style)
            .alignment(Alignment::Center);

        f.render_widget(status_bar, area);
    }
}

pub const DEFAULT_STATUS_TEXT: &str =
    "Enter: Find Role | Tab: Focus results | Ctrl+T: Theme | F1: Help | Esc: Quit";

/// Colors for one theme
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette {
    pub background: Color,
    pub surface: Color,
    pub text: Color,
    pub text_dim: Color,
    pub primary: Color,
    pub accent: Color,
    pub error: Color,
    pub tag_bg: Color,
}

impl Palette {
    pub const DARK: Palette = Palette {
        background: Color::Rgb(15, 23, 42),
        surface: Color::Rgb(30, 41, 59),
        text: Color::Rgb(241, 245, 249),
        text_dim: Color::Rgb(148, 163, 184),
        primary: Color::Rgb(96, 165, 250),
        accent: Color::Rgb(250, 204, 21),
        error: Color::Rgb(248, 113, 113),
        tag_bg: Color::Rgb(51, 65, 85),
    };

    pub const LIGHT: Palette = Palette {
        background: Color::Rgb(248, 250, 252),
        surface: Color::Rgb(226, 232, 240),
        text: Color::Rgb(15, 23, 42),
        text_dim: Color::Rgb(100, 116, 139),
        primary: Color::Rgb(37, 99, 235),
        accent: Color::Rgb(202, 138, 4),
        error: Color::Rgb(220, 38, 38),
        tag_bg: Color::Rgb(203, 213, 225),
    };

    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Dark => Self::DARK,
            Theme::Light => Self::LIGHT,
        }
    }

    pub fn base(&self) -> Style {
        Style::default().bg(self.background).fg(self.text)
    }

    pub fn title(&self) -> Style {
        Style::default()
            .fg(self.primary)
            .add_modifier(Modifier::BOLD)
    }

    pub fn dimmed(&self) -> Style {
        Style::default().fg(self.text_dim)
    }

    pub fn error(&self) -> Style {
        Style::default().fg(self.error).add_modifier(Modifier::BOLD)
    }

    pub fn tag(&self) -> Style {
        Style::default().bg(self.tag_bg).fg(self.text)
    }

    pub fn badge(&self) -> Style {
        Style::default()
            .bg(self.accent)
            .fg(self.background)
            .add_modifier(Modifier::BOLD)
    }

    pub fn button(&self, enabled: bool) -> Style {
        if enabled {
            Style::default()
                .bg(self.primary)
                .fg(self.background)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().bg(self.surface).fg(self.text_dim)
        }
    }

    pub fn border(&self, focused: bool) -> Style {
        if focused {
            Style::default().fg(self.primary)
        } else {
            Style::default().fg(self.text_dim)
        }
    }
}
