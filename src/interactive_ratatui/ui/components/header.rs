use crate::interactive_ratatui::domain::models::Theme;
use crate::interactive_ratatui::ui::components::{Component, view_layout::Palette};
use crate::interactive_ratatui::ui::events::Message;
use crate::interactive_ratatui::ui::icons::Icon;
use crossterm::event::KeyEvent;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

pub const APP_TITLE: &str = "Entra ID Role Finder";
pub const HERO_TITLE: &str = "Find the Least Privileged Role";
pub const HERO_SUBTITLE: &str =
    "Enter an administrative task and discover the minimum required Entra ID role";

const TOGGLE_WIDTH: u16 = 10;

/// Logo bar with the theme toggle, followed by the hero text
pub struct Header {
    theme: Theme,
    toggle_area: Rect,
}

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}

impl Header {
    pub fn new() -> Self {
        Self {
            theme: Theme::Dark,
            toggle_area: Rect::default(),
        }
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    /// The toggle names the theme it switches to, not the current one
    pub fn toggle_label(&self) -> String {
        match self.theme {
            Theme::Dark => format!("{}Light", Icon::Sun.prefix()),
            Theme::Light => format!("{}Dark", Icon::Moon.prefix()),
        }
    }

    pub fn toggle_area(&self) -> Rect {
        self.toggle_area
    }

    /// Rows needed for logo bar plus hero
    pub fn height() -> u16 {
        5
    }
}

impl Component for Header {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        let palette = Palette::for_theme(self.theme);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2), // Logo bar
                Constraint::Length(3), // Hero
            ])
            .split(area);

        let bar = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(0), Constraint::Length(TOGGLE_WIDTH)])
            .split(rows[0]);

        let logo = Paragraph::new(Line::from(vec![
            Span::styled(Icon::ShieldCheck.prefix(), palette.title()),
            Span::styled(APP_TITLE, palette.title()),
        ]))
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(palette.dimmed()),
        );
        f.render_widget(logo, bar[0]);

        self.toggle_area = Rect {
            height: 1,
            ..bar[1]
        };
        let toggle = Paragraph::new(self.toggle_label())
            .style(palette.button(true))
            .alignment(Alignment::Center);
        f.render_widget(toggle, self.toggle_area);

        let hero = Paragraph::new(vec![
            Line::from(Span::styled(
                HERO_TITLE,
                palette.base().add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(HERO_SUBTITLE, palette.dimmed())),
        ])
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::NONE));
        f.render_widget(hero, rows[1]);
    }

    fn handle_key(&mut self, _key: KeyEvent) -> Option<Message> {
        None
    }
}
