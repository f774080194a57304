use crate::interactive_ratatui::constants::{HELP_DIALOG_MARGIN, HELP_DIALOG_MAX_WIDTH};
use crate::interactive_ratatui::domain::models::Theme;
use crate::interactive_ratatui::ui::components::{Component, view_layout::Palette};
use crate::interactive_ratatui::ui::events::Message;
use crossterm::event::KeyEvent;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

const BINDINGS: &[(&str, &[(&str, &str)])] = &[
    (
        "Search:",
        &[
            ("Enter", "Find the least privileged role"),
            ("Tab", "Switch focus between input and results"),
            ("Ctrl+A/E", "Move to start/end of input"),
            ("Ctrl+W/U/K", "Delete word / to start / to end"),
        ],
    ),
    (
        "Results:",
        &[
            ("↑/↓ j/k", "Select previous/next role"),
            ("Home/End", "Jump to first/last role"),
            ("PgUp/PgDn", "Scroll the results"),
            ("Enter or /", "Back to the search input"),
        ],
    ),
    (
        "General:",
        &[
            ("Ctrl+T", "Toggle light/dark theme"),
            ("Mouse", "Click the toggle, the button or a role"),
            ("F1", "Show this help"),
            ("Esc", "Quit"),
            ("Ctrl+C x2", "Quit"),
        ],
    ),
];

pub struct HelpDialog {
    theme: Theme,
}

impl Default for HelpDialog {
    fn default() -> Self {
        Self::new()
    }
}

impl HelpDialog {
    pub fn new() -> Self {
        Self { theme: Theme::Dark }
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    fn help_text(palette: &Palette) -> Vec<Line<'static>> {
        let mut lines = vec![
            Line::from(Span::styled("Entra ID Role Finder", palette.title())),
            Line::from(""),
        ];
        for (section, keys) in BINDINGS {
            lines.push(Line::from(Span::styled(*section, palette.title())));
            for (key, action) in keys.iter() {
                lines.push(Line::from(vec![
                    Span::styled(format!("  {key:<12}"), palette.base()),
                    Span::styled(format!("- {action}"), palette.dimmed()),
                ]));
            }
            lines.push(Line::from(""));
        }
        lines.push(Line::from(Span::styled(
            "Press any key to close this help...",
            palette.dimmed(),
        )));
        lines
    }
}

impl Component for HelpDialog {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        let palette = Palette::for_theme(self.theme);
        let help_text = Self::help_text(&palette);

        let width = HELP_DIALOG_MAX_WIDTH.min(area.width.saturating_sub(HELP_DIALOG_MARGIN));
        let height = (help_text.len() as u16 + 2).min(area.height.saturating_sub(HELP_DIALOG_MARGIN));
        let dialog_area = Rect::new(
            area.x + (area.width - width) / 2,
            area.y + (area.height - height) / 2,
            width,
            height,
        );

        f.render_widget(Clear, dialog_area);
        let help = Paragraph::new(help_text)
            .block(
                Block::default()
                    .title(" Help ")
                    .borders(Borders::ALL)
                    .border_style(palette.border(true)),
            )
            .style(palette.base())
            .alignment(Alignment::Left);
        f.render_widget(help, dialog_area);
    }

    fn handle_key(&mut self, _key: KeyEvent) -> Option<Message> {
        Some(Message::CloseHelp)
    }
}
