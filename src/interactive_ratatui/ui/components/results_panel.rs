use crate::catalog::Role;
use crate::interactive_ratatui::constants::PAGE_SIZE;
use crate::interactive_ratatui::domain::models::Focus;
use crate::interactive_ratatui::ui::app_state::AppState;
use crate::interactive_ratatui::ui::components::{Component, view_layout::Palette};
use crate::interactive_ratatui::ui::events::Message;
use crate::interactive_ratatui::ui::icons::Icon;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

pub const RESULTS_TITLE: &str = "Recommended Roles";
pub const LOADING_TEXT: &str = "Finding the least privileged role...";
pub const NO_RESULTS_TEXT: &str = "No roles found for this task.";
pub const NO_RESULTS_HINT: &str = "Try rephrasing your task or using different keywords.";
pub const RECOMMENDED_BADGE: &str = " Recommended ";
pub const PERMISSIONS_HEADER: &str = "Key Permissions";

const CARD_INDENT: &str = "   ";

/// Lines for the results section plus the first line of every card
struct ResultsView {
    lines: Vec<Line<'static>>,
    card_offsets: Vec<usize>,
}

/// Results section. Its lines are rebuilt only when the state revision or
/// the available width changes.
pub struct ResultsPanel {
    cache_key: Option<(u64, u16)>,
    view: ResultsView,
    build_count: usize,
    result_count: usize,
    selected_index: usize,
    scroll_offset: usize,
    follow_selection: bool,
    area: Rect,
}

impl Default for ResultsPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl ResultsPanel {
    pub fn new() -> Self {
        Self {
            cache_key: None,
            view: ResultsView {
                lines: Vec::new(),
                card_offsets: Vec::new(),
            },
            build_count: 0,
            result_count: 0,
            selected_index: 0,
            scroll_offset: 0,
            follow_selection: false,
            area: Rect::default(),
        }
    }

    /// Rebuild the memoized view if `state` changed since the last sync
    pub fn sync(&mut self, state: &AppState, width: u16) {
        let key = (state.revision(), width);
        if self.cache_key == Some(key) {
            return;
        }

        let selection_moved = self.selected_index != state.search.selected_index
            || self.result_count != state.search.results.len();

        self.view = build_view(state, width);
        self.cache_key = Some(key);
        self.build_count += 1;
        self.result_count = state.search.results.len();
        self.selected_index = state.search.selected_index;

        if selection_moved {
            self.follow_selection = true;
        }
        if state.search.loading || self.result_count == 0 {
            self.scroll_offset = 0;
        }
    }

    /// How many times the section has been rebuilt
    pub fn build_count(&self) -> usize {
        self.build_count
    }

    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    pub fn area(&self) -> Rect {
        self.area
    }

    /// Card index under a terminal row, if any
    pub fn card_at_row(&self, row: u16) -> Option<usize> {
        if row < self.area.y || row >= self.area.y + self.area.height {
            return None;
        }
        let line = self.scroll_offset + (row - self.area.y) as usize;
        if line >= self.view.lines.len() {
            return None;
        }
        self.view
            .card_offsets
            .iter()
            .rposition(|&offset| offset <= line)
    }

    fn max_scroll(&self) -> usize {
        self.view
            .lines
            .len()
            .saturating_sub(self.area.height as usize)
    }

    fn scroll_selection_into_view(&mut self) {
        let Some(&start) = self.view.card_offsets.get(self.selected_index) else {
            return;
        };
        let end = self
            .view
            .card_offsets
            .get(self.selected_index + 1)
            .copied()
            .unwrap_or(self.view.lines.len());
        let height = self.area.height as usize;

        if start < self.scroll_offset {
            self.scroll_offset = start;
        } else if end > self.scroll_offset + height {
            self.scroll_offset = end.saturating_sub(height).min(start);
        }
    }

    fn select(&self, index: usize) -> Option<Message> {
        if self.result_count == 0 || index == self.selected_index {
            None
        } else {
            Some(Message::SelectResult(index))
        }
    }
}

impl Component for ResultsPanel {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        self.area = area;
        if self.follow_selection {
            self.scroll_selection_into_view();
            self.follow_selection = false;
        }
        self.scroll_offset = self.scroll_offset.min(self.max_scroll());

        let paragraph = Paragraph::new(self.view.lines.clone())
            .block(Block::default().borders(Borders::NONE))
            .scroll((self.scroll_offset as u16, 0));
        f.render_widget(paragraph, area);
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<Message> {
        let last = self.result_count.saturating_sub(1);
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.select(self.selected_index.saturating_sub(1)),
            KeyCode::Down | KeyCode::Char('j') => self.select((self.selected_index + 1).min(last)),
            KeyCode::Home | KeyCode::Char('g') => self.select(0),
            KeyCode::End | KeyCode::Char('G') => self.select(last),
            KeyCode::PageUp => {
                self.scroll_offset = self.scroll_offset.saturating_sub(PAGE_SIZE);
                None
            }
            KeyCode::PageDown => {
                self.scroll_offset = (self.scroll_offset + PAGE_SIZE).min(self.max_scroll());
                None
            }
            KeyCode::Enter | KeyCode::Char('/') => Some(Message::FocusSearchInput),
            _ => None,
        }
    }
}

fn build_view(state: &AppState, width: u16) -> ResultsView {
    let palette = Palette::for_theme(state.theme);
    let mut lines = vec![
        Line::from(vec![
            Span::styled(Icon::Shield.prefix(), palette.title()),
            Span::styled(RESULTS_TITLE, palette.title()),
            Span::raw("  "),
            Span::styled(state.results_count_text(), palette.dimmed()),
        ]),
        Line::from(""),
    ];
    let mut card_offsets = Vec::new();

    if state.search.loading {
        lines.push(Line::from(vec![
            Span::styled(Icon::Loader.prefix(), palette.title()),
            Span::raw(LOADING_TEXT),
        ]));
    } else if state.search.results.is_empty() {
        lines.push(Line::from(vec![
            Span::styled(Icon::SearchX.prefix(), palette.dimmed()),
            Span::raw(NO_RESULTS_TEXT),
        ]));
        lines.push(Line::from(Span::styled(NO_RESULTS_HINT, palette.dimmed())));
    } else {
        let highlight = state.ui.focus == Focus::Results;
        for (index, role) in state.search.results.iter().enumerate() {
            card_offsets.push(lines.len());
            let selected = highlight && index == state.search.selected_index;
            push_card(&mut lines, role, index, selected, &palette, width);
        }
    }

    ResultsView {
        lines,
        card_offsets,
    }
}

fn push_card(
    lines: &mut Vec<Line<'static>>,
    role: &Role,
    index: usize,
    selected: bool,
    palette: &Palette,
    width: u16,
) {
    // The first result is the recommended pick purely by position
    let recommended = index == 0;

    let icon = if recommended { Icon::Star } else { Icon::Shield };
    let mut name_style = palette.base().add_modifier(Modifier::BOLD);
    if selected {
        name_style = name_style.add_modifier(Modifier::REVERSED);
    }
    let mut title = vec![
        Span::styled(
            if selected { "▌ " } else { "  " },
            palette.title(),
        ),
        Span::styled(
            icon.prefix(),
            if recommended {
                Style::default().fg(palette.accent)
            } else {
                palette.dimmed()
            },
        ),
        Span::styled(role.name.clone(), name_style),
    ];
    if recommended {
        title.push(Span::raw("  "));
        title.push(Span::styled(RECOMMENDED_BADGE, palette.badge()));
    }
    lines.push(Line::from(title));

    let text_width = (width as usize).saturating_sub(CARD_INDENT.len()).max(10);
    for row in wrap_words(&role.description, text_width) {
        lines.push(Line::from(vec![Span::raw(CARD_INDENT), Span::raw(row)]));
    }

    lines.push(Line::from(vec![
        Span::raw(CARD_INDENT),
        Span::styled(Icon::Key.prefix(), palette.dimmed()),
        Span::styled(PERMISSIONS_HEADER, palette.dimmed()),
    ]));

    for row in pack_tags(&role.permissions, text_width) {
        let mut spans = vec![Span::raw(CARD_INDENT)];
        for tag in row {
            spans.push(Span::styled(format!(" {tag} "), palette.tag()));
            spans.push(Span::raw(" "));
        }
        lines.push(Line::from(spans));
    }

    lines.push(Line::from(""));
}

/// Greedy word wrap on whitespace; words longer than `width` get their own row
pub fn wrap_words(text: &str, width: usize) -> Vec<String> {
    let mut rows = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let needed = if current.is_empty() {
            word.chars().count()
        } else {
            current.chars().count() + 1 + word.chars().count()
        };
        if needed > width && !current.is_empty() {
            rows.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        rows.push(current);
    }
    rows
}

/// Group permission tags into rows that fit `width`, each tag rendered as
/// ` tag ` plus one separating space
pub fn pack_tags(tags: &[String], width: usize) -> Vec<Vec<&str>> {
    let mut rows: Vec<Vec<&str>> = Vec::new();
    let mut row: Vec<&str> = Vec::new();
    let mut used = 0;

    for tag in tags {
        let cost = tag.chars().count() + 3;
        if used + cost > width && !row.is_empty() {
            rows.push(std::mem::take(&mut row));
            used = 0;
        }
        row.push(tag.as_str());
        used += cost;
    }
    if !row.is_empty() {
        rows.push(row);
    }
    rows
}
