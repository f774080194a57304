use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{style::Style, text::Span};

/// Single-line editable text with a character-indexed caret
#[derive(Debug, Clone, Default)]
pub struct TextInput {
    text: String,
    cursor_position: usize,
}

impl TextInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn cursor_position(&self) -> usize {
        self.cursor_position
    }

    fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    /// Replace the text and move the caret to the end
    pub fn set_text(&mut self, text: String) {
        self.cursor_position = text.chars().count();
        self.text = text;
    }

    /// Replace the text only when it differs, so an unchanged value keeps its
    /// caret across redraws
    pub fn sync_text(&mut self, text: &str) {
        if self.text != text {
            self.set_text(text.to_string());
        }
    }

    pub fn set_cursor_position(&mut self, position: usize) {
        self.cursor_position = position.min(self.char_count());
    }

    fn byte_index(&self, char_pos: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_pos)
            .map(|(i, _)| i)
            .unwrap_or(self.text.len())
    }

    fn find_prev_word_boundary(&self, from: usize) -> usize {
        let chars: Vec<char> = self.text.chars().collect();
        let mut pos = from;

        while pos > 0 && chars[pos - 1].is_whitespace() {
            pos -= 1;
        }
        while pos > 0 && !chars[pos - 1].is_whitespace() {
            pos -= 1;
        }

        pos
    }

    fn find_next_word_boundary(&self, from: usize) -> usize {
        let chars: Vec<char> = self.text.chars().collect();
        let len = chars.len();
        let mut pos = from;

        while pos < len && !chars[pos].is_whitespace() {
            pos += 1;
        }
        while pos < len && chars[pos].is_whitespace() {
            pos += 1;
        }

        pos
    }

    /// Delete chars in `start..end` and park the caret at `start`
    fn delete_range(&mut self, start: usize, end: usize) -> bool {
        if start >= end || end > self.char_count() {
            return false;
        }

        let byte_start = self.byte_index(start);
        let byte_end = self.byte_index(end);
        self.text.drain(byte_start..byte_end);
        self.cursor_position = start;
        true
    }

    fn delete_before_cursor(&mut self) -> bool {
        if self.cursor_position == 0 {
            return false;
        }
        self.delete_range(self.cursor_position - 1, self.cursor_position)
    }

    fn delete_at_cursor(&mut self) -> bool {
        let pos = self.cursor_position;
        self.delete_range(pos, pos + 1)
    }

    fn insert_char(&mut self, c: char) {
        let byte_pos = self.byte_index(self.cursor_position);
        self.text.insert(byte_pos, c);
        self.cursor_position += 1;
    }

    /// Text split around the caret. When `show_cursor` is false the text is
    /// returned as a single raw span.
    pub fn render_cursor_spans(&self, show_cursor: bool, cursor_style: Style) -> Vec<Span<'_>> {
        if !show_cursor {
            return vec![Span::raw(self.text.as_str())];
        }

        let split = self.byte_index(self.cursor_position);
        let (before, rest) = self.text.split_at(split);
        let mut rest_chars = rest.chars();
        let under_cursor = rest_chars.next();
        let after = rest_chars.as_str();

        let mut spans = Vec::with_capacity(3);
        if !before.is_empty() {
            spans.push(Span::raw(before));
        }
        match under_cursor {
            Some(c) => spans.push(Span::styled(c.to_string(), cursor_style)),
            None => spans.push(Span::styled(" ", cursor_style)),
        }
        if !after.is_empty() {
            spans.push(Span::raw(after));
        }
        spans
    }

    /// Apply an editing key. Returns true when the text changed.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('a') => {
                    self.cursor_position = 0;
                    false
                }
                KeyCode::Char('e') => {
                    self.cursor_position = self.char_count();
                    false
                }
                KeyCode::Char('b') => {
                    self.cursor_position = self.cursor_position.saturating_sub(1);
                    false
                }
                KeyCode::Char('f') => {
                    self.set_cursor_position(self.cursor_position + 1);
                    false
                }
                KeyCode::Char('h') => self.delete_before_cursor(),
                KeyCode::Char('d') => self.delete_at_cursor(),
                KeyCode::Char('w') => {
                    let start = self.find_prev_word_boundary(self.cursor_position);
                    self.delete_range(start, self.cursor_position)
                }
                KeyCode::Char('u') => self.delete_range(0, self.cursor_position),
                KeyCode::Char('k') => {
                    let len = self.char_count();
                    self.delete_range(self.cursor_position, len)
                }
                _ => false,
            };
        }

        if key.modifiers.contains(KeyModifiers::ALT) {
            match key.code {
                KeyCode::Char('b') => {
                    self.cursor_position = self.find_prev_word_boundary(self.cursor_position);
                }
                KeyCode::Char('f') => {
                    self.cursor_position = self.find_next_word_boundary(self.cursor_position);
                }
                _ => {}
            }
            return false;
        }

        match key.code {
            KeyCode::Char(c) => {
                self.insert_char(c);
                true
            }
            KeyCode::Backspace => self.delete_before_cursor(),
            KeyCode::Delete => self.delete_at_cursor(),
            KeyCode::Left => {
                self.cursor_position = self.cursor_position.saturating_sub(1);
                false
            }
            KeyCode::Right => {
                self.set_cursor_position(self.cursor_position + 1);
                false
            }
            KeyCode::Home => {
                self.cursor_position = 0;
                false
            }
            KeyCode::End => {
                self.cursor_position = self.char_count();
                false
            }
            _ => false,
        }
    }
}
