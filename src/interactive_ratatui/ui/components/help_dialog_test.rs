#[cfg(test)]
mod tests {
    use super::super::Component;
    use super::super::help_dialog::*;
    use crate::interactive_ratatui::ui::events::Message;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::{Terminal, backend::TestBackend, buffer::Buffer};

    fn buffer_contains(buffer: &Buffer, text: &str) -> bool {
        let area = buffer.area;
        (0..area.height).any(|y| {
            let line: String = (0..area.width)
                .map(|x| buffer[(x, y)].symbol().to_string())
                .collect();
            line.contains(text)
        })
    }

    #[test]
    fn test_any_key_closes() {
        let mut dialog = HelpDialog::new();
        for code in [KeyCode::Char('q'), KeyCode::Enter, KeyCode::Esc, KeyCode::F(1)] {
            let msg = dialog.handle_key(KeyEvent::new(code, KeyModifiers::empty()));
            assert!(matches!(msg, Some(Message::CloseHelp)));
        }
    }

    #[test]
    fn test_render_lists_bindings() {
        let mut dialog = HelpDialog::new();
        let backend = TestBackend::new(100, 40);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| dialog.render(f, f.area())).unwrap();
        let buffer = terminal.backend().buffer();

        assert!(buffer_contains(buffer, "Help"));
        assert!(buffer_contains(buffer, "Ctrl+T"));
        assert!(buffer_contains(buffer, "Toggle light/dark theme"));
        assert!(buffer_contains(buffer, "Press any key to close"));
    }

    #[test]
    fn test_render_in_tiny_area_does_not_panic() {
        let mut dialog = HelpDialog::new();
        let backend = TestBackend::new(3, 2);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| dialog.render(f, f.area())).unwrap();
    }
}
